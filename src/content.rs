//! Structured newsletter content as returned by the model.

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Required field '{0}' is blank")]
    BlankField(&'static str),
    #[error("Content has no sections")]
    NoSections,
    #[error("Section {index} has a blank '{field}'")]
    BlankSectionField { index: usize, field: &'static str },
    #[error("Stat {index} has a blank '{field}'")]
    BlankStatField { index: usize, field: &'static str },
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentPayload {
    pub main_title: String,
    pub subtitle: String,
    pub issue_number: String,
    pub hero_label: String,
    pub hero_title: String,
    pub hero_description: String,
    pub quote_text: String,
    pub quote_author: String,
    pub sections: Vec<Section>,
    pub insight_title: String,
    pub insight_text: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub family_tips: Vec<String>,
    pub cta_title: String,
    pub cta_button: String,
    pub ps_text: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub icon: String,
    pub summary: String,
    pub content: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

impl ContentPayload {
    /// Checks the shape the renderers rely on beyond what JSON typing gives.
    ///
    /// Section and stat counts are not bounded; the renderers accept any count.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let required = [
            ("mainTitle", &self.main_title),
            ("subtitle", &self.subtitle),
            ("issueNumber", &self.issue_number),
            ("heroLabel", &self.hero_label),
            ("heroTitle", &self.hero_title),
            ("heroDescription", &self.hero_description),
            ("quoteText", &self.quote_text),
            ("quoteAuthor", &self.quote_author),
            ("insightTitle", &self.insight_title),
            ("insightText", &self.insight_text),
            ("ctaTitle", &self.cta_title),
            ("ctaButton", &self.cta_button),
            ("psText", &self.ps_text),
        ];
        if let Some((name, _)) = required.into_iter().find(|(_, value)| is_blank(value)) {
            return Err(SchemaError::BlankField(name));
        }

        if self.sections.is_empty() {
            return Err(SchemaError::NoSections);
        }
        for (index, section) in self.sections.iter().enumerate() {
            let fields = [
                ("title", &section.title),
                ("icon", &section.icon),
                ("summary", &section.summary),
                ("content", &section.content),
            ];
            if let Some((field, _)) = fields.into_iter().find(|(_, value)| is_blank(value)) {
                return Err(SchemaError::BlankSectionField { index, field });
            }
        }

        for (index, stat) in self.stats.iter().enumerate() {
            if is_blank(&stat.number) {
                return Err(SchemaError::BlankStatField {
                    index,
                    field: "number",
                });
            }
            if is_blank(&stat.label) {
                return Err(SchemaError::BlankStatField {
                    index,
                    field: "label",
                });
            }
        }

        Ok(())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
