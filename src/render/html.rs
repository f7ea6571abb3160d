use super::template::{SlotValues, Template};
use super::RenderError;
use crate::content::{ContentPayload, Section, Stat};

/// The newsletter template shipped with the binary.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/newsletter.html");

/// Slots every HTML template must define.
pub const HTML_SLOTS: [&str; 17] = [
    "main_title",
    "subtitle",
    "issue_number",
    "hero_label",
    "hero_title",
    "hero_description",
    "quote_text",
    "quote_author",
    "sections_heading",
    "summary_cards",
    "insight_title",
    "insight_text",
    "stats",
    "cta_title",
    "cta_button",
    "family_tips",
    "ps_text",
];

const SUMMARY_CARD_LIMIT: usize = 3;
const STATS_GRID_SIZE: usize = 3;

pub fn render_html(payload: &ContentPayload, template: &Template) -> Result<String, RenderError> {
    template.require(HTML_SLOTS)?;

    let mut values = SlotValues::new();
    values
        .set("main_title", payload.main_title.as_str())
        .set("subtitle", payload.subtitle.as_str())
        .set("issue_number", payload.issue_number.as_str())
        .set("hero_label", payload.hero_label.as_str())
        .set("hero_title", payload.hero_title.as_str())
        .set("hero_description", payload.hero_description.as_str())
        .set("quote_text", payload.quote_text.as_str())
        .set("quote_author", payload.quote_author.as_str())
        .set(
            "sections_heading",
            format!("{} Ways to Start Today", payload.sections.len()),
        )
        .set("summary_cards", summary_cards(&payload.sections))
        .set("insight_title", payload.insight_title.as_str())
        .set("insight_text", payload.insight_text.as_str())
        .set("cta_title", payload.cta_title.as_str())
        .set("cta_button", payload.cta_button.as_str())
        .set("ps_text", payload.ps_text.as_str());

    // Unbound slots keep the template's default content.
    if payload.stats.len() == STATS_GRID_SIZE {
        values.set("stats", stats_grid(&payload.stats));
    } else {
        log::warn!(
            "expected {} stats, got {}; keeping template stats",
            STATS_GRID_SIZE,
            payload.stats.len()
        );
    }
    if !payload.family_tips.is_empty() {
        values.set("family_tips", tips_list(&payload.family_tips));
    }

    template.render(&values)
}

fn summary_cards(sections: &[Section]) -> String {
    let cards = sections
        .iter()
        .take(SUMMARY_CARD_LIMIT)
        .map(|section| {
            format!(
                r#"
                <div class="column-card">
                    <div class="column-icon">{}</div>
                    <div class="column-title">{}</div>
                    <p class="column-text">
                        {}
                    </p>
                </div>"#,
                section.icon, section.title, section.summary
            )
        })
        .collect::<String>();
    format!("{}\n            ", cards)
}

fn stats_grid(stats: &[Stat]) -> String {
    let items = stats
        .iter()
        .map(|stat| {
            format!(
                r#"
                <div class="stat-item">
                    <div class="stat-number">{}</div>
                    <div class="stat-label">{}</div>
                </div>"#,
                stat.number, stat.label
            )
        })
        .collect::<String>();
    format!("{}\n            ", items)
}

fn tips_list(tips: &[String]) -> String {
    let items = tips
        .iter()
        .map(|tip| format!("\n                    <li>{}</li>", tip))
        .collect::<String>();
    format!(
        "\n                <ul>{}\n                </ul>\n            ",
        items
    )
}
