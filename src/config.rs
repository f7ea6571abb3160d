use crate::storage::StorageConfig;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_key: Option<String>,
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    #[serde(default, deserialize_with = "deserialize_option_u64")]
    pub max_tokens: Option<u64>,
    #[serde(default = "default_language")]
    pub language: String,
    pub template_path: Option<String>,

    #[serde(flatten)]
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(envy::prefixed("NEWSDESK_").from_env::<AppConfig>()?)
    }

    pub fn max_tokens(&self) -> u64 {
        self.max_tokens.unwrap_or(8000)
    }

    /// API key from the environment, if one is set and not blank.
    pub fn default_api_key(&self) -> Option<&str> {
        self.gemini_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

// Flattened structs receive every env value as a string.
fn deserialize_option_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    if let Some(s) = s {
        s.parse::<u64>().map(Some).map_err(serde::de::Error::custom)
    } else {
        Ok(None)
    }
}

fn default_gemini_model() -> String {
    "gemini-3.1-pro-preview".to_string()
}

fn default_language() -> String {
    "English".to_string()
}
