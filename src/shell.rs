//! Operator prompts.

use crate::config::AppConfig;
use inquire::validator::Validation;
use inquire::{Confirm, CustomUserError, Text};

pub const BANNER: &str = r#"
╔═══════════════════════════════════════════════════════════╗
║                                                           ║
║        📰 newsdesk: newsletter generator 📰               ║
║                                                           ║
╚═══════════════════════════════════════════════════════════╝
"#;

const DEFAULT_VAULT_FOLDER: &str = "Newsletter";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputValidationError {
    #[error("API key is required")]
    MissingApiKey,
    #[error("Topic is required")]
    MissingTopic,
    #[error("Vault folder name is required")]
    MissingVaultFolder,
}

/// Everything the operator supplies for one run, trimmed and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub api_key: String,
    pub topic: String,
    pub vault_folder: Option<String>,
}

impl RunRequest {
    pub fn new(
        api_key: &str,
        topic: &str,
        vault_folder: Option<&str>,
    ) -> Result<Self, InputValidationError> {
        let api_key = non_blank(api_key).ok_or(InputValidationError::MissingApiKey)?;
        let topic = non_blank(topic).ok_or(InputValidationError::MissingTopic)?;
        let vault_folder = match vault_folder {
            Some(folder) => {
                Some(non_blank(folder).ok_or(InputValidationError::MissingVaultFolder)?)
            }
            None => None,
        };
        Ok(Self {
            api_key,
            topic,
            vault_folder,
        })
    }
}

/// Prompts for the run parameters. The vault question is only asked when a
/// vault directory is configured.
pub fn collect(config: &AppConfig) -> anyhow::Result<RunRequest> {
    let mut api_key_prompt = Text::new("Gemini API key:")
        .with_validator(required("The API key is required!"));
    if let Some(key) = config.default_api_key() {
        api_key_prompt = api_key_prompt.with_default(key);
    }
    let api_key = api_key_prompt.prompt()?;

    let topic = Text::new("Newsletter topic:")
        .with_validator(required("The topic is required!"))
        .prompt()?;

    let vault_folder = match config.storage.vault_dir.as_deref() {
        Some(vault_dir) if !vault_dir.trim().is_empty() => {
            let save = Confirm::new(&format!("Also save into the vault at {}?", vault_dir))
                .with_default(true)
                .prompt()?;
            if save {
                let default_folder = config
                    .storage
                    .vault_folder
                    .as_deref()
                    .filter(|folder| !folder.trim().is_empty())
                    .unwrap_or(DEFAULT_VAULT_FOLDER);
                Some(
                    Text::new("Vault folder name:")
                        .with_default(default_folder)
                        .with_validator(required("The folder name is required!"))
                        .prompt()?,
                )
            } else {
                None
            }
        }
        _ => {
            log::debug!("no vault configured; skipping vault prompt");
            None
        }
    };

    Ok(RunRequest::new(
        &api_key,
        &topic,
        vault_folder.as_deref(),
    )?)
}

fn required(
    message: &'static str,
) -> impl Fn(&str) -> Result<Validation, CustomUserError> + Clone {
    move |input: &str| {
        if input.trim().is_empty() {
            Ok(Validation::Invalid(message.into()))
        } else {
            Ok(Validation::Valid)
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
