pub mod extract;
pub mod prompt;

use anyhow::Error;

use extract::parse_content;
use prompt::{build_content_prompt, PREAMBLE};

use crate::config::AppConfig;
use crate::content::{ContentPayload, SchemaError};

use rig::agent::Agent as RigAgent;
use rig::client::CompletionClient;
use rig::completion::{Prompt, PromptError};
use rig::providers::gemini;
use rig::providers::gemini::completion::CompletionModel;

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Generation request failed: {0}")]
    Request(#[from] PromptError),
    #[error("Model response contained no content")]
    NoContent,
    #[error("Model response is not valid content JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Model response has an unexpected shape: {0}")]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub struct ContentRequester {
    agent: RigAgent<CompletionModel>,
    language: String,
}

impl ContentRequester {
    pub fn new(config: &AppConfig, api_key: &str) -> Result<Self, GenerationError> {
        let agent = Self::build(config, api_key)?;
        Ok(Self {
            agent,
            language: config.language.clone(),
        })
    }

    fn build(config: &AppConfig, api_key: &str) -> Result<RigAgent<CompletionModel>, Error> {
        let gemini_client = gemini::Client::new(api_key)?;

        Ok(gemini_client
            .agent(&config.gemini_model)
            .preamble(PREAMBLE)
            .max_tokens(config.max_tokens())
            .build())
    }

    /// Asks the model for newsletter content on `topic` in a single request.
    pub async fn generate_content(&self, topic: &str) -> Result<ContentPayload, GenerationError> {
        let prompt = build_content_prompt(topic, &self.language);
        log::info!("requesting content for topic '{}'", topic.trim());
        log::debug!("prompt is {} characters", prompt.chars().count());

        let response = self.agent.prompt(prompt).await?;
        log::debug!("response is {} characters", response.chars().count());

        let payload = parse_content(&response)?;
        log::info!(
            "received '{}' with {} sections",
            payload.main_title,
            payload.sections.len()
        );
        Ok(payload)
    }
}
