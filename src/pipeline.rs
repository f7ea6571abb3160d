use anyhow::Context;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::content::ContentPayload;
use crate::generator::ContentRequester;
use crate::render::html::{DEFAULT_TEMPLATE, HTML_SLOTS};
use crate::render::{render_html, render_markdown, Template};
use crate::shell::RunRequest;
use crate::storage::{LocalArtifacts, StorageWriter};

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub main_title: String,
    pub section_count: usize,
    pub local: LocalArtifacts,
    pub vault_path: Option<PathBuf>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📊 Newsletter generated")?;
        writeln!(f, "   Title: {}", self.main_title)?;
        writeln!(f, "   Sections: {}", self.section_count)?;
        writeln!(f, "   Saved to:")?;
        writeln!(f, "     - HTML: {}", self.local.html_path.display())?;
        write!(f, "     - Markdown: {}", self.local.markdown_path.display())?;
        if let Some(path) = &self.vault_path {
            write!(f, "\n     - Vault: {}", path.display())?;
        }
        Ok(())
    }
}

/// Loads the configured template, or the built-in one.
pub fn load_template(config: &AppConfig) -> anyhow::Result<Template> {
    let source = match config.template_path.as_deref() {
        Some(path) if !path.trim().is_empty() => {
            log::info!("using template {}", path);
            fs::read_to_string(path).with_context(|| format!("Reading template {}", path))?
        }
        _ => DEFAULT_TEMPLATE.to_string(),
    };
    Template::parse(&source).context("Parsing template")
}

/// Runs generation, rendering and storage in order, stopping at the first
/// failure. Files already written are left in place.
pub async fn run(
    config: &AppConfig,
    storage: &StorageWriter,
    request: &RunRequest,
) -> anyhow::Result<RunSummary> {
    // Check the template before calling the model.
    let template = load_template(config)?;
    template
        .require(HTML_SLOTS)
        .context("Checking template slots")?;
    let requester =
        ContentRequester::new(config, &request.api_key).context("Building content requester")?;

    log::info!("[1/4] generating content...");
    let payload = requester
        .generate_content(&request.topic)
        .await
        .context("Generating content")?;

    publish(&payload, &template, storage, request)
}

/// Renders both documents from `payload`, saves them locally and, when a vault
/// folder was requested, saves the Markdown into the vault.
pub fn publish(
    payload: &ContentPayload,
    template: &Template,
    storage: &StorageWriter,
    request: &RunRequest,
) -> anyhow::Result<RunSummary> {
    log::info!("[2/4] rendering HTML...");
    let html = render_html(payload, template).context("Rendering HTML")?;

    log::info!("[3/4] rendering Markdown...");
    let markdown = render_markdown(payload);

    log::info!("[4/4] saving files to {}...", storage.output_dir().display());
    let local = storage
        .persist_local(&request.topic, &html, &markdown)
        .context("Saving to local output directory")?;

    let vault_path = match request.vault_folder.as_deref() {
        Some(folder) => Some(
            storage
                .persist_external(folder, &request.topic, &markdown)
                .context("Saving to vault")?,
        ),
        None => None,
    };

    Ok(RunSummary {
        main_title: payload.main_title.clone(),
        section_count: payload.sections.len(),
        local,
        vault_path,
    })
}
