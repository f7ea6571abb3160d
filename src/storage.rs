use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::{Component, Path, PathBuf};

const ILLEGAL_FILE_NAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("NEWSDESK_VAULT_DIR must be set to save into a vault")]
    VaultNotConfigured,
    #[error("Vault folder must be a relative path inside the vault: '{0}'")]
    InvalidVaultFolder(String),
    #[error("Vault directory unavailable: {path}: {reason}")]
    VaultUnavailable { path: String, reason: String },
    #[error("Creating directory {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },
    #[error("Writing {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

#[derive(Deserialize, Debug, Clone)]
pub struct StorageConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    pub vault_dir: Option<String>,
    pub vault_folder: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            vault_dir: None,
            vault_folder: None,
        }
    }
}

fn default_output_dir() -> String {
    "News Completion".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalArtifacts {
    pub html_path: PathBuf,
    pub markdown_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct StorageWriter {
    output_dir: PathBuf,
    vault_root: Option<PathBuf>,
}

impl StorageWriter {
    /// Builds a writer. A configured vault root must already exist and be
    /// writable.
    pub fn new(config: StorageConfig) -> Result<Self, StorageError> {
        let vault_root = config
            .vault_dir
            .map(|dir| dir.trim().to_string())
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);
        if let Some(root) = vault_root.as_ref() {
            check_vault_root(root)?;
        }
        Ok(Self {
            output_dir: PathBuf::from(config.output_dir),
            vault_root,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn vault_root(&self) -> Option<&Path> {
        self.vault_root.as_deref()
    }

    pub fn persist_local(
        &self,
        topic: &str,
        html: &str,
        markdown: &str,
    ) -> Result<LocalArtifacts, StorageError> {
        self.persist_local_at(topic, html, markdown, Utc::now())
    }

    pub fn persist_local_at(
        &self,
        topic: &str,
        html: &str,
        markdown: &str,
        now: DateTime<Utc>,
    ) -> Result<LocalArtifacts, StorageError> {
        ensure_directory(&self.output_dir)?;

        let stem = file_stem(topic, now);
        let html_path = self.output_dir.join(format!("{}.html", stem));
        let markdown_path = self.output_dir.join(format!("{}.md", stem));

        write_file(&html_path, html)?;
        write_file(&markdown_path, markdown)?;

        log::info!("saved HTML to {}", html_path.display());
        log::info!("saved Markdown to {}", markdown_path.display());
        Ok(LocalArtifacts {
            html_path,
            markdown_path,
        })
    }

    pub fn persist_external(
        &self,
        folder: &str,
        topic: &str,
        markdown: &str,
    ) -> Result<PathBuf, StorageError> {
        self.persist_external_at(folder, topic, markdown, Utc::now())
    }

    /// Writes the Markdown artifact into `folder` under the vault root.
    pub fn persist_external_at(
        &self,
        folder: &str,
        topic: &str,
        markdown: &str,
        now: DateTime<Utc>,
    ) -> Result<PathBuf, StorageError> {
        let root = self
            .vault_root
            .as_ref()
            .ok_or(StorageError::VaultNotConfigured)?;
        let target = root.join(vault_folder(folder)?);
        ensure_directory(&target)?;

        let path = target.join(format!("{}.md", file_stem(topic, now)));
        write_file(&path, markdown)?;

        log::info!("saved vault copy to {}", path.display());
        Ok(path)
    }
}

/// Replaces characters that are illegal in file names with `-` and trims.
pub fn sanitize_file_name(name: &str) -> String {
    name.replace(&ILLEGAL_FILE_NAME_CHARS[..], "-")
        .trim()
        .to_string()
}

/// Sortable, filesystem-safe UTC timestamp, e.g. `2025-10-18T09-05-03`.
pub fn file_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H-%M-%S").to_string()
}

fn file_stem(topic: &str, now: DateTime<Utc>) -> String {
    format!("{}_{}", sanitize_file_name(topic), file_timestamp(now))
}

/// Accepts only plain relative folders, so the target stays under the vault root.
fn vault_folder(folder: &str) -> Result<&Path, StorageError> {
    let path = Path::new(folder.trim());
    let escapes = path.components().any(|component| {
        matches!(
            component,
            Component::Prefix(_) | Component::RootDir | Component::ParentDir
        )
    });
    if escapes || path.as_os_str().is_empty() {
        return Err(StorageError::InvalidVaultFolder(folder.to_string()));
    }
    Ok(path)
}

fn check_vault_root(root: &Path) -> Result<(), StorageError> {
    let unavailable = |reason: &str| StorageError::VaultUnavailable {
        path: root.display().to_string(),
        reason: reason.to_string(),
    };
    let metadata = fs::metadata(root).map_err(|err| unavailable(&err.to_string()))?;
    if !metadata.is_dir() {
        return Err(unavailable("not a directory"));
    }
    if metadata.permissions().readonly() {
        return Err(unavailable("read-only"));
    }
    Ok(())
}

fn ensure_directory(path: &Path) -> Result<(), StorageError> {
    fs::create_dir_all(path).map_err(|source| StorageError::CreateDir {
        path: path.display().to_string(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), StorageError> {
    fs::write(path, contents).map_err(|source| StorageError::Write {
        path: path.display().to_string(),
        source,
    })
}
