use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::error::SyncError;

/// Top-level configuration, loaded once per run and immutable after.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub notes: NotesConfig,
    pub storage: StorageConfig,
}

/// Note-server credentials and target note path.
#[derive(Debug, Deserialize, Clone)]
pub struct NotesConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// `"container/title"` or bare `"title"`.
    #[serde(default = "default_note_path")]
    pub note_path: String,
    /// Optional Host-header override for origin-checking proxies.
    #[serde(default)]
    pub server_host: String,
    #[serde(default = "default_notes_timeout")]
    pub timeout_secs: u64,
}

/// Storage CRUD API endpoint receiving the ingested entries.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_storage_timeout")]
    pub timeout_secs: u64,
}

fn default_note_path() -> String {
    "ingest/todo.txt".to_string()
}
fn default_notes_timeout() -> u64 {
    15
}
fn default_storage_timeout() -> u64 {
    10
}

impl NotesConfig {
    /// Check that the required credential fields are present.
    ///
    /// Called at the start of a run; a sparse config file still *loads*,
    /// it just cannot be synced with.
    pub fn validate_required(&self) -> Result<(), SyncError> {
        if self.url.trim().is_empty() {
            return Err(SyncError::ConfigIncomplete("notes.url"));
        }
        if self.email.trim().is_empty() {
            return Err(SyncError::ConfigIncomplete("notes.email"));
        }
        if self.password.trim().is_empty() {
            return Err(SyncError::ConfigIncomplete("notes.password"));
        }
        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.notes.timeout_secs == 0 {
        anyhow::bail!("notes.timeout_secs must be > 0");
    }
    if config.storage.timeout_secs == 0 {
        anyhow::bail!("storage.timeout_secs must be > 0");
    }

    Ok(config)
}
