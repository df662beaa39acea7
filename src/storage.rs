//! Storage emission seam.
//!
//! The storage CRUD API is an external collaborator: the pipeline only
//! needs a `create item` call per entry, so it is abstracted behind the
//! [`StorageSink`] trait. [`HttpStorage`] is the production
//! implementation; tests substitute an in-memory recording sink.

use async_trait::async_trait;
use std::time::Duration;

use crate::config::StorageConfig;
use crate::entry::Entry;
use crate::error::SyncError;

/// Destination for ingested entries. One call per entry, no batch
/// semantics; success or failure is reported per call.
#[async_trait]
pub trait StorageSink: Send + Sync {
    async fn create_item(&self, entry: &Entry) -> Result<(), SyncError>;
}

/// HTTP implementation posting `{name, notes}` JSON to the storage API.
pub struct HttpStorage {
    http: reqwest::Client,
    base_url: String,
}

impl HttpStorage {
    pub fn new(config: &StorageConfig) -> Result<Self, SyncError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl StorageSink for HttpStorage {
    async fn create_item(&self, entry: &Entry) -> Result<(), SyncError> {
        let url = format!("{}/items", self.base_url);
        let body = serde_json::json!({ "name": entry.name, "notes": entry.notes });

        let resp = self.http.post(&url).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SyncError::Transport(format!(
                "HTTP {} creating item at {}",
                status, url
            )));
        }
        Ok(())
    }
}
