//! HTTP client for the note-server.
//!
//! Covers the four calls the sync pipeline needs: session authentication,
//! the paginated children listing (the item catalog), raw content fetch,
//! and raw content write-back. Every call goes through one
//! [`reqwest::Client`] with the configured timeout; a timeout is treated
//! the same as any other transport failure. The optional `Host` override
//! is applied uniformly to every request.

use serde::Deserialize;
use std::time::Duration;

use crate::config::NotesConfig;
use crate::error::SyncError;

/// Opaque credential for one authenticated session. Sent as a cookie on
/// every call after authentication; server-side expiry is not tracked.
#[derive(Debug, Clone)]
pub struct SessionToken(String);

impl SessionToken {
    fn cookie(&self) -> String {
        format!("sessionId={}", self.0)
    }
}

/// One listed item in the server's flat namespace. Nothing but the
/// opaque, server-assigned name is known until the content is fetched.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize)]
struct SessionResponse {
    id: String,
}

#[derive(Deserialize)]
struct ChildrenResponse {
    #[serde(default)]
    items: Vec<CatalogEntry>,
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    cursor: String,
}

/// Client for one note-server, bound to one run's configuration.
pub struct NoteServerClient {
    http: reqwest::Client,
    base_url: String,
    host_override: String,
}

impl NoteServerClient {
    pub fn new(config: &NotesConfig) -> Result<Self, SyncError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            host_override: config.server_host.clone(),
        })
    }

    fn with_host(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.host_override.is_empty() {
            req
        } else {
            req.header("Host", &self.host_override)
        }
    }

    // ============ Authentication ============

    /// Exchange credentials for a session token via `POST /api/sessions`.
    ///
    /// Any failure here — network, HTTP status, or a response without an
    /// `id` field — is an [`SyncError::Auth`].
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SessionToken, SyncError> {
        let url = format!("{}/api/sessions", self.base_url);
        let body = serde_json::json!({ "email": email, "password": password });

        let resp = self
            .with_host(self.http.post(&url))
            .json(&body)
            .send()
            .await
            .map_err(|e| SyncError::Auth(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SyncError::Auth(format!("HTTP {} from {}", status, url)));
        }

        let session: SessionResponse = resp
            .json()
            .await
            .map_err(|e| SyncError::Auth(format!("malformed session response: {}", e)))?;
        Ok(SessionToken(session.id))
    }

    // ============ Item catalog ============

    /// List every item in the flat namespace, following the opaque cursor
    /// until the server reports no more pages.
    ///
    /// Items come back in server order, which is not guaranteed sorted.
    /// An empty first page terminates immediately with an empty vec.
    pub async fn list_children(
        &self,
        token: &SessionToken,
    ) -> Result<Vec<CatalogEntry>, SyncError> {
        let mut entries = Vec::new();
        let mut cursor = String::new();

        loop {
            let mut url = format!("{}/api/items/root:/:/children", self.base_url);
            if !cursor.is_empty() {
                url = format!("{}?cursor={}", url, cursor);
            }

            let resp = self
                .with_host(self.http.get(&url))
                .header("Cookie", token.cookie())
                .send()
                .await?;

            let status = resp.status();
            if !status.is_success() {
                return Err(SyncError::Transport(format!(
                    "HTTP {} listing items at {}",
                    status, url
                )));
            }

            let page: ChildrenResponse = resp
                .json()
                .await
                .map_err(|e| SyncError::Transport(format!("malformed listing page: {}", e)))?;

            entries.extend(page.items);
            if !page.has_more {
                break;
            }
            cursor = page.cursor;
        }

        Ok(entries)
    }

    // ============ Raw content ============

    /// Fetch an item's raw sync-format text.
    pub async fn fetch_content(
        &self,
        token: &SessionToken,
        item_name: &str,
    ) -> Result<String, SyncError> {
        let url = self.content_url(item_name);
        let resp = self
            .with_host(self.http.get(&url))
            .header("Cookie", token.cookie())
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SyncError::Transport(format!(
                "HTTP {} fetching {}",
                status, url
            )));
        }

        let bytes = resp.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).to_string())
    }

    /// Overwrite an item's content with an opaque byte payload.
    pub async fn put_content(
        &self,
        token: &SessionToken,
        item_name: &str,
        content: Vec<u8>,
    ) -> Result<(), SyncError> {
        let url = self.content_url(item_name);
        let resp = self
            .with_host(self.http.put(&url))
            .header("Cookie", token.cookie())
            .header("Content-Type", "application/octet-stream")
            .body(content)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SyncError::Transport(format!(
                "HTTP {} writing {}",
                status, url
            )));
        }
        Ok(())
    }

    fn content_url(&self, item_name: &str) -> String {
        format!("{}/api/items/root:/{}:/content", self.base_url, item_name)
    }
}
