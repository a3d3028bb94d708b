//! Google Drive API client
//!
//! Thin transport layer over the Drive REST API v3. Every call attaches the
//! bearer token and the configured per-request timeout; no retries happen at
//! this layer.

use bridge_traits::http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use bytes::Bytes;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::config::Credentials;
use crate::error::{ActionError, Result};
use crate::types::{DriveErrorBody, DriveFile, FilesListResponse};

/// Google Drive API base URL
pub const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";

/// Fields requested for listing entries
const LIST_FILE_FIELDS: &str = "id,name,mimeType,webViewLink,modifiedTime,trashed";

/// Fields requested for single-file metadata
const METADATA_FIELDS: &str = "id,name,size,mimeType,webViewLink,modifiedTime,trashed";

/// Drive API client
///
/// Wraps an [`HttpClient`] with Drive endpoint knowledge and maps non-2xx
/// responses onto the gateway error taxonomy (404 → not found, 403 →
/// permission denied, anything else → upstream error with the Drive-reported
/// message).
pub struct DriveClient {
    http: Arc<dyn HttpClient>,
    credentials: Credentials,
    timeout: Duration,
    base_url: String,
}

impl DriveClient {
    /// Create a client against the production Drive API
    pub fn new(http: Arc<dyn HttpClient>, credentials: Credentials, timeout: Duration) -> Self {
        Self::with_base_url(http, credentials, timeout, DRIVE_API_BASE)
    }

    /// Create a client against a custom base URL
    pub fn with_base_url(
        http: Arc<dyn HttpClient>,
        credentials: Credentials,
        timeout: Duration,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            credentials,
            timeout,
            base_url: base_url.into(),
        }
    }

    /// Authenticated GET request expecting a JSON response
    fn get(&self, url: String) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, url)
            .bearer_token(self.credentials.bearer())
            .header("Accept", "application/json")
            .timeout(self.timeout)
    }

    /// Execute a request and map non-2xx statuses onto the error taxonomy
    async fn send(&self, request: HttpRequest, file_id: Option<&str>) -> Result<HttpResponse> {
        let response = self.http.execute(request).await?;

        if response.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<DriveErrorBody>()
            .ok()
            .map(|body| body.error.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP {}", response.status));

        Err(match response.status {
            404 => ActionError::NotFound {
                file_id: file_id.unwrap_or("unknown").to_string(),
            },
            403 => ActionError::Permission(message),
            status => ActionError::Upstream { status, message },
        })
    }

    /// Body and Content-Type of a content response
    fn into_content(response: HttpResponse) -> (Bytes, String) {
        let content_type = response
            .headers
            .get("content-type")
            .or_else(|| response.headers.get("Content-Type"))
            .cloned()
            .unwrap_or_else(|| "application/octet-stream".to_string());
        (response.body, content_type)
    }

    /// List one page of a folder's children
    ///
    /// Filters by parent folder and, unless `include_trashed` is set, filters
    /// trashed files out in the query itself. Pagination uses the opaque
    /// continuation token returned by the API.
    #[instrument(skip(self), fields(folder_id = %folder_id))]
    pub async fn list_files(
        &self,
        folder_id: &str,
        page_token: Option<&str>,
        page_size: u32,
        include_trashed: bool,
    ) -> Result<(Vec<DriveFile>, Option<String>)> {
        let mut query = format!("'{}' in parents", folder_id);
        if !include_trashed {
            query.push_str(" and trashed=false");
        }

        let mut url = format!(
            "{}/files?q={}&pageSize={}&fields=nextPageToken,files({})",
            self.base_url,
            urlencoding::encode(&query),
            page_size,
            LIST_FILE_FIELDS
        );

        if let Some(token) = page_token {
            url.push_str(&format!("&pageToken={}", urlencoding::encode(token)));
        }

        let response = self.send(self.get(url), None).await?;

        let list: FilesListResponse = response
            .json()
            .map_err(|e| ActionError::Parse(format!("files list: {}", e)))?;

        debug!(count = list.files.len(), "listed folder page");

        Ok((list.files, list.next_page_token))
    }

    /// Fetch metadata for a single file
    #[instrument(skip(self), fields(file_id = %file_id))]
    pub async fn get_metadata(&self, file_id: &str) -> Result<DriveFile> {
        let url = format!(
            "{}/files/{}?fields={}",
            self.base_url, file_id, METADATA_FIELDS
        );

        let response = self.send(self.get(url), Some(file_id)).await?;

        response
            .json()
            .map_err(|e| ActionError::Parse(format!("file metadata: {}", e)))
    }

    /// Download the raw content of a native file
    #[instrument(skip(self), fields(file_id = %file_id))]
    pub async fn download_content(&self, file_id: &str) -> Result<(Bytes, String)> {
        let url = format!("{}/files/{}?alt=media", self.base_url, file_id);

        let request = HttpRequest::new(HttpMethod::Get, url)
            .bearer_token(self.credentials.bearer())
            .timeout(self.timeout);

        let response = self.send(request, Some(file_id)).await?;

        info!(bytes = response.body.len(), "downloaded file content");

        Ok(Self::into_content(response))
    }

    /// Export a Workspace document as the requested MIME type
    #[instrument(skip(self), fields(file_id = %file_id, mime_type = %mime_type))]
    pub async fn export_content(&self, file_id: &str, mime_type: &str) -> Result<(Bytes, String)> {
        let url = format!(
            "{}/files/{}/export?mimeType={}",
            self.base_url,
            file_id,
            urlencoding::encode(mime_type)
        );

        let request = HttpRequest::new(HttpMethod::Get, url)
            .bearer_token(self.credentials.bearer())
            .timeout(self.timeout);

        let response = self.send(request, Some(file_id)).await?;

        info!(bytes = response.body.len(), "exported file content");

        Ok(Self::into_content(response))
    }

    /// Move a file to the Drive trash (soft delete)
    #[instrument(skip(self), fields(file_id = %file_id))]
    pub async fn trash(&self, file_id: &str) -> Result<DriveFile> {
        let url = format!("{}/files/{}?fields=id,name,trashed", self.base_url, file_id);

        let request = HttpRequest::new(HttpMethod::Patch, url)
            .bearer_token(self.credentials.bearer())
            .header("Accept", "application/json")
            .json(&serde_json::json!({"trashed": true}))?
            .timeout(self.timeout);

        let response = self.send(request, Some(file_id)).await?;

        info!("file moved to trash");

        response
            .json()
            .map_err(|e| ActionError::Parse(format!("trash response: {}", e)))
    }
}
