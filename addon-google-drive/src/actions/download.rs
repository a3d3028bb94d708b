//! `download_document` action
//!
//! Fetches metadata first, enforces the size ceiling, then routes through
//! either the raw download or the Workspace export endpoint. Content is
//! returned inline as base64; nothing touches disk.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{debug, info, warn};

use super::parse_params;
use crate::client::DriveClient;
use crate::config::AddonConfig;
use crate::error::{ActionError, Result};
use crate::types::FileKind;

#[derive(Debug, Deserialize)]
pub struct DownloadDocumentParams {
    /// ID of the file to download
    #[serde(alias = "fileId")]
    pub file_id: String,

    /// Target MIME type for Workspace exports; forces the export path when set
    #[serde(default)]
    pub export_mime_type: Option<String>,
}

pub async fn download_document(
    config: &AddonConfig,
    client: &DriveClient,
    parameters: &Map<String, Value>,
) -> Result<(Value, String)> {
    let params: DownloadDocumentParams = parse_params(parameters)?;

    if params.file_id.is_empty() {
        return Err(ActionError::Validation(
            "missing required parameter: fileId".to_string(),
        ));
    }

    let metadata = client.get_metadata(&params.file_id).await?;
    let limit_bytes = config.max_download_bytes();

    // Workspace files carry no declared size; those are checked after buffering.
    if let Some(size) = metadata.size_bytes() {
        if size > limit_bytes {
            warn!(
                file_id = %params.file_id,
                size_bytes = size,
                limit_bytes,
                "declared size exceeds download ceiling"
            );
            return Err(ActionError::PayloadTooLarge {
                name: metadata.name,
                size_bytes: size,
                limit_bytes,
            });
        }
    }

    let kind = FileKind::classify(&metadata.mime_type);
    let (bytes, content_type, export_mime) = match (kind, params.export_mime_type.as_deref()) {
        (FileKind::Workspace(workspace), requested) => {
            let mime = requested.unwrap_or_else(|| workspace.default_export_mime());
            debug!(file_id = %params.file_id, mime, "exporting Workspace document");
            let (bytes, content_type) = client.export_content(&params.file_id, mime).await?;
            (bytes, content_type, Some(mime.to_string()))
        }
        (FileKind::Native, Some(mime)) => {
            debug!(file_id = %params.file_id, mime, "explicit export requested for native file");
            let (bytes, content_type) = client.export_content(&params.file_id, mime).await?;
            (bytes, content_type, Some(mime.to_string()))
        }
        (FileKind::Native, None) => {
            debug!(file_id = %params.file_id, "downloading native file");
            let (bytes, content_type) = client.download_content(&params.file_id).await?;
            (bytes, content_type, None)
        }
    };

    let size_bytes = bytes.len() as u64;
    if size_bytes > limit_bytes {
        warn!(
            file_id = %params.file_id,
            size_bytes,
            limit_bytes,
            "buffered content exceeds download ceiling"
        );
        return Err(ActionError::PayloadTooLarge {
            name: metadata.name,
            size_bytes,
            limit_bytes,
        });
    }

    let mut data = json!({
        "fileId": params.file_id,
        "content_base64": BASE64.encode(&bytes),
        "size_bytes": size_bytes,
        "content_type": content_type,
    });
    if let Some(mime) = export_mime {
        data["export_mime_type"] = Value::String(mime);
    }

    info!(file_id = %params.file_id, size_bytes, "document downloaded");

    let message = format!("file downloaded successfully ({} bytes)", size_bytes);
    Ok((data, message))
}
