//! `list_documents` action
//!
//! Lists the children of a folder, following the continuation token until the
//! API stops returning one or the effective page size is reached.

use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{debug, info};

use super::parse_params;
use crate::client::DriveClient;
use crate::config::AddonConfig;
use crate::error::{ActionError, Result};

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ListDocumentsParams {
    /// Target folder, the Drive root by default
    pub folder_id: String,

    /// Include files sitting in the trash
    pub include_trashed: bool,

    /// Caller override for the page size, clamped to `max_page_size`
    pub page_size: Option<u32>,
}

impl Default for ListDocumentsParams {
    fn default() -> Self {
        Self {
            folder_id: "root".to_string(),
            include_trashed: false,
            page_size: None,
        }
    }
}

pub async fn list_documents(
    config: &AddonConfig,
    client: &DriveClient,
    parameters: &Map<String, Value>,
) -> Result<(Value, String)> {
    let params: ListDocumentsParams = parse_params(parameters)?;

    if params.folder_id.is_empty() {
        return Err(ActionError::Validation(
            "folder_id must not be empty".to_string(),
        ));
    }
    if params.page_size == Some(0) {
        return Err(ActionError::Validation(
            "page_size must be a positive integer".to_string(),
        ));
    }

    let effective = config.effective_page_size(params.page_size);
    debug!(
        folder_id = %params.folder_id,
        include_trashed = params.include_trashed,
        effective,
        "listing documents"
    );

    let mut files = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let (mut page, next) = client
            .list_files(
                &params.folder_id,
                page_token.as_deref(),
                effective,
                params.include_trashed,
            )
            .await?;
        files.append(&mut page);

        match next {
            Some(token) if files.len() < effective as usize => page_token = Some(token),
            _ => break,
        }
    }

    files.truncate(effective as usize);

    let entries: Vec<Value> = files
        .iter()
        .map(|file| {
            json!({
                "id": file.id,
                "name": file.name,
                "mimeType": file.mime_type,
                "webViewLink": file.web_view_link,
                "modifiedTime": file.modified_time,
            })
        })
        .collect();

    let count = entries.len();
    info!(count, "documents listed");

    let message = format!("{} file(s) retrieved", count);
    Ok((json!({ "files": entries, "count": count }), message))
}
