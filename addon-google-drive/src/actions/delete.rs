//! `delete_document` action
//!
//! Soft delete: flips the Drive trashed flag, never erases content.

use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::info;

use super::parse_params;
use crate::client::DriveClient;
use crate::error::{ActionError, Result};

#[derive(Debug, Deserialize)]
pub struct DeleteDocumentParams {
    /// ID of the file to move to the trash
    #[serde(alias = "fileId")]
    pub file_id: String,
}

pub async fn delete_document(
    client: &DriveClient,
    parameters: &Map<String, Value>,
) -> Result<(Value, String)> {
    let params: DeleteDocumentParams = parse_params(parameters)?;

    if params.file_id.is_empty() {
        return Err(ActionError::Validation(
            "missing required parameter: fileId".to_string(),
        ));
    }

    let file = client.trash(&params.file_id).await?;

    info!(file_id = %file.id, "file moved to trash");

    let data = json!({
        "trashed": true,
        "file": {
            "id": file.id,
            "name": file.name,
            "trashed": file.trashed,
        },
    });

    Ok((data, "file moved to trash successfully".to_string()))
}
