//! Action handlers
//!
//! One module per action. Each handler validates its parameters, orchestrates
//! [`DriveClient`](crate::client::DriveClient) calls, and returns the payload
//! plus a confirmation message; all failures bubble up as
//! [`ActionError`](crate::error::ActionError) for the normalizer.

mod delete;
mod download;
mod list;

pub use delete::delete_document;
pub use download::download_document;
pub use list::list_documents;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ActionError, Result};

/// Deserialize an action's parameter map into its typed parameter struct
pub(crate) fn parse_params<T: DeserializeOwned>(parameters: &Map<String, Value>) -> Result<T> {
    serde_json::from_value(Value::Object(parameters.clone()))
        .map_err(|e| ActionError::Validation(format!("invalid action parameters: {}", e)))
}
