//! Error types for the Drive action gateway
//!
//! Every failure an action can hit maps onto exactly one variant here, and
//! [`ActionError::status_code`] is the single source of truth for the HTTP
//! style code the response envelope carries.

use bridge_traits::error::BridgeError;
use thiserror::Error;

/// Drive action gateway errors
#[derive(Error, Debug)]
pub enum ActionError {
    /// Addon configuration or secrets are invalid; raised before any network call
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Bad or missing action parameters
    #[error("invalid parameters: {0}")]
    Validation(String),

    /// File does not exist or is not visible to the token
    #[error("file not found: {file_id}")]
    NotFound { file_id: String },

    /// Token lacks access to the file
    #[error("permission denied: {0}")]
    Permission(String),

    /// Download exceeds the configured size ceiling
    #[error("file '{name}' ({size_bytes} bytes) exceeds the {limit_bytes} byte download limit")]
    PayloadTooLarge {
        name: String,
        size_bytes: u64,
        limit_bytes: u64,
    },

    /// Drive API returned a non-2xx status not covered by a more specific variant
    #[error("Drive API error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    /// Drive API returned a body the gateway could not decode
    #[error("failed to parse API response: {0}")]
    Parse(String),

    /// Network or timeout failure
    #[error("request failed: {0}")]
    Transport(String),
}

impl ActionError {
    /// HTTP-style status code for the response envelope
    pub fn status_code(&self) -> u16 {
        match self {
            ActionError::Configuration(_) | ActionError::Validation(_) => 400,
            ActionError::Permission(_) => 403,
            ActionError::NotFound { .. } => 404,
            ActionError::PayloadTooLarge { .. } => 413,
            ActionError::Upstream { status, .. } => *status,
            ActionError::Parse(_) => 502,
            ActionError::Transport(_) => 503,
        }
    }
}

impl From<BridgeError> for ActionError {
    fn from(error: BridgeError) -> Self {
        ActionError::Transport(error.to_string())
    }
}

/// Result type for gateway operations
pub type Result<T> = std::result::Result<T, ActionError>;
