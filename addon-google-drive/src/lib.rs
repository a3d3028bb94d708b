//! # Google Drive Action Gateway
//!
//! Exposes three Google Drive operations (list, download, delete) to a host
//! workflow engine through a uniform action-invocation contract.
//!
//! ## Overview
//!
//! - Validates addon configuration and secrets before any network call
//! - Authenticates each Drive API call with the session bearer token
//! - Paginates and filters folder listings via continuation tokens
//! - Enforces a download size ceiling and branches native downloads vs
//!   Workspace exports
//! - Normalizes every outcome into a single response envelope with
//!   token-usage accounting
//!
//! ## Example
//!
//! ```ignore
//! use addon_google_drive::{ActionRequest, GoogleDriveAddon};
//! use bridge_reqwest::ReqwestHttpClient;
//! use std::sync::Arc;
//!
//! let addon = GoogleDriveAddon::from_raw(raw_config, &secrets, Arc::new(ReqwestHttpClient::new()))?;
//! let response = addon.handle(ActionRequest::new("list_documents", parameters)).await;
//! assert_eq!(response.code, 200);
//! ```

pub mod actions;
pub mod addon;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod response;
pub mod types;

pub use addon::{ActionName, ActionRequest, GoogleDriveAddon};
pub use client::DriveClient;
pub use config::{AddonConfig, Credentials, ACCESS_TOKEN_SECRET};
pub use error::{ActionError, Result};
pub use response::{ActionResponse, TokenPolicy, TokenUsage, UsageCounter};
