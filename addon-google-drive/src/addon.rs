//! Addon facade
//!
//! One [`GoogleDriveAddon`] instance is one session: it owns the validated
//! configuration, the resolved credentials, and the usage counter. Action
//! invocations are stateless with respect to each other and may run
//! concurrently.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{instrument, warn};

use bridge_traits::http::HttpClient;

use crate::actions;
use crate::client::DriveClient;
use crate::config::{AddonConfig, Credentials};
use crate::error::{ActionError, Result};
use crate::response::{self, ActionResponse, TokenPolicy, UsageCounter};

/// The actions the gateway exposes to the host engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionName {
    ListDocuments,
    DownloadDocument,
    DeleteDocument,
}

impl FromStr for ActionName {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "list_documents" => Ok(Self::ListDocuments),
            "download_document" => Ok(Self::DownloadDocument),
            "delete_document" => Ok(Self::DeleteDocument),
            other => Err(ActionError::Validation(format!(
                "unknown action: {}",
                other
            ))),
        }
    }
}

/// A single action invocation from the host engine
#[derive(Debug, Clone)]
pub struct ActionRequest {
    pub action_name: String,
    pub parameters: Map<String, Value>,
}

impl ActionRequest {
    pub fn new(action_name: impl Into<String>, parameters: Map<String, Value>) -> Self {
        Self {
            action_name: action_name.into(),
            parameters,
        }
    }
}

/// Google Drive action gateway
pub struct GoogleDriveAddon {
    config: AddonConfig,
    client: DriveClient,
    token_policy: TokenPolicy,
    usage: UsageCounter,
}

impl std::fmt::Debug for GoogleDriveAddon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleDriveAddon").finish_non_exhaustive()
    }
}

impl GoogleDriveAddon {
    /// Create an addon instance from already-validated configuration
    pub fn new(config: AddonConfig, credentials: Credentials, http: Arc<dyn HttpClient>) -> Self {
        let client = DriveClient::new(http, credentials, config.request_timeout());
        Self {
            config,
            client,
            token_policy: TokenPolicy::default(),
            usage: UsageCounter::new(),
        }
    }

    /// Create an addon instance from the host-supplied raw configuration
    /// block and secrets map
    ///
    /// Fails with a configuration error (code 400 once normalized) before any
    /// network call is possible.
    pub fn from_raw(
        raw_config: Value,
        secrets: &HashMap<String, String>,
        http: Arc<dyn HttpClient>,
    ) -> Result<Self> {
        let config = AddonConfig::from_value(raw_config)?;
        let credentials = Credentials::from_secrets(secrets)?;
        Ok(Self::new(config, credentials, http))
    }

    /// Override the token accounting policy for this instance
    pub fn with_token_policy(mut self, policy: TokenPolicy) -> Self {
        self.token_policy = policy;
        self
    }

    /// Handle one action invocation
    ///
    /// Never fails: every outcome, including validation and upstream
    /// failures, is normalized into an [`ActionResponse`].
    #[instrument(skip(self, request), fields(action = %request.action_name))]
    pub async fn handle(&self, request: ActionRequest) -> ActionResponse {
        let action = match request.action_name.parse::<ActionName>() {
            Ok(action) => action,
            Err(error) => {
                warn!(%error, "rejected action request");
                return response::failure(&error, self.usage.snapshot());
            }
        };

        let outcome = match action {
            ActionName::ListDocuments => {
                actions::list_documents(&self.config, &self.client, &request.parameters).await
            }
            ActionName::DownloadDocument => {
                actions::download_document(&self.config, &self.client, &request.parameters).await
            }
            ActionName::DeleteDocument => {
                actions::delete_document(&self.client, &request.parameters).await
            }
        };

        match outcome {
            Ok((data, message)) => {
                let tokens = self.usage.charge(self.token_policy.step_cost(action));
                response::success(data, message, tokens)
            }
            Err(error) => {
                warn!(code = error.status_code(), %error, "action failed");
                response::failure(&error, self.usage.snapshot())
            }
        }
    }
}
