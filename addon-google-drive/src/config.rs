//! Addon configuration and credential resolution
//!
//! The host engine hands the gateway a JSON configuration block and a secrets
//! map. Both are validated fail-fast here, before any network call is made,
//! and are immutable for the lifetime of the addon instance.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use crate::error::{ActionError, Result};

/// Secrets map key holding the OAuth 2.0 bearer token
pub const ACCESS_TOKEN_SECRET: &str = "google_drive_access_token";

fn default_page_size() -> u32 {
    100
}

fn default_max_page_size() -> u32 {
    1000
}

fn default_max_download_size_mb() -> u64 {
    50
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// Validated addon configuration
///
/// Unknown keys in the raw configuration block are tolerated; missing keys
/// fall back to the documented defaults (100 / 1000 / 50 MB / 30 s).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddonConfig {
    /// Default number of files returned by a listing
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Hard cap on any requested page size
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,

    /// Download size ceiling in megabytes
    #[serde(default = "default_max_download_size_mb")]
    pub max_download_size_mb: u64,

    /// Per-request timeout in seconds for Drive API calls
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for AddonConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            max_download_size_mb: default_max_download_size_mb(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl AddonConfig {
    /// Parse and validate a raw configuration block
    pub fn from_value(raw: serde_json::Value) -> Result<Self> {
        let config: AddonConfig = serde_json::from_value(raw).map_err(|e| {
            ActionError::Configuration(format!("malformed addon configuration: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// This checks:
    /// - All numeric fields are positive
    /// - `page_size` does not exceed `max_page_size`
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(ActionError::Configuration(
                "page_size must be a positive integer".to_string(),
            ));
        }

        if self.max_page_size == 0 {
            return Err(ActionError::Configuration(
                "max_page_size must be a positive integer".to_string(),
            ));
        }

        if self.page_size > self.max_page_size {
            return Err(ActionError::Configuration(format!(
                "page_size ({}) exceeds max_page_size ({})",
                self.page_size, self.max_page_size
            )));
        }

        if self.max_download_size_mb == 0 {
            return Err(ActionError::Configuration(
                "max_download_size_mb must be greater than 0".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(ActionError::Configuration(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Download ceiling in bytes
    pub fn max_download_bytes(&self) -> u64 {
        self.max_download_size_mb * 1024 * 1024
    }

    /// Per-request timeout for Drive API calls
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Page size actually used for a listing: the caller override when
    /// present, otherwise the configured default, clamped to `max_page_size`.
    pub fn effective_page_size(&self, requested: Option<u32>) -> u32 {
        requested.unwrap_or(self.page_size).min(self.max_page_size)
    }
}

/// Bearer token resolved from the host-supplied secrets map
///
/// Opaque and short-lived; the token is never logged and `Debug` redacts it.
#[derive(Clone)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    /// Resolve the bearer token from the secrets map
    pub fn from_secrets(secrets: &HashMap<String, String>) -> Result<Self> {
        match secrets.get(ACCESS_TOKEN_SECRET) {
            Some(token) if !token.is_empty() => Ok(Self {
                token: token.clone(),
            }),
            _ => Err(ActionError::Configuration(format!(
                "missing '{}' in secrets",
                ACCESS_TOKEN_SECRET
            ))),
        }
    }

    /// Raw token for the `Authorization: Bearer` header
    pub(crate) fn bearer(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_applied_for_absent_fields() {
        let config = AddonConfig::from_value(json!({})).unwrap();

        assert_eq!(config.page_size, 100);
        assert_eq!(config.max_page_size, 1000);
        assert_eq!(config.max_download_size_mb, 50);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_explicit_fields_override_defaults() {
        let config = AddonConfig::from_value(json!({
            "page_size": 50,
            "max_page_size": 500,
            "max_download_size_mb": 25
        }))
        .unwrap();

        assert_eq!(config.page_size, 50);
        assert_eq!(config.max_page_size, 500);
        assert_eq!(config.max_download_size_mb, 25);
    }

    #[test]
    fn test_unknown_keys_are_tolerated() {
        let config = AddonConfig::from_value(json!({
            "page_size": 10,
            "addon_name": "drive rooms"
        }))
        .unwrap();

        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_page_size_above_max_rejected() {
        let result = AddonConfig::from_value(json!({
            "page_size": 2000,
            "max_page_size": 1000
        }));

        let error = result.unwrap_err();
        assert_eq!(error.status_code(), 400);
        assert!(error.to_string().contains("max_page_size"));
    }

    #[test]
    fn test_zero_values_rejected() {
        assert!(AddonConfig::from_value(json!({"page_size": 0})).is_err());
        assert!(AddonConfig::from_value(json!({"max_page_size": 0})).is_err());
        assert!(AddonConfig::from_value(json!({"max_download_size_mb": 0})).is_err());
        assert!(AddonConfig::from_value(json!({"request_timeout_secs": 0})).is_err());
    }

    #[test]
    fn test_negative_values_rejected_at_parse() {
        let result = AddonConfig::from_value(json!({"page_size": -5}));
        assert!(matches!(
            result.unwrap_err(),
            ActionError::Configuration(_)
        ));
    }

    #[test]
    fn test_effective_page_size_clamps_override() {
        let config = AddonConfig::default();

        assert_eq!(config.effective_page_size(None), 100);
        assert_eq!(config.effective_page_size(Some(10)), 10);
        assert_eq!(config.effective_page_size(Some(5000)), 1000);
    }

    #[test]
    fn test_max_download_bytes() {
        let config = AddonConfig::from_value(json!({"max_download_size_mb": 1})).unwrap();
        assert_eq!(config.max_download_bytes(), 1_048_576);
    }

    #[test]
    fn test_credentials_resolved_from_secrets() {
        let mut secrets = HashMap::new();
        secrets.insert(ACCESS_TOKEN_SECRET.to_string(), "ya29.token".to_string());

        let credentials = Credentials::from_secrets(&secrets).unwrap();
        assert_eq!(credentials.bearer(), "ya29.token");
    }

    #[test]
    fn test_missing_access_token_rejected() {
        let error = Credentials::from_secrets(&HashMap::new()).unwrap_err();
        assert_eq!(error.status_code(), 400);
        assert!(error.to_string().contains(ACCESS_TOKEN_SECRET));
    }

    #[test]
    fn test_empty_access_token_rejected() {
        let mut secrets = HashMap::new();
        secrets.insert(ACCESS_TOKEN_SECRET.to_string(), String::new());

        assert!(Credentials::from_secrets(&secrets).is_err());
    }

    #[test]
    fn test_credentials_debug_redacts_token() {
        let mut secrets = HashMap::new();
        secrets.insert(ACCESS_TOKEN_SECRET.to_string(), "super-secret".to_string());

        let credentials = Credentials::from_secrets(&secrets).unwrap();
        let debug = format!("{:?}", credentials);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
