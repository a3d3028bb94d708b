//! Response envelope and token-usage accounting
//!
//! Every invocation, success or failure, terminates in exactly one
//! [`ActionResponse`]. The normalizer is the only place errors become codes
//! and messages, so nothing above it ever leaks a raw failure to the host.

use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::addon::ActionName;
use crate::error::ActionError;

/// Token usage accounting for one invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUsage {
    /// Tokens charged for this step
    pub step_amount: u64,

    /// Accumulated total for the addon instance
    pub total_current_amount: u64,
}

/// Action-specific payload wrapper
#[derive(Debug, Clone, Serialize)]
pub struct ActionOutput {
    pub data: Value,
}

/// Standard response envelope consumed by the host engine
#[derive(Debug, Clone, Serialize)]
pub struct ActionResponse {
    pub output: ActionOutput,
    pub tokens: TokenUsage,
    pub message: String,
    pub code: u16,
}

impl ActionResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }
}

/// Per-action step costs
///
/// The accounting formula is a policy choice of the host engine, not derived
/// from observable Drive usage; hosts can override the defaults per instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPolicy {
    pub list_documents: u64,
    pub download_document: u64,
    pub delete_document: u64,
}

impl Default for TokenPolicy {
    fn default() -> Self {
        Self {
            list_documents: 200,
            download_document: 150,
            delete_document: 100,
        }
    }
}

impl TokenPolicy {
    /// Step cost for one successful action
    pub fn step_cost(&self, action: ActionName) -> u64 {
        match action {
            ActionName::ListDocuments => self.list_documents,
            ActionName::DownloadDocument => self.download_document,
            ActionName::DeleteDocument => self.delete_document,
        }
    }
}

/// Monotonic token-usage counter owned by one addon instance
///
/// Updated atomically so concurrent invocations never lose a charge; reset
/// only by recreating the instance.
#[derive(Debug, Default)]
pub struct UsageCounter {
    total: AtomicU64,
}

impl UsageCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Charge a successful step and return the usage record for the envelope
    pub fn charge(&self, step: u64) -> TokenUsage {
        let total = self.total.fetch_add(step, Ordering::Relaxed) + step;
        TokenUsage {
            step_amount: step,
            total_current_amount: total,
        }
    }

    /// Usage record for a failed step: nothing charged, current total reported
    pub fn snapshot(&self) -> TokenUsage {
        TokenUsage {
            step_amount: 0,
            total_current_amount: self.total.load(Ordering::Relaxed),
        }
    }
}

/// Wrap a successful handler payload into the envelope
pub fn success(data: Value, message: impl Into<String>, tokens: TokenUsage) -> ActionResponse {
    ActionResponse {
        output: ActionOutput { data },
        tokens,
        message: message.into(),
        code: 200,
    }
}

/// Wrap a failure into the envelope with its designated status code
pub fn failure(error: &ActionError, tokens: TokenUsage) -> ActionResponse {
    ActionResponse {
        output: ActionOutput {
            data: Value::Object(Map::new()),
        },
        tokens,
        message: error.to_string(),
        code: error.status_code(),
    }
}
