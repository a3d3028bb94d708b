//! # Host Bridge Traits
//!
//! Platform abstraction traits for the Drive action gateway.
//!
//! ## Overview
//!
//! This crate defines the contract between the gateway core and whatever
//! transport the host environment provides. The gateway only ever talks to
//! the network through [`HttpClient`](http::HttpClient), which keeps every
//! API-touching code path testable with a stub implementation.
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type.
//! Implementations should:
//!
//! - Convert transport-specific errors to `BridgeError`
//! - Distinguish timeouts from connection failures
//! - Provide actionable error messages without leaking credentials
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` bounds to support safe concurrent
//! usage across async tasks.
//!
//! ## Examples
//!
//! ### Implementing HttpClient
//!
//! ```ignore
//! use bridge_traits::http::{HttpClient, HttpRequest, HttpResponse};
//! use bridge_traits::error::Result;
//! use async_trait::async_trait;
//!
//! pub struct MyHttpClient {
//!     client: reqwest::Client,
//! }
//!
//! #[async_trait]
//! impl HttpClient for MyHttpClient {
//!     async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
//!         // Implementation
//!         todo!()
//!     }
//! }
//! ```

pub mod error;
pub mod http;

pub use error::BridgeError;
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
