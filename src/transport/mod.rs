//
//  restman
//  transport/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Transport Layer
//!
//! This module defines the boundary between the request orchestrator and the
//! machinery that actually moves bytes: the [`Transport`] trait performs
//! exactly one raw HTTP exchange per call, hiding connection and retry
//! mechanics from everything above it.
//!
//! ## Architecture
//!
//! - [`Transport`]: the one-exchange contract
//! - [`RawRequest`] / [`RawResponse`]: untyped request and response carriers
//! - [`TransportConfig`]: timeout, retry, and default-query configuration
//! - [`http::ReqwestTransport`]: the real implementation over reqwest
//! - [`mock::MockTransport`]: a canned-response double for tests
//!
//! A transport reports *exchange* failures only. Non-success HTTP statuses
//! are not errors at this layer; they travel back in [`RawResponse::status`]
//! so callers keep the full picture of what the server said.

use reqwest::Method;

use crate::client::ParamMap;
use crate::error::Error;

pub mod http;
pub mod mock;

pub use http::ReqwestTransport;
pub use mock::MockTransport;

use std::time::Duration;

/// One raw HTTP request, as handed to a [`Transport`].
///
/// All fields are plain data so that test doubles can record and inspect the
/// exact request the orchestrator produced.
///
/// # Fields
///
/// * `url` - The full request URL (base URL with path appended)
/// * `path` - The path component on its own, as the caller supplied it
/// * `method` - The HTTP method
/// * `body` - Optional JSON body, already serialized to a value
/// * `query` - Optional query parameters; `None` means none were supplied
/// * `headers` - Optional headers; `None` means none were supplied
#[derive(Debug, Clone)]
pub struct RawRequest {
    /// Full request URL, base URL plus path.
    pub url: String,
    /// The path component as supplied by the caller.
    pub path: String,
    /// HTTP method for the exchange.
    pub method: Method,
    /// JSON body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters, if any were supplied.
    pub query: Option<ParamMap>,
    /// Request headers, if any were supplied.
    pub headers: Option<ParamMap>,
}

/// One raw HTTP response, as returned by a [`Transport`].
///
/// The body is untyped text; decoding happens in the orchestrator. A missing
/// body is represented as `None` rather than an empty string so callers can
/// distinguish "no body" from "empty body"; the orchestrator treats both as
/// a decode failure, never a panic.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Response body text, if the exchange produced one.
    pub body: Option<String>,
    /// HTTP status code of the response.
    pub status: u16,
    /// Response headers, if the transport surfaced them.
    pub headers: Option<ParamMap>,
    /// The URL the exchange was made against.
    pub url: String,
}

/// Configuration for the real transport.
///
/// Replaces the hardcoded behavior of earlier revisions (fixed 15-second
/// timeout, fixed retry count, demo query parameters injected into every
/// request) with explicit, per-transport settings.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use restman::transport::TransportConfig;
///
/// let config = TransportConfig {
///     timeout: Duration::from_secs(5),
///     max_retries: 2,
///     default_query: vec![("full".to_string(), "1".to_string())],
/// };
/// assert_eq!(config.max_retries, 2);
/// ```
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Per-request timeout applied by the HTTP client.
    pub timeout: Duration,
    /// Maximum number of retries after a connect or timeout failure.
    ///
    /// Retries apply to idempotent methods only; POST and PATCH are never
    /// retried, since a timed-out write may already have been applied.
    pub max_retries: u32,
    /// Query parameters appended to every request, before per-request
    /// parameters. Empty by default.
    pub default_query: Vec<(String, String)>,
}

impl Default for TransportConfig {
    /// Returns the defaults: 15-second timeout, 4 retries, no default query
    /// parameters.
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            max_retries: 4,
            default_query: Vec::new(),
        }
    }
}

/// Performs exactly one raw HTTP exchange.
///
/// Implementations must be `Send + Sync`: a single transport instance is
/// shared across concurrent calls and holds no per-call state.
///
/// # Errors
///
/// Returns [`Error`] only for failures of the exchange itself (connection,
/// timeout, protocol). Non-2xx statuses are *not* errors; they are reported
/// through [`RawResponse::status`].
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Sends one request and returns the raw response.
    async fn send(&self, request: RawRequest) -> Result<RawResponse, Error>;
}
