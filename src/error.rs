//
//  restman
//  error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Error Types
//!
//! This module defines the unified error type for all client operations.
//!
//! Only failures of the HTTP exchange itself surface as [`Error`] values.
//! A response body that cannot be decoded as JSON is deliberately *not* an
//! error: the call succeeds and the decode failure is carried inside
//! [`Decoded::Failed`](crate::client::Decoded), so callers always keep the
//! status code, headers, and URL of the exchange.

use thiserror::Error;

/// Unified error type for REST client operations.
///
/// # Variants
///
/// | Variant | Description |
/// |---------|-------------|
/// | `InvalidUrl` | The base URL / path combination is not a valid URL |
/// | `Network` | The HTTP exchange failed (connect, timeout, protocol) |
/// | `Serialize` | A request body could not be serialized to JSON |
/// | `Transport` | A non-reqwest transport implementation failed |
///
/// # Example
///
/// ```rust
/// use restman::Error;
///
/// fn report(err: &Error) {
///     match err {
///         Error::Network(e) => eprintln!("network problem: {}", e),
///         other => eprintln!("request failed: {}", other),
///     }
/// }
/// ```
///
/// # Notes
///
/// - The `Network` variant converts automatically from `reqwest::Error`.
/// - Decode failures never appear here; see the module docs.
#[derive(Error, Debug)]
pub enum Error {
    /// The request URL could not be parsed.
    ///
    /// Produced when the configured base URL concatenated with the request
    /// path does not form a valid absolute URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The underlying HTTP exchange failed.
    ///
    /// Covers connection failures, timeouts, and protocol errors reported by
    /// reqwest, after any transport-level retries have been exhausted.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A request body could not be serialized to JSON.
    #[error("request body serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A custom transport implementation reported a failure.
    ///
    /// # Parameters
    ///
    /// - `0` - Description of the transport failure
    #[error("transport error: {0}")]
    Transport(String),
}
