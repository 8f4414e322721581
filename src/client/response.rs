//
//  restman
//  client/response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Typed Response Wrapper
//!
//! Types carried back to callers after an exchange: [`Response`] pairs the
//! decode outcome with the status code, headers, and URL of the call.
//!
//! Decoding follows a soft-fail policy: a body that does not parse as the
//! requested type does not fail the call. The outcome is tagged explicitly
//! as [`Decoded::Value`] or [`Decoded::Failed`], so "the server answered but
//! the body didn't match" is a state callers can assert on directly instead
//! of a null to second-guess.

use std::collections::HashMap;

/// String key/value parameters, used for both headers and query strings.
///
/// APIs take `Option<&ParamMap>`: `None` means "no parameters supplied",
/// which is distinct from an empty map.
pub type ParamMap = HashMap<String, String>;

/// Why a response body could not be decoded.
///
/// Carried inside [`Decoded::Failed`]. The message is the decoder's own
/// description, preserved for logging and assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeFailure {
    /// Human-readable description of the failure.
    pub message: String,
}

impl DecodeFailure {
    /// Failure for a body that did not parse as the requested type.
    pub(crate) fn json(err: &serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }

    /// Failure for an exchange that produced no body at all.
    pub(crate) fn missing_body() -> Self {
        Self {
            message: "response contained no body".to_string(),
        }
    }
}

impl std::fmt::Display for DecodeFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Outcome of decoding a response body into the requested type.
///
/// # Variants
///
/// * `Value` - The body parsed as the requested type
/// * `Failed` - The body was absent or did not match; the call still
///   succeeded and status/headers/url are intact on the [`Response`]
///
/// # Example
///
/// ```rust
/// use restman::client::Decoded;
///
/// let decoded: Decoded<u32> = Decoded::Value(7);
/// assert_eq!(decoded.value(), Some(&7));
/// assert!(decoded.is_value());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    /// The body decoded successfully.
    Value(T),
    /// The body was absent or did not match the requested type.
    Failed(DecodeFailure),
}

impl<T> Decoded<T> {
    /// Returns the decoded value, if decoding succeeded.
    pub fn value(&self) -> Option<&T> {
        match self {
            Decoded::Value(value) => Some(value),
            Decoded::Failed(_) => None,
        }
    }

    /// Consumes the outcome and returns the decoded value, if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            Decoded::Value(value) => Some(value),
            Decoded::Failed(_) => None,
        }
    }

    /// Returns `true` if decoding succeeded.
    pub fn is_value(&self) -> bool {
        matches!(self, Decoded::Value(_))
    }

    /// Returns the failure, if decoding failed.
    pub fn failure(&self) -> Option<&DecodeFailure> {
        match self {
            Decoded::Value(_) => None,
            Decoded::Failed(failure) => Some(failure),
        }
    }
}

/// A decoded HTTP response.
///
/// Constructed once per call by the orchestrator and immutable afterwards.
/// The status code, headers, and URL reflect the raw exchange regardless of
/// whether the body decoded.
///
/// # Example
///
/// ```rust,no_run
/// use serde::Deserialize;
/// use restman::Response;
///
/// #[derive(Deserialize)]
/// struct User { name: String }
///
/// fn handle(response: Response<User>) {
///     match response.body() {
///         Some(user) => println!("fetched {}", user.name),
///         None => println!("HTTP {} but body didn't decode", response.status),
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// Decode outcome for the response body.
    pub body: Decoded<T>,
    /// HTTP status code of the exchange.
    pub status: u16,
    /// Response headers, if the transport surfaced them.
    pub headers: Option<ParamMap>,
    /// The URL the request was made against.
    pub url: String,
}

impl<T> Response<T> {
    /// Returns the decoded body, or `None` if decoding failed.
    ///
    /// Shorthand for `self.body.value()`.
    pub fn body(&self) -> Option<&T> {
        self.body.value()
    }
}
