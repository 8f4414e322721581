//
//  restman
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authorization Token Providers
//!
//! This module defines how outgoing requests obtain their `Authorization`
//! header value.
//!
//! The client never stores credentials itself. Instead it holds an
//! [`AuthTokenProvider`] and asks it for a token at call time, so rotating
//! credentials (refreshed OAuth tokens, short-lived service tokens) are
//! picked up without rebuilding the client.
//!
//! # Example
//!
//! ```rust
//! use restman::auth::{AuthTokenProvider, StaticTokenProvider};
//!
//! let provider = StaticTokenProvider::new("Bearer my-token");
//! assert_eq!(provider.authorization_token(), "Bearer my-token");
//! ```

/// Source of the `Authorization` header value for outgoing requests.
///
/// Implementations must be `Send + Sync` because a single client instance is
/// shared across concurrent calls.
///
/// The returned string is used verbatim as the header value, so it should
/// include the scheme (e.g. `"Bearer <token>"`).
///
/// # Example
///
/// ```rust
/// use restman::auth::AuthTokenProvider;
///
/// struct EnvTokenProvider;
///
/// impl AuthTokenProvider for EnvTokenProvider {
///     fn authorization_token(&self) -> String {
///         format!("Bearer {}", std::env::var("API_TOKEN").unwrap_or_default())
///     }
/// }
/// ```
pub trait AuthTokenProvider: Send + Sync {
    /// Returns the value to send in the `Authorization` header.
    ///
    /// Called once per request, immediately before the request is built.
    fn authorization_token(&self) -> String;
}

/// A provider that always returns the same fixed token.
///
/// Useful for personal access tokens, API keys that never rotate, and as a
/// test double.
///
/// # Example
///
/// ```rust
/// use restman::auth::{AuthTokenProvider, StaticTokenProvider};
///
/// let provider = StaticTokenProvider::new("Bearer abc123");
/// assert_eq!(provider.authorization_token(), "Bearer abc123");
/// ```
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    /// The fixed header value returned for every request.
    token: String,
}

impl StaticTokenProvider {
    /// Creates a provider returning `token` for every request.
    ///
    /// # Parameters
    ///
    /// * `token` - The full `Authorization` header value, scheme included
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl AuthTokenProvider for StaticTokenProvider {
    fn authorization_token(&self) -> String {
        self.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_provider_returns_constant_token() {
        let provider = StaticTokenProvider::new("Bearer ....");
        assert_eq!(provider.authorization_token(), "Bearer ....");
        // Stable across calls
        assert_eq!(provider.authorization_token(), "Bearer ....");
    }
}
