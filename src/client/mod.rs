//
//  restman
//  client/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Orchestrator
//!
//! This module provides [`RestClient`], the core of the crate: it combines a
//! base URL, a [`Transport`], and an [`AuthTokenProvider`] into authenticated
//! JSON calls.
//!
//! ## Architecture
//!
//! - [`RestClient`]: builds headers, dispatches through the transport,
//!   decodes the JSON body into the caller's type
//! - [`response`]: the [`Response`]/[`Decoded`] wrapper types
//! - [`resource`]: typed CRUD access to one collection path
//!
//! ## Error handling
//!
//! Transport failures propagate unmodified as [`Error`]. Decode failures do
//! not fail the call: the orchestrator logs them and returns the response
//! with [`Decoded::Failed`] in place of a body, status and headers intact.
//! Callers must check body presence rather than rely on errors for decode
//! problems.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use serde::Deserialize;
//! use restman::{RestClient, StaticTokenProvider};
//! use restman::transport::ReqwestTransport;
//!
//! #[derive(Deserialize)]
//! struct Health { status: Option<String> }
//!
//! # async fn example() -> Result<(), restman::Error> {
//! let client = RestClient::new(
//!     "https://api.example.com",
//!     Arc::new(ReqwestTransport::new()?),
//!     Arc::new(StaticTokenProvider::new("Bearer my-token")),
//! );
//!
//! let health: restman::Response<Health> = client.get("/health", None).await?;
//! println!("HTTP {}", health.status);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::AuthTokenProvider;
use crate::error::Error;
use crate::transport::{RawRequest, Transport};

/// Typed response wrapper and decode-outcome types.
pub mod response;

/// Generic CRUD accessor for one collection path.
pub mod resource;

pub use resource::Resource;
pub use response::{DecodeFailure, Decoded, ParamMap, Response};

/// Orchestrates one authenticated HTTP call and decodes its JSON body.
///
/// The client is stateless between calls: the base URL and collaborators are
/// fixed at construction and every call is an independent round trip. It is
/// safe to share one instance behind [`Arc`] across concurrent tasks.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use restman::{RestClient, StaticTokenProvider};
/// use restman::transport::ReqwestTransport;
///
/// let client = RestClient::new(
///     "https://api.example.com",
///     Arc::new(ReqwestTransport::new()?),
///     Arc::new(StaticTokenProvider::new("Bearer my-token")),
/// );
/// assert_eq!(client.base_url(), "https://api.example.com");
/// # Ok::<(), restman::Error>(())
/// ```
pub struct RestClient {
    /// Prefix for every request URL, fixed at construction.
    base_url: String,
    /// Performs the raw exchanges.
    transport: Arc<dyn Transport>,
    /// Supplies the `Authorization` header value at call time.
    auth: Arc<dyn AuthTokenProvider>,
}

impl RestClient {
    /// Creates a client from a base URL and its collaborators.
    ///
    /// # Parameters
    ///
    /// * `base_url` - Prefix for every request URL (no trailing slash)
    /// * `transport` - The transport performing raw exchanges
    /// * `auth` - The provider supplying `Authorization` header values
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn Transport>,
        auth: Arc<dyn AuthTokenProvider>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            auth,
        }
    }

    /// Returns the base URL this client was constructed with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs one authenticated call and decodes the JSON body into `T`.
    ///
    /// Builds the header set (`Authorization` from the provider plus
    /// `Accept: application/json`), appends `path` to the base URL, and
    /// hands the exchange to the transport.
    ///
    /// # Type Parameters
    ///
    /// * `T` - The type to decode the response body into
    ///
    /// # Parameters
    ///
    /// * `path` - Path appended to the base URL (should start with `/`)
    /// * `method` - The HTTP method
    /// * `body` - Optional JSON body
    /// * `query` - Optional query parameters; `None` means none
    ///
    /// # Errors
    ///
    /// Returns an error only if the transport fails (network, timeout,
    /// invalid URL). A body that does not decode as `T` (including an
    /// absent body) is *not* an error: the returned [`Response`] carries
    /// [`Decoded::Failed`] with status, headers, and URL preserved.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        method: Method,
        body: Option<serde_json::Value>,
        query: Option<&ParamMap>,
    ) -> Result<Response<T>, Error> {
        let mut headers = ParamMap::new();
        headers.insert(
            "Authorization".to_string(),
            self.auth.authorization_token(),
        );
        headers.insert("Accept".to_string(), "application/json".to_string());

        let raw = self
            .transport
            .send(RawRequest {
                url: format!("{}{}", self.base_url, path),
                path: path.to_string(),
                method,
                body,
                query: query.cloned(),
                headers: Some(headers),
            })
            .await?;

        let decoded = match &raw.body {
            Some(text) => match serde_json::from_str::<T>(text) {
                Ok(value) => Decoded::Value(value),
                Err(err) => {
                    tracing::debug!("Failed to decode response from {}: {}", raw.url, err);
                    Decoded::Failed(DecodeFailure::json(&err))
                }
            },
            None => {
                tracing::debug!("Response from {} contained no body", raw.url);
                Decoded::Failed(DecodeFailure::missing_body())
            }
        };

        Ok(Response {
            body: decoded,
            status: raw.status,
            headers: raw.headers,
            url: raw.url,
        })
    }

    /// Performs a GET request. Alias for [`request`](Self::request) with the
    /// method fixed.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&ParamMap>,
    ) -> Result<Response<T>, Error> {
        self.request(path, Method::GET, None, query).await
    }

    /// Performs a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`] if `body` cannot be serialized, or a
    /// transport error if the exchange fails.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response<T>, Error> {
        let body = serde_json::to_value(body)?;
        self.request(path, Method::POST, Some(body), None).await
    }

    /// Performs a DELETE request. Alias for [`request`](Self::request) with
    /// the method fixed.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Response<T>, Error> {
        self.request(path, Method::DELETE, None, None).await
    }

    /// Creates a typed [`Resource`] accessor scoped to `path`.
    ///
    /// The resource shares this client; dropping the resource does not
    /// affect the client or other resources built from it.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::sync::Arc;
    /// use serde::Deserialize;
    /// use restman::{Resource, RestClient, StaticTokenProvider};
    /// use restman::transport::ReqwestTransport;
    ///
    /// #[derive(Deserialize)]
    /// struct User { id: u64, name: String }
    ///
    /// let client = Arc::new(RestClient::new(
    ///     "https://api.example.com",
    ///     Arc::new(ReqwestTransport::new()?),
    ///     Arc::new(StaticTokenProvider::new("Bearer my-token")),
    /// ));
    /// let users: Resource<User, u64> = client.resource("/users");
    /// # Ok::<(), restman::Error>(())
    /// ```
    pub fn resource<T, Id>(self: &Arc<Self>, path: impl Into<String>) -> Resource<T, Id> {
        Resource::new(path, Arc::clone(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticTokenProvider;
    use crate::transport::MockTransport;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        status: Option<String>,
    }

    fn client_with(transport: Arc<MockTransport>) -> RestClient {
        RestClient::new(
            "https://api.example.test",
            transport,
            Arc::new(StaticTokenProvider::new("Bearer ....")),
        )
    }

    #[tokio::test]
    async fn test_valid_json_decodes_into_value() {
        let transport = Arc::new(MockTransport::new().with_body(r#"{"status":"ok"}"#));
        let client = client_with(Arc::clone(&transport));

        let response: Response<Sample> = client.get("/test", None).await.unwrap();

        assert_eq!(
            response.body(),
            Some(&Sample {
                status: Some("ok".to_string())
            })
        );
        assert_eq!(response.status, 200);
        assert_eq!(response.url, "https://api.example.test/test");
    }

    #[tokio::test]
    async fn test_empty_object_decodes_into_all_optional_type() {
        // Default mock body is "{}"
        let transport = Arc::new(MockTransport::new());
        let client = client_with(Arc::clone(&transport));

        let response: Response<Sample> = client.get("/test", None).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body(), Some(&Sample { status: None }));
    }

    #[tokio::test]
    async fn test_malformed_body_soft_fails_with_status_preserved() {
        let transport = Arc::new(MockTransport::new().with_body("not json at all"));
        let client = client_with(Arc::clone(&transport));

        let response: Response<Sample> = client.get("/test", None).await.unwrap();

        assert!(response.body().is_none());
        assert!(response.body.failure().is_some());
        assert_eq!(response.status, 200);
        assert_eq!(response.url, "https://api.example.test/test");
    }

    #[tokio::test]
    async fn test_absent_body_is_a_decode_failure_not_a_panic() {
        let transport = Arc::new(MockTransport::new().with_empty_body().with_status(204));
        let client = client_with(Arc::clone(&transport));

        let response: Response<Sample> = client.get("/test", None).await.unwrap();

        assert_eq!(response.status, 204);
        assert_eq!(
            response.body.failure().unwrap().message,
            "response contained no body"
        );
    }

    #[tokio::test]
    async fn test_authorization_and_accept_headers_attached() {
        let transport = Arc::new(MockTransport::new());
        let client = client_with(Arc::clone(&transport));

        let _: Response<Sample> = client.get("/test", None).await.unwrap();

        let request = transport.last_request().unwrap();
        let headers = request.headers.unwrap();
        assert_eq!(headers.get("Authorization").unwrap(), "Bearer ....");
        assert_eq!(headers.get("Accept").unwrap(), "application/json");
    }

    #[tokio::test]
    async fn test_get_builds_url_from_base_and_path() {
        let transport = Arc::new(MockTransport::new());
        let client = client_with(Arc::clone(&transport));

        let _: Response<Sample> = client.get("/users/7", None).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url, "https://api.example.test/users/7");
        assert_eq!(request.path, "/users/7");
    }

    #[tokio::test]
    async fn test_query_params_forwarded_and_absence_preserved() {
        let transport = Arc::new(MockTransport::new());
        let client = client_with(Arc::clone(&transport));

        let _: Response<Sample> = client.get("/a", None).await.unwrap();
        assert!(transport.last_request().unwrap().query.is_none());

        let mut query = ParamMap::new();
        query.insert("page".to_string(), "3".to_string());
        let _: Response<Sample> = client.get("/a", Some(&query)).await.unwrap();

        let recorded = transport.last_request().unwrap().query.unwrap();
        assert_eq!(recorded.get("page").unwrap(), "3");
    }

    #[tokio::test]
    async fn test_post_serializes_body_and_sets_method() {
        let transport = Arc::new(MockTransport::new());
        let client = client_with(Arc::clone(&transport));

        let _: Response<Sample> = client
            .post("/items", &serde_json::json!({"name": "widget"}))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.body.unwrap(), serde_json::json!({"name": "widget"}));
    }

    #[tokio::test]
    async fn test_delete_sets_method_and_no_body() {
        let transport = Arc::new(MockTransport::new());
        let client = client_with(Arc::clone(&transport));

        let _: Response<Sample> = client.delete("/items/9").await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::DELETE);
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_auth_token_read_at_call_time() {
        use std::sync::atomic::{AtomicU32, Ordering};

        struct CountingProvider(AtomicU32);
        impl AuthTokenProvider for CountingProvider {
            fn authorization_token(&self) -> String {
                let n = self.0.fetch_add(1, Ordering::SeqCst);
                format!("Bearer token-{}", n)
            }
        }

        let transport = Arc::new(MockTransport::new());
        let client = RestClient::new(
            "https://api.example.test",
            Arc::clone(&transport) as Arc<dyn Transport>,
            Arc::new(CountingProvider(AtomicU32::new(0))),
        );

        let _: Response<Sample> = client.get("/a", None).await.unwrap();
        let _: Response<Sample> = client.get("/a", None).await.unwrap();

        let requests = transport.requests();
        let header = |i: usize| {
            requests[i]
                .headers
                .as_ref()
                .unwrap()
                .get("Authorization")
                .unwrap()
                .clone()
        };
        assert_eq!(header(0), "Bearer token-0");
        assert_eq!(header(1), "Bearer token-1");
    }
}
