//
//  restman
//  transport/http.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Reqwest-Backed Transport
//!
//! The real [`Transport`] implementation. One call maps to one HTTP exchange
//! through a shared [`reqwest::Client`], plus transparent retries on connect
//! and timeout failures for idempotent methods.

use reqwest::{Client, Method};
use url::Url;

use super::{RawRequest, RawResponse, Transport, TransportConfig};
use crate::client::ParamMap;
use crate::error::Error;

/// Methods safe to retry after a connect or timeout failure.
///
/// POST and PATCH are excluded: a timed-out write may already have been
/// applied by the server, so retrying risks duplicating it.
fn is_idempotent(method: &Method) -> bool {
    matches!(
        method.as_str(),
        "GET" | "HEAD" | "OPTIONS" | "PUT" | "DELETE"
    )
}

/// [`Transport`] implementation backed by [`reqwest`].
///
/// The underlying client is built once with the configured timeout and a
/// `restman/<version>` user agent, and is cheap to share: cloning or wrapping
/// in `Arc` reuses the same connection pool.
///
/// # Behavior
///
/// - `default_query` parameters from [`TransportConfig`] are appended to
///   every request, before per-request parameters.
/// - Connect and timeout failures are retried up to `max_retries` times,
///   but only for idempotent methods (GET/HEAD/OPTIONS/PUT/DELETE).
/// - Non-2xx statuses are returned in [`RawResponse::status`], never as
///   errors.
/// - An empty response body is surfaced as `None`.
///
/// # Example
///
/// ```rust,no_run
/// use restman::transport::{ReqwestTransport, TransportConfig};
///
/// let transport = ReqwestTransport::new()?;
/// // or with explicit settings:
/// let configured = ReqwestTransport::with_config(TransportConfig {
///     max_retries: 0,
///     ..TransportConfig::default()
/// })?;
/// # Ok::<(), restman::Error>(())
/// ```
pub struct ReqwestTransport {
    /// Shared HTTP client, holds the connection pool.
    http: Client,
    /// Settings fixed at construction.
    config: TransportConfig,
}

impl ReqwestTransport {
    /// Creates a transport with [`TransportConfig::default`] settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client could not be built.
    pub fn new() -> Result<Self, Error> {
        Self::with_config(TransportConfig::default())
    }

    /// Creates a transport with explicit settings.
    ///
    /// # Parameters
    ///
    /// * `config` - Timeout, retry count, and default query parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client could not be built.
    pub fn with_config(config: TransportConfig) -> Result<Self, Error> {
        let http = Client::builder()
            .user_agent(format!("restman/{}", crate::VERSION))
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, config })
    }

    /// Builds a fresh request builder for one attempt.
    ///
    /// Builders are consumed by `send`, so each retry rebuilds from the raw
    /// request parts.
    fn build_request(&self, request: &RawRequest) -> Result<reqwest::RequestBuilder, Error> {
        let url = Url::parse(&request.url)?;
        let mut builder = self.http.request(request.method.clone(), url);

        if !self.config.default_query.is_empty() {
            builder = builder.query(&self.config.default_query);
        }
        if let Some(query) = &request.query {
            builder = builder.query(query);
        }
        if let Some(headers) = &request.headers {
            for (name, value) in headers {
                builder = builder.header(name, value);
            }
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        Ok(builder)
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: RawRequest) -> Result<RawResponse, Error> {
        let max_retries = if is_idempotent(&request.method) {
            self.config.max_retries
        } else {
            0
        };

        let mut attempt: u32 = 0;
        loop {
            let builder = self.build_request(&request)?;

            match builder.send().await {
                Ok(response) => {
                    let status = response.status().as_u16();
                    let url = response.url().to_string();

                    let mut headers = ParamMap::new();
                    for (name, value) in response.headers() {
                        headers.insert(
                            name.as_str().to_string(),
                            String::from_utf8_lossy(value.as_bytes()).into_owned(),
                        );
                    }

                    let text = response.text().await?;
                    let body = if text.is_empty() { None } else { Some(text) };

                    return Ok(RawResponse {
                        body,
                        status,
                        headers: Some(headers),
                        url,
                    });
                }
                Err(err) if attempt < max_retries && (err.is_connect() || err.is_timeout()) => {
                    attempt += 1;
                    tracing::debug!(
                        "Retrying {} {} after {} (attempt {}/{})",
                        request.method,
                        request.url,
                        err,
                        attempt,
                        max_retries
                    );
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
