//
//  restman
//  transport/mock.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Mock Transport
//!
//! A [`Transport`] double that answers every request with a canned response
//! and records what it was asked to send. No network access involved, so
//! tests stay fast and deterministic.

use std::sync::Mutex;

use super::{RawRequest, RawResponse, Transport};
use crate::client::ParamMap;
use crate::error::Error;

/// Canned-response transport for tests and demos.
///
/// Defaults to status `200` with body `"{}"` and no headers. Every request
/// received is recorded and can be inspected afterwards, which is how tests
/// assert on the method, URL, headers, and query the orchestrator produced.
///
/// # Example
///
/// ```rust
/// use reqwest::Method;
/// use restman::transport::{MockTransport, RawRequest, Transport};
///
/// # tokio_test::block_on(async {
/// let transport = MockTransport::new().with_status(404).with_body("null");
/// let response = transport
///     .send(RawRequest {
///         url: "https://api.example.com/users/1".to_string(),
///         path: "/users/1".to_string(),
///         method: Method::GET,
///         body: None,
///         query: None,
///         headers: None,
///     })
///     .await
///     .unwrap();
///
/// assert_eq!(response.status, 404);
/// assert_eq!(transport.requests().len(), 1);
/// # });
/// ```
pub struct MockTransport {
    /// Status code returned for every request.
    status: u16,
    /// Body returned for every request; `None` simulates a body-less reply.
    body: Option<String>,
    /// Headers returned for every request.
    headers: Option<ParamMap>,
    /// Log of every request received, in call order.
    requests: Mutex<Vec<RawRequest>>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self {
            status: 200,
            body: Some("{}".to_string()),
            headers: None,
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl MockTransport {
    /// Creates a mock answering `200` with body `"{}"`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status code returned for every request.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Sets the body returned for every request.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Makes the mock reply with no body at all.
    ///
    /// Used to exercise the absent-body path, which the orchestrator must
    /// treat as a decode failure rather than a panic.
    pub fn with_empty_body(mut self) -> Self {
        self.body = None;
        self
    }

    /// Sets the headers returned for every request.
    pub fn with_headers(mut self, headers: ParamMap) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Returns a copy of every request received so far, in call order.
    pub fn requests(&self) -> Vec<RawRequest> {
        self.requests
            .lock()
            .expect("mock request log lock poisoned")
            .clone()
    }

    /// Returns a copy of the most recent request, if any.
    pub fn last_request(&self) -> Option<RawRequest> {
        self.requests
            .lock()
            .expect("mock request log lock poisoned")
            .last()
            .cloned()
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: RawRequest) -> Result<RawResponse, Error> {
        let url = request.url.clone();
        self.requests
            .lock()
            .expect("mock request log lock poisoned")
            .push(request);

        Ok(RawResponse {
            body: self.body.clone(),
            status: self.status,
            headers: self.headers.clone(),
            url,
        })
    }
}
