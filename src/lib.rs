//
//  restman
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # restman
//!
//! A thin, generic REST client wrapper. It composes an HTTP transport, an
//! authorization-token source, and JSON decoding into a small set of verb
//! methods plus a generic resource abstraction for CRUD access to a named
//! collection endpoint.
//!
//! ## Overview
//!
//! Data flows in one direction: caller → [`Resource`] (optional) →
//! [`RestClient`] → [`Transport`](transport::Transport) → network, and the
//! decoded [`Response`] travels back. Everything between the caller and the
//! wire is stateless after construction, so one client instance behind an
//! [`Arc`](std::sync::Arc) serves concurrent tasks without locking.
//!
//! ## Module Structure
//!
//! - [`client`]: the request orchestrator, response types, and the generic
//!   resource accessor
//! - [`transport`]: the one-exchange transport contract, the reqwest-backed
//!   implementation, and a canned-response mock
//! - [`auth`]: authorization-token providers
//! - [`error`]: the unified error type
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use serde::Deserialize;
//! use restman::{Resource, RestClient, StaticTokenProvider};
//! use restman::transport::ReqwestTransport;
//!
//! #[derive(Deserialize)]
//! struct User { id: u64, name: String }
//!
//! # async fn example() -> Result<(), restman::Error> {
//! let client = Arc::new(RestClient::new(
//!     "https://api.example.com",
//!     Arc::new(ReqwestTransport::new()?),
//!     Arc::new(StaticTokenProvider::new("Bearer my-token")),
//! ));
//!
//! let users: Resource<User, u64> = client.resource("/users");
//! let all = users.get_all(None).await?;
//!
//! // Decode failures do not error: check body presence explicitly.
//! match all.body() {
//!     Some(list) => println!("{} users", list.len()),
//!     None => eprintln!("HTTP {} but body didn't decode", all.status),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Only transport-level failures (connect, timeout, invalid URL) surface as
//! [`Error`]. A response body that fails to decode degrades to
//! [`Decoded::Failed`] on an otherwise successful [`Response`]; see the
//! [`client`] module docs for the full policy.

/// Request orchestrator, response types, and the generic resource accessor.
pub mod client;

/// Authorization-token providers for outgoing requests.
pub mod auth;

/// Transport contract plus the reqwest-backed and mock implementations.
pub mod transport;

/// Unified error type for client operations.
pub mod error;

pub use auth::{AuthTokenProvider, StaticTokenProvider};
pub use client::{DecodeFailure, Decoded, ParamMap, Resource, Response, RestClient};
pub use error::Error;
pub use transport::{MockTransport, ReqwestTransport, Transport, TransportConfig};

/// Crate version, reported in the transport's `User-Agent` header.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
