//
//  restman
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Demonstration entry point: issues one GET to `/test` through the mock
//! transport and prints the decoded result. No network access involved.

use std::sync::Arc;

use anyhow::Result;
use serde::Deserialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use restman::transport::MockTransport;
use restman::{RestClient, StaticTokenProvider};

/// Shape of the demo endpoint's reply. All fields optional, so the mock's
/// default `{}` body decodes successfully.
#[derive(Debug, Deserialize)]
struct SampleResponse {
    status: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let client = RestClient::new(
        "https://jdenco.free.beeceptor.com",
        Arc::new(MockTransport::new()),
        Arc::new(StaticTokenProvider::new("Bearer ....")),
    );

    let result: restman::Response<SampleResponse> = client.get("/test", None).await?;

    println!("GET {} -> HTTP {}", result.url, result.status);
    match result.body() {
        Some(sample) => println!(
            "status field: {}",
            sample.status.as_deref().unwrap_or("no-status")
        ),
        None => println!("body did not decode"),
    }

    Ok(())
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("RESTMAN_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
