// ABOUTME: Shared HTTP client construction with timeout configuration
// ABOUTME: Each adapter builds one client at construction and reuses its connection pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

/// Connect timeout applied to every outbound client
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Create a new HTTP client with a request timeout
///
/// Falls back to a default client if the builder fails (TLS backend init).
#[must_use]
pub fn create_client_with_timeout(timeout: Duration) -> Client {
    ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS).min(timeout))
        .user_agent(concat!("food-lens-agent/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}
