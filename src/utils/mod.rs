// ABOUTME: Utility modules for common functionality across the agent
// ABOUTME: HTTP client construction and the first-success race primitive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// HTTP client configuration and helpers
pub mod http_client;
/// Concurrent fan-out that keeps the first usable result
pub mod race;
