// ABOUTME: HTTP surface of the agent: invocation and health routes
// ABOUTME: Builds the axum router with request tracing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the Food Lens agent

/// Health check and readiness routes
pub mod health;
/// Invocation route
pub mod invoke;

pub use health::{AdapterStatus, HealthRoutes, Readiness};
pub use invoke::InvokeRoutes;

use axum::extract::Request;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info_span;

use crate::handler::InvocationHandler;

/// Full application router
pub fn router(handler: InvocationHandler, readiness: Readiness) -> Router {
    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri()
        )
    });

    Router::new()
        .merge(InvokeRoutes::routes(handler))
        .merge(HealthRoutes::routes(readiness))
        .layer(trace_layer)
}
