// ABOUTME: POST /invoke route: accepts an invocation event and returns the response document
// ABOUTME: The HTTP status mirrors the document's statusCode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tracing::debug;

use crate::handler::{InvocationHandler, InvocationResponse};

/// Invocation routes implementation
pub struct InvokeRoutes;

impl InvokeRoutes {
    /// `/invoke`
    pub fn routes(handler: InvocationHandler) -> Router {
        Router::new()
            .route("/invoke", post(invoke_handler))
            .with_state(handler)
    }
}

async fn invoke_handler(
    State(handler): State<InvocationHandler>,
    body: Bytes,
) -> (StatusCode, Json<InvocationResponse>) {
    // Undecodable bodies carry no prompt and get the 400 document
    let event: Value = serde_json::from_slice(&body).unwrap_or_else(|e| {
        debug!(error = %e, "Invocation body is not JSON");
        Value::Null
    });

    let response = handler.handle(&event).await;
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response))
}
