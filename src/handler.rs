// ABOUTME: Invocation handler: validates the event, enriches the prompt, runs the envelope
// ABOUTME: Maps the outcome to a {statusCode, body} response document (200/400/500)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Invocation Handler
//!
//! Event: `{"prompt": "...", "context": {"restaurantId", "dishId", "dishName", "menuApiEndpoint"}}`.
//!
//! | Outcome | Status | Body |
//! |---|---|---|
//! | answer or timeout fallback | 200 | `{"response", "context"}` |
//! | missing or empty prompt | 400 | `{"error": "Missing prompt in request"}` |
//! | agent failure | 500 | `{"error": "Internal server error: <description>"}` |

use std::sync::Arc;
use std::time::Instant;

use food_lens_core::constants::messages;
use food_lens_core::errors::AppError;
use food_lens_core::models::RestaurantContext;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use crate::agent::AgentRuntime;
use crate::envelope::{EnvelopeOutcome, RequestEnvelope};
use crate::llm::enrich_prompt;
use crate::logging::AppLogger;

/// Response document returned for every invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    /// HTTP-style status code
    pub status_code: u16,
    /// Response body
    pub body: Value,
}

impl InvocationResponse {
    /// 200 with the answer and the echoed context
    #[must_use]
    pub fn ok(response: &str, context: Value) -> Self {
        Self {
            status_code: 200,
            body: json!({ "response": response, "context": context }),
        }
    }

    /// 400 for an event without a prompt
    #[must_use]
    pub fn missing_prompt() -> Self {
        Self {
            status_code: 400,
            body: json!({ "error": messages::MISSING_PROMPT }),
        }
    }

    /// 500 with a short description of the failure
    #[must_use]
    pub fn internal_error(error: &AppError) -> Self {
        Self {
            status_code: 500,
            body: json!({
                "error": format!("{}: {}", messages::INTERNAL_ERROR_PREFIX, error.code.description())
            }),
        }
    }
}

/// Invocation handler
#[derive(Clone)]
pub struct InvocationHandler {
    agent: Arc<dyn AgentRuntime>,
    envelope: RequestEnvelope,
}

impl InvocationHandler {
    /// Handler over an agent runtime and an envelope
    #[must_use]
    pub fn new(agent: Arc<dyn AgentRuntime>, envelope: RequestEnvelope) -> Self {
        Self { agent, envelope }
    }

    /// Handle one invocation event
    pub async fn handle(&self, event: &Value) -> InvocationResponse {
        let request_id = Uuid::new_v4().to_string();
        let span = info_span!("invocation", request_id = %request_id);
        let started = Instant::now();

        let response = self.process(&request_id, event).instrument(span).await;

        let elapsed_ms = started.elapsed().as_millis() as u64;
        AppLogger::log_invocation(&request_id, response.status_code, elapsed_ms);
        response
    }

    async fn process(&self, request_id: &str, event: &Value) -> InvocationResponse {
        let Some(prompt) = extract_prompt(event) else {
            info!("Rejecting event without a prompt");
            return InvocationResponse::missing_prompt();
        };

        let raw_context = event.get("context").cloned().unwrap_or_else(|| json!({}));
        let context = RestaurantContext::from_value(&raw_context);
        let enriched = enrich_prompt(prompt, &context);
        info!(
            restaurant_id = context.restaurant_id.as_deref(),
            dish_id = context.dish_id.as_deref(),
            "Processing prompt"
        );

        let outcome = self
            .envelope
            .ask(prompt, self.agent.respond(request_id, &enriched, &context))
            .await;

        match outcome {
            EnvelopeOutcome::Answer(text) | EnvelopeOutcome::TimedOut(text) => {
                InvocationResponse::ok(&text, raw_context)
            }
            EnvelopeOutcome::Failed(e) => {
                error!(error = %e, "Agent failed");
                InvocationResponse::internal_error(&e)
            }
        }
    }
}

/// Prompt text, when present and not blank
fn extract_prompt(event: &Value) -> Option<&str> {
    event
        .get("prompt")
        .and_then(Value::as_str)
        .filter(|p| !p.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use food_lens_core::errors::ErrorCode;

    #[test]
    fn test_extract_prompt() {
        assert_eq!(extract_prompt(&json!({"prompt": "hi"})), Some("hi"));
        assert_eq!(extract_prompt(&json!({"prompt": "   "})), None);
        assert_eq!(extract_prompt(&json!({"prompt": 5})), None);
        assert_eq!(extract_prompt(&json!({})), None);
        assert_eq!(extract_prompt(&json!("hi")), None);
    }

    #[test]
    fn test_internal_error_uses_short_description() {
        let err = AppError::new(ErrorCode::ExternalServiceUnavailable, "connection refused at 10.0.0.1");
        let response = InvocationResponse::internal_error(&err);
        assert_eq!(response.status_code, 500);
        let text = response.body["error"].as_str().unwrap();
        assert!(text.starts_with("Internal server error: "));
        assert!(!text.contains("10.0.0.1"));
    }

    #[test]
    fn test_response_serializes_status_code_camel_case() {
        let value = serde_json::to_value(InvocationResponse::missing_prompt()).unwrap();
        assert_eq!(value["statusCode"], 400);
        assert_eq!(value["body"]["error"], "Missing prompt in request");
    }
}
