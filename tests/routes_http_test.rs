// ABOUTME: HTTP-level tests for the agent's axum routes over a real listener
// ABOUTME: Covers POST /invoke status mirroring plus the health and readiness endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use food_lens_agent::agent::AgentRuntime;
use food_lens_agent::config::environment::AgentConfig;
use food_lens_agent::envelope::RequestEnvelope;
use food_lens_agent::errors::{AppError, AppResult, ErrorCode};
use food_lens_agent::handler::InvocationHandler;
use food_lens_agent::llm::{
    ChatRequest, ChatResponse, ChatResponseWithTools, LlmCapabilities, LlmProvider, Tool,
};
use food_lens_agent::models::RestaurantContext;
use food_lens_agent::routes::{self, Readiness};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Echoes the prompt back, or fails when asked to
struct EchoAgent;

#[async_trait]
impl AgentRuntime for EchoAgent {
    async fn respond(
        &self,
        _request_id: &str,
        prompt: &str,
        _context: &RestaurantContext,
    ) -> AppResult<String> {
        if prompt.contains("explode") {
            return Err(AppError::new(ErrorCode::InternalError, "boom"));
        }
        Ok(format!("You asked: {prompt}"))
    }
}

/// Model server that only answers health checks
struct ModelServer {
    healthy: Result<bool, ()>,
}

#[async_trait]
impl LlmProvider for ModelServer {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::text_only()
    }

    fn default_model(&self) -> &str {
        "stub-model"
    }

    async fn complete(&self, _request: &ChatRequest) -> AppResult<ChatResponse> {
        Err(AppError::new(ErrorCode::ExternalServiceUnavailable, "not a chat model"))
    }

    async fn complete_with_tools(
        &self,
        _request: &ChatRequest,
        _tools: &[Tool],
    ) -> AppResult<ChatResponseWithTools> {
        Err(AppError::new(ErrorCode::ExternalServiceUnavailable, "not a chat model"))
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.healthy
            .map_err(|()| AppError::new(ErrorCode::ExternalServiceUnavailable, "refused"))
    }
}

fn readiness_with_model_server(healthy: Result<bool, ()>) -> Readiness {
    Readiness::from(&AgentConfig::default()).with_model_server(Arc::new(ModelServer { healthy }))
}

async fn spawn_server(readiness: Readiness) -> SocketAddr {
    let handler = InvocationHandler::new(
        Arc::new(EchoAgent),
        RequestEnvelope::new(Duration::from_secs(5)),
    );
    let app = routes::router(handler, readiness);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn default_readiness() -> Readiness {
    Readiness::from(&AgentConfig::default())
}

// ============================================================================
// POST /invoke
// ============================================================================

#[tokio::test]
async fn test_invoke_success_returns_document() {
    let addr = spawn_server(default_readiness()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/invoke"))
        .json(&json!({"prompt": "Is suya spicy?", "context": {"restaurantId": "r-1"}}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let document: Value = response.json().await.unwrap();
    assert_eq!(document["statusCode"], 200);
    assert_eq!(
        document["body"]["response"],
        "You asked: Context: Restaurant ID r-1. Customer Query: Is suya spicy?"
    );
    assert_eq!(document["body"]["context"], json!({"restaurantId": "r-1"}));
}

#[tokio::test]
async fn test_invoke_missing_prompt_is_400() {
    let addr = spawn_server(default_readiness()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/invoke"))
        .json(&json!({"context": {}}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let document: Value = response.json().await.unwrap();
    assert_eq!(
        document,
        json!({"statusCode": 400, "body": {"error": "Missing prompt in request"}})
    );
}

#[tokio::test]
async fn test_invoke_invalid_json_is_400() {
    let addr = spawn_server(default_readiness()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/invoke"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_invoke_agent_failure_is_500() {
    let addr = spawn_server(default_readiness()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/invoke"))
        .json(&json!({"prompt": "please explode"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let document: Value = response.json().await.unwrap();
    assert_eq!(document["statusCode"], 500);
    assert!(document["body"]["error"]
        .as_str()
        .unwrap()
        .starts_with("Internal server error: "));
}

// ============================================================================
// Health and readiness
// ============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let addr = spawn_server(default_readiness()).await;

    let response = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "food_lens_agent");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_reports_adapters() {
    let mut config = AgentConfig::default();
    config.usda.api_key = Some("key".to_owned());
    config.web_search.enabled = false;
    let addr = spawn_server(Readiness::from(&config)).await;

    let body: Value = reqwest::get(format!("http://{addr}/ready"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "ready");
    assert_eq!(body["adapters"]["menu_service"], false);
    assert_eq!(body["adapters"]["nutrition_database"], true);
    assert_eq!(body["adapters"]["web_search"], false);
    assert_eq!(body["adapters"]["model"], "qwen2.5:14b-instruct");
    assert!(body["model_reachable"].is_null());
}

#[tokio::test]
async fn test_ready_with_reachable_model_server() {
    let addr = spawn_server(readiness_with_model_server(Ok(true))).await;

    let response = reqwest::get(format!("http://{addr}/ready")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["model_reachable"], true);
}

#[tokio::test]
async fn test_ready_is_503_when_model_server_is_down() {
    for healthy in [Ok(false), Err(())] {
        let addr = spawn_server(readiness_with_model_server(healthy)).await;

        let response = reqwest::get(format!("http://{addr}/ready")).await.unwrap();
        assert_eq!(response.status(), 503);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["status"], "not_ready");
        assert_eq!(body["model_reachable"], false);
        assert_eq!(body["adapters"]["model"], "qwen2.5:14b-instruct");
    }
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let addr = spawn_server(default_readiness()).await;
    let response = reqwest::get(format!("http://{addr}/nope")).await.unwrap();
    assert_eq!(response.status(), 404);
}
