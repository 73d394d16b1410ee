// ABOUTME: Health and readiness route handlers for the agent's HTTP surface
// ABOUTME: Readiness reports which adapters are configured and whether the model server answers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use food_lens_core::constants::timeouts;
use serde::Serialize;
use serde_json::{json, Value};
use tokio::time::timeout;
use tracing::warn;

use crate::config::environment::AgentConfig;
use crate::llm::LlmProvider;

/// Adapter configuration reported by `/ready`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdapterStatus {
    /// Menu service endpoint configured
    pub menu_service: bool,
    /// USDA API key present
    pub nutrition_database: bool,
    /// Web search enabled
    pub web_search: bool,
    /// Model identifier in use
    pub model: String,
}

/// State behind `/ready`
#[derive(Clone)]
pub struct Readiness {
    adapters: AdapterStatus,
    model_server: Option<Arc<dyn LlmProvider>>,
}

impl Readiness {
    /// Check `provider` on every readiness request
    #[must_use]
    pub fn with_model_server(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.model_server = Some(provider);
        self
    }
}

impl From<&AgentConfig> for Readiness {
    fn from(config: &AgentConfig) -> Self {
        Self {
            adapters: AdapterStatus {
                menu_service: config.menu.endpoint.is_some(),
                nutrition_database: config.usda.api_key.is_some(),
                web_search: config.web_search.enabled,
                model: config.llm.model.clone(),
            },
            model_server: None,
        }
    }
}

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// `/health` and `/ready`
    pub fn routes(readiness: Readiness) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/ready", get(ready_handler))
            .with_state(readiness)
    }
}

async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn ready_handler(State(readiness): State<Readiness>) -> (StatusCode, Json<Value>) {
    let mut model_reachable = None;
    if let Some(provider) = &readiness.model_server {
        model_reachable = Some(check_model_server(provider.as_ref()).await);
    }

    let (status, label) = if model_reachable == Some(false) {
        (StatusCode::SERVICE_UNAVAILABLE, "not_ready")
    } else {
        (StatusCode::OK, "ready")
    };
    let body = json!({
        "status": label,
        "adapters": readiness.adapters,
        "model_reachable": model_reachable,
        "timestamp": chrono::Utc::now().to_rfc3339()
    });
    (status, Json(body))
}

async fn check_model_server(provider: &dyn LlmProvider) -> bool {
    let budget = Duration::from_secs(timeouts::MODEL_HEALTH_CHECK_SECS);
    match timeout(budget, provider.health_check()).await {
        Ok(Ok(healthy)) => healthy,
        Ok(Err(e)) => {
            warn!(provider = provider.name(), error = %e, "Model server health check failed");
            false
        }
        Err(_) => {
            warn!(provider = provider.name(), "Model server health check timed out");
            false
        }
    }
}
