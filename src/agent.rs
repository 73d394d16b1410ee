// ABOUTME: Agent runtime: the food advisor model loop with tool dispatch
// ABOUTME: AgentRuntime is the seam the invocation handler depends on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Food Advisor Agent
//!
//! [`FoodAdvisorAgent`] sends the conversation and tool declarations to the
//! model, runs every function call the model asks for, feeds the results back
//! as tool messages, and repeats until the model answers in text or the
//! iteration cap is reached. Tool failures go back to the model as JSON error
//! payloads; only provider failures end the request.

use std::sync::Arc;

use async_trait::async_trait;
use food_lens_core::constants::limits;
use food_lens_core::errors::AppResult;
use food_lens_core::models::RestaurantContext;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::config::environment::AgentConfig;
use crate::external::MenuClient;
use crate::llm::{
    get_food_advisor_system_prompt, ChatMessage, ChatRequest, FunctionCall, LlmProvider,
    OpenAiCompatibleProvider,
};
use crate::nutrition::NutritionResolver;
use crate::tools::{ToolExecutionContext, ToolRegistry};

/// Something that answers a customer prompt
#[async_trait]
pub trait AgentRuntime: Send + Sync {
    /// Answer `prompt` (already enriched with the restaurant context)
    ///
    /// # Errors
    ///
    /// Returns `AppError` when the model cannot be consulted.
    async fn respond(
        &self,
        request_id: &str,
        prompt: &str,
        context: &RestaurantContext,
    ) -> AppResult<String>;
}

/// LLM-driven food advisor
#[derive(Clone)]
pub struct FoodAdvisorAgent {
    provider: Arc<dyn LlmProvider>,
    registry: ToolRegistry,
    menu: MenuClient,
    resolver: NutritionResolver,
    max_iterations: usize,
}

impl FoodAdvisorAgent {
    /// Agent over an arbitrary provider, registry, and adapters
    #[must_use]
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        registry: ToolRegistry,
        menu: MenuClient,
        resolver: NutritionResolver,
    ) -> Self {
        Self {
            provider,
            registry,
            menu,
            resolver,
            max_iterations: limits::MAX_TOOL_ITERATIONS,
        }
    }

    /// Agent wired from configuration with the built-in tools
    ///
    /// # Errors
    ///
    /// Returns an error if the model provider's HTTP client cannot be created.
    pub fn from_config(config: &AgentConfig) -> AppResult<Self> {
        let provider = OpenAiCompatibleProvider::from_config(&config.llm)?;
        Ok(Self::new(
            Arc::new(provider),
            ToolRegistry::with_builtin_tools(),
            MenuClient::new(config.menu.clone()),
            NutritionResolver::from_config(config),
        ))
    }

    /// Model provider, shared with the readiness check
    #[must_use]
    pub fn provider(&self) -> Arc<dyn LlmProvider> {
        Arc::clone(&self.provider)
    }

    /// Override the iteration cap
    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Menu client for this request; a per-request endpoint wins over configuration
    fn menu_for(&self, context: &RestaurantContext) -> MenuClient {
        context
            .menu_api_endpoint
            .as_deref()
            .map_or_else(|| self.menu.clone(), |endpoint| self.menu.with_endpoint(endpoint))
    }

    async fn run_tool_loop(
        &self,
        messages: &mut Vec<ChatMessage>,
        ctx: &ToolExecutionContext,
    ) -> AppResult<String> {
        let tools = self.registry.llm_tools();

        for iteration in 0..self.max_iterations {
            let request = ChatRequest::new(messages.clone());
            let response = self.provider.complete_with_tools(&request, &tools).await?;

            if !response.has_function_calls() {
                return Ok(response.content.unwrap_or_default());
            }
            let calls = response.function_calls.unwrap_or_default();

            info!(
                request_id = %ctx.request_id,
                iteration,
                tool_calls = calls.len(),
                "Executing tool calls"
            );
            let results = self.execute_function_calls(&calls, ctx).await;
            messages.push(ChatMessage::assistant_tool_calls(
                response.content.unwrap_or_default(),
                calls,
            ));
            messages.extend(results);
        }

        warn!(
            request_id = %ctx.request_id,
            max_iterations = self.max_iterations,
            "Tool loop reached its iteration cap without a text answer"
        );
        Ok(String::new())
    }

    async fn execute_function_calls(
        &self,
        calls: &[FunctionCall],
        ctx: &ToolExecutionContext,
    ) -> Vec<ChatMessage> {
        let mut results = Vec::with_capacity(calls.len());
        for call in calls {
            let payload = match self.registry.execute(&call.name, call.args.clone(), ctx).await {
                Ok(Value::String(text)) => text,
                Ok(value) => value.to_string(),
                Err(e) => {
                    debug!(tool = %call.name, error = %e, "Tool call rejected");
                    json!({ "error": e.to_string() }).to_string()
                }
            };
            results.push(ChatMessage::tool_result(call.id.clone(), payload));
        }
        results
    }
}

#[async_trait]
impl AgentRuntime for FoodAdvisorAgent {
    async fn respond(
        &self,
        request_id: &str,
        prompt: &str,
        context: &RestaurantContext,
    ) -> AppResult<String> {
        let ctx = ToolExecutionContext::new(
            request_id,
            self.menu_for(context),
            self.resolver.clone(),
        );
        let mut messages = vec![
            ChatMessage::system(get_food_advisor_system_prompt()),
            ChatMessage::user(prompt),
        ];

        if !self.provider.capabilities().supports_function_calling() {
            debug!(
                request_id,
                provider = self.provider.name(),
                model = self.provider.default_model(),
                "Provider lacks tool calling"
            );
            let response = self.provider.complete(&ChatRequest::new(messages)).await?;
            return Ok(response.content);
        }

        self.run_tool_loop(&mut messages, &ctx).await
    }
}
