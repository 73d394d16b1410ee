// ABOUTME: Central registry for agent tools with lookup, declarations, and dispatch
// ABOUTME: Built once at startup and shared immutably across requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Registry
//!
//! Maps tool names to implementations, produces the function declarations
//! offered to the model, and dispatches model-requested calls.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use food_lens_core::errors::ToolError;
use serde_json::Value;
use tracing::{debug, warn};

use crate::llm::{FunctionDeclaration, Tool};
use crate::logging::AppLogger;

use super::context::ToolExecutionContext;
use super::implementations::{DietaryAdviceTool, DishInfoTool, NutritionLookupTool};
use super::schema::ToolSchema;
use super::traits::AgentTool;

/// Central registry for agent tools
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn AgentTool>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the three food advisor tools
    #[must_use]
    pub fn with_builtin_tools() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(DishInfoTool));
        registry.register(Arc::new(NutritionLookupTool));
        registry.register(Arc::new(DietaryAdviceTool));
        registry
    }

    /// Register a tool
    ///
    /// # Returns
    ///
    /// `true` if the tool was registered, `false` if a tool with the same name exists
    pub fn register(&mut self, tool: Arc<dyn AgentTool>) -> bool {
        let name = tool.name().to_owned();
        if self.tools.contains_key(&name) {
            warn!("Tool '{}' is already registered, skipping", name);
            return false;
        }
        debug!("Registering tool '{}'", name);
        self.tools.insert(name, tool);
        true
    }

    /// Get a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn AgentTool>> {
        self.tools.get(name)
    }

    /// Check if a tool is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get the number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Tool names, sorted
    #[must_use]
    pub fn tool_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Schemas of every tool, sorted by name
    #[must_use]
    pub fn schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self.tools.values().map(|tool| tool.schema()).collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Tool declarations to offer the model
    #[must_use]
    pub fn llm_tools(&self) -> Vec<Tool> {
        if self.is_empty() {
            return Vec::new();
        }
        vec![Tool {
            function_declarations: self
                .schemas()
                .into_iter()
                .map(FunctionDeclaration::from)
                .collect(),
        }]
    }

    /// Execute a tool by name
    ///
    /// # Errors
    ///
    /// Returns `ToolError::NotFound` for unknown names and the tool's own
    /// error otherwise.
    pub async fn execute(
        &self,
        name: &str,
        args: Value,
        ctx: &ToolExecutionContext,
    ) -> Result<Value, ToolError> {
        let tool = self.get(name).ok_or_else(|| ToolError::not_found(name))?;

        let started = Instant::now();
        let result = tool.execute(args, ctx).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;
        AppLogger::log_tool_call(name, result.is_ok(), elapsed_ms);
        result
    }
}
