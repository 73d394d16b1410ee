// ABOUTME: Defines the AgentTool trait implemented by every tool the model can call
// ABOUTME: Tools are registered in the ToolRegistry and dispatched by name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Agent Tool Trait
//!
//! Each tool exposes its metadata (name, description, input schema) and an
//! async `execute`. Tool failures are [`ToolError`]s; the agent loop turns them
//! into JSON error payloads for the model.
//!
//! # Example
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use food_lens_agent::tools::{AgentTool, JsonSchema, ToolExecutionContext};
//! use food_lens_core::errors::ToolError;
//! use serde_json::{json, Value};
//!
//! struct PingTool;
//!
//! #[async_trait]
//! impl AgentTool for PingTool {
//!     fn name(&self) -> &'static str {
//!         "ping"
//!     }
//!
//!     fn description(&self) -> &'static str {
//!         "Answer with pong"
//!     }
//!
//!     fn input_schema(&self) -> JsonSchema {
//!         JsonSchema::object(Vec::new(), &[])
//!     }
//!
//!     async fn execute(&self, _args: Value, _ctx: &ToolExecutionContext) -> Result<Value, ToolError> {
//!         Ok(json!("pong"))
//!     }
//! }
//! ```

use async_trait::async_trait;
use food_lens_core::errors::ToolError;
use serde_json::Value;

use super::context::ToolExecutionContext;
use super::schema::{JsonSchema, ToolSchema};

/// A function the model can call
#[async_trait]
pub trait AgentTool: Send + Sync {
    /// Unique identifier used in function calls
    fn name(&self) -> &'static str;

    /// Description for the model
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters
    fn input_schema(&self) -> JsonSchema;

    /// Run the tool
    ///
    /// # Errors
    ///
    /// Returns `ToolError` for missing or invalid arguments and for failures
    /// the tool cannot express as a normal result.
    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> Result<Value, ToolError>;

    /// Schema bundle for declarations
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_owned(),
            description: self.description().to_owned(),
            input_schema: self.input_schema(),
        }
    }
}

/// Required, non-blank string argument
///
/// # Errors
///
/// `MissingParameter` when absent or blank, `InvalidParameter` when not a string.
pub fn required_str<'a>(tool: &str, args: &'a Value, name: &str) -> Result<&'a str, ToolError> {
    match args.get(name) {
        None | Some(Value::Null) => Err(ToolError::missing_parameter(tool, name)),
        Some(Value::String(s)) if s.trim().is_empty() => {
            Err(ToolError::missing_parameter(tool, name))
        }
        Some(Value::String(s)) => Ok(s.trim()),
        Some(_) => Err(ToolError::invalid_parameter(tool, name, "expected a string")),
    }
}

/// Optional list of strings; absent or null is an empty list
///
/// A single string is accepted as a one-element list.
///
/// # Errors
///
/// `InvalidParameter` when the value is neither a string nor an array of strings.
pub fn optional_str_list(tool: &str, args: &Value, name: &str) -> Result<Vec<String>, ToolError> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(s)) => Ok(vec![s.clone()]),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_owned).ok_or_else(|| {
                    ToolError::invalid_parameter(tool, name, "expected an array of strings")
                })
            })
            .collect(),
        Some(_) => Err(ToolError::invalid_parameter(
            tool,
            name,
            "expected an array of strings",
        )),
    }
}
