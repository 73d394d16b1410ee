// ABOUTME: Agent tools: trait, schema types, execution context, registry, implementations
// ABOUTME: The model calls these through the agent's tool loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Request-scoped tool resources
pub mod context;
/// Tool implementations
pub mod implementations;
/// Name-to-tool registry and dispatch
pub mod registry;
/// JSON Schema types for tool inputs
pub mod schema;
/// `AgentTool` trait and argument helpers
pub mod traits;

pub use context::ToolExecutionContext;
pub use registry::ToolRegistry;
pub use schema::{JsonSchema, PropertySchema, ToolSchema};
pub use traits::AgentTool;
