// ABOUTME: Request-scoped resources handed to every tool execution
// ABOUTME: Carries the request id, the menu client for this request, and the nutrition resolver
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Execution Context
//!
//! One context is built per invocation. The menu client may point at a
//! per-request endpoint, so the context never outlives its request.

use std::fmt;

use crate::external::MenuClient;
use crate::nutrition::NutritionResolver;

/// Resources available to a tool for one request
#[derive(Clone)]
pub struct ToolExecutionContext {
    /// Correlation id of the invocation
    pub request_id: String,
    /// Menu service client, already pointed at this request's endpoint
    pub menu: MenuClient,
    /// Shared nutrition resolver
    pub resolver: NutritionResolver,
}

impl ToolExecutionContext {
    /// Build a context for one request
    #[must_use]
    pub fn new(request_id: impl Into<String>, menu: MenuClient, resolver: NutritionResolver) -> Self {
        Self {
            request_id: request_id.into(),
            menu,
            resolver,
        }
    }
}

impl fmt::Debug for ToolExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolExecutionContext")
            .field("request_id", &self.request_id)
            .field("menu_endpoint", &self.menu.endpoint())
            .finish_non_exhaustive()
    }
}
