// ABOUTME: Main library entry point for the Food Lens advisory agent
// ABOUTME: Nutrition resolution, dietary advice, menu lookup, and the LLM tool loop behind one invocation handler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Food Lens Agent
//!
//! A conversational food advisor for restaurant customers. A customer prompt,
//! optionally tied to a restaurant and dish, is answered by a language model
//! that can call three tools:
//!
//! - **`get_dish_info`**: fetch a menu item from the restaurant menu service
//! - **`nutrition_lookup`**: per-100g nutrition from reference tables, the USDA
//!   database, web search, or a category estimate
//! - **`dietary_advice`**: rule-based guidance with a medical disclaimer
//!
//! ## Architecture
//!
//! - **Nutrition**: static tables, external sources raced concurrently, estimator
//! - **External**: USDA, web search, and menu service clients
//! - **LLM**: provider trait and the `OpenAI`-compatible implementation
//! - **Agent**: the model/tool loop
//! - **Envelope** and **Handler**: deadline, normalization, status mapping
//! - **Routes**: axum surface for `serve`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use food_lens_agent::config::environment::AgentConfig;
//! use food_lens_core::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = AgentConfig::from_env()?;
//!     println!("{}", config.summary());
//!     Ok(())
//! }
//! ```

/// Rule-based dietary advisory responder
pub mod advisory;

/// Agent runtime and tool loop
pub mod agent;

/// Configuration management
pub mod config;

/// Deadline guard and response normalization
pub mod envelope;

/// External API clients
pub mod external;

/// Invocation event handling
pub mod handler;

/// LLM provider abstraction
pub mod llm;

/// Logging configuration and structured logging helpers
pub mod logging;

/// Nutrition resolution
pub mod nutrition;

/// HTTP routes
pub mod routes;

/// Agent tools
pub mod tools;

/// Shared utilities
pub mod utils;

pub use food_lens_core::{constants, errors, models};
