// ABOUTME: Configuration management module for centralized agent settings
// ABOUTME: Re-exports the environment-driven AgentConfig and its sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the Food Lens agent

/// Environment and service configuration
pub mod environment;

pub use environment::{
    AgentConfig, Environment, LlmConfig, LogLevel, MenuServiceConfig, TimeoutConfig, UsdaConfig,
    WebSearchConfig,
};
