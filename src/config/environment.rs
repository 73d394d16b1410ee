// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses environment variables into a validated AgentConfig built once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! `AgentConfig::from_env()` is called once in `main`; adapters receive the
//! relevant section in their constructors. Nothing reads the environment after
//! startup.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use food_lens_core::constants::{defaults, env_vars, timeouts};
use food_lens_core::errors::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Restaurant menu service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuServiceConfig {
    /// Base URL; menu lookups report unavailable when absent
    pub endpoint: Option<String>,
    /// Bearer credential; requests go unauthenticated when absent
    pub api_key: Option<String>,
}

/// USDA `FoodData` Central
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsdaConfig {
    /// API key; the adapter is disabled when absent
    pub api_key: Option<String>,
    /// Base URL
    pub base_url: String,
}

impl Default for UsdaConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: defaults::USDA_API_BASE_URL.to_owned(),
        }
    }
}

/// Web search instant answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebSearchConfig {
    /// Whether web search participates in resolution
    pub enabled: bool,
    /// Base URL
    pub base_url: String,
}

impl Default for WebSearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: defaults::WEB_SEARCH_BASE_URL.to_owned(),
        }
    }
}

/// OpenAI-compatible model endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    /// Base URL including the `/v1` suffix
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Optional API key (local servers need none)
    pub api_key: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::LLM_BASE_URL.to_owned(),
            model: defaults::LLM_MODEL.to_owned(),
            api_key: None,
        }
    }
}

/// Host execution ceiling and the margin kept in reserve below it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Hard ceiling imposed by the hosting platform
    pub platform_secs: u64,
    /// Time reserved for building and returning the response
    pub margin_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            platform_secs: timeouts::DEFAULT_PLATFORM_SECS,
            margin_secs: timeouts::DEFAULT_AGENT_MARGIN_SECS,
        }
    }
}

impl TimeoutConfig {
    /// Deadline granted to the agent call
    #[must_use]
    pub const fn agent_deadline(&self) -> Duration {
        Duration::from_secs(self.platform_secs.saturating_sub(self.margin_secs))
    }

    /// Reject margins that leave no time for the agent or no time to respond
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the margin is zero or not below the ceiling
    pub fn validate(&self) -> AppResult<()> {
        if self.margin_secs == 0 {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("{} must be greater than zero", env_vars::AGENT_TIMEOUT_MARGIN_SECS),
            ));
        }
        if self.margin_secs >= self.platform_secs {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!(
                    "{} ({}) must be below {} ({})",
                    env_vars::AGENT_TIMEOUT_MARGIN_SECS,
                    self.margin_secs,
                    env_vars::PLATFORM_TIMEOUT_SECS,
                    self.platform_secs
                ),
            ));
        }
        Ok(())
    }
}

/// Complete agent configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    /// HTTP listen port for `serve`
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Menu service
    pub menu: MenuServiceConfig,
    /// Nutrition database
    pub usda: UsdaConfig,
    /// Web search
    pub web_search: WebSearchConfig,
    /// Model endpoint
    pub llm: LlmConfig,
    /// Execution deadlines
    pub timeouts: TimeoutConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            environment: Environment::default(),
            log_level: LogLevel::default(),
            menu: MenuServiceConfig::default(),
            usda: UsdaConfig::default(),
            web_search: WebSearchConfig::default(),
            llm: LlmConfig::default(),
            timeouts: TimeoutConfig::default(),
        }
    }
}

impl AgentConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a numeric variable does not parse or
    /// the timeout pair is inconsistent
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: parse_env(env_vars::HTTP_PORT, defaults::HTTP_PORT)?,
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            menu: MenuServiceConfig {
                endpoint: optional_env(env_vars::FOOD_LENS_API_ENDPOINT),
                api_key: optional_env(env_vars::FOOD_LENS_API_KEY),
            },
            usda: UsdaConfig {
                api_key: optional_env(env_vars::USDA_API_KEY),
                base_url: env_var_or(env_vars::USDA_API_BASE_URL, defaults::USDA_API_BASE_URL),
            },
            web_search: WebSearchConfig {
                enabled: parse_flag(&env_var_or(env_vars::WEB_SEARCH_ENABLED, "true")),
                base_url: env_var_or(
                    env_vars::WEB_SEARCH_BASE_URL,
                    defaults::WEB_SEARCH_BASE_URL,
                ),
            },
            llm: LlmConfig {
                base_url: env_var_or(env_vars::LLM_BASE_URL, defaults::LLM_BASE_URL),
                model: env_var_or(env_vars::LLM_MODEL, defaults::LLM_MODEL),
                api_key: optional_env(env_vars::LLM_API_KEY),
            },
            timeouts: TimeoutConfig {
                platform_secs: parse_env(
                    env_vars::PLATFORM_TIMEOUT_SECS,
                    timeouts::DEFAULT_PLATFORM_SECS,
                )?,
                margin_secs: parse_env(
                    env_vars::AGENT_TIMEOUT_MARGIN_SECS,
                    timeouts::DEFAULT_AGENT_MARGIN_SECS,
                )?,
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns a configuration error describing the first invalid value
    pub fn validate(&self) -> AppResult<()> {
        self.timeouts.validate()?;
        if self.llm.model.trim().is_empty() {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("{} cannot be empty", env_vars::LLM_MODEL),
            ));
        }
        Ok(())
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Food Lens Agent Configuration:\n\
             - HTTP Port: {}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Menu Service: {}\n\
             - USDA Lookup: {}\n\
             - Web Search: {}\n\
             - LLM: {} at {}\n\
             - Agent Deadline: {}s of {}s",
            self.http_port,
            self.environment,
            self.log_level,
            enabled_label(self.menu.endpoint.is_some()),
            enabled_label(self.usda.api_key.is_some()),
            enabled_label(self.web_search.enabled),
            self.llm.model,
            self.llm.base_url,
            self.timeouts.agent_deadline().as_secs(),
            self.timeouts.platform_secs,
        )
    }
}

const fn enabled_label(enabled: bool) -> &'static str {
    if enabled {
        "Enabled"
    } else {
        "Disabled"
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Get a non-blank environment variable
fn optional_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match optional_env(key) {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|e| AppError::config(format!("Invalid {key} value '{raw}': {e}"))),
    }
}

fn parse_flag(raw: &str) -> bool {
    !matches!(raw.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_deadline_is_eighty_seconds() {
        assert_eq!(
            TimeoutConfig::default().agent_deadline(),
            Duration::from_secs(80)
        );
    }

    #[test]
    fn test_margin_must_be_below_ceiling() {
        let equal = TimeoutConfig {
            platform_secs: 90,
            margin_secs: 90,
        };
        assert!(equal.validate().is_err());

        let zero = TimeoutConfig {
            platform_secs: 90,
            margin_secs: 0,
        };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(" 0 "));
        assert!(!parse_flag("OFF"));
    }
}
