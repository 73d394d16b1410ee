// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Timeouts, environment variable names, tool names, and fixed response texts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Service identity used in logs and health responses
pub mod service_names {
    /// Service name for structured logging
    pub const FOOD_LENS_AGENT: &str = "food-lens-agent";
    /// Crate name used as the tracing target for application logs
    pub const LOG_TARGET: &str = "food_lens_agent";
}

/// Time budgets in seconds
pub mod timeouts {
    /// Nutrition database call budget
    pub const USDA_LOOKUP_SECS: u64 = 8;
    /// Web search call budget
    pub const WEB_SEARCH_SECS: u64 = 6;
    /// Overall wait budget for the external race
    pub const EXTERNAL_RACE_SECS: u64 = 10;
    /// Menu service request timeout
    pub const MENU_REQUEST_SECS: u64 = 10;
    /// Default host execution ceiling
    pub const DEFAULT_PLATFORM_SECS: u64 = 90;
    /// Default safety margin subtracted from the ceiling
    pub const DEFAULT_AGENT_MARGIN_SECS: u64 = 10;
    /// LLM request timeout
    pub const LLM_REQUEST_SECS: u64 = 60;
    /// Budget for the model server check behind `/ready`
    pub const MODEL_HEALTH_CHECK_SECS: u64 = 5;
}

/// Agent loop limits
pub mod limits {
    /// Maximum model round trips per request
    pub const MAX_TOOL_ITERATIONS: usize = 6;
    /// Number of foods requested from the nutrition database
    pub const USDA_PAGE_SIZE: u32 = 1;
    /// Minimum length of web search text considered informative
    pub const WEB_SEARCH_MIN_TEXT_CHARS: usize = 20;
    /// Characters of web search text quoted in the description line
    pub const WEB_SEARCH_EXCERPT_CHARS: usize = 200;
    /// Related topics consulted from a web search answer
    pub const WEB_SEARCH_RELATED_TOPICS: usize = 3;
    /// Infobox entries consulted from a web search answer
    pub const WEB_SEARCH_INFOBOX_ENTRIES: usize = 5;
}

/// Environment variable names
pub mod env_vars {
    /// Menu service base URL
    pub const FOOD_LENS_API_ENDPOINT: &str = "FOOD_LENS_API_ENDPOINT";
    /// Menu service bearer credential
    pub const FOOD_LENS_API_KEY: &str = "FOOD_LENS_API_KEY";
    /// Nutrition database API key
    pub const USDA_API_KEY: &str = "USDA_API_KEY";
    /// Nutrition database base URL
    pub const USDA_API_BASE_URL: &str = "USDA_API_BASE_URL";
    /// Web search base URL
    pub const WEB_SEARCH_BASE_URL: &str = "WEB_SEARCH_BASE_URL";
    /// Web search switch
    pub const WEB_SEARCH_ENABLED: &str = "WEB_SEARCH_ENABLED";
    /// OpenAI-compatible endpoint
    pub const LLM_BASE_URL: &str = "LLM_BASE_URL";
    /// Model identifier
    pub const LLM_MODEL: &str = "LLM_MODEL";
    /// Optional model API key
    pub const LLM_API_KEY: &str = "LLM_API_KEY";
    /// Host execution ceiling
    pub const PLATFORM_TIMEOUT_SECS: &str = "PLATFORM_TIMEOUT_SECS";
    /// Safety margin before the ceiling
    pub const AGENT_TIMEOUT_MARGIN_SECS: &str = "AGENT_TIMEOUT_MARGIN_SECS";
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Deployment environment name
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Default endpoints
pub mod defaults {
    /// USDA `FoodData` Central
    pub const USDA_API_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";
    /// `DuckDuckGo` instant answers
    pub const WEB_SEARCH_BASE_URL: &str = "https://api.duckduckgo.com";
    /// Local Ollama server
    pub const LLM_BASE_URL: &str = "http://localhost:11434/v1";
    /// Default local model
    pub const LLM_MODEL: &str = "qwen2.5:14b-instruct";
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8080;
}

/// Tool names exposed to the model
pub mod tools {
    /// Menu lookup tool
    pub const GET_DISH_INFO: &str = "get_dish_info";
    /// Nutrition lookup tool
    pub const NUTRITION_LOOKUP: &str = "nutrition_lookup";
    /// Dietary advice tool
    pub const DIETARY_ADVICE: &str = "dietary_advice";
}

/// Fixed user-facing texts
pub mod messages {
    /// Returned when the agent produced nothing usable
    pub const EMPTY_RESPONSE_APOLOGY: &str = "I apologize, but I'm having trouble processing your request right now. Please try rephrasing your question, and I'll do my best to help you with nutritional information or menu guidance.";
    /// Body of the 400 response
    pub const MISSING_PROMPT: &str = "Missing prompt in request";
    /// Prefix of the 500 response body
    pub const INTERNAL_ERROR_PREFIX: &str = "Internal server error";
    /// Menu adapter reason when no endpoint is configured
    pub const MENU_ENDPOINT_NOT_CONFIGURED: &str = "API endpoint not configured";

    /// Fallback used when the deadline elapses before the agent answers
    #[must_use]
    pub fn timeout_fallback(topic: &str) -> String {
        format!(
            "I understand you're asking about {topic}. While I'm processing your request, I can tell you that I'm here to help with nutritional information and menu guidance. Please try asking about specific food items or nutritional aspects, and I'll provide detailed information."
        )
    }
}
