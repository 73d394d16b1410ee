// ABOUTME: DuckDuckGo instant answer client used as a free-text nutrition fallback
// ABOUTME: Collects answer, abstract, related topics, and infobox text into one string
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Web search client
//!
//! The instant answer API returns loosely typed JSON: `Infobox` is an object or
//! an empty string, and `RelatedTopics` mixes topics with topic groups. The
//! response is therefore walked as a [`serde_json::Value`].

use std::time::Duration;

use food_lens_core::constants::{limits, timeouts};
use food_lens_core::errors::{AppError, AppResult, ErrorCode};
use serde_json::Value;

use crate::config::environment::WebSearchConfig;
use crate::utils::http_client::create_client_with_timeout;

/// Web search client
pub struct WebSearchClient {
    config: WebSearchConfig,
    http_client: reqwest::Client,
}

impl WebSearchClient {
    /// Create a new web search client
    #[must_use]
    pub fn new(config: WebSearchConfig) -> Self {
        Self {
            config,
            http_client: create_client_with_timeout(Duration::from_secs(
                timeouts::WEB_SEARCH_SECS,
            )),
        }
    }

    /// Whether web search is enabled
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Search for nutrition facts about `food_name` and return the collected text
    ///
    /// Returns `Ok(None)` when the answer carries no informative text.
    ///
    /// # Errors
    /// Returns error if search is disabled or the request fails
    pub async fn search_nutrition_text(&self, food_name: &str) -> AppResult<Option<String>> {
        if !self.config.enabled {
            return Err(AppError::new(
                ErrorCode::ExternalServiceUnavailable,
                "Web search disabled",
            ));
        }

        let query = format!("{food_name} nutrition facts calories");
        let url = format!("{}/", self.config.base_url.trim_end_matches('/'));
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("q", query.as_str()),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .send()
            .await
            .map_err(|e| AppError::external_service("Web search", e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::external_service(
                "Web search",
                format!("HTTP {}", response.status()),
            ));
        }

        let body: Value = response.json().await.map_err(|e| {
            AppError::external_service("Web search", format!("JSON parse error: {e}"))
        })?;

        let text = collect_text(&body);
        Ok((text.chars().count() > limits::WEB_SEARCH_MIN_TEXT_CHARS).then_some(text))
    }
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Flatten an instant answer into plain text
#[must_use]
pub fn collect_text(body: &Value) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(answer) = non_empty_str(body, "Answer") {
        parts.push(answer.to_owned());
    }
    if let Some(abstract_text) = non_empty_str(body, "Abstract") {
        parts.push(abstract_text.to_owned());
    }
    if let Some(definition) = non_empty_str(body, "Definition") {
        parts.push(format!("Definition: {definition}"));
    }

    let related: Vec<String> = body
        .get("RelatedTopics")
        .and_then(Value::as_array)
        .map(|topics| {
            topics
                .iter()
                .filter_map(|topic| non_empty_str(topic, "Text"))
                .take(limits::WEB_SEARCH_RELATED_TOPICS)
                .map(|text| format!("• {text}"))
                .collect()
        })
        .unwrap_or_default();
    if !related.is_empty() {
        parts.push(format!("Additional Information:\n{}", related.join("\n")));
    }

    let infobox: Vec<String> = body
        .get("Infobox")
        .and_then(|infobox| infobox.get("content"))
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .take(limits::WEB_SEARCH_INFOBOX_ENTRIES)
                .filter_map(|item| {
                    let label = non_empty_str(item, "label")?;
                    let value = match item.get("value")? {
                        Value::String(s) if !s.trim().is_empty() => s.trim().to_owned(),
                        Value::Number(n) => n.to_string(),
                        _ => return None,
                    };
                    Some(format!("{label}: {value}"))
                })
                .collect()
        })
        .unwrap_or_default();
    if !infobox.is_empty() {
        parts.push(format!("Details:\n{}", infobox.join("\n")));
    }

    parts.join("\n\n")
}

/// First `max_chars` characters of `text`, with an ellipsis when truncated
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let flattened = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flattened.chars().count() <= max_chars {
        return flattened;
    }
    let mut cut: String = flattened.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}
