// ABOUTME: NutritionSource trait unifying external nutrition adapters behind a tagged outcome
// ABOUTME: Implementations for the USDA client and the web search client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition sources
//!
//! Sources never return errors: transport failures, disabled adapters, and
//! empty answers all become [`SourceOutcome`] variants the resolver can skip.

use async_trait::async_trait;
use food_lens_core::constants::limits;
use food_lens_core::models::{NutritionLookupResult, SourceLabel};
use tracing::debug;

use crate::external::web_search_client::excerpt;
use crate::external::{UsdaClient, WebSearchClient};
use crate::nutrition::extraction::profile_from_text;
use crate::nutrition::narrative;

/// Result of consulting one source
#[derive(Debug, Clone, PartialEq)]
pub enum SourceOutcome {
    /// The source answered
    Found(NutritionLookupResult),
    /// The source answered but had nothing for this food
    Empty,
    /// The source could not be consulted
    Unavailable {
        /// Why, for logs
        reason: String,
    },
}

impl SourceOutcome {
    /// The result, when it is usable
    #[must_use]
    pub fn into_usable(self) -> Option<NutritionLookupResult> {
        match self {
            Self::Found(result) if result.is_usable() => Some(result),
            _ => None,
        }
    }
}

/// An external place to ask about a food
#[async_trait]
pub trait NutritionSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Look up `food_name` (already normalized)
    async fn lookup(&self, food_name: &str) -> SourceOutcome;
}

#[async_trait]
impl NutritionSource for UsdaClient {
    fn name(&self) -> &'static str {
        "usda"
    }

    async fn lookup(&self, food_name: &str) -> SourceOutcome {
        if !self.is_configured() {
            return SourceOutcome::Unavailable {
                reason: "USDA API key not configured".to_owned(),
            };
        }

        let foods = match self.search_foods(food_name, limits::USDA_PAGE_SIZE).await {
            Ok(foods) => foods,
            Err(e) => {
                debug!(food_name, error = %e, "USDA lookup failed");
                return SourceOutcome::Unavailable {
                    reason: e.to_string(),
                };
            }
        };

        let Some(food) = foods.into_iter().next() else {
            return SourceOutcome::Empty;
        };
        let profile = food.profile();
        if profile.is_empty() {
            return SourceOutcome::Empty;
        }

        let description = format!("USDA FoodData Central match: {}", food.description);
        SourceOutcome::Found(NutritionLookupResult {
            food_name: food_name.to_owned(),
            narrative: narrative::render(food_name, &profile, Some(&description)),
            profile,
            source_label: SourceLabel::ExternalApi,
            success: true,
        })
    }
}

#[async_trait]
impl NutritionSource for WebSearchClient {
    fn name(&self) -> &'static str {
        "web-search"
    }

    async fn lookup(&self, food_name: &str) -> SourceOutcome {
        if !self.is_enabled() {
            return SourceOutcome::Unavailable {
                reason: "Web search disabled".to_owned(),
            };
        }

        let text = match self.search_nutrition_text(food_name).await {
            Ok(Some(text)) => text,
            Ok(None) => return SourceOutcome::Empty,
            Err(e) => {
                debug!(food_name, error = %e, "Web search failed");
                return SourceOutcome::Unavailable {
                    reason: e.to_string(),
                };
            }
        };

        // Informative text is an answer even when it carries no numbers
        let profile = profile_from_text(&text);
        let description = format!(
            "Based on available information: {}",
            excerpt(&text, limits::WEB_SEARCH_EXCERPT_CHARS)
        );
        SourceOutcome::Found(NutritionLookupResult {
            food_name: food_name.to_owned(),
            narrative: narrative::render(food_name, &profile, Some(&description)),
            profile,
            source_label: SourceLabel::WebSearch,
            success: true,
        })
    }
}
