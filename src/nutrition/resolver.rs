// ABOUTME: Multi-source nutrition resolver: tables first, then an external race, then an estimate
// ABOUTME: Never fails; every failure degrades to the next stage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition resolver
//!
//! Resolution order:
//!
//! 1. exact match in the common table (`cached`)
//! 2. exact match in the regional table (`cached`)
//! 3. substring match against common table keys (`cached`)
//! 4. nutrition database and web search raced concurrently
//!    (`external-api` / `web-search`)
//! 5. category estimate (`estimated`)
//!
//! Stages 1 to 3 are synchronous and do no I/O. An empty name skips stages 3 and 4.

use std::sync::Arc;
use std::time::{Duration, Instant};

use food_lens_core::constants::timeouts;
use food_lens_core::models::{NutrientProfile, NutritionLookupResult, SourceLabel};
use tracing::debug;

use crate::config::environment::AgentConfig;
use crate::external::{UsdaClient, WebSearchClient};
use crate::logging::AppLogger;
use crate::nutrition::estimator::{estimate_description, FoodCategory};
use crate::nutrition::narrative;
use crate::nutrition::sources::NutritionSource;
use crate::nutrition::tables;
use crate::utils::race::{first_success, Contender};

/// Time budgets for the external race
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverBudgets {
    /// Nutrition database call
    pub database: Duration,
    /// Web search call
    pub web_search: Duration,
    /// Overall wait for either
    pub overall: Duration,
}

impl Default for ResolverBudgets {
    fn default() -> Self {
        Self {
            database: Duration::from_secs(timeouts::USDA_LOOKUP_SECS),
            web_search: Duration::from_secs(timeouts::WEB_SEARCH_SECS),
            overall: Duration::from_secs(timeouts::EXTERNAL_RACE_SECS),
        }
    }
}

/// Nutrition resolver
#[derive(Clone)]
pub struct NutritionResolver {
    database: Arc<dyn NutritionSource>,
    web_search: Arc<dyn NutritionSource>,
    budgets: ResolverBudgets,
}

impl NutritionResolver {
    /// Resolver over arbitrary sources
    #[must_use]
    pub fn new(
        database: Arc<dyn NutritionSource>,
        web_search: Arc<dyn NutritionSource>,
        budgets: ResolverBudgets,
    ) -> Self {
        Self {
            database,
            web_search,
            budgets,
        }
    }

    /// Resolver over the USDA and web search clients built from configuration
    #[must_use]
    pub fn from_config(config: &AgentConfig) -> Self {
        Self::new(
            Arc::new(UsdaClient::new(config.usda.clone())),
            Arc::new(WebSearchClient::new(config.web_search.clone())),
            ResolverBudgets::default(),
        )
    }

    /// Answer from the static tables alone, without I/O
    #[must_use]
    pub fn resolve_local(food_name: &str) -> Option<NutritionLookupResult> {
        let name = tables::normalize(food_name);

        if let Some(profile) = tables::lookup_common(&name) {
            return Some(cached(&name, narrative::render(&name, profile, None), *profile));
        }

        if let Some(regional) = tables::lookup_regional(&name) {
            let text = narrative::render(&name, &regional.profile, Some(regional.description));
            return Some(cached(&name, text, regional.profile));
        }

        let (key, profile) = tables::substring_match(&name)?;
        let note = format!("Closest reference food: {key}");
        Some(cached(
            &name,
            narrative::render(&name, profile, Some(&note)),
            *profile,
        ))
    }

    /// Resolve `food_name`. Never fails.
    pub async fn resolve(&self, food_name: &str) -> NutritionLookupResult {
        let started = Instant::now();
        let name = tables::normalize(food_name);

        let result = match Self::resolve_local(&name) {
            Some(result) => result,
            None => match self.race_external(&name).await {
                Some(result) => result,
                None => estimate(&name),
            },
        };

        let elapsed_ms = started.elapsed().as_millis() as u64;
        AppLogger::log_nutrition_resolution(&name, result.source_label, elapsed_ms);
        result
    }

    async fn race_external(&self, name: &str) -> Option<NutritionLookupResult> {
        if name.is_empty() {
            return None;
        }

        let contenders = [
            (Arc::clone(&self.database), self.budgets.database),
            (Arc::clone(&self.web_search), self.budgets.web_search),
        ]
        .into_iter()
        .map(|(source, budget)| {
            let food = name.to_owned();
            Contender::new(source.name(), budget, async move {
                source.lookup(&food).await.into_usable()
            })
        })
        .collect();

        let (label, result) = first_success(contenders, self.budgets.overall).await?;
        debug!(food_name = name, source = label, "External source answered");
        Some(result)
    }
}

fn cached(name: &str, narrative: String, profile: NutrientProfile) -> NutritionLookupResult {
    NutritionLookupResult {
        food_name: name.to_owned(),
        profile,
        source_label: SourceLabel::Cached,
        narrative,
        success: true,
    }
}

/// Category estimate for a name no source could answer
#[must_use]
pub fn estimate(name: &str) -> NutritionLookupResult {
    let category = FoodCategory::classify(name);
    let profile = category.typical_profile();
    let description = estimate_description(name, category);
    NutritionLookupResult {
        food_name: name.to_owned(),
        narrative: narrative::render(name, &profile, Some(&description)),
        profile,
        source_label: SourceLabel::Estimated,
        success: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_local_exact() {
        let result = NutritionResolver::resolve_local("Quinoa").unwrap();
        assert_eq!(result.source_label, SourceLabel::Cached);
        assert_eq!(result.profile.calories, Some(120.0));
        assert_eq!(result.food_name, "quinoa");
    }

    #[test]
    fn test_resolve_local_regional_includes_description() {
        let result = NutritionResolver::resolve_local("fufu").unwrap();
        assert!(result
            .narrative
            .contains("A West African staple made from cassava"));
    }

    #[test]
    fn test_resolve_local_substring_names_reference() {
        let result = NutritionResolver::resolve_local("grilled salmon fillet").unwrap();
        // "fish" is declared before "salmon" but does not match; "salmon" does
        assert!(result.narrative.contains("Closest reference food: salmon"));
    }

    #[test]
    fn test_resolve_local_miss() {
        assert!(NutritionResolver::resolve_local("tempeh").is_none());
        assert!(NutritionResolver::resolve_local("   ").is_none());
    }

    #[test]
    fn test_estimate_names_category() {
        let result = estimate("lamb meat");
        assert_eq!(result.source_label, SourceLabel::Estimated);
        assert!(result.success);
        assert!(result.narrative.contains("appears to be a protein/meat"));
    }
}
