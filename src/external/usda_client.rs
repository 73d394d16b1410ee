// ABOUTME: USDA FoodData Central API client for nutritional data retrieval
// ABOUTME: Single-shot food search returning nutrients per 100g
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! USDA `FoodData` Central API Client
//!
//! Searches the Foundation and SR Legacy datasets, whose nutrient amounts are
//! reported per 100g. Results are not cached: every resolution is request-scoped.
//!
//! # API Reference
//! USDA `FoodData` Central API: <https://fdc.nal.usda.gov/api-guide.html>

use std::time::Duration;

use food_lens_core::constants::timeouts;
use food_lens_core::errors::{AppError, AppResult, ErrorCode};
use food_lens_core::models::NutrientProfile;
use serde::{Deserialize, Serialize};

use crate::config::environment::UsdaConfig;
use crate::nutrition::extraction::{profile_from_nutrients, RawNutrient};
use crate::utils::http_client::create_client_with_timeout;

/// Datasets with per-100g amounts
const DATA_TYPES: &str = "Foundation,SR Legacy";

/// USDA Food Search Result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodSearchResult {
    /// `FoodData` Central ID
    #[serde(default)]
    pub fdc_id: u64,
    /// Food description
    pub description: String,
    /// Data type (e.g., "Foundation", "SR Legacy")
    #[serde(default)]
    pub data_type: Option<String>,
    /// Nutrients reported for this food
    #[serde(default)]
    pub food_nutrients: Vec<FoodNutrient>,
}

impl FoodSearchResult {
    /// Canonical profile built from the reported nutrients
    #[must_use]
    pub fn profile(&self) -> NutrientProfile {
        profile_from_nutrients(self.food_nutrients.iter().filter_map(|n| {
            Some(RawNutrient {
                name: &n.nutrient_name,
                value: n.value?,
                unit: n.unit_name.as_deref(),
            })
        }))
    }
}

/// USDA Food Nutrient as embedded in search results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodNutrient {
    /// Nutrient name (e.g., "Protein", "Energy")
    pub nutrient_name: String,
    /// Amount per 100g
    #[serde(default)]
    pub value: Option<f64>,
    /// Nutrient unit (e.g., "G", "KCAL", "MG")
    #[serde(default)]
    pub unit_name: Option<String>,
}

/// USDA API search response
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Vec<FoodSearchResult>,
}

/// USDA `FoodData` Central API Client
pub struct UsdaClient {
    config: UsdaConfig,
    http_client: reqwest::Client,
}

impl UsdaClient {
    /// Create a new USDA API client
    #[must_use]
    pub fn new(config: UsdaConfig) -> Self {
        Self {
            config,
            http_client: create_client_with_timeout(Duration::from_secs(
                timeouts::USDA_LOOKUP_SECS,
            )),
        }
    }

    /// Whether an API key is configured
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Search for foods by query string
    ///
    /// # Errors
    /// Returns error if no API key is configured, the query is empty, or the API
    /// request fails
    pub async fn search_foods(
        &self,
        query: &str,
        page_size: u32,
    ) -> AppResult<Vec<FoodSearchResult>> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(AppError::new(
                ErrorCode::ExternalServiceUnavailable,
                "USDA API key not configured",
            ));
        };

        if query.is_empty() {
            return Err(AppError::invalid_input("Search query cannot be empty"));
        }

        if page_size == 0 || page_size > 200 {
            return Err(AppError::invalid_input(
                "Page size must be between 1 and 200",
            ));
        }

        let url = format!("{}/foods/search", self.config.base_url.trim_end_matches('/'));
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("query", query),
                ("api_key", api_key),
                ("pageSize", &page_size.to_string()),
                ("dataType", DATA_TYPES),
            ])
            .send()
            .await
            .map_err(|e| AppError::external_service("USDA API", e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::external_service(
                "USDA API",
                format!("HTTP {}", response.status()),
            ));
        }

        let search_response: SearchResponse = response.json().await.map_err(|e| {
            AppError::external_service("USDA API", format!("JSON parse error: {e}"))
        })?;

        Ok(search_response.foods)
    }
}
