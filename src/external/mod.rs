// ABOUTME: External API client modules (USDA, web search, restaurant menu service)
// ABOUTME: Transport-level clients; each builds one HTTP client with its own timeout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients

/// Restaurant menu service
pub mod menu_client;
/// USDA `FoodData` Central
pub mod usda_client;
/// `DuckDuckGo` instant answers
pub mod web_search_client;

pub use menu_client::MenuClient;
pub use usda_client::{FoodNutrient, FoodSearchResult, UsdaClient};
pub use web_search_client::WebSearchClient;
