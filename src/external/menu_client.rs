// ABOUTME: Restaurant menu service client resolving a dish by id
// ABOUTME: One attempt per lookup; every failure is reported as a DishLookup variant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Menu service client
//!
//! The service exposes the whole public menu of a restaurant; the dish is
//! picked out client-side.

use std::time::Duration;

use food_lens_core::constants::{messages, timeouts};
use food_lens_core::models::{DishLookup, DishRecord};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::environment::MenuServiceConfig;
use crate::utils::http_client::create_client_with_timeout;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MenuResponse {
    #[serde(default)]
    menu_items: Vec<Value>,
}

/// Menu service client
#[derive(Clone)]
pub struct MenuClient {
    config: MenuServiceConfig,
    http_client: reqwest::Client,
}

impl MenuClient {
    /// Create a new menu client
    #[must_use]
    pub fn new(config: MenuServiceConfig) -> Self {
        Self {
            config,
            http_client: create_client_with_timeout(Duration::from_secs(
                timeouts::MENU_REQUEST_SECS,
            )),
        }
    }

    /// Same credentials and connection pool, different endpoint
    #[must_use]
    pub fn with_endpoint(&self, endpoint: impl Into<String>) -> Self {
        Self {
            config: MenuServiceConfig {
                endpoint: Some(endpoint.into()),
                api_key: self.config.api_key.clone(),
            },
            http_client: self.http_client.clone(),
        }
    }

    /// Configured endpoint, if any
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        self.config.endpoint.as_deref()
    }

    /// Look up `dish_id` on the public menu of `restaurant_id`
    pub async fn get_dish_info(&self, dish_id: &str, restaurant_id: &str) -> DishLookup {
        let Some(endpoint) = self.config.endpoint.as_deref() else {
            warn!("Menu service endpoint not configured");
            return unavailable(messages::MENU_ENDPOINT_NOT_CONFIGURED);
        };

        let url = format!("{}/api/menu", endpoint.trim_end_matches('/'));
        let mut request = self
            .http_client
            .get(&url)
            .query(&[("restaurantId", restaurant_id), ("public", "true")]);
        if let Some(api_key) = self.config.api_key.as_deref() {
            request = request.bearer_auth(api_key);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                warn!(dish_id, restaurant_id, "Menu request timed out");
                return unavailable("Request timeout");
            }
            Err(e) => {
                warn!(dish_id, restaurant_id, error = %e, "Menu request failed");
                return unavailable(format!("Failed to fetch dish information: {e}"));
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(dish_id, restaurant_id, status = status.as_u16(), "Menu service returned an error");
            return unavailable(format!("API request failed: {}", status.as_u16()));
        }

        let menu: MenuResponse = match response.json().await {
            Ok(menu) => menu,
            Err(e) => {
                warn!(dish_id, restaurant_id, error = %e, "Menu response could not be decoded");
                return unavailable(format!("Failed to fetch dish information: {e}"));
            }
        };

        match find_dish(menu.menu_items, dish_id) {
            Ok(Some(dish)) => {
                debug!(dish_id, restaurant_id, "Dish found");
                DishLookup::Found(dish)
            }
            Ok(None) => {
                debug!(dish_id, restaurant_id, "Dish not on menu");
                DishLookup::NotFound
            }
            Err(e) => {
                warn!(dish_id, restaurant_id, error = %e, "Menu item could not be decoded");
                unavailable(format!("Failed to read dish information: {e}"))
            }
        }
    }
}

fn unavailable(reason: impl Into<String>) -> DishLookup {
    DishLookup::Unavailable {
        reason: reason.into(),
    }
}

/// Ids compare as strings; numeric ids are accepted
fn id_as_string(item: &Value) -> Option<String> {
    match item.get("id")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// First item whose id matches. A matching item that fails to decode is an error, not a miss.
fn find_dish(items: Vec<Value>, dish_id: &str) -> Result<Option<DishRecord>, serde_json::Error> {
    let Some(mut item) = items
        .into_iter()
        .find(|item| id_as_string(item).is_some_and(|id| id == dish_id))
    else {
        return Ok(None);
    };
    if let Some(obj) = item.as_object_mut() {
        obj.insert("id".to_owned(), Value::String(dish_id.to_owned()));
    }
    serde_json::from_value(item).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_find_dish_matches_numeric_ids() {
        let items = vec![
            json!({"id": "a", "name": "Suya"}),
            json!({"id": 7, "name": "Jollof", "price": 12.5, "ingredients": ["rice", "tomato"]}),
        ];
        let dish = find_dish(items, "7").unwrap().unwrap();
        assert_eq!(dish.name, "Jollof");
        assert_eq!(dish.ingredients, vec!["rice", "tomato"]);
    }

    #[test]
    fn test_find_dish_missing() {
        assert!(find_dish(vec![json!({"id": "a"})], "b").unwrap().is_none());
    }

    #[test]
    fn test_find_dish_undecodable_match_is_error() {
        let items = vec![json!({"id": "a", "ingredients": "rice"})];
        assert!(find_dish(items, "a").is_err());
    }

    #[tokio::test]
    async fn test_unconfigured_endpoint() {
        let client = MenuClient::new(MenuServiceConfig::default());
        assert_eq!(
            client.get_dish_info("d1", "r1").await,
            DishLookup::Unavailable {
                reason: "API endpoint not configured".to_owned()
            }
        );
    }
}
