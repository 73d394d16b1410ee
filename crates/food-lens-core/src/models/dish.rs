// ABOUTME: Menu service records and the request-scoped restaurant context
// ABOUTME: Dish records are read-only views of the external menu service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Deserializer, Serialize};

/// Nullable columns come back as JSON `null`; treat them like absent ones
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A menu item as returned by the restaurant menu service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishRecord {
    /// Menu item identifier
    pub id: String,
    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Listed price, when published
    #[serde(default)]
    pub price: Option<f64>,
    /// Ingredient names
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
}

/// Outcome of a dish lookup. The menu adapter never raises.
#[derive(Debug, Clone, PartialEq)]
pub enum DishLookup {
    /// The dish exists on the restaurant's public menu
    Found(DishRecord),
    /// The menu was fetched but holds no item with that id
    NotFound,
    /// The menu service could not be consulted
    Unavailable {
        /// Short explanation suitable for the model
        reason: String,
    },
}

/// Restaurant and dish identifiers accompanying an invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantContext {
    /// Restaurant identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<String>,
    /// Dish identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<String>,
    /// Dish display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dish_name: Option<String>,
    /// Menu service base URL for this request only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_api_endpoint: Option<String>,
}

impl RestaurantContext {
    /// Lenient parse: unknown or mistyped fields are ignored rather than rejected
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Self {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(serde_json::Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        };
        Self {
            restaurant_id: field("restaurantId"),
            dish_id: field("dishId"),
            dish_name: field("dishName"),
            menu_api_endpoint: field("menuApiEndpoint"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dish_record_tolerates_missing_fields() {
        let dish: DishRecord = serde_json::from_value(json!({"id": "d1"})).unwrap();
        assert_eq!(dish.id, "d1");
        assert!(dish.ingredients.is_empty());
        assert!(dish.price.is_none());
    }

    #[test]
    fn test_dish_record_tolerates_null_columns() {
        let dish: DishRecord = serde_json::from_value(json!({
            "id": "d1",
            "name": null,
            "price": null,
            "ingredients": null,
            "description": null
        }))
        .unwrap();
        assert!(dish.name.is_empty());
        assert!(dish.ingredients.is_empty());
        assert!(dish.description.is_none());
    }

    #[test]
    fn test_context_from_value_is_lenient() {
        let ctx = RestaurantContext::from_value(&json!({
            "restaurantId": "r1",
            "dishId": 42,
            "dishName": "  ",
            "extra": true
        }));
        assert_eq!(ctx.restaurant_id.as_deref(), Some("r1"));
        assert!(ctx.dish_id.is_none());
        assert!(ctx.dish_name.is_none());
    }
}
