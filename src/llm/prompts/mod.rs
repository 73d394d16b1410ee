// ABOUTME: System prompt for the food advisor loaded at compile time, plus prompt enrichment
// ABOUTME: Enrichment folds restaurant and dish identifiers into the user's query
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # System Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy maintenance.

use food_lens_core::models::RestaurantContext;

/// Food advisor system prompt
pub const FOOD_ADVISOR_SYSTEM_PROMPT: &str = include_str!("food_advisor_system.md");

const UNKNOWN: &str = "Unknown";

/// Get the system prompt for the food advisor
#[must_use]
pub const fn get_food_advisor_system_prompt() -> &'static str {
    FOOD_ADVISOR_SYSTEM_PROMPT
}

/// Fold the restaurant context into the customer's query
///
/// With a dish id the model is told which dish to fetch first; with only a
/// restaurant id the restaurant is named; otherwise the prompt is unchanged.
#[must_use]
pub fn enrich_prompt(prompt: &str, context: &RestaurantContext) -> String {
    let restaurant_id = context.restaurant_id.as_deref();

    if let Some(dish_id) = context.dish_id.as_deref() {
        let restaurant_id = restaurant_id.unwrap_or(UNKNOWN);
        let dish_name = context.dish_name.as_deref().unwrap_or(UNKNOWN);
        return format!(
            "Context: Restaurant ID {restaurant_id}, Dish ID {dish_id}, Dish Name: {dish_name}.\n\n\
             Customer Query: {prompt}\n\n\
             Instructions: Use get_dish_info tool with dish_id=\"{dish_id}\" and restaurant_id=\"{restaurant_id}\" \
             to get detailed information about this specific menu item before answering."
        );
    }

    match restaurant_id {
        Some(restaurant_id) => {
            format!("Context: Restaurant ID {restaurant_id}. Customer Query: {prompt}")
        }
        None => prompt.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(restaurant: Option<&str>, dish: Option<&str>, name: Option<&str>) -> RestaurantContext {
        RestaurantContext {
            restaurant_id: restaurant.map(str::to_owned),
            dish_id: dish.map(str::to_owned),
            dish_name: name.map(str::to_owned),
            menu_api_endpoint: None,
        }
    }

    #[test]
    fn test_system_prompt_names_tools() {
        let prompt = get_food_advisor_system_prompt();
        assert!(prompt.contains("get_dish_info"));
        assert!(prompt.contains("nutrition_lookup"));
        assert!(prompt.contains("dietary_advice"));
    }

    #[test]
    fn test_enrich_with_dish() {
        let enriched = enrich_prompt("Is it spicy?", &context(Some("r1"), Some("d9"), None));
        assert!(enriched.starts_with(
            "Context: Restaurant ID r1, Dish ID d9, Dish Name: Unknown.\n\nCustomer Query: Is it spicy?"
        ));
        assert!(enriched.contains("dish_id=\"d9\" and restaurant_id=\"r1\""));
    }

    #[test]
    fn test_enrich_with_restaurant_only() {
        assert_eq!(
            enrich_prompt("Hi", &context(Some("r1"), None, Some("ignored"))),
            "Context: Restaurant ID r1. Customer Query: Hi"
        );
    }

    #[test]
    fn test_enrich_without_context() {
        assert_eq!(enrich_prompt("Hi", &RestaurantContext::default()), "Hi");
    }
}
