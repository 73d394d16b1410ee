// ABOUTME: get_dish_info tool: fetches one menu item from the restaurant menu service
// ABOUTME: Lookup failures are returned to the model as an error document, never raised
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use food_lens_core::constants::tools;
use food_lens_core::errors::ToolError;
use food_lens_core::models::DishLookup;
use serde_json::{json, Value};

use crate::tools::context::ToolExecutionContext;
use crate::tools::schema::{JsonSchema, PropertySchema};
use crate::tools::traits::{required_str, AgentTool};

const DISH_NOT_FOUND: &str = "Dish not found in menu";

/// Tool for fetching a menu item's name, price, ingredients, and description
pub struct DishInfoTool;

#[async_trait]
impl AgentTool for DishInfoTool {
    fn name(&self) -> &'static str {
        tools::GET_DISH_INFO
    }

    fn description(&self) -> &'static str {
        "Get detailed information about a specific menu item from the restaurant: name, price, ingredients, and description"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                ("dish_id", PropertySchema::string("Identifier of the menu item")),
                (
                    "restaurant_id",
                    PropertySchema::string("Identifier of the restaurant"),
                ),
            ],
            &["dish_id", "restaurant_id"],
        )
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> Result<Value, ToolError> {
        let dish_id = required_str(self.name(), &args, "dish_id")?;
        let restaurant_id = required_str(self.name(), &args, "restaurant_id")?;

        let document = match ctx.menu.get_dish_info(dish_id, restaurant_id).await {
            DishLookup::Found(dish) => json!({
                "success": true,
                "dish": dish,
                "dish_id": dish_id,
                "restaurant_id": restaurant_id,
            }),
            DishLookup::NotFound => error_document(DISH_NOT_FOUND, dish_id, restaurant_id),
            DishLookup::Unavailable { reason } => {
                error_document(&reason, dish_id, restaurant_id)
            }
        };
        Ok(document)
    }
}

fn error_document(reason: &str, dish_id: &str, restaurant_id: &str) -> Value {
    json!({
        "error": reason,
        "dish_id": dish_id,
        "restaurant_id": restaurant_id,
    })
}
