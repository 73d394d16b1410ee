// ABOUTME: nutrition_lookup tool: resolves per-100g nutrition for any food name
// ABOUTME: Always answers; the resolver falls back to a category estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use food_lens_core::constants::tools;
use food_lens_core::errors::ToolError;
use serde_json::Value;
use tracing::debug;

use crate::tools::context::ToolExecutionContext;
use crate::tools::schema::{JsonSchema, PropertySchema};
use crate::tools::traits::{required_str, AgentTool};

/// Tool for nutritional data per 100g
pub struct NutritionLookupTool;

#[async_trait]
impl AgentTool for NutritionLookupTool {
    fn name(&self) -> &'static str {
        tools::NUTRITION_LOOKUP
    }

    fn description(&self) -> &'static str {
        "Get nutritional information per 100g (calories, protein, fat, carbohydrates, fiber, sodium) for any food item. Uses reference data, a nutrition database, and web search, and estimates when nothing else is available."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![(
                "food_name",
                PropertySchema::string("Name of the food, e.g. \"quinoa\" or \"jollof rice\""),
            )],
            &["food_name"],
        )
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> Result<Value, ToolError> {
        let food_name = required_str(self.name(), &args, "food_name")?;
        debug!(request_id = %ctx.request_id, food_name, "Nutrition lookup");

        let result = ctx.resolver.resolve(food_name).await;
        serde_json::to_value(&result)
            .map_err(|e| ToolError::execution_failed(self.name(), e.to_string()))
    }
}
