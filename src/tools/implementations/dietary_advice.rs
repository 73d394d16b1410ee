// ABOUTME: dietary_advice tool: rule-based guidance with a medical disclaimer
// ABOUTME: Thin wrapper over the advisory responder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use food_lens_core::constants::tools;
use food_lens_core::errors::ToolError;
use serde_json::Value;

use crate::advisory::advise;
use crate::tools::context::ToolExecutionContext;
use crate::tools::schema::{JsonSchema, PropertySchema};
use crate::tools::traits::{optional_str_list, required_str, AgentTool};

/// Tool for dietary guidance
pub struct DietaryAdviceTool;

#[async_trait]
impl AgentTool for DietaryAdviceTool {
    fn name(&self) -> &'static str {
        tools::DIETARY_ADVICE
    }

    fn description(&self) -> &'static str {
        "Provide dietary guidance for a question, optionally considering dietary restrictions and health conditions. The answer ends with a medical disclaimer."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                ("query", PropertySchema::string("The customer's dietary question")),
                (
                    "dietary_restrictions",
                    PropertySchema::string_array(
                        "Restrictions such as vegetarian, vegan, gluten-free, dairy-free, nut-free, low-sodium, keto",
                    ),
                ),
                (
                    "health_conditions",
                    PropertySchema::string_array("Health conditions such as diabetes or allergies"),
                ),
            ],
            &["query"],
        )
    }

    async fn execute(&self, args: Value, _ctx: &ToolExecutionContext) -> Result<Value, ToolError> {
        let query = required_str(self.name(), &args, "query")?;
        let restrictions = optional_str_list(self.name(), &args, "dietary_restrictions")?;
        let conditions = optional_str_list(self.name(), &args, "health_conditions")?;

        Ok(Value::String(
            advise(query, &restrictions, &conditions).render(),
        ))
    }
}
