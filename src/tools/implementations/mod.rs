// ABOUTME: Tool implementations offered to the food advisor model
// ABOUTME: get_dish_info, nutrition_lookup, and dietary_advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Dietary advice tool
pub mod dietary_advice;
/// Menu item lookup tool
pub mod dish_info;
/// Nutrition lookup tool
pub mod nutrition;

pub use dietary_advice::DietaryAdviceTool;
pub use dish_info::DishInfoTool;
pub use nutrition::NutritionLookupTool;
