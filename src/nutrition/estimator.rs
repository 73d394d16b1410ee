// ABOUTME: Keyword-based food category classifier with representative nutrient profiles
// ABOUTME: Last-resort estimate when no table or external source answers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use food_lens_core::models::NutrientProfile;

/// Broad food category used for estimates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodCategory {
    /// Grains and starches
    Grain,
    /// Meat and fish
    Protein,
    /// Beans, lentils, and peas
    Legume,
    /// Vegetables
    Vegetable,
    /// Fruit
    Fruit,
    /// Dairy
    Dairy,
    /// Anything else
    Mixed,
}

/// Categories checked in priority order, each with its trigger keywords
const CATEGORY_KEYWORDS: [(FoodCategory, &[&str]); 6] = [
    (
        FoodCategory::Grain,
        &["rice", "bread", "pasta", "wheat", "oats", "quinoa", "cereal", "flour"],
    ),
    (
        FoodCategory::Protein,
        &["chicken", "beef", "fish", "turkey", "pork", "meat", "salmon", "tuna"],
    ),
    (
        FoodCategory::Legume,
        &["beans", "lentils", "chickpeas", "peas", "legume"],
    ),
    (
        FoodCategory::Vegetable,
        &["vegetable", "broccoli", "spinach", "carrot", "tomato", "lettuce", "cabbage"],
    ),
    (
        FoodCategory::Fruit,
        &["apple", "banana", "orange", "berry", "fruit", "mango", "grape"],
    ),
    (FoodCategory::Dairy, &["milk", "cheese", "yogurt", "dairy"]),
];

impl FoodCategory {
    /// Classify by the first category whose keyword appears in the name
    #[must_use]
    pub fn classify(food_name: &str) -> Self {
        let name = food_name.to_lowercase();
        CATEGORY_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| name.contains(k)))
            .map_or(Self::Mixed, |(category, _)| *category)
    }

    /// Representative per-100g profile
    #[must_use]
    pub const fn typical_profile(self) -> NutrientProfile {
        match self {
            Self::Grain => NutrientProfile::per_100g(150.0, 4.0, 1.0, 30.0, 2.0, 5.0),
            Self::Protein => NutrientProfile::per_100g(200.0, 25.0, 10.0, 0.0, 0.0, 70.0),
            Self::Legume => NutrientProfile::per_100g(130.0, 9.0, 0.5, 23.0, 7.0, 2.0),
            Self::Vegetable => NutrientProfile::per_100g(25.0, 2.0, 0.2, 5.0, 2.0, 20.0),
            Self::Fruit => NutrientProfile::per_100g(60.0, 0.5, 0.2, 15.0, 2.5, 1.0),
            Self::Dairy => NutrientProfile::per_100g(80.0, 6.0, 4.0, 6.0, 0.0, 100.0),
            Self::Mixed => NutrientProfile::per_100g(100.0, 3.0, 2.0, 15.0, 2.0, 50.0),
        }
    }

    /// Label used in narratives
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Grain => "grain/carbohydrate",
            Self::Protein => "protein/meat",
            Self::Legume => "legume/plant protein",
            Self::Vegetable => "vegetable",
            Self::Fruit => "fruit",
            Self::Dairy => "dairy",
            Self::Mixed => "mixed food",
        }
    }
}

/// Sentence explaining an estimate, used as the narrative description line
#[must_use]
pub fn estimate_description(food_name: &str, category: FoodCategory) -> String {
    format!(
        "{food_name} appears to be a {}. Based on similar foods, here's the estimated nutritional profile per 100g. For specific dietary needs, please verify with restaurant staff or nutrition labels.",
        category.label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_priority_order() {
        // grain wins over protein when both appear
        assert_eq!(FoodCategory::classify("chicken fried rice"), FoodCategory::Grain);
        assert_eq!(FoodCategory::classify("Pork Belly"), FoodCategory::Protein);
        assert_eq!(FoodCategory::classify("red lentils"), FoodCategory::Legume);
        assert_eq!(FoodCategory::classify("carrot soup"), FoodCategory::Vegetable);
        assert_eq!(FoodCategory::classify("mango lassi"), FoodCategory::Fruit);
        assert_eq!(FoodCategory::classify("goat cheese"), FoodCategory::Dairy);
        assert_eq!(FoodCategory::classify("xyzzy"), FoodCategory::Mixed);
    }

    #[test]
    fn test_mixed_profile() {
        let profile = FoodCategory::Mixed.typical_profile();
        assert_eq!(profile.calories, Some(100.0));
        assert_eq!(profile.sodium_mg, Some(50.0));
    }

    #[test]
    fn test_estimate_description_names_category() {
        let text = estimate_description("tempeh", FoodCategory::Mixed);
        assert!(text.starts_with("tempeh appears to be a mixed food."));
    }
}
