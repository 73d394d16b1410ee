// ABOUTME: Nutrition domain types: nutrient profiles, provenance labels, lookup results
// ABOUTME: Shared by the resolver, the external adapters, and the nutrition tool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Macro and micro nutrient values per 100g.
///
/// The four macro fields are optional because free-text sources frequently
/// report only a subset. Absent values render as `N/A`, never as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutrientProfile {
    /// Energy in kcal
    pub calories: Option<f64>,
    /// Protein in grams
    pub protein_g: Option<f64>,
    /// Total fat in grams
    pub fat_g: Option<f64>,
    /// Carbohydrates in grams
    pub carbs_g: Option<f64>,
    /// Dietary fiber in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber_g: Option<f64>,
    /// Sodium in milligrams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium_mg: Option<f64>,
}

impl NutrientProfile {
    /// Fully populated profile, used by the static tables and the estimator
    #[must_use]
    pub const fn per_100g(
        calories: f64,
        protein_g: f64,
        fat_g: f64,
        carbs_g: f64,
        fiber_g: f64,
        sodium_mg: f64,
    ) -> Self {
        Self {
            calories: Some(calories),
            protein_g: Some(protein_g),
            fat_g: Some(fat_g),
            carbs_g: Some(carbs_g),
            fiber_g: Some(fiber_g),
            sodium_mg: Some(sodium_mg),
        }
    }

    /// True when no field carries a value
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.calories.is_none()
            && self.protein_g.is_none()
            && self.fat_g.is_none()
            && self.carbs_g.is_none()
            && self.fiber_g.is_none()
            && self.sodium_mg.is_none()
    }
}

/// Provenance of a nutrition answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceLabel {
    /// Static or regional in-process table
    Cached,
    /// Structured nutrition database
    ExternalApi,
    /// Free-text web search
    WebSearch,
    /// Category heuristic
    Estimated,
}

impl SourceLabel {
    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cached => "cached",
            Self::ExternalApi => "external-api",
            Self::WebSearch => "web-search",
            Self::Estimated => "estimated",
        }
    }
}

impl std::fmt::Display for SourceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answer to a nutrition question. Built once and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionLookupResult {
    /// Food name as the caller supplied it
    pub food_name: String,
    /// Nutrient values per 100g
    pub profile: NutrientProfile,
    /// Where the values came from
    pub source_label: SourceLabel,
    /// Human-readable rendering of the profile
    pub narrative: String,
    /// Whether the lookup produced usable data
    pub success: bool,
}

impl NutritionLookupResult {
    /// Usable results win races: successful and carrying at least one value.
    ///
    /// Web search results are usable on their text alone; absent values render as `N/A`.
    #[must_use]
    pub const fn is_usable(&self) -> bool {
        self.success
            && (!self.profile.is_empty() || matches!(self.source_label, SourceLabel::WebSearch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_label_wire_names() {
        let labels = [
            SourceLabel::Cached,
            SourceLabel::ExternalApi,
            SourceLabel::WebSearch,
            SourceLabel::Estimated,
        ];
        for label in labels {
            let json = serde_json::to_string(&label).unwrap();
            assert_eq!(json, format!("\"{}\"", label.as_str()));
        }
    }

    fn empty_result(source_label: SourceLabel) -> NutritionLookupResult {
        NutritionLookupResult {
            food_name: "mystery".to_owned(),
            profile: NutrientProfile::default(),
            source_label,
            narrative: String::new(),
            success: true,
        }
    }

    #[test]
    fn test_empty_profile_is_not_usable() {
        assert!(!empty_result(SourceLabel::ExternalApi).is_usable());
    }

    #[test]
    fn test_text_only_web_answer_is_usable() {
        assert!(empty_result(SourceLabel::WebSearch).is_usable());

        let failed = NutritionLookupResult {
            success: false,
            ..empty_result(SourceLabel::WebSearch)
        };
        assert!(!failed.is_usable());
    }
}
