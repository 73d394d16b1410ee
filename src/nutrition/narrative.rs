// ABOUTME: Renders nutrient profiles into the fixed narrative shared by every source
// ABOUTME: Absent macros print as N/A and zero micronutrients are omitted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;

use food_lens_core::models::NutrientProfile;

fn value_or_na(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_owned(), |v| v.to_string())
}

/// Render the per-100g narrative for `food_name`.
///
/// `description`, when given, appears under the heading followed by a blank line.
#[must_use]
pub fn render(food_name: &str, profile: &NutrientProfile, description: Option<&str>) -> String {
    let mut out = format!("Nutritional information for {food_name} (per 100g):\n");
    if let Some(description) = description.filter(|d| !d.is_empty()) {
        let _ = write!(out, "{description}\n\n");
    }
    let _ = writeln!(out, "• Calories: {}", value_or_na(profile.calories));
    let _ = writeln!(out, "• Protein: {}g", value_or_na(profile.protein_g));
    let _ = writeln!(out, "• Fat: {}g", value_or_na(profile.fat_g));
    let _ = write!(out, "• Carbohydrates: {}g", value_or_na(profile.carbs_g));
    if let Some(fiber) = profile.fiber_g.filter(|v| *v > 0.0) {
        let _ = write!(out, "\n• Fiber: {fiber}g");
    }
    if let Some(sodium) = profile.sodium_mg.filter(|v| *v > 0.0) {
        let _ = write!(out, "\n• Sodium: {sodium}mg");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_full_profile() {
        let profile = NutrientProfile::per_100g(130.0, 2.7, 0.3, 28.0, 0.4, 1.0);
        let text = render("rice", &profile, None);
        assert_eq!(
            text,
            "Nutritional information for rice (per 100g):\n\
             • Calories: 130\n\
             • Protein: 2.7g\n\
             • Fat: 0.3g\n\
             • Carbohydrates: 28g\n\
             • Fiber: 0.4g\n\
             • Sodium: 1mg"
        );
    }

    #[test]
    fn test_render_partial_profile_uses_na() {
        let profile = NutrientProfile {
            calories: Some(250.0),
            ..NutrientProfile::default()
        };
        let text = render("suya", &profile, Some("Based on available information: spicy"));
        assert!(text.contains("Based on available information: spicy\n\n• Calories: 250"));
        assert!(text.contains("• Protein: N/Ag"));
        assert!(!text.contains("Fiber"));
    }

    #[test]
    fn test_zero_micronutrients_omitted() {
        let profile = NutrientProfile::per_100g(165.0, 31.0, 3.6, 0.0, 0.0, 74.0);
        let text = render("chicken", &profile, None);
        assert!(!text.contains("Fiber"));
        assert!(text.ends_with("• Sodium: 74mg"));
    }
}
