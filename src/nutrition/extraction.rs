// ABOUTME: Maps heterogeneous upstream nutrient data onto the canonical NutrientProfile
// ABOUTME: Handles structured nutrient lists and regex extraction from free text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrient field extraction
//!
//! Structured sources report nutrients as `(name, value, unit)` triples with
//! long, source-specific names. Free-text sources only mention a few numbers.
//! Both paths end in a partially populated [`NutrientProfile`].

use std::sync::OnceLock;

use food_lens_core::models::NutrientProfile;
use regex::Regex;

/// Canonical profile field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutrientField {
    /// kcal
    Calories,
    /// grams
    Protein,
    /// grams
    Fat,
    /// grams
    Carbs,
    /// grams
    Fiber,
    /// milligrams
    Sodium,
}

/// Raw name fragment to canonical field, checked in order
const CANONICAL_NAMES: [(&str, NutrientField); 6] = [
    ("energy", NutrientField::Calories),
    ("protein", NutrientField::Protein),
    ("total lipid (fat)", NutrientField::Fat),
    ("carbohydrate, by difference", NutrientField::Carbs),
    ("fiber, total dietary", NutrientField::Fiber),
    ("sodium, na", NutrientField::Sodium),
];

/// One nutrient entry as reported upstream
#[derive(Debug, Clone, Copy)]
pub struct RawNutrient<'a> {
    /// Upstream nutrient name
    pub name: &'a str,
    /// Reported amount
    pub value: f64,
    /// Unit, when the source reports one
    pub unit: Option<&'a str>,
}

/// Canonical field for a raw nutrient name (case-insensitive substring match)
#[must_use]
pub fn canonical_field(raw_name: &str) -> Option<NutrientField> {
    let name = raw_name.to_lowercase();
    CANONICAL_NAMES
        .iter()
        .find(|(fragment, _)| name.contains(fragment))
        .map(|(_, field)| *field)
}

fn slot(profile: &mut NutrientProfile, field: NutrientField) -> &mut Option<f64> {
    match field {
        NutrientField::Calories => &mut profile.calories,
        NutrientField::Protein => &mut profile.protein_g,
        NutrientField::Fat => &mut profile.fat_g,
        NutrientField::Carbs => &mut profile.carbs_g,
        NutrientField::Fiber => &mut profile.fiber_g,
        NutrientField::Sodium => &mut profile.sodium_mg,
    }
}

/// Build a profile from a structured nutrient list.
///
/// Energy reported in kJ is skipped, the first value for each field is kept,
/// and negative or non-finite values are dropped.
#[must_use]
pub fn profile_from_nutrients<'a, I>(nutrients: I) -> NutrientProfile
where
    I: IntoIterator<Item = RawNutrient<'a>>,
{
    let mut profile = NutrientProfile::default();
    for nutrient in nutrients {
        let Some(field) = canonical_field(nutrient.name) else {
            continue;
        };
        if field == NutrientField::Calories
            && nutrient
                .unit
                .is_some_and(|unit| unit.eq_ignore_ascii_case("kj"))
        {
            continue;
        }
        if !nutrient.value.is_finite() || nutrient.value < 0.0 {
            continue;
        }
        let target = slot(&mut profile, field);
        if target.is_none() {
            *target = Some(nutrient.value);
        }
    }
    profile
}

struct TextPatterns {
    calories: Regex,
    protein: Regex,
    fat: Regex,
    carbs: Regex,
}

fn text_patterns() -> Option<&'static TextPatterns> {
    static PATTERNS: OnceLock<Option<TextPatterns>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            Some(TextPatterns {
                calories: Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:calories|kcal|cal)\b").ok()?,
                protein: Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*g(?:rams?)?\s*(?:of\s+)?protein").ok()?,
                fat: Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*g(?:rams?)?\s*(?:of\s+)?(?:total\s+)?fat").ok()?,
                carbs: Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*g(?:rams?)?\s*(?:of\s+)?carb(?:ohydrate)?s?")
                    .ok()?,
            })
        })
        .as_ref()
}

fn first_number(pattern: &Regex, text: &str) -> Option<f64> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Best-effort macro extraction from free text. Fields not mentioned stay `None`.
#[must_use]
pub fn profile_from_text(text: &str) -> NutrientProfile {
    let Some(patterns) = text_patterns() else {
        return NutrientProfile::default();
    };
    NutrientProfile {
        calories: first_number(&patterns.calories, text),
        protein_g: first_number(&patterns.protein, text),
        fat_g: first_number(&patterns.fat, text),
        carbs_g: first_number(&patterns.carbs, text),
        fiber_g: None,
        sodium_mg: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw<'a>(name: &'a str, value: f64, unit: &'a str) -> RawNutrient<'a> {
        RawNutrient {
            name,
            value,
            unit: Some(unit),
        }
    }

    #[test]
    fn test_canonical_field_matching() {
        assert_eq!(canonical_field("Energy"), Some(NutrientField::Calories));
        assert_eq!(
            canonical_field("Total lipid (fat)"),
            Some(NutrientField::Fat)
        );
        assert_eq!(canonical_field("Sodium, Na"), Some(NutrientField::Sodium));
        assert_eq!(canonical_field("Vitamin C, total ascorbic acid"), None);
    }

    #[test]
    fn test_kj_energy_skipped_and_first_value_kept() {
        let profile = profile_from_nutrients([
            raw("Energy", 548.0, "kJ"),
            raw("Energy", 131.0, "KCAL"),
            raw("Energy (Atwater General Factors)", 140.0, "KCAL"),
            raw("Protein", 5.0, "G"),
            raw("Total lipid (fat)", -1.0, "G"),
            raw("Total lipid (fat)", 1.1, "G"),
        ]);
        assert_eq!(profile.calories, Some(131.0));
        assert_eq!(profile.protein_g, Some(5.0));
        assert_eq!(profile.fat_g, Some(1.1));
        assert!(profile.carbs_g.is_none());
    }

    #[test]
    fn test_profile_from_text() {
        let profile = profile_from_text(
            "A medium serving has 250 calories, 12g of protein, 9 g fat and 30g carbohydrates.",
        );
        assert_eq!(profile.calories, Some(250.0));
        assert_eq!(profile.protein_g, Some(12.0));
        assert_eq!(profile.fat_g, Some(9.0));
        assert_eq!(profile.carbs_g, Some(30.0));
    }

    #[test]
    fn test_profile_from_text_without_numbers() {
        assert!(profile_from_text("A traditional dish served warm.").is_empty());
    }
}
