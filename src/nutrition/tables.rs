// ABOUTME: Static per-100g nutrient tables for common and regional foods
// ABOUTME: Read-only data consulted before any network call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Static nutrient tables
//!
//! Declaration order matters: substring matching walks [`COMMON_FOODS`] front to
//! back and the first hit wins.

use food_lens_core::models::NutrientProfile;

/// A regional or cultural food with its origin description
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionalFood {
    /// Lowercase lookup key
    pub name: &'static str,
    /// Nutrient values per 100g
    pub profile: NutrientProfile,
    /// One-line origin description rendered in the narrative
    pub description: &'static str,
}

const fn food(name: &'static str, profile: NutrientProfile) -> (&'static str, NutrientProfile) {
    (name, profile)
}

/// Common foods, per 100g: calories, protein, fat, carbs, fiber, sodium
pub static COMMON_FOODS: [(&str, NutrientProfile); 26] = [
    food("pizza", NutrientProfile::per_100g(266.0, 11.0, 10.4, 33.0, 2.3, 598.0)),
    food("chicken", NutrientProfile::per_100g(165.0, 31.0, 3.6, 0.0, 0.0, 74.0)),
    food("rice", NutrientProfile::per_100g(130.0, 2.7, 0.3, 28.0, 0.4, 1.0)),
    food("white rice", NutrientProfile::per_100g(130.0, 2.7, 0.3, 28.0, 0.4, 1.0)),
    food("beans", NutrientProfile::per_100g(127.0, 8.7, 0.5, 23.0, 6.4, 2.0)),
    food("black beans", NutrientProfile::per_100g(132.0, 8.9, 0.5, 24.0, 8.7, 2.0)),
    food("bread", NutrientProfile::per_100g(265.0, 9.0, 3.2, 49.0, 2.7, 491.0)),
    food("pasta", NutrientProfile::per_100g(131.0, 5.0, 1.1, 25.0, 1.8, 1.0)),
    food("beef", NutrientProfile::per_100g(250.0, 26.0, 15.0, 0.0, 0.0, 72.0)),
    food("fish", NutrientProfile::per_100g(206.0, 22.0, 12.0, 0.0, 0.0, 59.0)),
    food("salmon", NutrientProfile::per_100g(208.0, 20.0, 13.0, 0.0, 0.0, 59.0)),
    food("egg", NutrientProfile::per_100g(155.0, 13.0, 11.0, 1.1, 0.0, 124.0)),
    food("milk", NutrientProfile::per_100g(42.0, 3.4, 1.0, 5.0, 0.0, 44.0)),
    food("cheese", NutrientProfile::per_100g(113.0, 7.0, 9.0, 1.0, 0.0, 215.0)),
    food("yogurt", NutrientProfile::per_100g(59.0, 10.0, 0.4, 3.6, 0.0, 36.0)),
    food("apple", NutrientProfile::per_100g(52.0, 0.3, 0.2, 14.0, 2.4, 1.0)),
    food("banana", NutrientProfile::per_100g(89.0, 1.1, 0.3, 23.0, 2.6, 1.0)),
    food("broccoli", NutrientProfile::per_100g(34.0, 2.8, 0.4, 7.0, 2.6, 33.0)),
    food("spinach", NutrientProfile::per_100g(23.0, 2.9, 0.4, 3.6, 2.2, 79.0)),
    food("potato", NutrientProfile::per_100g(77.0, 2.0, 0.1, 17.0, 2.2, 6.0)),
    food("sweet potato", NutrientProfile::per_100g(86.0, 1.6, 0.1, 20.0, 3.0, 54.0)),
    food("oats", NutrientProfile::per_100g(389.0, 17.0, 7.0, 66.0, 10.0, 2.0)),
    food("quinoa", NutrientProfile::per_100g(120.0, 4.4, 1.9, 22.0, 2.8, 7.0)),
    food("avocado", NutrientProfile::per_100g(160.0, 2.0, 15.0, 9.0, 7.0, 7.0)),
    food("nuts", NutrientProfile::per_100g(607.0, 20.0, 54.0, 16.0, 8.0, 18.0)),
    food("almonds", NutrientProfile::per_100g(579.0, 21.0, 50.0, 22.0, 12.0, 1.0)),
];

/// Regional and cultural foods not covered by the common table
pub static REGIONAL_FOODS: [RegionalFood; 5] = [
    RegionalFood {
        name: "amala",
        profile: NutrientProfile::per_100g(118.0, 1.2, 0.2, 27.0, 3.5, 5.0),
        description: "A Nigerian staple made from yam flour, rich in carbohydrates and dietary fiber",
    },
    RegionalFood {
        name: "fufu",
        profile: NutrientProfile::per_100g(267.0, 1.9, 0.2, 65.0, 1.4, 15.0),
        description: "A West African staple made from cassava, high in carbohydrates",
    },
    RegionalFood {
        name: "jollof rice",
        profile: NutrientProfile::per_100g(150.0, 3.5, 2.0, 30.0, 1.0, 400.0),
        description: "A popular West African rice dish with tomatoes and spices",
    },
    RegionalFood {
        name: "plantain",
        profile: NutrientProfile::per_100g(122.0, 1.3, 0.4, 32.0, 2.3, 4.0),
        description: "A starchy fruit similar to banana, rich in potassium and vitamin C",
    },
    RegionalFood {
        name: "yam",
        profile: NutrientProfile::per_100g(118.0, 1.5, 0.2, 28.0, 4.1, 9.0),
        description: "A root vegetable high in carbohydrates and fiber",
    },
];

/// Normalize a food name for table lookups
#[must_use]
pub fn normalize(food_name: &str) -> String {
    food_name.trim().to_lowercase()
}

/// Exact lookup in the common table. `name` must already be normalized.
#[must_use]
pub fn lookup_common(name: &str) -> Option<&'static NutrientProfile> {
    COMMON_FOODS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, profile)| profile)
}

/// Exact lookup in the regional table. `name` must already be normalized.
#[must_use]
pub fn lookup_regional(name: &str) -> Option<&'static RegionalFood> {
    REGIONAL_FOODS.iter().find(|entry| entry.name == name)
}

/// First common-table key that contains `name` or is contained in it.
///
/// Empty names match nothing.
#[must_use]
pub fn substring_match(name: &str) -> Option<(&'static str, &'static NutrientProfile)> {
    if name.is_empty() {
        return None;
    }
    COMMON_FOODS
        .iter()
        .find(|(key, _)| key.contains(name) || name.contains(key))
        .map(|(key, profile)| (*key, profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_keys_are_normalized_and_unique() {
        for (i, (key, _)) in COMMON_FOODS.iter().enumerate() {
            assert_eq!(*key, normalize(key));
            assert!(COMMON_FOODS[i + 1..].iter().all(|(other, _)| other != key));
        }
    }

    #[test]
    fn test_static_profiles_are_complete_and_non_negative() {
        let regional = REGIONAL_FOODS.iter().map(|r| &r.profile);
        for profile in COMMON_FOODS.iter().map(|(_, p)| p).chain(regional) {
            for value in [
                profile.calories,
                profile.protein_g,
                profile.fat_g,
                profile.carbs_g,
                profile.fiber_g,
                profile.sodium_mg,
            ] {
                assert!(value.is_some_and(|v| v >= 0.0));
            }
        }
    }

    #[test]
    fn test_substring_match_prefers_declaration_order() {
        // "brown rice" contains "rice", which is declared before "white rice"
        let (key, _) = substring_match("brown rice").unwrap();
        assert_eq!(key, "rice");

        // "chicken breast" contains "chicken"
        let (key, _) = substring_match("chicken breast").unwrap();
        assert_eq!(key, "chicken");

        // "egg" sits inside "eggplant"
        let (key, _) = substring_match("eggplant").unwrap();
        assert_eq!(key, "egg");
    }

    #[test]
    fn test_substring_match_skips_empty_names() {
        assert!(substring_match("").is_none());
    }

    #[test]
    fn test_regional_lookup() {
        let jollof = lookup_regional("jollof rice").unwrap();
        assert!(jollof.description.contains("West African"));
        assert!(lookup_regional("Jollof Rice").is_none());
    }
}
