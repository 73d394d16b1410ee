// ABOUTME: Rule-based dietary advisory responder with a mandatory medical disclaimer
// ABOUTME: Pure and deterministic; no I/O and no failure modes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dietary advisory
//!
//! Two branches. A health branch fires when the query mentions a health keyword
//! or the caller passes health conditions; it opens with an acknowledgement and
//! adds the first matching condition rule. Otherwise a topic branch picks a
//! general answer. Restriction guidance lines and the disclaimer are appended in
//! both cases.

use food_lens_core::models::AdvisoryResult;

/// Appended to every answer
pub const MEDICAL_DISCLAIMER: &str = "⚠️ This is general information only. Always consult healthcare providers for medical advice, especially regarding allergies, medications, or health conditions.";

const HEALTH_KEYWORDS: [&str; 25] = [
    "allergy",
    "allergic",
    "diabetes",
    "diabetic",
    "blood pressure",
    "hypertension",
    "cholesterol",
    "heart",
    "kidney",
    "liver",
    "medication",
    "pregnant",
    "pregnancy",
    "breastfeeding",
    "celiac",
    "gluten",
    "lactose",
    "intolerant",
    "sensitivity",
    "weight loss",
    "diet",
    "keto",
    "low carb",
    "low sodium",
    "low fat",
];

const HEALTH_OPENING: &str = "I understand you have specific dietary concerns.";

/// Condition rules in priority order: trigger words and guidance
const CONDITION_RULES: [(&[&str], &str); 5] = [
    (
        &["allergy", "allergic"],
        "For food allergies, it's crucial to inform restaurant staff about your specific allergies. Cross-contamination can occur in kitchens, so always verify ingredients and preparation methods.",
    ),
    (
        &["diabetes", "diabetic", "blood sugar"],
        "For diabetes management, consider dishes with lean proteins, vegetables, and complex carbohydrates. Be mindful of hidden sugars in sauces and dressings.",
    ),
    (
        &["heart", "cholesterol", "blood pressure"],
        "For heart health, look for grilled, baked, or steamed options. Consider dishes with less sodium and saturated fat.",
    ),
    (
        &["weight loss", "calories", "diet"],
        "For weight management, consider portion sizes, cooking methods, and balance of nutrients. Grilled proteins with vegetables are often good choices.",
    ),
    (
        &["gluten", "celiac"],
        "For gluten concerns, verify that dishes and their ingredients are gluten-free. Cross-contamination can occur with shared cooking surfaces and utensils.",
    ),
];

const GENERIC_CONDITION_ADVICE: &str = "When dining with dietary restrictions, don't hesitate to ask about ingredients, preparation methods, and possible substitutions.";

const BALANCED_MEAL_ADVICE: &str = "For a balanced meal, consider including lean proteins, vegetables, whole grains, and healthy fats. Portion control and cooking methods also matter.";

const PLANT_BASED_ADVICE: &str = "Plant-based options can provide excellent nutrition. Look for dishes with legumes, nuts, seeds, and a variety of vegetables for complete nutrition.";

const CLARIFYING_QUESTION: &str = "I'd be happy to help with your dietary question. Could you provide more specific details about what you're looking for?";

const RESTRICTION_GUIDANCE: [(&str, &str); 7] = [
    (
        "vegetarian",
        "Vegetarian options should exclude meat, poultry, and fish.",
    ),
    (
        "vegan",
        "Vegan options should exclude all animal products including dairy, eggs, and honey.",
    ),
    (
        "gluten-free",
        "Gluten-free options should avoid wheat, barley, rye, and cross-contamination.",
    ),
    (
        "dairy-free",
        "Dairy-free options should exclude milk, cheese, butter, and other dairy products.",
    ),
    (
        "nut-free",
        "Nut-free options require careful attention to ingredients and cross-contamination.",
    ),
    (
        "low-sodium",
        "Low-sodium options should limit added salt and high-sodium ingredients.",
    ),
    (
        "keto",
        "Keto-friendly options should be high in fat, moderate in protein, and very low in carbs.",
    ),
];

fn mentions_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| text.contains(word))
}

fn condition_advice(text: &str) -> &'static str {
    CONDITION_RULES
        .iter()
        .find(|(triggers, _)| mentions_any(text, triggers))
        .map_or(GENERIC_CONDITION_ADVICE, |(_, advice)| *advice)
}

fn topic_advice(query: &str) -> &'static str {
    if mentions_any(query, &["healthy", "nutrition"]) {
        BALANCED_MEAL_ADVICE
    } else if mentions_any(query, &["vegetarian", "vegan"]) {
        PLANT_BASED_ADVICE
    } else {
        CLARIFYING_QUESTION
    }
}

fn restriction_guidance(restriction: &str) -> Option<&'static str> {
    let key = restriction.trim().to_lowercase();
    RESTRICTION_GUIDANCE
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, guidance)| *guidance)
}

/// Produce dietary guidance for `query`
#[must_use]
pub fn advise(query: &str, restrictions: &[String], conditions: &[String]) -> AdvisoryResult {
    let query_lower = query.to_lowercase();
    let mut parts: Vec<&str> = Vec::new();

    if mentions_any(&query_lower, &HEALTH_KEYWORDS) || !conditions.is_empty() {
        parts.push(HEALTH_OPENING);
        let mut haystack = query_lower.clone();
        for condition in conditions {
            haystack.push(' ');
            haystack.push_str(&condition.to_lowercase());
        }
        parts.push(condition_advice(&haystack));
    } else {
        parts.push(topic_advice(&query_lower));
    }

    parts.extend(restrictions.iter().filter_map(|r| restriction_guidance(r)));

    AdvisoryResult {
        query: query.to_owned(),
        advice_text: parts.join(" "),
        disclaimer: MEDICAL_DISCLAIMER.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allergy_query() {
        let result = advise("I have a peanut allergy", &[], &[]);
        let text = result.render();
        assert!(text.starts_with(HEALTH_OPENING));
        assert!(text.contains("For food allergies"));
        assert!(text.ends_with(MEDICAL_DISCLAIMER));
    }

    #[test]
    fn test_conditions_trigger_health_branch_and_rules() {
        let result = advise("What should I order?", &[], &["Diabetes".to_owned()]);
        assert!(result.advice_text.contains("For diabetes management"));
    }

    #[test]
    fn test_rule_priority() {
        // both heart and allergy keywords: allergy wins
        let result = advise("allergic and worried about my heart", &[], &[]);
        assert!(result.advice_text.contains("For food allergies"));
        assert!(!result.advice_text.contains("For heart health"));
    }

    #[test]
    fn test_health_branch_generic_fallback() {
        let result = advise("I'm pregnant, anything to avoid?", &[], &[]);
        assert_eq!(
            result.advice_text,
            format!("{HEALTH_OPENING} {GENERIC_CONDITION_ADVICE}")
        );
    }

    #[test]
    fn test_topic_branch() {
        assert_eq!(
            advise("Is this healthy?", &[], &[]).advice_text,
            BALANCED_MEAL_ADVICE
        );
        assert_eq!(
            advise("Any vegan dishes?", &[], &[]).advice_text,
            PLANT_BASED_ADVICE
        );
        assert_eq!(advise("Hello", &[], &[]).advice_text, CLARIFYING_QUESTION);
    }

    #[test]
    fn test_restrictions_are_case_insensitive_and_ordered() {
        let restrictions = vec!["Vegan".to_owned(), "paleo".to_owned(), "KETO".to_owned()];
        let result = advise("Hello", &restrictions, &[]);
        let vegan = result.advice_text.find("Vegan options").unwrap();
        let keto = result.advice_text.find("Keto-friendly").unwrap();
        assert!(vegan < keto);
        assert!(!result.advice_text.to_lowercase().contains("paleo"));
    }
}
