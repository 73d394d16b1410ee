// ABOUTME: Nutrition resolution: static tables, estimator, extraction, narrative, sources, resolver
// ABOUTME: Entry point is NutritionResolver::resolve, which never fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Keyword category estimator
pub mod estimator;
/// Upstream nutrient name and free-text extraction
pub mod extraction;
/// Narrative rendering
pub mod narrative;
/// Multi-stage resolver
pub mod resolver;
/// External source trait and adapters
pub mod sources;
/// Static nutrient tables
pub mod tables;

pub use resolver::{NutritionResolver, ResolverBudgets};
pub use sources::{NutritionSource, SourceOutcome};
