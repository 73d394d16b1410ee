// ABOUTME: Core data models for nutrition, advisory, and menu domains
// ABOUTME: Plain serde types shared across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Request-scoped, immutable values. Nothing here is persisted.

mod advice;
mod dish;
mod nutrition;

pub use advice::AdvisoryResult;
pub use dish::{DishLookup, DishRecord, RestaurantContext};
pub use nutrition::{NutrientProfile, NutritionLookupResult, SourceLabel};
