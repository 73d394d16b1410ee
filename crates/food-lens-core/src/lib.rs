// ABOUTME: Core types and constants for the Food Lens advisory agent
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Food Lens Core
//!
//! Foundation crate providing shared types and constants for the Food Lens
//! advisory agent. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ToolError`
//! - **models**: Nutrition, advisory, and menu domain types
//! - **constants**: Timeouts, environment variable names, and fixed response texts

/// Unified error handling system with standard error codes and HTTP statuses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (nutrition results, advisory results, dish records, request context)
pub mod models;
