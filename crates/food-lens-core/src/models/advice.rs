// ABOUTME: Dietary advisory result type
// ABOUTME: Every advisory answer carries the medical disclaimer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Rule-based dietary guidance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryResult {
    /// The question as asked
    pub query: String,
    /// Guidance sentences joined with single spaces
    pub advice_text: String,
    /// Medical disclaimer, always present
    pub disclaimer: String,
}

impl AdvisoryResult {
    /// Guidance followed by a blank line and the disclaimer
    #[must_use]
    pub fn render(&self) -> String {
        format!("{}\n\n{}", self.advice_text, self.disclaimer)
    }
}
