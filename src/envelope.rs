// ABOUTME: Request envelope: runs the agent under a hard deadline and normalizes its answer
// ABOUTME: Empty answers become an apology; an elapsed deadline becomes a topical fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Request Envelope
//!
//! The deadline is the host's execution ceiling minus a safety margin, so a
//! response always leaves before the host kills the process. On expiry the
//! agent future is dropped, which cancels any in-flight model or tool call.

use std::future::Future;
use std::time::Duration;

use food_lens_core::constants::messages;
use food_lens_core::errors::AppError;
use tokio::time::timeout;
use tracing::warn;

use crate::config::environment::TimeoutConfig;

/// How an enveloped agent call ended
#[derive(Debug)]
pub enum EnvelopeOutcome {
    /// The agent answered in time (already normalized)
    Answer(String),
    /// The deadline elapsed; carries the fallback text
    TimedOut(String),
    /// The agent failed
    Failed(AppError),
}

impl EnvelopeOutcome {
    /// Text to send back, when the outcome is not a failure
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Answer(text) | Self::TimedOut(text) => Some(text),
            Self::Failed(_) => None,
        }
    }
}

/// Deadline guard around an agent call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestEnvelope {
    deadline: Duration,
}

impl RequestEnvelope {
    /// Envelope with an explicit deadline
    #[must_use]
    pub const fn new(deadline: Duration) -> Self {
        Self { deadline }
    }

    /// Envelope with the configured deadline
    #[must_use]
    pub const fn from_config(config: &TimeoutConfig) -> Self {
        Self::new(config.agent_deadline())
    }

    /// Configured deadline
    #[must_use]
    pub const fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Run `call` for `prompt` under the deadline
    pub async fn ask<F>(&self, prompt: &str, call: F) -> EnvelopeOutcome
    where
        F: Future<Output = Result<String, AppError>>,
    {
        match timeout(self.deadline, call).await {
            Ok(Ok(text)) => EnvelopeOutcome::Answer(normalize(&text)),
            Ok(Err(e)) => EnvelopeOutcome::Failed(e),
            Err(_) => {
                warn!(
                    deadline_secs = self.deadline.as_secs(),
                    "Agent did not answer before the deadline"
                );
                EnvelopeOutcome::TimedOut(messages::timeout_fallback(prompt))
            }
        }
    }
}

/// Trim the agent's text; empty, `none` and `null` become the apology
#[must_use]
pub fn normalize(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed.eq_ignore_ascii_case("null")
    {
        messages::EMPTY_RESPONSE_APOLOGY.to_owned()
    } else {
        trimmed.to_owned()
    }
}
