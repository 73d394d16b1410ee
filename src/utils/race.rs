// ABOUTME: First-success race over concurrently spawned tasks with per-task and overall budgets
// ABOUTME: Losers are aborted as soon as a winner is found
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! First-success race
//!
//! Every contender runs on its own task under its own budget. The select loop
//! takes completions in arrival order and returns the first `Some`. A contender
//! that yields `None`, exceeds its budget, or panics is logged and skipped; the
//! loop keeps waiting for the rest until the overall deadline. On return the
//! remaining tasks are aborted, so late completions are never observed.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tokio::task::JoinSet;
use tokio::time::{timeout, timeout_at, Instant};
use tracing::{debug, warn};

type BoxedTask<T> = Pin<Box<dyn Future<Output = Option<T>> + Send + 'static>>;

/// One participant in a race
pub struct Contender<T> {
    label: &'static str,
    budget: Duration,
    task: BoxedTask<T>,
}

impl<T> Contender<T> {
    /// Wrap a future that resolves to `Some` on a usable result
    pub fn new<F>(label: &'static str, budget: Duration, task: F) -> Self
    where
        F: Future<Output = Option<T>> + Send + 'static,
    {
        Self {
            label,
            budget,
            task: Box::pin(task),
        }
    }
}

/// Run all contenders concurrently and return the first usable result with its label.
///
/// Returns `None` when every contender fails or the overall budget elapses first.
pub async fn first_success<T>(
    contenders: Vec<Contender<T>>,
    overall: Duration,
) -> Option<(&'static str, T)>
where
    T: Send + 'static,
{
    if contenders.is_empty() {
        return None;
    }

    let deadline = Instant::now() + overall;
    let mut set = JoinSet::new();
    for Contender {
        label,
        budget,
        task,
    } in contenders
    {
        set.spawn(async move { (label, timeout(budget, task).await) });
    }

    let select = async {
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((label, Ok(Some(value)))) => return Some((label, value)),
                Ok((label, Ok(None))) => {
                    debug!(source = label, "contender finished without a usable result");
                }
                Ok((label, Err(_))) => {
                    debug!(source = label, "contender exceeded its budget");
                }
                Err(e) => {
                    warn!(error = %e, "contender task failed");
                }
            }
        }
        None
    };

    let winner = timeout_at(deadline, select).await.unwrap_or_else(|_| {
        debug!(overall_secs = overall.as_secs(), "race budget elapsed");
        None
    });
    set.abort_all();
    winner
}
