//! Server-assigned identifiers for projects and expenses.
//!
//! Identifiers are plain positive `i64` values. The default strategy follows the
//! wall clock (Unix seconds) so ids stay readable as creation timestamps, but
//! it never hands out the same value twice within a process.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use rand::Rng;
use serde::Deserialize;

/// How new identifiers are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Current Unix time in seconds, bumped past the last issued id on collision.
    #[default]
    Clock,
    /// Uniformly random positive 63-bit value.
    Random,
}

/// Thread-safe identifier generator shared by all request handlers.
#[derive(Debug)]
pub struct IdGenerator {
    strategy: IdStrategy,
    last: AtomicI64,
}

impl IdGenerator {
    /// Creates a generator using the given strategy.
    #[must_use]
    pub const fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            last: AtomicI64::new(0),
        }
    }

    /// Returns the configured strategy.
    #[must_use]
    pub const fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Issues the next identifier.
    pub fn next_id(&self) -> i64 {
        match self.strategy {
            IdStrategy::Clock => self.next_after(Utc::now().timestamp()),
            IdStrategy::Random => rand::rng().random_range(1..=i64::MAX),
        }
    }

    /// Issues `max(now, last + 1)` and records it as the last id.
    fn next_after(&self, now: i64) -> i64 {
        let step = |last: i64| now.max(last.saturating_add(1));
        let previous = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| Some(step(last)))
            .unwrap_or_else(|last| last);
        step(previous)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}
