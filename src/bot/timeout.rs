//! Turn clock and the cancellation check the search cores run at every node.

use crate::error::SearchCancelled;
use std::time::{Duration, Instant};

/// A query for the milliseconds left in the current turn.
///
/// The budget belongs to the caller; the search only reads it.
pub trait TimeBudget {
    fn time_left(&self) -> f64;
}

impl<F> TimeBudget for F
where
    F: Fn() -> f64,
{
    fn time_left(&self) -> f64 {
        self()
    }
}

/// Wall-clock countdown ending at a fixed instant.
///
/// A limit too far out to represent as an [`Instant`] never expires.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    end: Option<Instant>,
}

impl Deadline {
    pub fn after(limit: Duration) -> Self {
        Self {
            end: Instant::now().checked_add(limit),
        }
    }

    pub fn at(end: Instant) -> Self {
        Self { end: Some(end) }
    }
}

impl TimeBudget for Deadline {
    /// Goes negative once the deadline has passed.
    fn time_left(&self) -> f64 {
        let Some(end) = self.end else {
            return f64::INFINITY;
        };
        let now = Instant::now();
        if now <= end {
            (end - now).as_secs_f64() * 1000.0
        } else {
            -((now - end).as_secs_f64() * 1000.0)
        }
    }
}

/// Compares the remaining time against a fixed threshold.
#[derive(Clone, Copy)]
pub struct TimeGuard<'a> {
    budget: &'a dyn TimeBudget,
    threshold_ms: f64,
}

impl<'a> TimeGuard<'a> {
    pub fn new(budget: &'a dyn TimeBudget, threshold_ms: f64) -> Self {
        Self {
            budget,
            threshold_ms,
        }
    }

    /// Fails with [`SearchCancelled`] when fewer than `threshold_ms`
    /// milliseconds remain.
    pub fn check(&self) -> Result<(), SearchCancelled> {
        if self.budget.time_left() < self.threshold_ms {
            return Err(SearchCancelled);
        }
        Ok(())
    }
}
