// SPDX-License-Identifier: Apache-2.0

//! Trailing-edge debounce timer.

use std::time::Duration;
use tokio::time::Instant;

/// Coalesces a burst of values into the last one after a quiet period.
///
/// At most one value is pending. Scheduling replaces the pending value and
/// pushes the deadline out, so only the latest input is ever released.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug)]
struct Pending<T> {
    deadline: Instant,
    value: T,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            pending: None,
        }
    }

    /// Cancels any pending value and schedules `value` for `now + delay`.
    /// Returns the new deadline.
    pub fn schedule(&mut self, value: T, now: Instant) -> Instant {
        let deadline = now + self.delay;
        self.pending = Some(Pending { deadline, value });
        deadline
    }

    /// Drops the pending value, if any.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Releases the pending value once its deadline has passed.
    pub fn take_if_elapsed(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }
}
