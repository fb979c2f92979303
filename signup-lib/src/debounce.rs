use std::time::{Duration, Instant};

/// Delay used for input-triggered validation.
pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Trailing-edge debouncer: each `schedule` supersedes any pending value,
/// so only the last call within the delay window fires.
///
/// Time is passed in rather than read, so the event loop drives it with the
/// same clock it polls with and tests can drive it with synthetic instants.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `value` to fire after the delay, cancelling any pending value.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
    }

    /// Take the pending value if its deadline has passed. Fires at most once
    /// per schedule.
    pub fn poll_ready(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref()?.deadline > now {
            return None;
        }
        self.pending.take().map(|pending| pending.value)
    }

    /// Drop any pending value without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending value, for choosing a poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_DELAY)
    }
}
