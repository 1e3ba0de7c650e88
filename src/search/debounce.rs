use std::time::Duration;
use web_time::Instant;

/// Trailing-edge debounce over values of type `T`.
///
/// Each `call` replaces the pending value and pushes the deadline to
/// `now + delay`. Nothing fires on the leading edge and there is no maximum
/// wait: a stream of calls spaced closer than `delay` never fires until it
/// stops. The clock is supplied by the caller so the same state machine
/// serves the UI timer and deterministic tests.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedules `value`, discarding whatever was pending. Returns the new deadline.
    pub fn call(&mut self, value: T, now: Instant) -> Instant {
        let deadline = now + self.delay;
        self.pending = Some((value, deadline));
        deadline
    }

    /// Takes the pending value once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.deadline().is_some_and(|deadline| now >= deadline) {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }

    /// Drops the pending value without firing.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
