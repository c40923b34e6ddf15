//! Tick-polled debouncing
//!
//! The picker runs a single-threaded event loop, so there are no timer threads here.
//! Callers hand in the current [`Instant`] and poll for due values on every tick.
//! Passing the clock in keeps the timing fully deterministic under test.

use std::time::{Duration, Instant};

/// Collapses a burst of calls into one value delivered after a quiet period
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    last_call: Instant,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the quiet period. A pending value keeps its last call time, so its
    /// deadline moves to `last_call + delay`.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Record a call; replaces any pending value and restarts the quiet period
    pub fn call(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            last_call: now,
        });
    }

    /// Take the pending value if its quiet period has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|p| now.saturating_duration_since(p.last_call) >= self.delay);

        if due {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// When the pending value becomes due
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.last_call + self.delay)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value without delivering it
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn nothing_is_due_without_a_call() {
        let mut d: Debouncer<&str> = Debouncer::new(DELAY);
        assert_eq!(d.poll(Instant::now()), None);
        assert_eq!(d.deadline(), None);
    }

    #[test]
    fn value_is_delivered_once_after_the_delay() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.call("an", t0);

        assert_eq!(d.poll(t0 + ms(299)), None);
        assert_eq!(d.poll(t0 + ms(300)), Some("an"));
        assert_eq!(d.poll(t0 + ms(900)), None);
    }

    #[test]
    fn burst_collapses_into_last_value() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.call("a", t0);
        d.call("an", t0 + ms(100));
        d.call("ann", t0 + ms(200));

        // 300ms after the first call, but only 100ms after the last
        assert_eq!(d.poll(t0 + ms(300)), None);
        assert_eq!(d.deadline(), Some(t0 + ms(500)));
        assert_eq!(d.poll(t0 + ms(500)), Some("ann"));
    }

    #[test]
    fn runs_separated_by_a_quiet_gap_deliver_twice() {
        let mut d = Debouncer::new(DELAY);
        let t0 = Instant::now();
        d.call("a", t0);
        d.call("an", t0 + ms(100));
        assert_eq!(d.poll(t0 + ms(400)), Some("an"));

        let t1 = t0 + ms(900);
        d.call("ann", t1);
        assert_eq!(d.poll(t1 + ms(299)), None);
        assert_eq!(d.poll(t1 + ms(300)), Some("ann"));
        assert_eq!(d.poll(t1 + ms(900)), None);
    }

    #[test]
    fn cancel_drops_the_pending_value() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.call(1, t0);

        assert_eq!(d.cancel(), Some(1));
        assert!(!d.is_pending());
        assert_eq!(d.poll(t0 + ms(1000)), None);
    }

    #[test]
    fn changing_delay_keeps_pending_value() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.call("x", t0);
        d.set_delay(ms(50));

        assert_eq!(d.deadline(), Some(t0 + ms(50)));
        assert_eq!(d.poll(t0 + ms(60)), Some("x"));
    }
}
