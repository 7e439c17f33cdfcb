//! Cancellable single-shot quiet-period timer.
//!
//! The ranking engine rearms the timer on every keystroke; recomputation
//! fires only once the configured quiet period has elapsed with no further
//! input. Time is injected through [`Clock`] so tests can step a manual
//! clock instead of sleeping.

use std::time::{Duration, Instant};

pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Token identifying one scheduled firing. Rearming invalidates any
/// previously issued token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskToken(u64);

#[derive(Clone, Debug)]
pub struct Debouncer {
    quiet_period: Duration,
    deadline: Option<Instant>,
    generation: u64,
}

impl Debouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self { quiet_period, deadline: None, generation: 0 }
    }

    /// Schedule (or reschedule) the single pending firing for one quiet
    /// period from `now`. Any earlier pending firing is discarded.
    pub fn arm(&mut self, now: Instant) -> TaskToken {
        self.deadline = Some(now + self.quiet_period);
        self.generation += 1;
        TaskToken(self.generation)
    }

    /// Discard the pending firing, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether the pending firing has come due.
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Consume the pending firing if its deadline has passed. Returns true
    /// at most once per arm.
    pub fn fire(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

pub mod testing {
    //! Manual clock for unit and integration tests.

    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    use super::Clock;

    /// Test clock advanced explicitly. Clones share the same underlying
    /// instant, so a test can hold one handle while the engine holds another.
    #[derive(Clone, Debug)]
    pub struct ManualClock {
        now: Rc<Cell<Instant>>,
    }

    impl ManualClock {
        pub fn start() -> Self {
            Self { now: Rc::new(Cell::new(Instant::now())) }
        }

        pub fn advance(&self, by: Duration) {
            self.now.set(self.now.get() + by);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.now.get()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::testing::ManualClock;
    use super::{Clock, Debouncer};

    #[test]
    fn fires_once_after_quiet_period() {
        let clock = ManualClock::start();
        let mut debouncer = Debouncer::new(Duration::from_millis(250));

        debouncer.arm(clock.now());
        assert!(!debouncer.fire(clock.now()));

        clock.advance(Duration::from_millis(250));
        assert!(debouncer.fire(clock.now()));
        assert!(!debouncer.fire(clock.now()), "a firing is consumed exactly once");
    }

    #[test]
    fn rearming_pushes_the_deadline_out() {
        let clock = ManualClock::start();
        let mut debouncer = Debouncer::new(Duration::from_millis(250));

        debouncer.arm(clock.now());
        clock.advance(Duration::from_millis(200));
        debouncer.arm(clock.now()); // keystroke before the quiet period ends

        clock.advance(Duration::from_millis(100));
        assert!(!debouncer.fire(clock.now()), "only 100ms since the rearm");

        clock.advance(Duration::from_millis(150));
        assert!(debouncer.fire(clock.now()));
    }

    #[test]
    fn rearming_invalidates_the_previous_token() {
        let clock = ManualClock::start();
        let mut debouncer = Debouncer::new(Duration::from_millis(250));

        let first = debouncer.arm(clock.now());
        let second = debouncer.arm(clock.now());
        assert_ne!(first, second);
    }

    #[test]
    fn cancel_discards_the_pending_firing() {
        let clock = ManualClock::start();
        let mut debouncer = Debouncer::new(Duration::from_millis(250));

        debouncer.arm(clock.now());
        debouncer.cancel();
        clock.advance(Duration::from_secs(1));
        assert!(!debouncer.fire(clock.now()));
        assert!(!debouncer.is_armed());
    }
}
