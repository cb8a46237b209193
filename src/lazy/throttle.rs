//! Generic fixed-window throttle.
//!
//! Rate-limits a handler to at most one run per window regardless of event
//! frequency. Leading and trailing edges are configurable; the default runs
//! on both, which coalesces a burst of events into an immediate run plus one
//! deferred run carrying the burst's tail.
//!
//! The throttle never owns a clock: callers pass `Instant`s in, so the whole
//! thing is deterministic under test.

use std::time::{Duration, Instant};

/// Fixed-window throttle with configurable leading/trailing edges.
#[derive(Debug, Clone)]
pub struct Throttle {
    window: Duration,
    leading: bool,
    trailing: bool,
    window_start: Option<Instant>,
    trailing_pending: bool,
}

impl Throttle {
    /// Create a throttle that runs on both the leading and trailing edge.
    pub fn new(window: Duration) -> Self {
        Self::with_edges(window, true, true)
    }

    /// Create a throttle with explicit edge behavior.
    ///
    /// `leading` runs the handler immediately when an event opens a new
    /// window; `trailing` runs it once more after the window closes if any
    /// event arrived inside the window.
    pub fn with_edges(window: Duration, leading: bool, trailing: bool) -> Self {
        Self {
            window,
            leading,
            trailing,
            window_start: None,
            trailing_pending: false,
        }
    }

    /// The configured window length.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record an event at `now`. Returns true if the handler should run
    /// immediately (leading edge).
    ///
    /// Events inside an open window are coalesced into at most one trailing
    /// run, released later by [`Throttle::release`].
    pub fn record(&mut self, now: Instant) -> bool {
        match self.window_start {
            Some(start) if now < start + self.window => {
                if self.trailing {
                    self.trailing_pending = true;
                }
                false
            }
            _ => {
                self.window_start = Some(now);
                if self.leading {
                    true
                } else {
                    self.trailing_pending = self.trailing;
                    false
                }
            }
        }
    }

    /// Poll for a trailing-edge run. Returns true exactly once per window
    /// that had coalesced events, after the window has elapsed.
    pub fn release(&mut self, now: Instant) -> bool {
        match self.window_start {
            Some(start) if self.trailing_pending && now >= start + self.window => {
                self.trailing_pending = false;
                // The trailing run opens a fresh window so a follow-up event
                // cannot fire again immediately.
                self.window_start = Some(now);
                true
            }
            _ => false,
        }
    }

    /// Drop all throttle state. Pending trailing runs are discarded.
    pub fn reset(&mut self) {
        self.window_start = None;
        self.trailing_pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(200);

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn first_event_runs_on_leading_edge() {
        let mut throttle = Throttle::new(WINDOW);
        let base = Instant::now();
        assert!(throttle.record(base));
    }

    #[test]
    fn events_inside_window_are_coalesced() {
        let mut throttle = Throttle::new(WINDOW);
        let base = Instant::now();
        assert!(throttle.record(base));
        assert!(!throttle.record(at(base, 50)));
        assert!(!throttle.record(at(base, 100)));
        assert!(!throttle.record(at(base, 199)));
    }

    #[test]
    fn coalesced_events_release_once_after_window() {
        let mut throttle = Throttle::new(WINDOW);
        let base = Instant::now();
        throttle.record(base);
        throttle.record(at(base, 50));

        assert!(!throttle.release(at(base, 199)));
        assert!(throttle.release(at(base, 200)));
        // Exactly once.
        assert!(!throttle.release(at(base, 201)));
    }

    #[test]
    fn release_without_coalesced_events_is_noop() {
        let mut throttle = Throttle::new(WINDOW);
        let base = Instant::now();
        throttle.record(base);
        assert!(!throttle.release(at(base, 500)));
    }

    #[test]
    fn event_after_window_opens_new_leading_edge() {
        let mut throttle = Throttle::new(WINDOW);
        let base = Instant::now();
        assert!(throttle.record(base));
        assert!(throttle.record(at(base, 200)));
    }

    #[test]
    fn trailing_run_opens_a_fresh_window() {
        let mut throttle = Throttle::new(WINDOW);
        let base = Instant::now();
        throttle.record(base);
        throttle.record(at(base, 100));
        assert!(throttle.release(at(base, 200)));
        // Window restarted at the trailing run, so an event 50ms later
        // is still coalesced.
        assert!(!throttle.record(at(base, 250)));
    }

    #[test]
    fn leading_disabled_defers_first_run_to_trailing() {
        let mut throttle = Throttle::with_edges(WINDOW, false, true);
        let base = Instant::now();
        assert!(!throttle.record(base));
        assert!(throttle.release(at(base, 200)));
    }

    #[test]
    fn trailing_disabled_never_releases() {
        let mut throttle = Throttle::with_edges(WINDOW, true, false);
        let base = Instant::now();
        assert!(throttle.record(base));
        throttle.record(at(base, 50));
        assert!(!throttle.release(at(base, 400)));
    }

    #[test]
    fn reset_discards_pending_trailing_run() {
        let mut throttle = Throttle::new(WINDOW);
        let base = Instant::now();
        throttle.record(base);
        throttle.record(at(base, 50));
        throttle.reset();
        assert!(!throttle.release(at(base, 400)));
        // And the next event is a fresh leading edge.
        assert!(throttle.record(at(base, 401)));
    }
}
