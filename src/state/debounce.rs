use std::time::{Duration, Instant};

/// Coalesces rapid updates into a single delayed evaluation.
///
/// `reset` arms (or re-arms) the timer; `fire` reports true exactly once
/// after the interval has elapsed with no further resets. Timestamps are
/// injected by the caller, so the event loop drives this with its own clock
/// and tests drive it with arithmetic on a fixed `Instant`.
#[derive(Debug, Clone)]
pub struct Debouncer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(interval: Duration) -> Self {
        Debouncer {
            interval,
            deadline: None,
        }
    }

    /// Arm the timer. Any pending fire is superseded.
    pub fn reset(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    /// Disarm without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// True once the interval has elapsed since the last `reset`. Clears the
    /// deadline, so each reset yields at most one fire.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(300);

    #[test]
    fn test_fires_once_after_interval() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(INTERVAL);

        d.reset(t0);
        assert!(!d.fire(t0 + Duration::from_millis(100)));
        assert!(d.fire(t0 + Duration::from_millis(300)));
        // Already fired; stays quiet until the next reset
        assert!(!d.fire(t0 + Duration::from_millis(400)));
    }

    #[test]
    fn test_reset_supersedes_pending_fire() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(INTERVAL);

        d.reset(t0);
        d.reset(t0 + Duration::from_millis(200));
        // The first deadline (t0+300) has passed, but the re-arm moved it
        assert!(!d.fire(t0 + Duration::from_millis(350)));
        assert!(d.fire(t0 + Duration::from_millis(500)));
    }

    #[test]
    fn test_cancel_disarms() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(INTERVAL);

        d.reset(t0);
        d.cancel();
        assert!(!d.is_armed());
        assert!(!d.fire(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn test_unarmed_never_fires() {
        let mut d = Debouncer::new(INTERVAL);
        assert!(!d.fire(Instant::now()));
    }
}
