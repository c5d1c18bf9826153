//! Coalescing of rapid parameter writes.
//!
//! Time is passed in explicitly so the schedule/cancel/flush ordering can be
//! driven deterministically.

use crate::model::ParamDelta;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct PendingWrite {
    delta: ParamDelta,
    deadline: Instant,
}

/// A single pending write, rescheduled on every new input.
#[derive(Debug, Clone)]
pub struct DebouncedWriter {
    window: Duration,
    pending: Option<PendingWrite>,
}

impl DebouncedWriter {
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Merge `delta` into the pending write and push the deadline to `now + window`.
    pub fn schedule(&mut self, delta: ParamDelta, now: Instant) {
        let deadline = now + self.window;
        match &mut self.pending {
            Some(pending) => {
                pending.delta.merge(delta);
                pending.deadline = deadline;
            }
            None => self.pending = Some(PendingWrite { delta, deadline }),
        }
    }

    /// Take the pending write once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<ParamDelta> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.pending.take().map(|p| p.delta),
            _ => None,
        }
    }

    /// Take the pending write immediately.
    pub fn flush(&mut self) -> Option<ParamDelta> {
        self.pending.take().map(|p| p.delta)
    }

    /// Drop the pending write, returning what was discarded.
    pub fn cancel(&mut self) -> Option<ParamDelta> {
        self.flush()
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(100);

    #[test]
    fn test_poll_waits_for_deadline() {
        let start = Instant::now();
        let mut writer = DebouncedWriter::new(WINDOW);
        writer.schedule(ParamDelta::new().with_set("q", "a"), start);

        assert!(writer.poll(start + Duration::from_millis(99)).is_none());
        let delta = writer.poll(start + WINDOW).expect("ready");
        assert_eq!(delta, ParamDelta::new().with_set("q", "a"));
        assert!(!writer.is_pending());
    }

    #[test]
    fn test_new_input_reschedules_and_coalesces() {
        let start = Instant::now();
        let mut writer = DebouncedWriter::new(WINDOW);
        writer.schedule(ParamDelta::new().with_set("q", "a"), start);
        let later = start + Duration::from_millis(80);
        writer.schedule(ParamDelta::new().with_set("q", "ab"), later);

        assert!(writer.poll(start + WINDOW).is_none());
        assert_eq!(writer.deadline(), Some(later + WINDOW));
        let delta = writer.poll(later + WINDOW).expect("ready");
        assert_eq!(delta, ParamDelta::new().with_set("q", "ab"));
    }

    #[test]
    fn test_cancel_discards() {
        let start = Instant::now();
        let mut writer = DebouncedWriter::new(WINDOW);
        writer.schedule(ParamDelta::new().with_remove("q"), start);
        assert!(writer.cancel().is_some());
        assert!(writer.poll(start + WINDOW * 2).is_none());
    }
}
