//! Timed phase sequences
//!
//! A [`Timeline`] is a list of phases scheduled at offsets from a start
//! instant. It is plain data: the owner polls it with the current time on
//! every tick, and cancels it by dropping or resetting it.

use std::time::{Duration, Instant};

/// Phases scheduled relative to a start instant
#[derive(Debug, Clone)]
pub struct Timeline<P> {
    started: Instant,
    /// (offset from start, phase), sorted by offset
    schedule: Vec<(Duration, P)>,
    /// Number of phases already reported
    reached: usize,
}

impl<P: Copy> Timeline<P> {
    /// Empty timeline starting at `started`
    pub fn new(started: Instant) -> Self {
        Self {
            started,
            schedule: Vec::new(),
            reached: 0,
        }
    }

    /// Schedule `phase` at `offset` after the start
    pub fn at(mut self, offset: Duration, phase: P) -> Self {
        let pos = self.schedule.partition_point(|(o, _)| *o <= offset);
        self.schedule.insert(pos, (offset, phase));
        self
    }

    /// Latest phase reached by `now` that has not been reported yet.
    ///
    /// When several phases became due since the last poll, only the last
    /// one is returned; the earlier ones are skipped.
    pub fn poll(&mut self, now: Instant) -> Option<P> {
        let elapsed = self.elapsed(now);
        let due = self.schedule.partition_point(|(o, _)| *o <= elapsed);
        if due > self.reached {
            self.reached = due;
            Some(self.schedule[due - 1].1)
        } else {
            None
        }
    }

    /// Time since the start, zero if `now` is earlier
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    /// Offset of the last scheduled phase
    pub fn duration(&self) -> Duration {
        self.schedule.last().map(|(o, _)| *o).unwrap_or_default()
    }

    /// Share of the total duration elapsed, clamped to 0.0..=1.0
    pub fn progress(&self, now: Instant) -> f64 {
        let total = self.duration();
        if total.is_zero() {
            return 1.0;
        }
        (self.elapsed(now).as_secs_f64() / total.as_secs_f64()).min(1.0)
    }

    /// All phases have been reported
    pub fn is_finished(&self) -> bool {
        self.reached >= self.schedule.len()
    }

    /// Start over from `started`, forgetting reported phases
    pub fn restart(&mut self, started: Instant) {
        self.started = started;
        self.reached = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Phase {
        A,
        B,
        C,
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_phases_fire_in_order() {
        let start = Instant::now();
        let mut timeline = Timeline::new(start).at(ms(100), Phase::A).at(ms(200), Phase::B);

        assert_eq!(timeline.poll(start), None);
        assert_eq!(timeline.poll(start + ms(100)), Some(Phase::A));
        assert_eq!(timeline.poll(start + ms(150)), None);
        assert_eq!(timeline.poll(start + ms(250)), Some(Phase::B));
        assert!(timeline.is_finished());
        assert_eq!(timeline.poll(start + ms(900)), None);
    }

    #[test]
    fn test_late_poll_skips_to_latest() {
        let start = Instant::now();
        let mut timeline = Timeline::new(start)
            .at(ms(10), Phase::A)
            .at(ms(20), Phase::B)
            .at(ms(30), Phase::C);
        assert_eq!(timeline.poll(start + ms(25)), Some(Phase::B));
        assert_eq!(timeline.poll(start + ms(30)), Some(Phase::C));
    }

    #[test]
    fn test_schedule_sorted_by_offset() {
        let start = Instant::now();
        let mut timeline = Timeline::new(start).at(ms(50), Phase::B).at(ms(10), Phase::A);
        assert_eq!(timeline.poll(start + ms(10)), Some(Phase::A));
        assert_eq!(timeline.duration(), ms(50));
    }

    #[test]
    fn test_progress_and_restart() {
        let start = Instant::now();
        let mut timeline = Timeline::new(start).at(ms(200), Phase::A);
        assert!((timeline.progress(start + ms(50)) - 0.25).abs() < 1e-9);
        assert_eq!(timeline.progress(start + ms(500)), 1.0);

        timeline.poll(start + ms(200));
        timeline.restart(start + ms(300));
        assert!(!timeline.is_finished());
        assert_eq!(timeline.poll(start + ms(400)), None);
        assert_eq!(timeline.poll(start + ms(500)), Some(Phase::A));
    }

    #[test]
    fn test_zero_offset_fires_immediately() {
        let start = Instant::now();
        let mut timeline = Timeline::new(start).at(Duration::ZERO, Phase::C);
        assert_eq!(timeline.poll(start), Some(Phase::C));
    }
}
