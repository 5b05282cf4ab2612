//! Detail drawers
//!
//! A [`Drawer`] holds at most one selected item and walks through timed
//! phases when it opens and closes. Opening makes it visible at once and
//! fully open after a short delay; closing starts the slide-out at once and
//! unmounts the drawer, clearing the selection, when the transition ends.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::AnimationTimings;
use crate::timeline::Timeline;

/// Visibility phase of a drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerPhase {
    #[default]
    Closed,
    /// Mounted, waiting to slide in
    Opening,
    Open,
    /// Sliding out, still mounted
    Closing,
}

/// A drawer showing one item
#[derive(Debug, Clone)]
pub struct Drawer<T> {
    item: Option<T>,
    phase: DrawerPhase,
    timeline: Option<Timeline<DrawerPhase>>,
    open_delay: Duration,
    close_duration: Duration,
}

impl<T> Default for Drawer<T> {
    fn default() -> Self {
        Self::new(&AnimationTimings::default())
    }
}

impl<T> Drawer<T> {
    pub fn new(timings: &AnimationTimings) -> Self {
        Self {
            item: None,
            phase: DrawerPhase::Closed,
            timeline: None,
            open_delay: timings.drawer_open_delay(),
            close_duration: timings.drawer_close(),
        }
    }

    /// Show `item`, replacing any current selection
    pub fn open(&mut self, item: T, now: Instant) {
        debug!("drawer opening");
        self.item = Some(item);
        self.phase = DrawerPhase::Opening;
        self.timeline = Some(Timeline::new(now).at(self.open_delay, DrawerPhase::Open));
        self.tick(now);
    }

    /// Start closing. Escape and a click outside the drawer both end here.
    pub fn close(&mut self, now: Instant) {
        if self.item.is_none() || self.phase == DrawerPhase::Closing {
            return;
        }
        debug!("drawer closing");
        self.phase = DrawerPhase::Closing;
        self.timeline = Some(Timeline::new(now).at(self.close_duration, DrawerPhase::Closed));
        self.tick(now);
    }

    /// Advance timed phases
    pub fn tick(&mut self, now: Instant) {
        let Some(timeline) = self.timeline.as_mut() else {
            return;
        };
        if let Some(phase) = timeline.poll(now) {
            self.phase = phase;
            if phase == DrawerPhase::Closed {
                self.item = None;
            }
        }
        if timeline.is_finished() {
            self.timeline = None;
        }
    }

    pub fn phase(&self) -> DrawerPhase {
        self.phase
    }

    /// Mounted: anything other than closed
    pub fn is_visible(&self) -> bool {
        self.phase != DrawerPhase::Closed
    }

    /// Fully slid in
    pub fn is_open(&self) -> bool {
        self.phase == DrawerPhase::Open
    }

    pub fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }

    pub fn item_mut(&mut self) -> Option<&mut T> {
        self.item.as_mut()
    }

    /// Share of the full drawer width to draw at `now`
    pub fn reveal(&self, now: Instant) -> f64 {
        match self.phase {
            DrawerPhase::Closed | DrawerPhase::Opening => 0.0,
            DrawerPhase::Open => 1.0,
            DrawerPhase::Closing => self
                .timeline
                .as_ref()
                .map(|t| 1.0 - t.progress(now))
                .unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_open_sequence() {
        let start = Instant::now();
        let mut drawer: Drawer<u32> = Drawer::default();
        assert!(!drawer.is_visible());

        drawer.open(7, start);
        assert!(drawer.is_visible());
        assert!(!drawer.is_open());

        drawer.tick(start + ms(49));
        assert_eq!(drawer.phase(), DrawerPhase::Opening);
        drawer.tick(start + ms(50));
        assert!(drawer.is_open());
        assert_eq!(drawer.item(), Some(&7));
        assert_eq!(drawer.reveal(start + ms(60)), 1.0);
    }

    #[test]
    fn test_close_sequence() {
        let start = Instant::now();
        let mut drawer: Drawer<&str> = Drawer::default();
        drawer.open("card", start);
        drawer.tick(start + ms(100));

        drawer.close(start + ms(200));
        assert!(!drawer.is_open());
        assert!(drawer.is_visible());
        assert_eq!(drawer.item(), Some(&"card"));
        assert!((drawer.reveal(start + ms(350)) - 0.5).abs() < 1e-9);

        drawer.tick(start + ms(499));
        assert!(drawer.is_visible());
        drawer.tick(start + ms(500));
        assert!(!drawer.is_visible());
        assert!(drawer.item().is_none());
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut drawer: Drawer<u8> = Drawer::default();
        drawer.close(Instant::now());
        assert_eq!(drawer.phase(), DrawerPhase::Closed);
    }

    #[test]
    fn test_reopen_replaces_selection() {
        let start = Instant::now();
        let mut drawer: Drawer<u8> = Drawer::default();
        drawer.open(1, start);
        drawer.close(start + ms(10));
        drawer.open(2, start + ms(20));
        drawer.tick(start + ms(400));
        assert!(drawer.is_open());
        assert_eq!(drawer.item(), Some(&2));
    }

    #[test]
    fn test_custom_timings() {
        let timings = AnimationTimings {
            drawer_open_delay_ms: 0,
            drawer_close_ms: 0,
            ..AnimationTimings::default()
        };
        let now = Instant::now();
        let mut drawer = Drawer::new(&timings);
        drawer.open('x', now);
        assert!(drawer.is_open());
        drawer.close(now);
        assert!(!drawer.is_visible());
    }
}
