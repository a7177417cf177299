//! Day/night gate for the time-windowed category.

use strum::Display;

use crate::domain::{Category, TimeWindow};

/// Emitted at most once per boundary crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GateTransition {
    /// Entered restricted hours: the gated category turns on and its UI
    /// control becomes enabled and user-toggleable.
    Activated,
    /// Left restricted hours: the gated category is forced off and its
    /// control disabled.
    Deactivated,
}

/// Tracks which side of the day/night boundary the last tick was on and
/// reports crossings. The engine applies the transitions to the registry,
/// so repeated ticks inside the same period never re-trigger anything.
#[derive(Debug, Clone)]
pub struct DayNightScheduler {
    gated: Category,
    window: TimeWindow,
    /// None until the first tick establishes the current side.
    last_in_window: Option<bool>,
}

impl DayNightScheduler {
    pub fn new(gated: Category, window: TimeWindow) -> Self {
        DayNightScheduler {
            gated,
            window,
            last_in_window: None,
        }
    }

    pub fn gated(&self) -> &Category {
        &self.gated
    }

    pub fn in_window(&self) -> bool {
        self.last_in_window.unwrap_or(false)
    }

    /// Called once per clock tick with the current local hour.
    ///
    /// The first tick always reports a transition so startup state matches
    /// the clock (outside the window the gated category must start forced
    /// off even though the registry boots all-active). After that, only a
    /// boundary crossing reports.
    pub fn tick(&mut self, hour: u32) -> Option<GateTransition> {
        let now_in = self.window.contains_hour(hour);
        let crossed = self.last_in_window != Some(now_in);
        self.last_in_window = Some(now_in);

        if !crossed {
            return None;
        }
        Some(if now_in {
            GateTransition::Activated
        } else {
            GateTransition::Deactivated
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler() -> DayNightScheduler {
        DayNightScheduler::new(Category::new("pedestrian_zone"), TimeWindow::new(7, 19))
    }

    #[test]
    fn test_first_tick_establishes_state() {
        let mut s = scheduler();
        assert_eq!(s.tick(6), Some(GateTransition::Deactivated));
        assert!(!s.in_window());

        let mut s = scheduler();
        assert_eq!(s.tick(12), Some(GateTransition::Activated));
        assert!(s.in_window());
    }

    #[test]
    fn test_crossing_into_window_activates_exactly_once() {
        let mut s = scheduler();
        s.tick(6);
        assert_eq!(s.tick(7), Some(GateTransition::Activated));
        // Re-ticking within the same restricted period does not re-trigger
        assert_eq!(s.tick(7), None);
        assert_eq!(s.tick(12), None);
        assert_eq!(s.tick(18), None);
    }

    #[test]
    fn test_crossing_out_of_window_deactivates_exactly_once() {
        let mut s = scheduler();
        s.tick(18);
        assert_eq!(s.tick(19), Some(GateTransition::Deactivated));
        assert_eq!(s.tick(20), None);
        assert_eq!(s.tick(23), None);
    }

    #[test]
    fn test_full_day_cycle() {
        let mut s = scheduler();
        let mut transitions = Vec::new();
        for hour in 0..24 {
            if let Some(t) = s.tick(hour) {
                transitions.push((hour, t));
            }
        }
        assert_eq!(
            transitions,
            vec![
                (0, GateTransition::Deactivated),
                (7, GateTransition::Activated),
                (19, GateTransition::Deactivated),
            ]
        );
    }
}
