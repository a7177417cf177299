use serde::{Deserialize, Serialize};

/// A half-open local-time interval `[start_hour, end_hour)` on the 24h clock.
/// A tick at exactly `start_hour` is inside; at exactly `end_hour` it is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl TimeWindow {
    pub const fn new(start_hour: u32, end_hour: u32) -> Self {
        TimeWindow {
            start_hour,
            end_hour,
        }
    }

    pub fn contains_hour(&self, hour: u32) -> bool {
        hour >= self.start_hour && hour < self.end_hour
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_open_boundaries() {
        let w = TimeWindow::new(7, 19);
        assert!(!w.contains_hour(6));
        assert!(w.contains_hour(7));
        assert!(w.contains_hour(18));
        assert!(!w.contains_hour(19));
        assert!(!w.contains_hour(23));
    }
}
