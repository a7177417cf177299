use chrono::{DateTime, Local};

pub const CLOCK_DISPLAY_FORMAT: &str = "%H:%M:%S";

/// Wall-clock source in the deployment's local time zone.
/// Everything that needs the time goes through this so scheduling logic
/// stays deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock pinned to one instant. Used by tests and replay tooling.
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

// Used for display purposes
pub fn format_clock(now: &DateTime<Local>) -> String {
    now.format(CLOCK_DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_is_stable() {
        let at = Local.with_ymd_and_hms(2026, 8, 25, 7, 30, 0).unwrap();
        let clock = FixedClock(at);
        assert_eq!(clock.now(), clock.now());
        assert_eq!(format_clock(&clock.now()), "07:30:00");
    }
}
