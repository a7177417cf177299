use std::time::Duration;

use crate::domain::TimeWindow;

// Top Level Constants
pub const CLOCK_TICK: Duration = Duration::from_secs(1);
pub const RESTRICTION_CHECK_INTERVAL: Duration = Duration::from_secs(30);

/// Cap on a single candidate fetch so a hung request cannot stall the
/// monitor past the next scheduled retry.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

pub mod rules {
    use super::TimeWindow;

    /// Master list of zone categories (must match the upstream database).
    pub const KNOWN_CATEGORIES: &[&str] = &[
        "childcare",
        "kindergarten",
        "school",
        "university",
        "playground",
        "pitch",
        "sports_centre",
        "track",
        "social_facility",
        "tram_station",
        "pedestrian_zone",
    ];

    /// The one category whose enforcement follows the day/night schedule.
    pub const TIME_GATED_CATEGORY: &str = "pedestrian_zone";

    /// Daytime enforcement hours for the time-gated category.
    pub const RESTRICTION_WINDOW: TimeWindow = TimeWindow::new(7, 19);
}
