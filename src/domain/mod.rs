// Domain types and value objects
mod category;
mod point;
mod time_window;
mod verdict;
mod zone;

// Re-export commonly used types
pub use category::Category;
pub use point::Point;
pub use time_window::TimeWindow;
pub use verdict::{IndeterminateReason, RestrictionVerdict};
pub use zone::{ZoneFeature, ZoneGeometry, ZonePolygon};
