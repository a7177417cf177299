use crate::domain::Point;

/// Current device position, updated by whatever positioning glue the host
/// application has. `None` means no fix yet and keeps the status at
/// "searching".
pub trait LocationSource: Send + Sync {
    fn current(&self) -> Option<Point>;
}

/// A position that never moves. The terminal monitor pins the watched spot
/// on the command line; tests use it for determinism.
pub struct FixedLocation(pub Point);

impl LocationSource for FixedLocation {
    fn current(&self) -> Option<Point> {
        Some(self.0)
    }
}

/// A source that never acquires a fix.
pub struct NoFix;

impl LocationSource for NoFix {
    fn current(&self) -> Option<Point> {
        None
    }
}
