use crate::domain::{Category, ZoneFeature};
use crate::engine::MonitorStatus;

/// One-way notifications to whatever renders the engine's state (map
/// filter, detail panel, status icon, the gated category's checkbox).
/// The engine pushes; consumers never feed state back through this.
pub trait EngineObserver: Send {
    /// The active-category set changed; re-filter the rendered layers.
    fn filter_changed(&mut self, active: &[Category]) {
        let _ = active;
    }

    /// Interactive resolution picked a zone (or nothing — clear the
    /// highlight and close the panel).
    fn zone_selected(&mut self, zone: Option<&ZoneFeature>) {
        let _ = zone;
    }

    /// The status indicator state changed.
    fn status_changed(&mut self, status: MonitorStatus) {
        let _ = status;
    }

    /// Render the gated category's control: enabled iff inside restricted
    /// hours, checked mirroring its registry state.
    fn gate_control(&mut self, enabled: bool, checked: bool) {
        let _ = (enabled, checked);
    }
}

/// Observer that renders to the log. Backs the terminal monitor binary.
pub struct LogObserver;

impl EngineObserver for LogObserver {
    fn filter_changed(&mut self, active: &[Category]) {
        let names: Vec<&str> = active.iter().map(Category::as_str).collect();
        log::info!("Active categories: [{}]", names.join(", "));
    }

    fn zone_selected(&mut self, zone: Option<&ZoneFeature>) {
        match zone {
            Some(z) => log::info!(
                "Zone under position: {} ({})",
                z.name().unwrap_or("<unnamed>"),
                z.category
            ),
            None => log::info!("No visible zone under position"),
        }
    }

    fn status_changed(&mut self, status: MonitorStatus) {
        log::info!("Status: {status}");
    }

    fn gate_control(&mut self, enabled: bool, checked: bool) {
        log::info!(
            "Time-gated control: {} / {}",
            if enabled { "enabled" } else { "disabled" },
            if checked { "checked" } else { "unchecked" }
        );
    }
}
