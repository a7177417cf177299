use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::constants;
use crate::domain::{Category, TimeWindow};

/// The zone rule set: which categories exist, which of them are only
/// enforced during a time window, and which one the day/night schedule
/// drives. Loaded once at startup; the category list is data, not code,
/// so a new zone type is a config change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    pub categories: Vec<Category>,

    /// Enforcement windows per category. A category with no entry here is
    /// restricted around the clock.
    #[serde(default)]
    pub windows: HashMap<Category, TimeWindow>,

    pub time_gated: Category,
}

impl RulesConfig {
    pub fn window_for(&self, category: &Category) -> Option<TimeWindow> {
        self.windows.get(category).copied()
    }

    /// The window the scheduler switches on. The gated category should
    /// always carry one; the built-in default covers a config that forgot.
    pub fn gate_window(&self) -> TimeWindow {
        self.window_for(&self.time_gated)
            .unwrap_or(constants::rules::RESTRICTION_WINDOW)
    }

    pub fn is_known(&self, category: &Category) -> bool {
        self.categories.contains(category)
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        let time_gated = Category::new(constants::rules::TIME_GATED_CATEGORY);
        let mut windows = HashMap::new();
        windows.insert(time_gated.clone(), constants::rules::RESTRICTION_WINDOW);

        RulesConfig {
            categories: constants::rules::KNOWN_CATEGORIES
                .iter()
                .map(|c| Category::new(c))
                .collect(),
            windows,
            time_gated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_gate_pedestrian_zone() {
        let rules = RulesConfig::default();
        let gated = rules.time_gated.clone();
        assert!(rules.is_known(&gated));
        assert_eq!(rules.gate_window(), TimeWindow::new(7, 19));
        // Everything else is enforced 24/7
        assert!(rules.window_for(&Category::new("school")).is_none());
    }

    #[test]
    fn test_rules_deserialize_from_json() {
        let json = r#"{
            "categories": ["School", "park"],
            "windows": { "park": { "start_hour": 8, "end_hour": 20 } },
            "time_gated": "park"
        }"#;
        let rules: RulesConfig = serde_json::from_str(json).unwrap();
        assert!(rules.is_known(&Category::new("school")));
        assert_eq!(rules.gate_window(), TimeWindow::new(8, 20));
    }
}
