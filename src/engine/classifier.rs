//! Background monitoring path: is the current location restricted right now?

use std::collections::HashMap;

use chrono::{DateTime, Local, Timelike};

use crate::config::RulesConfig;
use crate::domain::{Category, RestrictionVerdict, TimeWindow, ZoneFeature};

/// Decides the restriction verdict for a set of zones covering one point.
///
/// Deliberately ignores the visibility filter: a zone the user hid from the
/// map is still physically real, so it still restricts. Candidates must
/// already be "zones containing the current location" — the classifier
/// cannot tell "no zones here" from "couldn't ask", which is why a failed
/// fetch is reported by the caller as indeterminate instead of being passed
/// in as an empty list.
pub struct RestrictionClassifier {
    windows: HashMap<Category, TimeWindow>,
}

impl RestrictionClassifier {
    pub fn new(rules: &RulesConfig) -> Self {
        RestrictionClassifier {
            windows: rules.windows.clone(),
        }
    }

    /// A category with no configured window is enforced around the clock;
    /// one with a window is enforced only inside `[start, end)`.
    pub fn restricted_now(&self, category: &Category, hour: u32) -> bool {
        match self.windows.get(category) {
            Some(window) => window.contains_hour(hour),
            None => true,
        }
    }

    /// The verdict is `Restricted` iff any candidate is enforced right now.
    /// An explicit `any()` so the result can never depend on input order.
    pub fn classify(&self, candidates: &[ZoneFeature], now: DateTime<Local>) -> RestrictionVerdict {
        if candidates.is_empty() {
            return RestrictionVerdict::Clear;
        }
        let hour = now.hour();
        let restricted = candidates
            .iter()
            .any(|c| self.restricted_now(&c.category, hour));
        if restricted {
            RestrictionVerdict::Restricted
        } else {
            RestrictionVerdict::Clear
        }
    }
}
