//! The four-state status indicator driven by classification results.

use strum::Display;

use crate::domain::{IndeterminateReason, RestrictionVerdict};

/// What the status indicator shows. A live status, re-evaluated every
/// cycle; every state is reachable from every other and none is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MonitorStatus {
    /// No location fix yet.
    Searching,
    Restricted,
    Clear,
    /// The last check failed outright (fetch error / timeout).
    Indeterminate,
}

/// Maps verdicts onto the indicator. Remembers the current state so glue
/// code can react to transitions only instead of redrawing every cycle.
#[derive(Debug, Clone)]
pub struct StatusPresenter {
    status: MonitorStatus,
}

impl StatusPresenter {
    pub fn new() -> Self {
        StatusPresenter {
            status: MonitorStatus::Searching,
        }
    }

    pub fn status(&self) -> MonitorStatus {
        self.status
    }

    /// Returns true when the displayed state changed.
    pub fn on_verdict(&mut self, verdict: RestrictionVerdict) -> bool {
        let next = match verdict {
            RestrictionVerdict::Restricted => MonitorStatus::Restricted,
            RestrictionVerdict::Clear => MonitorStatus::Clear,
            RestrictionVerdict::Indeterminate(IndeterminateReason::NoFixYet) => {
                MonitorStatus::Searching
            }
            RestrictionVerdict::Indeterminate(IndeterminateReason::FetchFailed) => {
                MonitorStatus::Indeterminate
            }
        };
        self.transition(next)
    }

    fn transition(&mut self, next: MonitorStatus) -> bool {
        let changed = self.status != next;
        self.status = next;
        changed
    }
}

impl Default for StatusPresenter {
    fn default() -> Self {
        Self::new()
    }
}
