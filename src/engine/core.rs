use std::sync::Arc;

use chrono::{DateTime, Local, Timelike};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::config::{RulesConfig, constants};
use crate::data::{CandidateSource, FetchError, LocationSource};
use crate::domain::{Category, IndeterminateReason, Point, RestrictionVerdict, ZoneFeature};
use crate::utils::{Clock, format_clock};

use super::messages::CheckResult;
use super::observer::EngineObserver;
use super::registry::{CategoryRegistry, RegistryError};
use super::scheduler::{DayNightScheduler, GateTransition};
use super::status::{MonitorStatus, StatusPresenter};
use super::{RestrictionClassifier, resolver};

/// The composition root: owns the registry, the decision components and the
/// timers, and pushes every visible consequence out through the observer.
///
/// Single-owner discipline around the registry: every mutation goes through
/// `&mut self`, so a tick or a click is one atomic logical step. Threaded
/// hosts wrap the engine in their own lock.
pub struct WardenEngine {
    registry: CategoryRegistry,
    classifier: RestrictionClassifier,
    scheduler: DayNightScheduler,
    presenter: StatusPresenter,

    source: Arc<dyn CandidateSource>,
    location: Arc<dyn LocationSource>,
    clock: Arc<dyn Clock>,
    observer: Box<dyn EngineObserver>,

    // Background checks report back here; arrivals are applied in order so
    // the latest arrival wins (out-of-order completions cannot flicker an
    // older verdict over a newer one).
    check_tx: UnboundedSender<CheckResult>,
    check_rx: UnboundedReceiver<CheckResult>,
    next_seq: u64,
}

impl WardenEngine {
    pub fn new(
        rules: &RulesConfig,
        source: Arc<dyn CandidateSource>,
        location: Arc<dyn LocationSource>,
        clock: Arc<dyn Clock>,
        observer: Box<dyn EngineObserver>,
    ) -> Self {
        let (check_tx, check_rx) = unbounded_channel();

        WardenEngine {
            registry: CategoryRegistry::new(rules.categories.clone()),
            classifier: RestrictionClassifier::new(rules),
            scheduler: DayNightScheduler::new(rules.time_gated.clone(), rules.gate_window()),
            presenter: StatusPresenter::new(),
            source,
            location,
            clock,
            observer,
            check_tx,
            check_rx,
            next_seq: 0,
        }
    }

    pub fn status(&self) -> MonitorStatus {
        self.presenter.status()
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// THE MONITOR LOOP. One timer drives the day/night clock, another the
    /// restriction re-check; fetches run as spawned tasks so a slow service
    /// can never block a tick.
    pub async fn run(mut self) {
        enum Event {
            ClockTick,
            CheckTick,
            CheckDone(CheckResult),
        }

        let mut clock_tick = tokio::time::interval(constants::CLOCK_TICK);
        let mut check_tick = tokio::time::interval(constants::RESTRICTION_CHECK_INTERVAL);

        loop {
            // Resolve the event first, then act: the recv future borrows the
            // channel, the handlers need the whole engine.
            let event = tokio::select! {
                _ = clock_tick.tick() => Event::ClockTick,
                _ = check_tick.tick() => Event::CheckTick,
                Some(result) = self.check_rx.recv() => Event::CheckDone(result),
            };

            match event {
                Event::ClockTick => self.tick_clock(),
                Event::CheckTick => {
                    self.request_restriction_check();
                }
                Event::CheckDone(result) => self.apply_check_result(result),
            }
        }
    }

    /// Clock-cadence tick: advance the day/night gate and apply any
    /// boundary crossing to the registry, notifying consumers exactly once
    /// per crossing.
    pub fn tick_clock(&mut self) {
        let now = self.clock.now();
        if let Some(transition) = self.scheduler.tick(now.hour()) {
            self.apply_gate_transition(transition, &now);
        }
    }

    fn apply_gate_transition(&mut self, transition: GateTransition, now: &DateTime<Local>) {
        let gated = self.scheduler.gated().clone();
        log::info!(
            "Day/night gate at {}: {transition} ({gated})",
            format_clock(now)
        );

        let result = match transition {
            GateTransition::Activated => self.registry.activate(&gated),
            GateTransition::Deactivated => self.registry.deactivate(&gated),
        };
        if let Err(e) = result {
            // Only possible if the gated category was configured outside
            // the known set; the gate then has nothing to drive.
            log::error!("Gate transition dropped: {e}");
            return;
        }

        let in_window = transition == GateTransition::Activated;
        self.observer.gate_control(in_window, in_window);
        self.observer.filter_changed(&self.registry.snapshot());
    }

    /// Check-cadence tick. With no fix the status stays at searching; with
    /// a fix a fetch task is spawned and reports back over the channel.
    /// Returns whether a check is now in flight.
    pub fn request_restriction_check(&mut self) -> bool {
        let Some(point) = self.location.current() else {
            self.apply_verdict(RestrictionVerdict::Indeterminate(
                IndeterminateReason::NoFixYet,
            ));
            return false;
        };

        let seq = self.next_seq;
        self.next_seq += 1;

        let source = self.source.clone();
        let tx = self.check_tx.clone();
        tokio::spawn(async move {
            let candidates =
                match tokio::time::timeout(constants::FETCH_TIMEOUT, source.fetch_candidates(point))
                    .await
                {
                    Ok(result) => result,
                    Err(_) => Err(FetchError::Timeout),
                };
            // Receiver only drops when the engine does
            let _ = tx.send(CheckResult { seq, candidates });
        });
        true
    }

    /// Issue one check and apply its result before returning. The running
    /// loop instead drains arrivals as they come in.
    pub async fn run_check_once(&mut self) {
        if self.request_restriction_check() {
            if let Some(result) = self.check_rx.recv().await {
                self.apply_check_result(result);
            }
        }
    }

    fn apply_check_result(&mut self, result: CheckResult) {
        let verdict = match result.candidates {
            Ok(candidates) => self.classifier.classify(&candidates, self.clock.now()),
            Err(e) => {
                log::error!("Restriction check {} failed: {e}", result.seq);
                RestrictionVerdict::Indeterminate(IndeterminateReason::FetchFailed)
            }
        };
        self.apply_verdict(verdict);
    }

    fn apply_verdict(&mut self, verdict: RestrictionVerdict) {
        if self.presenter.on_verdict(verdict) {
            self.observer.status_changed(self.presenter.status());
        }
    }

    /// Interactive click path: fetch candidates at the point and resolve
    /// the single best zone. Fetch failures propagate; the caller decides
    /// how to surface them.
    pub async fn resolve_at(&mut self, point: Point) -> Result<Option<ZoneFeature>, FetchError> {
        let candidates = self.source.fetch_candidates(point).await.inspect_err(|e| {
            log::error!("Zone query at ({}, {}) failed: {e}", point.lon, point.lat);
        })?;

        let resolved = resolver::resolve(point, &candidates, &self.registry).cloned();
        self.observer.zone_selected(resolved.as_ref());
        Ok(resolved)
    }

    /// The checkbox path. Returns `Ok(false)` when the scheduler overrode
    /// the request: outside restricted hours the gated category cannot be
    /// re-activated by hand.
    pub fn set_category_visible(
        &mut self,
        category: &Category,
        visible: bool,
    ) -> Result<bool, RegistryError> {
        if visible && category == self.scheduler.gated() && !self.scheduler.in_window() {
            log::warn!("Ignoring manual activation of {category} outside restricted hours");
            return Ok(false);
        }

        if visible {
            self.registry.activate(category)?;
        } else {
            self.registry.deactivate(category)?;
        }
        // Toggling the gated category by hand must re-render its control
        // too, or a checked mark driven by gate signals alone would drift
        // from registry state until the next boundary crossing.
        if category == self.scheduler.gated() {
            self.observer
                .gate_control(self.scheduler.in_window(), self.registry.is_active(category));
        }
        self.observer.filter_changed(&self.registry.snapshot());
        Ok(true)
    }
}
