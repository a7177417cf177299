use crate::data::FetchError;
use crate::domain::ZoneFeature;

/// The outcome of one background restriction check, delivered over the
/// engine's result channel. Checks are unordered in flight; the engine
/// applies arrivals in order, so the latest arrival wins regardless of
/// which tick issued it.
#[derive(Debug)]
pub struct CheckResult {
    pub seq: u64,
    pub candidates: Result<Vec<ZoneFeature>, FetchError>,
}
