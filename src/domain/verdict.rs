use strum::Display;

/// Why a verdict is neither restricted nor clear. The presenter needs to
/// tell these apart: no fix keeps the status at "searching", a failed query
/// shows an explicit error state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IndeterminateReason {
    NoFixYet,
    FetchFailed,
}

/// The classifier's answer for the current location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RestrictionVerdict {
    /// At least one zone at the location is enforced right now.
    Restricted,
    /// No zone at the location is enforced right now (including "no zones").
    Clear,
    /// Could not decide; see the reason tag.
    Indeterminate(IndeterminateReason),
}
