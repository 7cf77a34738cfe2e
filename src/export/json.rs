use crate::error::ScorecardError;
use crate::model::Round;

/// Pretty-printed with two-space indentation, fields in declaration order.
///
/// # Errors
///
/// Returns `ScorecardError::Parse` if serialization fails.
pub fn to_json(round: &Round) -> Result<String, ScorecardError> {
    Ok(serde_json::to_string_pretty(round)?)
}

/// Reads back a structured-text export.
///
/// # Errors
///
/// Returns `ScorecardError::Parse` if `s` is not a valid scorecard document.
pub fn from_json(s: &str) -> Result<Round, ScorecardError> {
    Ok(serde_json::from_str(s)?)
}
