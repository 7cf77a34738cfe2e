use std::collections::HashMap;
use std::hash::BuildHasher;
use std::num::IntErrorKind;

use crate::error::ScorecardError;
use crate::export::ExportFormat;
use crate::model::{HoleEdit, HoleField};
use crate::mvu::Msg;

/// Form key every scorecard input posts its value under.
pub const VALUE_KEY: &str = "value";

fn form_value<S: BuildHasher>(form: &HashMap<String, String, S>) -> &str {
    form.get(VALUE_KEY).map_or("", String::as_str)
}

/// Turns `/holes/{number}/{field}` plus the posted form into a hole edit.
/// A numeric `number` that no hole can carry (negative, or past `u32`)
/// decodes to `None`, the same no-op as any other unknown hole.
///
/// # Errors
///
/// Returns `ScorecardError::Parse` when `number` is not numeric and
/// `ScorecardError::UnknownField` for an unknown field name.
pub fn decode_hole_edit<S: BuildHasher>(
    number: &str,
    field: &str,
    form: &HashMap<String, String, S>,
) -> Result<Option<Msg>, ScorecardError> {
    let field: HoleField = field.parse()?;
    let number = match number.trim().parse::<i64>() {
        Ok(n) => u32::try_from(n).ok(),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            None
        }
        Err(_) => {
            return Err(ScorecardError::Parse(format!(
                "invalid hole number '{number}'"
            )));
        }
    };
    let Some(number) = number else {
        return Ok(None);
    };
    let edit = HoleEdit::from_input(field, form_value(form));
    Ok(Some(Msg::HoleEdited { number, edit }))
}

#[must_use]
pub fn decode_course_notes<S: BuildHasher>(form: &HashMap<String, String, S>) -> Msg {
    Msg::CourseNotesEdited(form_value(form).to_string())
}

/// # Errors
///
/// Returns `ScorecardError::UnknownFormat` for anything but csv, json or txt.
pub fn decode_export(format: &str) -> Result<Msg, ScorecardError> {
    let format: ExportFormat = format.parse()?;
    Ok(Msg::ExportRequested(format))
}

/// `json=1` (or `true`) selects the JSON view.
#[must_use]
pub fn wants_json<S: BuildHasher>(query: &HashMap<String, String, S>) -> bool {
    match query.get("json").map(String::as_str) {
        Some("1") => true,
        Some("0") | None => false,
        Some(other) => other.parse().unwrap_or(false),
    }
}
