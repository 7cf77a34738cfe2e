pub mod csv;
pub mod format;
pub mod json;
pub mod text;

pub use csv::*;
pub use format::*;
pub use json::*;
pub use text::*;

use chrono::NaiveDate;

use crate::error::ScorecardError;
use crate::model::Round;

/// A rendered export ready to hand to the client as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub format: ExportFormat,
    pub filename: String,
    pub body: String,
}

impl Export {
    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

/// Renders `round` in `format`, naming the file after `date`.
///
/// # Errors
///
/// Returns `ScorecardError::Parse` if structured-text serialization fails.
pub fn export_round(
    round: &Round,
    format: ExportFormat,
    date: NaiveDate,
) -> Result<Export, ScorecardError> {
    let body = match format {
        ExportFormat::Csv => to_csv(round),
        ExportFormat::Json => to_json(round)?,
        ExportFormat::Text => to_text(round),
    };
    Ok(Export {
        format,
        filename: export_filename(format, date),
        body,
    })
}
