use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use crate::error::ScorecardError;

pub const EXPORT_FILE_PREFIX: &str = "golf-scorecard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Text,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Text];

    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
        }
    }

    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
            ExportFormat::Text => "text/plain",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "Export CSV",
            ExportFormat::Json => "Export JSON",
            ExportFormat::Text => "Export TXT",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ScorecardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "txt" | "text" => Ok(ExportFormat::Text),
            other => Err(ScorecardError::UnknownFormat(other.to_string())),
        }
    }
}

/// `golf-scorecard-YYYYMMDD.<ext>`
#[must_use]
pub fn export_filename(format: ExportFormat, date: NaiveDate) -> String {
    format!(
        "{EXPORT_FILE_PREFIX}-{}.{}",
        date.format("%Y%m%d"),
        format.extension()
    )
}
