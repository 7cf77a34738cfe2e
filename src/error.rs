use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScorecardError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("unknown export format: {0}")]
    UnknownFormat(String),
    #[error("unknown hole field: {0}")]
    UnknownField(String),
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for ScorecardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
