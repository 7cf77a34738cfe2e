use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScorecardError;
use crate::model::input::{clamp_non_negative, coerce_numeric_input};

/// One scoring unit of a round. `number` is fixed at creation; the other
/// fields are edited through [`crate::model::Round::update_hole`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hole {
    pub number: u32,
    pub par: u32,
    /// Zero means the hole has not been played yet.
    pub player_score: u32,
    pub notes: String,
}

impl Hole {
    #[must_use]
    pub fn new(number: u32, par: u32) -> Self {
        Self {
            number,
            par,
            player_score: 0,
            notes: String::new(),
        }
    }

    #[must_use]
    pub fn is_played(&self) -> bool {
        self.player_score > 0
    }

    /// Applies an edit to this hole; numeric edits are clamped to zero.
    pub fn apply(&mut self, edit: HoleEdit) {
        match edit {
            HoleEdit::Par(v) => self.par = clamp_non_negative(v),
            HoleEdit::PlayerScore(v) => self.player_score = clamp_non_negative(v),
            HoleEdit::Notes(s) => self.notes = s,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoleField {
    Par,
    PlayerScore,
    Notes,
}

impl HoleField {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            HoleField::Par => "par",
            HoleField::PlayerScore => "score",
            HoleField::Notes => "notes",
        }
    }
}

impl fmt::Display for HoleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HoleField {
    type Err = ScorecardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "par" => Ok(HoleField::Par),
            "score" | "playerScore" => Ok(HoleField::PlayerScore),
            "notes" => Ok(HoleField::Notes),
            other => Err(ScorecardError::UnknownField(other.to_string())),
        }
    }
}

/// A new value for one field of a hole. Numeric values are raw and may be
/// negative; clamping happens when the edit is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoleEdit {
    Par(i64),
    PlayerScore(i64),
    Notes(String),
}

impl HoleEdit {
    /// Builds an edit from text as it arrives from an input box. Numeric
    /// fields coerce anything unparseable to 0.
    #[must_use]
    pub fn from_input(field: HoleField, raw: &str) -> Self {
        match field {
            HoleField::Par => HoleEdit::Par(coerce_numeric_input(raw)),
            HoleField::PlayerScore => HoleEdit::PlayerScore(coerce_numeric_input(raw)),
            HoleField::Notes => HoleEdit::Notes(raw.to_string()),
        }
    }

    #[must_use]
    pub fn field(&self) -> HoleField {
        match self {
            HoleEdit::Par(_) => HoleField::Par,
            HoleEdit::PlayerScore(_) => HoleField::PlayerScore,
            HoleEdit::Notes(_) => HoleField::Notes,
        }
    }
}
