use serde::Serialize;

use crate::model::Round;
use crate::score::relative::RelativeScore;
use crate::score::totals::{holes_played, total_difference, total_par, total_score};

/// Derived statistics for a round, recomputed from the round on every call.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    pub total_par: u64,
    pub total_score: u64,
    pub total_difference: RelativeScore,
    pub holes_played: usize,
}

impl RoundSummary {
    #[must_use]
    pub fn from_round(round: &Round) -> Self {
        Self {
            total_par: total_par(round),
            total_score: total_score(round),
            total_difference: total_difference(round),
            holes_played: holes_played(round),
        }
    }
}

/// Round plus its summary, as returned by the JSON scorecard view.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardData<'a> {
    #[serde(flatten)]
    pub round: &'a Round,
    pub summary: RoundSummary,
}

impl<'a> ScorecardData<'a> {
    #[must_use]
    pub fn new(round: &'a Round) -> Self {
        Self {
            round,
            summary: RoundSummary::from_round(round),
        }
    }
}
