use serde::{Serialize, Serializer};
use std::fmt;

/// Score relative to par. Renders as `-` (nothing played), `E`, `+N` or `-N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeScore {
    Unplayed,
    Even,
    Over(u64),
    Under(u64),
}

pub const UNPLAYED_LABEL: &str = "-";

impl RelativeScore {
    #[must_use]
    pub fn from_totals(score: u64, par: u64) -> Self {
        match score.cmp(&par) {
            std::cmp::Ordering::Equal => RelativeScore::Even,
            std::cmp::Ordering::Greater => RelativeScore::Over(score - par),
            std::cmp::Ordering::Less => RelativeScore::Under(par - score),
        }
    }

    /// Signed strokes against par, `None` when nothing has been played.
    #[must_use]
    pub fn strokes(&self) -> Option<i64> {
        match *self {
            RelativeScore::Unplayed => None,
            RelativeScore::Even => Some(0),
            RelativeScore::Over(n) => Some(i64::try_from(n).unwrap_or(i64::MAX)),
            RelativeScore::Under(n) => Some(-i64::try_from(n).unwrap_or(i64::MAX)),
        }
    }

    #[must_use]
    pub fn performance_class(&self) -> Option<PerformanceClass> {
        match self {
            RelativeScore::Unplayed => None,
            RelativeScore::Even => Some(PerformanceClass::Even),
            RelativeScore::Over(_) => Some(PerformanceClass::OverPar),
            RelativeScore::Under(_) => Some(PerformanceClass::UnderPar),
        }
    }
}

impl fmt::Display for RelativeScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeScore::Unplayed => f.write_str(UNPLAYED_LABEL),
            RelativeScore::Even => f.write_str("E"),
            RelativeScore::Over(n) => write!(f, "+{n}"),
            RelativeScore::Under(n) => write!(f, "-{n}"),
        }
    }
}

impl Serialize for RelativeScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Styling bucket for a relative score. Carries no meaning beyond the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceClass {
    OverPar,
    UnderPar,
    Even,
}

impl PerformanceClass {
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            PerformanceClass::OverPar => "over-par",
            PerformanceClass::UnderPar => "under-par",
            PerformanceClass::Even => "even",
        }
    }
}

impl fmt::Display for PerformanceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// Class for a relative score; empty when nothing was played.
#[must_use]
pub fn performance_class(diff: RelativeScore) -> Option<PerformanceClass> {
    diff.performance_class()
}
