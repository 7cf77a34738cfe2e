use crate::model::Hole;

/// Named outcome of a played hole, used as an extra style hook next to the
/// difference label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreDisplay {
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogey,
}

impl ScoreDisplay {
    #[must_use]
    pub fn from_i64(i: i64) -> Self {
        match i {
            i64::MIN..=-3 => ScoreDisplay::Albatross,
            -2 => ScoreDisplay::Eagle,
            -1 => ScoreDisplay::Birdie,
            0 => ScoreDisplay::Par,
            1 => ScoreDisplay::Bogey,
            2 => ScoreDisplay::DoubleBogey,
            _ => ScoreDisplay::TripleBogey,
        }
    }

    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreDisplay::Albatross => "albatross",
            ScoreDisplay::Eagle => "eagle",
            ScoreDisplay::Birdie => "birdie",
            ScoreDisplay::Par => "par",
            ScoreDisplay::Bogey => "bogey",
            ScoreDisplay::DoubleBogey => "double-bogey",
            ScoreDisplay::TripleBogey => "triple-bogey",
        }
    }
}

/// `None` for an unplayed hole.
#[must_use]
pub fn score_display(hole: &Hole) -> Option<ScoreDisplay> {
    if !hole.is_played() {
        return None;
    }
    let diff = i64::from(hole.player_score) - i64::from(hole.par);
    Some(ScoreDisplay::from_i64(diff))
}
