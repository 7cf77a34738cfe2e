use crate::model::{Hole, Round};
use crate::score::relative::RelativeScore;

/// Sum of par over every hole, played or not.
#[must_use]
pub fn total_par(round: &Round) -> u64 {
    round.holes.iter().map(|h| u64::from(h.par)).sum()
}

/// Sum of recorded scores over every hole. Unplayed holes add 0.
#[must_use]
pub fn total_score(round: &Round) -> u64 {
    round.holes.iter().map(|h| u64::from(h.player_score)).sum()
}

#[must_use]
pub fn per_hole_difference(hole: &Hole) -> RelativeScore {
    if !hole.is_played() {
        return RelativeScore::Unplayed;
    }
    RelativeScore::from_totals(u64::from(hole.player_score), u64::from(hole.par))
}

/// Relative score over played holes only, so a partial round is not pulled
/// under par by the zeros of holes still to play.
#[must_use]
pub fn total_difference(round: &Round) -> RelativeScore {
    let (played, par, score) = round
        .played_holes()
        .fold((0usize, 0u64, 0u64), |(n, par, score), h| {
            (n + 1, par + u64::from(h.par), score + u64::from(h.player_score))
        });

    if played == 0 {
        return RelativeScore::Unplayed;
    }
    RelativeScore::from_totals(score, par)
}

#[must_use]
pub fn holes_played(round: &Round) -> usize {
    round.played_holes().count()
}
