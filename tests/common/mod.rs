#![allow(dead_code)]

use golf_scorecard::model::{HoleEdit, Round};

/// Round with the given (par, score) per hole, numbered from 1.
pub fn round_from(holes: &[(u32, u32)]) -> Round {
    let mut round = Round::new(u32::try_from(holes.len()).expect("hole count fits u32"), 4);
    for (idx, (par, score)) in holes.iter().enumerate() {
        let number = u32::try_from(idx + 1).expect("hole number fits u32");
        round.update_hole(number, HoleEdit::Par(i64::from(*par)));
        round.update_hole(number, HoleEdit::PlayerScore(i64::from(*score)));
    }
    round
}
