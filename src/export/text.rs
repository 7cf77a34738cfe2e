use std::fmt::Write;

use crate::model::Round;

pub const TEXT_TITLE: &str = "Golf Scorecard";
const TEXT_RULE: &str = "-----------------------------";

#[must_use]
pub fn to_text(round: &Round) -> String {
    let mut txt = String::new();
    let _ = writeln!(txt, "{TEXT_TITLE}");
    let _ = writeln!(txt, "{TEXT_RULE}");
    for hole in &round.holes {
        let _ = writeln!(
            txt,
            "Hole {}: Par {}, Score {}",
            hole.number, hole.par, hole.player_score
        );
        if !hole.notes.is_empty() {
            let _ = writeln!(txt, "  Notes: {}", hole.notes);
        }
    }
    txt.push_str("\nCourse Notes:\n");
    if !round.course_notes.is_empty() {
        txt.push_str(&round.course_notes);
        txt.push('\n');
    }
    txt
}
