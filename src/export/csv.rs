use std::fmt::Write;

use crate::model::Round;

pub const CSV_HEADER: &str = "Hole,Par,Score,Notes";

/// Wraps `s` in double quotes, doubling any quote inside it.
#[must_use]
pub fn quote_csv_field(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[must_use]
pub fn to_csv(round: &Round) -> String {
    let mut csv = String::new();
    csv.push_str(CSV_HEADER);
    csv.push('\n');
    for hole in &round.holes {
        // writing to a String cannot fail
        let _ = writeln!(
            csv,
            "{},{},{},{}",
            hole.number,
            hole.par,
            hole.player_score,
            quote_csv_field(&hole.notes)
        );
    }
    let _ = writeln!(csv, "\nCourse Notes:,{}", quote_csv_field(&round.course_notes));
    csv
}
