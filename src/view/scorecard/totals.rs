use maud::{Markup, html};

use crate::model::Round;
use crate::score::{total_difference, total_par, total_score};

pub const TOTALS_ROW_ID: &str = "totals";

/// Totals row. With `oob` set it is marked for an htmx out-of-band swap so it
/// can ride along with a re-rendered hole row.
#[must_use]
pub fn render_totals_row(round: &Round, oob: bool) -> Markup {
    let diff = total_difference(round);
    let diff_class = match diff.performance_class() {
        Some(class) => format!("total-difference {}", class.css_class()),
        None => "total-difference".to_string(),
    };

    html! {
        div class="totals-row" id=(TOTALS_ROW_ID) hx-swap-oob=[oob.then_some("true")] {
            div class="total-label" { "TOTALS" }
            div class="total-par" { (total_par(round)) }
            div class="total-score" { (total_score(round)) }
            div class=(diff_class) { (diff.to_string()) }
            div class="course-notes" {
                textarea name="value" class="course-notes-textarea" placeholder="Course notes..." rows="2"
                    id="course-notes"
                    hx-post="course-notes" hx-trigger="change" hx-swap="none" {
                    (round.course_notes)
                }
            }
        }
    }
}
