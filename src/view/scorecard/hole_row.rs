use maud::{Markup, html};

use crate::model::Hole;
use crate::score::{per_hole_difference, score_display};

#[must_use]
pub fn hole_row_id(number: u32) -> String {
    format!("hole-{number}")
}

/// Classes for the difference cell: performance bucket plus the named outcome.
#[must_use]
pub fn difference_classes(hole: &Hole) -> String {
    let mut classes = String::from("difference");
    if let Some(class) = per_hole_difference(hole).performance_class() {
        classes.push(' ');
        classes.push_str(class.css_class());
    }
    if let Some(disp) = score_display(hole) {
        classes.push(' ');
        classes.push_str(disp.css_class());
    }
    classes
}

/// One editable hole. Inputs post on change and the response replaces the row.
#[must_use]
pub fn render_hole_row(hole: &Hole) -> Markup {
    let n = hole.number;
    let row_id = hole_row_id(n);
    let target = format!("#{row_id}");
    // an unplayed hole shows an empty score box
    let score_value = if hole.is_played() {
        hole.player_score.to_string()
    } else {
        String::new()
    };

    html! {
        div class="hole-row" id=(row_id) data-hole=(n) {
            div class="hole-number" { (n) }
            div class="par-input" {
                input type="number" min="1" max="6" name="value" class="score-input"
                    id=(format!("hole-{n}-par"))
                    value=(hole.par)
                    hx-post=(format!("holes/{n}/par"))
                    hx-trigger="change" hx-target=(target) hx-swap="outerHTML";
            }
            div class="score-input" {
                input type="number" min="0" name="value" class="score-input" placeholder="0"
                    id=(format!("hole-{n}-score"))
                    value=(score_value)
                    hx-post=(format!("holes/{n}/score"))
                    hx-trigger="change" hx-target=(target) hx-swap="outerHTML";
            }
            div class=(difference_classes(hole)) {
                (per_hole_difference(hole).to_string())
            }
            div class="notes-input" {
                textarea name="value" class="notes-textarea" placeholder="Add notes..." rows="2"
                    id=(format!("hole-{n}-notes"))
                    hx-post=(format!("holes/{n}/notes"))
                    hx-trigger="change" hx-swap="none" {
                    (hole.notes)
                }
            }
        }
    }
}
