use maud::{Markup, html};

use crate::model::Round;
use crate::view::scorecard::{render_export_bar, render_hole_row, render_totals_row};

#[must_use]
pub fn render_scorecard(round: &Round) -> Markup {
    html! {
        (render_export_bar())

        div class="scorecard-wrapper" {
            div class="scorecard" {
                div class="scorecard-header" {
                    div class="header-cell" { "Hole" }
                    div class="header-cell" { "Par" }
                    div class="header-cell" { "Score" }
                    div class="header-cell" { "+/-" }
                    div class="header-cell" { "Notes" }
                }

                div class="holes-container" {
                    @for hole in &round.holes {
                        (render_hole_row(hole))
                    }
                }

                (render_totals_row(round, false))
            }
        }
    }
}
