use chrono::NaiveDate;
use maud::Markup;
use tracing::debug;

use crate::error::ScorecardError;
use crate::export::{Export, ExportFormat, export_round};
use crate::model::{HoleEdit, HoleField, Round};
use crate::view::scorecard::{render_hole_row, render_scorecard, render_totals_row};

/// Per-dispatch model: the round being edited plus whatever the effects
/// rendered for the client.
#[derive(Debug)]
pub struct ScorecardModel<'a> {
    pub round: &'a mut Round,
    pub today: NaiveDate,
    pub fragments: Vec<Markup>,
    pub download: Option<Export>,
    pub error: Option<ScorecardError>,
}

impl<'a> ScorecardModel<'a> {
    #[must_use]
    pub fn new(round: &'a mut Round, today: NaiveDate) -> Self {
        Self {
            round,
            today,
            fragments: Vec::new(),
            download: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    PageLoad,
    HoleEdited { number: u32, edit: HoleEdit },
    CourseNotesEdited(String),
    ExportRequested(ExportFormat),
    Rendered(Markup),
    Exported(Export),
    Failed(ScorecardError),
}

#[derive(Debug, Clone)]
pub enum Effect {
    RenderScorecard,
    RenderHoleRow(u32),
    /// Totals row as an out-of-band swap next to an edited row.
    RenderTotals,
    BuildExport(ExportFormat),
}

/// Applies `msg` to the model and returns the effects it calls for. Derived
/// statistics are never stored; render effects recompute them from the round.
pub fn update(model: &mut ScorecardModel<'_>, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::PageLoad => vec![Effect::RenderScorecard],
        Msg::HoleEdited { number, edit } => {
            let field = edit.field();
            if !model.round.update_hole(number, edit) {
                debug!(hole = number, %field, "ignoring edit for unknown hole");
                return vec![];
            }
            debug!(hole = number, %field, "hole updated");
            match field {
                // notes feed no derived value, nothing to re-render
                HoleField::Notes => vec![],
                HoleField::Par | HoleField::PlayerScore => {
                    vec![Effect::RenderHoleRow(number), Effect::RenderTotals]
                }
            }
        }
        Msg::CourseNotesEdited(notes) => {
            debug!(len = notes.len(), "course notes updated");
            model.round.set_course_notes(notes);
            vec![]
        }
        Msg::ExportRequested(format) => vec![Effect::BuildExport(format)],
        Msg::Rendered(markup) => {
            model.fragments.push(markup);
            vec![]
        }
        Msg::Exported(export) => {
            model.download = Some(export);
            vec![]
        }
        Msg::Failed(e) => {
            model.error = Some(e);
            vec![]
        }
    }
}

#[must_use]
pub fn run_effect(effect: Effect, model: &ScorecardModel<'_>) -> Msg {
    let round: &Round = model.round;
    match effect {
        Effect::RenderScorecard => Msg::Rendered(render_scorecard(round)),
        Effect::RenderHoleRow(number) => match round.hole(number) {
            Some(hole) => Msg::Rendered(render_hole_row(hole)),
            None => Msg::Failed(ScorecardError::Other(format!(
                "render requested for unknown hole {number}"
            ))),
        },
        Effect::RenderTotals => Msg::Rendered(render_totals_row(round, true)),
        Effect::BuildExport(format) => match export_round(round, format, model.today) {
            Ok(export) => Msg::Exported(export),
            Err(e) => Msg::Failed(e),
        },
    }
}
