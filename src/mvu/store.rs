use chrono::{Local, NaiveDate};
use maud::Markup;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::info;

use crate::error::ScorecardError;
use crate::export::Export;
use crate::model::Round;
use crate::mvu::runtime::run_scorecard;
use crate::mvu::scorecard::{Msg, ScorecardModel};

/// What a dispatch produced for the client.
#[derive(Debug, Default)]
pub struct ScorecardOutput {
    pub fragments: Vec<Markup>,
    pub download: Option<Export>,
}

impl ScorecardOutput {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty() && self.download.is_none()
    }

    #[must_use]
    pub fn into_html(self) -> String {
        self.fragments.into_iter().map(Markup::into_string).collect()
    }
}

/// Sole owner of the session's round. Every mutation goes through
/// [`ScorecardStore::dispatch`], one at a time.
#[derive(Debug)]
pub struct ScorecardStore {
    round: Mutex<Round>,
}

impl ScorecardStore {
    #[must_use]
    pub fn new(round: Round) -> Self {
        Self {
            round: Mutex::new(round),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Round> {
        // a panic mid-edit leaves a valid round behind, every field write is atomic
        self.round.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current round.
    #[must_use]
    pub fn snapshot(&self) -> Round {
        self.lock().clone()
    }

    /// Dispatches `msg` with today's local date for any export.
    ///
    /// # Errors
    ///
    /// Returns an error if an effect fails.
    pub fn dispatch(&self, msg: Msg) -> Result<ScorecardOutput, ScorecardError> {
        self.dispatch_on(msg, Local::now().date_naive())
    }

    /// Dispatches `msg`, naming exports after `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if an effect fails.
    pub fn dispatch_on(&self, msg: Msg, today: NaiveDate) -> Result<ScorecardOutput, ScorecardError> {
        let mut round = self.lock();
        let mut model = ScorecardModel::new(&mut round, today);
        run_scorecard(&mut model, msg)?;

        if let Some(export) = &model.download {
            info!(
                format = %export.format,
                filename = %export.filename,
                bytes = export.body.len(),
                "scorecard exported"
            );
        }

        Ok(ScorecardOutput {
            fragments: model.fragments,
            download: model.download,
        })
    }
}

impl Default for ScorecardStore {
    fn default() -> Self {
        Self::new(Round::default())
    }
}
