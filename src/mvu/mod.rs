pub mod runtime;
pub mod scorecard;
pub mod store;

pub use runtime::run_scorecard;
pub use scorecard::{Effect, Msg, ScorecardModel, update};
pub use store::{ScorecardOutput, ScorecardStore};
