use crate::error::ScorecardError;
use crate::mvu::scorecard::{Msg, ScorecardModel, run_effect, update};

/// Runs the MVU loop for one dispatch: seeds with `init_msg` and drains effects.
///
/// # Errors
///
/// Returns the first failure reported by an effect; the loop stops there.
pub fn run_scorecard(model: &mut ScorecardModel<'_>, init_msg: Msg) -> Result<(), ScorecardError> {
    let mut effects = update(model, init_msg);
    // effects come out in the order they were issued
    effects.reverse();
    while let Some(effect) = effects.pop() {
        let msg = run_effect(effect, model);
        match msg {
            Msg::Failed(e) => {
                update(model, Msg::Failed(e.clone()));
                return Err(e);
            }
            other => {
                let mut next = update(model, other);
                next.reverse();
                effects.extend(next);
            }
        }
    }
    Ok(())
}
