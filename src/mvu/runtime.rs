use crate::mvu::error::AppError;
use crate::mvu::round::{Msg, RoundModel, run_effect, update};

/// Runs the MVU loop for a session's round: seeds with `init_msg` and drains effects.
///
/// Any error left over from the previous request is cleared first, so an
/// error on the model after this returns always belongs to `init_msg`.
///
/// # Errors
///
/// Returns the error recorded by `update` or by a failed effect.
pub fn run_round(model: &mut RoundModel, init_msg: Msg) -> Result<(), AppError> {
    model.error = None;
    let mut effects = update(model, init_msg);
    if let Some(e) = &model.error {
        return Err(e.clone());
    }

    while let Some(effect) = effects.pop() {
        let msg = run_effect(effect, model);
        match msg {
            Msg::Failed(e) => {
                // Record failure and stop the loop.
                update(model, Msg::Failed(e.clone()));
                return Err(e);
            }
            other => {
                let next = update(model, other);
                effects.extend(next);
            }
        }
    }
    Ok(())
}
