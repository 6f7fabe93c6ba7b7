use crate::error::ScoringError;
use crate::mvu::score::{Deps, Msg, RoundModel, update};

/// Runs the MVU loop for one message: seeds with `init_msg` and drains effects.
///
/// # Errors
///
/// Returns the rejection when the message is an invalid edit. The model is
/// left as it was. Persistence failures are not errors; they are recorded in
/// `model.warnings` and the in-memory round keeps the edit.
pub async fn run_round(
    model: &mut RoundModel,
    init_msg: Msg,
    deps: Deps<'_>,
) -> Result<(), ScoringError> {
    model.error = None;
    let mut effects = update(model, init_msg);
    while let Some(effect) = effects.pop() {
        let msg = super::score::run_effect(effect, model, deps).await;
        effects.extend(update(model, msg));
    }
    match model.error.clone() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Feed several messages through the loop, stopping at the first rejection.
///
/// # Errors
///
/// See [`run_round`].
pub async fn run_round_messages(
    model: &mut RoundModel,
    msgs: Vec<Msg>,
    deps: Deps<'_>,
) -> Result<(), ScoringError> {
    for msg in msgs {
        run_round(model, msg, deps).await?;
    }
    Ok(())
}
