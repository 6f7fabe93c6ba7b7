use serde::{Deserialize, Serialize};

use super::format_aggregators::{
    compose_team_sheets, derive_player_net_strokes, resolve_match_holes,
};
use crate::controller::skins::compute_skins;
use crate::error::ScoringError;
use crate::model::{Directory, EntityId, HOLES, MAX_STROKES, Round};

/// One stroke entry: `strokes = None` clears the hole.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEdit {
    pub entity_id: EntityId,
    pub hole_index: usize,
    pub strokes: Option<i32>,
}

impl ScoreEdit {
    #[must_use]
    pub fn new(entity_id: impl Into<EntityId>, hole_index: usize, strokes: Option<i32>) -> Self {
        Self {
            entity_id: entity_id.into(),
            hole_index,
            strokes,
        }
    }
}

/// Check an edit against a round without touching it.
///
/// # Errors
///
/// Returns the reason the edit would be rejected.
pub fn validate_edit(round: &Round, edit: &ScoreEdit) -> Result<(), ScoringError> {
    if round.is_posted() {
        return Err(ScoringError::RoundPosted(round.id.clone()));
    }
    if edit.hole_index >= HOLES {
        return Err(ScoringError::InvalidHoleIndex(edit.hole_index));
    }
    if let Some(strokes) = edit.strokes {
        if !(1..=MAX_STROKES).contains(&strokes) {
            return Err(ScoringError::InvalidStrokes(strokes));
        }
    }
    if !round.scores.contains_key(&edit.entity_id) {
        return Err(ScoringError::UnknownEntity(edit.entity_id.clone()));
    }
    if round.game_format.composes_team_sheet() && round.team(&edit.entity_id).is_some() {
        return Err(ScoringError::DerivedScoreSheet(edit.entity_id.clone()));
    }
    Ok(())
}

/// Enter (or clear) strokes for one entity on one hole and return the round
/// with every derived field recomputed. The input round is never modified,
/// and a rejected edit leaves nothing half-applied.
///
/// # Errors
///
/// Returns an error for a posted round, an out-of-range hole, out-of-range
/// strokes, an unknown entity, or an edit to a composed team sheet.
pub fn set_strokes(
    round: &Round,
    directory: &Directory,
    entity_id: &str,
    hole_index: usize,
    strokes: Option<i32>,
) -> Result<Round, ScoringError> {
    apply_edit(round, directory, &ScoreEdit::new(entity_id, hole_index, strokes))
}

/// # Errors
///
/// See [`set_strokes`].
pub fn apply_edit(
    round: &Round,
    directory: &Directory,
    edit: &ScoreEdit,
) -> Result<Round, ScoringError> {
    validate_edit(round, edit)?;

    let mut next = round.clone();
    if let Some(sheet) = next.scores.get_mut(&edit.entity_id) {
        sheet[edit.hole_index].strokes = edit.strokes;
    }
    log::debug!(
        "round {}: {} hole {} -> {:?}",
        next.id,
        edit.entity_id,
        edit.hole_index + 1,
        edit.strokes
    );

    recompute_round(&mut next, directory);
    Ok(next)
}

/// Apply edits in order; stops at the first rejected edit.
///
/// # Errors
///
/// See [`set_strokes`].
pub fn apply_edits(
    round: &Round,
    directory: &Directory,
    edits: &[ScoreEdit],
) -> Result<Round, ScoringError> {
    edits
        .iter()
        .try_fold(round.clone(), |current, edit| {
            apply_edit(&current, directory, edit)
        })
}

/// Check the raw strokes of a round read from outside, before any recompute.
///
/// # Errors
///
/// Returns `ScoringError::InvalidStrokes` for the first stored score outside
/// 1 to `MAX_STROKES`.
pub fn check_round_strokes(round: &Round) -> Result<(), ScoringError> {
    match round
        .scores
        .values()
        .flat_map(|sheet| sheet.iter().filter_map(|s| s.strokes))
        .find(|strokes| !(1..=MAX_STROKES).contains(strokes))
    {
        Some(strokes) => Err(ScoringError::InvalidStrokes(strokes)),
        None => Ok(()),
    }
}

/// Rebuild every derived field of a round from its raw strokes: net scores,
/// composed team sheets, match hole winners, then the skins ledger. A posted
/// round is left exactly as it was posted.
pub fn recompute_round(round: &mut Round, directory: &Directory) {
    if round.is_posted() {
        log::debug!("round {} is posted, keeping its results", round.id);
        return;
    }
    derive_player_net_strokes(round, directory);
    if round.game_format.composes_team_sheet() {
        compose_team_sheets(round, directory);
    }
    resolve_match_holes(round, directory);
    if let Some(ledger) = compute_skins(round, directory) {
        round.skins_result = ledger;
    }
}
