use crate::controller::score::{ScoreEdit, apply_edit, post_round, validate_edit};
use crate::error::ScoringError;
use crate::model::{Directory, Round};
use crate::storage::RoundStore;

#[derive(Debug, Clone)]
pub struct RoundModel {
    pub round: Round,
    /// Last rejected edit; cleared by the next accepted one.
    pub error: Option<ScoringError>,
    /// Non-fatal persistence failures, oldest first.
    pub warnings: Vec<String>,
    pub saves: usize,
}

impl RoundModel {
    #[must_use]
    pub fn new(round: Round) -> Self {
        Self {
            round,
            error: None,
            warnings: Vec::new(),
            saves: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    StrokesEntered(ScoreEdit),
    EditApplied(Round),
    PostRequested(String),
    Persisted,
    PersistFailed(String),
    Rejected(ScoringError),
}

#[derive(Debug, Clone)]
pub enum Effect {
    ApplyEdit(ScoreEdit),
    Persist,
}

pub fn update(model: &mut RoundModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::StrokesEntered(edit) => match validate_edit(&model.round, &edit) {
            Ok(()) => vec![Effect::ApplyEdit(edit)],
            Err(e) => {
                model.error = Some(e);
                vec![]
            }
        },
        Msg::EditApplied(round) => {
            model.round = round;
            model.error = None;
            vec![Effect::Persist]
        }
        Msg::PostRequested(summary) => match post_round(&model.round, summary) {
            Ok(posted) => {
                model.round = posted;
                vec![Effect::Persist]
            }
            Err(e) => {
                model.error = Some(e);
                vec![]
            }
        },
        Msg::Persisted => {
            model.saves += 1;
            vec![]
        }
        Msg::PersistFailed(e) => {
            log::warn!("round {} not saved: {e}", model.round.id);
            model.warnings.push(e);
            vec![]
        }
        Msg::Rejected(e) => {
            model.error = Some(e);
            vec![]
        }
    }
}

#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub directory: &'a Directory,
    pub store: &'a dyn RoundStore,
}

pub async fn run_effect(effect: Effect, model: &RoundModel, deps: Deps<'_>) -> Msg {
    match effect {
        Effect::ApplyEdit(edit) => match apply_edit(&model.round, deps.directory, &edit) {
            Ok(round) => Msg::EditApplied(round),
            Err(e) => Msg::Rejected(e),
        },
        Effect::Persist => match deps.store.save_round(&model.round).await {
            Ok(()) => Msg::Persisted,
            Err(e) => Msg::PersistFailed(e.to_string()),
        },
    }
}
