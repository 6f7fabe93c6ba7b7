use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::standings::{Standing, round_standings, round_winners};
use crate::controller::score::match_play::final_match_text;
use crate::model::{Directory, EntityId, GameFormat, HOLES, Round};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkinsTotal {
    pub entity_id: EntityId,
    pub name: String,
    pub total_value: f64,
    pub skins_won: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkinsSummary {
    /// Every participant, biggest winnings first.
    pub totals: Vec<SkinsTotal>,
    /// Pot still carried over after the last hole.
    pub unclaimed_carryover: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    pub round_id: String,
    pub game_format: GameFormat,
    pub standings: Vec<Standing>,
    pub winners: Vec<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skins: Option<SkinsSummary>,
}

/// Winnings per skins participant from the ledger.
#[must_use]
pub fn skins_summary(round: &Round, directory: &Directory) -> Option<SkinsSummary> {
    round.skins_base_value()?;

    let mut won: HashMap<&str, (f64, usize), RandomState> = HashMap::default();
    for skin in &round.skins_result {
        if let Some(winner) = skin.winner_id.as_deref() {
            let entry = won.entry(winner).or_insert((0.0, 0));
            entry.0 += skin.value;
            entry.1 += 1;
        }
    }

    let mut totals: Vec<SkinsTotal> = round
        .standing_ids()
        .into_iter()
        .map(|entity_id| {
            let (total_value, skins_won) = won.get(entity_id.as_str()).copied().unwrap_or_default();
            SkinsTotal {
                name: directory.entity_name(round, &entity_id),
                entity_id,
                total_value,
                skins_won,
            }
        })
        .collect();
    totals.sort_by(|a, b| {
        b.total_value
            .total_cmp(&a.total_value)
            .then_with(|| a.name.cmp(&b.name))
    });

    let unclaimed_carryover = round
        .skins_result
        .get(HOLES - 1)
        .filter(|skin| skin.carried_over)
        .map_or(0.0, |skin| skin.value);

    Some(SkinsSummary {
        totals,
        unclaimed_carryover,
    })
}

/// Everything the round-end screen shows.
#[must_use]
pub fn summarize_round(round: &Round, directory: &Directory) -> RoundSummary {
    let match_result =
        (round.game_format == GameFormat::MatchPlay).then(|| final_match_text(round));
    RoundSummary {
        round_id: round.id.clone(),
        game_format: round.game_format,
        standings: round_standings(round, directory),
        winners: round_winners(round, directory),
        match_result,
        skins: skins_summary(round, directory),
    }
}
