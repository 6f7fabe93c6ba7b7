use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::types::{
    CourseId, EntityId, GameFormat, HOLES, PlayerId, SkinsScoringType, Team, player_entity_id,
};

pub const TIE: &str = "TIE";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HoleScore {
    pub hole: u8,
    pub par: i32,
    /// `None` until a score is entered.
    pub strokes: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_strokes: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

pub type ScoreSheet = [HoleScore; HOLES];

#[must_use]
pub fn empty_score_sheet(pars: &[i32; HOLES]) -> ScoreSheet {
    std::array::from_fn(|idx| HoleScore {
        hole: u8::try_from(idx + 1).unwrap_or(u8::MAX),
        par: pars[idx],
        ..HoleScore::default()
    })
}

/// Winner of a match play hole: one side's team id, or a halved hole.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum HoleWinner {
    Side(EntityId),
    Tie,
}

impl From<String> for HoleWinner {
    fn from(value: String) -> Self {
        if value == TIE {
            Self::Tie
        } else {
            Self::Side(value)
        }
    }
}

impl From<HoleWinner> for String {
    fn from(value: HoleWinner) -> Self {
        match value {
            HoleWinner::Side(id) => id,
            HoleWinner::Tie => TIE.to_string(),
        }
    }
}

impl fmt::Display for HoleWinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoleWinner::Side(id) => write!(f, "{id}"),
            HoleWinner::Tie => write!(f, "{TIE}"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkinResult {
    pub hole_index: usize,
    pub winner_id: Option<EntityId>,
    pub value: f64,
    pub carried_over: bool,
}

impl SkinResult {
    #[must_use]
    pub fn unresolved(hole_index: usize, value: f64) -> Self {
        Self {
            hole_index,
            winner_id: None,
            value,
            carried_over: false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: String,
    /// Primary course; players without their own course play this one.
    pub course_id: CourseId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competition_id: Option<String>,
    pub date: DateTime<Utc>,
    pub game_format: GameFormat,
    pub player_ids: Vec<PlayerId>,
    #[serde(default)]
    pub teams: Vec<Team>,
    pub scores: BTreeMap<EntityId, ScoreSheet>,
    #[serde(default)]
    pub match_result: BTreeMap<usize, HoleWinner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skins_scoring_type: Option<SkinsScoringType>,
    #[serde(default)]
    pub skins_result: Vec<SkinResult>,
    /// Set once the round is posted; the round is read-only from then on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Round {
    /// Per-hole base skin value, or `None` when skins are disabled.
    #[must_use]
    pub fn skins_base_value(&self) -> Option<f64> {
        self.skin_value.filter(|value| *value > 0.0)
    }

    #[must_use]
    pub fn skins_scoring(&self) -> SkinsScoringType {
        self.skins_scoring_type.unwrap_or_default()
    }

    #[must_use]
    pub fn is_posted(&self) -> bool {
        self.summary.is_some()
    }

    #[must_use]
    pub fn team(&self, team_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    #[must_use]
    pub fn team_of_player(&self, player_id: PlayerId) -> Option<&Team> {
        self.teams.iter().find(|t| t.has_member(player_id))
    }

    #[must_use]
    pub fn sheet(&self, entity_id: &str) -> Option<&ScoreSheet> {
        self.scores.get(entity_id)
    }

    #[must_use]
    pub fn player_strokes(&self, player_id: PlayerId, hole_index: usize) -> Option<i32> {
        self.scores
            .get(&player_entity_id(player_id))
            .and_then(|sheet| sheet.get(hole_index))
            .and_then(|score| score.strokes)
    }

    /// Ids of the entities that rank against each other in this round's format.
    #[must_use]
    pub fn standing_ids(&self) -> Vec<EntityId> {
        if self.game_format.is_team_format() && !self.teams.is_empty() {
            self.teams.iter().map(|t| t.id.clone()).collect()
        } else {
            self.player_ids.iter().copied().map(player_entity_id).collect()
        }
    }
}
