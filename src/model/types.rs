use serde::{Deserialize, Serialize};
use std::fmt;

pub const HOLES: usize = 18;
/// Most strokes a single hole can be scored at.
pub const MAX_STROKES: i32 = 99;
pub const MIN_HANDICAP_INDEX: f64 = -10.0;
pub const MAX_HANDICAP_INDEX: f64 = 54.0;

pub type PlayerId = i64;
pub type CourseId = i64;
/// A player id (stringified) or a team id; keys the score sheets of a round.
pub type EntityId = String;

#[must_use]
pub fn player_entity_id(player_id: PlayerId) -> EntityId {
    player_id.to_string()
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameFormat {
    #[serde(rename = "Stroke Play")]
    StrokePlay,
    #[serde(rename = "Match Play")]
    MatchPlay,
    #[serde(rename = "Scramble")]
    Scramble,
    #[serde(rename = "Best Ball")]
    BestBall,
    #[serde(rename = "Shamble")]
    Shamble,
}

/// Whose score sheet a stroke is typed into.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoringUnit {
    Player,
    Team,
}

/// Which score sheets exist for a format and who enters strokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SheetLayout {
    pub player_sheets: bool,
    pub team_sheets: bool,
    pub entry: ScoringUnit,
    /// Participants that rank against each other and compete for skins.
    pub standings: ScoringUnit,
}

impl GameFormat {
    #[must_use]
    pub const fn layout(self) -> SheetLayout {
        match self {
            Self::StrokePlay | Self::MatchPlay => SheetLayout {
                player_sheets: true,
                team_sheets: false,
                entry: ScoringUnit::Player,
                standings: ScoringUnit::Player,
            },
            Self::Scramble => SheetLayout {
                player_sheets: false,
                team_sheets: true,
                entry: ScoringUnit::Team,
                standings: ScoringUnit::Team,
            },
            Self::BestBall | Self::Shamble => SheetLayout {
                player_sheets: true,
                team_sheets: true,
                entry: ScoringUnit::Player,
                standings: ScoringUnit::Team,
            },
        }
    }

    #[must_use]
    pub const fn is_team_format(self) -> bool {
        matches!(self, Self::Scramble | Self::BestBall | Self::Shamble)
    }

    /// Formats whose team sheet is composed from the members' own sheets.
    #[must_use]
    pub const fn composes_team_sheet(self) -> bool {
        matches!(self, Self::BestBall | Self::Shamble)
    }
}

impl fmt::Display for GameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameFormat::StrokePlay => "Stroke Play",
            GameFormat::MatchPlay => "Match Play",
            GameFormat::Scramble => "Scramble",
            GameFormat::BestBall => "Best Ball",
            GameFormat::Shamble => "Shamble",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SkinsScoringType {
    #[default]
    Gross,
    Net,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Negative values are plus handicaps.
    pub handicap_index: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<CourseId>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: EntityId,
    pub name: String,
    pub player_ids: Vec<PlayerId>,
}

impl Team {
    #[must_use]
    pub fn has_member(&self, player_id: PlayerId) -> bool {
        self.player_ids.contains(&player_id)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub pars: [i32; HOLES],
    /// 1 is the hardest hole, 18 the easiest.
    pub handicap_indices: [i32; HOLES],
    pub rating: f64,
    pub slope: f64,
}

impl Course {
    #[must_use]
    pub fn total_par(&self) -> i32 {
        self.pars.iter().sum()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub id: String,
    pub name: String,
    pub game_format: GameFormat,
    pub participant_ids: Vec<PlayerId>,
    #[serde(default)]
    pub teams: Vec<Team>,
    pub course_ids: Vec<CourseId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skins_scoring_type: Option<SkinsScoringType>,
}
