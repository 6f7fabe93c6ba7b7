use crate::storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    #[error("hole index {0} is out of range (expected 0-17)")]
    InvalidHoleIndex(usize),
    #[error("strokes must be between 1 and 99 (got {0})")]
    InvalidStrokes(i32),
    #[error("player {player_id} has handicap index {handicap_index}, expected -10 to 54")]
    InvalidHandicap { player_id: i64, handicap_index: f64 },
    #[error("no score sheet for entity {0}")]
    UnknownEntity(String),
    #[error("score sheet {0} is derived from its members and cannot be edited")]
    DerivedScoreSheet(String),
    #[error("round {0} has been posted and can no longer be edited")]
    RoundPosted(String),
    #[error("course {course_id} is invalid: {reason}")]
    InvalidCourse { course_id: i64, reason: String },
    #[error("player {0} is not assigned to a team")]
    UnassignedPlayer(i64),
    #[error("player {0} is assigned to more than one team")]
    DuplicateTeamMember(i64),
    #[error("match play needs exactly two teams (got {0})")]
    MatchPlayTeams(usize),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("{0}")]
    Other(String),
}

impl From<StorageError> for ScoringError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ScoringError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<std::io::Error> for ScoringError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<String> for ScoringError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for ScoringError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}
