use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::round::Round;
use super::types::{
    Competition, Course, CourseId, HOLES, MAX_HANDICAP_INDEX, MIN_HANDICAP_INDEX, Player,
    PlayerId,
};
use crate::error::ScoringError;

const MIN_SLOPE: f64 = 55.0;
const MAX_SLOPE: f64 = 155.0;

/// Read-only reference data the engine looks players and courses up in.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    players: HashMap<PlayerId, Player, RandomState>,
    courses: HashMap<CourseId, Course, RandomState>,
    competitions: Vec<Competition>,
}

/// On-disk shape of a directory file.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryFile {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub competitions: Vec<Competition>,
}

impl Directory {
    /// Build a directory, rejecting any course that breaks the scorecard
    /// invariants and any player whose handicap index is out of range.
    ///
    /// # Errors
    ///
    /// Returns `ScoringError::InvalidHandicap` for the first such player, or
    /// `ScoringError::InvalidCourse` for the first invalid course.
    pub fn new(
        players: Vec<Player>,
        courses: Vec<Course>,
        competitions: Vec<Competition>,
    ) -> Result<Self, ScoringError> {
        if let Some(player) = players
            .iter()
            .find(|p| !(MIN_HANDICAP_INDEX..=MAX_HANDICAP_INDEX).contains(&p.handicap_index))
        {
            return Err(ScoringError::InvalidHandicap {
                player_id: player.id,
                handicap_index: player.handicap_index,
            });
        }
        for course in &courses {
            validate_course(course)?;
        }
        Ok(Self {
            players: players.into_iter().map(|p| (p.id, p)).collect(),
            courses: courses.into_iter().map(|c| (c.id, c)).collect(),
            competitions,
        })
    }

    /// # Errors
    ///
    /// Returns an error if the json is malformed or a course is invalid.
    pub fn from_json(json: &str) -> Result<Self, ScoringError> {
        let file: DirectoryFile = serde_json::from_str(json)?;
        Self::new(file.players, file.courses, file.competitions)
    }

    #[must_use]
    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.get(&player_id)
    }

    #[must_use]
    pub fn course(&self, course_id: CourseId) -> Option<&Course> {
        self.courses.get(&course_id)
    }

    #[must_use]
    pub fn competition(&self, competition_id: &str) -> Option<&Competition> {
        self.competitions.iter().find(|c| c.id == competition_id)
    }

    /// The course a player is on for this round: their own track in a
    /// multi-course competition, otherwise the round's primary course.
    #[must_use]
    pub fn course_for_player(&self, player: &Player, round: &Round) -> Option<&Course> {
        self.course(player.course_id.unwrap_or(round.course_id))
    }

    /// Display name for a score sheet key: the team name, the player's name,
    /// or the raw id when neither is known.
    #[must_use]
    pub fn entity_name(&self, round: &Round, entity_id: &str) -> String {
        if let Some(team) = round.team(entity_id) {
            return team.name.clone();
        }
        entity_id
            .parse::<PlayerId>()
            .ok()
            .and_then(|id| self.player(id))
            .map_or_else(|| entity_id.to_string(), |p| p.name.clone())
    }

    #[must_use]
    pub fn course_id_for_player(&self, player_id: PlayerId, round: &Round) -> CourseId {
        self.player(player_id)
            .and_then(|p| p.course_id)
            .unwrap_or(round.course_id)
    }
}

/// # Errors
///
/// Returns `ScoringError::InvalidCourse` describing the first broken invariant.
pub fn validate_course(course: &Course) -> Result<(), ScoringError> {
    let invalid = |reason: String| ScoringError::InvalidCourse {
        course_id: course.id,
        reason,
    };

    if let Some((idx, par)) = course
        .pars
        .iter()
        .enumerate()
        .find(|(_, par)| !(3..=6).contains(*par))
    {
        return Err(invalid(format!("par {par} on hole {} is not 3-6", idx + 1)));
    }

    let mut seen = [false; HOLES];
    for hcp in course.handicap_indices {
        let slot = usize::try_from(hcp)
            .ok()
            .filter(|h| (1..=HOLES).contains(h))
            .ok_or_else(|| invalid(format!("handicap index {hcp} is not 1-18")))?;
        if seen[slot - 1] {
            return Err(invalid(format!("handicap index {hcp} is used twice")));
        }
        seen[slot - 1] = true;
    }

    if !(MIN_SLOPE..=MAX_SLOPE).contains(&course.slope) {
        return Err(invalid(format!(
            "slope {} is outside {MIN_SLOPE}-{MAX_SLOPE}",
            course.slope
        )));
    }

    Ok(())
}
