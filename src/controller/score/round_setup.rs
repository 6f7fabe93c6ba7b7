use ahash::RandomState;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashSet};

use crate::error::ScoringError;
use crate::model::{
    Competition, CourseId, Directory, GameFormat, HOLES, PlayerId, Round, ScoreSheet,
    SkinResult, SkinsScoringType, Team, empty_score_sheet, player_entity_id,
};

#[derive(Debug, Clone)]
pub struct RoundSetup {
    pub id: String,
    pub course_id: CourseId,
    pub date: DateTime<Utc>,
    pub game_format: GameFormat,
    pub player_ids: Vec<PlayerId>,
    pub teams: Vec<Team>,
    pub competition_id: Option<String>,
    pub skin_value: Option<f64>,
    pub skins_scoring_type: Option<SkinsScoringType>,
}

impl RoundSetup {
    /// Setup for a competition round on one of its courses.
    #[must_use]
    pub fn from_competition(
        competition: &Competition,
        id: impl Into<String>,
        course_id: CourseId,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            course_id,
            date,
            game_format: competition.game_format,
            player_ids: competition.participant_ids.clone(),
            teams: competition.teams.clone(),
            competition_id: Some(competition.id.clone()),
            skin_value: competition.skin_value,
            skins_scoring_type: competition.skins_scoring_type,
        }
    }
}

fn check_team_assignment(setup: &RoundSetup) -> Result<(), ScoringError> {
    let mut assigned: HashSet<PlayerId, RandomState> = HashSet::default();
    for team in &setup.teams {
        for &player_id in &team.player_ids {
            if !setup.player_ids.contains(&player_id) {
                return Err(ScoringError::NotFound(format!(
                    "team {} member {player_id} is not playing this round",
                    team.id
                )));
            }
            if !assigned.insert(player_id) {
                return Err(ScoringError::DuplicateTeamMember(player_id));
            }
        }
    }
    match setup.player_ids.iter().find(|id| !assigned.contains(id)) {
        Some(&unassigned) => Err(ScoringError::UnassignedPlayer(unassigned)),
        None => Ok(()),
    }
}

/// Create a round with empty score sheets for the format's scoring units and,
/// when skins are on, an unresolved ledger at the base value.
///
/// # Errors
///
/// Returns an error if the primary course is unknown, a team format has an
/// unassigned or doubly-assigned player, or match play does not have exactly
/// two teams.
pub fn start_round(setup: RoundSetup, directory: &Directory) -> Result<Round, ScoringError> {
    let primary = directory
        .course(setup.course_id)
        .ok_or_else(|| ScoringError::NotFound(format!("course {}", setup.course_id)))?;

    if setup.game_format == GameFormat::MatchPlay && setup.teams.len() != 2 {
        return Err(ScoringError::MatchPlayTeams(setup.teams.len()));
    }
    if setup.game_format.is_team_format() || setup.game_format == GameFormat::MatchPlay {
        check_team_assignment(&setup)?;
    }

    let pars_for = |player_id: PlayerId| {
        directory
            .player(player_id)
            .and_then(|p| p.course_id)
            .and_then(|course_id| directory.course(course_id))
            .map_or(primary.pars, |course| course.pars)
    };

    let layout = setup.game_format.layout();
    let mut scores: BTreeMap<String, ScoreSheet> = BTreeMap::new();
    if layout.player_sheets {
        for &player_id in &setup.player_ids {
            scores.insert(
                player_entity_id(player_id),
                empty_score_sheet(&pars_for(player_id)),
            );
        }
    }
    if layout.team_sheets {
        for team in &setup.teams {
            let pars = team
                .player_ids
                .first()
                .map_or(primary.pars, |&first| pars_for(first));
            scores.insert(team.id.clone(), empty_score_sheet(&pars));
        }
    }

    let skin_value = setup.skin_value.filter(|value| *value > 0.0);
    let skins_result = skin_value.map_or_else(Vec::new, |value| {
        (0..HOLES)
            .map(|hole_index| SkinResult::unresolved(hole_index, value))
            .collect()
    });

    log::info!(
        "round {} started: {} on course {} with {} score sheets",
        setup.id,
        setup.game_format,
        setup.course_id,
        scores.len()
    );

    Ok(Round {
        id: setup.id,
        course_id: setup.course_id,
        competition_id: setup.competition_id,
        date: setup.date,
        game_format: setup.game_format,
        player_ids: setup.player_ids,
        teams: setup.teams,
        scores,
        match_result: BTreeMap::new(),
        skin_value,
        skins_scoring_type: skin_value.and(setup.skins_scoring_type),
        skins_result,
        summary: None,
    })
}

/// Freeze a round with its summary text.
///
/// # Errors
///
/// Returns `ScoringError::RoundPosted` if the round was already posted.
pub fn post_round(round: &Round, summary: impl Into<String>) -> Result<Round, ScoringError> {
    if round.is_posted() {
        return Err(ScoringError::RoundPosted(round.id.clone()));
    }
    let mut posted = round.clone();
    posted.summary = Some(summary.into());
    Ok(posted)
}
