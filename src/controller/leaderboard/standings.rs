use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::sort_utils::sort_and_rank;
use crate::controller::handicap::{
    player_course_handicap, team_course_handicap, total_strokes_received,
};
use crate::controller::score::match_play::match_status;
use crate::model::{
    Competition, Directory, EntityId, GameFormat, HOLES, PlayerId, Round, ScoreSheet,
    ScoringUnit, Team, player_entity_id,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub entity_id: EntityId,
    pub name: String,
    pub gross: i32,
    pub net: i32,
    pub par: i32,
    /// The ranking score: net to par, or composite gross to par for
    /// Best Ball and Shamble.
    pub to_par: i32,
    pub position: usize,
}

fn complete_gross(sheet: &ScoreSheet) -> Option<i32> {
    sheet.iter().map(|s| s.strokes).sum()
}

fn sheet_par(sheet: &ScoreSheet) -> i32 {
    sheet.iter().map(|s| s.par).sum()
}

fn player_standing(directory: &Directory, round: &Round, player_id: PlayerId) -> Option<Standing> {
    let entity_id = player_entity_id(player_id);
    let sheet = round.sheet(&entity_id)?;
    let gross = complete_gross(sheet)?;
    let Some((player, course)) = directory
        .player(player_id)
        .and_then(|p| directory.course_for_player(p, round).map(|c| (p, c)))
    else {
        log::warn!(
            "round {}: no handicap data for player {player_id}, left off the standings",
            round.id
        );
        return None;
    };
    let net = gross - total_strokes_received(player_course_handicap(player, course), course);
    let par = sheet_par(sheet);
    Some(Standing {
        entity_id,
        name: player.name.clone(),
        gross,
        net,
        par,
        to_par: net - par,
        position: 0,
    })
}

fn scramble_standing(directory: &Directory, round: &Round, team: &Team) -> Option<Standing> {
    let sheet = round.sheet(&team.id)?;
    let gross = complete_gross(sheet)?;
    let course = directory.course(round.course_id)?;
    let handicaps: Vec<i32> = team
        .player_ids
        .iter()
        .filter_map(|&id| directory.player(id))
        .map(|p| player_course_handicap(p, course))
        .collect();
    let team_hcp = team_course_handicap(&handicaps)?;
    let net = gross - total_strokes_received(team_hcp, course);
    let par = sheet_par(sheet);
    Some(Standing {
        entity_id: team.id.clone(),
        name: team.name.clone(),
        gross,
        net,
        par,
        to_par: net - par,
        position: 0,
    })
}

fn composite_standing(round: &Round, team: &Team) -> Option<Standing> {
    let sheet = round.sheet(&team.id)?;
    let gross = complete_gross(sheet)?;
    let net = sheet.iter().map(|s| s.net_strokes).sum::<Option<i32>>()?;
    let par = sheet_par(sheet);
    Some(Standing {
        entity_id: team.id.clone(),
        name: team.name.clone(),
        gross,
        net,
        par,
        to_par: gross - par,
        position: 0,
    })
}

/// Ranking for one round. Only score sheets with all 18 holes posted count.
#[must_use]
pub fn round_standings(round: &Round, directory: &Directory) -> Vec<Standing> {
    let mut standings: Vec<Standing> = match round.game_format.layout().standings {
        ScoringUnit::Player => round
            .player_ids
            .iter()
            .filter_map(|&id| player_standing(directory, round, id))
            .collect(),
        ScoringUnit::Team => round
            .teams
            .iter()
            .filter_map(|team| match round.game_format {
                GameFormat::Scramble => scramble_standing(directory, round, team),
                _ => composite_standing(round, team),
            })
            .collect(),
    };
    sort_and_rank(
        &mut standings,
        |s| s.to_par,
        |s| s.name.as_str(),
        |s, position| s.position = position,
    );
    standings
}

/// Entities tied for the round's best result. For match play this is the
/// winning side (both sides when halved) once the match is over.
#[must_use]
pub fn round_winners(round: &Round, directory: &Directory) -> Vec<EntityId> {
    if round.game_format == GameFormat::MatchPlay {
        let Some(status) = match_status(round) else {
            return Vec::new();
        };
        let finished = status.decided || status.holes_played >= HOLES;
        return match status.leader {
            Some(leader) if finished => vec![leader],
            None if finished => vec![status.side_a, status.side_b],
            _ => Vec::new(),
        };
    }
    winners_of(&round_standings(round, directory))
}

#[must_use]
pub fn winners_of(standings: &[Standing]) -> Vec<EntityId> {
    let Some(best) = standings.iter().map(|s| s.to_par).min() else {
        return Vec::new();
    };
    standings
        .iter()
        .filter(|s| s.to_par == best)
        .map(|s| s.entity_id.clone())
        .collect()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionStanding {
    pub entity_id: EntityId,
    pub name: String,
    pub total_to_par: i32,
    pub rounds_played: usize,
    pub position: usize,
}

/// Fold every round of a competition into one table. Players rank in
/// Stroke Play and Match Play, teams in the team formats.
#[must_use]
pub fn competition_leaderboard(
    competition: &Competition,
    rounds: &[Round],
    directory: &Directory,
) -> Vec<CompetitionStanding> {
    let seeds: Vec<(EntityId, String)> = match competition.game_format.layout().standings {
        ScoringUnit::Player => competition
            .participant_ids
            .iter()
            .filter_map(|&id| directory.player(id))
            .map(|p| (player_entity_id(p.id), p.name.clone()))
            .collect(),
        ScoringUnit::Team => competition
            .teams
            .iter()
            .map(|t| (t.id.clone(), t.name.clone()))
            .collect(),
    };

    let mut table: HashMap<EntityId, CompetitionStanding, RandomState> = seeds
        .into_iter()
        .map(|(entity_id, name)| {
            (
                entity_id.clone(),
                CompetitionStanding {
                    entity_id,
                    name,
                    total_to_par: 0,
                    rounds_played: 0,
                    position: 0,
                },
            )
        })
        .collect();

    for round in rounds
        .iter()
        .filter(|r| r.competition_id.as_deref() == Some(competition.id.as_str()))
    {
        for standing in round_standings(round, directory) {
            if let Some(entry) = table.get_mut(&standing.entity_id) {
                entry.total_to_par += standing.to_par;
                entry.rounds_played += 1;
            }
        }
    }

    let mut leaderboard: Vec<CompetitionStanding> = table.into_values().collect();
    sort_and_rank(
        &mut leaderboard,
        |s| s.total_to_par,
        |s| s.name.as_str(),
        |s, position| s.position = position,
    );
    leaderboard
}
