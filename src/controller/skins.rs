use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::controller::handicap::{
    player_course_handicap, player_net_for_hole, strokes_for_hole, team_course_handicap,
};
use crate::controller::score::format_aggregators::{Composite, best_member_for_hole};
use crate::model::{
    Course, CourseId, Directory, EntityId, GameFormat, HOLES, PlayerId, Round, SkinResult,
    SkinsScoringType, Team,
};

#[derive(Debug, Clone)]
enum Participant<'a> {
    Player(PlayerId),
    Team(&'a Team),
}

#[derive(Debug, Clone)]
struct Entrant<'a> {
    id: EntityId,
    participant: Participant<'a>,
    course_id: CourseId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HoleValue {
    Posted(i32),
    NotPosted,
    /// Reference data needed to score the entrant is missing.
    Unresolved,
}

impl From<Option<i32>> for HoleValue {
    fn from(value: Option<i32>) -> Self {
        value.map_or(Self::NotPosted, Self::Posted)
    }
}

fn entrants<'a>(round: &'a Round, directory: &Directory) -> Vec<Entrant<'a>> {
    if round.game_format.is_team_format() && !round.teams.is_empty() {
        round
            .teams
            .iter()
            .map(|team| Entrant {
                id: team.id.clone(),
                participant: Participant::Team(team),
                course_id: team.player_ids.first().map_or(round.course_id, |&first| {
                    directory.course_id_for_player(first, round)
                }),
            })
            .collect()
    } else {
        round
            .player_ids
            .iter()
            .map(|&player_id| Entrant {
                id: player_id.to_string(),
                participant: Participant::Player(player_id),
                course_id: directory.course_id_for_player(player_id, round),
            })
            .collect()
    }
}

fn scramble_team_handicap(
    directory: &Directory,
    round: &Round,
    team: &Team,
    primary: &Course,
) -> Option<i32> {
    let handicaps = team
        .player_ids
        .iter()
        .map(|&player_id| {
            let player = directory.player(player_id)?;
            let course = directory.course_for_player(player, round).unwrap_or(primary);
            Some(player_course_handicap(player, course))
        })
        .collect::<Option<Vec<i32>>>()?;
    team_course_handicap(&handicaps)
}

fn hole_value(
    directory: &Directory,
    round: &Round,
    primary: &Course,
    entrant: &Entrant<'_>,
    hole_index: usize,
) -> HoleValue {
    let scoring = round.skins_scoring();
    match entrant.participant {
        Participant::Player(player_id) => {
            let Some(gross) = round.player_strokes(player_id, hole_index) else {
                return HoleValue::NotPosted;
            };
            match scoring {
                SkinsScoringType::Gross => HoleValue::Posted(gross),
                SkinsScoringType::Net => {
                    player_net_for_hole(directory, round, player_id, hole_index, gross)
                        .map_or(HoleValue::Unresolved, HoleValue::Posted)
                }
            }
        }
        Participant::Team(team) if round.game_format == GameFormat::Scramble => {
            let gross = round
                .sheet(&team.id)
                .and_then(|sheet| sheet[hole_index].strokes);
            let Some(gross) = gross else {
                return HoleValue::NotPosted;
            };
            match scoring {
                SkinsScoringType::Gross => HoleValue::Posted(gross),
                SkinsScoringType::Net => scramble_team_handicap(directory, round, team, primary)
                    .map_or(HoleValue::Unresolved, |team_hcp| {
                        let strokes =
                            strokes_for_hole(team_hcp, primary.handicap_indices[hole_index]);
                        HoleValue::Posted(gross - strokes)
                    }),
            }
        }
        Participant::Team(team) => match best_member_for_hole(directory, round, team, hole_index) {
            Composite::Pick(pick) => HoleValue::Posted(match scoring {
                SkinsScoringType::Gross => pick.gross,
                SkinsScoringType::Net => pick.net,
            }),
            Composite::NoScores => HoleValue::NotPosted,
            Composite::Unresolved => HoleValue::Unresolved,
        },
    }
}

/// Rebuild the whole skins ledger from the current scores.
///
/// Returns `Some(vec![])` when skins are off, and `None` when reference data
/// is missing, in which case the caller keeps the previous ledger.
///
/// Holes are settled in order. Entrants only play for a skin against others
/// on the same course. A hole is won when exactly one entrant in the whole
/// field has the outright low score of its course group; any tie pushes the
/// pot to the next hole. The first hole someone has not posted on stops the
/// run: it shows the running pot and every later hole shows the base value.
#[must_use]
pub fn compute_skins(round: &Round, directory: &Directory) -> Option<Vec<SkinResult>> {
    let Some(base) = round.skins_base_value() else {
        return Some(Vec::new());
    };
    let Some(primary) = directory.course(round.course_id) else {
        log::warn!(
            "round {}: primary course {} not found, keeping prior skins",
            round.id,
            round.course_id
        );
        return None;
    };

    let field = entrants(round, directory);
    let mut groups: BTreeMap<CourseId, Vec<usize>> = BTreeMap::new();
    for (idx, entrant) in field.iter().enumerate() {
        groups.entry(entrant.course_id).or_default().push(idx);
    }

    let mut ledger: Vec<SkinResult> = Vec::with_capacity(HOLES);
    let mut carryover = 0.0;

    for hole_index in 0..HOLES {
        let mut values = Vec::with_capacity(field.len());
        for entrant in &field {
            match hole_value(directory, round, primary, entrant, hole_index) {
                HoleValue::Posted(value) => values.push(Some(value)),
                HoleValue::NotPosted => values.push(None),
                HoleValue::Unresolved => {
                    log::warn!(
                        "round {}: cannot score {} on hole {}, keeping prior skins",
                        round.id,
                        entrant.id,
                        hole_index + 1
                    );
                    return None;
                }
            }
        }

        let pot = base + carryover;

        if values.iter().any(Option::is_none) {
            ledger.push(SkinResult::unresolved(hole_index, pot));
            ledger.extend((hole_index + 1..HOLES).map(|idx| SkinResult::unresolved(idx, base)));
            return Some(ledger);
        }

        let mut hole_winners: Vec<&EntityId> = Vec::new();
        let mut any_group_tied = false;
        for members in groups.values() {
            let scored: Vec<(usize, i32)> = members
                .iter()
                .filter_map(|&idx| values[idx].map(|v| (idx, v)))
                .collect();
            let Some(low) = scored.iter().map(|(_, v)| *v).min() else {
                continue;
            };
            let leaders: Vec<usize> = scored
                .iter()
                .filter(|(_, v)| *v == low)
                .map(|(idx, _)| *idx)
                .collect();
            if let [only] = leaders.as_slice() {
                hole_winners.push(&field[*only].id);
            } else {
                any_group_tied = true;
            }
        }

        match hole_winners.as_slice() {
            [winner] if !any_group_tied => {
                log::debug!(
                    "round {}: skin on hole {} to {winner} for {pot}",
                    round.id,
                    hole_index + 1
                );
                ledger.push(SkinResult {
                    hole_index,
                    winner_id: Some((*winner).clone()),
                    value: pot,
                    carried_over: false,
                });
                carryover = 0.0;
            }
            _ => {
                ledger.push(SkinResult {
                    hole_index,
                    winner_id: None,
                    value: pot,
                    carried_over: true,
                });
                carryover = pot;
            }
        }
    }

    Some(ledger)
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkinsHoleStatus {
    pub hole_index: usize,
    /// What the skin on this hole is currently worth.
    pub pot_value: f64,
    /// How the previous hole went, if it has been settled.
    pub previous_hole: Option<String>,
}

/// Pot and previous-hole line shown while playing `hole_index`.
#[must_use]
pub fn skins_hole_status(
    round: &Round,
    directory: &Directory,
    hole_index: usize,
) -> Option<SkinsHoleStatus> {
    let base = round.skins_base_value()?;
    let pot_value = round
        .skins_result
        .get(hole_index)
        .map_or(base, |skin| skin.value);

    let previous_hole = hole_index
        .checked_sub(1)
        .and_then(|prev| round.skins_result.get(prev))
        .and_then(|skin| {
            if skin.carried_over {
                Some(format!(
                    "Hole {} was a tie. Pot carried over.",
                    skin.hole_index + 1
                ))
            } else {
                skin.winner_id.as_ref().map(|winner| {
                    format!(
                        "Hole {} won by {} for ${}.",
                        skin.hole_index + 1,
                        directory.entity_name(round, winner),
                        skin.value
                    )
                })
            }
        });

    Some(SkinsHoleStatus {
        hole_index,
        pot_value,
        previous_hole,
    })
}
