use crate::controller::handicap::player_net_for_hole;
use crate::model::{
    Directory, GameFormat, HOLES, HoleWinner, PlayerId, Round, Team, player_entity_id,
};

/// The member whose ball counts for a team on one hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberPick {
    pub player_id: PlayerId,
    pub gross: i32,
    pub net: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composite {
    Pick(MemberPick),
    /// No member has posted for the hole yet.
    NoScores,
    /// A member posted but their handicap could not be resolved.
    Unresolved,
}

/// Best Ball / Shamble selection: the posted member with the lowest net
/// score; equal nets go to the lowest player id.
#[must_use]
pub fn best_member_for_hole(
    directory: &Directory,
    round: &Round,
    team: &Team,
    hole_index: usize,
) -> Composite {
    let mut best: Option<MemberPick> = None;
    for &player_id in &team.player_ids {
        let Some(gross) = round.player_strokes(player_id, hole_index) else {
            continue;
        };
        let Some(net) = player_net_for_hole(directory, round, player_id, hole_index, gross) else {
            return Composite::Unresolved;
        };
        let candidate = MemberPick {
            player_id,
            gross,
            net,
        };
        best = match best {
            Some(current) if (current.net, current.player_id) <= (net, player_id) => Some(current),
            _ => Some(candidate),
        };
    }
    best.map_or(Composite::NoScores, Composite::Pick)
}

/// Fill `net_strokes` on every player score sheet.
pub fn derive_player_net_strokes(round: &mut Round, directory: &Directory) {
    let player_ids = round.player_ids.clone();
    for player_id in player_ids {
        let entity_id = player_entity_id(player_id);
        for hole_index in 0..HOLES {
            let Some(gross) = round
                .scores
                .get(&entity_id)
                .map(|sheet| sheet[hole_index].strokes)
            else {
                break;
            };
            let net = match gross {
                Some(gross) => {
                    match player_net_for_hole(directory, round, player_id, hole_index, gross) {
                        Some(net) => Some(net),
                        None => {
                            log::warn!(
                                "round {}: no handicap data for player {player_id}, keeping prior net scores",
                                round.id
                            );
                            break;
                        }
                    }
                }
                None => None,
            };
            if let Some(sheet) = round.scores.get_mut(&entity_id) {
                sheet[hole_index].net_strokes = net;
            }
        }
    }
}

/// Best Ball / Shamble: each team sheet takes, per hole, the gross score of
/// the member with the best net score.
pub fn compose_team_sheets(round: &mut Round, directory: &Directory) {
    let teams = round.teams.clone();
    for team in &teams {
        for hole_index in 0..HOLES {
            let (strokes, net) = match best_member_for_hole(directory, round, team, hole_index) {
                Composite::Pick(pick) => (Some(pick.gross), Some(pick.net)),
                Composite::NoScores => (None, None),
                Composite::Unresolved => {
                    log::warn!(
                        "round {}: team {} hole {} has unresolved members, keeping prior composite",
                        round.id,
                        team.id,
                        hole_index + 1
                    );
                    continue;
                }
            };
            if let Some(sheet) = round.scores.get_mut(&team.id) {
                sheet[hole_index].strokes = strokes;
                sheet[hole_index].net_strokes = net;
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SideScore {
    Net(i32),
    NotPosted,
    Unresolved,
}

fn side_net_for_hole(
    directory: &Directory,
    round: &Round,
    side: &Team,
    hole_index: usize,
) -> SideScore {
    match best_member_for_hole(directory, round, side, hole_index) {
        Composite::Pick(pick) => SideScore::Net(pick.net),
        Composite::NoScores => SideScore::NotPosted,
        Composite::Unresolved => SideScore::Unresolved,
    }
}

/// Match Play: decide every hole both sides have posted on. Lower net wins,
/// equal nets halve the hole. A hole whose score was cleared drops out.
pub fn resolve_match_holes(round: &mut Round, directory: &Directory) {
    if round.game_format != GameFormat::MatchPlay {
        return;
    }
    let [side_a, side_b] = match round.teams.as_slice() {
        [a, b] => [a.clone(), b.clone()],
        other => {
            log::warn!(
                "round {}: match play needs two sides, found {}",
                round.id,
                other.len()
            );
            return;
        }
    };

    for hole_index in 0..HOLES {
        let a = side_net_for_hole(directory, round, &side_a, hole_index);
        let b = side_net_for_hole(directory, round, &side_b, hole_index);
        match (a, b) {
            (SideScore::Net(net_a), SideScore::Net(net_b)) => {
                let winner = match net_a.cmp(&net_b) {
                    std::cmp::Ordering::Less => HoleWinner::Side(side_a.id.clone()),
                    std::cmp::Ordering::Greater => HoleWinner::Side(side_b.id.clone()),
                    std::cmp::Ordering::Equal => HoleWinner::Tie,
                };
                round.match_result.insert(hole_index, winner);
            }
            (SideScore::Unresolved, _) | (_, SideScore::Unresolved) => {
                log::warn!(
                    "round {}: hole {} has unresolved handicap data, keeping prior result",
                    round.id,
                    hole_index + 1
                );
            }
            _ => {
                round.match_result.remove(&hole_index);
            }
        }
    }
}
