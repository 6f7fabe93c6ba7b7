use serde::{Deserialize, Serialize};

use crate::model::{HOLES, HoleWinner, Round, Team};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchStatus {
    pub side_a: String,
    pub side_b: String,
    pub wins_a: usize,
    pub wins_b: usize,
    pub halved: usize,
    pub holes_played: usize,
    pub holes_remaining: usize,
    /// Team id of the side ahead, `None` when all square.
    pub leader: Option<String>,
    pub margin: usize,
    /// The trailing side can no longer catch up.
    pub decided: bool,
}

fn sides(round: &Round) -> Option<(&Team, &Team)> {
    match round.teams.as_slice() {
        [a, b] => Some((a, b)),
        _ => None,
    }
}

/// Tally the match from the per-hole results; `None` unless the round has
/// exactly two sides.
#[must_use]
pub fn match_status(round: &Round) -> Option<MatchStatus> {
    let (a, b) = sides(round)?;

    let mut wins_a = 0;
    let mut wins_b = 0;
    let mut halved = 0;
    for winner in round.match_result.values() {
        match winner {
            HoleWinner::Side(id) if *id == a.id => wins_a += 1,
            HoleWinner::Side(id) if *id == b.id => wins_b += 1,
            HoleWinner::Side(_) => {}
            HoleWinner::Tie => halved += 1,
        }
    }

    let holes_played = wins_a + wins_b + halved;
    let holes_remaining = HOLES.saturating_sub(holes_played);
    let margin = wins_a.abs_diff(wins_b);
    let leader = match wins_a.cmp(&wins_b) {
        std::cmp::Ordering::Greater => Some(a.id.clone()),
        std::cmp::Ordering::Less => Some(b.id.clone()),
        std::cmp::Ordering::Equal => None,
    };

    Some(MatchStatus {
        side_a: a.id.clone(),
        side_b: b.id.clone(),
        wins_a,
        wins_b,
        halved,
        holes_played,
        holes_remaining,
        leader,
        margin,
        decided: holes_played > 0 && margin > holes_remaining,
    })
}

fn team_name<'a>(round: &'a Round, team_id: &'a str) -> &'a str {
    round.team(team_id).map_or(team_id, |t| t.name.as_str())
}

/// Live status line: `"<leader> <margin> UP"` or `"All Square"` while the
/// match is open, the final result once it is over.
#[must_use]
pub fn match_status_text(round: &Round) -> String {
    let Some(status) = match_status(round) else {
        return "Match Play".to_string();
    };
    if status.decided || status.holes_played >= HOLES {
        return final_match_text(round);
    }
    match &status.leader {
        Some(leader) => format!("{} {} UP", team_name(round, leader), status.margin),
        None => "All Square".to_string(),
    }
}

/// Result text for a finished match.
#[must_use]
pub fn final_match_text(round: &Round) -> String {
    let Some(status) = match_status(round) else {
        return "Match Incomplete".to_string();
    };
    match &status.leader {
        Some(leader) if status.decided && status.holes_remaining > 0 => format!(
            "{} won {}&{}",
            team_name(round, leader),
            status.margin,
            status.holes_remaining
        ),
        Some(leader) if status.holes_played >= HOLES => {
            format!("{} won {} UP", team_name(round, leader), status.margin)
        }
        None if status.holes_played >= HOLES => "Match Tied".to_string(),
        _ => "Match Incomplete".to_string(),
    }
}

/// Status from one side's point of view: `"2 UP"`, `"1 DOWN"` or `"AS"`.
#[must_use]
pub fn relative_match_status(round: &Round, team_id: &str) -> Option<String> {
    let status = match_status(round)?;
    let (mine, theirs) = if status.side_a == team_id {
        (status.wins_a, status.wins_b)
    } else if status.side_b == team_id {
        (status.wins_b, status.wins_a)
    } else {
        return None;
    };
    Some(match mine.cmp(&theirs) {
        std::cmp::Ordering::Greater => format!("{} UP", mine - theirs),
        std::cmp::Ordering::Less => format!("{} DOWN", theirs - mine),
        std::cmp::Ordering::Equal => "AS".to_string(),
    })
}
