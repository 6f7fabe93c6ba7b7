use crate::model::{Course, Directory, HOLES, Player, PlayerId, Round, player_entity_id};

/// Slope of a course of standard difficulty.
pub const STANDARD_SLOPE: f64 = 113.0;

const MIN_ROUNDS_FOR_ESTIMATE: usize = 5;
const MAX_ROUNDS_FOR_ESTIMATE: usize = 20;
const MAX_COUNTING_DIFFERENTIALS: usize = 8;
const ESTIMATE_FACTOR: f64 = 0.96;

/// Round half up (toward positive infinity), so -2.5 becomes -2.
#[allow(clippy::cast_possible_truncation)]
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Scale a handicap index to a course: `round(index * slope / 113)`.
/// A plus handicap (negative index) stays negative.
#[must_use]
pub fn course_handicap(handicap_index: f64, slope: f64) -> i32 {
    round_half_up(handicap_index * slope / STANDARD_SLOPE)
}

#[must_use]
pub fn player_course_handicap(player: &Player, course: &Course) -> i32 {
    course_handicap(player.handicap_index, course.slope)
}

/// Handicap strokes received on a hole of the given difficulty (1 = hardest).
///
/// A plus handicap gives strokes back, starting from the easiest hole, so the
/// result is negative there. Over all 18 holes the strokes sum to the course
/// handicap exactly.
#[must_use]
pub fn strokes_for_hole(course_handicap: i32, hole_handicap_index: i32) -> i32 {
    let holes = HOLES as i32;
    if course_handicap >= 0 {
        let base = course_handicap / holes;
        let extra = course_handicap % holes;
        base + i32::from(hole_handicap_index <= extra)
    } else {
        let given_back = -course_handicap;
        let base = given_back / holes;
        let extra = given_back % holes;
        -(base + i32::from(hole_handicap_index > holes - extra))
    }
}

/// Scramble team handicap: the members' course handicaps averaged and rounded.
#[must_use]
pub fn team_course_handicap(course_handicaps: &[i32]) -> Option<i32> {
    if course_handicaps.is_empty() {
        return None;
    }
    let sum: i32 = course_handicaps.iter().sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = f64::from(sum) / course_handicaps.len() as f64;
    Some(round_half_up(mean))
}

/// Net score of one player on one hole, or `None` if the player or their
/// course cannot be found.
#[must_use]
pub fn player_net_for_hole(
    directory: &Directory,
    round: &Round,
    player_id: PlayerId,
    hole_index: usize,
    gross: i32,
) -> Option<i32> {
    let player = directory.player(player_id)?;
    let course = directory.course_for_player(player, round)?;
    let hole_hcp = *course.handicap_indices.get(hole_index)?;
    Some(gross - strokes_for_hole(player_course_handicap(player, course), hole_hcp))
}

/// Total handicap strokes a course handicap receives over a full round.
#[must_use]
pub fn total_strokes_received(course_handicap: i32, course: &Course) -> i32 {
    course
        .handicap_indices
        .iter()
        .map(|hcp| strokes_for_hole(course_handicap, *hcp))
        .sum()
}

/// Rough handicap estimate from a player's recent rounds.
///
/// Not a USGA index: each round's differential is simply strokes minus par.
/// The most recent 20 rounds are considered, the best `min(8, n / 2.5)` are
/// averaged, scaled by 0.96 and floored to one decimal. Returns `None` with
/// fewer than five rounds.
#[must_use]
pub fn estimate_handicap(history: &[Round], player_id: PlayerId) -> Option<f64> {
    let entity_id = player_entity_id(player_id);
    let mut rounds: Vec<&Round> = history
        .iter()
        .filter(|r| r.scores.contains_key(&entity_id))
        .collect();

    if rounds.len() < MIN_ROUNDS_FOR_ESTIMATE {
        return None;
    }

    rounds.sort_by(|a, b| b.date.cmp(&a.date));
    rounds.truncate(MAX_ROUNDS_FOR_ESTIMATE);

    let mut differentials: Vec<i32> = rounds
        .iter()
        .filter_map(|r| r.scores.get(&entity_id))
        .map(|sheet| {
            let strokes: i32 = sheet.iter().map(|s| s.strokes.unwrap_or(0)).sum();
            let par: i32 = sheet.iter().map(|s| s.par).sum();
            strokes - par
        })
        .collect();
    differentials.sort_unstable();

    // n / 2.5 == 2n / 5
    let counting = MAX_COUNTING_DIFFERENTIALS.min(differentials.len() * 2 / 5);
    if counting < 1 {
        return None;
    }

    let best: i32 = differentials.iter().take(counting).sum();
    #[allow(clippy::cast_precision_loss)]
    let average = f64::from(best) / counting as f64;
    Some((average * ESTIMATE_FACTOR * 10.0).floor() / 10.0)
}
