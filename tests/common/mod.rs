#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rusty_golf_scoring::controller::score::{RoundSetup, ScoreEdit, apply_edits, start_round};
use rusty_golf_scoring::model::{
    Course, CourseId, Directory, GameFormat, HOLES, Player, PlayerId, Round, SkinsScoringType,
    Team,
};

pub const COURSE_ID: CourseId = 1;
pub const SECOND_COURSE_ID: CourseId = 2;

/// Par 72, every hole a par 4, handicap indices 1-18 in hole order.
pub fn flat_course(id: CourseId, slope: f64) -> Course {
    Course {
        id,
        name: format!("Course {id}"),
        pars: [4; HOLES],
        handicap_indices: std::array::from_fn(|idx| i32::try_from(idx + 1).unwrap()),
        rating: 72.0,
        slope,
    }
}

pub fn player(id: PlayerId, name: &str, handicap_index: f64) -> Player {
    Player {
        id,
        name: name.to_string(),
        handicap_index,
        course_id: None,
    }
}

pub fn player_on(id: PlayerId, name: &str, handicap_index: f64, course_id: CourseId) -> Player {
    Player {
        course_id: Some(course_id),
        ..player(id, name, handicap_index)
    }
}

pub fn team(id: &str, name: &str, player_ids: &[PlayerId]) -> Team {
    Team {
        id: id.to_string(),
        name: name.to_string(),
        player_ids: player_ids.to_vec(),
    }
}

pub fn directory(players: Vec<Player>) -> Directory {
    Directory::new(
        players,
        vec![
            flat_course(COURSE_ID, 113.0),
            flat_course(SECOND_COURSE_ID, 113.0),
        ],
        vec![],
    )
    .expect("test courses are valid")
}

pub fn round_date(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, day, 9, 0, 0).unwrap()
}

pub fn setup(
    id: &str,
    game_format: GameFormat,
    player_ids: &[PlayerId],
    teams: Vec<Team>,
) -> RoundSetup {
    RoundSetup {
        id: id.to_string(),
        course_id: COURSE_ID,
        date: round_date(1),
        game_format,
        player_ids: player_ids.to_vec(),
        teams,
        competition_id: None,
        skin_value: None,
        skins_scoring_type: None,
    }
}

pub fn with_skins(mut setup: RoundSetup, value: f64, scoring: SkinsScoringType) -> RoundSetup {
    setup.skin_value = Some(value);
    setup.skins_scoring_type = Some(scoring);
    setup
}

pub fn start(setup: RoundSetup, directory: &Directory) -> Round {
    start_round(setup, directory).expect("round setup is valid")
}

/// Post a full card for one entity through the normal edit path.
pub fn post_card(round: &Round, directory: &Directory, entity_id: &str, strokes: [i32; HOLES]) -> Round {
    let edits: Vec<ScoreEdit> = strokes
        .iter()
        .enumerate()
        .map(|(hole_index, s)| ScoreEdit::new(entity_id, hole_index, Some(*s)))
        .collect();
    apply_edits(round, directory, &edits).expect("card edits are valid")
}

/// Post the same stroke count on the given holes.
pub fn post_holes(
    round: &Round,
    directory: &Directory,
    entity_id: &str,
    holes: &[(usize, i32)],
) -> Round {
    let edits: Vec<ScoreEdit> = holes
        .iter()
        .map(|(hole_index, s)| ScoreEdit::new(entity_id, *hole_index, Some(*s)))
        .collect();
    apply_edits(round, directory, &edits).expect("hole edits are valid")
}

pub fn fixture_directory() -> Directory {
    Directory::from_json(include_str!("../fixtures/directory.json"))
        .expect("fixture directory is valid")
}
