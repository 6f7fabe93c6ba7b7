mod common;

use common::{
    directory, fixture_directory, player, post_card, round_date, setup, start, team,
};
use rusty_golf_scoring::controller::leaderboard::{
    competition_leaderboard, round_standings, round_winners, shared_positions, summarize_round,
};
use rusty_golf_scoring::controller::score::{RoundSetup, set_strokes, start_round};
use rusty_golf_scoring::model::{GameFormat, HOLES, Round};

fn card_to_par(to_par: i32) -> [i32; HOLES] {
    std::array::from_fn(|i| {
        if i32::try_from(i).unwrap() < to_par.abs() {
            4 + to_par.signum()
        } else {
            4
        }
    })
}

#[test]
fn test_shared_positions() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(shared_positions(&[-3, -1, -1, 2]), vec![1, 2, 2, 4]);
    assert_eq!(shared_positions(&[0, 0, 0]), vec![1, 1, 1]);
    assert_eq!(shared_positions(&[]), Vec::<usize>::new());
    Ok(())
}

#[test]
fn test_stroke_play_standings_rank_by_net() -> Result<(), Box<dyn std::error::Error>> {
    let dir = directory(vec![
        player(1, "Bob", 0.0),
        player(2, "Ann", 18.0),
        player(3, "Cy", 0.0),
        player(4, "Di", 0.0),
    ]);
    let round = start(setup("r1", GameFormat::StrokePlay, &[1, 2, 3, 4], vec![]), &dir);
    let round = post_card(&round, &dir, "1", [4; HOLES]);
    let round = post_card(&round, &dir, "2", [5; HOLES]);
    let round = post_card(&round, &dir, "3", card_to_par(3));
    // Di stops after 17 holes and is left off
    let round = post_card(&round, &dir, "4", [4; HOLES]);
    let round = set_strokes(&round, &dir, "4", 17, None)?;

    let standings = round_standings(&round, &dir);
    let rows: Vec<(&str, i32, i32, i32, usize)> = standings
        .iter()
        .map(|s| (s.name.as_str(), s.gross, s.net, s.to_par, s.position))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Ann", 90, 72, 0, 1),
            ("Bob", 72, 72, 0, 1),
            ("Cy", 75, 75, 3, 3),
        ]
    );
    assert_eq!(
        round_winners(&round, &dir),
        vec!["2".to_string(), "1".to_string()]
    );
    Ok(())
}

#[test]
fn test_scramble_uses_team_handicap() -> Result<(), Box<dyn std::error::Error>> {
    let dir = fixture_directory();
    let competition = dir.competition("scramble-cup").ok_or("fixture competition")?;
    let round = start_round(
        RoundSetup::from_competition(competition, "sc1", 1, round_date(3)),
        &dir,
    )?;
    let round = post_card(&round, &dir, "low", [4; HOLES]);
    let round = post_card(&round, &dir, "high", card_to_par(6));

    // low: (0 + 0) / 2 = 0, high: (10 + 20) / 2 = 15
    let standings = round_standings(&round, &dir);
    let rows: Vec<(&str, i32, i32, i32)> = standings
        .iter()
        .map(|s| (s.entity_id.as_str(), s.gross, s.net, s.to_par))
        .collect();
    assert_eq!(rows, vec![("high", 78, 63, -9), ("low", 72, 72, 0)]);
    assert_eq!(round_winners(&round, &dir), vec!["high".to_string()]);
    Ok(())
}

#[test]
fn test_best_ball_ranks_on_composite_gross() -> Result<(), Box<dyn std::error::Error>> {
    let dir = directory(vec![
        player(1, "Ann", 0.0),
        player(2, "Bob", 0.0),
        player(3, "Cy", 36.0),
        player(4, "Di", 0.0),
    ]);
    let round = start(
        setup(
            "b1",
            GameFormat::BestBall,
            &[1, 2, 3, 4],
            vec![team("A", "Team A", &[1, 2]), team("B", "Team B", &[3, 4])],
        ),
        &dir,
    );
    let round = post_card(&round, &dir, "1", [4; HOLES]);
    let round = post_card(&round, &dir, "2", [5; HOLES]);
    // Cy nets 3 everywhere off a gross 5, so team B carries his 5s
    let round = post_card(&round, &dir, "3", [5; HOLES]);
    let round = post_card(&round, &dir, "4", [6; HOLES]);

    let standings = round_standings(&round, &dir);
    let rows: Vec<(&str, i32, i32, i32, usize)> = standings
        .iter()
        .map(|s| (s.entity_id.as_str(), s.gross, s.net, s.to_par, s.position))
        .collect();
    assert_eq!(rows, vec![("A", 72, 72, 0, 1), ("B", 90, 54, 18, 2)]);
    Ok(())
}

#[test]
fn test_competition_leaderboard_folds_rounds() -> Result<(), Box<dyn std::error::Error>> {
    let dir = fixture_directory();
    let competition = dir.competition("spring").ok_or("fixture competition")?;

    let play = |id: &str, day: u32, ann: i32, bob: i32| -> Result<Round, Box<dyn std::error::Error>> {
        let round = start_round(
            RoundSetup::from_competition(competition, id, 1, round_date(day)),
            &dir,
        )?;
        let round = post_card(&round, &dir, "1", card_to_par(ann));
        Ok(post_card(&round, &dir, "2", card_to_par(bob)))
    };

    let mut rounds = vec![play("sp1", 1, 0, 5)?, play("sp2", 8, 4, -1)?];
    // a round from elsewhere does not count
    let mut stray = play("other", 9, 10, -10)?;
    stray.competition_id = Some("autumn".to_string());
    rounds.push(stray);
    // an unfinished round counts for nobody
    let unfinished = start_round(
        RoundSetup::from_competition(competition, "sp3", 1, round_date(15)),
        &dir,
    )?;
    rounds.push(unfinished);

    let board = competition_leaderboard(competition, &rounds, &dir);
    let rows: Vec<(&str, i32, usize, usize)> = board
        .iter()
        .map(|s| (s.name.as_str(), s.total_to_par, s.rounds_played, s.position))
        .collect();
    assert_eq!(rows, vec![("Ann", 4, 2, 1), ("Bob", 4, 2, 1)]);
    Ok(())
}

#[test]
fn test_round_summary() -> Result<(), Box<dyn std::error::Error>> {
    let dir = fixture_directory();
    let competition = dir.competition("spring").ok_or("fixture competition")?;
    let round = start_round(
        RoundSetup::from_competition(competition, "sp1", 1, round_date(1)),
        &dir,
    )?;
    let round = post_card(&round, &dir, "1", card_to_par(-2));
    let round = post_card(&round, &dir, "2", [4; HOLES]);

    let summary = summarize_round(&round, &dir);
    assert_eq!(summary.round_id, "sp1");
    assert_eq!(summary.winners, vec!["1".to_string()]);
    assert_eq!(summary.match_result, None);
    let skins = summary.skins.as_ref().ok_or("skins are on")?;
    // Ann birdies the first two holes; the rest are halved
    assert_eq!(skins.totals[0].name, "Ann");
    assert!((skins.totals[0].total_value - 4.0).abs() < 1e-9);
    assert!((skins.unclaimed_carryover - 32.0).abs() < 1e-9);

    let json = serde_json::to_value(&summary)?;
    assert_eq!(json["gameFormat"], "Stroke Play");
    assert_eq!(json["standings"][0]["toPar"], -2);
    assert!(json.get("matchResult").is_none());
    Ok(())
}
