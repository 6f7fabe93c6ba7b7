mod common;

use common::{directory, player, post_card, post_holes, setup, start, team};
use rusty_golf_scoring::controller::leaderboard::{round_winners, summarize_round};
use rusty_golf_scoring::controller::score::{
    final_match_text, match_status, match_status_text, relative_match_status, set_strokes,
};
use rusty_golf_scoring::model::{Directory, GameFormat, HOLES, HoleWinner, Round};

fn match_round() -> (Directory, Round) {
    let dir = directory(vec![player(1, "Ann", 0.0), player(2, "Bob", 0.0)]);
    let round = start(
        setup(
            "m1",
            GameFormat::MatchPlay,
            &[1, 2],
            vec![team("A", "TeamA", &[1]), team("B", "TeamB", &[2])],
        ),
        &dir,
    );
    (dir, round)
}

fn best_ball_round(format: GameFormat) -> (Directory, Round) {
    // Ann gets one stroke on the hardest hole (hole 1), Bob plays off scratch.
    let dir = directory(vec![player(1, "Ann", 1.0), player(2, "Bob", 0.0)]);
    let round = start(setup("b1", format, &[1, 2], vec![team("A", "Team A", &[1, 2])]), &dir);
    (dir, round)
}

#[test]
fn test_stroke_play_net_per_hole() -> Result<(), Box<dyn std::error::Error>> {
    let dir = directory(vec![player(1, "Ann", 20.0)]);
    let round = start(setup("r1", GameFormat::StrokePlay, &[1], vec![]), &dir);
    let round = post_card(&round, &dir, "1", [5; HOLES]);
    let sheet = &round.scores["1"];
    // 20 strokes: two on the two hardest holes, one elsewhere
    assert_eq!(sheet[0].net_strokes, Some(3));
    assert_eq!(sheet[1].net_strokes, Some(3));
    assert_eq!(sheet[2].net_strokes, Some(4));
    assert_eq!(sheet.iter().filter_map(|s| s.net_strokes).sum::<i32>(), 70);
    Ok(())
}

#[test]
fn test_best_ball_takes_gross_of_best_net_member() -> Result<(), Box<dyn std::error::Error>> {
    let (dir, round) = best_ball_round(GameFormat::BestBall);
    let round = set_strokes(&round, &dir, "1", 0, Some(4))?;
    let round = set_strokes(&round, &dir, "2", 0, Some(5))?;

    assert_eq!(round.scores["1"][0].net_strokes, Some(3));
    assert_eq!(round.scores["2"][0].net_strokes, Some(5));
    assert_eq!(round.scores["A"][0].strokes, Some(4));
    assert_eq!(round.scores["A"][0].net_strokes, Some(3));
    Ok(())
}

#[test]
fn test_equal_nets_go_to_lowest_player_id() -> Result<(), Box<dyn std::error::Error>> {
    let (dir, round) = best_ball_round(GameFormat::Shamble);
    // Ann 5 (net 4), Bob 4 (net 4)
    let round = set_strokes(&round, &dir, "2", 0, Some(4))?;
    let round = set_strokes(&round, &dir, "1", 0, Some(5))?;
    assert_eq!(round.scores["A"][0].strokes, Some(5));
    assert_eq!(round.scores["A"][0].net_strokes, Some(4));
    Ok(())
}

#[test]
fn test_composite_follows_member_edits() -> Result<(), Box<dyn std::error::Error>> {
    let (dir, round) = best_ball_round(GameFormat::BestBall);
    let round = set_strokes(&round, &dir, "2", 5, Some(6))?;
    assert_eq!(round.scores["A"][5].strokes, Some(6));

    let round = set_strokes(&round, &dir, "1", 5, Some(3))?;
    assert_eq!(round.scores["A"][5].strokes, Some(3));

    let round = set_strokes(&round, &dir, "1", 5, None)?;
    assert_eq!(round.scores["A"][5].strokes, Some(6));

    let round = set_strokes(&round, &dir, "2", 5, None)?;
    assert_eq!(round.scores["A"][5].strokes, None);
    assert_eq!(round.scores["A"][5].net_strokes, None);
    Ok(())
}

#[test]
fn test_match_hole_goes_to_lower_net() -> Result<(), Box<dyn std::error::Error>> {
    let (dir, round) = match_round();
    let round = set_strokes(&round, &dir, "1", 0, Some(4))?;
    assert!(round.match_result.is_empty());

    let round = set_strokes(&round, &dir, "2", 0, Some(5))?;
    assert_eq!(round.match_result.get(&0), Some(&HoleWinner::Side("A".to_string())));
    assert_eq!(match_status_text(&round), "TeamA 1 UP");
    assert_eq!(relative_match_status(&round, "A").as_deref(), Some("1 UP"));
    assert_eq!(relative_match_status(&round, "B").as_deref(), Some("1 DOWN"));
    assert_eq!(relative_match_status(&round, "C"), None);

    let round = set_strokes(&round, &dir, "1", 0, None)?;
    assert!(round.match_result.is_empty());
    assert_eq!(match_status_text(&round), "All Square");
    assert_eq!(relative_match_status(&round, "A").as_deref(), Some("AS"));
    Ok(())
}

#[test]
fn test_full_match_final_text() -> Result<(), Box<dyn std::error::Error>> {
    let (dir, round) = match_round();
    // Ann takes hole 1 and every even hole, Bob the other odd ones: 10 to 8.
    let ann: [i32; HOLES] = std::array::from_fn(|i| if i == 0 || i % 2 == 1 { 4 } else { 5 });
    let bob: [i32; HOLES] = std::array::from_fn(|i| if i == 0 || i % 2 == 1 { 5 } else { 4 });
    let round = post_card(&round, &dir, "1", ann);
    let round = post_card(&round, &dir, "2", bob);

    let status = match_status(&round).ok_or("two sides")?;
    assert_eq!((status.wins_a, status.wins_b, status.halved), (10, 8, 0));
    assert_eq!(final_match_text(&round), "TeamA won 2 UP");
    assert_eq!(round_winners(&round, &dir), vec!["A".to_string()]);
    Ok(())
}

#[test]
fn test_match_decided_early() -> Result<(), Box<dyn std::error::Error>> {
    let (dir, round) = match_round();
    let wins: Vec<(usize, i32)> = (0..5).map(|h| (h, 3)).collect();
    let halves: Vec<(usize, i32)> = (5..13).map(|h| (h, 4)).collect();
    let round = post_holes(&round, &dir, "1", &wins);
    let round = post_holes(&round, &dir, "1", &halves);
    let round = post_holes(&round, &dir, "2", &(0..13).map(|h| (h, 4)).collect::<Vec<_>>());

    // 5 up with 5 to play: dormie, not over
    assert_eq!(match_status_text(&round), "TeamA 5 UP");
    assert_eq!(final_match_text(&round), "Match Incomplete");
    assert!(round_winners(&round, &dir).is_empty());

    let round = post_holes(&round, &dir, "1", &[(13, 3)]);
    let round = post_holes(&round, &dir, "2", &[(13, 4)]);
    assert_eq!(match_status_text(&round), "TeamA won 6&4");
    assert_eq!(final_match_text(&round), "TeamA won 6&4");
    assert_eq!(round_winners(&round, &dir), vec!["A".to_string()]);
    assert_eq!(
        summarize_round(&round, &dir).match_result.as_deref(),
        Some("TeamA won 6&4")
    );
    Ok(())
}

#[test]
fn test_halved_match() -> Result<(), Box<dyn std::error::Error>> {
    let (dir, round) = match_round();
    let round = post_card(&round, &dir, "1", [4; HOLES]);
    let round = post_card(&round, &dir, "2", [4; HOLES]);
    assert!(round.match_result.values().all(|w| *w == HoleWinner::Tie));
    assert_eq!(final_match_text(&round), "Match Tied");
    assert_eq!(
        round_winners(&round, &dir),
        vec!["A".to_string(), "B".to_string()]
    );
    Ok(())
}

#[test]
fn test_four_ball_match_uses_best_member() -> Result<(), Box<dyn std::error::Error>> {
    let dir = directory(vec![
        player(1, "Ann", 0.0),
        player(2, "Bob", 0.0),
        player(3, "Cy", 0.0),
        player(4, "Di", 0.0),
    ]);
    let round = start(
        setup(
            "m2",
            GameFormat::MatchPlay,
            &[1, 2, 3, 4],
            vec![team("A", "TeamA", &[1, 2]), team("B", "TeamB", &[3, 4])],
        ),
        &dir,
    );
    let round = set_strokes(&round, &dir, "1", 0, Some(6))?;
    let round = set_strokes(&round, &dir, "3", 0, Some(5))?;
    assert_eq!(round.match_result.get(&0), Some(&HoleWinner::Side("B".to_string())));

    let round = set_strokes(&round, &dir, "2", 0, Some(4))?;
    assert_eq!(round.match_result.get(&0), Some(&HoleWinner::Side("A".to_string())));

    let round = set_strokes(&round, &dir, "4", 0, Some(4))?;
    assert_eq!(round.match_result.get(&0), Some(&HoleWinner::Tie));
    Ok(())
}

#[test]
fn test_match_play_respects_handicaps() -> Result<(), Box<dyn std::error::Error>> {
    let dir = directory(vec![player(1, "Ann", 18.0), player(2, "Bob", 0.0)]);
    let round = start(
        setup(
            "m3",
            GameFormat::MatchPlay,
            &[1, 2],
            vec![team("A", "TeamA", &[1]), team("B", "TeamB", &[2])],
        ),
        &dir,
    );
    // gross 5 vs 4, but Ann receives a stroke on every hole
    let round = set_strokes(&round, &dir, "1", 0, Some(5))?;
    let round = set_strokes(&round, &dir, "2", 0, Some(4))?;
    assert_eq!(round.match_result.get(&0), Some(&HoleWinner::Tie));
    Ok(())
}
