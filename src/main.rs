use rusty_golf_scoring::args;
use rusty_golf_scoring::controller::handicap::estimate_handicap;
use rusty_golf_scoring::controller::leaderboard::{
    CompetitionStanding, RoundSummary, competition_leaderboard, summarize_round,
};
use rusty_golf_scoring::controller::score::{check_round_strokes, recompute_round};
use rusty_golf_scoring::model::{Directory, PlayerId, Round};
use rusty_golf_scoring::mvu::runtime::run_round_messages;
use rusty_golf_scoring::mvu::score::{Deps, Msg, RoundModel};
use rusty_golf_scoring::storage::{JsonFileStore, MemoryStore, RoundStore};
use rusty_golf_scoring::view::summary::render_round_page;

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    summary: RoundSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    competition: Option<Vec<CompetitionStanding>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    handicap_estimates: BTreeMap<PlayerId, f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

async fn load_history(
    store: Option<JsonFileStore>,
    current: &Round,
) -> Result<Vec<Round>, Box<dyn std::error::Error>> {
    let mut rounds = match store {
        Some(store) => store.list_rounds().await?,
        None => Vec::new(),
    };
    rounds.retain(|r| r.id != current.id);
    rounds.push(current.clone());
    Ok(rounds)
}

fn build_report(
    round: &Round,
    history: &[Round],
    directory: &Directory,
    warnings: Vec<String>,
) -> Report {
    let competition = round
        .competition_id
        .as_deref()
        .and_then(|id| directory.competition(id))
        .map(|competition| {
            let rounds: Vec<Round> = history
                .iter()
                .filter(|r| r.competition_id.as_deref() == Some(competition.id.as_str()))
                .cloned()
                .collect();
            competition_leaderboard(competition, &rounds, directory)
        });

    let handicap_estimates = round
        .player_ids
        .iter()
        .filter_map(|&id| estimate_handicap(history, id).map(|hcp| (id, hcp)))
        .collect();

    Report {
        summary: summarize_round(round, directory),
        competition,
        handicap_estimates,
        warnings,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let contents = tokio::fs::read_to_string(&args.round_path).await?;
    let mut round: Round = serde_json::from_str(&contents)?;
    check_round_strokes(&round)?;
    recompute_round(&mut round, &args.directory);
    log::info!(
        "loaded round {} ({}, {} players)",
        round.id,
        round.game_format,
        round.player_ids.len()
    );

    let store: Box<dyn RoundStore> = match &args.out {
        Some(dir) => Box::new(JsonFileStore::new(dir)),
        None => Box::new(MemoryStore::new()),
    };
    let deps = Deps {
        directory: &args.directory,
        store: store.as_ref(),
    };

    let mut model = RoundModel::new(round);
    let msgs = args.edits.into_iter().map(Msg::StrokesEntered).collect();
    if let Err(e) = run_round_messages(&mut model, msgs, deps).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    for warning in &model.warnings {
        eprintln!("Warning: {warning}");
    }

    if args.html {
        println!(
            "{}",
            render_round_page(&model.round, &args.directory).into_string()
        );
        return Ok(());
    }

    let history = load_history(args.history.map(JsonFileStore::new), &model.round).await?;
    let report = build_report(&model.round, &history, &args.directory, model.warnings);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
