use clap::Parser;
use std::path::PathBuf;

use crate::controller::score::ScoreEdit;
use crate::model::Directory;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Json file holding players, courses and competitions.
    #[arg(
        short = 'd',
        long,
        value_name = "DIRECTORY_JSON",
        value_parser = crate::args::validation::check_readable_file_and_json
    )]
    pub directory: Directory,
    /// Json file holding the round to score.
    #[arg(
        short = 'r',
        long,
        value_name = "ROUND_JSON",
        value_parser = crate::args::validation::check_readable_file
    )]
    pub round: PathBuf,
    /// Score edit as ENTITY:HOLE:STROKES, hole 1-18, `-` clears. Repeatable.
    #[arg(
        short = 'e',
        long = "edit",
        value_name = "ENTITY:HOLE:STROKES",
        value_parser = crate::args::validation::parse_edit
    )]
    pub edits: Vec<ScoreEdit>,
    /// Save the edited round into this folder.
    #[arg(short = 'o', long, value_name = "OUTPUT_DIR")]
    pub out: Option<PathBuf>,
    /// Render an html page instead of the json summary.
    #[arg(long, default_value_t = false)]
    pub html: bool,
    /// Folder of earlier rounds, used for the competition leaderboard and
    /// handicap estimates.
    #[arg(
        long,
        value_name = "HISTORY_DIR",
        value_parser = crate::args::validation::check_readable_dir
    )]
    pub history: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub directory: Directory,
    pub round_path: PathBuf,
    pub edits: Vec<ScoreEdit>,
    pub out: Option<PathBuf>,
    pub html: bool,
    pub history: Option<PathBuf>,
}
