pub mod types;
pub mod validation;

use clap::Parser;

pub use types::{Args, CleanArgs};

/// Parse the command line. Clap has already run the per-flag validators, so
/// this only folds the result into [`CleanArgs`].
///
/// # Errors
///
/// Will return `Err` if `--out` points at an existing file
pub fn args_checks() -> Result<CleanArgs, String> {
    clean_args(Args::parse())
}

/// # Errors
///
/// See [`args_checks`].
pub fn clean_args(args: Args) -> Result<CleanArgs, String> {
    if let Some(out) = &args.out {
        if out.is_file() {
            return Err(format!(
                "The output folder '{}' is an existing file.",
                out.display()
            ));
        }
    }

    Ok(CleanArgs {
        directory: args.directory,
        round_path: args.round,
        edits: args.edits,
        out: args.out,
        html: args.html,
        history: args.history,
    })
}
