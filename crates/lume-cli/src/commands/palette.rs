//! `lume palette` — Pick one stdin line interactively.

use std::process::ExitCode;

use clap::Args;
use lume_common::config::LumeConfig;

/// Arguments for the `palette` command.
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Prompt shown before the query (overrides the configuration).
    #[arg(short, long)]
    pub prompt: Option<String>,
}

/// Executes the `palette` command.
///
/// Prints the chosen line on stdout; exits with status 1 when cancelled.
///
/// # Errors
///
/// Returns an error if stdin cannot be read or the terminal fails.
pub fn execute(args: PaletteArgs, mut config: LumeConfig) -> anyhow::Result<ExitCode> {
    if let Some(prompt) = args.prompt {
        config.palette.prompt = prompt;
    }
    let candidates = super::read_candidates()?;
    match lume_term::palette::run_palette(candidates, &config)? {
        Some(choice) => {
            println!("{choice}");
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}
