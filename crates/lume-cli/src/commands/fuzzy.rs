//! `lume match` — Rank stdin lines against a fuzzy query.

use std::io::Write;
use std::process::ExitCode;

use clap::Args;

/// Arguments for the `match` command.
#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Query to match against each line.
    pub query: String,

    /// Print at most this many matches.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Executes the `match` command.
///
/// Prints `score<TAB>line` for every matching line, best first. Exits
/// with status 1 when nothing matches.
///
/// # Errors
///
/// Returns an error if stdin cannot be read or stdout cannot be written.
pub fn execute(args: MatchArgs) -> anyhow::Result<ExitCode> {
    let candidates = super::read_candidates()?;
    let ranked = lume_core::rank(candidates.iter().map(String::as_str), &args.query);
    tracing::debug!(
        query = %args.query,
        candidates = candidates.len(),
        matches = ranked.len(),
        "ranked candidates"
    );
    if ranked.is_empty() {
        return Ok(ExitCode::FAILURE);
    }

    let mut stdout = std::io::stdout().lock();
    for r in ranked.iter().take(args.limit.unwrap_or(usize::MAX)) {
        writeln!(stdout, "{}\t{}", r.score, r.candidate)?;
    }
    Ok(ExitCode::SUCCESS)
}
