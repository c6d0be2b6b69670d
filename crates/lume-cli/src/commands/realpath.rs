//! `lume realpath` — Resolve a path to its absolute form.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;

/// Arguments for the `realpath` command.
#[derive(Args, Debug)]
pub struct RealpathArgs {
    /// Path to resolve.
    pub path: PathBuf,
}

/// Executes the `realpath` command.
///
/// Exits with status 1 when the path cannot be resolved.
///
/// # Errors
///
/// This command does not fail beyond its exit status.
pub fn execute(args: RealpathArgs) -> anyhow::Result<ExitCode> {
    match lume_core::fs::absolute_path(&args.path) {
        Some(resolved) => {
            println!("{}", resolved.display());
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}
