//! `lume stat` — Show size, modification time, and type of a path.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;

use crate::output::{format_bytes, format_mtime};

/// Arguments for the `stat` command.
#[derive(Args, Debug)]
pub struct StatArgs {
    /// Path to inspect.
    pub path: PathBuf,

    /// Print the raw record as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `stat` command.
///
/// Exits with status 1 when the path cannot be stat'ed.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(args: StatArgs) -> anyhow::Result<ExitCode> {
    let Some(info) = lume_core::fs::file_info(&args.path) else {
        eprintln!("cannot stat: {}", args.path.display());
        return Ok(ExitCode::FAILURE);
    };

    if args.json {
        println!("{}", serde_json::to_string(&info)?);
    } else {
        println!("type:     {}", info.kind);
        println!("size:     {} ({} bytes)", format_bytes(info.size), info.size);
        println!("modified: {}", format_mtime(info.modified));
    }
    Ok(ExitCode::SUCCESS)
}
