//! `lume ls` — List directory entries.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;

/// Arguments for the `ls` command.
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Directory to list.
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Sort entries by name instead of platform order.
    #[arg(short, long)]
    pub sort: bool,
}

/// Executes the `ls` command.
///
/// # Errors
///
/// Returns an error if the directory cannot be opened.
pub fn execute(args: LsArgs) -> anyhow::Result<ExitCode> {
    let mut names = lume_core::fs::list_dir(&args.path)?;
    if args.sort {
        names.sort();
    }
    for name in names {
        println!("{name}");
    }
    Ok(ExitCode::SUCCESS)
}
