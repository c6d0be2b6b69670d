//! CLI command definitions and dispatch.

pub mod clipboard;
pub mod confirm;
pub mod cursor;
pub mod events;
pub mod fuzzy;
pub mod ls;
pub mod palette;
pub mod realpath;
pub mod stat;
pub mod time;
pub mod title;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use lume_common::config::LumeConfig;
use lume_common::constants::BIN_NAME;

/// Lume — native event normalization and host utilities.
#[derive(Parser, Debug)]
#[command(name = BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Path to the configuration file (defaults to ~/.lume/config.json).
    #[arg(long, global = true, env = "LUME_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Stream normalized terminal events as JSON lines.
    Events(events::EventsArgs),
    /// Rank stdin lines against a fuzzy query.
    Match(fuzzy::MatchArgs),
    /// Pick one stdin line interactively.
    Palette(palette::PaletteArgs),
    /// List directory entries.
    Ls(ls::LsArgs),
    /// Show size, modification time, and type of a path.
    Stat(stat::StatArgs),
    /// Resolve a path to its absolute form.
    Realpath(realpath::RealpathArgs),
    /// Ask a yes/no question.
    Confirm(confirm::ConfirmArgs),
    /// Print the monotonic clock reading.
    Time(time::TimeArgs),
    /// Block for a number of seconds.
    Sleep(time::SleepArgs),
    /// Set the terminal pointer shape.
    Cursor(cursor::CursorArgs),
    /// Set the terminal window title.
    Title(title::TitleArgs),
    /// Write to the clipboard.
    Clipboard(clipboard::ClipboardArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the command
/// fails.
pub fn execute(cli: Cli) -> anyhow::Result<ExitCode> {
    let config_path = cli
        .config
        .unwrap_or_else(lume_common::constants::default_config_file);
    let config = LumeConfig::load(&config_path)?;
    tracing::debug!(path = %config_path.display(), "configuration loaded");

    match cli.command {
        Command::Events(args) => events::execute(args, &config),
        Command::Match(args) => fuzzy::execute(args),
        Command::Palette(args) => palette::execute(args, config),
        Command::Ls(args) => ls::execute(args),
        Command::Stat(args) => stat::execute(args),
        Command::Realpath(args) => realpath::execute(args),
        Command::Confirm(args) => confirm::execute(args),
        Command::Time(args) => time::execute_time(args),
        Command::Sleep(args) => time::execute_sleep(args),
        Command::Cursor(args) => cursor::execute(args),
        Command::Title(args) => title::execute(args),
        Command::Clipboard(args) => clipboard::execute(args),
    }
}

/// Reads non-empty stdin lines as candidates.
///
/// # Errors
///
/// Returns an error if stdin cannot be read.
pub fn read_candidates() -> anyhow::Result<Vec<String>> {
    let mut candidates = Vec::new();
    for line in std::io::stdin().lines() {
        let line = line?;
        if !line.is_empty() {
            candidates.push(line);
        }
    }
    Ok(candidates)
}
