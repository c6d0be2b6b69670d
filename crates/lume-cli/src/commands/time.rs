//! `lume time` and `lume sleep` — Clock reads and blocking sleep.

use std::process::ExitCode;

use clap::Args;
use lume_core::clock::{Clock, sleep};

/// Arguments for the `time` command.
#[derive(Args, Debug)]
pub struct TimeArgs {
    /// Measure how long reading the clock twice takes.
    #[arg(long)]
    pub resolution: bool,
}

/// Arguments for the `sleep` command.
#[derive(Args, Debug)]
pub struct SleepArgs {
    /// Seconds to block (fractions allowed; negative sleeps zero).
    #[arg(allow_negative_numbers = true)]
    pub seconds: f64,
}

/// Executes the `time` command.
///
/// # Errors
///
/// This command does not fail.
pub fn execute_time(args: TimeArgs) -> anyhow::Result<ExitCode> {
    let clock = Clock::start();
    let first = clock.now();
    if args.resolution {
        let second = clock.now();
        println!("{:.9}", second - first);
    } else {
        println!("{first:.9}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes the `sleep` command.
///
/// # Errors
///
/// This command does not fail.
pub fn execute_sleep(args: SleepArgs) -> anyhow::Result<ExitCode> {
    sleep(args.seconds);
    Ok(ExitCode::SUCCESS)
}
