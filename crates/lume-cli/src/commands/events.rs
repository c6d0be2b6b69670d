//! `lume events` — Stream normalized terminal events.

use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use clap::Args;
use lume_common::config::LumeConfig;
use lume_core::{EventTranslator, NormalizedEvent};
use lume_term::session::TerminalSession;

/// Arguments for the `events` command.
#[derive(Args, Debug)]
pub struct EventsArgs {
    /// Stop after this many events.
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,
}

/// Executes the `events` command.
///
/// Runs a raw-mode session and prints each normalized event as one JSON
/// line on stdout until a quit event, an escape key press, or the limit.
///
/// # Errors
///
/// Returns an error if the terminal cannot be configured or stdout fails.
pub fn execute(args: EventsArgs, config: &LumeConfig) -> anyhow::Result<ExitCode> {
    let session = TerminalSession::start(config, false)?;
    let (source, surface) = lume_term::backend(std::io::stderr(), config, session.reports_releases());
    let mut translator = EventTranslator::new(source, surface);
    let mut stdout = std::io::stdout().lock();
    let mut seen = 0u64;

    eprint!("press escape to stop\r\n");
    'ticks: loop {
        let _ = lume_term::wait_for_input(Duration::from_millis(100))?;
        for event in translator.drain() {
            write!(stdout, "{}\r\n", serde_json::to_string(&event)?)?;
            seen += 1;
            if is_stop(&event) || args.limit.is_some_and(|limit| seen >= limit) {
                break 'ticks;
            }
        }
        stdout.flush()?;
    }
    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn is_stop(event: &NormalizedEvent) -> bool {
    match event {
        NormalizedEvent::Quit => true,
        NormalizedEvent::KeyPressed { key } => key == "escape",
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::commands::{Cli, Command};

    #[test]
    fn limit_must_be_positive() {
        assert!(Cli::try_parse_from(["lume", "events", "--limit", "0"]).is_err());
    }

    #[test]
    fn limit_is_parsed() {
        let cli = Cli::try_parse_from(["lume", "events", "-l", "3"]).expect("parse");
        assert!(matches!(cli.command, Command::Events(args) if args.limit == Some(3)));
    }

    #[test]
    fn command_is_named_after_the_binary() {
        use clap::CommandFactory;
        assert_eq!(Cli::command().get_name(), lume_common::constants::BIN_NAME);
    }
}
