//! `lume title` — Set the terminal window title.

use std::process::ExitCode;

use clap::Args;
use lume_core::platform::WindowControl;
use lume_term::surface::TerminalSurface;

/// Arguments for the `title` command.
#[derive(Args, Debug)]
pub struct TitleArgs {
    /// New window title.
    pub title: String,
}

/// Executes the `title` command.
///
/// # Errors
///
/// Returns an error if the terminal write fails.
pub fn execute(args: TitleArgs) -> anyhow::Result<ExitCode> {
    let mut surface = TerminalSurface::new(std::io::stderr(), Default::default());
    surface.set_title(&args.title)?;
    Ok(ExitCode::SUCCESS)
}
