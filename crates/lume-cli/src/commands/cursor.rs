//! `lume cursor` — Set the terminal pointer shape.

use std::process::ExitCode;

use clap::Args;
use lume_common::types::CursorShape;
use lume_core::cursor::CursorCache;
use lume_term::surface::TerminalSurface;

/// Arguments for the `cursor` command.
#[derive(Args, Debug)]
pub struct CursorArgs {
    /// One of: arrow, ibeam, sizeh, sizev, hand (default arrow).
    pub shape: Option<String>,
}

/// Executes the `cursor` command.
///
/// # Errors
///
/// Returns an error if the shape name is invalid or the terminal write fails.
pub fn execute(args: CursorArgs) -> anyhow::Result<ExitCode> {
    let shape = CursorShape::from_option(args.shape.as_deref())?;
    let surface = TerminalSurface::new(std::io::stderr(), Default::default());
    let mut cursors = CursorCache::new(surface);
    cursors.set_cursor(shape)?;
    Ok(ExitCode::SUCCESS)
}
