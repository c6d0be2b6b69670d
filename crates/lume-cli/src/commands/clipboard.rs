//! `lume clipboard` — Write text to the clipboard.

use std::io::Read;
use std::process::ExitCode;

use clap::Args;
use lume_core::platform::Clipboard;
use lume_term::surface::TerminalSurface;

/// Arguments for the `clipboard` command.
#[derive(Args, Debug)]
pub struct ClipboardArgs {
    /// Text to copy; read from stdin when omitted.
    #[arg(long)]
    pub set: Option<String>,
}

/// Executes the `clipboard` command.
///
/// # Errors
///
/// Returns an error if stdin cannot be read or the terminal write fails.
pub fn execute(args: ClipboardArgs) -> anyhow::Result<ExitCode> {
    let text = match args.set {
        Some(text) => text,
        None => {
            let mut text = String::new();
            let _ = std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    let mut surface = TerminalSurface::new(std::io::stderr(), Default::default());
    surface.set(&text)?;
    tracing::debug!(bytes = text.len(), "clipboard written");
    Ok(ExitCode::SUCCESS)
}
