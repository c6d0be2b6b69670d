//! `lume confirm` — Ask a yes/no question.

use std::process::ExitCode;

use clap::Args;
use lume_core::dialog::{ConfirmDialog, TerminalDialog, detect_dialog};

/// Arguments for the `confirm` command.
#[derive(Args, Debug)]
pub struct ConfirmArgs {
    /// Dialog title.
    pub title: String,

    /// Question to ask.
    pub message: String,

    /// Always ask on the terminal instead of a desktop dialog.
    #[arg(long)]
    pub terminal: bool,
}

/// Executes the `confirm` command.
///
/// Exits with status 0 for yes and 1 for no.
///
/// # Errors
///
/// Returns an error if the dialog cannot be shown.
pub fn execute(args: ConfirmArgs) -> anyhow::Result<ExitCode> {
    let mut dialog: Box<dyn ConfirmDialog> = if args.terminal {
        Box::new(TerminalDialog::stdio())
    } else {
        detect_dialog()
    };
    let confirmed = dialog.confirm(&args.title, &args.message)?;
    tracing::debug!(confirmed, "dialog answered");
    Ok(if confirmed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
