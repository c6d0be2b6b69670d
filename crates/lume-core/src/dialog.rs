//! Yes/no confirmation dialogs.
//!
//! Each platform gets its own [`ConfirmDialog`] implementation;
//! [`detect_dialog`] picks one at startup.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::Command;

use lume_common::error::{LumeError, Result};

/// A modal yes/no question.
pub trait ConfirmDialog {
    /// Shows the question and returns `true` if the user answered yes.
    ///
    /// # Errors
    ///
    /// Returns an error if the dialog could not be shown.
    fn confirm(&mut self, title: &str, message: &str) -> Result<bool>;
}

/// Desktop dialog through the `zenity` helper.
#[derive(Debug, Clone)]
pub struct ZenityDialog {
    binary: PathBuf,
}

impl ZenityDialog {
    /// Finds `zenity` on `PATH`.
    pub fn locate() -> Option<Self> {
        which::which("zenity").ok().map(|binary| Self { binary })
    }
}

impl ConfirmDialog for ZenityDialog {
    fn confirm(&mut self, title: &str, message: &str) -> Result<bool> {
        let status = Command::new(&self.binary)
            .arg("--question")
            .arg(format!("--title={title}"))
            .arg(format!("--text={message}"))
            .status()
            .map_err(|e| LumeError::platform("confirm dialog", e))?;
        // zenity exits 0 for yes and 1 for no or close
        match status.code() {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            _ => Err(LumeError::platform("confirm dialog", status)),
        }
    }
}

/// macOS dialog through `osascript`.
#[derive(Debug, Clone)]
pub struct AppleScriptDialog {
    binary: PathBuf,
}

impl AppleScriptDialog {
    /// Finds `osascript` on `PATH`.
    pub fn locate() -> Option<Self> {
        which::which("osascript").ok().map(|binary| Self { binary })
    }
}

fn applescript_string(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

impl ConfirmDialog for AppleScriptDialog {
    fn confirm(&mut self, title: &str, message: &str) -> Result<bool> {
        let script = format!(
            "display dialog {} with title {} buttons {{\"No\", \"Yes\"}} \
             default button \"Yes\" cancel button \"No\" with icon caution",
            applescript_string(message),
            applescript_string(title),
        );
        let output = Command::new(&self.binary)
            .arg("-e")
            .arg(script)
            .output()
            .map_err(|e| LumeError::platform("confirm dialog", e))?;
        Ok(output.status.success()
            && String::from_utf8_lossy(&output.stdout).contains("button returned:Yes"))
    }
}

/// Text prompt over any reader/writer pair.
///
/// `y` or `yes` (any case) is a yes; anything else, including end of
/// input, is a no.
#[derive(Debug)]
pub struct TerminalDialog<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalDialog<R, W> {
    /// Creates a prompt reading answers from `input` and writing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl TerminalDialog<std::io::StdinLock<'static>, std::io::Stderr> {
    /// Prompts on stderr and reads the answer from stdin.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stderr())
    }
}

impl<R: BufRead, W: Write> ConfirmDialog for TerminalDialog<R, W> {
    fn confirm(&mut self, title: &str, message: &str) -> Result<bool> {
        write!(self.output, "{title}: {message} [y/N] ")
            .and_then(|()| self.output.flush())
            .map_err(|e| LumeError::platform("confirm dialog", e))?;

        let mut answer = String::new();
        let _ = self
            .input
            .read_line(&mut answer)
            .map_err(|e| LumeError::platform("confirm dialog", e))?;
        let answer = answer.trim();
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }
}

/// Picks the confirmation dialog for the current platform, falling back
/// to a terminal prompt when no desktop helper is available.
#[must_use]
pub fn detect_dialog() -> Box<dyn ConfirmDialog> {
    #[cfg(target_os = "macos")]
    if let Some(dialog) = AppleScriptDialog::locate() {
        return Box::new(dialog);
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    if let Some(dialog) = ZenityDialog::locate() {
        return Box::new(dialog);
    }
    tracing::warn!("no desktop dialog helper found, using terminal prompt");
    Box::new(TerminalDialog::stdio())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(answer: &str) -> (bool, String) {
        let mut output = Vec::new();
        let confirmed = TerminalDialog::new(answer.as_bytes(), &mut output)
            .confirm("Unsaved changes", "Quit anyway?")
            .expect("confirm");
        (confirmed, String::from_utf8(output).expect("utf8"))
    }

    #[test]
    fn terminal_prompt_shows_title_and_message() {
        let (_, prompt) = ask("n\n");
        assert_eq!(prompt, "Unsaved changes: Quit anyway? [y/N] ");
    }

    #[test]
    fn terminal_prompt_accepts_yes_variants() {
        assert!(ask("y\n").0);
        assert!(ask("YES\n").0);
        assert!(ask("  Yes  \n").0);
    }

    #[test]
    fn terminal_prompt_defaults_to_no() {
        assert!(!ask("\n").0);
        assert!(!ask("nope\n").0);
        assert!(!ask("").0);
    }

    #[test]
    fn applescript_strings_are_escaped() {
        assert_eq!(applescript_string(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(applescript_string(r"a\b"), r#""a\\b""#);
    }
}
