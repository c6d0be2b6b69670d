//! Raw-mode terminal session with guaranteed restore.

use std::io::{Write, stderr};

use crossterm::event::{
    DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
    EnableFocusChange, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    supports_keyboard_enhancement,
};
use lume_common::config::LumeConfig;
use lume_common::error::{LumeError, Result};

/// Puts the terminal into raw input mode for the lifetime of the value.
///
/// Output goes to stderr so stdout stays free for results.
#[derive(Debug)]
pub struct TerminalSession {
    alternate_screen: bool,
    mouse: bool,
    enhanced_keyboard: bool,
}

impl TerminalSession {
    /// Enables raw mode, focus and paste reporting, optional mouse
    /// reporting, and key-release reporting where the terminal supports it.
    ///
    /// # Errors
    ///
    /// Returns `Platform` if the terminal cannot be configured.
    pub fn start(config: &LumeConfig, alternate_screen: bool) -> Result<Self> {
        let setup = |e: std::io::Error| LumeError::platform("terminal setup", e);
        enable_raw_mode().map_err(setup)?;

        let mut session = Self {
            alternate_screen,
            mouse: config.mouse,
            enhanced_keyboard: false,
        };
        let mut out = stderr();
        if alternate_screen {
            crossterm::queue!(out, EnterAlternateScreen).map_err(setup)?;
        }
        crossterm::queue!(out, EnableFocusChange, EnableBracketedPaste).map_err(setup)?;
        if config.mouse {
            crossterm::queue!(out, EnableMouseCapture).map_err(setup)?;
        }
        if supports_keyboard_enhancement().unwrap_or(false) {
            crossterm::queue!(
                out,
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                        | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
                )
            )
            .map_err(setup)?;
            session.enhanced_keyboard = true;
        }
        out.flush().map_err(setup)?;

        tracing::debug!(
            alternate_screen,
            mouse = config.mouse,
            enhanced_keyboard = session.enhanced_keyboard,
            "terminal session started"
        );
        Ok(session)
    }

    /// Returns whether the terminal reports key releases and modifier keys.
    pub const fn reports_releases(&self) -> bool {
        self.enhanced_keyboard
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = stderr();
        let mut restore = || -> std::io::Result<()> {
            if self.enhanced_keyboard {
                crossterm::queue!(out, PopKeyboardEnhancementFlags)?;
            }
            if self.mouse {
                crossterm::queue!(out, DisableMouseCapture)?;
            }
            crossterm::queue!(out, DisableBracketedPaste, DisableFocusChange)?;
            if self.alternate_screen {
                crossterm::queue!(out, LeaveAlternateScreen)?;
            }
            out.flush()?;
            disable_raw_mode()
        };
        if let Err(e) = restore() {
            tracing::warn!(error = %e, "failed to restore terminal");
        }
    }
}
