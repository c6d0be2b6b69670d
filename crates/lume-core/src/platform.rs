//! Window and clipboard operations forwarded one-to-one to the platform.

use lume_common::error::Result;

/// Window-level calls the host can make directly.
pub trait WindowControl {
    /// Sets the window title.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform call fails.
    fn set_title(&mut self, title: &str) -> Result<()>;

    /// Returns whether the window currently has input focus.
    fn has_focus(&self) -> bool;

    /// Places the IME candidate window at the given caret position.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform call fails.
    fn set_text_input_rect(&mut self, x: i32, y: i32) -> Result<()>;
}

/// System clipboard text access.
pub trait Clipboard {
    /// Returns the clipboard text, or `None` if it is empty or unavailable.
    fn get(&mut self) -> Option<String>;

    /// Replaces the clipboard text.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform call fails.
    fn set(&mut self, text: &str) -> Result<()>;
}
