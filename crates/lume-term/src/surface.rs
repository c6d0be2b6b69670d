//! Terminal-side effects: presenting output, window title, caret
//! placement, pointer shape, and clipboard.
//!
//! Pointer shapes use the xterm OSC 22 names and clipboard writes use
//! OSC 52. Terminals do not answer clipboard reads reliably, so reads
//! return the last text this process wrote.

use std::io::Write;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use crossterm::cursor::MoveTo;
use crossterm::terminal::SetTitle;
use lume_common::error::{LumeError, Result};
use lume_common::types::CursorShape;
use lume_core::cursor::CursorBackend;
use lume_core::platform::{Clipboard, WindowControl};
use lume_core::source::WindowSurface;

use crate::FocusFlag;

/// Returns the xterm pointer-shape name for a cursor shape.
pub const fn pointer_name(shape: CursorShape) -> &'static str {
    match shape {
        CursorShape::Arrow => "default",
        CursorShape::Ibeam => "text",
        CursorShape::SizeH => "ew-resize",
        CursorShape::SizeV => "ns-resize",
        CursorShape::Hand => "pointer",
    }
}

/// The terminal as a window surface.
#[derive(Debug)]
pub struct TerminalSurface<W> {
    writer: W,
    focus: FocusFlag,
    captured: bool,
    clipboard: Option<String>,
}

impl<W: Write> TerminalSurface<W> {
    /// Creates a surface writing escape sequences to `writer`.
    pub const fn new(writer: W, focus: FocusFlag) -> Self {
        Self {
            writer,
            focus,
            captured: false,
            clipboard: None,
        }
    }

    /// Returns whether deferred-up mouse tracking is active.
    pub const fn is_captured(&self) -> bool {
        self.captured
    }

    /// Returns the underlying writer.
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    fn emit(&mut self, operation: &'static str, sequence: &str) -> Result<()> {
        self.writer
            .write_all(sequence.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|e| LumeError::platform(operation, e))
    }
}

impl<W: Write> WindowSurface for TerminalSurface<W> {
    /// Terminals with button-event tracking keep reporting a held button
    /// until it is released, so capture only needs to be tracked.
    fn set_mouse_capture(&mut self, enabled: bool) {
        self.captured = enabled;
    }

    fn redraw(&mut self) {
        if let Err(e) = self.writer.flush() {
            tracing::warn!(error = %e, "terminal redraw failed");
        }
    }
}

impl<W: Write> WindowControl for TerminalSurface<W> {
    fn set_title(&mut self, title: &str) -> Result<()> {
        crossterm::execute!(self.writer, SetTitle(title))
            .map_err(|e| LumeError::platform("set window title", e))
    }

    fn has_focus(&self) -> bool {
        self.focus.get()
    }

    fn set_text_input_rect(&mut self, x: i32, y: i32) -> Result<()> {
        let column = u16::try_from(x.max(0)).unwrap_or(u16::MAX);
        let row = u16::try_from(y.max(0)).unwrap_or(u16::MAX);
        crossterm::execute!(self.writer, MoveTo(column, row))
            .map_err(|e| LumeError::platform("set text input position", e))
    }
}

impl<W: Write> CursorBackend for TerminalSurface<W> {
    type Handle = &'static str;

    fn create(&mut self, shape: CursorShape) -> Result<Self::Handle> {
        Ok(pointer_name(shape))
    }

    fn activate(&mut self, handle: &Self::Handle) -> Result<()> {
        self.emit("set cursor", &format!("\x1b]22;{handle}\x1b\\"))
    }
}

impl<W: Write> Clipboard for TerminalSurface<W> {
    fn get(&mut self) -> Option<String> {
        self.clipboard.clone()
    }

    fn set(&mut self, text: &str) -> Result<()> {
        let encoded = STANDARD.encode(text);
        self.emit("set clipboard", &format!("\x1b]52;c;{encoded}\x07"))?;
        self.clipboard = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use lume_core::cursor::CursorCache;

    use super::*;

    fn surface() -> TerminalSurface<Vec<u8>> {
        TerminalSurface::new(Vec::new(), Rc::new(Cell::new(true)))
    }

    fn written(surface: &TerminalSurface<Vec<u8>>) -> String {
        String::from_utf8_lossy(surface.writer()).into_owned()
    }

    #[test]
    fn clipboard_writes_osc52_and_reads_back() {
        let mut s = surface();
        assert_eq!(s.get(), None);
        s.set("hi").expect("set");
        assert_eq!(written(&s), "\x1b]52;c;aGk=\x07");
        assert_eq!(s.get().as_deref(), Some("hi"));
    }

    #[test]
    fn cursor_cache_emits_pointer_shape() {
        let mut cache = CursorCache::new(surface());
        cache.set_cursor(CursorShape::Ibeam).expect("ibeam");
        assert_eq!(written(cache.backend()), "\x1b]22;text\x1b\\");
    }

    #[test]
    fn capture_is_tracked() {
        let mut s = surface();
        s.set_mouse_capture(true);
        assert!(s.is_captured());
        s.set_mouse_capture(false);
        assert!(!s.is_captured());
    }

    #[test]
    fn focus_reflects_shared_flag() {
        let focus = Rc::new(Cell::new(true));
        let s = TerminalSurface::new(Vec::new(), Rc::clone(&focus));
        assert!(s.has_focus());
        focus.set(false);
        assert!(!s.has_focus());
    }

    #[test]
    fn title_is_written() {
        let mut s = surface();
        s.set_title("lume").expect("title");
        assert!(written(&s).contains("lume"));
    }
}
