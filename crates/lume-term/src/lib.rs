//! # lume-term
//!
//! Terminal backend for the Lume event core, built on `crossterm`.
//!
//! - [`source::TerminalEventSource`] turns terminal input into raw native
//!   records for the translator.
//! - [`surface::TerminalSurface`] carries window, cursor, and clipboard
//!   side effects as escape sequences.
//! - [`session::TerminalSession`] owns raw mode and restores the terminal.
//! - [`app`] and [`ui`] form an interactive fuzzy palette drawn with
//!   `ratatui`, driven by [`palette::run_palette`].

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod app;
pub mod keys;
pub mod palette;
pub mod session;
pub mod source;
pub mod surface;
pub mod ui;

use std::cell::Cell;
use std::io::Write;
use std::rc::Rc;
use std::time::Duration;

use lume_common::config::LumeConfig;
use lume_common::error::{LumeError, Result};

use crate::source::{CrosstermReader, TerminalEventSource};
use crate::surface::TerminalSurface;

/// Focus state shared between the event source, which observes focus
/// changes, and the surface, which answers focus queries.
pub type FocusFlag = Rc<Cell<bool>>;

/// Builds a wired event source and surface pair over the live terminal.
pub fn backend<W: Write>(
    writer: W,
    config: &LumeConfig,
    reports_releases: bool,
) -> (TerminalEventSource<CrosstermReader>, TerminalSurface<W>) {
    let focus: FocusFlag = Rc::new(Cell::new(true));
    let source = TerminalEventSource::new(
        CrosstermReader,
        Duration::from_millis(config.double_click_ms),
        reports_releases,
        Rc::clone(&focus),
    );
    (source, TerminalSurface::new(writer, focus))
}

/// Blocks until terminal input is available or `timeout` elapses.
///
/// Hosts call this between ticks, never inside a drain.
///
/// # Errors
///
/// Returns `Platform` if the terminal cannot be polled.
pub fn wait_for_input(timeout: Duration) -> Result<bool> {
    crossterm::event::poll(timeout).map_err(|e| LumeError::platform("terminal poll", e))
}
