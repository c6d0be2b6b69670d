//! Interactive palette loop.

use std::io::stderr;
use std::time::Duration;

use lume_common::config::LumeConfig;
use lume_common::error::{LumeError, Result};
use lume_core::EventTranslator;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::app::{App, Outcome};
use crate::session::TerminalSession;

/// Idle wait between ticks when no input is pending.
const TICK: Duration = Duration::from_millis(250);

/// Runs the palette over `candidates` and returns the chosen one, or
/// `None` if the user cancelled.
///
/// # Errors
///
/// Returns `Platform` if the terminal cannot be set up or drawn.
pub fn run_palette(candidates: Vec<String>, config: &LumeConfig) -> Result<Option<String>> {
    let session = TerminalSession::start(config, true)?;
    let draw = |e: std::io::Error| LumeError::platform("draw palette", e);
    let mut terminal = Terminal::new(CrosstermBackend::new(stderr())).map_err(draw)?;
    let (source, surface) = crate::backend(stderr(), config, session.reports_releases());
    let mut translator = EventTranslator::new(source, surface);
    let mut app = App::new(candidates, &config.palette);

    tracing::debug!(candidates = app.candidate_count(), "palette started");
    while app.outcome().is_none() {
        let _ = terminal.draw(|frame| crate::ui::render(frame, &app)).map_err(draw)?;
        let _ = crate::wait_for_input(TICK)?;
        for event in translator.drain() {
            app.handle(&event);
        }
    }
    drop(terminal);
    drop(session);

    Ok(match app.into_outcome() {
        Some(Outcome::Chosen(choice)) => Some(choice),
        Some(Outcome::Cancelled) | None => None,
    })
}
