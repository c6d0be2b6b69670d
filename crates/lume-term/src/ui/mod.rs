//! Palette rendering.
//!
//! Layout: prompt line, ranked candidate list, status line.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::app::App;

/// Renders the palette.
pub fn render(frame: &mut Frame, app: &App) {
    let [prompt_area, list_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let prompt = Line::from(vec![
        Span::styled(app.prompt(), Style::new().bold()),
        Span::raw(app.query()),
    ]);
    let offset = u16::try_from(prompt.width()).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(prompt), prompt_area);
    let caret = prompt_area.x.saturating_add(offset);
    frame.set_cursor_position((caret.min(prompt_area.right().saturating_sub(1)), prompt_area.y));

    let items: Vec<ListItem> = app
        .matches()
        .iter()
        .map(|m| ListItem::new(app.candidate(*m)))
        .collect();
    let list = List::new(items).highlight_style(Style::new().reversed());
    let mut state = ListState::default().with_selected(Some(app.selected()));
    frame.render_stateful_widget(list, list_area, &mut state);

    let status = format!("{}/{}", app.matches().len(), app.candidate_count());
    frame.render_widget(Paragraph::new(status).dim(), status_area);
}
