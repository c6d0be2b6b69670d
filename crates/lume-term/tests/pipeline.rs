//! Terminal input through the full pipeline: crossterm events, terminal
//! source, translator, palette host.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::cell::Cell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use lume_common::config::PaletteConfig;
use lume_core::{EventTranslator, NormalizedEvent};
use lume_term::app::{App, Outcome};
use lume_term::source::{NativeReader, TerminalEventSource};
use lume_term::surface::TerminalSurface;

#[derive(Default)]
struct Scripted(VecDeque<Event>);

impl NativeReader for Scripted {
    fn next_event(&mut self) -> io::Result<Option<Event>> {
        Ok(self.0.pop_front())
    }
}

fn translator(
    events: Vec<Event>,
) -> EventTranslator<TerminalEventSource<Scripted>, TerminalSurface<Vec<u8>>> {
    let focus = Rc::new(Cell::new(true));
    let source = TerminalEventSource::new(
        Scripted(events.into()),
        Duration::from_millis(500),
        false,
        Rc::clone(&focus),
    );
    EventTranslator::new(source, TerminalSurface::new(Vec::new(), focus))
}

fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

#[test]
fn typed_letter_becomes_press_text_release() {
    let mut t = translator(vec![press(KeyCode::Char('q'), KeyModifiers::NONE)]);
    let events: Vec<_> = t.drain().collect();
    assert_eq!(
        events,
        vec![
            NormalizedEvent::KeyPressed { key: "q".into() },
            NormalizedEvent::TextInput { text: "q".into() },
            NormalizedEvent::KeyReleased { key: "q".into() },
        ]
    );
}

#[test]
fn control_chord_reports_modifier_names() {
    let mut t = translator(vec![press(KeyCode::Enter, KeyModifiers::CONTROL)]);
    let names: Vec<String> = t
        .drain()
        .map(|e| match e {
            NormalizedEvent::KeyPressed { key } => format!("+{key}"),
            NormalizedEvent::KeyReleased { key } => format!("-{key}"),
            other => other.name().to_string(),
        })
        .collect();
    assert_eq!(names, vec!["+left ctrl", "+return", "-return", "-left ctrl"]);
}

#[test]
fn focus_gain_discards_replayed_presses_already_queued() {
    let mut t = translator(vec![
        Event::FocusGained,
        press(KeyCode::Tab, KeyModifiers::ALT),
        Event::Resize(120, 30),
    ]);
    let events: Vec<_> = t.drain().collect();
    assert_eq!(
        events,
        vec![
            NormalizedEvent::KeyReleased { key: "tab".into() },
            NormalizedEvent::KeyReleased {
                key: "left alt".into()
            },
            NormalizedEvent::Resized {
                width: 120,
                height: 30
            },
        ]
    );
}

#[test]
fn left_drag_holds_capture_until_release() {
    let mouse = |kind, column, row| {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    };
    let mut t = translator(vec![
        mouse(MouseEventKind::Down(MouseButton::Left), 2, 2),
        mouse(MouseEventKind::Drag(MouseButton::Left), 5, 3),
        mouse(MouseEventKind::Up(MouseButton::Left), 40, 3),
    ]);
    assert!(matches!(
        t.poll(),
        Some(NormalizedEvent::MousePressed { click_count: 1, .. })
    ));
    assert!(t.surface().is_captured());
    assert_eq!(
        t.poll(),
        Some(NormalizedEvent::MouseMoved {
            x: 5,
            y: 3,
            dx: 3,
            dy: 1
        })
    );
    assert!(t.surface().is_captured());
    assert!(matches!(
        t.poll(),
        Some(NormalizedEvent::MouseReleased { x: 40, .. })
    ));
    assert!(!t.surface().is_captured());
}

#[test]
fn palette_session_from_keystrokes() {
    let mut t = translator(vec![
        press(KeyCode::Char('o'), KeyModifiers::NONE),
        press(KeyCode::Char('f'), KeyModifiers::NONE),
        press(KeyCode::Down, KeyModifiers::NONE),
        press(KeyCode::Enter, KeyModifiers::NONE),
    ]);
    let mut app = App::new(
        vec!["open file".into(), "of".into(), "close".into()],
        &PaletteConfig::default(),
    );
    for event in t.drain() {
        app.handle(&event);
    }
    assert_eq!(app.into_outcome(), Some(Outcome::Chosen("open file".into())));
}

#[test]
fn paste_is_committed_as_one_fragment() {
    let mut t = translator(vec![Event::Paste("hello world".into())]);
    assert_eq!(
        t.poll(),
        Some(NormalizedEvent::TextInput {
            text: "hello world".into()
        })
    );
    assert_eq!(t.poll(), None);
}
