//! Terminal input as a native event queue.
//!
//! Terminals report less than a desktop window system. [`EventMapper`]
//! fills the gaps so hosts see the same vocabulary everywhere:
//!
//! - printable presses produce a key-down followed by committed text;
//! - modified presses are wrapped in modifier key-down/up records, and a
//!   key-up is synthesized when the terminal cannot report releases;
//! - click counts come from a press timer on the same cell and button;
//! - motion deltas come from the previous pointer position.

use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode, MouseButton,
    MouseEvent, MouseEventKind,
};
use lume_core::source::{EventSource, RawEvent, RawKind, WindowEvent};

use crate::FocusFlag;

type Raw = RawEvent<KeyCode>;

/// Non-blocking access to the terminal's input stream.
pub trait NativeReader {
    /// Returns the next available terminal event, or `None` if none is
    /// ready right now.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read.
    fn next_event(&mut self) -> io::Result<Option<Event>>;
}

/// Reads crossterm's global input queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermReader;

impl NativeReader for CrosstermReader {
    fn next_event(&mut self) -> io::Result<Option<Event>> {
        if crossterm::event::poll(Duration::ZERO)? {
            crossterm::event::read().map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Counts consecutive presses of the same button on the same cell.
#[derive(Debug, Clone)]
struct ClickTracker {
    window: Duration,
    last: Option<LastClick>,
}

#[derive(Debug, Clone, Copy)]
struct LastClick {
    button: u8,
    column: u16,
    row: u16,
    at: Instant,
    count: u8,
}

impl ClickTracker {
    const fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    fn press(&mut self, button: u8, column: u16, row: u16, now: Instant) -> u8 {
        let count = match self.last {
            Some(last)
                if last.button == button
                    && last.column == column
                    && last.row == row
                    && now.saturating_duration_since(last.at) <= self.window =>
            {
                last.count.saturating_add(1)
            }
            _ => 1,
        };
        self.last = Some(LastClick {
            button,
            column,
            row,
            at: now,
            count,
        });
        count
    }
}

/// Converts crossterm events into raw native records.
#[derive(Debug, Clone)]
pub struct EventMapper {
    clicks: ClickTracker,
    pointer: Option<(i32, i32)>,
    reports_releases: bool,
}

impl EventMapper {
    /// Creates a mapper.
    ///
    /// `reports_releases` is true when the terminal sends key-release and
    /// modifier-key events itself (keyboard enhancement active).
    pub const fn new(double_click: Duration, reports_releases: bool) -> Self {
        Self {
            clicks: ClickTracker::new(double_click),
            pointer: None,
            reports_releases,
        }
    }

    /// Appends the records for one terminal event to `out`.
    pub fn map(&mut self, event: Event, now: Instant, out: &mut VecDeque<Raw>) {
        match event {
            Event::Key(key) => self.map_key(key, out),
            Event::Mouse(mouse) => self.map_mouse(mouse, now, out),
            Event::Paste(text) => out.push_back(RawEvent::TextInput { text }),
            Event::Resize(columns, rows) => out.push_back(RawEvent::Window(WindowEvent::Resized {
                width: i32::from(columns),
                height: i32::from(rows),
            })),
            Event::FocusGained => out.push_back(RawEvent::Window(WindowEvent::FocusGained)),
            Event::FocusLost => out.push_back(RawEvent::Window(WindowEvent::FocusLost)),
        }
    }

    fn map_key(&self, key: KeyEvent, out: &mut VecDeque<Raw>) {
        let code = normalized_code(key.code);
        if self.reports_releases {
            match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    out.push_back(RawEvent::KeyDown { key: code });
                    push_text(key, out);
                }
                KeyEventKind::Release => out.push_back(RawEvent::KeyUp { key: code }),
            }
            return;
        }

        if key.kind == KeyEventKind::Release {
            return;
        }
        let modifiers = held_modifiers(key);
        for modifier in &modifiers {
            out.push_back(RawEvent::KeyDown {
                key: KeyCode::Modifier(*modifier),
            });
        }
        out.push_back(RawEvent::KeyDown { key: code });
        push_text(key, out);
        out.push_back(RawEvent::KeyUp { key: code });
        for modifier in modifiers.iter().rev() {
            out.push_back(RawEvent::KeyUp {
                key: KeyCode::Modifier(*modifier),
            });
        }
    }

    fn map_mouse(&mut self, mouse: MouseEvent, now: Instant, out: &mut VecDeque<Raw>) {
        let x = i32::from(mouse.column);
        let y = i32::from(mouse.row);
        match mouse.kind {
            MouseEventKind::Down(button) => {
                let button = native_button(button);
                let clicks = self.clicks.press(button, mouse.column, mouse.row, now);
                self.pointer = Some((x, y));
                out.push_back(RawEvent::MouseButtonDown {
                    button,
                    x,
                    y,
                    clicks,
                });
            }
            MouseEventKind::Up(button) => {
                self.pointer = Some((x, y));
                out.push_back(RawEvent::MouseButtonUp {
                    button: native_button(button),
                    x,
                    y,
                });
            }
            MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                let (xrel, yrel) = self.pointer.map_or((0, 0), |(px, py)| (x - px, y - py));
                self.pointer = Some((x, y));
                out.push_back(RawEvent::MouseMotion { x, y, xrel, yrel });
            }
            MouseEventKind::ScrollUp => out.push_back(RawEvent::MouseWheel { x: 0, y: 1 }),
            MouseEventKind::ScrollDown => out.push_back(RawEvent::MouseWheel { x: 0, y: -1 }),
            MouseEventKind::ScrollLeft => out.push_back(RawEvent::MouseWheel { x: -1, y: 0 }),
            MouseEventKind::ScrollRight => out.push_back(RawEvent::MouseWheel { x: 1, y: 0 }),
        }
    }
}

/// Letter keys share one symbol regardless of shift state.
fn normalized_code(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) if c.is_ascii_uppercase() => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Modifiers to wrap around a press. Shift on a character is already
/// expressed by the character itself.
fn held_modifiers(key: KeyEvent) -> Vec<ModifierKeyCode> {
    let mut held = Vec::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        held.push(ModifierKeyCode::LeftControl);
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        held.push(ModifierKeyCode::LeftAlt);
    }
    if key.modifiers.contains(KeyModifiers::SUPER) {
        held.push(ModifierKeyCode::LeftSuper);
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) && !matches!(key.code, KeyCode::Char(_)) {
        held.push(ModifierKeyCode::LeftShift);
    }
    held
}

/// Printable presses without a command modifier also commit text.
fn push_text(key: KeyEvent, out: &mut VecDeque<Raw>) {
    let command = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER;
    if let KeyCode::Char(c) = key.code {
        if !key.modifiers.intersects(command) {
            out.push_back(RawEvent::TextInput {
                text: c.to_string(),
            });
        }
    }
}

const fn native_button(button: MouseButton) -> u8 {
    match button {
        MouseButton::Left => 1,
        MouseButton::Middle => 2,
        MouseButton::Right => 3,
    }
}

/// Terminal input exposed through the [`EventSource`] interface.
#[derive(Debug)]
pub struct TerminalEventSource<R> {
    reader: R,
    mapper: EventMapper,
    pending: VecDeque<Raw>,
    focus: FocusFlag,
}

impl<R: NativeReader> TerminalEventSource<R> {
    /// Creates a source over a terminal reader.
    pub fn new(reader: R, double_click: Duration, reports_releases: bool, focus: FocusFlag) -> Self {
        Self {
            reader,
            mapper: EventMapper::new(double_click, reports_releases),
            pending: VecDeque::new(),
            focus,
        }
    }

    /// Reads one terminal event into the pending queue. Returns `false`
    /// when nothing is available or the terminal cannot be read.
    fn pump_one(&mut self) -> bool {
        match self.reader.next_event() {
            Ok(Some(event)) => {
                match event {
                    Event::FocusGained => self.focus.set(true),
                    Event::FocusLost => self.focus.set(false),
                    _ => {}
                }
                self.mapper.map(event, Instant::now(), &mut self.pending);
                true
            }
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "terminal read failed");
                false
            }
        }
    }
}

impl<R: NativeReader> EventSource for TerminalEventSource<R> {
    type Key = KeyCode;

    fn poll_raw(&mut self) -> Option<Raw> {
        while self.pending.is_empty() {
            if !self.pump_one() {
                return None;
            }
        }
        self.pending.pop_front()
    }

    fn flush(&mut self, kind: RawKind) {
        while self.pump_one() {}
        let before = self.pending.len();
        self.pending.retain(|e| e.kind() != kind);
        tracing::trace!(?kind, removed = before - self.pending.len(), "flushed pending events");
    }

    fn key_name(&self, key: &KeyCode) -> String {
        crate::keys::key_name(key)
    }
}
