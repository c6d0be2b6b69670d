//! Palette application state.
//!
//! A host of the event core: consumes normalized events, keeps the query
//! and ranked candidate view, and records the user's final choice.

use lume_common::config::PaletteConfig;
use lume_common::types::MouseButton;
use lume_core::{NormalizedEvent, rank};

/// Rows above the candidate list (the prompt line).
pub const LIST_TOP: i32 = 1;

/// How the palette session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user picked a candidate.
    Chosen(String),
    /// The user dismissed the palette.
    Cancelled,
}

/// A candidate currently shown in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Index into the candidate list.
    pub index: usize,
    /// Fuzzy score for the current query.
    pub score: i64,
}

/// Root application state for the palette.
#[derive(Debug)]
pub struct App {
    prompt: String,
    max_results: usize,
    candidates: Vec<String>,
    query: String,
    matches: Vec<Match>,
    selected: usize,
    ctrl_held: bool,
    outcome: Option<Outcome>,
}

impl App {
    /// Creates the palette over a candidate list.
    #[must_use]
    pub fn new(candidates: Vec<String>, config: &PaletteConfig) -> Self {
        let mut app = Self {
            prompt: config.prompt.clone(),
            max_results: config.max_results,
            candidates,
            query: String::new(),
            matches: Vec::new(),
            selected: 0,
            ctrl_held: false,
            outcome: None,
        };
        app.refilter();
        app
    }

    /// Applies one host event.
    pub fn handle(&mut self, event: &NormalizedEvent) {
        if self.outcome.is_some() {
            return;
        }
        match event {
            NormalizedEvent::Quit => self.outcome = Some(Outcome::Cancelled),
            NormalizedEvent::KeyPressed { key } => self.key_pressed(key),
            NormalizedEvent::KeyReleased { key } => {
                if is_ctrl(key) {
                    self.ctrl_held = false;
                }
            }
            NormalizedEvent::TextInput { text } => {
                self.query.push_str(text);
                self.refilter();
            }
            NormalizedEvent::MouseWheel { delta_y } => {
                if *delta_y > 0 {
                    self.move_selection(-1);
                } else if *delta_y < 0 {
                    self.move_selection(1);
                }
            }
            NormalizedEvent::MousePressed {
                button: MouseButton::Left,
                y,
                click_count,
                ..
            } => self.click_row(*y, *click_count),
            _ => {}
        }
    }

    fn key_pressed(&mut self, key: &str) {
        if is_ctrl(key) {
            self.ctrl_held = true;
            return;
        }
        if self.ctrl_held {
            match key {
                "c" | "g" => self.outcome = Some(Outcome::Cancelled),
                "u" => {
                    self.query.clear();
                    self.refilter();
                }
                "n" => self.move_selection(1),
                "p" => self.move_selection(-1),
                _ => {}
            }
            return;
        }
        match key {
            "escape" => self.outcome = Some(Outcome::Cancelled),
            "return" | "keypad enter" => self.choose(),
            "up" => self.move_selection(-1),
            "down" | "tab" => self.move_selection(1),
            "pageup" => self.move_selection(-10),
            "pagedown" => self.move_selection(10),
            "backspace" => {
                if self.query.pop().is_some() {
                    self.refilter();
                }
            }
            _ => {}
        }
    }

    fn click_row(&mut self, y: i32, click_count: u8) {
        let Ok(row) = usize::try_from(y - LIST_TOP) else {
            return;
        };
        if row < self.matches.len() {
            self.selected = row;
            if click_count >= 2 {
                self.choose();
            }
        }
    }

    fn choose(&mut self) {
        if let Some(m) = self.matches.get(self.selected) {
            self.outcome = Some(Outcome::Chosen(self.candidates[m.index].clone()));
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.matches.is_empty() {
            return;
        }
        let last = self.matches.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    fn refilter(&mut self) {
        self.matches = rank(self.candidates.iter().map(String::as_str), &self.query)
            .into_iter()
            .take(self.max_results)
            .map(|r| Match {
                index: r.index,
                score: r.score,
            })
            .collect();
        self.selected = 0;
        tracing::trace!(query = %self.query, matches = self.matches.len(), "refiltered");
    }

    /// Returns the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the current query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the shown matches, best first.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Returns the candidate text for a match.
    pub fn candidate(&self, m: Match) -> &str {
        &self.candidates[m.index]
    }

    /// Returns the total number of candidates.
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Returns the selected row.
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Returns how the session ended, once it has.
    pub const fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Consumes the app and returns its outcome.
    pub fn into_outcome(self) -> Option<Outcome> {
        self.outcome
    }
}

fn is_ctrl(key: &str) -> bool {
    matches!(key, "left ctrl" | "right ctrl")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(candidates: &[&str]) -> App {
        App::new(
            candidates.iter().map(ToString::to_string).collect(),
            &PaletteConfig::default(),
        )
    }

    fn key(name: &str) -> NormalizedEvent {
        NormalizedEvent::KeyPressed { key: name.into() }
    }

    fn text(t: &str) -> NormalizedEvent {
        NormalizedEvent::TextInput { text: t.into() }
    }

    #[test]
    fn empty_query_shows_everything_shortest_first() {
        let a = app(&["core:open", "quit", "find"]);
        let shown: Vec<&str> = a.matches().iter().map(|m| a.candidate(*m)).collect();
        assert_eq!(shown, vec!["quit", "find", "core:open"]);
    }

    #[test]
    fn typing_filters_and_return_chooses_best() {
        let mut a = app(&["open file", "close window", "of"]);
        a.handle(&text("o"));
        a.handle(&text("f"));
        assert_eq!(a.query(), "of");
        a.handle(&key("return"));
        assert_eq!(a.outcome(), Some(&Outcome::Chosen("of".into())));
    }

    #[test]
    fn backspace_widens_the_filter() {
        let mut a = app(&["abc", "xyz"]);
        a.handle(&text("x"));
        assert_eq!(a.matches().len(), 1);
        a.handle(&key("backspace"));
        assert_eq!(a.matches().len(), 2);
    }

    #[test]
    fn arrows_move_within_bounds() {
        let mut a = app(&["a", "b", "c"]);
        a.handle(&key("up"));
        assert_eq!(a.selected(), 0);
        a.handle(&key("down"));
        a.handle(&key("down"));
        a.handle(&key("down"));
        assert_eq!(a.selected(), 2);
    }

    #[test]
    fn escape_cancels_and_later_events_are_ignored() {
        let mut a = app(&["a"]);
        a.handle(&key("escape"));
        a.handle(&key("return"));
        assert_eq!(a.into_outcome(), Some(Outcome::Cancelled));
    }

    #[test]
    fn ctrl_chords_do_not_type() {
        let mut a = app(&["a", "b"]);
        a.handle(&text("a"));
        a.handle(&key("left ctrl"));
        a.handle(&key("u"));
        assert_eq!(a.query(), "");
        a.handle(&key("n"));
        assert_eq!(a.selected(), 1);
        a.handle(&NormalizedEvent::KeyReleased {
            key: "left ctrl".into(),
        });
        a.handle(&key("c"));
        assert_eq!(a.outcome(), None);
    }

    #[test]
    fn double_click_on_row_chooses_it() {
        let mut a = app(&["aa", "bb"]);
        let press = |y, click_count| NormalizedEvent::MousePressed {
            button: MouseButton::Left,
            x: 3,
            y,
            click_count,
        };
        a.handle(&press(LIST_TOP + 1, 1));
        assert_eq!(a.selected(), 1);
        assert_eq!(a.outcome(), None);
        a.handle(&press(LIST_TOP + 1, 2));
        assert_eq!(a.outcome(), Some(&Outcome::Chosen("bb".into())));
    }

    #[test]
    fn wheel_scrolls_selection() {
        let mut a = app(&["a", "b"]);
        a.handle(&NormalizedEvent::MouseWheel { delta_y: -1 });
        assert_eq!(a.selected(), 1);
        a.handle(&NormalizedEvent::MouseWheel { delta_y: 1 });
        assert_eq!(a.selected(), 0);
    }

    #[test]
    fn results_are_capped() {
        let candidates: Vec<String> = (0..10).map(|i| format!("item {i}")).collect();
        let a = App::new(
            candidates,
            &PaletteConfig {
                prompt: ": ".into(),
                max_results: 3,
            },
        );
        assert_eq!(a.matches().len(), 3);
        assert_eq!(a.candidate_count(), 10);
    }
}
