//! Native event normalization.
//!
//! [`EventTranslator::poll`] pulls raw records until it finds one the host
//! should see, applying the window-level side effects along the way.
//! Swallowed records never produce an event:
//!
//! - `Exposed` repaints the back buffer.
//! - `FocusGained` discards queued key presses. Some platforms replay the
//!   key used to switch windows (alt-tab) as a burst of key-downs.
//! - Other window notifications and unknown native types are dropped.

use lume_common::types::MouseButton;

use crate::event::NormalizedEvent;
use crate::source::{EventSource, RawEvent, RawKind, WindowEvent, WindowSurface};

/// Left button number in native numbering.
const NATIVE_LEFT_BUTTON: u8 = 1;

/// Turns a native event queue into [`NormalizedEvent`]s.
#[derive(Debug)]
pub struct EventTranslator<S, W> {
    source: S,
    surface: W,
}

impl<S: EventSource, W: WindowSurface> EventTranslator<S, W> {
    /// Creates a translator over a native queue and its window surface.
    pub const fn new(source: S, surface: W) -> Self {
        Self { source, surface }
    }

    /// Returns the next host-visible event, or `None` once the queue is
    /// empty for this tick. Never blocks.
    pub fn poll(&mut self) -> Option<NormalizedEvent> {
        loop {
            let raw = self.source.poll_raw()?;
            if let Some(event) = self.translate(raw) {
                tracing::trace!(event = event.name(), "normalized event");
                return Some(event);
            }
        }
    }

    /// Iterates over every event currently queued.
    pub fn drain(&mut self) -> Drain<'_, S, W> {
        Drain { translator: self }
    }

    /// Returns the native queue.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the native queue mutably.
    pub const fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Returns the window surface.
    pub const fn surface(&self) -> &W {
        &self.surface
    }

    /// Returns the window surface mutably.
    pub const fn surface_mut(&mut self) -> &mut W {
        &mut self.surface
    }

    /// Splits the translator back into its collaborators.
    pub fn into_parts(self) -> (S, W) {
        (self.source, self.surface)
    }

    fn translate(&mut self, raw: RawEvent<S::Key>) -> Option<NormalizedEvent> {
        match raw {
            RawEvent::Quit => Some(NormalizedEvent::Quit),
            RawEvent::Window(window) => self.window_event(window),
            RawEvent::DropFile { path } => Some(NormalizedEvent::FileDropped { path }),
            RawEvent::KeyDown { key } => Some(NormalizedEvent::KeyPressed {
                key: self.normalized_key_name(&key),
            }),
            RawEvent::KeyUp { key } => Some(NormalizedEvent::KeyReleased {
                key: self.normalized_key_name(&key),
            }),
            RawEvent::TextInput { text } => Some(NormalizedEvent::TextInput { text }),
            RawEvent::TextEditing {
                text,
                start,
                length,
            } => Some(NormalizedEvent::TextEditing {
                text,
                cursor_start: start,
                cursor_len: length,
            }),
            RawEvent::MouseButtonDown {
                button,
                x,
                y,
                clicks,
            } => {
                if button == NATIVE_LEFT_BUTTON {
                    tracing::debug!("left button down, enabling mouse capture");
                    self.surface.set_mouse_capture(true);
                }
                Some(NormalizedEvent::MousePressed {
                    button: MouseButton::from_native(button),
                    x,
                    y,
                    click_count: clicks,
                })
            }
            RawEvent::MouseButtonUp { button, x, y } => {
                if button == NATIVE_LEFT_BUTTON {
                    tracing::debug!("left button up, disabling mouse capture");
                    self.surface.set_mouse_capture(false);
                }
                Some(NormalizedEvent::MouseReleased {
                    button: MouseButton::from_native(button),
                    x,
                    y,
                })
            }
            RawEvent::MouseMotion { x, y, xrel, yrel } => Some(NormalizedEvent::MouseMoved {
                x,
                y,
                dx: xrel,
                dy: yrel,
            }),
            RawEvent::MouseWheel { y, .. } => Some(NormalizedEvent::MouseWheel { delta_y: y }),
            RawEvent::Unknown { code } => {
                tracing::trace!(code, "discarding unknown native event");
                None
            }
        }
    }

    fn window_event(&mut self, window: WindowEvent) -> Option<NormalizedEvent> {
        match window {
            WindowEvent::Resized { width, height } => {
                Some(NormalizedEvent::Resized { width, height })
            }
            WindowEvent::Exposed => {
                tracing::trace!("window exposed, redrawing");
                self.surface.redraw();
                None
            }
            WindowEvent::FocusGained => {
                tracing::debug!("focus gained, flushing queued key presses");
                self.source.flush(RawKind::KeyDown);
                None
            }
            WindowEvent::FocusLost | WindowEvent::Other { .. } => {
                tracing::trace!(?window, "discarding window event");
                None
            }
        }
    }

    fn normalized_key_name(&self, key: &S::Key) -> String {
        self.source.key_name(key).to_lowercase()
    }
}

/// Iterator returned by [`EventTranslator::drain`].
#[derive(Debug)]
pub struct Drain<'a, S, W> {
    translator: &'a mut EventTranslator<S, W>,
}

impl<S: EventSource, W: WindowSurface> Iterator for Drain<'_, S, W> {
    type Item = NormalizedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        self.translator.poll()
    }
}
