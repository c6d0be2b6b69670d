//! Normalized events handed to the host.
//!
//! Each variant carries a fixed payload. Hosts match on the variant, or
//! consume the JSON form whose `type` field holds [`NormalizedEvent::name`].

use lume_common::types::MouseButton;
use serde::Serialize;

/// A host-facing input or window event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NormalizedEvent {
    /// The application was asked to close.
    Quit,
    /// The window has a new logical size.
    Resized {
        /// New width.
        width: i32,
        /// New height.
        height: i32,
    },
    /// A file was dropped onto the window.
    FileDropped {
        /// Dropped file path.
        path: String,
    },
    /// A key went down.
    KeyPressed {
        /// Lowercased platform key name.
        key: String,
    },
    /// A key went up.
    KeyReleased {
        /// Lowercased platform key name.
        key: String,
    },
    /// Committed text input.
    TextInput {
        /// UTF-8 fragment.
        text: String,
    },
    /// IME composition state.
    TextEditing {
        /// Composition text.
        text: String,
        /// Caret start.
        cursor_start: i32,
        /// Selection length.
        cursor_len: i32,
    },
    /// A mouse button went down.
    MousePressed {
        /// Which button.
        button: MouseButton,
        /// Pointer x.
        x: i32,
        /// Pointer y.
        y: i32,
        /// Consecutive click count.
        click_count: u8,
    },
    /// A mouse button went up.
    MouseReleased {
        /// Which button.
        button: MouseButton,
        /// Pointer x.
        x: i32,
        /// Pointer y.
        y: i32,
    },
    /// The pointer moved.
    MouseMoved {
        /// Pointer x.
        x: i32,
        /// Pointer y.
        y: i32,
        /// Relative x motion.
        dx: i32,
        /// Relative y motion.
        dy: i32,
    },
    /// The wheel was scrolled vertically.
    MouseWheel {
        /// Vertical amount, positive away from the user.
        delta_y: i32,
    },
}

impl NormalizedEvent {
    /// Returns the event's tag.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Quit => "quit",
            Self::Resized { .. } => "resized",
            Self::FileDropped { .. } => "file_dropped",
            Self::KeyPressed { .. } => "key_pressed",
            Self::KeyReleased { .. } => "key_released",
            Self::TextInput { .. } => "text_input",
            Self::TextEditing { .. } => "text_editing",
            Self::MousePressed { .. } => "mouse_pressed",
            Self::MouseReleased { .. } => "mouse_released",
            Self::MouseMoved { .. } => "mouse_moved",
            Self::MouseWheel { .. } => "mouse_wheel",
        }
    }
}
