//! Raw native event records and the collaborator traits the translator
//! pulls them through.
//!
//! The native queue is a process-global resource owned by the windowing
//! layer. Keeping it behind [`EventSource`] lets the translator run
//! against synthetic sequences in tests.

/// A window sub-event carried by [`RawEvent::Window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The window's logical size changed.
    Resized {
        /// New width.
        width: i32,
        /// New height.
        height: i32,
    },
    /// Part of the window was uncovered and must be repainted.
    Exposed,
    /// The window gained input focus.
    FocusGained,
    /// The window lost input focus.
    FocusLost,
    /// Any other native window notification.
    Other {
        /// Native sub-event code.
        code: u32,
    },
}

/// A raw event record as pulled from the native queue.
///
/// `K` is the backend's key symbol type; its name is looked up through
/// [`EventSource::key_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawEvent<K> {
    /// The user or the OS asked the application to close.
    Quit,
    /// A window notification.
    Window(WindowEvent),
    /// A file was dropped onto the window. The path is owned by the record,
    /// so moving it out releases the native allocation.
    DropFile {
        /// Dropped file path.
        path: String,
    },
    /// A key went down.
    KeyDown {
        /// Native key symbol.
        key: K,
    },
    /// A key went up.
    KeyUp {
        /// Native key symbol.
        key: K,
    },
    /// Committed text.
    TextInput {
        /// UTF-8 fragment.
        text: String,
    },
    /// In-progress IME composition.
    TextEditing {
        /// Composition text.
        text: String,
        /// Caret start within the composition.
        start: i32,
        /// Selection length within the composition.
        length: i32,
    },
    /// A mouse button went down.
    MouseButtonDown {
        /// Native button number (1 left, 2 middle, 3 right).
        button: u8,
        /// Pointer x.
        x: i32,
        /// Pointer y.
        y: i32,
        /// Consecutive click count.
        clicks: u8,
    },
    /// A mouse button went up.
    MouseButtonUp {
        /// Native button number.
        button: u8,
        /// Pointer x.
        x: i32,
        /// Pointer y.
        y: i32,
    },
    /// The pointer moved.
    MouseMotion {
        /// Pointer x.
        x: i32,
        /// Pointer y.
        y: i32,
        /// Relative x motion.
        xrel: i32,
        /// Relative y motion.
        yrel: i32,
    },
    /// The wheel was scrolled.
    MouseWheel {
        /// Horizontal amount.
        x: i32,
        /// Vertical amount, positive away from the user.
        y: i32,
    },
    /// A native event type this layer does not model.
    Unknown {
        /// Native event type code.
        code: u32,
    },
}

/// Discriminant of a [`RawEvent`], used to flush queued events by type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawKind {
    /// [`RawEvent::Quit`].
    Quit,
    /// [`RawEvent::Window`].
    Window,
    /// [`RawEvent::DropFile`].
    DropFile,
    /// [`RawEvent::KeyDown`].
    KeyDown,
    /// [`RawEvent::KeyUp`].
    KeyUp,
    /// [`RawEvent::TextInput`].
    TextInput,
    /// [`RawEvent::TextEditing`].
    TextEditing,
    /// [`RawEvent::MouseButtonDown`].
    MouseButtonDown,
    /// [`RawEvent::MouseButtonUp`].
    MouseButtonUp,
    /// [`RawEvent::MouseMotion`].
    MouseMotion,
    /// [`RawEvent::MouseWheel`].
    MouseWheel,
    /// [`RawEvent::Unknown`].
    Unknown,
}

impl<K> RawEvent<K> {
    /// Returns this record's type discriminant.
    #[must_use]
    pub const fn kind(&self) -> RawKind {
        match self {
            Self::Quit => RawKind::Quit,
            Self::Window(_) => RawKind::Window,
            Self::DropFile { .. } => RawKind::DropFile,
            Self::KeyDown { .. } => RawKind::KeyDown,
            Self::KeyUp { .. } => RawKind::KeyUp,
            Self::TextInput { .. } => RawKind::TextInput,
            Self::TextEditing { .. } => RawKind::TextEditing,
            Self::MouseButtonDown { .. } => RawKind::MouseButtonDown,
            Self::MouseButtonUp { .. } => RawKind::MouseButtonUp,
            Self::MouseMotion { .. } => RawKind::MouseMotion,
            Self::MouseWheel { .. } => RawKind::MouseWheel,
            Self::Unknown { .. } => RawKind::Unknown,
        }
    }
}

/// The native event queue.
pub trait EventSource {
    /// Native key symbol type.
    type Key;

    /// Pops the next queued event without blocking.
    fn poll_raw(&mut self) -> Option<RawEvent<Self::Key>>;

    /// Discards every queued event of the given kind.
    fn flush(&mut self, kind: RawKind);

    /// Looks up the platform's display name for a key symbol.
    fn key_name(&self, key: &Self::Key) -> String;
}

/// The windowing surface side effects the translator may trigger.
pub trait WindowSurface {
    /// Enables or disables deferred-up mouse tracking, so that a release
    /// outside the window is still reported.
    fn set_mouse_capture(&mut self, enabled: bool);

    /// Presents the existing back buffer again.
    fn redraw(&mut self);
}

impl<S: EventSource + ?Sized> EventSource for &mut S {
    type Key = S::Key;

    fn poll_raw(&mut self) -> Option<RawEvent<Self::Key>> {
        (**self).poll_raw()
    }

    fn flush(&mut self, kind: RawKind) {
        (**self).flush(kind);
    }

    fn key_name(&self, key: &Self::Key) -> String {
        (**self).key_name(key)
    }
}

impl<W: WindowSurface + ?Sized> WindowSurface for &mut W {
    fn set_mouse_capture(&mut self, enabled: bool) {
        (**self).set_mouse_capture(enabled);
    }

    fn redraw(&mut self) {
        (**self).redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let down: RawEvent<char> = RawEvent::KeyDown { key: 'a' };
        let up: RawEvent<char> = RawEvent::KeyUp { key: 'a' };
        assert_eq!(down.kind(), RawKind::KeyDown);
        assert_eq!(up.kind(), RawKind::KeyUp);
        assert_eq!(
            RawEvent::<char>::Window(WindowEvent::Exposed).kind(),
            RawKind::Window
        );
        assert_eq!(RawEvent::<char>::Unknown { code: 7 }.kind(), RawKind::Unknown);
    }
}
