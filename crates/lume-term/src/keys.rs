//! Platform key-name table for terminal key codes.
//!
//! Names follow the desktop convention hosts already bind against
//! ("Return", "Escape", "Left Ctrl", letters uppercase). The translator
//! lowercases them.

use crossterm::event::{KeyCode, MediaKeyCode, ModifierKeyCode};

/// Returns the display name of a key.
pub fn key_name(code: &KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_uppercase().collect(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::Media(media) => media_name(*media).to_string(),
        KeyCode::Modifier(modifier) => modifier_name(*modifier).to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Enter => "Return".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::Null => String::new(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::CapsLock => "CapsLock".to_string(),
        KeyCode::ScrollLock => "ScrollLock".to_string(),
        KeyCode::NumLock => "Numlock".to_string(),
        KeyCode::PrintScreen => "PrintScreen".to_string(),
        KeyCode::Pause => "Pause".to_string(),
        KeyCode::Menu => "Menu".to_string(),
        KeyCode::KeypadBegin => "Keypad 5".to_string(),
    }
}

const fn media_name(media: MediaKeyCode) -> &'static str {
    match media {
        MediaKeyCode::Play | MediaKeyCode::Pause | MediaKeyCode::PlayPause => "AudioPlay",
        MediaKeyCode::Stop => "AudioStop",
        MediaKeyCode::Reverse | MediaKeyCode::Rewind => "AudioRewind",
        MediaKeyCode::FastForward => "AudioFastForward",
        MediaKeyCode::TrackNext => "AudioNext",
        MediaKeyCode::TrackPrevious => "AudioPrev",
        MediaKeyCode::Record => "AudioRecord",
        MediaKeyCode::LowerVolume => "VolumeDown",
        MediaKeyCode::RaiseVolume => "VolumeUp",
        MediaKeyCode::MuteVolume => "AudioMute",
    }
}

const fn modifier_name(modifier: ModifierKeyCode) -> &'static str {
    match modifier {
        ModifierKeyCode::LeftShift => "Left Shift",
        ModifierKeyCode::LeftControl => "Left Ctrl",
        ModifierKeyCode::LeftAlt => "Left Alt",
        ModifierKeyCode::LeftSuper => "Left GUI",
        ModifierKeyCode::LeftHyper => "Left Hyper",
        ModifierKeyCode::LeftMeta => "Left Meta",
        ModifierKeyCode::RightShift => "Right Shift",
        ModifierKeyCode::RightControl => "Right Ctrl",
        ModifierKeyCode::RightAlt => "Right Alt",
        ModifierKeyCode::RightSuper => "Right GUI",
        ModifierKeyCode::RightHyper => "Right Hyper",
        ModifierKeyCode::RightMeta => "Right Meta",
        ModifierKeyCode::IsoLevel3Shift => "AltGr",
        ModifierKeyCode::IsoLevel5Shift => "Level5 Shift",
    }
}
