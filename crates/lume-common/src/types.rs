//! Domain primitive types used across the Lume workspace.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LumeError, Result};

/// A mouse button as observed by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Wheel or middle button.
    Middle,
    /// Secondary button.
    Right,
    /// Any other native button number.
    Unknown,
}

impl MouseButton {
    /// Maps a native button number (1 left, 2 middle, 3 right).
    #[must_use]
    pub const fn from_native(button: u8) -> Self {
        match button {
            1 => Self::Left,
            2 => Self::Middle,
            3 => Self::Right,
            _ => Self::Unknown,
        }
    }

    /// Returns the host-facing button name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Middle => "middle",
            Self::Right => "right",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of pointer shapes a host may select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorShape {
    /// Default arrow pointer.
    Arrow,
    /// Text-selection I-beam.
    Ibeam,
    /// Horizontal (west-east) resize.
    SizeH,
    /// Vertical (north-south) resize.
    SizeV,
    /// Pointing hand.
    Hand,
}

impl CursorShape {
    /// Every shape, in slot order.
    pub const ALL: [Self; 5] = [Self::Arrow, Self::Ibeam, Self::SizeH, Self::SizeV, Self::Hand];

    /// Returns the host-facing option name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Arrow => "arrow",
            Self::Ibeam => "ibeam",
            Self::SizeH => "sizeh",
            Self::SizeV => "sizev",
            Self::Hand => "hand",
        }
    }

    /// Returns the slot this shape occupies in a per-shape table.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Validates an optional host argument; an absent argument means `arrow`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOption` if the name is not one of the five shapes.
    pub fn from_option(name: Option<&str>) -> Result<Self> {
        name.map_or(Ok(Self::Arrow), str::parse)
    }
}

impl FromStr for CursorShape {
    type Err = LumeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.name() == s)
            .ok_or_else(|| LumeError::InvalidOption {
                argument: "cursor",
                value: s.to_string(),
                expected: Self::ALL.map(Self::name).join(", "),
            })
    }
}

impl fmt::Display for CursorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of filesystem entry reported by a stat probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Regular file.
    File,
    /// Directory.
    Dir,
    /// Anything else (socket, device, fifo, ...).
    Unknown,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Dir => write!(f, "dir"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Result of a file stat probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// Last modification time in seconds since the Unix epoch.
    pub modified: i64,
    /// Size in bytes.
    pub size: u64,
    /// Entry kind.
    #[serde(rename = "type")]
    pub kind: FileKind,
}
