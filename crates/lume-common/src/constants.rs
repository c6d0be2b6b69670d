//! System-wide constants and default paths.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Name of the per-user data directory under the home directory.
pub const DATA_DIR_NAME: &str = ".lume";

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Returns the data directory, preferring `$HOME/.lume`
/// (or `%USERPROFILE%\.lume`), falling back to `./.lume`.
fn resolve_data_dir() -> PathBuf {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_or_else(
            |_| PathBuf::from(DATA_DIR_NAME),
            |home| PathBuf::from(home).join(DATA_DIR_NAME),
        )
}

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Returns the resolved data directory for this session.
pub fn data_dir() -> &'static PathBuf {
    DATA_DIR.get_or_init(resolve_data_dir)
}

/// Returns the default configuration file path.
pub fn default_config_file() -> PathBuf {
    data_dir().join(CONFIG_FILE_NAME)
}

/// Maximum delay between two presses for them to count as one multi-click.
pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 500;

/// Default prompt shown by the palette.
pub const DEFAULT_PALETTE_PROMPT: &str = "> ";

/// Default number of ranked rows the palette keeps.
pub const DEFAULT_PALETTE_MAX_RESULTS: usize = 50;

/// Binary name for the CLI.
pub const BIN_NAME: &str = "lume";
