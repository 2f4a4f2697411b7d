//! Config file discovery, reading and writing.
//!
//! # File Formats
//!
//! Both JSON5 (`.json5`, with comments and trailing commas) and plain JSON
//! (`.json`) are read. Files are always written as pretty-printed JSON.
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Working directory: `./taskflow.json5` or `./taskflow.json`
//! 2. User: `~/.config/taskflow/config.json5` or `~/.config/taskflow/config.json`
//!
//! Task data lives under the user data directory, e.g.
//! `~/.local/share/taskflow/` on Linux.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Application directory name under the platform config and data dirs.
pub const APP_DIR: &str = "taskflow";

/// Config file names searched in the working directory, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["taskflow.json5", "taskflow.json"];

/// Config file names searched in the user config directory, in priority order.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Returns the first existing file among `names` inside `dir`.
fn first_existing(dir: &Path, names: &[&str]) -> Option<PathBuf> {
    names.iter().map(|name| dir.join(name)).find(|p| p.exists())
}

/// Finds the configuration file path.
///
/// Returns `Some(path)` for the first file found in the search order
/// described in the module docs, `None` if there is none.
///
/// # Examples
///
/// ```no_run
/// use taskflow_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    find_config_file_in(Path::new("."), dirs::config_dir().map(|d| d.join(APP_DIR)))
}

/// Searches `local_dir` first, then `user_dir` if given.
#[must_use]
pub fn find_config_file_in(local_dir: &Path, user_dir: Option<PathBuf>) -> Option<PathBuf> {
    first_existing(local_dir, LOCAL_FILE_NAMES)
        .or_else(|| user_dir.and_then(|dir| first_existing(&dir, USER_FILE_NAMES)))
}

/// Returns the application data directory.
///
/// This is typically `~/.local/share/taskflow/` on Linux and
/// `~/Library/Application Support/taskflow/` on macOS.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Reads and parses a configuration file (JSON5 or JSON).
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Examples
///
/// ```no_run
/// use taskflow_config::persistence::read_config_file;
/// use taskflow_config::Config;
///
/// # fn main() -> taskflow_config::Result<()> {
/// let config: Config = read_config_file("taskflow.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    // JSON5 parser handles both JSON5 and JSON
    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes a configuration to a file as pretty-printed JSON.
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written, or the
/// value cannot be serialized.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();
    let write_err = |e| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(write_err)
}
