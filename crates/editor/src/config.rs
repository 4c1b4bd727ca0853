// Chunk: docs/chunks/config_file - Config file
//!
//! User configuration.
//!
//! The config file is optional JSON. Every field has a default, so a missing
//! file, an empty object, or a file that only sets one field all work.
//!
//! ## File Location
//!
//! - Linux: `~/.config/notepad/config.json`
//! - macOS: `~/Library/Application Support/notepad/config.json`
//!
//! or whatever `--config` points at.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NotepadError, Result};

/// Application name used for the config directory.
const APP_NAME: &str = "notepad";

/// Config file name.
const CONFIG_FILENAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Extension (without the dot) appended to save-as names that lack it.
    pub default_extension: String,
    /// Use the platform's native dialogs where available (macOS).
    pub native_dialogs: bool,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_extension: "txt".to_string(),
            native_dialogs: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Loads the config from `path`, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(NotepadError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&contents).map_err(|source| NotepadError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads from `explicit` if given, else from the platform config path.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit.map(Path::to_path_buf).or_else(config_file_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }
}

/// Returns the path to the config file, if a config directory exists on
/// this platform.
pub fn config_file_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(APP_NAME).join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_extension, "txt");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "default_extension": "md" }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_extension, "md");
        assert!(config.native_dialogs);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Config::load_from(&path), Err(NotepadError::Config { .. })));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "theme": "dark" }"#).unwrap();
        assert!(matches!(Config::load_from(&path), Err(NotepadError::Config { .. })));
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, r#"{ "native_dialogs": false }"#).unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert!(!config.native_dialogs);
    }
}
