// Chunk: docs/chunks/io_errors - Read/write failures surfaced to the user
//!
//! Error types for document and configuration I/O.
//!
//! Every failure here is reported to the user through
//! [`Dialogs::show_error`](crate::dialogs::Dialogs::show_error) and leaves the
//! in-memory state exactly as it was before the operation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by notepad operations.
#[derive(Debug, Error)]
pub enum NotepadError {
    /// A file could not be read: missing, not permitted, or not UTF-8.
    #[error("could not open {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file could not be written: not permitted, disk full, invalid path.
    #[error("could not save {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file exists but is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl NotepadError {
    /// Title for the error dialog.
    pub fn dialog_title(&self) -> &'static str {
        match self {
            NotepadError::Read { .. } => "Could not open file",
            NotepadError::Write { .. } => "Could not save file",
            NotepadError::Config { .. } => "Invalid configuration",
        }
    }
}

pub type Result<T, E = NotepadError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_message_names_the_file() {
        let err = NotepadError::Read {
            path: PathBuf::from("/missing/notes.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let message = err.to_string();
        assert!(message.contains("/missing/notes.txt"));
        assert!(message.contains("No such file"));
        assert_eq!(err.dialog_title(), "Could not open file");
    }

    #[test]
    fn test_write_error_keeps_source() {
        use std::error::Error as _;
        let err = NotepadError::Write {
            path: PathBuf::from("/ro/a.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert_eq!(err.dialog_title(), "Could not save file");
    }
}
