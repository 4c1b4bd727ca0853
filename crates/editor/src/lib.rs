// Chunk: docs/chunks/document_model - Documents, tabs and the close/save flow
//!
//! notepad: a tabbed plain-text editor core.
//!
//! The library holds everything except process setup: documents and their
//! titles, the tab collection with its save/close rules, the dialog
//! collaborators, shortcuts, and the console frontend the binary runs.

pub mod app;
pub mod collection;
pub mod config;
pub mod confirm_dialog;
pub mod console;
pub mod dialogs;
pub mod document;
pub mod editor_event;
pub mod error;
pub mod logging;
pub mod shortcuts;
pub mod tab_bar;
pub mod window_drag;

pub use app::{Flow, Notepad};
pub use collection::{CloseOutcome, DocumentCollection, SaveOutcome};
pub use config::Config;
pub use document::{Document, DocumentId};
pub use editor_event::DocumentEvent;
pub use error::{NotepadError, Result};

// Re-export the input types for frontends
pub use notepad_input as input;
