// Chunk: docs/chunks/document_model - Documents, tabs and the close/save flow
//!
//! A single open text document: its buffer, its file, and whether it has
//! unsaved changes.
//!
//! A document is "modified" from the first edit that changes its content
//! until the next successful save or load. Crossing either boundary changes
//! the document's title, and the mutator that crossed it returns a
//! [`DocumentEvent::TitleChanged`] so the owner can refresh the tab label.
//! Edits made while already modified return `None`.

use std::fs;
use std::path::{Path, PathBuf};

use notepad_buffer::TextBuffer;
use tracing::debug;

use crate::editor_event::DocumentEvent;
use crate::error::{NotepadError, Result};

/// Unique identifier for a document within a collection.
pub type DocumentId = u64;

/// Title shown for a document that has never been saved.
pub const UNTITLED: &str = "Untitled";

/// Suffix appended to the title while there are unsaved changes.
pub const MODIFIED_MARKER: &str = "*";

#[derive(Debug)]
pub struct Document {
    id: DocumentId,
    buffer: TextBuffer,
    path: Option<PathBuf>,
    modified: bool,
}

impl Document {
    /// Creates an empty, unmodified, path-less document.
    pub fn new(id: DocumentId) -> Self {
        Self {
            id,
            buffer: TextBuffer::new(),
            path: None,
            modified: false,
        }
    }

    /// Reads `path` as UTF-8 and returns a document loaded from it.
    ///
    /// Nothing is created when the read fails.
    pub fn open(id: DocumentId, path: &Path) -> Result<Self> {
        let content = read_text(path)?;
        let mut document = Self::new(id);
        document.load(&content, path.to_path_buf());
        Ok(document)
    }

    // ==================== Accessors ====================

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn content(&self) -> String {
        self.buffer.content()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Base file name, or "Untitled" for a document without a path.
    pub fn file_name(&self) -> String {
        self.path
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    /// The label shown on this document's tab: file name plus `*` if modified.
    pub fn title(&self) -> String {
        let name = self.file_name();
        if self.modified {
            format!("{name}{MODIFIED_MARKER}")
        } else {
            name
        }
    }

    fn title_changed(&self) -> DocumentEvent {
        let title = self.title();
        debug!(id = self.id, %title, "document title changed");
        DocumentEvent::TitleChanged { id: self.id, title }
    }

    // ==================== Load / Save ====================

    /// Replaces the buffer with `content` read from `path`.
    ///
    /// Sets the path, clears the modified flag and always reports the title.
    pub fn load(&mut self, content: &str, path: PathBuf) -> DocumentEvent {
        self.buffer = TextBuffer::from_str(content);
        self.path = Some(path);
        self.modified = false;
        self.title_changed()
    }

    /// Writes the content to `target` as UTF-8.
    ///
    /// On success the document adopts `target` as its path and becomes
    /// unmodified. On failure nothing about the document changes.
    pub fn save(&mut self, target: &Path) -> Result<DocumentEvent> {
        fs::write(target, self.buffer.content()).map_err(|source| NotepadError::Write {
            path: target.to_path_buf(),
            source,
        })?;
        self.path = Some(target.to_path_buf());
        self.modified = false;
        Ok(self.title_changed())
    }

    // ==================== Editing ====================

    /// Runs `edit` against the buffer and records the result.
    ///
    /// Returns the title-changed event only when this edit is the first
    /// content change since creation, load, or save.
    pub fn apply<F>(&mut self, edit: F) -> Option<DocumentEvent>
    where
        F: FnOnce(&mut TextBuffer),
    {
        let before = self.buffer.revision();
        edit(&mut self.buffer);
        if self.buffer.revision() == before || self.modified {
            return None;
        }
        self.modified = true;
        Some(self.title_changed())
    }

    /// Replaces the whole content with `new_content`.
    pub fn edit(&mut self, new_content: &str) -> Option<DocumentEvent> {
        self.apply(|buffer| {
            buffer.replace_content(new_content);
        })
    }

    pub fn insert_str(&mut self, text: &str) -> Option<DocumentEvent> {
        self.apply(|buffer| {
            buffer.insert_str(text);
        })
    }

    pub fn insert_char(&mut self, ch: char) -> Option<DocumentEvent> {
        self.apply(|buffer| buffer.insert_char(ch))
    }

    pub fn delete_backward(&mut self) -> Option<DocumentEvent> {
        self.apply(|buffer| {
            buffer.delete_backward();
        })
    }

    pub fn delete_forward(&mut self) -> Option<DocumentEvent> {
        self.apply(|buffer| {
            buffer.delete_forward();
        })
    }

    /// Appends `line` at the end of the document, starting a new line first
    /// if the document is non-empty and does not already end with one.
    pub fn append_line(&mut self, line: &str) -> Option<DocumentEvent> {
        self.apply(|buffer| {
            buffer.move_to_buffer_end();
            if !buffer.is_empty() && !buffer.content().ends_with('\n') {
                buffer.insert_char('\n');
            }
            buffer.insert_str(line);
        })
    }
}

/// Reads a whole file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| NotepadError::Read {
        path: path.to_path_buf(),
        source,
    })
}
