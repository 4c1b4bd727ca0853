// Chunk: docs/chunks/document_model - Documents, tabs and the close/save flow
//!
//! The ordered set of open documents behind the tab bar.
//!
//! [`DocumentCollection`] owns one [`Tab`] per open document, in tab order,
//! plus the index of the active tab. It never becomes empty: it starts with
//! one untitled document and refuses to close the last one.
//!
//! Every document mutation goes through the collection so that title changes
//! reach the tab label. Documents report those changes as
//! [`DocumentEvent`]s; the collection applies each event to the matching tab
//! and queues it for the frontend, which drains the queue with
//! [`DocumentCollection::take_events`].

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::confirm_dialog::{ConfirmButton, ConfirmDialog};
use crate::dialogs::Dialogs;
use crate::document::{Document, DocumentId, UNTITLED};
use crate::editor_event::DocumentEvent;
use crate::error::Result;

// =============================================================================
// Tab
// =============================================================================

/// One entry in the tab bar: a document and the label currently displayed.
#[derive(Debug)]
pub struct Tab {
    /// Display label; kept equal to `document.title()`
    pub label: String,
    document: Document,
}

impl Tab {
    fn new(document: Document) -> Self {
        Self {
            label: document.title(),
            document,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

// =============================================================================
// Outcomes
// =============================================================================

/// Result of a save request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The document was written to this path
    Saved(PathBuf),
    /// The user cancelled the save dialog
    Cancelled,
    /// The write failed; the error has been shown to the user
    Failed,
}

/// Result of a close request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The tab was removed
    Closed,
    /// The user cancelled, or chose Save and the save did not happen
    Kept,
    /// The tab is the only one left and stays open
    LastDocument,
    /// There is no tab at that index
    NoSuchTab,
}

// =============================================================================
// DocumentCollection
// =============================================================================

#[derive(Debug)]
pub struct DocumentCollection {
    tabs: Vec<Tab>,
    /// Index of the active tab; always valid since `tabs` is never empty
    active_tab: usize,
    /// Counter for generating unique document IDs
    next_document_id: DocumentId,
    /// Extension (without dot) added to save-as names lacking it
    default_extension: String,
    /// Title changes not yet taken by the frontend
    pending_events: Vec<DocumentEvent>,
}

impl Default for DocumentCollection {
    fn default() -> Self {
        Self::new("txt")
    }
}

impl DocumentCollection {
    /// Creates a collection holding one empty untitled document.
    ///
    /// A leading dot on `default_extension` is ignored.
    pub fn new(default_extension: &str) -> Self {
        let mut collection = Self {
            tabs: Vec::new(),
            active_tab: 0,
            next_document_id: 0,
            default_extension: default_extension.trim_start_matches('.').to_string(),
            pending_events: Vec::new(),
        };
        collection.new_document();
        collection
    }

    fn gen_document_id(&mut self) -> DocumentId {
        let id = self.next_document_id;
        self.next_document_id += 1;
        id
    }

    // ==================== Accessors ====================

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_index(&self) -> usize {
        self.active_tab
    }

    pub fn document(&self, index: usize) -> Option<&Document> {
        self.tabs.get(index).map(Tab::document)
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.document(self.active_tab)
    }

    /// Index of the tab holding document `id`.
    pub fn index_of(&self, id: DocumentId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.document.id() == id)
    }

    // ==================== Events ====================

    /// Applies a document event to its tab label and queues it.
    fn notify(&mut self, event: DocumentEvent) {
        if let Some(index) = self.index_of(event.document_id()) {
            let DocumentEvent::TitleChanged { title, .. } = &event;
            self.tabs[index].label = title.clone();
        }
        self.pending_events.push(event);
    }

    fn notify_opt(&mut self, event: Option<DocumentEvent>) {
        if let Some(event) = event {
            self.notify(event);
        }
    }

    /// Drains the title changes that happened since the last call.
    pub fn take_events(&mut self) -> Vec<DocumentEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ==================== Creating ====================

    fn push_tab(&mut self, document: Document) -> DocumentId {
        let id = document.id();
        self.tabs.push(Tab::new(document));
        self.active_tab = self.tabs.len() - 1;
        id
    }

    /// Appends an empty document and makes it active.
    pub fn new_document(&mut self) -> DocumentId {
        let id = self.gen_document_id();
        self.push_tab(Document::new(id))
    }

    /// Opens `path` in a new active tab.
    ///
    /// On a read failure no tab is added and the error is returned for the
    /// caller to show.
    pub fn open_document(&mut self, path: &Path) -> Result<DocumentId> {
        let id = self.gen_document_id();
        let document = Document::open(id, path)?;
        info!(path = %path.display(), "opened document");
        Ok(self.push_tab(document))
    }

    // ==================== Editing ====================

    /// Runs `edit` on the document at `index`, routing any title change to
    /// its tab. Returns false if there is no such tab.
    pub fn edit_document<F>(&mut self, index: usize, edit: F) -> bool
    where
        F: FnOnce(&mut Document) -> Option<DocumentEvent>,
    {
        let Some(tab) = self.tabs.get_mut(index) else {
            return false;
        };
        let event = edit(&mut tab.document);
        self.notify_opt(event);
        true
    }

    /// Runs `edit` on the active document.
    pub fn edit_active<F>(&mut self, edit: F) -> bool
    where
        F: FnOnce(&mut Document) -> Option<DocumentEvent>,
    {
        self.edit_document(self.active_tab, edit)
    }

    // ==================== Saving ====================

    /// Saves the document at `index` to its own path, or asks for one if it
    /// has never been saved.
    pub fn save_document(&mut self, index: usize, dialogs: &mut dyn Dialogs) -> SaveOutcome {
        let Some(document) = self.document(index) else {
            return SaveOutcome::Cancelled;
        };
        match document.path().map(Path::to_path_buf) {
            Some(path) => self.write_document(index, path, dialogs),
            None => self.save_document_as(index, dialogs),
        }
    }

    /// Asks for a path and saves the document at `index` there.
    pub fn save_document_as(&mut self, index: usize, dialogs: &mut dyn Dialogs) -> SaveOutcome {
        let Some(document) = self.document(index) else {
            return SaveOutcome::Cancelled;
        };
        let suggested = match document.path() {
            Some(_) => document.file_name(),
            None => format!("{UNTITLED}.{}", self.default_extension),
        };
        match dialogs.pick_save_path(&suggested) {
            Some(path) => self.save_document_to(index, &path, dialogs),
            None => SaveOutcome::Cancelled,
        }
    }

    /// Saves the document at `index` to `path`, adding the default extension
    /// when the name lacks it.
    pub fn save_document_to(&mut self, index: usize, path: &Path, dialogs: &mut dyn Dialogs) -> SaveOutcome {
        let path = with_default_extension(path, &self.default_extension);
        self.write_document(index, path, dialogs)
    }

    fn write_document(&mut self, index: usize, path: PathBuf, dialogs: &mut dyn Dialogs) -> SaveOutcome {
        let Some(tab) = self.tabs.get_mut(index) else {
            return SaveOutcome::Cancelled;
        };
        match tab.document.save(&path) {
            Ok(event) => {
                info!(path = %path.display(), "saved document");
                self.notify(event);
                SaveOutcome::Saved(path)
            }
            Err(e) => {
                warn!("{e}");
                dialogs.show_error(e.dialog_title(), &e.to_string());
                SaveOutcome::Failed
            }
        }
    }

    // ==================== Closing ====================

    /// Asks what to do with unsaved changes in the document at `index`.
    ///
    /// Returns true when it is fine to drop the document: it was unmodified,
    /// the user chose Discard, or the user chose Save and the save succeeded.
    fn resolve_unsaved(&mut self, index: usize, dialogs: &mut dyn Dialogs) -> bool {
        let Some(document) = self.document(index) else {
            return false;
        };
        if !document.is_modified() {
            return true;
        }

        match dialogs.confirm(ConfirmDialog::unsaved_changes(&document.title())) {
            ConfirmButton::Save => {
                self.save_document(index, dialogs);
                self.document(index).is_some_and(|document| !document.is_modified())
            }
            ConfirmButton::Discard => true,
            ConfirmButton::Cancel => false,
        }
    }

    /// Closes the tab at `index`, prompting first if it has unsaved changes.
    ///
    /// The last remaining tab is never closed.
    pub fn close_document(&mut self, index: usize, dialogs: &mut dyn Dialogs) -> CloseOutcome {
        if index >= self.tabs.len() {
            return CloseOutcome::NoSuchTab;
        }
        if self.tabs.len() == 1 {
            return CloseOutcome::LastDocument;
        }
        if !self.resolve_unsaved(index, dialogs) {
            return CloseOutcome::Kept;
        }

        let removed = self.tabs.remove(index);
        info!(title = %removed.document.title(), "closed document");

        // Keep the active tab pointing at the same document where possible.
        if self.active_tab >= self.tabs.len() {
            self.active_tab = self.tabs.len() - 1;
        } else if self.active_tab > index {
            self.active_tab -= 1;
        }
        CloseOutcome::Closed
    }

    /// Closes the active tab.
    pub fn close_active_document(&mut self, dialogs: &mut dyn Dialogs) -> CloseOutcome {
        self.close_document(self.active_tab, dialogs)
    }

    /// Resolves unsaved changes in every tab before the application exits.
    ///
    /// Returns false as soon as the user cancels or a save does not happen;
    /// documents already saved or discarded by then stay that way.
    pub fn prepare_quit(&mut self, dialogs: &mut dyn Dialogs) -> bool {
        for index in 0..self.tabs.len() {
            if self.active_tab != index && self.tabs[index].document.is_modified() {
                self.active_tab = index;
            }
            if !self.resolve_unsaved(index, dialogs) {
                return false;
            }
        }
        true
    }

    // ==================== Switching ====================

    /// Makes the tab at `index` active. Returns false if out of range.
    pub fn switch_tab(&mut self, index: usize) -> bool {
        if index < self.tabs.len() {
            self.active_tab = index;
            true
        } else {
            false
        }
    }

    /// Cycles to the next tab, wrapping from last to first.
    pub fn next_tab(&mut self) {
        self.active_tab = (self.active_tab + 1) % self.tabs.len();
    }

    /// Cycles to the previous tab, wrapping from first to last.
    pub fn prev_tab(&mut self) {
        self.active_tab = if self.active_tab == 0 {
            self.tabs.len() - 1
        } else {
            self.active_tab - 1
        };
    }
}

/// Appends `.ext` to `path` unless its file name already ends with it
/// (compared case-insensitively). `notes` becomes `notes.txt`; `notes.md`
/// becomes `notes.md.txt`; `NOTES.TXT` is left alone. `ext` may be given
/// with or without its leading dot.
pub fn with_default_extension(path: &Path, ext: &str) -> PathBuf {
    let ext = ext.trim_start_matches('.');
    let suffix = format!(".{}", ext.to_lowercase());
    let has_suffix = path
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(&suffix))
        .unwrap_or(false);
    if has_suffix || ext.is_empty() {
        return path.to_path_buf();
    }
    let mut name = OsString::from(path.as_os_str());
    name.push(format!(".{ext}"));
    PathBuf::from(name)
}
