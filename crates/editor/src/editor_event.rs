// Chunk: docs/chunks/title_events - Title-changed notifications
//! Events documents emit when their displayed title changes.
//!
//! Documents never hold a reference to their tab. Mutators return an
//! `Option<DocumentEvent>` instead, and the collection applies it to the
//! matching tab label and queues it for the frontend. The event carries the
//! document id rather than a tab index so it stays valid when tabs before it
//! are closed.

use crate::document::DocumentId;

/// A change in a document's display state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentEvent {
    /// The document's title (filename and modified marker) changed.
    TitleChanged { id: DocumentId, title: String },
}

impl DocumentEvent {
    /// The document this event is about.
    pub fn document_id(&self) -> DocumentId {
        match self {
            DocumentEvent::TitleChanged { id, .. } => *id,
        }
    }
}
