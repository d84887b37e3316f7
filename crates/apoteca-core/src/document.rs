//! Document items: files and links kept by the team.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::folder::FolderId;
use crate::item::{ItemDraft, ItemId, StoredItem};

/// What kind of artifact a document points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    Pdf,
    Word,
    Jpg,
    Link,
}

/// A stored document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: ItemId,
    pub title: String,
    pub kind: DocumentKind,
    pub folder_id: FolderId,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub notes: String,
    pub is_favorite: bool,
}

/// User-supplied fields for a new document.
#[derive(Debug, Clone, Default)]
pub struct DocumentDraft {
    pub title: String,
    pub kind: Option<DocumentKind>,
    pub folder_id: Option<FolderId>,
    pub url: String,
    pub notes: String,
}

impl Default for DocumentKind {
    fn default() -> Self {
        DocumentKind::Pdf
    }
}

impl ItemDraft for DocumentDraft {
    fn requested_folder(&self) -> Option<&FolderId> {
        self.folder_id.as_ref()
    }
}

impl StoredItem for Document {
    type Draft = DocumentDraft;

    fn from_draft(
        id: ItemId,
        created_at: DateTime<Utc>,
        folder_id: FolderId,
        draft: DocumentDraft,
    ) -> Self {
        Self {
            id,
            title: draft.title,
            kind: draft.kind.unwrap_or_default(),
            folder_id,
            url: draft.url,
            created_at,
            notes: draft.notes,
            is_favorite: false,
        }
    }

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn folder_id(&self) -> &FolderId {
        &self.folder_id
    }

    fn set_folder_id(&mut self, folder_id: FolderId) {
        self.folder_id = folder_id;
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    fn set_favorite(&mut self, favorite: bool) {
        self.is_favorite = favorite;
    }

    fn primary_text(&self) -> &str {
        &self.title
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.notes.to_lowercase().contains(needle)
    }
}
