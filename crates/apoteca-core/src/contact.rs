//! Contact items: the practitioners, pharmacies, and suppliers the team calls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::folder::FolderId;
use crate::item::{ItemDraft, ItemId, StoredItem};

/// A stored contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ItemId,
    pub name: String,
    /// Professional function, e.g. "Huisarts" or "Cardioloog".
    pub function: String,
    pub folder_id: FolderId,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub is_favorite: bool,
}

/// User-supplied fields for a new contact.
#[derive(Debug, Clone, Default)]
pub struct ContactDraft {
    pub name: String,
    pub function: String,
    pub folder_id: Option<FolderId>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub notes: String,
}

impl ItemDraft for ContactDraft {
    fn requested_folder(&self) -> Option<&FolderId> {
        self.folder_id.as_ref()
    }
}

impl StoredItem for Contact {
    type Draft = ContactDraft;

    fn from_draft(
        id: ItemId,
        created_at: DateTime<Utc>,
        folder_id: FolderId,
        draft: ContactDraft,
    ) -> Self {
        Self {
            id,
            name: draft.name,
            function: draft.function,
            folder_id,
            phone: draft.phone,
            email: draft.email,
            address: draft.address,
            notes: draft.notes,
            created_at,
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
        &self.name
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.notes.to_lowercase().contains(needle)
            || self.function.to_lowercase().contains(needle)
    }
}
