//! The item abstraction shared by both namespaces.
//!
//! Documents and contacts are structurally analogous: an opaque id, exactly
//! one owning folder, a creation timestamp, a favorite flag, and searchable
//! text. [`StoredItem`] captures that shape once so the store, manager, and
//! query view are written a single time and instantiated per namespace.

use chrono::{DateTime, Utc};

use crate::folder::FolderId;

/// Opaque item identifier (UUID v4 string for new items).
pub type ItemId = String;

/// User-supplied fields for a new item, before the store assigns id,
/// creation timestamp, and favorite state.
pub trait ItemDraft {
    /// The folder the caller asked for, if any. The manager resolves this
    /// against the tree and falls back to the fallback folder.
    fn requested_folder(&self) -> Option<&FolderId>;
}

/// An entity owned by an [`crate::store::ItemStore`].
pub trait StoredItem: Clone {
    type Draft: ItemDraft;

    /// Materialize a draft into a full item.
    fn from_draft(
        id: ItemId,
        created_at: DateTime<Utc>,
        folder_id: FolderId,
        draft: Self::Draft,
    ) -> Self;

    fn id(&self) -> &ItemId;

    fn folder_id(&self) -> &FolderId;

    /// Reparent the item. Only the store's `reassign_folder` calls this.
    fn set_folder_id(&mut self, folder_id: FolderId);

    fn created_at(&self) -> DateTime<Utc>;

    fn is_favorite(&self) -> bool;

    fn set_favorite(&mut self, favorite: bool);

    /// The text the alphabetical sort compares (title or name).
    fn primary_text(&self) -> &str;

    /// Case-insensitive substring match over the item's searchable fields.
    /// `needle` is already lowercased by the caller.
    fn matches(&self, needle: &str) -> bool;
}
