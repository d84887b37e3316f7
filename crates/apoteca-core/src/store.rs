//! In-memory item store for one namespace.

use std::collections::HashSet;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::folder::FolderId;
use crate::item::StoredItem;

/// Owns the items of one namespace. Newest items sit at the front, so the
/// stored order doubles as "newest first" and stable sorts keep it for ties.
pub struct ItemStore<T: StoredItem> {
    items: Vec<T>,
}

impl<T: StoredItem> ItemStore<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a store from seed items, given newest first.
    pub fn from_items(items: Vec<T>) -> Self {
        Self { items }
    }

    /// All items, newest first.
    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|i| i.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Materialize a draft: fresh id, `created_at = now`, favorite off.
    /// The caller (the namespace manager) has already resolved `folder_id`
    /// to a live folder.
    pub fn add(&mut self, folder_id: FolderId, draft: T::Draft) -> &T {
        let item = T::from_draft(Uuid::new_v4().to_string(), Utc::now(), folder_id, draft);
        self.items.insert(0, item);
        &self.items[0]
    }

    /// Delete by id. Deleting something already gone is not an error.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id() != id);
        let removed = self.items.len() < before;
        if !removed {
            debug!(item = id, "remove ignored, item not found");
        }
        removed
    }

    /// Full replace by id. An unknown id is silently ignored.
    pub fn update(&mut self, item: T) -> bool {
        match self.items.iter_mut().find(|i| i.id() == item.id()) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => {
                debug!(item = %item.id(), "update ignored, item not found");
                false
            }
        }
    }

    /// Flip the favorite flag. Returns the new state, or `None` for an
    /// unknown id.
    pub fn toggle_favorite(&mut self, id: &str) -> Option<bool> {
        let item = self.items.iter_mut().find(|i| i.id() == id)?;
        item.set_favorite(!item.is_favorite());
        Some(item.is_favorite())
    }

    /// The reparenting primitive: move every item whose folder is in
    /// `from` into `to`. Returns how many items moved.
    pub fn reassign_folder(&mut self, from: &HashSet<FolderId>, to: &FolderId) -> usize {
        let mut moved = 0;
        for item in &mut self.items {
            if from.contains(item.folder_id()) {
                item.set_folder_id(to.clone());
                moved += 1;
            }
        }
        moved
    }

    /// Items in one folder, stored order.
    pub fn in_folder(&self, folder_id: &str) -> Vec<&T> {
        self.items
            .iter()
            .filter(|i| i.folder_id() == folder_id)
            .collect()
    }

    /// How many items a folder holds directly.
    pub fn count_in_folder(&self, folder_id: &str) -> usize {
        self.items.iter().filter(|i| i.folder_id() == folder_id).count()
    }

    /// All favorited items, stored order.
    pub fn favorites(&self) -> Vec<&T> {
        self.items.iter().filter(|i| i.is_favorite()).collect()
    }
}

impl<T: StoredItem> Default for ItemStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
