//! The hierarchy manager: one folder tree plus its item store.

use tracing::debug;

use crate::error::Result;
use crate::folder::{Folder, FolderId};
use crate::item::{ItemDraft, StoredItem};
use crate::store::ItemStore;
use crate::tree::FolderTree;

/// What a folder deletion did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FolderRemoval {
    /// Folders removed (the target plus its descendants).
    pub removed_folders: usize,
    /// Items moved to the fallback folder.
    pub reparented_items: usize,
}

/// One namespace: the sole mutator of its folder tree and item store.
///
/// Sequencing lives here so the invariants hold at every externally
/// observable point — in particular, items are reparented *before* their
/// folders disappear, so an item's `folder_id` always resolves.
pub struct Namespace<T: StoredItem> {
    tree: FolderTree,
    store: ItemStore<T>,
}

impl<T: StoredItem> Namespace<T> {
    pub fn new(tree: FolderTree, store: ItemStore<T>) -> Self {
        Self { tree, store }
    }

    /// Read access to the folder tree.
    pub fn tree(&self) -> &FolderTree {
        &self.tree
    }

    /// Read access to the item store.
    pub fn store(&self) -> &ItemStore<T> {
        &self.store
    }

    pub fn fallback_id(&self) -> &FolderId {
        self.tree.fallback_id()
    }

    // --- folder operations ---

    pub fn add_folder(&mut self, name: &str, parent_id: Option<FolderId>) -> Result<Folder> {
        self.tree.add(name, parent_id)
    }

    pub fn rename_folder(&mut self, id: &str, new_name: &str) -> Result<()> {
        self.tree.rename(id, new_name)
    }

    /// Delete a folder and its whole subtree.
    ///
    /// Items in any removed folder move to the fallback folder first; only
    /// then are the folder records dropped. The fallback folder itself is
    /// refused with [`crate::CoreError::ProtectedFolder`].
    pub fn delete_folder(&mut self, id: &str) -> Result<FolderRemoval> {
        let removed_ids = self.tree.removal_set(id)?;
        let reparented = self
            .store
            .reassign_folder(&removed_ids, self.tree.fallback_id());
        let before = self.tree.len();
        self.tree.remove_set(&removed_ids);
        Ok(FolderRemoval {
            removed_folders: before - self.tree.len(),
            reparented_items: reparented,
        })
    }

    // --- item operations ---

    /// Add an item. A missing or unresolvable requested folder falls back
    /// to the fallback folder, so the new item always lands in a live one.
    pub fn add_item(&mut self, draft: T::Draft) -> T {
        let folder_id = match draft.requested_folder() {
            Some(id) if self.tree.contains(id) => id.clone(),
            Some(id) => {
                debug!(folder = %id, "requested folder not found, using fallback");
                self.tree.fallback_id().clone()
            }
            None => self.tree.fallback_id().clone(),
        };
        self.store.add(folder_id, draft).clone()
    }

    pub fn update_item(&mut self, item: T) -> bool {
        self.store.update(item)
    }

    pub fn remove_item(&mut self, id: &str) -> bool {
        self.store.remove(id)
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Option<bool> {
        self.store.toggle_favorite(id)
    }
}
