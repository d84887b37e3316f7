//! Browse/search view state for one namespace.

use serde::{Deserialize, Serialize};

use crate::folder::{Folder, FolderId};
use crate::item::StoredItem;
use crate::store::ItemStore;
use crate::tree::FolderTree;

/// Total order applied to whichever item listing the view produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Case-insensitive on the item's primary text.
    Alphabetical,
    Newest,
    Oldest,
}

/// Per-namespace view state: an active folder, a search term, and a sort.
///
/// The two modes are mutually exclusive. While the search term is non-empty
/// the view is in search mode: the item listing is the whole namespace
/// matched against the term, sub-folders are suppressed, and the active
/// folder is masked — changing it has no visible effect until the term is
/// cleared. With an empty term the view browses the active folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceView {
    active_folder: Option<FolderId>,
    search_term: String,
    sort: SortOrder,
}

impl NamespaceView {
    pub fn new() -> Self {
        Self {
            active_folder: None,
            search_term: String::new(),
            sort: SortOrder::Newest,
        }
    }

    pub fn active_folder(&self) -> Option<&FolderId> {
        self.active_folder.as_ref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    pub fn is_searching(&self) -> bool {
        !self.search_term.is_empty()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    /// Enter a folder (`None` returns to the root view).
    pub fn open_folder(&mut self, folder: Option<FolderId>) {
        self.active_folder = folder;
    }

    /// Move the active folder to the current folder's parent.
    pub fn navigate_up(&mut self, tree: &FolderTree) {
        self.active_folder = self
            .active_folder
            .as_deref()
            .and_then(|id| tree.get(id))
            .and_then(|f| f.parent_id.clone());
    }

    /// Sub-folder listing: children of the active folder, or nothing while
    /// a search is running.
    pub fn visible_folders<'a>(&self, tree: &'a FolderTree) -> Vec<&'a Folder> {
        if self.is_searching() {
            return Vec::new();
        }
        tree.children_of(self.active_folder.as_deref())
    }

    /// The item listing for the current mode, sorted.
    ///
    /// Browse mode lists the active folder's items; search mode matches the
    /// whole namespace case-insensitively, ignoring the active folder. The
    /// sort is stable, so ties keep the store's newest-first order.
    pub fn visible_items<'a, T: StoredItem>(&self, store: &'a ItemStore<T>) -> Vec<&'a T> {
        let mut items: Vec<&T> = if self.is_searching() {
            let needle = self.search_term.to_lowercase();
            store.all().iter().filter(|i| i.matches(&needle)).collect()
        } else {
            match self.active_folder.as_deref() {
                Some(folder) => store.in_folder(folder),
                // At the root there is no folder to scope to.
                None => Vec::new(),
            }
        };

        match self.sort {
            SortOrder::Alphabetical => items.sort_by_key(|i| i.primary_text().to_lowercase()),
            SortOrder::Newest => items.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
            SortOrder::Oldest => items.sort_by(|a, b| a.created_at().cmp(&b.created_at())),
        }
        items
    }

    /// Breadcrumb trail for the active folder, root first.
    pub fn breadcrumbs<'a>(&self, tree: &'a FolderTree) -> Vec<&'a Folder> {
        match self.active_folder.as_deref() {
            Some(id) => tree.ancestor_chain(id),
            None => Vec::new(),
        }
    }

    /// Where a newly created item should go by default: the folder being
    /// browsed, or the fallback folder at the root view.
    pub fn default_folder_for_new_items(&self, tree: &FolderTree) -> FolderId {
        match self.active_folder.as_deref() {
            Some(id) if tree.contains(id) => id.to_string(),
            _ => tree.fallback_id().clone(),
        }
    }

    /// The root folder above `id`. Presentation affordance for the
    /// two-level folder picker; storage depth stays unlimited.
    pub fn root_folder_of<'a>(tree: &'a FolderTree, id: &str) -> Option<&'a Folder> {
        tree.ancestor_chain(id).first().copied()
    }
}

impl Default for NamespaceView {
    fn default() -> Self {
        Self::new()
    }
}
