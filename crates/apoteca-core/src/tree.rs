//! In-memory folder tree for one namespace.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{CoreError, Result};
use crate::folder::{Folder, FolderId};

/// The folder hierarchy of a single namespace.
///
/// Folders are kept in insertion order. Exactly one folder is the
/// permanent fallback folder: it is always present, always a root, and
/// refuses deletion. The parent graph is acyclic by construction because
/// folders are only ever created under an existing folder and parents are
/// never repointed afterwards.
#[derive(Debug)]
pub struct FolderTree {
    folders: Vec<Folder>,
    fallback_id: FolderId,
}

impl FolderTree {
    /// Create a tree containing only the fallback folder.
    pub fn with_fallback(id: impl Into<FolderId>, name: impl Into<String>) -> Self {
        let fallback = Folder::with_id(id, name, None);
        Self {
            fallback_id: fallback.id.clone(),
            folders: vec![fallback],
        }
    }

    /// Build a tree from seed folders. The fallback id must name one of them.
    pub fn from_folders(folders: Vec<Folder>, fallback_id: impl Into<FolderId>) -> Result<Self> {
        let fallback_id = fallback_id.into();
        if !folders.iter().any(|f| f.id == fallback_id) {
            return Err(CoreError::UnknownFolder(fallback_id));
        }
        Ok(Self {
            folders,
            fallback_id,
        })
    }

    /// Id of the permanent fallback folder.
    pub fn fallback_id(&self) -> &FolderId {
        &self.fallback_id
    }

    /// Get a folder by id.
    pub fn get(&self, id: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    /// Whether a folder with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All folders in insertion order.
    pub fn all(&self) -> &[Folder] {
        &self.folders
    }

    /// Number of folders in the tree.
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// A tree always holds at least the fallback folder.
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Direct children of a folder, or the root folders when `parent` is
    /// `None`. Insertion order is preserved.
    pub fn children_of(&self, parent: Option<&str>) -> Vec<&Folder> {
        self.folders
            .iter()
            .filter(|f| f.parent_id.as_deref() == parent)
            .collect()
    }

    /// Ancestor chain from the root down to (and including) the folder.
    ///
    /// Walks parent links upward and prepends at each step. Terminates at a
    /// root folder, at a missing parent, or after one hop per stored folder,
    /// so a malformed parent cycle cannot hang the walk.
    pub fn ancestor_chain(&self, id: &str) -> Vec<&Folder> {
        let mut chain = Vec::new();
        let mut current = self.get(id);
        let mut budget = self.folders.len();

        while let Some(folder) = current {
            if budget == 0 {
                debug!(folder = id, "ancestor walk exceeded hop budget");
                break;
            }
            budget -= 1;
            chain.push(folder);
            current = folder.parent_id.as_deref().and_then(|p| self.get(p));
        }

        chain.reverse();
        chain
    }

    /// Ids of the folder and every folder below it.
    ///
    /// Iterative worklist traversal with a visited set: each folder is
    /// visited at most once, so the result is finite even on arbitrarily
    /// deep (or malformed cyclic) input. The argument id is always included,
    /// whether or not it resolves.
    pub fn descendants(&self, id: &str) -> HashSet<FolderId> {
        let mut visited: HashSet<FolderId> = HashSet::new();
        let mut worklist: Vec<FolderId> = vec![id.to_string()];

        while let Some(current) = worklist.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            for child in self.children_of(Some(current.as_str())) {
                if !visited.contains(&child.id) {
                    worklist.push(child.id.clone());
                }
            }
        }

        visited
    }

    /// Create a folder under `parent_id` (or at the root for `None`).
    ///
    /// The name is trimmed; an empty result is rejected. A parent id that
    /// does not resolve is rejected too, which keeps the tree acyclic by
    /// construction.
    pub fn add(&mut self, name: &str, parent_id: Option<FolderId>) -> Result<Folder> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyFolderName);
        }
        if let Some(ref parent) = parent_id {
            if !self.contains(parent) {
                return Err(CoreError::UnknownFolder(parent.clone()));
            }
        }
        let folder = Folder::new(trimmed, parent_id);
        self.folders.push(folder.clone());
        Ok(folder)
    }

    /// Rename a folder. Same trim rule as [`FolderTree::add`]; an unknown id
    /// is silently ignored.
    pub fn rename(&mut self, id: &str, new_name: &str) -> Result<()> {
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyFolderName);
        }
        match self.folders.iter_mut().find(|f| f.id == id) {
            Some(folder) => folder.name = trimmed.to_string(),
            None => debug!(folder = id, "rename ignored, folder not found"),
        }
        Ok(())
    }

    /// First phase of deletion: the id set that deleting this folder would
    /// remove (the folder plus all descendants). Refuses the fallback
    /// folder. The caller reparents affected items against this set before
    /// calling [`FolderTree::remove_set`].
    pub fn removal_set(&self, id: &str) -> Result<HashSet<FolderId>> {
        if id == self.fallback_id {
            return Err(CoreError::ProtectedFolder(self.fallback_id.clone()));
        }
        Ok(self.descendants(id))
    }

    /// Second phase of deletion: drop every folder whose id is in the set.
    /// The fallback folder is never removed.
    pub fn remove_set(&mut self, ids: &HashSet<FolderId>) {
        let fallback = self.fallback_id.clone();
        self.folders.retain(|f| f.id == fallback || !ids.contains(&f.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> FolderTree {
        FolderTree::from_folders(
            vec![
                Folder::with_id("general", "Algemeen", None),
                Folder::with_id("proto", "Protocollen", None),
                Folder::with_id("proto-diabetes", "Diabetes", Some("proto".into())),
                Folder::with_id("proto-astma", "Astma", Some("proto".into())),
                Folder::with_id("meds", "Medicijnen", None),
            ],
            "general",
        )
        .unwrap()
    }

    #[test]
    fn children_preserve_insertion_order() {
        let tree = sample_tree();
        let roots: Vec<&str> = tree
            .children_of(None)
            .iter()
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(roots, vec!["general", "proto", "meds"]);

        let subs: Vec<&str> = tree
            .children_of(Some("proto"))
            .iter()
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(subs, vec!["proto-diabetes", "proto-astma"]);
    }

    #[test]
    fn ancestor_chain_runs_root_to_folder() {
        let tree = sample_tree();
        let chain: Vec<&str> = tree
            .ancestor_chain("proto-diabetes")
            .iter()
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(chain, vec!["proto", "proto-diabetes"]);
    }

    #[test]
    fn ancestor_chain_of_unknown_id_is_empty() {
        let tree = sample_tree();
        assert!(tree.ancestor_chain("nope").is_empty());
    }

    #[test]
    fn descendants_include_self() {
        let tree = sample_tree();
        for folder in tree.all() {
            assert!(tree.descendants(&folder.id).contains(&folder.id));
        }
    }

    #[test]
    fn descendants_collect_whole_subtree() {
        let tree = sample_tree();
        let ids = tree.descendants("proto");
        assert_eq!(ids.len(), 3);
        assert!(ids.contains("proto"));
        assert!(ids.contains("proto-diabetes"));
        assert!(ids.contains("proto-astma"));
    }

    #[test]
    fn descendants_terminate_on_deep_chains() {
        let mut folders = vec![Folder::with_id("f0", "Root", None)];
        for i in 1..500 {
            folders.push(Folder::with_id(
                format!("f{i}"),
                format!("Level {i}"),
                Some(format!("f{}", i - 1)),
            ));
        }
        let tree = FolderTree::from_folders(folders, "f0").unwrap();
        assert_eq!(tree.descendants("f0").len(), 500);
        assert_eq!(tree.ancestor_chain("f499").len(), 500);
    }

    #[test]
    fn traversals_are_bounded_on_malformed_cycles() {
        // Not constructible through add(), but the traversals must still
        // terminate if seed data is broken.
        let tree = FolderTree::from_folders(
            vec![
                Folder::with_id("general", "Algemeen", None),
                Folder::with_id("a", "A", Some("b".into())),
                Folder::with_id("b", "B", Some("a".into())),
            ],
            "general",
        )
        .unwrap();

        let ids = tree.descendants("a");
        assert!(ids.contains("a"));
        assert!(ids.contains("b"));
        assert_eq!(ids.len(), 2);
        assert!(tree.ancestor_chain("a").len() <= tree.len());
    }

    #[test]
    fn add_rejects_whitespace_names() {
        let mut tree = sample_tree();
        let before = tree.len();
        assert_eq!(tree.add("   ", None), Err(CoreError::EmptyFolderName));
        assert_eq!(tree.len(), before);
    }

    #[test]
    fn add_trims_names() {
        let mut tree = sample_tree();
        let folder = tree.add("  Inkomen  ", None).unwrap();
        assert_eq!(folder.name, "Inkomen");
    }

    #[test]
    fn add_rejects_unknown_parent() {
        let mut tree = sample_tree();
        let err = tree.add("Orphan", Some("gone".into())).unwrap_err();
        assert_eq!(err, CoreError::UnknownFolder("gone".into()));
    }

    #[test]
    fn rename_unknown_id_is_a_no_op() {
        let mut tree = sample_tree();
        assert!(tree.rename("nope", "Nieuw").is_ok());
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn rename_rejects_empty_names() {
        let mut tree = sample_tree();
        assert_eq!(tree.rename("proto", " "), Err(CoreError::EmptyFolderName));
        assert_eq!(tree.get("proto").unwrap().name, "Protocollen");
    }

    #[test]
    fn removal_set_refuses_fallback() {
        let tree = sample_tree();
        let err = tree.removal_set("general").unwrap_err();
        assert_eq!(err, CoreError::ProtectedFolder("general".into()));
    }

    #[test]
    fn remove_set_never_drops_fallback() {
        let mut tree = sample_tree();
        let mut ids = HashSet::new();
        ids.insert("general".to_string());
        ids.insert("meds".to_string());
        tree.remove_set(&ids);
        assert!(tree.contains("general"));
        assert!(!tree.contains("meds"));
    }

    #[test]
    fn from_folders_requires_fallback() {
        let err =
            FolderTree::from_folders(vec![Folder::with_id("a", "A", None)], "missing").unwrap_err();
        assert_eq!(err, CoreError::UnknownFolder("missing".into()));
    }
}
