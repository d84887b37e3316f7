//! Folder records for the per-namespace hierarchy.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque folder identifier.
///
/// Seeded folders carry fixed readable ids (e.g. `doc-folder-general`);
/// user-created folders get a fresh UUID string.
pub type FolderId = String;

/// A user-defined folder. `parent_id == None` marks a root folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    pub parent_id: Option<FolderId>,
}

impl Folder {
    /// Create a folder with a freshly generated id.
    pub fn new(name: impl Into<String>, parent_id: Option<FolderId>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            parent_id,
        }
    }

    /// Create a folder with a caller-chosen id. Used for seed data.
    pub fn with_id(
        id: impl Into<FolderId>,
        name: impl Into<String>,
        parent_id: Option<FolderId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id,
        }
    }

    /// Whether this folder sits at the top of the tree.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
