//! Error types for apoteca-core

use thiserror::Error;

use crate::folder::FolderId;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors from core operations.
///
/// Every variant reports a rejected operation; the operation itself is a
/// no-op and leaves all state unchanged. Unknown-id mutations are not
/// errors at all — they are silently ignored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Folder name was empty or whitespace-only after trimming
    #[error("folder name must not be empty")]
    EmptyFolderName,

    /// Parent folder does not exist in this namespace
    #[error("folder not found: {0}")]
    UnknownFolder(FolderId),

    /// Attempt to delete the namespace's fallback folder
    #[error("folder '{0}' is protected and cannot be deleted")]
    ProtectedFolder(FolderId),

    /// Note author or content was blank
    #[error("note author and content must not be empty")]
    BlankNote,

    /// Team member was missing a name or email address
    #[error("team member needs a name and an email address")]
    IncompleteMember,

    /// New shared secret was blank
    #[error("shared secret must not be empty")]
    EmptySecret,
}
