//! apoteca-core: folder hierarchies, item stores, and query views.
//!
//! Two parallel namespaces (documents, contacts) each own a folder tree and
//! an item store, mutated exclusively through their [`Namespace`] manager.
//! A [`Workspace`] bundles both namespaces with the flat note board, the
//! team roster, and the session gate.

pub mod contact;
pub mod document;
pub mod error;
pub mod favorites;
pub mod fixtures;
pub mod folder;
pub mod item;
pub mod namespace;
pub mod notes;
pub mod query;
pub mod roster;
pub mod session;
pub mod store;
pub mod tree;
pub mod workspace;

pub use contact::*;
pub use document::*;
pub use error::*;
pub use favorites::*;
pub use fixtures::*;
pub use folder::*;
pub use item::*;
pub use namespace::*;
pub use notes::*;
pub use query::*;
pub use roster::*;
pub use session::*;
pub use store::*;
pub use tree::*;
pub use workspace::*;
