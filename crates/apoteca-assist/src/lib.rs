//! apoteca-assist: the AI assistant boundary.
//!
//! The assistant answers free-text questions over read-only snapshots of
//! both namespaces. It never mutates core state, and a failing provider is
//! caught at this boundary and surfaced as a transcript message.

pub mod assistant;
pub mod context;
pub mod provider;
pub mod types;

pub use assistant::*;
pub use provider::*;
pub use types::*;
