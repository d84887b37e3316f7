//! Conversation and snapshot types for the assistant boundary.

use serde::Serialize;

/// Who produced a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Model,
}

/// A single message in the assistant transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// A document as the assistant sees it: folder resolved to its name,
/// internal ids and urls left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentContext {
    pub title: String,
    pub folder: String,
    pub notes: String,
    pub kind: String,
}

/// A contact as the assistant sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactContext {
    pub name: String,
    pub function: String,
    pub folder: String,
    pub phone: Option<String>,
    pub notes: String,
}

/// Read-only snapshot of both namespaces handed to the provider as
/// context. Building one borrows the workspace; nothing is mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextSnapshot {
    pub documents: Vec<DocumentContext>,
    pub contacts: Vec<ContactContext>,
}
