//! The flat team note board.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{CoreError, Result};
use crate::item::ItemId;

/// A note on the team board. No folder: the board is flat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamNote {
    pub id: ItemId,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub is_important: bool,
}

/// Owns the team notes. Display order is important-first, then newest.
pub struct NoteBoard {
    notes: Vec<TeamNote>,
}

impl NoteBoard {
    pub fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Build a board from seed notes, given newest first.
    pub fn from_notes(notes: Vec<TeamNote>) -> Self {
        Self { notes }
    }

    /// All notes in stored (newest first) order.
    pub fn all(&self) -> &[TeamNote] {
        &self.notes
    }

    pub fn get(&self, id: &str) -> Option<&TeamNote> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Post a note. Blank author or content is rejected.
    pub fn add(&mut self, author: &str, content: &str, is_important: bool) -> Result<&TeamNote> {
        if author.trim().is_empty() || content.trim().is_empty() {
            return Err(CoreError::BlankNote);
        }
        let note = TeamNote {
            id: Uuid::new_v4().to_string(),
            author: author.trim().to_string(),
            content: content.trim().to_string(),
            created_at: Utc::now(),
            is_important,
        };
        self.notes.insert(0, note);
        Ok(&self.notes[0])
    }

    /// Full replace by id. An unknown id is silently ignored.
    pub fn update(&mut self, note: TeamNote) -> bool {
        match self.notes.iter_mut().find(|n| n.id == note.id) {
            Some(slot) => {
                *slot = note;
                true
            }
            None => {
                debug!(note = %note.id, "update ignored, note not found");
                false
            }
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        self.notes.len() < before
    }

    /// Board order: important notes first, newest first within each group.
    pub fn sorted(&self) -> Vec<&TeamNote> {
        let mut notes: Vec<&TeamNote> = self.notes.iter().collect();
        notes.sort_by(|a, b| {
            b.is_important
                .cmp(&a.is_important)
                .then(b.created_at.cmp(&a.created_at))
        });
        notes
    }
}

impl Default for NoteBoard {
    fn default() -> Self {
        Self::new()
    }
}
