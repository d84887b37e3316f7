//! Delivery seam and fire-and-forget dispatch.

use apoteca_core::{Roster, TeamNote};
use thiserror::Error;
use tracing::{info, warn};

use crate::announcement::NoteAnnouncement;

/// Errors from a delivery backend.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("smtp error: {0}")]
    Smtp(String),

    #[error("invalid address: {0}")]
    Address(String),
}

/// A delivery backend for composed announcements.
pub trait Notifier {
    fn deliver(&self, announcement: &NoteAnnouncement) -> Result<(), NotifyError>;
}

/// What became of an announcement attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Handed to the backend for this many recipients.
    Sent { recipients: usize },
    /// Nobody on the roster can receive mail; nothing was attempted.
    Skipped,
    /// The backend failed. The note stays on the board regardless.
    Failed(String),
}

/// Announce a freshly posted note to the team.
///
/// Fire-and-forget: the caller posts the note to the board first and then
/// invokes this. Whatever happens here — including total backend failure —
/// is logged and reported through the outcome, never propagated, so the
/// note's existence is independent of delivery.
pub fn announce_note(
    notifier: &dyn Notifier,
    note: &TeamNote,
    roster: &Roster,
) -> DeliveryOutcome {
    let Some(announcement) = NoteAnnouncement::for_note(note, roster) else {
        info!(note = %note.id, "no notification recipients, skipping announcement");
        return DeliveryOutcome::Skipped;
    };

    let recipients = announcement.recipients.len();
    match notifier.deliver(&announcement) {
        Ok(()) => {
            info!(note = %note.id, recipients, "note announcement sent");
            DeliveryOutcome::Sent { recipients }
        }
        Err(err) => {
            warn!(note = %note.id, error = %err, "note announcement failed");
            DeliveryOutcome::Failed(err.to_string())
        }
    }
}
