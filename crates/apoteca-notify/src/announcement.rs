//! Composing the announcement email for a new note.

use apoteca_core::{Roster, TeamNote};

/// A fully composed announcement, ready for any [`crate::Notifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteAnnouncement {
    pub recipients: Vec<String>,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

impl NoteAnnouncement {
    /// Compose the announcement for a note, addressed to the roster's
    /// notification recipients. Returns `None` when nobody can receive
    /// it — delivery is skipped entirely in that case.
    pub fn for_note(note: &TeamNote, roster: &Roster) -> Option<Self> {
        let recipients: Vec<String> = roster
            .notification_recipients()
            .iter()
            .map(|m| m.email.clone())
            .collect();
        if recipients.is_empty() {
            return None;
        }

        let subject = format!("Nieuwe notitie van {} - Apotheek Dashboard", note.author);
        let text_body = format!(
            "Er is een nieuwe notitie geplaatst op het dashboard:\n\n\
             \"{}\"\n\n- {}\n\nGa naar het dashboard om te reageren.",
            note.content, note.author
        );
        let html_body = format!(
            "<div style=\"font-family: Arial, sans-serif;\">\
             <h2>Nieuwe Team Notitie</h2>\
             <p>Er is een bericht geplaatst door <strong>{}</strong>:</p>\
             <blockquote>{}</blockquote>\
             </div>",
            escape_html(&note.author),
            escape_html(&note.content).replace('\n', "<br/>"),
        );

        Some(Self {
            recipients,
            subject,
            text_body,
            html_body,
        })
    }
}

/// Minimal HTML escaping for note content embedded in the mail body.
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use apoteca_core::TeamMember;
    use chrono::Utc;

    fn note(author: &str, content: &str) -> TeamNote {
        TeamNote {
            id: "n-1".into(),
            author: author.into(),
            content: content.into(),
            created_at: Utc::now(),
            is_important: false,
        }
    }

    fn roster_with(emails: &[&str]) -> Roster {
        Roster::from_members(
            emails
                .iter()
                .enumerate()
                .map(|(i, email)| TeamMember {
                    id: format!("tm-{i}"),
                    name: format!("Lid {i}"),
                    email: email.to_string(),
                    role: "Medewerker".into(),
                })
                .collect(),
        )
    }

    #[test]
    fn compose_addresses_only_valid_emails() {
        let roster = roster_with(&["sanne@apotheek.nl", "geen-email", "mark@apotheek.nl"]);
        let announcement =
            NoteAnnouncement::for_note(&note("Sanne", "Bestelling doorgeven"), &roster).unwrap();
        assert_eq!(
            announcement.recipients,
            vec!["sanne@apotheek.nl", "mark@apotheek.nl"]
        );
        assert_eq!(
            announcement.subject,
            "Nieuwe notitie van Sanne - Apotheek Dashboard"
        );
        assert!(announcement.text_body.contains("Bestelling doorgeven"));
    }

    #[test]
    fn no_recipients_means_no_announcement() {
        let roster = roster_with(&["geen-email"]);
        assert!(NoteAnnouncement::for_note(&note("Sanne", "Hallo"), &roster).is_none());
        assert!(NoteAnnouncement::for_note(&note("Sanne", "Hallo"), &Roster::new()).is_none());
    }

    #[test]
    fn html_body_escapes_content_and_keeps_line_breaks() {
        let roster = roster_with(&["sanne@apotheek.nl"]);
        let announcement = NoteAnnouncement::for_note(
            &note("Sanne", "Dosering <2mg> & controle\ngraag nakijken"),
            &roster,
        )
        .unwrap();
        assert!(announcement.html_body.contains("&lt;2mg&gt; &amp; controle"));
        assert!(announcement.html_body.contains("<br/>"));
        assert!(!announcement.html_body.contains("<2mg>"));
    }
}
