//! Seed data: the workspace a fresh session starts from.
//!
//! Persistence is transient in-memory state; every start seeds the same
//! Dutch pharmacy fixture set with fixed ids for the fallback folders.

use chrono::{Duration, Utc};

use crate::contact::Contact;
use crate::document::{Document, DocumentKind};
use crate::folder::Folder;
use crate::namespace::Namespace;
use crate::notes::{NoteBoard, TeamNote};
use crate::roster::{Roster, TeamMember};
use crate::session::Session;
use crate::store::ItemStore;
use crate::tree::FolderTree;
use crate::workspace::Workspace;

/// Fixed id of the document namespace's fallback folder.
pub const GENERAL_DOC_FOLDER_ID: &str = "doc-folder-general";
/// Fixed id of the contact namespace's fallback folder.
pub const GENERAL_CONTACT_FOLDER_ID: &str = "contact-folder-general";

/// Default team secret; the manager can change it in the settings area.
pub const DEFAULT_TEAM_SECRET: &str = "apotheek2024";
/// Secret for the manager-only settings area.
pub const DEFAULT_MANAGER_SECRET: &str = "manager2024";

fn document_folders() -> FolderTree {
    let folders = vec![
        Folder::with_id(GENERAL_DOC_FOLDER_ID, "Algemeen", None),
        Folder::with_id("doc-folder-admin", "Administratie", None),
        Folder::with_id("doc-folder-income", "Inkomen", None),
        Folder::with_id("doc-folder-meds", "Medicijnen", None),
        Folder::with_id("doc-folder-proto", "Protocollen", None),
        Folder::with_id(
            "doc-folder-proto-diabetes",
            "Diabetes",
            Some("doc-folder-proto".into()),
        ),
    ];
    FolderTree::from_folders(folders, GENERAL_DOC_FOLDER_ID)
        .expect("seed folders include the fallback")
}

fn contact_folders() -> FolderTree {
    let folders = vec![
        Folder::with_id(GENERAL_CONTACT_FOLDER_ID, "Overig", None),
        Folder::with_id("contact-folder-gp", "Huisartsen", None),
        Folder::with_id("contact-folder-spec", "Specialisten", None),
        Folder::with_id("contact-folder-pharm", "Apotheken", None),
        Folder::with_id("contact-folder-supp", "Leveranciers", None),
        Folder::with_id(
            "contact-folder-gp-steyl",
            "Steyl",
            Some("contact-folder-gp".into()),
        ),
        Folder::with_id(
            "contact-folder-gp-venlo",
            "Venlo",
            Some("contact-folder-gp".into()),
        ),
    ];
    FolderTree::from_folders(folders, GENERAL_CONTACT_FOLDER_ID)
        .expect("seed folders include the fallback")
}

fn documents() -> ItemStore<Document> {
    let now = Utc::now();
    ItemStore::from_items(vec![
        Document {
            id: "doc-3".into(),
            title: "Instructie insulinepennen".into(),
            kind: DocumentKind::Link,
            folder_id: "doc-folder-proto-diabetes".into(),
            url: "https://www.apotheek.nl/medicijnen/insuline".into(),
            created_at: now,
            notes: "Handig voor patiëntuitleg".into(),
            is_favorite: false,
        },
        Document {
            id: "doc-2".into(),
            title: "Nieuwsbrief Juli".into(),
            kind: DocumentKind::Word,
            folder_id: "doc-folder-income".into(),
            url: "#".into(),
            created_at: now - Duration::hours(2),
            notes: String::new(),
            is_favorite: true,
        },
        Document {
            id: "doc-1".into(),
            title: "Handleiding Kassasysteem".into(),
            kind: DocumentKind::Pdf,
            folder_id: "doc-folder-admin".into(),
            url: "#".into(),
            created_at: now - Duration::hours(3),
            notes: "Bijgewerkt voor versie 2.0".into(),
            is_favorite: false,
        },
    ])
}

fn contacts() -> ItemStore<Contact> {
    let now = Utc::now();
    ItemStore::from_items(vec![
        Contact {
            id: "contact-2".into(),
            name: "Dr. De Vries".into(),
            function: "Cardioloog".into(),
            folder_id: "contact-folder-spec".into(),
            phone: Some("077-7654321".into()),
            email: None,
            address: None,
            notes: "Alleen voor spoed bellen".into(),
            created_at: now - Duration::hours(3),
            is_favorite: false,
        },
        Contact {
            id: "contact-1".into(),
            name: "Dr. Jansen".into(),
            function: "Huisarts".into(),
            folder_id: "contact-folder-gp-steyl".into(),
            phone: Some("077-1234567".into()),
            email: Some("jansen@huisartsenpost-steyl.nl".into()),
            address: Some("Kerkstraat 1, Steyl".into()),
            notes: "Belt vaak tussen 12:00 en 13:00".into(),
            created_at: now - Duration::hours(6),
            is_favorite: true,
        },
    ])
}

fn notes() -> NoteBoard {
    let now = Utc::now();
    NoteBoard::from_notes(vec![
        TeamNote {
            id: "note-1".into(),
            author: "Sanne".into(),
            content: "Vergeet niet de bestelling voor maandag door te geven!".into(),
            created_at: now - Duration::hours(1),
            is_important: true,
        },
        TeamNote {
            id: "note-2".into(),
            author: "Mark".into(),
            content: "De printer heeft kuren, monteur komt morgen.".into(),
            created_at: now - Duration::hours(24),
            is_important: false,
        },
    ])
}

fn roster() -> Roster {
    Roster::from_members(vec![
        TeamMember {
            id: "tm-1".into(),
            name: "Sanne de Vries".into(),
            email: "sanne@apotheekdegoede.nl".into(),
            role: "Apothekersassistent".into(),
        },
        TeamMember {
            id: "tm-2".into(),
            name: "Mark Jansen".into(),
            email: "mark@apotheekdegoede.nl".into(),
            role: "Apotheker".into(),
        },
    ])
}

/// The fully seeded workspace a fresh session starts from.
pub fn seed_workspace() -> Workspace {
    let mut workspace = Workspace::new(
        Namespace::new(document_folders(), documents()),
        Namespace::new(contact_folders(), contacts()),
        Session::new(DEFAULT_TEAM_SECRET, DEFAULT_MANAGER_SECRET),
    );
    workspace.notes = notes();
    workspace.roster = roster();
    workspace
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_workspace_is_consistent() {
        let ws = seed_workspace();

        assert_eq!(ws.documents.fallback_id(), GENERAL_DOC_FOLDER_ID);
        assert_eq!(ws.contacts.fallback_id(), GENERAL_CONTACT_FOLDER_ID);
        assert_eq!(ws.documents.tree().len(), 6);
        assert_eq!(ws.contacts.tree().len(), 7);
        assert_eq!(ws.documents.store().len(), 3);
        assert_eq!(ws.contacts.store().len(), 2);
        assert_eq!(ws.notes.len(), 2);
        assert_eq!(ws.roster.len(), 2);

        // Every item's folder resolves in its own namespace.
        for doc in ws.documents.store().all() {
            assert!(ws.documents.tree().contains(&doc.folder_id));
        }
        for contact in ws.contacts.store().all() {
            assert!(ws.contacts.tree().contains(&contact.folder_id));
        }
    }

    #[test]
    fn seed_favorites_span_both_namespaces() {
        let ws = seed_workspace();
        let favorites = ws.favorites();
        assert_eq!(favorites.documents.len(), 1);
        assert_eq!(favorites.contacts.len(), 1);
    }
}
