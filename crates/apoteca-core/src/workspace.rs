//! The owned application state object.

use crate::contact::Contact;
use crate::document::Document;
use crate::favorites::Favorites;
use crate::namespace::Namespace;
use crate::notes::NoteBoard;
use crate::query::NamespaceView;
use crate::roster::Roster;
use crate::session::Session;

/// Everything the dashboard owns, threaded explicitly through the
/// presentation layer instead of living in ambient globals: both
/// namespaces with their view state, the note board, the roster, and the
/// session gate.
pub struct Workspace {
    pub documents: Namespace<Document>,
    pub contacts: Namespace<Contact>,
    pub documents_view: NamespaceView,
    pub contacts_view: NamespaceView,
    pub notes: NoteBoard,
    pub roster: Roster,
    pub session: Session,
}

impl Workspace {
    pub fn new(
        documents: Namespace<Document>,
        contacts: Namespace<Contact>,
        session: Session,
    ) -> Self {
        Self {
            documents,
            contacts,
            documents_view: NamespaceView::new(),
            contacts_view: NamespaceView::new(),
            notes: NoteBoard::new(),
            roster: Roster::new(),
            session,
        }
    }

    /// Cross-namespace favorites snapshot.
    pub fn favorites(&self) -> Favorites<'_> {
        Favorites::collect(self.documents.store(), self.contacts.store())
    }

    /// Toggle pass-throughs so the favorites view can un-star either kind.
    pub fn toggle_favorite_document(&mut self, id: &str) -> Option<bool> {
        self.documents.toggle_favorite(id)
    }

    pub fn toggle_favorite_contact(&mut self, id: &str) -> Option<bool> {
        self.contacts.toggle_favorite(id)
    }
}
