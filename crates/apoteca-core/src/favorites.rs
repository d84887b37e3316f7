//! Read-only favorites aggregation across both namespaces.

use crate::contact::Contact;
use crate::document::Document;
use crate::store::ItemStore;

/// A cross-namespace snapshot of everything the team starred.
///
/// Borrowed from both stores: building it mutates nothing, and
/// un-favoriting from the aggregated view goes through the owning
/// namespace's toggle like any other favorite change.
#[derive(Debug)]
pub struct Favorites<'a> {
    pub documents: Vec<&'a Document>,
    pub contacts: Vec<&'a Contact>,
}

impl<'a> Favorites<'a> {
    pub fn collect(
        documents: &'a ItemStore<Document>,
        contacts: &'a ItemStore<Contact>,
    ) -> Self {
        Self {
            documents: documents.favorites(),
            contacts: contacts.favorites(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty() && self.contacts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.documents.len() + self.contacts.len()
    }
}
