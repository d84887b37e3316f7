//! Snapshot building and prompt assembly.

use apoteca_core::{DocumentKind, Workspace};

use crate::provider::AssistError;
use crate::types::{ContactContext, ContextSnapshot, DocumentContext};

/// Folder label when an id fails to resolve. The core guarantees item
/// folders always resolve; this covers the snapshot against broken input.
const UNKNOWN_FOLDER: &str = "Onbekend";

fn kind_label(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Pdf => "PDF",
        DocumentKind::Word => "WORD",
        DocumentKind::Jpg => "JPG",
        DocumentKind::Link => "LINK",
    }
}

impl ContextSnapshot {
    /// Capture both namespaces with folder ids resolved to display names.
    pub fn from_workspace(workspace: &Workspace) -> Self {
        let doc_tree = workspace.documents.tree();
        let contact_tree = workspace.contacts.tree();

        let documents = workspace
            .documents
            .store()
            .all()
            .iter()
            .map(|d| DocumentContext {
                title: d.title.clone(),
                folder: doc_tree
                    .get(&d.folder_id)
                    .map(|f| f.name.clone())
                    .unwrap_or_else(|| UNKNOWN_FOLDER.to_string()),
                notes: d.notes.clone(),
                kind: kind_label(d.kind).to_string(),
            })
            .collect();

        let contacts = workspace
            .contacts
            .store()
            .all()
            .iter()
            .map(|c| ContactContext {
                name: c.name.clone(),
                function: c.function.clone(),
                folder: contact_tree
                    .get(&c.folder_id)
                    .map(|f| f.name.clone())
                    .unwrap_or_else(|| UNKNOWN_FOLDER.to_string()),
                phone: c.phone.clone(),
                notes: c.notes.clone(),
            })
            .collect();

        Self {
            documents,
            contacts,
        }
    }

    /// The system prompt handed to the provider, with the snapshot
    /// embedded as JSON.
    pub fn system_prompt(&self) -> Result<String, AssistError> {
        let data = serde_json::to_string(self)?;
        Ok(format!(
            "Je bent een behulpzame AI-assistent voor de apotheek.\n\
             Je hebt toegang tot de volgende data in JSON formaat:\n{data}\n\n\
             Antwoord beknopt en vriendelijk in het Nederlands.\n\
             Als een gebruiker vraagt om een dokter, zoek in de contacten.\n\
             Als een gebruiker vraagt om een document, zoek in de documenten.\n\
             Als de info niet bestaat, zeg dat eerlijk."
        ))
    }
}
