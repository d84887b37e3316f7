//! End-to-end scenarios for folder maintenance, search, and creation
//! defaults, run against the seeded workspace.

use apoteca_core::{
    seed_workspace, ContactDraft, DocumentDraft, SortOrder, GENERAL_CONTACT_FOLDER_ID,
    GENERAL_DOC_FOLDER_ID,
};

#[test]
fn deleting_a_subtree_reparents_items_and_loses_nothing() {
    let mut ws = seed_workspace();
    let items_before = ws.documents.store().len();
    let insuline_id = ws
        .documents
        .store()
        .all()
        .iter()
        .find(|d| d.folder_id == "doc-folder-proto-diabetes")
        .expect("seed has a document in the Diabetes subfolder")
        .id
        .clone();

    let removal = ws.documents.delete_folder("doc-folder-proto").unwrap();

    // Protocollen and Diabetes are both gone, the item survived.
    assert_eq!(removal.removed_folders, 2);
    assert_eq!(removal.reparented_items, 1);
    assert!(!ws.documents.tree().contains("doc-folder-proto"));
    assert!(!ws.documents.tree().contains("doc-folder-proto-diabetes"));
    assert_eq!(ws.documents.store().len(), items_before);

    let insuline = ws.documents.store().get(&insuline_id).unwrap();
    assert_eq!(insuline.folder_id, GENERAL_DOC_FOLDER_ID);
}

#[test]
fn deleting_the_fallback_folder_is_a_no_op() {
    let mut ws = seed_workspace();
    let folders_before = ws.documents.tree().len();
    let assignments_before: Vec<String> = ws
        .documents
        .store()
        .all()
        .iter()
        .map(|d| d.folder_id.clone())
        .collect();

    assert!(ws.documents.delete_folder(GENERAL_DOC_FOLDER_ID).is_err());

    assert_eq!(ws.documents.tree().len(), folders_before);
    let assignments_after: Vec<String> = ws
        .documents
        .store()
        .all()
        .iter()
        .map(|d| d.folder_id.clone())
        .collect();
    assert_eq!(assignments_before, assignments_after);
}

#[test]
fn whitespace_folder_names_are_rejected_in_both_namespaces() {
    let mut ws = seed_workspace();
    let doc_folders = ws.documents.tree().len();
    let contact_folders = ws.contacts.tree().len();

    assert!(ws.documents.add_folder("   ", None).is_err());
    assert!(ws.contacts.add_folder("\t", None).is_err());

    assert_eq!(ws.documents.tree().len(), doc_folders);
    assert_eq!(ws.contacts.tree().len(), contact_folders);
}

#[test]
fn search_results_do_not_depend_on_the_active_folder() {
    let mut ws = seed_workspace();
    ws.documents_view.set_search_term("insuline");

    let hits: Vec<String> = ws
        .documents_view
        .visible_items(ws.documents.store())
        .iter()
        .map(|d| d.id.clone())
        .collect();

    for folder in ["doc-folder-admin", "doc-folder-proto", GENERAL_DOC_FOLDER_ID] {
        ws.documents_view.open_folder(Some(folder.into()));
        let rescoped: Vec<String> = ws
            .documents_view
            .visible_items(ws.documents.store())
            .iter()
            .map(|d| d.id.clone())
            .collect();
        assert_eq!(hits, rescoped);
    }
}

#[test]
fn newest_and_oldest_reverse_each_other_on_the_seed_set() {
    let mut ws = seed_workspace();
    ws.documents_view.set_search_term("e"); // matches every seed document

    ws.documents_view.set_sort(SortOrder::Newest);
    let newest: Vec<String> = ws
        .documents_view
        .visible_items(ws.documents.store())
        .iter()
        .map(|d| d.id.clone())
        .collect();

    ws.documents_view.set_sort(SortOrder::Oldest);
    let mut oldest: Vec<String> = ws
        .documents_view
        .visible_items(ws.documents.store())
        .iter()
        .map(|d| d.id.clone())
        .collect();
    oldest.reverse();

    assert_eq!(newest.len(), 3);
    assert_eq!(newest, oldest);
}

#[test]
fn new_items_land_in_the_browsed_folder_or_the_fallback() {
    let mut ws = seed_workspace();

    // Browsing Protocollen: the creation form defaults there.
    ws.documents_view.open_folder(Some("doc-folder-proto".into()));
    let default = ws
        .documents_view
        .default_folder_for_new_items(ws.documents.tree());
    let doc = ws.documents.add_item(DocumentDraft {
        title: "Nieuw protocol".into(),
        folder_id: Some(default),
        ..Default::default()
    });
    assert_eq!(doc.folder_id, "doc-folder-proto");

    // At the root view the default is the fallback folder.
    ws.documents_view.open_folder(None);
    let default = ws
        .documents_view
        .default_folder_for_new_items(ws.documents.tree());
    let doc = ws.documents.add_item(DocumentDraft {
        title: "Losse notitie".into(),
        folder_id: Some(default),
        ..Default::default()
    });
    assert_eq!(doc.folder_id, GENERAL_DOC_FOLDER_ID);
}

#[test]
fn contacts_namespace_mirrors_the_document_behavior() {
    let mut ws = seed_workspace();

    let contact = ws.contacts.add_item(ContactDraft {
        name: "Dr. Peeters".into(),
        function: "Huisarts".into(),
        folder_id: Some("contact-folder-gp-venlo".into()),
        ..Default::default()
    });
    assert_eq!(contact.folder_id, "contact-folder-gp-venlo");

    let removal = ws.contacts.delete_folder("contact-folder-gp").unwrap();
    assert_eq!(removal.removed_folders, 3); // Huisartsen, Steyl, Venlo

    // Both the seeded Steyl contact and the new Venlo one moved.
    assert_eq!(removal.reparented_items, 2);
    for contact in ws.contacts.store().all() {
        assert!(ws.contacts.tree().contains(&contact.folder_id));
    }
    assert_eq!(
        ws.contacts.store().get(&contact.id).unwrap().folder_id,
        GENERAL_CONTACT_FOLDER_ID
    );
}

#[test]
fn breadcrumbs_track_navigation() {
    let mut ws = seed_workspace();
    ws.documents_view
        .open_folder(Some("doc-folder-proto-diabetes".into()));

    let names: Vec<&str> = ws
        .documents_view
        .breadcrumbs(ws.documents.tree())
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, vec!["Protocollen", "Diabetes"]);

    ws.documents_view.navigate_up(ws.documents.tree());
    let names: Vec<&str> = ws
        .documents_view
        .breadcrumbs(ws.documents.tree())
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, vec!["Protocollen"]);
}
