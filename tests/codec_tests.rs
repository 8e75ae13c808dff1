//! Integration tests for the tree codec.

use contactvault::codec::{decode, encode};
use contactvault::errors::ContactVaultError;
use contactvault::model::{Contact, Folder, Relationship};

/// Helper: a contact with every field populated.
fn contact(last: &str, rel: Relationship) -> Contact {
    Contact::new(last, "Alex", "alex@example.com", "Initech", rel)
}

// ---------------------------------------------------------------------------
// Round-trip identity
// ---------------------------------------------------------------------------

#[test]
fn populated_tree_round_trips_exactly() {
    let mut root = Folder::new("root");
    root.push_contact(contact("Doe", Relationship::Friend));
    root.push_contact(contact("Smith", Relationship::Network));

    let mut work = Folder::new("work");
    work.push_contact(contact("Nguyen", Relationship::Colleague));
    let mut clients = Folder::new("clients");
    clients.push_contact(contact("Kim", Relationship::Unknown));
    work.push_folder(clients);
    root.push_folder(work);
    root.push_folder(Folder::new("family"));

    let decoded = decode(&encode(&root)).expect("decode");
    assert_eq!(decoded, root);
}

#[test]
fn insertion_order_is_preserved() {
    let mut root = Folder::new("root");
    for name in ["one", "two", "three", "four"] {
        root.push_folder(Folder::new(name));
    }
    root.push_contact(contact("Zeta", Relationship::Friend));
    root.push_contact(contact("Alpha", Relationship::Friend));

    let decoded = decode(&encode(&root)).unwrap();

    let names: Vec<&str> = decoded
        .folders
        .as_ref()
        .unwrap()
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, ["one", "two", "three", "four"]);

    let lasts: Vec<&str> = decoded
        .contacts
        .as_ref()
        .unwrap()
        .iter()
        .map(|c| c.last_name.as_str())
        .collect();
    assert_eq!(lasts, ["Zeta", "Alpha"]);
}

#[test]
fn timestamps_round_trip_exactly() {
    let mut root = Folder::new("root");
    root.push_contact(contact("Doe", Relationship::Relation));

    let decoded = decode(&encode(&root)).unwrap();
    assert_eq!(decoded.created_at, root.created_at);
    assert_eq!(decoded.modified_at, root.modified_at);

    let original = &root.contacts.as_ref().unwrap()[0];
    let recovered = &decoded.contacts.as_ref().unwrap()[0];
    assert_eq!(recovered.created_at, original.created_at);
    assert_eq!(recovered.modified_at, original.modified_at);
}

// ---------------------------------------------------------------------------
// Null/empty collection collapse
// ---------------------------------------------------------------------------

#[test]
fn empty_root_decodes_with_absent_collections() {
    let root = Folder::new("lonely");
    let decoded = decode(&encode(&root)).unwrap();

    assert_eq!(decoded.name, "lonely");
    assert!(decoded.folders.is_none());
    assert!(decoded.contacts.is_none());
}

#[test]
fn explicitly_empty_lists_collapse_to_absent() {
    // The caller set both lists to empty (not absent) before saving.
    let mut root = Folder::new("root");
    root.folders = Some(Vec::new());
    root.contacts = Some(Vec::new());

    let decoded = decode(&encode(&root)).unwrap();

    // On read-back they must be absent, never Some(vec![]).
    assert!(decoded.folders.is_none());
    assert!(decoded.contacts.is_none());
}

// ---------------------------------------------------------------------------
// Enum boundary
// ---------------------------------------------------------------------------

#[test]
fn exact_relationship_tag_decodes() {
    let mut root = Folder::new("root");
    root.push_contact(contact("Doe", Relationship::Network));

    let decoded = decode(&encode(&root)).unwrap();
    assert_eq!(
        decoded.contacts.as_ref().unwrap()[0].relationship,
        Relationship::Network
    );
}

#[test]
fn extended_relationship_tag_is_a_format_error() {
    let mut root = Folder::new("root");
    root.push_contact(contact("Doe", Relationship::Network));

    let doc = String::from_utf8(encode(&root)).unwrap();
    let doc = doc.replace("<Link>Network</Link>", "<Link>NetworkX</Link>");

    let result = decode(doc.as_bytes());
    assert!(matches!(result, Err(ContactVaultError::Format(_))));
}

// ---------------------------------------------------------------------------
// Deep nesting
// ---------------------------------------------------------------------------

#[test]
fn ten_levels_of_nesting_round_trip() {
    // Build level10 inside level9 inside ... inside level1.
    let mut deepest = Folder::new("level10");
    deepest.push_contact(contact("Deep", Relationship::Friend));

    let mut current = deepest;
    for level in (1..10).rev() {
        let mut parent = Folder::new(format!("level{level}"));
        parent.push_folder(current);
        current = parent;
    }

    let decoded = decode(&encode(&current)).unwrap();

    // Walk back down checking every name along the way.
    let mut node = &decoded;
    for level in 1..=10 {
        assert_eq!(node.name, format!("level{level}"));
        if level < 10 {
            node = &node.folders.as_ref().unwrap()[0];
        }
    }

    let contacts = node.contacts.as_ref().unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].last_name, "Deep");
}
