//! Document writer: folder tree -> tag-delimited bytes.

use crate::model::{Contact, Folder};

/// Encode a folder tree into its textual document form.
///
/// Field order is fixed; timestamps are RFC 3339 so the reader can
/// restore them exactly.
pub fn encode(root: &Folder) -> Vec<u8> {
    let mut out = String::new();
    write_folder(&mut out, root);
    out.into_bytes()
}

fn write_folder(out: &mut String, folder: &Folder) {
    out.push_str("<Folder>");
    write_field(out, "Name", &folder.name);
    write_field(out, "CreationDate", &folder.created_at.to_rfc3339());
    write_field(out, "ModificationDate", &folder.modified_at.to_rfc3339());

    // Omit-if-empty: an empty wrapper element is never written.
    if let Some(children) = &folder.folders {
        if !children.is_empty() {
            out.push_str("<SubFolders>");
            for child in children {
                write_folder(out, child);
            }
            out.push_str("</SubFolders>");
        }
    }

    if let Some(contacts) = &folder.contacts {
        if !contacts.is_empty() {
            out.push_str("<Contacts>");
            for contact in contacts {
                write_contact(out, contact);
            }
            out.push_str("</Contacts>");
        }
    }

    out.push_str("</Folder>");
}

fn write_contact(out: &mut String, contact: &Contact) {
    out.push_str("<Contact>");
    write_field(out, "LastName", &contact.last_name);
    write_field(out, "FirstName", &contact.first_name);
    write_field(out, "Email", &contact.email);
    write_field(out, "Company", &contact.company);
    // Relationship is written by name, never by ordinal.
    write_field(out, "Link", contact.relationship.as_str());
    write_field(out, "CreationDate", &contact.created_at.to_rfc3339());
    write_field(out, "ModificationDate", &contact.modified_at.to_rfc3339());
    out.push_str("</Contact>");
}

fn write_field(out: &mut String, name: &str, value: &str) {
    out.push('<');
    out.push_str(name);
    out.push('>');
    write_escaped(out, value);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Escape the characters that would break the document structure.
fn write_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}
