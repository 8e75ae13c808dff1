//! In-memory address book operations.
//!
//! `ContactBook` owns the root folder and performs all tree mutation;
//! the persistence layer (`vault`) only ever sees a complete root to
//! serialize or returns one after deserializing.

use std::fmt::Write as _;

use crate::errors::{ContactVaultError, Result};
use crate::model::{Contact, Folder};

/// Name given to the root folder of a fresh address book.
pub const DEFAULT_ROOT_NAME: &str = "root";

/// The address book tree plus the operations on it.
pub struct ContactBook {
    root: Folder,
}

impl ContactBook {
    /// Start a fresh book with an empty root folder.
    pub fn new(root_name: &str) -> Self {
        Self {
            root: Folder::new(root_name),
        }
    }

    /// Wrap a tree that came back from the vault.
    pub fn from_root(root: Folder) -> Self {
        Self { root }
    }

    /// The complete tree, for handing to the vault on save.
    pub fn root(&self) -> &Folder {
        &self.root
    }

    /// Consume the book and take the tree.
    pub fn into_root(self) -> Folder {
        self.root
    }

    /// Create a new folder under the folder named `parent`.
    ///
    /// `parent` is matched case-insensitively against the whole tree,
    /// depth-first; the first match wins, as in folder selection.
    pub fn create_folder(&mut self, parent: &str, name: &str) -> Result<()> {
        let target = find_folder_mut(&mut self.root, parent)
            .ok_or_else(|| ContactVaultError::FolderNotFound(parent.to_string()))?;
        target.push_folder(Folder::new(name));
        Ok(())
    }

    /// Add a contact to the folder named `folder`.
    pub fn create_contact(&mut self, folder: &str, contact: Contact) -> Result<()> {
        let target = find_folder_mut(&mut self.root, folder)
            .ok_or_else(|| ContactVaultError::FolderNotFound(folder.to_string()))?;
        target.push_contact(contact);
        Ok(())
    }

    /// Find a folder by name, case-insensitively, depth-first.
    pub fn find_folder(&self, name: &str) -> Option<&Folder> {
        find_folder(&self.root, name)
    }

    /// The contacts of the folder named `folder` (empty slice when the
    /// folder has none).
    pub fn contacts_in(&self, folder: &str) -> Result<&[Contact]> {
        let target = self
            .find_folder(folder)
            .ok_or_else(|| ContactVaultError::FolderNotFound(folder.to_string()))?;
        Ok(target.contacts.as_deref().unwrap_or(&[]))
    }

    /// Render the whole structure as an indented listing:
    ///
    /// ```text
    /// [D] - root
    ///  | [C] - Jane Doe (jane@example.com)
    ///     [D] - work
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        render_folder(&mut out, &self.root, 0);
        out
    }
}

fn find_folder<'a>(folder: &'a Folder, name: &str) -> Option<&'a Folder> {
    if folder.name.eq_ignore_ascii_case(name) {
        return Some(folder);
    }
    folder
        .folders
        .iter()
        .flatten()
        .find_map(|child| find_folder(child, name))
}

fn find_folder_mut<'a>(folder: &'a mut Folder, name: &str) -> Option<&'a mut Folder> {
    if folder.name.eq_ignore_ascii_case(name) {
        return Some(folder);
    }
    folder
        .folders
        .iter_mut()
        .flatten()
        .find_map(|child| find_folder_mut(child, name))
}

fn render_folder(out: &mut String, folder: &Folder, depth: usize) {
    let indent = " ".repeat(depth * 4);
    let _ = writeln!(out, "{indent}[D] - {}", folder.name);

    for contact in folder.contacts.iter().flatten() {
        let _ = writeln!(
            out,
            "{indent} | [C] - {} {} ({})",
            contact.first_name, contact.last_name, contact.email
        );
    }
    for child in folder.folders.iter().flatten() {
        render_folder(out, child, depth + 1);
    }
}
