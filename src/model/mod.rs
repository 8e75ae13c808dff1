//! In-memory data model: folders, contacts, and the relationship enum.
//!
//! `Folder` is the tree node: it owns an ordered list of child folders and
//! an ordered list of contacts.  Both lists are `Option` because the
//! on-disk format distinguishes "never populated" from "populated" by
//! omitting the wrapper element — see the `codec` module for how absent
//! and empty lists collapse on a round trip.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::errors::ContactVaultError;

/// How a contact relates to the address book's owner.
///
/// The external tag of each variant is its name, never its ordinal, so
/// the persisted form survives enum reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    Friend,
    Colleague,
    Relation,
    Network,
    Unknown,
}

impl Relationship {
    /// All variants, in declaration order.  Used by the interactive
    /// contact prompt.
    pub const ALL: [Relationship; 5] = [
        Relationship::Friend,
        Relationship::Colleague,
        Relationship::Relation,
        Relationship::Network,
        Relationship::Unknown,
    ];

    /// The fixed textual tag written to disk.
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Friend => "Friend",
            Relationship::Colleague => "Colleague",
            Relationship::Relation => "Relation",
            Relationship::Network => "Network",
            Relationship::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relationship {
    type Err = ContactVaultError;

    /// Parse the exact external tag.  Anything else is a hard error —
    /// an unrecognized relationship must never silently become `Unknown`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Friend" => Ok(Relationship::Friend),
            "Colleague" => Ok(Relationship::Colleague),
            "Relation" => Ok(Relationship::Relation),
            "Network" => Ok(Relationship::Network),
            "Unknown" => Ok(Relationship::Unknown),
            other => Err(ContactVaultError::Format(format!(
                "unrecognized relationship tag '{other}'"
            ))),
        }
    }
}

/// A single contact record.
///
/// No validation is enforced on the text fields; the model stores
/// whatever the caller hands it.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub company: String,
    pub relationship: Relationship,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Contact {
    /// Create a contact with both timestamps set to now.
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        email: impl Into<String>,
        company: impl Into<String>,
        relationship: Relationship,
    ) -> Self {
        let now = Utc::now();
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            email: email.into(),
            company: company.into(),
            relationship,
            created_at: now,
            modified_at: now,
        }
    }
}

/// A folder in the address book tree.
///
/// `folders` and `contacts` preserve insertion order.  `None` means the
/// list was never populated (or was empty when last saved); the codec
/// never produces `Some(vec![])` on decode.
#[derive(Debug, Clone, PartialEq)]
pub struct Folder {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub folders: Option<Vec<Folder>>,
    pub contacts: Option<Vec<Contact>>,
}

impl Folder {
    /// Create an empty folder with both timestamps set to now.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            created_at: now,
            modified_at: now,
            folders: None,
            contacts: None,
        }
    }

    /// Append a child folder, allocating the list on first use and
    /// bumping this folder's modification timestamp.
    pub fn push_folder(&mut self, child: Folder) {
        self.folders.get_or_insert_with(Vec::new).push(child);
        self.modified_at = Utc::now();
    }

    /// Append a contact, allocating the list on first use and bumping
    /// this folder's modification timestamp.
    pub fn push_contact(&mut self, contact: Contact) {
        self.contacts.get_or_insert_with(Vec::new).push(contact);
        self.modified_at = Utc::now();
    }
}
