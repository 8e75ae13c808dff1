//! Tree Codec — converts the folder/contact tree to and from its
//! tag-delimited textual document form.
//!
//! A document looks like:
//!
//! ```text
//! <Folder>
//!   <Name>root</Name>
//!   <CreationDate>2026-01-05T10:00:00+00:00</CreationDate>
//!   <ModificationDate>2026-01-05T10:00:00+00:00</ModificationDate>
//!   <SubFolders><Folder>...</Folder></SubFolders>
//!   <Contacts><Contact>...</Contact></Contacts>
//! </Folder>
//! ```
//!
//! (shown indented for readability — the writer emits no whitespace).
//!
//! Two rules shape the format:
//!
//! - **Omit-if-empty**: the `<SubFolders>` and `<Contacts>` wrappers are
//!   only written when the list is present *and* non-empty.  On decode a
//!   missing wrapper always becomes `None`, so an explicitly empty list
//!   does not survive a round trip as empty.  One policy, applied
//!   consistently.
//! - **Skip-on-unknown**: the reader ignores element names it does not
//!   recognize, including whole subtrees, so documents written by a newer
//!   version with extra fields still decode.

pub mod reader;
pub mod writer;

pub use reader::decode;
pub use writer::encode;
