//! Encrypted Store — wraps the Tree Codec's bytes with authenticated
//! encryption and owns the vault file lifecycle.
//!
//! The store is stateless: `save` and `load` each derive the key, run
//! the cipher, and release everything before returning.  Callers must
//! not invoke them concurrently on the same path.

pub mod format;
pub mod store;

pub use format::{Envelope, CURRENT_VERSION};
pub use store::{load, load_or_new, save};
