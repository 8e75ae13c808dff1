//! One module per subcommand.

pub mod add;
pub mod init;
pub mod list;
pub mod mkdir;
pub mod reset;
pub mod tree;
