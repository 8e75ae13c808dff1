//! Project-level configuration.

mod settings;

pub use settings::Settings;
