//! Password generation: character classes, settings, assembly, and
//! clipboard hand-off.

mod charset;
mod clipboard;
mod config;
mod generator;

pub use clipboard::copy_to_clipboard;
pub use config::{ConfigError, PasswordConfig};
pub use generator::generate;
