//! Password generation settings.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for one password generation run.
///
/// Lowercase letters are always included; the toggles add the other
/// character classes on top.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct PasswordConfig {
    /// Requested password length.
    #[serde(default = "default_length")]
    length: usize,

    /// Include uppercase letters.
    #[serde(default = "default_enabled")]
    uppercase: bool,

    /// Include digits.
    #[serde(default = "default_enabled")]
    numbers: bool,

    /// Include symbols.
    #[serde(default = "default_enabled")]
    symbols: bool,
}

#[instrument]
fn default_length() -> usize {
    16
}

#[instrument]
fn default_enabled() -> bool {
    true
}

impl PasswordConfig {
    /// Creates a configuration with explicit settings.
    #[instrument]
    pub fn new(length: usize, uppercase: bool, numbers: bool, symbols: bool) -> Self {
        Self {
            length,
            uppercase,
            numbers,
            symbols,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(length = config.length, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to the defaults
    /// when no file exists there.
    ///
    /// A file that exists but cannot be read or parsed is still an
    /// error; only a missing file selects the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the loaded settings.
    #[instrument(skip(self))]
    pub fn apply_overrides(
        &mut self,
        length: Option<usize>,
        no_uppercase: bool,
        no_numbers: bool,
        no_symbols: bool,
    ) {
        if let Some(length) = length {
            self.length = length;
        }
        if no_uppercase {
            self.uppercase = false;
        }
        if no_numbers {
            self.numbers = false;
        }
        if no_symbols {
            self.symbols = false;
        }
        debug!(
            length = self.length,
            uppercase = self.uppercase,
            numbers = self.numbers,
            symbols = self.symbols,
            "Effective settings"
        );
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: default_length(),
            uppercase: default_enabled(),
            numbers: default_enabled(),
            symbols: default_enabled(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parses() {
        let toml = r#"
            length = 24
            uppercase = false
            numbers = true
            symbols = false
        "#;
        let config: PasswordConfig = toml::from_str(toml).unwrap();
        assert_eq!(*config.length(), 24);
        assert!(!*config.uppercase());
        assert!(*config.numbers());
        assert!(!*config.symbols());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: PasswordConfig = toml::from_str("length = 8").unwrap();
        assert_eq!(*config.length(), 8);
        assert!(*config.uppercase());
        assert!(*config.numbers());
        assert!(*config.symbols());
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: PasswordConfig = toml::from_str("").unwrap();
        assert_eq!(*config.length(), 16);
        assert!(*config.uppercase());
        assert!(*config.numbers());
        assert!(*config.symbols());
    }

    #[test]
    fn test_malformed_config_rejected() {
        let result: Result<PasswordConfig, _> = toml::from_str("length = \"long\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = PasswordConfig::from_file("/nonexistent/termtoys.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_missing_file_uses_defaults() {
        let config = PasswordConfig::load_or_default("/nonexistent/termtoys.toml")
            .expect("Missing file falls back to defaults");
        assert_eq!(*config.length(), 16);
        assert!(*config.uppercase());
        assert!(*config.numbers());
        assert!(*config.symbols());
    }

    #[test]
    fn test_load_or_default_reads_existing_file() {
        let path = std::env::temp_dir().join("termtoys_load_or_default_test.toml");
        std::fs::write(&path, "length = 24\nsymbols = false\n").expect("Write temp config");

        let config = PasswordConfig::load_or_default(&path).expect("Existing file loads");
        let _ = std::fs::remove_file(&path);

        assert_eq!(*config.length(), 24);
        assert!(*config.uppercase());
        assert!(!*config.symbols());
    }

    #[test]
    fn test_overrides_disable_classes() {
        let mut config = PasswordConfig::default();
        config.apply_overrides(Some(10), true, false, true);
        assert_eq!(*config.length(), 10);
        assert!(!*config.uppercase());
        assert!(*config.numbers());
        assert!(!*config.symbols());
    }

    #[test]
    fn test_overrides_keep_loaded_length() {
        let mut config = PasswordConfig::new(20, true, true, true);
        config.apply_overrides(None, false, false, false);
        assert_eq!(*config.length(), 20);
    }
}
