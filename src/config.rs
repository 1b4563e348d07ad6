//! Codec configuration.
//!
//! Configuration is read from a TOML file; every key is optional:
//!
//! ```toml
//! policy = "strict"          # or "tolerant" (default)
//! width = 11                 # pad encoded shortcodes
//! allowed_domains = ["example.com"]
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::ShortcodeError;
use crate::types::DecodePolicy;

/// Settings for a [`ShortcodeCodec`](crate::ShortcodeCodec).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// How characters outside the alphabet are treated
    pub policy: DecodePolicy,
    /// Minimum length of encoded shortcodes
    pub width: Option<usize>,
    /// Registrable domains accepted by link classification (empty = any)
    pub allowed_domains: Vec<String>,
}

impl CodecConfig {
    /// Parse configuration from TOML text.
    ///
    /// # Examples
    ///
    /// ```
    /// use shortcode::{CodecConfig, DecodePolicy};
    ///
    /// let config = CodecConfig::from_toml_str("policy = \"strict\"\nwidth = 11")?;
    /// assert_eq!(config.policy, DecodePolicy::Strict);
    /// assert_eq!(config.width, Some(11));
    /// assert!(config.allowed_domains.is_empty());
    /// # Ok::<(), shortcode::ShortcodeError>(())
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ShortcodeError> {
        Ok(toml::from_str(text)?)
    }

    /// Read configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ShortcodeError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ShortcodeError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), policy = %config.policy, "loaded codec config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CodecConfig::from_toml_str("").unwrap();
        assert_eq!(config, CodecConfig::default());
        assert_eq!(config.policy, DecodePolicy::Tolerant);
    }

    #[test]
    fn test_full_config() {
        let config = CodecConfig::from_toml_str(
            r#"
            policy = "tolerant"
            width = 12
            allowed_domains = ["example.com", "example.co.uk"]
            "#,
        )
        .unwrap();
        assert_eq!(config.width, Some(12));
        assert_eq!(config.allowed_domains.len(), 2);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            CodecConfig::from_toml_str("policy = \"lenient\""),
            Err(ShortcodeError::Config(_))
        ));
        assert!(matches!(
            CodecConfig::from_toml_str("unknown = 1"),
            Err(ShortcodeError::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(
            CodecConfig::load(&path),
            Err(ShortcodeError::Config(_))
        ));
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "policy = \"strict\"").unwrap();
        writeln!(file, "width = 11").unwrap();

        let config = CodecConfig::load(file.path()).unwrap();
        assert_eq!(config.policy, DecodePolicy::Strict);
        assert_eq!(config.width, Some(11));
    }
}
