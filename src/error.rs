//! Error types for shortcode decoding, encoding and link handling.

use thiserror::Error;

/// Errors that can occur while decoding links, encoding identifiers or
/// loading codec configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShortcodeError {
    /// The input could not be parsed as a URL or URL reference.
    #[error("Malformed URL: {0}")]
    MalformedUrl(String),

    /// A character outside the 64-symbol alphabet was found while decoding
    /// under the strict policy.
    #[error("Invalid shortcode character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character position within the shortcode.
        position: usize,
    },

    /// The input was empty after trimming surrounding whitespace.
    #[error("Empty URL")]
    EmptyInput,

    /// The URL is well formed but does not point at a media post.
    #[error("Not a valid media post link: {0}")]
    NotMediaLink(String),

    /// The link's registrable domain is not in the configured allow-list.
    #[error("Unsupported domain: {0}")]
    UnsupportedDomain(String),

    /// A media identifier string was not a non-negative decimal integer.
    #[error("Invalid media identifier: {0}")]
    InvalidMediaId(String),

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<url::ParseError> for ShortcodeError {
    fn from(err: url::ParseError) -> Self {
        ShortcodeError::MalformedUrl(err.to_string())
    }
}

impl From<toml::de::Error> for ShortcodeError {
    fn from(err: toml::de::Error) -> Self {
        ShortcodeError::Config(err.to_string())
    }
}
