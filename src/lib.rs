//! Shortcode - media identifiers from sharable post links
//!
//! Social media posts are shared as links whose last path segment is a
//! *shortcode*: the post's numeric media identifier written in base 64 with
//! a URL-safe alphabet.
//!
//! This crate converts between the two, and recognises sharable media links.
//!
//! # Features
//!
//! - **Exact**: identifiers are arbitrary precision, long shortcodes never wrap
//! - **Tolerant or strict**: unknown characters are skipped by default, or rejected
//! - **Link aware**: absolute URLs and bare references, query strings and
//!   fragments ignored, trailing slashes ignored
//! - **Classification**: post, reel and TV links, registrable domains via the
//!   Public Suffix List
//!
//! # Quick Start
//!
//! ```
//! use shortcode::{decode, encode, classify_link, MediaId, MediaKind};
//!
//! // Decode a link to its media identifier
//! let id = decode("https://example.com/p/CKg54_Ch4HE/").unwrap();
//! assert_eq!(id, "2495248798193254852");
//!
//! // And back
//! let shortcode = encode(&id.parse::<MediaId>()?);
//! assert_eq!(shortcode, "CKg54_Ch4HE");
//!
//! // Recognise a media link
//! let link = classify_link("https://www.example.com/reel/CKg54_Ch4HE/?igsh=x", &[])?;
//! assert_eq!(link.kind, MediaKind::Reel);
//! # Ok::<(), shortcode::ShortcodeError>(())
//! ```
//!
//! # Alphabet
//!
//! | Symbols | Values |
//! |---------|--------|
//! | `A`-`Z` | 0-25   |
//! | `a`-`z` | 26-51  |
//! | `0`-`9` | 52-61  |
//! | `-`     | 62     |
//! | `_`     | 63     |
//!
//! # Error Handling
//!
//! [`decode`] returns `None` only for input that is not a URL reference.
//! Everything else returns `Result<T, ShortcodeError>`:
//!
//! - Malformed URLs
//! - Characters outside the alphabet under [`DecodePolicy::Strict`]
//! - Links that are not media links, or whose domain is not allowed
//! - Invalid decimal identifiers and configuration files

// Re-export main decoding functions
pub use crate::core::{
    decode, decode_numeric, decode_shortcode, try_decode, try_decode_with_policy,
};

// Re-export main encoding functions
pub use crate::core::{encode, encode_decimal, encode_with_width};

// Re-export link utilities
pub use crate::url::{
    classify_link, is_absolute_link, is_media_link, last_path_component, link_path, parse_link,
    path_segments, registrable_domain, shortcode_from_link,
};

// Re-export public types
pub use crate::config::CodecConfig;
pub use crate::core::{DecodedLink, ShortcodeCodec, ALPHABET};
pub use crate::error::ShortcodeError;
pub use crate::types::{DecodePolicy, MediaId, MediaKind, MediaLink};

// Module declarations
pub mod config;
pub mod core;
pub mod error;
pub mod types;
pub mod url;
