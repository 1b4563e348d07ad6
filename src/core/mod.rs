//! Core shortcode functionality.
//!
//! This module contains the shortcode operations:
//! - The 64-symbol alphabet
//! - Decoding shortcodes and links to media identifiers
//! - Encoding media identifiers back to shortcodes
//! - A configured codec bundling the above

pub mod alphabet;
pub mod codec;
pub mod decoder;
pub mod encoder;

// Re-export main functionality
pub use alphabet::{symbol_for, symbol_value, ALPHABET, RADIX};
pub use codec::{DecodedLink, ShortcodeCodec};
pub use decoder::{decode, decode_numeric, decode_shortcode, try_decode, try_decode_with_policy};
pub use encoder::{encode, encode_decimal, encode_with_width};
