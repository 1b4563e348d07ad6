//! Link processing utilities.
//!
//! This module contains link-related functionality:
//! - Input trimming and URI reference validation
//! - Parsing absolute and relative links
//! - Media link classification with Public Suffix List domains

pub mod link;
pub mod normalizer;
pub mod utils;

// Re-export main functionality
pub use link::{classify_link, is_media_link, registrable_domain};
pub use normalizer::{is_uri_reference_char, normalize_link, validate_reference};
pub use utils::{
    is_absolute_link, last_path_component, link_path, parse_link, path_segments,
    shortcode_from_link,
};
