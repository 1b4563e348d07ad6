//! Link parsing and path utilities.
//!
//! Links arrive either as absolute URLs (`https://example.com/p/CKg54_Ch4HE`)
//! or as bare references (`CKg54_Ch4HE`, `p/CKg54_Ch4HE`). Both are validated
//! by resolving them into a [`Url`], but path segments are read from the link
//! as written: resolving would remove `.` and `..` segments, and the last
//! segment the user wrote is the shortcode even when it is `..`.

use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::ShortcodeError;
use crate::url::normalizer::{normalize_link, validate_reference};

/// Base that relative references are resolved against. Never surfaces in
/// results.
const RELATIVE_BASE: &str = "https://relative.invalid/";

/// Parse a link as an absolute URL or, failing that, as a relative
/// reference.
///
/// Surrounding whitespace is trimmed. Characters that are not legal in a URI
/// reference are rejected rather than escaped.
///
/// # Examples
///
/// ```
/// use shortcode::parse_link;
///
/// let url = parse_link("https://example.com/p/CKg54_Ch4HE/?igsh=abc").unwrap();
/// assert_eq!(url.path(), "/p/CKg54_Ch4HE/");
///
/// assert!(parse_link("not a url").is_err());
/// ```
pub fn parse_link(link: &str) -> Result<Url, ShortcodeError> {
    let link = normalize_link(link);
    validate_reference(link)?;

    match Url::parse(link) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Ok(Url::parse(RELATIVE_BASE)?.join(link)?)
        }
        Err(err) => Err(err.into()),
    }
}

/// Whether a link is an absolute URL rather than a bare reference.
pub fn is_absolute_link(link: &str) -> bool {
    Url::parse(normalize_link(link)).is_ok()
}

/// The path of a link exactly as written: no dot-segment removal and no
/// percent-decoding.
///
/// The scheme and authority are stripped, as are the query string and
/// fragment. The link is not validated; pair with [`parse_link`].
///
/// # Examples
///
/// ```
/// use shortcode::link_path;
///
/// assert_eq!(link_path("https://example.com/p/B/..?x=1"), "/p/B/..");
/// assert_eq!(link_path("//example.com/reel/B"), "/reel/B");
/// assert_eq!(link_path("p/B#top"), "p/B");
/// ```
pub fn link_path(link: &str) -> &str {
    let link = normalize_link(link);
    let end = link.find(|c: char| c == '?' || c == '#').unwrap_or(link.len());
    let reference = &link[..end];

    let hier_part = match reference.find(':') {
        // A colon before any slash ends the scheme
        Some(colon) if !reference[..colon].contains('/') => &reference[colon + 1..],
        _ => reference,
    };

    match hier_part.strip_prefix("//") {
        Some(authority_and_path) => authority_and_path
            .find('/')
            .map_or("", |slash| &authority_and_path[slash..]),
        None => hier_part,
    }
}

/// Split a raw path into non-empty, percent-decoded segments.
///
/// # Examples
///
/// ```
/// use shortcode::{link_path, path_segments};
///
/// let path = link_path("https://example.com/reel/C%2Dx//");
/// assert_eq!(path_segments(path), vec!["reel", "C-x"]);
/// ```
pub fn path_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(decode_segment)
        .collect()
}

/// The last non-empty segment of a raw path, percent-decoded.
///
/// Trailing slashes are ignored. An empty or root path yields an empty
/// string.
pub fn last_path_component(path: &str) -> String {
    path.split('/')
        .filter(|s| !s.is_empty())
        .last()
        .map(decode_segment)
        .unwrap_or_default()
}

/// Extract the shortcode (last path component) from a link.
///
/// An empty link is an empty reference and yields an empty shortcode.
pub fn shortcode_from_link(link: &str) -> Result<String, ShortcodeError> {
    if normalize_link(link).is_empty() {
        return Ok(String::new());
    }

    parse_link(link)?;
    Ok(last_path_component(link_path(link)))
}

fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}
