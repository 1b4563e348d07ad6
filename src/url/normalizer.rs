//! Input clean-up and validation for pasted or shared links.

use crate::error::ShortcodeError;

/// Trim the whitespace and newlines that pasted or shared links tend to
/// carry.
pub fn normalize_link(input: &str) -> &str {
    input.trim()
}

/// Whether `c` may appear in an RFC 3986 URI reference.
///
/// Covers the unreserved set, the reserved (general and sub) delimiters and
/// `%` for percent escapes. Whitespace, non-ASCII characters and characters
/// such as `<`, `"` or `{` are not allowed.
pub fn is_uri_reference_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            // unreserved
            '-' | '.' | '_' | '~'
            // gen-delims
            | ':' | '/' | '?' | '#' | '[' | ']' | '@'
            // sub-delims
            | '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '='
            | '%'
        )
}

/// Check that `link` is syntactically a URI reference: only legal
/// characters, and every `%` starts a two-digit hex escape.
///
/// This is stricter than the `url` crate, which silently percent-encodes
/// spaces and other illegal characters instead of rejecting them.
pub fn validate_reference(link: &str) -> Result<(), ShortcodeError> {
    if let Some((position, c)) = link.char_indices().find(|&(_, c)| !is_uri_reference_char(c)) {
        return Err(ShortcodeError::MalformedUrl(format!(
            "character {:?} at byte {} is not allowed in a URL",
            c, position
        )));
    }

    let bytes = link.as_bytes();
    for (position, _) in link.match_indices('%') {
        let escape = bytes.get(position + 1..position + 3);
        let valid = matches!(
            escape,
            Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
        );
        if !valid {
            return Err(ShortcodeError::MalformedUrl(format!(
                "incomplete percent escape at byte {}",
                position
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize_link("  https://example.com/p/B\n"), "https://example.com/p/B");
        assert_eq!(normalize_link("\t\r\n"), "");
    }

    #[test]
    fn test_valid_references() {
        for link in [
            "https://example.com/p/CKg54_Ch4HE/?utm_source=ig_web_copy_link",
            "CKg54_Ch4HE",
            "p/CKg54_Ch4HE",
            "https://example.com/p/A%21B",
            "https://[::1]:8080/p/B",
            "",
        ] {
            assert!(validate_reference(link).is_ok(), "link {:?} should be valid", link);
        }
    }

    #[test]
    fn test_invalid_references() {
        for link in [
            "not a url",
            "https://example.com/p/café",
            "https://example.com/<p>",
            "https://example.com/p/A%2",
            "https://example.com/p/%zz",
            "100%",
        ] {
            assert!(
                matches!(validate_reference(link), Err(ShortcodeError::MalformedUrl(_))),
                "link {:?} should be rejected",
                link
            );
        }
    }
}
