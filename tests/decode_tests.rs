//! Decoding tests for links and bare shortcodes.

use shortcode::*;

#[test]
fn test_regression_fixture() {
    // Pinned output of the original decoder for this literal input
    assert_eq!(decode("CKg54_Ch4HE").as_deref(), Some("2495248798193254852"));
    assert_eq!(
        decode("https://example.com/p/CKg54_Ch4HE").as_deref(),
        Some("2495248798193254852")
    );
}

#[test]
fn test_single_symbol_values() {
    assert_eq!(decode("").as_deref(), Some("0"));
    assert_eq!(decode("A").as_deref(), Some("0"));
    assert_eq!(decode("B").as_deref(), Some("1"));
    assert_eq!(decode("_").as_deref(), Some("63"));
}

#[test]
fn test_malformed_input_returns_none() {
    assert_eq!(decode("not a url"), None);
    assert_eq!(decode("https://"), None);
    assert_eq!(decode("https://example.com/p/CKg54 Ch4HE"), None);
}

#[test]
fn test_tolerant_policy_skips_unknown_characters() {
    // Inherited behaviour: '!' is skipped rather than rejected
    assert_eq!(decode("A!B"), decode("AB"));
    assert_eq!(decode("A!B").as_deref(), Some("1"));
    assert_eq!(decode("https://example.com/p/!!!").as_deref(), Some("0"));
    assert_eq!(
        try_decode("https://example.com/p/CKg54_Ch4HE.").unwrap(),
        try_decode("https://example.com/p/CKg54_Ch4HE").unwrap()
    );
}

#[test]
fn test_strict_policy_rejects_unknown_characters() {
    assert_eq!(
        try_decode_with_policy("A!B", DecodePolicy::Strict),
        Err(ShortcodeError::InvalidCharacter { character: '!', position: 1 })
    );
    assert_eq!(
        try_decode_with_policy("https://example.com/p/CKg54_Ch4HE/", DecodePolicy::Strict)
            .unwrap()
            .to_string(),
        "2495248798193254852"
    );
}

#[test]
fn test_link_shapes_share_a_shortcode() {
    let links = [
        "https://example.com/p/CKg54_Ch4HE",
        "https://example.com/p/CKg54_Ch4HE/",
        "https://www.example.com/reel/CKg54_Ch4HE/?igsh=MWZ5",
        "https://example.com/tv/CKg54_Ch4HE#comments",
        "  https://example.com/p/CKg54_Ch4HE/\n",
        "p/CKg54_Ch4HE",
        "/p/CKg54_Ch4HE/",
    ];

    for link in links {
        assert_eq!(
            decode(link).as_deref(),
            Some("2495248798193254852"),
            "link {:?}",
            link
        );
    }
}

#[test]
fn test_root_links_decode_to_zero() {
    assert_eq!(decode("https://example.com").as_deref(), Some("0"));
    assert_eq!(decode("https://example.com/").as_deref(), Some("0"));
}

#[test]
fn test_identifiers_beyond_u64() {
    let id = try_decode("___________").unwrap();
    assert_eq!(id.to_string(), "73786976294838206463");
    assert_eq!(id.to_u64(), None);

    let max = try_decode("P__________").unwrap();
    assert_eq!(max.to_u64(), Some(u64::MAX));
}

#[test]
fn test_decode_numeric_matches_link_decoding() {
    for shortcode in ["B", "BA", "CKg54_Ch4HE", "-_-_"] {
        assert_eq!(
            decode_numeric(shortcode).to_string(),
            decode(shortcode).unwrap(),
            "shortcode {}",
            shortcode
        );
    }
}

#[test]
fn test_trailing_dot_segments_are_the_shortcode() {
    // '.' is outside the alphabet, so a trailing dot segment decodes to zero
    // instead of falling back to the segment before it
    let links = [
        "https://example.com/p/B/..",
        "https://example.com/p/B/../",
        "https://example.com/p/B/.",
        "https://example.com/p/B/%2e%2e",
        "https://example.com/p/B/%2E",
        "p/B/..",
        "/p/B/.?x=1",
    ];

    for link in links {
        assert_eq!(decode(link).as_deref(), Some("0"), "link {:?}", link);
    }

    assert_eq!(
        try_decode_with_policy("https://example.com/p/B/..", DecodePolicy::Strict),
        Err(ShortcodeError::InvalidCharacter { character: '.', position: 0 })
    );
}

#[test]
fn test_inner_dot_segments_are_not_resolved() {
    assert_eq!(
        decode("https://example.com/p/../CKg54_Ch4HE").as_deref(),
        Some("2495248798193254852")
    );
    assert_eq!(decode("https://example.com/p/B/./C").as_deref(), Some("2"));
}
