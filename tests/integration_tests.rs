//! End-to-end tests of a configured codec.

use shortcode::*;

#[test]
fn test_codec_from_toml_config() {
    let config = CodecConfig::from_toml_str(
        r#"
        policy = "strict"
        width = 11
        allowed_domains = ["example.com"]
        "#,
    )
    .unwrap();
    let codec = ShortcodeCodec::from_config(&config);

    let decoded = codec
        .inspect("https://www.example.com/p/CKg54_Ch4HE/?igsh=x")
        .unwrap();
    assert_eq!(decoded.link.kind, MediaKind::Post);
    assert_eq!(decoded.media_id.to_string(), "2495248798193254852");

    assert_eq!(codec.encode(&decoded.media_id), "CKg54_Ch4HE");
    assert_eq!(codec.encode(&MediaId::from(64u64)), "AAAAAAAAABA");

    assert_eq!(
        codec.decode_link("https://example.com/p/CKg5!"),
        Err(ShortcodeError::InvalidCharacter { character: '!', position: 4 })
    );
}

#[test]
fn test_strict_inspect_rejects_bad_shortcode() {
    let codec = ShortcodeCodec::new(DecodePolicy::Strict);
    assert_eq!(
        codec.inspect("https://example.com/reel/CK~g/").map(|d| d.media_id),
        Err(ShortcodeError::InvalidCharacter { character: '~', position: 2 })
    );

    let tolerant = ShortcodeCodec::default();
    assert_eq!(
        tolerant.inspect("https://example.com/reel/CK~g/").unwrap().media_id,
        decode_numeric("CKg")
    );
}

#[test]
fn test_codec_is_shareable_across_threads() {
    let codec = std::sync::Arc::new(ShortcodeCodec::default());
    let handles: Vec<_> = (0..4u64)
        .map(|n| {
            let codec = codec.clone();
            std::thread::spawn(move || codec.encode(&MediaId::from(n)))
        })
        .collect();

    let shortcodes: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(shortcodes, vec!["A", "B", "C", "D"]);
}
