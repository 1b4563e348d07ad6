//! Shortcode encoding, the inverse of [`decode_shortcode`](crate::core::decoder::decode_shortcode).

use num_traits::Zero;
use tracing::debug;

use crate::core::alphabet::{symbol_for, RADIX, ZERO_SYMBOL};
use crate::error::ShortcodeError;
use crate::types::MediaId;

/// Encode a media identifier as a shortcode.
///
/// The result has no leading zero symbols; zero itself encodes as `"A"`.
///
/// # Examples
///
/// ```
/// use shortcode::{encode, MediaId};
///
/// assert_eq!(encode(&MediaId::from(2495248798193254852u64)), "CKg54_Ch4HE");
/// assert_eq!(encode(&MediaId::from(64u64)), "BA");
/// assert_eq!(encode(&MediaId::zero()), "A");
/// ```
pub fn encode(media_id: &MediaId) -> String {
    let value = media_id.as_biguint();
    if value.is_zero() {
        return ZERO_SYMBOL.to_string();
    }

    // to_radix_be yields digits in 0..RADIX, so every lookup succeeds
    let shortcode: String = value
        .to_radix_be(RADIX)
        .into_iter()
        .filter_map(|digit| symbol_for(u32::from(digit)))
        .collect();

    debug!(%media_id, %shortcode, "encoded media id");
    shortcode
}

/// Encode a media identifier, left-padding with `A` to at least `width`
/// symbols.
///
/// The platform's own shortcodes for 64-bit identifiers are eleven symbols
/// long, so `encode_with_width(id, 11)` reproduces them including leading
/// `A`s. Identifiers that need more than `width` symbols are not truncated.
pub fn encode_with_width(media_id: &MediaId, width: usize) -> String {
    let shortcode = encode(media_id);
    let padding = width.saturating_sub(shortcode.chars().count());
    if padding == 0 {
        return shortcode;
    }

    let mut padded = String::with_capacity(width);
    padded.extend(std::iter::repeat(ZERO_SYMBOL).take(padding));
    padded.push_str(&shortcode);
    padded
}

/// Parse a decimal media identifier and encode it.
pub fn encode_decimal(media_id: &str) -> Result<String, ShortcodeError> {
    let id: MediaId = media_id.parse()?;
    Ok(encode(&id))
}
