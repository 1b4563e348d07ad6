//! Shortcode decoding.
//!
//! A shortcode is a base-64 numeral over [`ALPHABET`](crate::core::alphabet::ALPHABET),
//! most significant symbol first. Decoding links goes through
//! [`shortcode_from_link`] to find the shortcode, then accumulates digit
//! values into an arbitrary precision integer.

use num_bigint::BigUint;
use tracing::{debug, trace, warn};

use crate::core::alphabet::{symbol_value, RADIX};
use crate::error::ShortcodeError;
use crate::types::{DecodePolicy, MediaId};
use crate::url::utils::shortcode_from_link;

/// Decode a link into its media identifier as a decimal string.
///
/// The link's last path component is read as a shortcode. Characters outside
/// the alphabet are skipped. Returns `None` only when `link` cannot be parsed
/// as a URL reference at all.
///
/// # Examples
///
/// ```
/// use shortcode::decode;
///
/// let id = decode("https://example.com/p/CKg54_Ch4HE/");
/// assert_eq!(id.as_deref(), Some("2495248798193254852"));
/// assert_eq!(decode("B").as_deref(), Some("1"));
/// assert_eq!(decode("not a url"), None);
/// ```
pub fn decode(link: &str) -> Option<String> {
    match try_decode(link) {
        Ok(id) => Some(id.to_string()),
        Err(err) => {
            debug!(%link, error = %err, "link could not be decoded");
            None
        }
    }
}

/// Decode a link into its media identifier, reporting why decoding failed.
///
/// Uses the tolerant policy, so the only possible failure is a link that
/// cannot be parsed.
pub fn try_decode(link: &str) -> Result<MediaId, ShortcodeError> {
    try_decode_with_policy(link, DecodePolicy::Tolerant)
}

/// Decode a link into its media identifier under the given policy.
pub fn try_decode_with_policy(link: &str, policy: DecodePolicy) -> Result<MediaId, ShortcodeError> {
    let shortcode = shortcode_from_link(link)?;
    decode_shortcode(&shortcode, policy)
}

/// Decode a bare shortcode under the given policy.
///
/// # Examples
///
/// ```
/// use shortcode::{decode_shortcode, DecodePolicy, MediaId, ShortcodeError};
///
/// let id = decode_shortcode("BA", DecodePolicy::Strict)?;
/// assert_eq!(id, MediaId::from(64u64));
///
/// let err = decode_shortcode("A!B", DecodePolicy::Strict).unwrap_err();
/// assert_eq!(err, ShortcodeError::InvalidCharacter { character: '!', position: 1 });
/// # Ok::<(), ShortcodeError>(())
/// ```
pub fn decode_shortcode(shortcode: &str, policy: DecodePolicy) -> Result<MediaId, ShortcodeError> {
    let mut acc = BigUint::default();
    let mut skipped = 0usize;

    for (position, character) in shortcode.chars().enumerate() {
        let Some(value) = symbol_value(character) else {
            match policy {
                DecodePolicy::Strict => {
                    return Err(ShortcodeError::InvalidCharacter { character, position });
                }
                DecodePolicy::Tolerant => {
                    trace!(?character, position, "skipping character outside alphabet");
                    skipped += 1;
                    continue;
                }
            }
        };

        acc *= RADIX;
        acc += u32::from(value);
    }

    if skipped > 0 {
        warn!(%shortcode, skipped, "shortcode contained characters outside the alphabet");
    }

    let id = MediaId::new(acc);
    debug!(%shortcode, %id, "decoded shortcode");
    Ok(id)
}

/// Decode a bare shortcode, skipping unknown characters. Never fails.
pub fn decode_numeric(shortcode: &str) -> MediaId {
    // The tolerant policy has no error path
    decode_shortcode(shortcode, DecodePolicy::Tolerant).unwrap_or_default()
}
