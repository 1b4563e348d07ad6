//! The 64-symbol shortcode alphabet.
//!
//! Same symbol set as URL-safe base64, but in a different order: upper case
//! letters, lower case letters, digits, then `-` and `_`. A symbol's value is
//! its position in [`ALPHABET`].

/// All shortcode symbols, ordered by value.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Numeric base of a shortcode.
pub const RADIX: u32 = 64;

/// Symbol with value zero, used for padding and for the zero identifier.
pub const ZERO_SYMBOL: char = 'A';

const SYMBOLS: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Value of a shortcode symbol, or `None` if `c` is not in the alphabet.
///
/// # Examples
///
/// ```
/// use shortcode::core::alphabet::symbol_value;
///
/// assert_eq!(symbol_value('A'), Some(0));
/// assert_eq!(symbol_value('_'), Some(63));
/// assert_eq!(symbol_value('!'), None);
/// ```
pub fn symbol_value(c: char) -> Option<u8> {
    match c {
        'A'..='Z' => Some(c as u8 - b'A'),
        'a'..='z' => Some(c as u8 - b'a' + 26),
        '0'..='9' => Some(c as u8 - b'0' + 52),
        '-' => Some(62),
        '_' => Some(63),
        _ => None,
    }
}

/// Symbol for a digit value in `0..64`.
///
/// Returns `None` for values outside the alphabet.
pub fn symbol_for(value: u32) -> Option<char> {
    SYMBOLS.get(value as usize).map(|&b| b as char)
}
