//! Core data structures shared by the decoder, encoder and link classifier.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use serde::Deserialize;
use url::Url;

use crate::error::ShortcodeError;

/// A platform media identifier.
///
/// Identifiers are unbounded non-negative integers. Real identifiers fit in
/// 64 bits, but a shortcode of twelve or more symbols does not, so the value
/// is kept in a `BigUint` rather than wrapping silently.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MediaId(BigUint);

impl MediaId {
    /// Create an identifier from an arbitrary precision integer.
    pub fn new(value: BigUint) -> Self {
        Self(value)
    }

    /// The identifier zero (the value of the empty shortcode).
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Whether this identifier is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Borrow the underlying integer.
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Consume the identifier, returning the underlying integer.
    pub fn into_inner(self) -> BigUint {
        self.0
    }

    /// The identifier as a `u64`, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    /// Number of bits needed to represent the identifier.
    pub fn bits(&self) -> u64 {
        self.0.bits()
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MediaId {
    type Err = ShortcodeError;

    /// Parse a decimal identifier. Only ASCII digits are accepted: no sign,
    /// no separators, no surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ShortcodeError::InvalidMediaId(s.to_string()));
        }

        BigUint::parse_bytes(s.as_bytes(), 10)
            .map(Self)
            .ok_or_else(|| ShortcodeError::InvalidMediaId(s.to_string()))
    }
}

impl From<BigUint> for MediaId {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl From<u64> for MediaId {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u128> for MediaId {
    fn from(value: u128) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<MediaId> for BigUint {
    fn from(id: MediaId) -> Self {
        id.0
    }
}

/// How the decoder treats characters outside the shortcode alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Skip unknown characters without touching the accumulator. This is the
    /// behaviour of the original tool and the default.
    #[default]
    Tolerant,
    /// Reject the shortcode at the first unknown character.
    Strict,
}

impl DecodePolicy {
    /// Policy name as used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecodePolicy::Tolerant => "tolerant",
            DecodePolicy::Strict => "strict",
        }
    }
}

impl fmt::Display for DecodePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of media a sharable link points at, taken from the path
/// segment preceding the shortcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// Regular post (`/p/<shortcode>`).
    Post,
    /// Short video (`/reel/<shortcode>`).
    Reel,
    /// Long-form video (`/tv/<shortcode>`).
    Tv,
}

impl MediaKind {
    /// Map a path segment to a media kind.
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "p" => Some(MediaKind::Post),
            "reel" => Some(MediaKind::Reel),
            "tv" => Some(MediaKind::Tv),
            _ => None,
        }
    }

    /// The path segment that introduces this kind of media.
    pub fn segment(&self) -> &'static str {
        match self {
            MediaKind::Post => "p",
            MediaKind::Reel => "reel",
            MediaKind::Tv => "tv",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MediaKind::Post => "post",
            MediaKind::Reel => "reel",
            MediaKind::Tv => "tv",
        };
        f.write_str(name)
    }
}

/// A sharable link recognised as pointing at a single media item.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaLink {
    /// The parsed link
    pub url: Url,
    /// Full hostname (www.example.com)
    pub host: String,
    /// Registrable domain (example.com), if the host has one
    pub domain: Option<String>,
    /// Kind of media the link points at
    pub kind: MediaKind,
    /// Percent-decoded shortcode segment
    pub shortcode: String,
}
