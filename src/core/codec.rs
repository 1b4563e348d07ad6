//! A configured shortcode codec.
//!
//! [`ShortcodeCodec`] bundles the decode policy, default encode width and
//! domain allow-list so callers construct it once (usually from
//! [`CodecConfig`]) and pass it to whatever needs it.

use crate::config::CodecConfig;
use crate::core::decoder::{decode_shortcode, try_decode_with_policy};
use crate::core::encoder::{encode, encode_with_width};
use crate::error::ShortcodeError;
use crate::types::{DecodePolicy, MediaId, MediaLink};
use crate::url::link::classify_link;

/// A decoded media link together with its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedLink {
    /// The classified link
    pub link: MediaLink,
    /// Identifier decoded from the link's shortcode
    pub media_id: MediaId,
}

/// Shortcode codec configured with a decode policy, an optional encode
/// width and an optional domain allow-list.
///
/// # Examples
///
/// ```
/// use shortcode::{DecodePolicy, MediaId, ShortcodeCodec};
///
/// let codec = ShortcodeCodec::new(DecodePolicy::Strict).with_width(11);
/// let id = codec.decode_link("https://example.com/p/CKg54_Ch4HE/")?;
/// assert_eq!(id.to_string(), "2495248798193254852");
/// assert_eq!(codec.encode(&MediaId::from(1u64)), "AAAAAAAAAAB");
/// # Ok::<(), shortcode::ShortcodeError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShortcodeCodec {
    policy: DecodePolicy,
    width: Option<usize>,
    allowed_domains: Vec<String>,
}

impl ShortcodeCodec {
    /// Create a codec with the given policy, no padding and no allow-list.
    pub fn new(policy: DecodePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Create a codec from configuration.
    pub fn from_config(config: &CodecConfig) -> Self {
        Self {
            policy: config.policy,
            width: config.width,
            allowed_domains: config.allowed_domains.clone(),
        }
    }

    /// Replace the decode policy.
    pub fn with_policy(mut self, policy: DecodePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Pad encoded shortcodes to at least `width` symbols.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Only classify links whose registrable domain is in `domains`.
    pub fn with_allowed_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_domains = domains.into_iter().map(Into::into).collect();
        self
    }

    /// The decode policy in use.
    pub fn policy(&self) -> DecodePolicy {
        self.policy
    }

    /// The encode width in use, if any.
    pub fn width(&self) -> Option<usize> {
        self.width
    }

    /// The domain allow-list (empty means any domain).
    pub fn allowed_domains(&self) -> &[String] {
        &self.allowed_domains
    }

    /// Decode the last path component of a link.
    pub fn decode_link(&self, link: &str) -> Result<MediaId, ShortcodeError> {
        try_decode_with_policy(link, self.policy)
    }

    /// Decode a bare shortcode.
    pub fn decode_shortcode(&self, shortcode: &str) -> Result<MediaId, ShortcodeError> {
        decode_shortcode(shortcode, self.policy)
    }

    /// Encode an identifier, padded to the configured width.
    pub fn encode(&self, media_id: &MediaId) -> String {
        match self.width {
            Some(width) => encode_with_width(media_id, width),
            None => encode(media_id),
        }
    }

    /// Classify a media link against the configured allow-list.
    pub fn classify(&self, link: &str) -> Result<MediaLink, ShortcodeError> {
        classify_link(link, &self.allowed_domains)
    }

    /// Classify a media link and decode its shortcode.
    pub fn inspect(&self, link: &str) -> Result<DecodedLink, ShortcodeError> {
        let link = self.classify(link)?;
        let media_id = self.decode_shortcode(&link.shortcode)?;
        Ok(DecodedLink { link, media_id })
    }
}
