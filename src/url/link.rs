//! Media link classification.
//!
//! A sharable media link has the shape `<scheme>://<host>/.../<kind>/<shortcode>/`
//! where `<kind>` is `p`, `reel` or `tv`. Hosts are reduced to their
//! registrable domain with the Public Suffix List so that allow-lists can
//! name `example.com` and still accept `www.example.com` or `m.example.com`.

use psl::{List, Psl};
use tracing::debug;
use url::{Host, Url};

use crate::error::ShortcodeError;
use crate::types::{MediaKind, MediaLink};
use crate::url::normalizer::normalize_link;
use crate::url::utils::{is_absolute_link, link_path, parse_link, path_segments};

/// Classify a link as a media link.
///
/// With a non-empty `allowed_domains`, the link's registrable domain must
/// match one of the entries (ASCII case-insensitive).
///
/// # Examples
///
/// ```
/// use shortcode::{classify_link, MediaKind};
///
/// let link = classify_link("https://www.example.com/reel/CKg54_Ch4HE/", &[]).unwrap();
/// assert_eq!(link.kind, MediaKind::Reel);
/// assert_eq!(link.domain.as_deref(), Some("example.com"));
/// assert_eq!(link.shortcode, "CKg54_Ch4HE");
/// ```
pub fn classify_link(
    link: &str,
    allowed_domains: &[String],
) -> Result<MediaLink, ShortcodeError> {
    let link = normalize_link(link);
    if link.is_empty() {
        return Err(ShortcodeError::EmptyInput);
    }
    let url = parse_link(link)?;
    if !is_absolute_link(link) {
        let reason = format!("{} is not an absolute URL", link);
        return Err(ShortcodeError::MalformedUrl(reason));
    }

    let host = match url.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => domain.to_string(),
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Ipv6(addr)) => addr.to_string(),
        _ => return Err(ShortcodeError::NotMediaLink(format!("{} has no host", link))),
    };

    let segments = path_segments(link_path(link));
    let (kind, shortcode) = match segments.as_slice() {
        [.., kind, shortcode] => match MediaKind::from_segment(kind) {
            Some(kind) => (kind, shortcode.clone()),
            None => return Err(not_media(&url)),
        },
        _ => return Err(not_media(&url)),
    };

    let domain = match url.host() {
        Some(Host::Domain(name)) => registrable_domain(name),
        _ => None,
    };

    if !allowed_domains.is_empty() {
        let allowed = domain.as_deref().is_some_and(|domain| {
            allowed_domains
                .iter()
                .any(|entry| entry.trim_end_matches('.').eq_ignore_ascii_case(domain))
        });
        if !allowed {
            return Err(ShortcodeError::UnsupportedDomain(host));
        }
    }

    debug!(%host, %kind, %shortcode, "classified media link");

    Ok(MediaLink {
        url,
        host,
        domain,
        kind,
        shortcode,
    })
}

/// Whether a link looks like a media link. Never fails.
pub fn is_media_link(link: &str) -> bool {
    classify_link(link, &[]).is_ok()
}

/// The registrable domain of a host name (public suffix plus one label).
///
/// Uses the Public Suffix List; hosts the list does not recognise fall back
/// to their last two labels. Returns `None` for single-label hosts and bare
/// public suffixes.
///
/// # Examples
///
/// ```
/// use shortcode::registrable_domain;
///
/// assert_eq!(registrable_domain("api.example.co.uk").as_deref(), Some("example.co.uk"));
/// assert_eq!(registrable_domain("localhost"), None);
/// ```
pub fn registrable_domain(host: &str) -> Option<String> {
    let host = host.trim_end_matches('.');

    if let Some(domain) = List.domain(host.as_bytes()) {
        if let Ok(domain) = std::str::from_utf8(domain.as_bytes()) {
            return Some(domain.to_string());
        }
    }

    registrable_domain_fallback(host)
}

fn registrable_domain_fallback(host: &str) -> Option<String> {
    let labels: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).collect();
    if labels.len() < 2 {
        return None;
    }
    Some(labels[labels.len() - 2..].join("."))
}

fn not_media(url: &Url) -> ShortcodeError {
    ShortcodeError::NotMediaLink(url.path().to_string())
}
