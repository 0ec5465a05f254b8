//! Route decoding: turns a raw location fragment into an index key.
//!
//! The fragment may carry a leading `#` and percent-encoded bytes. Decoding
//! is the only canonicalization applied before the exact-match lookup.

use crate::tree::{FlatIndex, Lookup};
use tracing::debug;

/// Decode a raw route into a full path.
///
/// Returns None when nothing is selected (empty fragment) or when the
/// fragment does not decode to valid UTF-8.
pub fn decode_route(raw: &str) -> Option<String> {
    let fragment = raw.strip_prefix('#').unwrap_or(raw);
    if fragment.is_empty() {
        return None;
    }
    match urlencoding::decode(fragment) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(e) => {
            debug!(route = raw, error = %e, "Route is not valid UTF-8 after decoding");
            None
        }
    }
}

/// Encode a full path as a route fragment (without the leading `#`).
///
/// Separators stay literal so routes remain readable.
pub fn encode_route(full_path: &str) -> String {
    full_path
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Resolve a raw route against an index.
pub fn resolve_route<'a>(index: &FlatIndex<'a>, raw: &str) -> Lookup<'a> {
    match decode_route(raw) {
        Some(full_path) => index.resolve(&full_path),
        None => Lookup::NotFound,
    }
}
