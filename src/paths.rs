//! URL construction and extraction at the routing boundary.
//!
//! The routing scheme mirrors a registry frontend: crate pages live under
//! `/crates/:crate_id` (optionally `/crates/:crate_id/:version_num`) and the
//! REST API under the `api/v1` namespace. Crate ids are the only resource
//! that can contain the delimiter, so they are the only ones encoded here;
//! users, keywords and categories embed as-is.

use crate::codec;
use crate::error::SegmentError;
use crate::types::{CrateName, UrlSegment};

/// The API namespace prefix.
pub const API_NAMESPACE: &str = "api/v1";

/// Route prefix for crate pages.
const CRATES_SEGMENT: &str = "crates";

/// Builds the crate page path: `/crates/{encoded}`.
#[must_use]
pub fn crate_page(name: &CrateName) -> String {
    format!("/{}/{}", CRATES_SEGMENT, name.to_url_segment())
}

/// Builds the path for a specific version page: `/crates/{encoded}/{version}`.
#[must_use]
pub fn crate_version_page(name: &CrateName, version: &str) -> String {
    format!("/{}/{}/{}", CRATES_SEGMENT, name.to_url_segment(), version)
}

/// Builds the API URL for a crate: `/api/v1/crates/{encoded}`.
#[must_use]
pub fn api_crate(name: &CrateName) -> String {
    format!(
        "/{}/{}/{}",
        API_NAMESPACE,
        CRATES_SEGMENT,
        name.to_url_segment()
    )
}

/// Decodes a crate id a router extracted from a single path segment.
///
/// Fails only if the input is not actually a single segment (contains `/`).
pub fn crate_name_from_segment(segment: &str) -> Result<CrateName, SegmentError> {
    Ok(UrlSegment::parse(segment)?.decode())
}

/// Extracts and decodes the crate id from a full path.
///
/// Looks for the segment immediately following `crates`, so both page paths
/// (`/crates/serde~json/0.6.1`) and API paths (`/api/v1/crates/serde~json`)
/// resolve. Returns `None` when the path has no `crates` segment or nothing
/// follows it.
#[must_use]
pub fn crate_name_from_path(path: &str) -> Option<CrateName> {
    let mut segments = path.split(codec::DELIMITER).filter(|s| !s.is_empty());
    segments
        .by_ref()
        .find(|s| *s == CRATES_SEGMENT)
        .and_then(|_| segments.next())
        .map(|segment| CrateName::from(codec::decode(segment).into_owned()))
}
