//! Core encode/decode transform between logical and URL-safe names.
//!
//! Both directions are total: any input string is accepted and the functions
//! never fail. Empty input passes through unchanged. The transform is a 1:1
//! single-character substitution, so output length always equals input length.

use std::borrow::Cow;

/// The hierarchical delimiter in logical crate names (`serde/json`).
///
/// This is also the path-segment separator of the URL scheme, which is why a
/// logical name containing it cannot be embedded in a path as-is.
pub const DELIMITER: char = '/';

/// The character substituted for [`DELIMITER`] in URL-safe names.
pub const SUBSTITUTE: char = '~';

/// Encodes a logical name into its URL-safe form.
///
/// Every occurrence of [`DELIMITER`] is replaced with [`SUBSTITUTE`]. Names
/// without a delimiter are returned borrowed, without allocating.
///
/// The inverse is [`decode`]: `decode(encode(s)) == s` holds for every `s`
/// that does not already contain [`SUBSTITUTE`]. The scheme does not escape,
/// so a logical name that legitimately contains `~` will not round-trip.
///
/// ```
/// use subcrate_id::codec::encode;
///
/// assert_eq!(encode("serde/json"), "serde~json");
/// assert_eq!(encode("simple"), "simple");
/// ```
#[must_use]
pub fn encode(id: &str) -> Cow<'_, str> {
    substitute(id, DELIMITER, SUBSTITUTE)
}

/// Decodes a URL-safe name back into its logical form.
///
/// Every occurrence of [`SUBSTITUTE`] is replaced with [`DELIMITER`]. Names
/// without a substitute character are returned borrowed.
///
/// ```
/// use subcrate_id::codec::decode;
///
/// assert_eq!(decode("serde~json"), "serde/json");
/// ```
#[must_use]
pub fn decode(id: &str) -> Cow<'_, str> {
    substitute(id, SUBSTITUTE, DELIMITER)
}

/// Replaces every `from` with `to`, borrowing when nothing matches.
fn substitute(id: &str, from: char, to: char) -> Cow<'_, str> {
    if id.contains(from) {
        Cow::Owned(
            id.chars()
                .map(|c| if c == from { to } else { c })
                .collect(),
        )
    } else {
        Cow::Borrowed(id)
    }
}

/// [`encode`] lifted over an absent identifier.
///
/// Absent stays absent; present strings are encoded. Mirrors call sites that
/// receive an optional id from a router or request and must not invent a
/// value where none was given.
#[must_use]
pub fn encode_opt(id: Option<&str>) -> Option<Cow<'_, str>> {
    id.map(encode)
}

/// [`decode`] lifted over an absent identifier.
#[must_use]
pub fn decode_opt(id: Option<&str>) -> Option<Cow<'_, str>> {
    id.map(decode)
}
