//! Typed wrappers for the logical and URL-safe forms of a crate name.
//!
//! The two forms are distinct types so the compiler prevents mixing them:
//! a [`CrateName`] is what the backing API knows the resource as and may
//! contain `/`; a [`UrlSegment`] is what goes into a URL path and never does.

use std::fmt;
use std::str::FromStr;

use crate::codec::{self, DELIMITER};
use crate::error::SegmentError;

/// A logical crate name, as known to the backing service.
///
/// Opaque and user-controlled: any string is a valid name, including the
/// empty string and names containing the hierarchical delimiter
/// (`namespace/subcrate`). Serialized as the plain logical string, since API
/// payloads carry the unencoded form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CrateName(String);

impl CrateName {
    /// Creates a name from any string.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// Returns the logical name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name is hierarchical (contains the delimiter).
    #[must_use]
    pub fn is_namespaced(&self) -> bool {
        self.0.contains(DELIMITER)
    }

    /// The namespace portion of a hierarchical name, if any.
    ///
    /// For `serde/json` this is `Some("serde")`; splits on the first
    /// delimiter only, so `a/b/c` yields `Some("a")`.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.0.split_once(DELIMITER).map(|(ns, _)| ns)
    }

    /// The subcrate portion of a hierarchical name, if any.
    ///
    /// For `serde/json` this is `Some("json")`; for `a/b/c` it is
    /// `Some("b/c")`.
    #[must_use]
    pub fn subcrate(&self) -> Option<&str> {
        self.0.split_once(DELIMITER).map(|(_, sub)| sub)
    }

    /// Encodes the name into its URL-safe form.
    #[must_use]
    pub fn to_url_segment(&self) -> UrlSegment {
        UrlSegment(codec::encode(&self.0).into_owned())
    }
}

impl From<String> for CrateName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for CrateName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<CrateName> for String {
    fn from(name: CrateName) -> Self {
        name.0
    }
}

impl fmt::Display for CrateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl serde::Serialize for CrateName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for CrateName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self(s))
    }
}

/// The URL-safe form of a crate name, valid as a single path segment.
///
/// Invariant: never contains the path delimiter `/`. Produced by encoding a
/// [`CrateName`], or parsed from a segment a router extracted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UrlSegment(String);

impl UrlSegment {
    /// Returns the encoded form as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes back into the logical name.
    #[must_use]
    pub fn decode(&self) -> CrateName {
        CrateName(codec::decode(&self.0).into_owned())
    }

    /// Parses a path segment.
    ///
    /// The segment must not contain the delimiter; a router splitting a path
    /// on `/` can never hand one over, so a delimiter here is a caller bug
    /// (a whole path passed where a segment was expected).
    pub fn parse(segment: &str) -> Result<Self, SegmentError> {
        if segment.contains(DELIMITER) {
            return Err(SegmentError::ContainsDelimiter {
                segment: segment.to_string(),
            });
        }
        Ok(Self(segment.to_string()))
    }
}

impl From<&CrateName> for UrlSegment {
    fn from(name: &CrateName) -> Self {
        name.to_url_segment()
    }
}

impl fmt::Display for UrlSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for UrlSegment {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for UrlSegment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for UrlSegment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip_through_segment() {
        let name = CrateName::from("serde/json");
        let segment = name.to_url_segment();
        assert_eq!(segment.as_str(), "serde~json");
        assert_eq!(segment.decode(), name);
    }

    #[test]
    fn test_plain_name_unchanged() {
        let name = CrateName::from("tokio");
        assert_eq!(name.to_url_segment().as_str(), "tokio");
        assert!(!name.is_namespaced());
    }

    #[test]
    fn test_namespace_accessors() {
        let name = CrateName::from("serde/json");
        assert!(name.is_namespaced());
        assert_eq!(name.namespace(), Some("serde"));
        assert_eq!(name.subcrate(), Some("json"));

        let deep = CrateName::from("a/b/c");
        assert_eq!(deep.namespace(), Some("a"));
        assert_eq!(deep.subcrate(), Some("b/c"));

        let plain = CrateName::from("tokio");
        assert_eq!(plain.namespace(), None);
        assert_eq!(plain.subcrate(), None);
    }

    #[test]
    fn test_segment_rejects_delimiter() {
        let result: Result<UrlSegment, _> = "serde/json".parse();
        assert!(matches!(
            result.unwrap_err(),
            SegmentError::ContainsDelimiter { .. }
        ));
    }

    #[test]
    fn test_segment_accepts_encoded_form() {
        let segment: UrlSegment = "serde~json".parse().unwrap();
        assert_eq!(segment.decode().as_str(), "serde/json");
    }

    #[test]
    fn test_empty_name() {
        let name = CrateName::from("");
        assert_eq!(name.to_url_segment().as_str(), "");
        assert_eq!(name.to_url_segment().decode().as_str(), "");
    }

    #[test]
    fn test_name_json_roundtrip() {
        let name = CrateName::from("serde/json");
        let json = serde_json::to_string(&name).unwrap();
        // payloads carry the logical, unencoded form
        assert_eq!(json, "\"serde/json\"");
        let parsed: CrateName = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, name);
    }

    #[test]
    fn test_segment_json_roundtrip() {
        let segment = CrateName::from("serde/json").to_url_segment();
        let json = serde_json::to_string(&segment).unwrap();
        assert_eq!(json, "\"serde~json\"");
        let parsed: UrlSegment = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, segment);
    }

    #[test]
    fn test_segment_json_rejects_delimiter() {
        let result: Result<UrlSegment, _> = serde_json::from_str("\"serde/json\"");
        assert!(result.is_err());
    }
}
