//! Error types for typed segment parsing.
//!
//! The raw codec functions are total and never fail; errors exist only at the
//! typed boundary, where a string claimed to be a single path segment turns
//! out not to be one.

use thiserror::Error;

/// Errors that can occur when parsing a URL path segment into a typed id.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// The segment contains the path delimiter and therefore spans more than
    /// one segment. A router never extracts such a value; receiving one means
    /// the caller passed a path, not a segment.
    #[error("segment '{segment}' contains the path delimiter '/'")]
    ContainsDelimiter { segment: String },
}
