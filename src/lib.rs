//! # subcrate-id
//!
//! Encoding and decoding of hierarchical crate names for URL embedding.
//!
//! Registry crate names may be namespaced with a `/` (`serde/json`), but `/`
//! is also the path-segment separator of the URL scheme, so a namespaced name
//! embedded verbatim would be split by the router into two segments. This
//! crate owns the boundary transform: `/` becomes `~` on the way into a URL
//! and `~` becomes `/` on the way back out.
//!
//! ## Design Principles
//!
//! - The transform is pure, total, and stateless; it never fails
//! - Encoding applies only at URL construction and parsing; API payloads
//!   always carry the logical, unencoded name
//! - The logical and encoded forms are distinct types to prevent mixing
//! - No escaping: a logical name that itself contains `~` does not round-trip
//!   (a documented limitation of the scheme, kept for URL stability)
//!
//! ## Example
//!
//! ```
//! use subcrate_id::{codec, paths, CrateName};
//!
//! let name = CrateName::from("serde/json");
//! assert_eq!(paths::crate_page(&name), "/crates/serde~json");
//!
//! // The router splits on '/', extracts "serde~json", and we decode it back.
//! assert_eq!(codec::decode("serde~json"), "serde/json");
//! ```

pub mod codec;
mod error;
pub mod paths;
mod types;

pub use error::SegmentError;
pub use types::{CrateName, UrlSegment};
