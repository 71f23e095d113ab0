//! Immutable URL values.
//!
//! Parse once, then derive modified copies with `with_*` methods:
//!
//! ```
//! use urlvalue::UrlValue;
//!
//! let url: UrlValue = "https://example.com/search?q=rust".parse()?;
//! let next = url
//!     .with_query_parameter("page", Some("2"))
//!     .without_query_parameter("q");
//!
//! assert_eq!(url.query(), "q=rust");
//! assert_eq!(next.to_string(), "https://example.com/search?page=2");
//! # Ok::<(), urlvalue::ParseError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod error;
mod helpers;
mod parser;
mod percent_encode;
mod serializer;

mod codec;
mod query_map;
mod url_components;
mod url_value;

// Public API
pub use codec::{StandardCodec, UrlCodec};
pub use error::{ParseError, Result};
pub use query_map::QueryMap;
pub use url_components::UrlComponents;
pub use url_value::UrlValue;
