//! Version encoding for plugin identity
//!
//! Plugin, API and host versions arrive as free-form strings from the host's
//! plugin metadata. This module turns them into integers that compare the
//! same way the versions do.
//!
//! # Modules
//!
//! - [`encoder`]: `X.Y.Z` parsing and the `X*1_000_000 + Y*1_000 + Z` encoding
//! - [`error`]: `MalformedVersion`, the only failure of the encoder

pub mod encoder;
pub mod error;

pub use encoder::{COMPONENT_LIMIT, ComparableVersion, Version, encode};
pub use error::{MalformedReason, MalformedVersion};
