//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```rust
//! use addrcalc_core::prelude::*;
//!
//! let addr = parse("2001:db8::1").unwrap();
//! assert!(addr.scope.contains(TypeFlags::UNICAST));
//! ```

// Address structure and parsing
pub use crate::addr::{parse, parse_identifier, parse_token, Ipv6Address};

// Classification
pub use crate::classify::{classify, registry, Registry, TypeFlags};

// Rendering
pub use crate::format::{
    render, reverse_nibbles, to_octal, to_token, FormatOptions, GroupWidth, LetterCase,
    NibbleDomain, RenderMode,
};

// Error types
pub use crate::error::{Error, ParseError, RenderError, Result};
