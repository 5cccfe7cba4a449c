//! # addrcalc-core
//!
//! Engine-agnostic IPv6/IPv4 address handling library.
//!
//! This crate provides the core conversion functionality for addrcalc,
//! without any CLI or lookup-database dependencies. It can be used
//! standalone for address manipulation or as the foundation for the
//! command-line frontends and log-anonymization tooling.
//!
//! ## Features
//!
//! - **Parsing**: strict colon-hex parsing with `::` compression,
//!   embedded dotted-quad (compat/mapped) forms, `/prefixlen` suffixes,
//!   and token/identifier entry points
//! - **Classification**: IANA address-space type flags (unicast,
//!   multicast, link-local, 6to4, ISATAP, solicited-node, ...) and
//!   allocation-registry lookup
//! - **Rendering**: uncompressed and full-uncompressed colon-hex,
//!   prefix-only and suffix-only projections, 64-bit tokens, octal
//!   escape strings, reverse-DNS nibble zones
//! - **Masking**: bit-exact in-place prefix/suffix masking
//!
//! ## Quick Start
//!
//! ```rust
//! use addrcalc_core::{parse, render, FormatOptions, RenderMode, TypeFlags};
//!
//! let addr = parse("3ffe:ffff:100:f101::1/64").unwrap();
//! assert!(addr.valid);
//! assert!(addr.scope.contains(TypeFlags::SIX_BONE));
//!
//! let text = render(&addr, RenderMode::Full, &FormatOptions::default()).unwrap();
//! assert_eq!(text, "3ffe:ffff:100:f101:0:0:0:1/64");
//!
//! let prefix = render(&addr, RenderMode::PrefixOnly, &FormatOptions::default()).unwrap();
//! assert_eq!(prefix, "3ffe:ffff:100:f101");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +------------------------------------------------------------------+
//! |                         addrcalc-core                            |
//! +------------------------------------------------------------------+
//! |  addr/      - Ipv6Address structure, accessors, parser, masking  |
//! |  classify/  - TypeFlags scope bitmask, registry lookup           |
//! |  format/    - colon-hex, token, octal, reverse-nibble renderers  |
//! |  error/     - Error types                                        |
//! +------------------------------------------------------------------+
//! ```
//!
//! All operations are synchronous, allocation-light value
//! transformations; [`Ipv6Address`] is a plain `Copy` struct and the
//! crate keeps no global state.

pub mod addr;
pub mod classify;
pub mod error;
pub mod format;
pub mod prelude;

// Re-export commonly used types at crate root for convenience
pub use addr::{parse, parse_identifier, parse_token, Ipv6Address, MAX_INPUT_LEN};
pub use classify::{classify, registry, Registry, TypeFlags};
pub use error::{Error, ParseError, RenderError, Result};
pub use format::{
    render, reverse_nibbles, to_octal, to_token, FormatOptions, GroupWidth, LetterCase,
    NibbleDomain, RenderMode,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
