//! Error types for addrcalc-core.
//!
//! - [`enum@Error`] - umbrella error wrapping the specific kinds
//! - [`ParseError`] - malformed address text
//! - [`RenderError`] - illegal render request for an otherwise valid address
//!
//! Bad input is always a recoverable `Result`; accessor misuse (an
//! out-of-range octet/word/dword index) is a caller bug and panics
//! instead.

use thiserror::Error;

/// Main error type for addrcalc-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Error parsing address text
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error rendering an address
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

/// Errors produced while parsing address text.
///
/// Every variant carries the offending substring or position so the
/// caller can surface a precise diagnostic.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Input exceeds the fixed working-buffer bound
    #[error("input too long ({length} characters, limit {limit})")]
    InputTooLong { length: usize, limit: usize },

    /// Prefix length suffix is not a decimal integer in 0..=128
    #[error("illegal prefix length: '{0}'")]
    IllegalPrefixLength(String),

    /// More than one `::` compression marker
    #[error("more than one '::' in '{0}'")]
    MultipleCompressionMarkers(String),

    /// Too many groups for the `::` marker to expand
    #[error("'{input}' has too many groups to expand '::'")]
    TooManyGroups { input: String },

    /// Expansion produced a string with an invalid group/dot shape
    #[error("given address expanded to '{expanded}' is not valid")]
    InvalidExpansion { expanded: String },

    /// Address text has an invalid group/dot shape
    #[error("given address '{input}' is not valid")]
    InvalidAddress { input: String },

    /// A colon-separated group is not hexadecimal
    #[error("address group '{group}' at position {position} is not valid")]
    InvalidGroup { group: String, position: usize },

    /// A group value does not fit 16 bits
    #[error("address word at position {position} is out of range ({value:#x})")]
    WordOutOfRange { position: usize, value: u32 },

    /// A dotted-quad octet is not decimal
    #[error("IPv4 octet '{octet}' at position {position} is not valid")]
    InvalidOctet { octet: String, position: usize },

    /// A dotted-quad octet does not fit 8 bits
    #[error("IPv4 octet at position {position} is out of range ({value})")]
    OctetOutOfRange { position: usize, value: u32 },

    /// Embedded dotted quad does not have exactly four octets
    #[error("dotted quad '{quad}' does not have four octets")]
    InvalidQuad { quad: String },

    /// Token input is not exactly 16 hex characters
    #[error("given token '{0}' is not valid (expected 16 hex characters)")]
    InvalidToken(String),

    /// Identifier input exceeds the 19-character bound
    #[error("given identifier '{0}' is too long (limit 19 characters)")]
    IdentifierTooLong(String),
}

/// Errors produced by an illegal prefix/suffix render request.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// Prefix-only render of an address with prefix length 0
    #[error("cannot render the prefix of an address with prefix length 0")]
    PrefixLengthZero,

    /// Suffix-only render of an address with prefix length 128
    #[error("cannot render the suffix of an address with prefix length 128")]
    PrefixLengthFull,

    /// Prefix/suffix render of a compat/mapped address past its v4 part
    #[error("cannot render the {part} of a compatv4/mapped address with prefix length greater than 96")]
    CompatPrefixTooLong { part: &'static str },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
