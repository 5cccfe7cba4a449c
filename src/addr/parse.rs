//! Text to address-structure parsing.
//!
//! Accepts colon-hex notation with an optional `::` compression marker,
//! an optional trailing dotted quad (compat/mapped forms), and an
//! optional `/prefixlen` suffix. Two thin wrappers accept the fixed-width
//! token form (lowest 64 bits as 16 hex digits) and a bare interface
//! identifier; both build a canonical string and delegate to [`parse`].
//!
//! Validation is strict: after expansion the text must contain exactly
//! 7 colons and no dots, or exactly 6 colons and 3 dots. Every group must
//! scan as hex within 16 bits, every quad octet as decimal within 8 bits.

use tracing::{debug, trace};

use super::Ipv6Address;
use crate::classify::classify;
use crate::error::ParseError;

/// Longest accepted input, in characters.
pub const MAX_INPUT_LEN: usize = 1024;

/// Parse an address string into a classified [`Ipv6Address`].
///
/// On success the returned address is marked valid, carries its
/// classification in `scope`, and records a supplied `/prefixlen` in
/// `prefix_length`/`prefix_in_use`.
///
/// # Example
///
/// ```
/// use addrcalc_core::parse;
///
/// let addr = parse("2001:db8::1/64").unwrap();
/// assert!(addr.valid);
/// assert_eq!(addr.word(0), 0x2001);
/// assert_eq!(addr.word(7), 0x0001);
/// assert_eq!(addr.prefix_length, 64);
/// ```
pub fn parse(input: &str) -> Result<Ipv6Address, ParseError> {
    trace!(input, "parsing address");

    if input.len() > MAX_INPUT_LEN {
        return Err(ParseError::InputTooLong {
            length: input.len(),
            limit: MAX_INPUT_LEN,
        });
    }

    let mut addr = Ipv6Address::new();

    let (addr_text, prefix_text) = match input.split_once('/') {
        Some((text, prefix)) => (text, Some(prefix)),
        None => (input, None),
    };

    if let Some(prefix) = prefix_text {
        let length = prefix
            .parse::<u32>()
            .map_err(|_| ParseError::IllegalPrefixLength(prefix.to_string()))?;
        if length > 128 {
            return Err(ParseError::IllegalPrefixLength(prefix.to_string()));
        }
        addr.prefix_length = length as u8;
        addr.prefix_in_use = true;
        trace!(prefix_length = length, "prefix length supplied");
    }

    let compressed = addr_text.contains("::");
    let expanded = if compressed {
        let expanded = expand_compressed(addr_text)?;
        debug!(%expanded, "expanded compressed address");
        expanded
    } else {
        addr_text.to_string()
    };

    let colons = expanded.matches(':').count();
    let dots = expanded.matches('.').count();
    if !((colons == 7 && dots == 0) || (colons == 6 && dots == 3)) {
        // report the expansion when the user never typed the bad shape
        return Err(if compressed {
            ParseError::InvalidExpansion { expanded }
        } else {
            ParseError::InvalidAddress {
                input: addr_text.to_string(),
            }
        });
    }

    let mut words = [0u16; 8];
    if colons == 6 {
        // compat/mapped: six hex groups, then a dotted quad in the last
        // two word slots
        let pieces: Vec<&str> = expanded.split(':').collect();
        for (i, group) in pieces[..6].iter().enumerate() {
            words[i] = scan_hex_word(group, i)?;
        }
        let quad = pieces[6];
        let octet_texts: Vec<&str> = quad.split('.').collect();
        if octet_texts.len() != 4 {
            return Err(ParseError::InvalidQuad {
                quad: quad.to_string(),
            });
        }
        let mut quad_octets = [0u32; 4];
        for (i, text) in octet_texts.iter().enumerate() {
            let value = text.parse::<u32>().map_err(|_| ParseError::InvalidOctet {
                octet: text.to_string(),
                position: i,
            })?;
            if value > 255 {
                return Err(ParseError::OctetOutOfRange { position: i, value });
            }
            quad_octets[i] = value;
        }
        words[6] = ((quad_octets[0] << 8) | quad_octets[1]) as u16;
        words[7] = ((quad_octets[2] << 8) | quad_octets[3]) as u16;
    } else {
        for (i, group) in expanded.split(':').enumerate() {
            words[i] = scan_hex_word(group, i)?;
        }
    }

    for (i, word) in words.iter().enumerate() {
        addr.set_word(i, *word);
    }

    addr.scope = classify(&addr);
    addr.valid = true;
    debug!(scope = ?addr.scope, "parsed address");
    Ok(addr)
}

/// Parse a fixed 16-hex-character token into the lowest 64 bits of an
/// address (words 4..=7); the upper four words are zero.
pub fn parse_token(input: &str) -> Result<Ipv6Address, ParseError> {
    trace!(input, "parsing token");

    if input.len() != 16 || !input.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseError::InvalidToken(input.to_string()));
    }

    let mut text = String::with_capacity(8 + 20);
    text.push_str("0:0:0:0");
    for chunk in 0..4 {
        text.push(':');
        text.push_str(&input[chunk * 4..chunk * 4 + 4]);
    }
    parse(&text)
}

/// Parse a bare interface identifier (at most 19 characters, the width of
/// four colon-separated groups) into the lowest 64 bits of an address.
pub fn parse_identifier(input: &str) -> Result<Ipv6Address, ParseError> {
    trace!(input, "parsing identifier");

    if input.len() > 19 {
        return Err(ParseError::IdentifierTooLong(input.to_string()));
    }
    parse(&format!("0:0:0:0:{input}"))
}

/// Expand the single `::` marker into the zero groups needed to reach the
/// canonical 8-group (or 6-group-plus-quad) form.
fn expand_compressed(text: &str) -> Result<String, ParseError> {
    let marker = match text.find("::") {
        Some(index) => index,
        None => return Ok(text.to_string()),
    };
    if text[marker + 2..].contains("::") {
        return Err(ParseError::MultipleCompressionMarkers(text.to_string()));
    }

    let left = &text[..marker];
    let right = &text[marker + 2..];
    let left_groups: Vec<&str> = if left.is_empty() {
        Vec::new()
    } else {
        left.split(':').collect()
    };
    let right_groups: Vec<&str> = if right.is_empty() {
        Vec::new()
    } else {
        right.split(':').collect()
    };

    // a trailing dotted quad occupies the slots of the final two words
    let total: usize = if text.contains('.') { 7 } else { 8 };
    let present = left_groups.len() + right_groups.len();
    let missing = match total.checked_sub(present) {
        Some(missing) => missing,
        None => {
            return Err(ParseError::TooManyGroups {
                input: text.to_string(),
            })
        }
    };

    let mut groups: Vec<&str> = Vec::with_capacity(total);
    groups.extend(&left_groups);
    groups.resize(left_groups.len() + missing, "0");
    groups.extend(&right_groups);
    Ok(groups.join(":"))
}

/// Scan one colon-separated group as a 16-bit hex word.
fn scan_hex_word(group: &str, position: usize) -> Result<u16, ParseError> {
    let value = u32::from_str_radix(group, 16).map_err(|_| ParseError::InvalidGroup {
        group: group.to_string(),
        position,
    })?;
    if value > 0xFFFF {
        return Err(ParseError::WordOutOfRange { position, value });
    }
    Ok(value as u16)
}
