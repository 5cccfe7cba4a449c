//! Reverse-DNS nibble rendering for delegation zone files.
//!
//! Emits the address nibbles least-significant first, dot-separated,
//! terminated by the reverse-lookup domain (`ip6.int.` historically,
//! `ip6.arpa.` today). The rendered range follows the structure's
//! `bit_start`/`bit_end` fields; the defaults cover all 32 nibbles.

use super::FormatOptions;
use crate::addr::Ipv6Address;

/// Trailing reverse-lookup domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NibbleDomain {
    /// Historic `ip6.int.` tree.
    Int,
    /// Current `ip6.arpa.` tree.
    #[default]
    Arpa,
}

impl NibbleDomain {
    fn suffix(&self) -> &'static str {
        match self {
            NibbleDomain::Int => "ip6.int.",
            NibbleDomain::Arpa => "ip6.arpa.",
        }
    }
}

/// Render the print range of an address as dot-separated reverse nibbles.
///
/// # Example
///
/// ```
/// use addrcalc_core::{parse, reverse_nibbles, FormatOptions, NibbleDomain};
///
/// let addr = parse("2001:db8::1").unwrap();
/// let zone = reverse_nibbles(&addr, NibbleDomain::Arpa, &FormatOptions::default());
/// assert!(zone.starts_with("1.0.0.0."));
/// assert!(zone.ends_with("8.b.d.0.1.0.0.2.ip6.arpa."));
/// ```
pub fn reverse_nibbles(
    addr: &Ipv6Address,
    domain: NibbleDomain,
    options: &FormatOptions,
) -> String {
    let first = usize::from(addr.bit_start.saturating_sub(1)) / 4;
    let last = usize::from(addr.bit_end.saturating_sub(1)) / 4;

    let mut out = String::with_capacity(2 * (last - first + 1) + 9);
    let mut n = last + 1;
    while n > first {
        n -= 1;
        let octet = addr.octet(n / 2);
        let nibble = if n % 2 == 0 { octet >> 4 } else { octet & 0x0F };
        out.push(char::from_digit(u32::from(nibble), 16).unwrap_or('0'));
        out.push('.');
    }
    out.push_str(domain.suffix());
    options.finish(out)
}
