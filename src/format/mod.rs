//! Structure to text rendering.
//!
//! The main entry point is [`render`], which produces the colon-hex form
//! in [full](RenderMode::Full), [prefix-only](RenderMode::PrefixOnly), or
//! [suffix-only](RenderMode::SuffixOnly) mode. Compat/mapped addresses
//! get their final 32 bits rendered as a dotted-decimal quad. Two
//! standalone renderers emit the bare 64-bit token and the octal escape
//! string; [`reverse_nibbles`] covers DNS delegation zones.

mod nibble;

pub use nibble::{reverse_nibbles, NibbleDomain};

use crate::addr::Ipv6Address;
use crate::classify::TypeFlags;
use crate::error::RenderError;

/// Which part of the address to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// All eight words.
    #[default]
    Full,
    /// Only the words covered by the prefix length.
    PrefixOnly,
    /// Only the words past the prefix length.
    SuffixOnly,
}

/// Hex digit case of rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterCase {
    #[default]
    Lower,
    Upper,
}

/// Group digit width of rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupWidth {
    /// Accepted for option parity with the compressed output format; this
    /// renderer never re-introduces `::`, so it behaves like
    /// [`GroupWidth::Uncompressed`].
    Compressed,
    /// Minimal hex digits per group.
    #[default]
    Uncompressed,
    /// Every group zero-padded to four digits.
    FullUncompressed,
}

/// Case and width switches for [`render`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    pub case: LetterCase,
    pub width: GroupWidth,
}

impl FormatOptions {
    fn padded(&self) -> bool {
        matches!(self.width, GroupWidth::FullUncompressed)
    }

    /// Apply the case option to finished output. Never called on error
    /// paths, so error text keeps its own case.
    fn finish(&self, mut rendered: String) -> String {
        if self.case == LetterCase::Upper {
            rendered.make_ascii_uppercase();
        }
        rendered
    }
}

/// Render an address in the requested mode.
///
/// # Example
///
/// ```
/// use addrcalc_core::{parse, render, FormatOptions, RenderMode};
///
/// let addr = parse("2001:db8::1").unwrap();
/// let text = render(&addr, RenderMode::Full, &FormatOptions::default()).unwrap();
/// assert_eq!(text, "2001:db8:0:0:0:0:0:1");
/// ```
pub fn render(
    addr: &Ipv6Address,
    mode: RenderMode,
    options: &FormatOptions,
) -> Result<String, RenderError> {
    let rendered = match mode {
        RenderMode::Full => render_full(addr, options),
        RenderMode::PrefixOnly => render_prefix(addr, options)?,
        RenderMode::SuffixOnly => render_suffix(addr, options)?,
    };
    Ok(options.finish(rendered))
}

/// Render the lowest 64 bits (words 4..=7) as a bare 16-digit hex token.
pub fn to_token(addr: &Ipv6Address, options: &FormatOptions) -> String {
    let token = format!(
        "{:04x}{:04x}{:04x}{:04x}",
        addr.word(4),
        addr.word(5),
        addr.word(6),
        addr.word(7)
    );
    options.finish(token)
}

/// Render all sixteen octets as `\ooo` escapes in unpadded octal, the
/// traditional DNS zone-file notation.
pub fn to_octal(addr: &Ipv6Address) -> String {
    let mut out = String::with_capacity(16 * 4);
    for i in 0..16 {
        out.push('\\');
        out.push_str(&format!("{:o}", addr.octet(i)));
    }
    out
}

fn is_compat_or_mapped(addr: &Ipv6Address) -> bool {
    addr.scope
        .intersects(TypeFlags::COMPATV4 | TypeFlags::MAPPED)
}

fn hex_word(word: u16, padded: bool) -> String {
    if padded {
        format!("{word:04x}")
    } else {
        format!("{word:x}")
    }
}

fn dotted_quad(addr: &Ipv6Address) -> String {
    format!(
        "{}.{}.{}.{}",
        addr.octet(12),
        addr.octet(13),
        addr.octet(14),
        addr.octet(15)
    )
}

fn render_full(addr: &Ipv6Address, options: &FormatOptions) -> String {
    let padded = options.padded();
    let mut out = if is_compat_or_mapped(addr) {
        let words: Vec<String> = (0..6).map(|i| hex_word(addr.word(i), padded)).collect();
        format!("{}:{}", words.join(":"), dotted_quad(addr))
    } else {
        (0..8)
            .map(|i| hex_word(addr.word(i), padded))
            .collect::<Vec<_>>()
            .join(":")
    };

    if addr.prefix_in_use {
        out.push('/');
        out.push_str(&addr.prefix_length.to_string());
    }
    out
}

fn render_prefix(addr: &Ipv6Address, options: &FormatOptions) -> Result<String, RenderError> {
    if is_compat_or_mapped(addr) && addr.prefix_length > 96 {
        return Err(RenderError::CompatPrefixTooLong { part: "prefix" });
    }
    if addr.prefix_length == 0 {
        return Err(RenderError::PrefixLengthZero);
    }

    let padded = options.padded();
    let last = usize::from((addr.prefix_length - 1) / 16);
    Ok((0..=last)
        .map(|i| hex_word(addr.word(i), padded))
        .collect::<Vec<_>>()
        .join(":"))
}

fn render_suffix(addr: &Ipv6Address, options: &FormatOptions) -> Result<String, RenderError> {
    if is_compat_or_mapped(addr) && addr.prefix_length > 96 {
        return Err(RenderError::CompatPrefixTooLong { part: "suffix" });
    }
    if addr.prefix_length == 128 {
        return Err(RenderError::PrefixLengthFull);
    }

    let padded = options.padded();
    let mut out = String::new();
    let mut i = usize::from(addr.prefix_length / 16);
    while i <= 7 {
        if !out.is_empty() {
            out.push(':');
        }
        if is_compat_or_mapped(addr) && i == 6 {
            // the embedded v4 part renders as one dotted quad and ends
            // the suffix
            out.push_str(&dotted_quad(addr));
            break;
        }
        out.push_str(&hex_word(addr.word(i), padded));
        i += 1;
    }
    Ok(out)
}
