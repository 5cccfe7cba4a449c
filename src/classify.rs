//! Address-type classification and registry lookup.
//!
//! [`classify`] is a pure function of the four big-endian 32-bit words of
//! an address. It runs in two passes: address-space flags that stack on
//! top of any category (6bone, 6to4, productive, ISATAP, solicited-node,
//! global-unicast space) are collected first, then an ordered terminal
//! dispatch picks the one exclusive category. Rule order in the terminal
//! dispatch matters and follows the kernel-derived sequence.

use std::fmt;

use bitflags::bitflags;

use crate::addr::Ipv6Address;

bitflags! {
    /// Address-type classification flags.
    ///
    /// The low half holds the exclusive categories and scopes, the high
    /// half the additive address-space flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TypeFlags: u32 {
        const UNICAST = 0x0000_0001;
        const MULTICAST = 0x0000_0002;
        const ANYCAST = 0x0000_0004;
        const LOOPBACK = 0x0000_0010;
        const LINKLOCAL = 0x0000_0020;
        const SITELOCAL = 0x0000_0040;
        const COMPATV4 = 0x0000_0080;
        const MAPPED = 0x0000_1000;
        const RESERVED = 0x0000_2000;
        /// 2002::/16 6to4 tunneling space
        const SIX_TO_FOUR = 0x0001_0000;
        /// 3ffe::/16 experimental 6bone space
        const SIX_BONE = 0x0002_0000;
        /// 2000::/3 aggregatable global unicast space
        const AGU = 0x0004_0000;
        const UNSPECIFIED = 0x0008_0000;
        /// ..:0001:ffxx:xxxx solicited-node suffix
        const SOLICITED_NODE = 0x0010_0000;
        /// ..:5efe:a.b.c.d ISATAP suffix
        const ISATAP = 0x0020_0000;
        /// 2001::/16 productive space
        const PRODUCTIVE = 0x0040_0000;
    }
}

/// Classify an address into its [`TypeFlags`] bitmask.
pub fn classify(addr: &Ipv6Address) -> TypeFlags {
    let st = addr.dword(0);
    let st1 = addr.dword(1);
    let st2 = addr.dword(2);
    let st3 = addr.dword(3);

    if st == 0 && st1 == 0 && st2 == 0 && st3 == 0 {
        return TypeFlags::UNSPECIFIED;
    }

    additive_flags(st, st2, st3) | terminal_flags(st, st1, st2, st3)
}

/// Address-space flags that stack on top of the terminal category.
fn additive_flags(st: u32, st2: u32, st3: u32) -> TypeFlags {
    let mut flags = TypeFlags::empty();

    if (st & 0xE000_0000) == 0x2000_0000 {
        flags |= TypeFlags::AGU;
    }
    if (st & 0xFFFF_0000) == 0x3FFE_0000 {
        flags |= TypeFlags::SIX_BONE;
    }
    if (st & 0xFFFF_0000) == 0x2002_0000 {
        flags |= TypeFlags::SIX_TO_FOUR;
    }
    if (st & 0xFFFF_0000) == 0x2001_0000 {
        flags |= TypeFlags::PRODUCTIVE;
    }
    if st2 == 0x0000_0001 && (st3 & 0xFF00_0000) == 0xFF00_0000 {
        flags |= TypeFlags::SOLICITED_NODE;
    }
    if st2 == 0x0000_5EFE {
        flags |= TypeFlags::ISATAP;
    }

    flags
}

/// Ordered terminal dispatch; the first matching rule decides the
/// exclusive category.
fn terminal_flags(st: u32, st1: u32, st2: u32, st3: u32) -> TypeFlags {
    // first three bits neither 000 nor 111: plain unicast
    if (st & 0xE000_0000) != 0 && (st & 0xE000_0000) != 0xE000_0000 {
        return TypeFlags::UNICAST;
    }

    if (st & 0xFF00_0000) == 0xFF00_0000 {
        let mut flags = TypeFlags::MULTICAST;
        match st & 0x00FF_0000 {
            0x0001_0000 => flags |= TypeFlags::LOOPBACK,
            0x0002_0000 => flags |= TypeFlags::LINKLOCAL,
            0x0005_0000 => flags |= TypeFlags::SITELOCAL,
            _ => {}
        }
        return flags;
    }

    if (st & 0xFFC0_0000) == 0xFE80_0000 {
        return TypeFlags::LINKLOCAL | TypeFlags::UNICAST;
    }
    if (st & 0xFFC0_0000) == 0xFEC0_0000 {
        return TypeFlags::SITELOCAL | TypeFlags::UNICAST;
    }

    if (st | st1) == 0 {
        if st2 == 0 {
            if st3 == 0 {
                // all-zero is caught before dispatch; kept for rule parity
                return TypeFlags::UNSPECIFIED;
            }
            if st3 == 1 {
                return TypeFlags::LOOPBACK | TypeFlags::UNICAST;
            }
            return TypeFlags::COMPATV4 | TypeFlags::UNICAST;
        }
        if st2 == 0x0000_FFFF {
            // v4-mapped is terminal; no fallthrough into RESERVED
            return TypeFlags::MAPPED;
        }
    }

    TypeFlags::RESERVED
}

/// IANA / RIR assignment registries for the classic allocation blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registry {
    SixBone,
    Iana,
    Apnic,
    Arin,
    RipeNcc,
    Reserved,
}

impl Registry {
    /// Short registry token as used in machine-readable output.
    pub fn token(&self) -> &'static str {
        match self {
            Registry::SixBone => "6BONE",
            Registry::Iana => "IANA",
            Registry::Apnic => "APNIC",
            Registry::Arin => "ARIN",
            Registry::RipeNcc => "RIPENCC",
            Registry::Reserved => "reserved",
        }
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Look up the allocation registry for an address.
///
/// Registry information exists for the 6bone space (`3ffe::/16`) and the
/// `/23` subdivisions of the productive space (`2001::/16`); every other
/// address yields `None`.
pub fn registry(addr: &Ipv6Address) -> Option<Registry> {
    let st = addr.dword(0);

    if (st & 0xFFFF_0000) == 0x3FFE_0000 {
        return Some(Registry::SixBone);
    }
    if (st & 0xFFFF_0000) != 0x2001_0000 {
        return None;
    }

    let block = st & 0xFFFF_FE00;
    let registry = match block {
        0x2001_0000 => Registry::Iana,
        0x2001_0200 | 0x2001_0C00 => Registry::Apnic,
        0x2001_0400 => Registry::Arin,
        0x2001_0600 | 0x2001_0800 | 0x2001_0A00 => Registry::RipeNcc,
        _ => Registry::Reserved,
    };
    Some(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addr::parse;

    fn scope_of(text: &str) -> TypeFlags {
        classify(&parse(text).unwrap())
    }

    // ========== terminal categories ==========

    #[test]
    fn test_unspecified() {
        assert_eq!(scope_of("::"), TypeFlags::UNSPECIFIED);
    }

    #[test]
    fn test_loopback() {
        assert_eq!(
            scope_of("::1"),
            TypeFlags::LOOPBACK | TypeFlags::UNICAST
        );
    }

    #[test]
    fn test_global_unicast() {
        assert_eq!(
            scope_of("2001:db8::1"),
            TypeFlags::UNICAST | TypeFlags::AGU | TypeFlags::PRODUCTIVE
        );
    }

    #[test]
    fn test_6bone() {
        assert_eq!(
            scope_of("3ffe:ffff:100:f101::1"),
            TypeFlags::UNICAST | TypeFlags::AGU | TypeFlags::SIX_BONE
        );
    }

    #[test]
    fn test_6to4() {
        assert_eq!(
            scope_of("2002:c0a8:101::1"),
            TypeFlags::UNICAST | TypeFlags::AGU | TypeFlags::SIX_TO_FOUR
        );
    }

    #[test]
    fn test_multicast_scopes() {
        assert_eq!(
            scope_of("ff01::1"),
            TypeFlags::MULTICAST | TypeFlags::LOOPBACK
        );
        assert_eq!(
            scope_of("ff02::2"),
            TypeFlags::MULTICAST | TypeFlags::LINKLOCAL
        );
        assert_eq!(
            scope_of("ff05::2"),
            TypeFlags::MULTICAST | TypeFlags::SITELOCAL
        );
        assert_eq!(scope_of("ff0e::1"), TypeFlags::MULTICAST);
    }

    #[test]
    fn test_linklocal_unicast() {
        assert_eq!(
            scope_of("fe80::1"),
            TypeFlags::LINKLOCAL | TypeFlags::UNICAST
        );
    }

    #[test]
    fn test_sitelocal_unicast() {
        assert_eq!(
            scope_of("fec0::1"),
            TypeFlags::SITELOCAL | TypeFlags::UNICAST
        );
    }

    #[test]
    fn test_compat_v4() {
        assert_eq!(
            scope_of("::192.168.1.1"),
            TypeFlags::COMPATV4 | TypeFlags::UNICAST
        );
    }

    #[test]
    fn test_mapped() {
        assert_eq!(scope_of("::ffff:192.168.1.1"), TypeFlags::MAPPED);
        assert_eq!(scope_of("::ffff:0:0"), TypeFlags::MAPPED);
    }

    #[test]
    fn test_mapped_is_terminal() {
        // dword 2 == 0xffff must not fall through into RESERVED
        let mut addr = Ipv6Address::new();
        addr.set_dword(2, 0x0000_FFFF);
        addr.set_dword(3, 0x0102_0304);
        let scope = classify(&addr);
        assert_eq!(scope, TypeFlags::MAPPED);
        assert!(!scope.contains(TypeFlags::RESERVED));
    }

    #[test]
    fn test_reserved() {
        // low words populated but no recognized shape
        assert_eq!(scope_of("0:0:1::2"), TypeFlags::RESERVED);
        assert_eq!(scope_of("::2:0:0:0:0:1"), TypeFlags::RESERVED);
    }

    // ========== additive flags ==========

    #[test]
    fn test_solicited_node() {
        assert_eq!(
            scope_of("ff02::1:ff00:1234"),
            TypeFlags::MULTICAST | TypeFlags::LINKLOCAL | TypeFlags::SOLICITED_NODE
        );
    }

    #[test]
    fn test_isatap() {
        assert_eq!(
            scope_of("fe80::5efe:192.168.1.1"),
            TypeFlags::LINKLOCAL | TypeFlags::UNICAST | TypeFlags::ISATAP
        );
    }

    #[test]
    fn test_additive_rules_in_isolation() {
        assert_eq!(
            additive_flags(0x2001_0000, 0, 0),
            TypeFlags::AGU | TypeFlags::PRODUCTIVE
        );
        assert_eq!(
            additive_flags(0x2002_1234, 0, 0),
            TypeFlags::AGU | TypeFlags::SIX_TO_FOUR
        );
        assert_eq!(
            additive_flags(0x3FFE_0001, 0, 0),
            TypeFlags::SIX_BONE
        );
        assert_eq!(
            additive_flags(0, 0x0000_0001, 0xFF12_3456),
            TypeFlags::SOLICITED_NODE
        );
        assert_eq!(additive_flags(0, 0x0000_5EFE, 0), TypeFlags::ISATAP);
        assert_eq!(additive_flags(0, 0, 0), TypeFlags::empty());
    }

    #[test]
    fn test_terminal_rules_in_isolation() {
        assert_eq!(terminal_flags(0x2000_0000, 0, 0, 0), TypeFlags::UNICAST);
        assert_eq!(
            terminal_flags(0xFF05_0000, 0, 0, 0),
            TypeFlags::MULTICAST | TypeFlags::SITELOCAL
        );
        assert_eq!(
            terminal_flags(0xFE80_0000, 0, 0, 0),
            TypeFlags::LINKLOCAL | TypeFlags::UNICAST
        );
        assert_eq!(
            terminal_flags(0xFEC0_0000, 0, 0, 0),
            TypeFlags::SITELOCAL | TypeFlags::UNICAST
        );
        assert_eq!(
            terminal_flags(0, 0, 0, 1),
            TypeFlags::LOOPBACK | TypeFlags::UNICAST
        );
        assert_eq!(
            terminal_flags(0, 0, 0, 0x0A00_0001),
            TypeFlags::COMPATV4 | TypeFlags::UNICAST
        );
        assert_eq!(terminal_flags(0, 0, 0xFFFF, 0), TypeFlags::MAPPED);
        assert_eq!(terminal_flags(0, 0, 0x1234, 0), TypeFlags::RESERVED);
        assert_eq!(terminal_flags(0, 1, 0, 0), TypeFlags::RESERVED);
    }

    // ========== registry ==========

    fn registry_of(text: &str) -> Option<Registry> {
        registry(&parse(text).unwrap())
    }

    #[test]
    fn test_registry_6bone() {
        assert_eq!(registry_of("3ffe:ffff::1"), Some(Registry::SixBone));
    }

    #[test]
    fn test_registry_productive_blocks() {
        assert_eq!(registry_of("2001:0000::1"), Some(Registry::Iana));
        assert_eq!(registry_of("2001:0200::1"), Some(Registry::Apnic));
        assert_eq!(registry_of("2001:0c00::1"), Some(Registry::Apnic));
        assert_eq!(registry_of("2001:0400::1"), Some(Registry::Arin));
        assert_eq!(registry_of("2001:0600::1"), Some(Registry::RipeNcc));
        assert_eq!(registry_of("2001:0800::1"), Some(Registry::RipeNcc));
        assert_eq!(registry_of("2001:0a00::1"), Some(Registry::RipeNcc));
        assert_eq!(registry_of("2001:4000::1"), Some(Registry::Reserved));
    }

    #[test]
    fn test_registry_block_boundaries() {
        // /23 blocks: 2001:05ff is still ARIN territory, 2001:0601 RIPE
        assert_eq!(registry_of("2001:05ff::1"), Some(Registry::Arin));
        assert_eq!(registry_of("2001:07ff::1"), Some(Registry::RipeNcc));
    }

    #[test]
    fn test_registry_none_outside_known_spaces() {
        assert_eq!(registry_of("2002::1"), None);
        assert_eq!(registry_of("fe80::1"), None);
        assert_eq!(registry_of("::1"), None);
    }

    #[test]
    fn test_registry_tokens() {
        assert_eq!(Registry::SixBone.to_string(), "6BONE");
        assert_eq!(Registry::RipeNcc.to_string(), "RIPENCC");
        assert_eq!(Registry::Reserved.to_string(), "reserved");
    }
}
