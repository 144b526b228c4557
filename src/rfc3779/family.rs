//! Address families and the textual form of address prefixes.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;
use crate::error::Error;


//------------ AddressFamily -------------------------------------------------

/// The address family of an IP address prefix.
///
/// In RFC 3779 resources, the family is given by an OCTET STRING whose
/// first two octets are the Address Family Identifier (AFI) as assigned by
/// IANA. An optional third octet holds the Subsequent Address Family
/// Identifier which doesn’t change the shape of the prefixes and is
/// ignored here.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

impl AddressFamily {
    /// Determines the address family from the content of an
    /// `addressFamily` OCTET STRING.
    pub fn from_afi(octets: &[u8]) -> Result<Self, Error> {
        match *octets {
            [0, 1] | [0, 1, _] => Ok(AddressFamily::Ipv4),
            [0, 2] | [0, 2, _] => Ok(AddressFamily::Ipv6),
            [high, low] | [high, low, _] => {
                xerr!(Err(Error::invalid_address(format!(
                    "unsupported address family {}",
                    u16::from_be_bytes([high, low])
                ))))
            }
            _ => {
                xerr!(Err(Error::invalid_address(format!(
                    "address family of {} octets", octets.len()
                ))))
            }
        }
    }

    /// Returns the Address Family Identifier.
    pub fn afi(self) -> u16 {
        match self {
            AddressFamily::Ipv4 => 1,
            AddressFamily::Ipv6 => 2,
        }
    }

    /// Returns the content of an `addressFamily` OCTET STRING without SAFI.
    pub fn afi_octets(self) -> [u8; 2] {
        self.afi().to_be_bytes()
    }

    /// Returns the number of bits in an address.
    pub fn width(self) -> usize {
        match self {
            AddressFamily::Ipv4 => 32,
            AddressFamily::Ipv6 => 128,
        }
    }

    /// Returns the number of bits in one group of the textual form.
    pub fn group_bits(self) -> usize {
        match self {
            AddressFamily::Ipv4 => 8,
            AddressFamily::Ipv6 => 16,
        }
    }

    /// Returns the character separating the groups of the textual form.
    pub fn separator(self) -> char {
        match self {
            AddressFamily::Ipv4 => '.',
            AddressFamily::Ipv6 => ':',
        }
    }

    /// Returns the number of groups in the textual form.
    fn group_count(self) -> usize {
        self.width() / self.group_bits()
    }

    /// Converts the bits of a prefix into its textual form.
    ///
    /// The bits are padded with zeros to the full width of an address and
    /// formatted as the address followed by a slash and the number of
    /// bits. IPv4 addresses use dotted decimal notation. IPv6 addresses are
    /// formatted in the canonical form of RFC 5952.
    pub fn format_prefix(self, bits: &[bool]) -> Result<String, Error> {
        if bits.len() > self.width() {
            xerr!(return Err(Error::invalid_address(format!(
                "{} bit prefix is too long for {}", bits.len(), self
            ))))
        }
        let groups: Vec<u16> = (0..self.group_count()).map(|group| {
            let start = group * self.group_bits();
            (start..start + self.group_bits()).fold(0u16, |res, idx| {
                let bit = bits.get(idx).copied().unwrap_or(false);
                (res << 1) | u16::from(bit)
            })
        }).collect();
        let address = match self {
            AddressFamily::Ipv4 => {
                groups.iter().map(u16::to_string).collect::<Vec<_>>()
                    .join(".")
            }
            AddressFamily::Ipv6 => format_ipv6(&groups),
        };
        Ok(format!("{}/{}", address, bits.len()))
    }

    /// Converts the textual form of a prefix into its bits.
    ///
    /// The text must consist of an address and a prefix length separated by
    /// a slash. All bits of the address beyond the prefix length must be
    /// zero.
    pub fn parse_prefix(self, text: &str) -> Result<Vec<bool>, Error> {
        let Some((address, len)) = text.split_once('/') else {
            xerr!(return Err(Error::invalid_address(format!(
                "missing prefix length in '{}'", text
            ))))
        };
        let len = match parse_decimal(len) {
            Some(len) if len <= self.width() => len,
            _ => {
                xerr!(return Err(Error::invalid_address(format!(
                    "invalid prefix length in '{}'", text
                ))))
            }
        };
        let groups = match self {
            AddressFamily::Ipv4 => parse_ipv4(address),
            AddressFamily::Ipv6 => parse_ipv6(address),
        };
        let Some(groups) = groups else {
            xerr!(return Err(Error::invalid_address(format!(
                "invalid {} address '{}'", self, address
            ))))
        };
        let mut bits: Vec<bool> = groups.iter().flat_map(|group| {
            (0..self.group_bits()).rev().map(move |idx| {
                *group & (1u16 << idx) != 0
            })
        }).collect();
        if bits[len..].iter().any(|bit| *bit) {
            xerr!(return Err(Error::invalid_address("non-zero host bits")))
        }
        bits.truncate(len);
        Ok(bits)
    }
}


//--- Display

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            AddressFamily::Ipv4 => "IPv4",
            AddressFamily::Ipv6 => "IPv6",
        })
    }
}


//------------ Helper Functions ----------------------------------------------

/// Formats the eight groups of an IPv6 address.
///
/// The longest run of at least two zero groups is replaced by `::`. If
/// there are several such runs, the first one is used.
fn format_ipv6(groups: &[u16]) -> String {
    let mut zeros = (0, 0);
    let mut idx = 0;
    while idx < groups.len() {
        let start = idx;
        while idx < groups.len() && groups[idx] == 0 {
            idx += 1;
        }
        if idx - start > zeros.1 {
            zeros = (start, idx - start);
        }
        idx += 1;
    }
    let hex = |groups: &[u16]| {
        groups.iter().map(|group| format!("{:x}", group))
            .collect::<Vec<_>>().join(":")
    };
    if zeros.1 < 2 {
        hex(groups)
    }
    else {
        format!(
            "{}::{}",
            hex(&groups[..zeros.0]), hex(&groups[zeros.0 + zeros.1..])
        )
    }
}

/// Parses a decimal number without sign or surrounding white space.
fn parse_decimal(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|ch| ch.is_ascii_digit()) {
        return None
    }
    text.parse().ok()
}

/// Parses the four groups of a dotted decimal IPv4 address.
fn parse_ipv4(text: &str) -> Option<Vec<u16>> {
    let groups = text.split('.').map(|group| {
        parse_decimal(group).filter(|value| *value <= 255)
            .map(|value| value as u16)
    }).collect::<Option<Vec<_>>>()?;
    (groups.len() == 4).then_some(groups)
}

/// Parses the eight groups of an IPv6 address.
///
/// A single `::` may stand in for one or more zero groups.
fn parse_ipv6(text: &str) -> Option<Vec<u16>> {
    let mut parts = text.split("::");
    let head = parse_hex_groups(parts.next()?)?;
    let groups = match parts.next() {
        Some(tail) => {
            let tail = parse_hex_groups(tail)?;
            if parts.next().is_some() || head.len() + tail.len() > 7 {
                return None
            }
            let mut groups = head;
            groups.resize(8 - tail.len(), 0);
            groups.extend(tail);
            groups
        }
        None => head,
    };
    (groups.len() == 8).then_some(groups)
}

/// Parses colon separated groups of one to four hex digits.
///
/// An empty string contains no groups.
fn parse_hex_groups(text: &str) -> Option<Vec<u16>> {
    if text.is_empty() {
        return Some(Vec::new())
    }
    text.split(':').map(|group| {
        if group.is_empty()
            || group.len() > 4
            || !group.bytes().all(|ch| ch.is_ascii_hexdigit())
        {
            return None
        }
        u16::from_str_radix(group, 16).ok()
    }).collect()
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn bits(s: &str) -> Vec<bool> {
        s.chars().map(|ch| ch == '1').collect()
    }

    #[test]
    fn from_afi() {
        assert_eq!(AddressFamily::from_afi(b"\x00\x01"), Ok(AddressFamily::Ipv4));
        assert_eq!(
            AddressFamily::from_afi(b"\x00\x02\x01"), Ok(AddressFamily::Ipv6)
        );
        assert!(AddressFamily::from_afi(b"\x00\x03").is_err());
        assert!(AddressFamily::from_afi(b"\x00").is_err());
        assert!(AddressFamily::from_afi(b"\x00\x01\x01\x01").is_err());
        assert_eq!(AddressFamily::Ipv6.afi_octets(), [0, 2]);
    }

    #[test]
    fn format_ipv4() {
        let family = AddressFamily::Ipv4;
        assert_eq!(family.format_prefix(&[]).unwrap(), "0.0.0.0/0");
        assert_eq!(
            family.format_prefix(&bits("110000000000000000000010")).unwrap(),
            "192.0.2.0/24"
        );
        assert_eq!(
            family.format_prefix(&bits("0000101")).unwrap(), "10.0.0.0/7"
        );
        assert!(matches!(
            family.format_prefix(&[false; 33]),
            Err(Error::InvalidAddress(_))
        ));
    }

    #[test]
    fn format_ipv6() {
        let family = AddressFamily::Ipv6;
        assert_eq!(family.format_prefix(&[]).unwrap(), "::/0");
        assert_eq!(
            family.format_prefix(
                &bits("00100000000000010000110110111000")
            ).unwrap(),
            "2001:db8::/32"
        );
        assert_eq!(
            super::format_ipv6(&[0x2001, 0xdb8, 0, 0, 1, 0, 0, 1]),
            "2001:db8::1:0:0:1"
        );
        assert_eq!(
            super::format_ipv6(&[0x2001, 0xdb8, 0, 1, 1, 1, 1, 1]),
            "2001:db8:0:1:1:1:1:1"
        );
        assert_eq!(
            super::format_ipv6(&[1, 0, 0, 1, 0, 0, 0, 1]),
            "1:0:0:1::1"
        );
        assert_eq!(
            super::format_ipv6(&[0, 0, 0, 0, 0, 0, 0, 1]), "::1"
        );
    }

    #[test]
    fn parse_ipv4() {
        let family = AddressFamily::Ipv4;
        assert_eq!(
            family.parse_prefix("192.0.2.0/24"),
            Ok(bits("110000000000000000000010"))
        );
        assert_eq!(family.parse_prefix("0.0.0.0/0"), Ok(Vec::new()));
        assert_eq!(
            family.parse_prefix("192.0.2.1/24"),
            Err(Error::InvalidAddress("non-zero host bits".into()))
        );
        for text in [
            "192.0.2.0", "192.0.2.0/33", "192.0.2.0/", "192.0.2.0/+1",
            "192.0.2/24", "192.0.2.0.0/24", "192.0.256.0/24",
            "192.0..0/24", "192.0.2.0/24/1", "a.b.c.d/8",
        ] {
            assert!(
                matches!(family.parse_prefix(text), Err(Error::InvalidAddress(_))),
                "{}", text
            );
        }
    }

    #[test]
    fn parse_ipv6() {
        let family = AddressFamily::Ipv6;
        assert_eq!(
            family.parse_prefix("2001:db8::/32"),
            Ok(bits("00100000000000010000110110111000"))
        );
        assert_eq!(
            family.parse_prefix("2001:0DB8:0:0:0:0:0:0/32"),
            Ok(bits("00100000000000010000110110111000"))
        );
        assert_eq!(family.parse_prefix("::/0"), Ok(Vec::new()));
        assert_eq!(family.parse_prefix("::1/128").map(|b| b.len()), Ok(128));
        assert_eq!(
            family.parse_prefix("2001:db8::1/32"),
            Err(Error::InvalidAddress("non-zero host bits".into()))
        );
        for text in [
            "2001:db8::", "2001:db8::/129", ":::/0", "1::2::3/128",
            "2001:db8:/32", ":2001:db8::/32", "1:2:3:4:5:6:7/112",
            "1:2:3:4:5:6:7:8:9/128", "1:2:3:4::5:6:7:8/128",
            "12345::/16", "g::/16",
        ] {
            assert!(
                matches!(family.parse_prefix(text), Err(Error::InvalidAddress(_))),
                "{}", text
            );
        }
    }

    #[test]
    fn text_round_trip() {
        for (family, text) in [
            (AddressFamily::Ipv4, "192.0.2.0/24"),
            (AddressFamily::Ipv4, "10.64.0.0/10"),
            (AddressFamily::Ipv4, "203.0.113.7/32"),
            (AddressFamily::Ipv6, "2001:db8::/32"),
            (AddressFamily::Ipv6, "2001:db8:0:1::/64"),
            (AddressFamily::Ipv6, "fe80::/10"),
        ] {
            let bits = family.parse_prefix(text).unwrap();
            assert_eq!(family.format_prefix(&bits).unwrap(), text);
        }
    }
}
