//! IPX address scalar types.
//!
//! This module provides the two fixed-width values used for IPX addressing:
//! - [`Addr32`] - 32-bit network numbers
//! - [`Addr48`] - 48-bit values, used for both hardware addresses and node numbers
//!
//! Both types render and parse as colon-separated upper-case hex octets
//! (`00:00:00:01`, `08:00:27:AA:BB:CC`), the form used in configuration
//! files and log output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error type for parsing [`Addr32`]/[`Addr48`] from their string form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {expected}-octet address '{input}': expected colon-separated hex octets")]
pub struct ParseAddrError {
    /// The string that failed to parse.
    input: String,
    /// Number of octets the target type requires.
    expected: usize,
}

/// Parses colon-separated hex octets, filling `out` exactly.
fn parse_octets(s: &str, out: &mut [u8]) -> Result<(), ()> {
    let mut parts = s.split(':');

    for slot in out.iter_mut() {
        let part = parts.next().ok_or(())?;
        if part.len() != 2 {
            return Err(());
        }
        *slot = u8::from_str_radix(part, 16).map_err(|_| ())?;
    }

    // Trailing parts mean the input had too many octets
    if parts.next().is_some() {
        return Err(());
    }

    Ok(())
}

/// A 32-bit IPX network number.
///
/// # Example
///
/// ```
/// use ipx_ifcache::addr::Addr32;
///
/// let net = Addr32::new(1);
/// assert_eq!(net.to_string(), "00:00:00:01");
/// assert_eq!("00:00:00:01".parse::<Addr32>().unwrap(), net);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Addr32(u32);

impl Addr32 {
    /// Creates a network number from its integer value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Creates a network number from big-endian octets.
    #[must_use]
    pub const fn from_octets(octets: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(octets))
    }

    /// Returns the big-endian octet representation.
    #[must_use]
    pub const fn octets(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Returns the integer value.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Addr32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets();
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}")
    }
}

impl FromStr for Addr32 {
    type Err = ParseAddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut octets = [0u8; 4];
        parse_octets(s, &mut octets).map_err(|()| ParseAddrError {
            input: s.to_string(),
            expected: 4,
        })?;
        Ok(Self::from_octets(octets))
    }
}

impl Serialize for Addr32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Addr32 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A 48-bit value used for hardware addresses and IPX node numbers.
///
/// # Example
///
/// ```
/// use ipx_ifcache::addr::Addr48;
///
/// let hw = Addr48::new([0x08, 0x00, 0x27, 0xAA, 0xBB, 0xCC]);
/// assert_eq!(hw.to_string(), "08:00:27:AA:BB:CC");
/// assert_eq!("08:00:27:aa:bb:cc".parse::<Addr48>().unwrap(), hw);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Addr48([u8; 6]);

impl Addr48 {
    /// Creates an address from big-endian octets.
    #[must_use]
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// Returns the big-endian octet representation.
    #[must_use]
    pub const fn octets(self) -> [u8; 6] {
        self.0
    }
}

impl From<[u8; 6]> for Addr48 {
    fn from(octets: [u8; 6]) -> Self {
        Self(octets)
    }
}

impl fmt::Display for Addr48 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{g:02X}")
    }
}

impl FromStr for Addr48 {
    type Err = ParseAddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut octets = [0u8; 6];
        parse_octets(s, &mut octets).map_err(|()| ParseAddrError {
            input: s.to_string(),
            expected: 6,
        })?;
        Ok(Self(octets))
    }
}

impl Serialize for Addr48 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Addr48 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod addr32 {
        use super::*;

        #[test]
        fn displays_as_four_hex_octets() {
            assert_eq!(Addr32::new(1).to_string(), "00:00:00:01");
            assert_eq!(Addr32::new(0xDEAD_BEEF).to_string(), "DE:AD:BE:EF");
        }

        #[test]
        fn parses_display_form() {
            let addr: Addr32 = "DE:AD:BE:EF".parse().unwrap();
            assert_eq!(addr, Addr32::new(0xDEAD_BEEF));
        }

        #[test]
        fn parses_lower_case_hex() {
            let addr: Addr32 = "de:ad:be:ef".parse().unwrap();
            assert_eq!(addr, Addr32::new(0xDEAD_BEEF));
        }

        #[test]
        fn octets_round_trip() {
            let addr = Addr32::from_octets([0x00, 0x00, 0x00, 0x33]);
            assert_eq!(addr.octets(), [0x00, 0x00, 0x00, 0x33]);
            assert_eq!(addr.to_u32(), 0x33);
        }

        #[test]
        fn rejects_wrong_octet_count() {
            assert!("00:00:01".parse::<Addr32>().is_err());
            assert!("00:00:00:00:01".parse::<Addr32>().is_err());
        }

        #[test]
        fn rejects_non_hex_input() {
            assert!("00:00:00:zz".parse::<Addr32>().is_err());
        }

        #[test]
        fn rejects_single_digit_octets() {
            assert!("0:0:0:1".parse::<Addr32>().is_err());
        }
    }

    mod addr48 {
        use super::*;

        #[test]
        fn displays_as_six_hex_octets() {
            let addr = Addr48::new([0x08, 0x00, 0x27, 0xAA, 0xBB, 0xCC]);
            assert_eq!(addr.to_string(), "08:00:27:AA:BB:CC");
        }

        #[test]
        fn parses_display_form() {
            let addr: Addr48 = "08:00:27:AA:BB:CC".parse().unwrap();
            assert_eq!(addr, Addr48::new([0x08, 0x00, 0x27, 0xAA, 0xBB, 0xCC]));
        }

        #[test]
        fn parse_is_case_insensitive() {
            let upper: Addr48 = "7A:79:00:00:00:00".parse().unwrap();
            let lower: Addr48 = "7a:79:00:00:00:00".parse().unwrap();
            assert_eq!(upper, lower);
        }

        #[test]
        fn rejects_wrong_octet_count() {
            assert!("08:00:27:AA:BB".parse::<Addr48>().is_err());
            assert!("08:00:27:AA:BB:CC:DD".parse::<Addr48>().is_err());
        }

        #[test]
        fn rejects_empty_input() {
            assert!("".parse::<Addr48>().is_err());
        }

        #[test]
        fn parse_error_mentions_input() {
            let err = "bogus".parse::<Addr48>().unwrap_err();
            assert!(err.to_string().contains("bogus"));
        }
    }
}
