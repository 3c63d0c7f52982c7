//! Byte order selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire byte order, named by its leading byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    /// Big-endian, leading byte 0
    #[serde(alias = "xdr")]
    Big,
    /// Little-endian, leading byte 1
    #[default]
    #[serde(alias = "ndr")]
    Little,
}

impl Endianness {
    pub const XDR: u8 = 0;
    pub const NDR: u8 = 1;

    pub fn code(self) -> u8 {
        match self {
            Endianness::Big => Self::XDR,
            Endianness::Little => Self::NDR,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            Self::XDR => Some(Endianness::Big),
            Self::NDR => Some(Endianness::Little),
            _ => None,
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Big => write!(f, "XDR"),
            Endianness::Little => write!(f, "NDR"),
        }
    }
}

impl FromStr for Endianness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xdr" | "big" | "0" => Ok(Endianness::Big),
            "ndr" | "little" | "1" => Ok(Endianness::Little),
            other => Err(format!("unknown byte order '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Endianness::from_code(0), Some(Endianness::Big));
        assert_eq!(Endianness::from_code(1), Some(Endianness::Little));
        assert_eq!(Endianness::from_code(2), None);
        assert_eq!(Endianness::Big.code(), 0);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("XDR".parse::<Endianness>(), Ok(Endianness::Big));
        assert_eq!("little".parse::<Endianness>(), Ok(Endianness::Little));
        assert!("middle".parse::<Endianness>().is_err());
    }
}
