//! Numeral Base Definitions
//!
//! The four supported numeral systems. Radix values are fixed; anything
//! else is rejected with `FormatError::InvalidBase`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, FormatResult};

/// Supported numeral bases
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Base {
    Binary      = 2,
    Octal       = 8,
    #[default]
    Decimal     = 10,
    Hexadecimal = 16,
}

impl Base {
    /// Convert a raw radix to a base
    pub fn from_radix(radix: u32) -> FormatResult<Self> {
        match radix {
            2  => Ok(Base::Binary),
            8  => Ok(Base::Octal),
            10 => Ok(Base::Decimal),
            16 => Ok(Base::Hexadecimal),
            other => Err(FormatError::invalid_base(other)),
        }
    }

    pub fn radix(self) -> u32 {
        self as u32
    }

    /// Bits encoded by one digit, for the power-of-two bases
    pub(crate) fn bits_per_digit(self) -> Option<u32> {
        match self {
            Base::Binary => Some(1),
            Base::Octal => Some(3),
            Base::Hexadecimal => Some(4),
            Base::Decimal => None,
        }
    }

    /// Conventional prefix, lower case
    pub fn prefix(self) -> &'static str {
        match self {
            Base::Binary => "0b",
            Base::Octal => "0",
            Base::Decimal => "",
            Base::Hexadecimal => "0x",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Base::Binary => "binary",
            Base::Octal => "octal",
            Base::Decimal => "decimal",
            Base::Hexadecimal => "hexadecimal",
        }
    }
}

impl TryFrom<u32> for Base {
    type Error = FormatError;

    fn try_from(radix: u32) -> FormatResult<Self> {
        Base::from_radix(radix)
    }
}

impl TryFrom<String> for Base {
    type Error = FormatError;

    fn try_from(s: String) -> FormatResult<Self> {
        s.parse()
    }
}

impl FromStr for Base {
    type Err = FormatError;

    fn from_str(s: &str) -> FormatResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bin" | "binary" | "2" => Ok(Base::Binary),
            "oct" | "octal" | "8" => Ok(Base::Octal),
            "dec" | "decimal" | "10" => Ok(Base::Decimal),
            "hex" | "hexadecimal" | "16" => Ok(Base::Hexadecimal),
            _ => Err(FormatError::invalid_base(s)),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radix_round_trips_for_supported_bases() {
        for base in [Base::Binary, Base::Octal, Base::Decimal, Base::Hexadecimal] {
            assert_eq!(Base::from_radix(base.radix()), Ok(base));
        }
    }

    #[test]
    fn unsupported_radix_is_rejected() {
        for radix in [0u32, 1, 3, 7, 9, 12, 36, u32::MAX] {
            assert_eq!(
                Base::try_from(radix),
                Err(FormatError::InvalidBase(radix.to_string()))
            );
        }
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("HEX".parse::<Base>(), Ok(Base::Hexadecimal));
        assert_eq!(" octal ".parse::<Base>(), Ok(Base::Octal));
        assert_eq!("bin".parse::<Base>(), Ok(Base::Binary));
        assert!("base64".parse::<Base>().is_err());
    }

    #[test]
    fn deserialize_rejects_unknown_base() {
        let ok: Base = serde_json::from_str("\"hex\"").expect("hex should parse");
        assert_eq!(ok, Base::Hexadecimal);
        assert!(serde_json::from_str::<Base>("\"ternary\"").is_err());
    }
}
