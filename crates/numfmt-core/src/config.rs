//! Formatting Options
//!
//! Display options for a single formatting call.
//! Options describe presentation only; rendering is handled by the formatter.

use serde::{Deserialize, Serialize};

use crate::error::FormatResult;
use crate::format::base::Base;

/// Per-call display options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Numeral base for integer digits
    pub base: Base,

    /// Render booleans as `true`/`false` instead of `1`/`0`
    pub show_boolean_as_word: bool,

    /// Render the value as the character with that code point
    pub interpret_as_character: bool,

    /// Prepend `0x`, `0` or `0b` to non-decimal output
    pub show_base_prefix: bool,

    /// Upper-case hex digits and prefix letters
    pub uppercase: bool,

    /// Prepend `+` to non-negative decimal output
    pub show_positive_sign: bool,

    /// Separator placed between binary nibbles
    pub nibble_separator: Option<char>,
}

impl FormatOptions {
    /// Decimal, no flags
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(base: Base) -> Self {
        FormatOptions { base, ..Self::default() }
    }

    /// Options for a raw radix; fails unless radix is 2, 8, 10 or 16
    pub fn with_radix(radix: u32) -> FormatResult<Self> {
        Ok(Self::with_base(Base::from_radix(radix)?))
    }

    pub fn base(mut self, base: Base) -> Self {
        self.base = base;
        self
    }

    pub fn boolean_as_word(mut self, on: bool) -> Self {
        self.show_boolean_as_word = on;
        self
    }

    pub fn as_character(mut self, on: bool) -> Self {
        self.interpret_as_character = on;
        self
    }

    pub fn base_prefix(mut self, on: bool) -> Self {
        self.show_base_prefix = on;
        self
    }

    pub fn uppercase(mut self, on: bool) -> Self {
        self.uppercase = on;
        self
    }

    pub fn positive_sign(mut self, on: bool) -> Self {
        self.show_positive_sign = on;
        self
    }

    pub fn nibble_separator(mut self, sep: Option<char>) -> Self {
        self.nibble_separator = sep;
        self
    }
}
