//! Number Formatter
//!
//! Renders a `Value` under `FormatOptions`. Stateless; every call is
//! independent and free of side effects.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::FormatOptions;
use crate::error::FormatResult;
use crate::value::Value;

use super::base::Base;
use super::radix;

/// Output of a single formatting call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedValue {
    pub text: String,

    /// Storage size of the source value's declared type
    pub byte_width: usize,
}

impl fmt::Display for FormattedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Stateless value formatter
pub struct NumberFormatter;

impl NumberFormatter {
    /// Format `value` under `options`
    pub fn format(value: impl Into<Value>, options: &FormatOptions) -> FormatResult<FormattedValue> {
        let value = value.into();
        let text = Self::render(&value, options);
        tracing::trace!(kind = value.type_name(), base = %options.base, %text, "formatted value");
        Ok(FormattedValue { text, byte_width: value.byte_width() })
    }

    /// Format with a raw radix; fails with `InvalidBase` unless it is 2, 8, 10 or 16
    pub fn format_in_radix(
        value: impl Into<Value>,
        radix: u32,
        options: &FormatOptions,
    ) -> FormatResult<FormattedValue> {
        let base = Base::from_radix(radix)
            .inspect_err(|_| tracing::debug!(radix, "rejecting unsupported radix"))?;
        Self::format(value, &options.base(base))
    }

    /// Character rendering followed by its integer code point
    pub fn format_with_code_point(
        value: impl Into<Value>,
        options: &FormatOptions,
    ) -> FormatResult<(FormattedValue, FormattedValue)> {
        let value = value.into();
        let character = Self::format(value, &options.as_character(true))?;
        let code_point = Self::format(value, &options.as_character(false))?;
        Ok((character, code_point))
    }

    fn render(value: &Value, options: &FormatOptions) -> String {
        match *value {
            Value::Bool(b) if options.show_boolean_as_word => b.to_string(),
            Value::Double(d) => Self::render_double(d, options),
            Value::Bool(_) => Self::render_integer(value, options),
            _ if options.interpret_as_character => Self::render_character(value).to_string(),
            _ => Self::render_integer(value, options),
        }
    }

    fn render_integer(value: &Value, options: &FormatOptions) -> String {
        let Some(n) = value.as_integer() else {
            return String::new();
        };
        if options.base == Base::Decimal {
            return radix::decimal(n, options.show_positive_sign);
        }

        let digits = radix::pattern_digits(
            n,
            value.bit_width(),
            options.base,
            options.uppercase,
            options.nibble_separator,
        );
        if options.show_base_prefix {
            format!("{}{}", radix::prefix(options.base, &digits, options.uppercase), digits)
        } else {
            digits
        }
    }

    /// Narrow characters map bytes to U+0000..=U+00FF; other integers use
    /// the value as a code point, falling back to U+FFFD when invalid.
    fn render_character(value: &Value) -> char {
        match *value {
            Value::Char(c) => char::from(c),
            _ => value
                .as_integer()
                .and_then(|n| u32::try_from(n).ok())
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER),
        }
    }

    fn render_double(d: f64, options: &FormatOptions) -> String {
        if options.show_positive_sign && d.is_sign_positive() && !d.is_nan() {
            format!("+{}", d)
        } else {
            d.to_string()
        }
    }
}
