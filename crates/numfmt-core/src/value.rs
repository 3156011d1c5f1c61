//! Formattable Value Representation
//!
//! Typed input to the formatter. Each variant has a fixed declared
//! storage width, reported back as `FormattedValue::byte_width`.

use serde::{Deserialize, Serialize};

/// Value with its declared type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Boolean, one byte
    Bool(bool),

    /// Narrow character, one byte
    Char(u8),

    /// Standard integer, 32-bit signed
    Int(i32),

    /// Long integer, 64-bit signed
    Long(i64),

    /// Double-precision float (IEEE 754)
    Double(f64),
}

impl Value {
    /// Storage size of the declared type, in bytes
    pub fn byte_width(&self) -> usize {
        match self {
            Value::Bool(_) => std::mem::size_of::<bool>(),
            Value::Char(_) => std::mem::size_of::<u8>(),
            Value::Int(_) => std::mem::size_of::<i32>(),
            Value::Long(_) => std::mem::size_of::<i64>(),
            Value::Double(_) => std::mem::size_of::<f64>(),
        }
    }

    /// Integer view, sign-extended. `None` for doubles.
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Value::Bool(b) => Some(b as i64),
            Value::Char(c) => Some(c as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            Value::Double(_) => None,
        }
    }

    /// Bits in the two's-complement pattern used for non-decimal output
    pub(crate) fn bit_width(&self) -> u32 {
        match self {
            Value::Bool(_) => 1,
            _ => (self.byte_width() * 8) as u32,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Double(_) => "double",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<u8> for Value {
    fn from(c: u8) -> Self {
        Value::Char(c)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_are_fixed_per_type() {
        assert_eq!(Value::Bool(false).byte_width(), 1);
        assert_eq!(Value::Char(b'i').byte_width(), 1);
        assert_eq!(Value::Int(1).byte_width(), 4);
        assert_eq!(Value::Long(1).byte_width(), 8);
        assert_eq!(Value::Double(1.0).byte_width(), 8);
    }

    #[test]
    fn integer_view_sign_extends() {
        assert_eq!(Value::from(-5i32).as_integer(), Some(-5));
        assert_eq!(Value::from(true).as_integer(), Some(1));
        assert_eq!(Value::from(0.5f64).as_integer(), None);
    }
}
