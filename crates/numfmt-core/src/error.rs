//! Formatter Error Types
//!
//! Defines the error conditions produced while formatting a value.
//! Formatting is otherwise infallible; the only rejected input is a base
//! outside the supported numeral systems.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Base is not one of decimal, octal, hexadecimal or binary.
    #[error("invalid base: {0} (expected one of 2, 8, 10, 16)")]
    InvalidBase(String),
}

impl FormatError {
    pub fn invalid_base(base: impl ToString) -> Self {
        FormatError::InvalidBase(base.to_string())
    }
}

pub type FormatResult<T> = Result<T, FormatError>;
