//! Formatting subsystem

pub mod base;
pub mod formatter;
mod radix;

pub use base::Base;
pub use formatter::{FormattedValue, NumberFormatter};
