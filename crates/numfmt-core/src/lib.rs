//! numfmt - Core Library
//!
//! Numeral-base-aware formatting of typed values.

pub mod error;
pub mod config;
pub mod value;
pub mod format;

// Re-export commonly used types
pub use error::{FormatError, FormatResult};
pub use config::FormatOptions;
pub use value::Value;
pub use format::{Base, FormattedValue, NumberFormatter};

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reexports_cover_a_full_call() {
		let options = FormatOptions::with_base(Base::Hexadecimal).base_prefix(true);
		let out = NumberFormatter::format(Value::Int(707070), &options).expect("format failed");
		assert_eq!(out.text, "0xac9fe");
		assert_eq!(out.byte_width, 4);
		assert_eq!(out.to_string(), "0xac9fe");
	}

	#[test]
	fn formatter_types_are_thread_safe() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<FormatOptions>();
		assert_send_sync::<FormattedValue>();
		assert_send_sync::<FormatError>();
		assert_send_sync::<Value>();
	}

	#[test]
	fn calls_are_independent_across_threads() {
		let handles: Vec<_> = (0..4i32)
			.map(|i| {
				std::thread::spawn(move || {
					let opts = FormatOptions::with_base(Base::Octal);
					NumberFormatter::format(8 * i, &opts).map(|v| v.text)
				})
			})
			.collect();
		let texts: Vec<String> = handles
			.into_iter()
			.map(|h| h.join().expect("thread panicked").expect("format failed"))
			.collect();
		assert_eq!(texts, vec!["0", "10", "20", "30"]);
	}
}
