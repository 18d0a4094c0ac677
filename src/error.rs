/*!
# Argtable: Errors.
*/

use std::{
	ffi::OsString,
	num::ParseIntError,
};



#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
/// # Error!
///
/// None of the everyday lookups can fail; they fall back to defaults instead.
/// This is only returned by the strict `try_*` variants.
pub enum ArgTableError {
	#[error("Invalid UTF-8: {0:?}")]
	/// # Invalid UTF-8.
	///
	/// The original argument is kept in case you want to dig deeper.
	InvalidUtf8(OsString),

	#[error("Invalid integer for {key}: {value:?}")]
	/// # Invalid Integer.
	InvalidInt {
		/// # Key.
		key: String,

		/// # Raw Value.
		value: String,

		#[source]
		/// # Parse Error.
		source: ParseIntError,
	},
}

impl ArgTableError {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::InvalidUtf8(_) => "Invalid UTF-8.",
			Self::InvalidInt { .. } => "Invalid integer.",
		}
	}
}



#[cfg(test)]
mod test {
	use super::*;
	use std::error::Error;

	#[test]
	fn t_display() {
		let err = ArgTableError::InvalidInt {
			key: "-P33".to_owned(),
			value: "NaN".to_owned(),
			source: "NaN".parse::<i64>().unwrap_err(),
		};
		assert_eq!(err.to_string(), "Invalid integer for -P33: \"NaN\"");
		assert_eq!(err.as_str(), "Invalid integer.");
		assert!(err.source().is_some());

		let err = ArgTableError::InvalidUtf8(OsString::from("boo"));
		assert_eq!(err.to_string(), "Invalid UTF-8: \"boo\"");
		assert_eq!(err.as_str(), "Invalid UTF-8.");
		assert!(err.source().is_none());
	}
}
