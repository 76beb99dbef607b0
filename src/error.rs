use std::fmt;

use crate::Charset;

/// Part of a `key=value` parameter segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
	Key,
	Value,
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Field::Key => f.write_str("key"),
			Field::Value => f.write_str("value"),
		}
	}
}

/// Encoding and decoding error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	/// The encoding label names neither UTF-8 nor a GB18030-family charset.
	#[error("unrecognized encoding `{0}`")]
	UnrecognizedEncoding(String),

	/// A `%` at the given byte offset is not followed by two hex digits.
	#[error("invalid percent-encoding sequence at offset {0}")]
	InvalidEscapeSequence(usize),

	/// The character has no representation in the target charset.
	#[error("character {0:?} cannot be represented in {1}")]
	UnmappableCharacter(char, Charset),

	/// The decoded bytes are not valid text in the charset.
	#[error("decoded bytes are not valid {0} text")]
	MalformedText(Charset),

	/// A parameter segment failed to decode.
	#[error("cannot decode the {field} of parameter #{index}")]
	Decode {
		index: usize,
		field: Field,
		#[source]
		source: Box<Error>,
	},
}

/// Result of an encoding or decoding function.
pub type Result<T> = std::result::Result<T, Error>;
