//! Charset-aware percent-encoding.
//!
//! This crate percent-encodes ("URL encodes") strings and parameter sets,
//! choosing the bytes behind each `%XX` escape from a caller-specified charset:
//! UTF-8, or the Chinese GB2312/GBK/GB18030 family (all converted as GB18030).
//!
//! # Basic usage
//!
//! The free functions take an encoding label, as found in legacy HTTP APIs.
//!
//! ```
//! let encoded = pct_charset::encode("你好 world", "gbk").unwrap();
//! assert_eq!(encoded, "%c4%e3%ba%c3%20world");
//!
//! let decoded = pct_charset::decode(&encoded, "GBK").unwrap();
//! assert_eq!(decoded, "你好 world");
//! ```
//!
//! Parameter sets are encoded with their keys in sorted order.
//!
//! ```
//! use pct_charset::{url_decode, url_encode, Params};
//!
//! let mut params = Params::new();
//! params.insert("b".to_string(), "2".to_string());
//! params.insert("a".to_string(), "中".to_string());
//!
//! let encoded = url_encode(Some(&params), "utf-8").unwrap();
//! assert_eq!(encoded, "a=%e4%b8%ad&b=2");
//! assert_eq!(url_decode(&encoded, "utf-8").unwrap(), params);
//! ```
//!
//! When the same charset is used repeatedly, resolve it once with a [`Codec`].
//! You can choose which characters are escaped by implementing the [`Encoder`]
//! trait and calling [`escape_with`].
//!
//! # Logging
//!
//! Records are emitted through the [`log`](https://docs.rs/log) facade.
//! No logger is installed by this crate.

mod charset;
mod codec;
mod error;
mod escape;
mod params;

pub use charset::Charset;
pub use codec::Codec;
pub use error::{Error, Field, Result};
pub use escape::{escape, escape_with, unescape, Encoder, Unreserved};
pub use params::{decode_params, encode_params, encode_pairs, Params};

/// Encode a parameter set using the charset named by `encoding`.
///
/// Returns an empty string when `params` is `None` or empty. The label is
/// checked in every case.
pub fn url_encode(params: Option<&Params>, encoding: &str) -> Result<String> {
	let charset = Charset::from_label(encoding)?;
	match params {
		Some(params) => encode_params(params, charset),
		None => Ok(String::new()),
	}
}

/// Decode a `key=value&...` string using the charset named by `encoding`.
///
/// An empty input decodes to an empty parameter set without looking at the
/// label.
pub fn url_decode(encoded: &str, encoding: &str) -> Result<Params> {
	if encoded.is_empty() {
		return Ok(Params::new());
	}

	decode_params(encoded, Charset::from_label(encoding)?)
}

/// Percent-encode `text` using the charset named by `encoding`.
#[inline]
pub fn encode(text: &str, encoding: &str) -> Result<String> {
	escape(text, Charset::from_label(encoding)?)
}

/// Decode percent-encoded `text` using the charset named by `encoding`.
#[inline]
pub fn decode(text: &str, encoding: &str) -> Result<String> {
	unescape(text, Charset::from_label(encoding)?)
}

#[cfg(test)]
mod tests {
	use super::*;

	const LABELS: &[&str] = &["utf-8", "utf8", "UTF8", "UTF-8", "gb2312", "GBK", "gb18030"];

	#[test]
	fn unreserved_is_identity() {
		let s = "Hello-World_0.9";
		for label in LABELS {
			assert_eq!(encode(s, label).unwrap(), s);
		}
	}

	#[test]
	fn round_trip_every_label() {
		for s in ["你好", "a b,c", "100% 真正 😃", "=&?#"] {
			for label in LABELS {
				assert_eq!(decode(&encode(s, label).unwrap(), label).unwrap(), s);
			}
		}
	}

	#[test]
	fn gbk_and_utf8_bytes_differ() {
		assert_eq!(encode("你好", "gbk").unwrap(), "%c4%e3%ba%c3");
		assert_eq!(encode("你好", "gb2312").unwrap(), "%c4%e3%ba%c3");
		assert_eq!(encode("你好", "utf-8").unwrap(), "%e4%bd%a0%e5%a5%bd");
	}

	#[test]
	fn encode_space() {
		assert_eq!(encode("a b", "utf-8").unwrap(), "a%20b");
	}

	#[test]
	fn decode_hex_case() {
		assert_eq!(decode("a%2Cb", "utf-8").unwrap(), "a,b");
		assert_eq!(decode("a%2cb", "utf-8").unwrap(), "a,b");
	}

	#[test]
	fn decode_truncated() {
		assert_eq!(decode("a%2", "utf-8"), Err(Error::InvalidEscapeSequence(1)));
	}

	#[test]
	fn url_encode_empty() {
		assert_eq!(url_encode(Some(&Params::new()), "utf-8").unwrap(), "");
		assert_eq!(url_encode(None, "utf-8").unwrap(), "");
	}

	#[test]
	fn url_encode_sorted() {
		let mut params = Params::new();
		params.insert("b".to_string(), "2".to_string());
		params.insert("a".to_string(), "1".to_string());
		assert_eq!(url_encode(Some(&params), "utf-8").unwrap(), "a=1&b=2");
	}

	#[test]
	fn url_decode_pairs() {
		let params = url_decode("a=1&b=2", "utf-8").unwrap();
		assert_eq!(params.len(), 2);
		assert_eq!(params["a"], "1");
		assert_eq!(params["b"], "2");

		let params = url_decode("a", "utf-8").unwrap();
		assert_eq!(params.len(), 1);
		assert_eq!(params["a"], "");
	}

	#[test]
	fn url_decode_empty() {
		assert_eq!(url_decode("", "utf-8").unwrap(), Params::new());
		assert_eq!(url_decode("", "bogus").unwrap(), Params::new());
	}

	#[test]
	fn unrecognized_encoding() {
		let bogus = || Err(Error::UnrecognizedEncoding("bogus".to_string()));
		assert_eq!(encode("abc", "bogus"), bogus());
		assert_eq!(decode("abc", "bogus"), bogus());
		assert_eq!(url_encode(None, "bogus"), bogus());
		assert_eq!(url_decode("a=1", "bogus").map(|_| String::new()), bogus());

		assert!(encode("abc", "8").is_err());
		assert!(decode("abc", "gb").is_err());
	}
}
