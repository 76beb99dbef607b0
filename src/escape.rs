use crate::{Charset, Error, Result};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

#[inline(always)]
fn to_digit(b: u8) -> Option<u8> {
	match b {
		// ASCII 0..=9
		0x30..=0x39 => Some(b - 0x30),
		// ASCII A..=F
		0x41..=0x46 => Some(b - 0x37),
		// ASCII a..=f
		0x61..=0x66 => Some(b - 0x57),
		_ => None,
	}
}

/// Escaping predicate.
///
/// Instances of this trait are used along with the [`escape_with`] function
/// to decide which character must be percent-encoded.
///
/// # Example
///
/// ```
/// use pct_charset::{escape_with, Charset, Encoder, Unreserved};
///
/// struct KeepSlashes;
///
/// impl Encoder for KeepSlashes {
/// 	fn encode(&self, c: char) -> bool {
/// 		c != '/' && Unreserved.encode(c)
/// 	}
/// }
///
/// let escaped = escape_with("a/b c", Charset::Utf8, KeepSlashes).unwrap();
/// assert_eq!(escaped, "a/b%20c");
/// ```
pub trait Encoder {
	/// Decide if the given character must be encoded.
	///
	/// Note that the character `%` MUST always be encoded.
	fn encode(&self, c: char) -> bool;
}

/// Encodes every character except ASCII letters, digits, `-`, `_` and `.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Unreserved;

impl Encoder for Unreserved {
	fn encode(&self, c: char) -> bool {
		!(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
	}
}

/// Percent-encode `src`, writing escaped characters as bytes of `charset`.
///
/// ```
/// use pct_charset::{escape, Charset};
///
/// assert_eq!(escape("你好", Charset::Chinese).unwrap(), "%c4%e3%ba%c3");
/// assert_eq!(escape("a b", Charset::Utf8).unwrap(), "a%20b");
/// ```
#[inline]
pub fn escape(src: &str, charset: Charset) -> Result<String> {
	escape_with(src, charset, Unreserved)
}

/// Percent-encode `src`, using `encoder` to select the characters to escape.
pub fn escape_with<E: Encoder>(src: &str, charset: Charset, encoder: E) -> Result<String> {
	let mut buf = Vec::with_capacity(4);
	let mut encoded = String::with_capacity(src.len());
	for c in src.chars() {
		if encoder.encode(c) {
			buf.clear();
			charset.encode_char(c, &mut buf)?;
			for byte in &buf {
				encoded.push('%');
				encoded.push(HEX_DIGITS[(byte >> 4) as usize] as char);
				encoded.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
			}
		} else {
			encoded.push(c);
		}
	}

	Ok(encoded)
}

/// Untrusted bytes iterator.
///
/// Iterates over the raw bytes of a percent-encoded string, decoding
/// escape sequences on the way.
struct UntrustedBytes<'a> {
	inner: std::iter::Enumerate<std::str::Bytes<'a>>,
}

impl<'a> UntrustedBytes<'a> {
	fn new(src: &'a str) -> Self {
		Self {
			inner: src.bytes().enumerate(),
		}
	}

	fn try_next(&mut self, offset: usize, next: u8) -> Result<u8> {
		match next {
			b'%' => {
				let mut digit = || {
					self.inner
						.next()
						.and_then(|(_, b)| to_digit(b))
						.ok_or(Error::InvalidEscapeSequence(offset))
				};
				let a = digit()?;
				let b = digit()?;
				Ok(a << 4 | b)
			}
			_ => Ok(next),
		}
	}
}

impl<'a> Iterator for UntrustedBytes<'a> {
	type Item = Result<u8>;

	fn next(&mut self) -> Option<Result<u8>> {
		let (offset, b) = self.inner.next()?;
		Some(self.try_next(offset, b))
	}
}

impl<'a> std::iter::FusedIterator for UntrustedBytes<'a> {}

/// Decode a percent-encoded string whose escaped bytes are in `charset`.
///
/// Hex digits are accepted in either case. Unescaped characters are kept as
/// they are; `+` is not decoded as a space.
///
/// ```
/// use pct_charset::{unescape, Charset, Error};
///
/// assert_eq!(unescape("%C4%E3%ba%c3", Charset::Chinese).unwrap(), "你好");
/// assert_eq!(unescape("a%2", Charset::Utf8), Err(Error::InvalidEscapeSequence(1)));
/// ```
pub fn unescape(src: &str, charset: Charset) -> Result<String> {
	let bytes = UntrustedBytes::new(src).collect::<Result<Vec<u8>>>()?;
	charset.decode_bytes(&bytes)
}
