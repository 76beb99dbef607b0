use std::{fmt, str::FromStr};

use encoding_rs::{Encoding, GB18030, UTF_8};

use crate::{Error, Result};

const UTF8_LABELS: &[&str] = &["utf-8", "utf8"];

const CHINESE_LABELS: &[&str] = &["gb2312", "gbk", "gb18030"];

/// Charset class of the bytes being percent-encoded.
///
/// GB2312, GBK and GB18030 are all handled as GB18030, which is a superset
/// of the other two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Charset {
	#[default]
	Utf8,
	Chinese,
}

impl Charset {
	/// Resolve an encoding label.
	///
	/// Labels are matched exactly, ignoring ASCII case.
	///
	/// ```
	/// use pct_charset::Charset;
	///
	/// assert_eq!(Charset::from_label("GBK").unwrap(), Charset::Chinese);
	/// assert_eq!(Charset::from_label("UTF-8").unwrap(), Charset::Utf8);
	/// assert!(Charset::from_label("8").is_err());
	/// ```
	pub fn from_label(label: &str) -> Result<Charset> {
		let matches = |labels: &[&str]| labels.iter().any(|l| l.eq_ignore_ascii_case(label));

		let charset = if matches(UTF8_LABELS) {
			Charset::Utf8
		} else if matches(CHINESE_LABELS) {
			Charset::Chinese
		} else {
			return Err(Error::UnrecognizedEncoding(label.to_string()));
		};

		log::trace!("encoding label `{}` resolved to {}", label, charset);
		Ok(charset)
	}

	/// Lowercase labels accepted by [`Charset::from_label`] for this charset.
	pub fn labels(&self) -> &'static [&'static str] {
		match self {
			Charset::Utf8 => UTF8_LABELS,
			Charset::Chinese => CHINESE_LABELS,
		}
	}

	/// Underlying `encoding_rs` encoding.
	#[inline]
	pub fn encoding(&self) -> &'static Encoding {
		match self {
			Charset::Utf8 => UTF_8,
			Charset::Chinese => GB18030,
		}
	}

	/// Bytes of a single character in this charset.
	pub(crate) fn encode_char(&self, c: char, buf: &mut Vec<u8>) -> Result<()> {
		let mut utf8 = [0; 4];
		let s: &str = c.encode_utf8(&mut utf8);

		match self {
			Charset::Utf8 => buf.extend_from_slice(s.as_bytes()),
			Charset::Chinese => {
				let encoding = self.encoding();
				let (bytes, _, unmappable) = encoding.encode(s);

				// Some private-use characters encode to codes that decode to
				// other characters.
				let round_trips = !unmappable
					&& encoding
						.decode_without_bom_handling_and_without_replacement(&bytes)
						.as_deref() == Some(s);
				if !round_trips {
					log::debug!("no {} mapping for {:?}", self, c);
					return Err(Error::UnmappableCharacter(c, *self));
				}

				buf.extend_from_slice(&bytes)
			}
		}

		Ok(())
	}

	/// Decode a complete byte buffer in one pass.
	pub(crate) fn decode_bytes(&self, bytes: &[u8]) -> Result<String> {
		match self {
			Charset::Utf8 => {
				let mut text = String::with_capacity(bytes.len());
				for c in utf8_decode::Decoder::new(bytes.iter().copied()) {
					text.push(c.map_err(|_| self.malformed())?);
				}

				Ok(text)
			}
			Charset::Chinese => self
				.encoding()
				.decode_without_bom_handling_and_without_replacement(bytes)
				.map(|text| text.into_owned())
				.ok_or_else(|| self.malformed()),
		}
	}

	fn malformed(&self) -> Error {
		log::debug!("decoded bytes are not valid {}", self);
		Error::MalformedText(*self)
	}
}

impl FromStr for Charset {
	type Err = Error;

	#[inline]
	fn from_str(s: &str) -> Result<Charset> {
		Charset::from_label(s)
	}
}

impl fmt::Display for Charset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Charset::Utf8 => f.write_str("UTF-8"),
			Charset::Chinese => f.write_str("GB18030"),
		}
	}
}
