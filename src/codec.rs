use crate::{decode_params, encode_params, escape, unescape, Charset, Params, Result};

/// Percent-encoding codec bound to a charset.
///
/// Resolves the encoding label once and reuses it for every call.
///
/// ```
/// use pct_charset::Codec;
///
/// let codec = Codec::from_label("gbk").unwrap();
/// let encoded = codec.encode("你好").unwrap();
/// assert_eq!(encoded, "%c4%e3%ba%c3");
/// assert_eq!(codec.decode(&encoded).unwrap(), "你好");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Codec {
	charset: Charset,
}

impl Codec {
	/// Create a codec for the given charset.
	#[inline]
	pub fn new(charset: Charset) -> Self {
		Self { charset }
	}

	/// Create a codec from an encoding label such as `utf-8` or `GBK`.
	pub fn from_label(label: &str) -> Result<Self> {
		Ok(Self::new(Charset::from_label(label)?))
	}

	/// Charset of the escaped bytes.
	#[inline]
	pub fn charset(&self) -> Charset {
		self.charset
	}

	/// Percent-encode `text`. See [`escape`].
	#[inline]
	pub fn encode(&self, text: &str) -> Result<String> {
		escape(text, self.charset)
	}

	/// Decode percent-encoded `text`. See [`unescape`].
	#[inline]
	pub fn decode(&self, text: &str) -> Result<String> {
		unescape(text, self.charset)
	}

	/// Encode a parameter set in key order. See [`encode_params`].
	#[inline]
	pub fn encode_params(&self, params: &Params) -> Result<String> {
		encode_params(params, self.charset)
	}

	/// Decode a `key=value&...` string. See [`decode_params`].
	#[inline]
	pub fn decode_params(&self, text: &str) -> Result<Params> {
		decode_params(text, self.charset)
	}
}

impl From<Charset> for Codec {
	fn from(charset: Charset) -> Self {
		Self::new(charset)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Error;

	#[test]
	fn default_is_utf8() {
		let codec = Codec::default();
		assert_eq!(codec.charset(), Charset::Utf8);
		assert_eq!(codec.encode("你").unwrap(), "%e4%bd%a0");
	}

	#[test]
	fn from_label() {
		assert_eq!(Codec::from_label("GB2312").unwrap(), Codec::new(Charset::Chinese));
		assert_eq!(
			Codec::from_label("latin1"),
			Err(Error::UnrecognizedEncoding("latin1".to_string()))
		);
	}

	#[test]
	fn params_round_trip() {
		let codec = Codec::from(Charset::Chinese);
		let mut params = Params::new();
		params.insert("城市".to_string(), "上海".to_string());
		params.insert("id".to_string(), "42".to_string());

		let encoded = codec.encode_params(&params).unwrap();
		assert_eq!(encoded, "id=42&%b3%c7%ca%d0=%c9%cf%ba%a3");
		assert_eq!(codec.decode_params(&encoded).unwrap(), params);
	}
}
