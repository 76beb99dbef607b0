use std::collections::BTreeMap;

use crate::{escape, unescape, Charset, Error, Field, Result};

/// Parameter set.
///
/// Keys are kept sorted so that encoding is reproducible.
pub type Params = BTreeMap<String, String>;

/// Encode a parameter set as `key=value` pairs joined with `&`, in key order.
///
/// ```
/// use pct_charset::{encode_params, Charset, Params};
///
/// let mut params = Params::new();
/// params.insert("b".to_string(), "2".to_string());
/// params.insert("a".to_string(), "1 + 1".to_string());
///
/// assert_eq!(encode_params(&params, Charset::Utf8).unwrap(), "a=1%20%2b%201&b=2");
/// ```
pub fn encode_params(params: &Params, charset: Charset) -> Result<String> {
	let mut encoded = String::new();
	for (i, (key, value)) in params.iter().enumerate() {
		if i > 0 {
			encoded.push('&');
		}

		encoded.push_str(&escape(key, charset)?);
		encoded.push('=');
		encoded.push_str(&escape(value, charset)?);
	}

	Ok(encoded)
}

/// Encode a sequence of key/value pairs.
///
/// The pairs are first collected into a [`Params`], so output is sorted by
/// key and when a key appears more than once the last value is used.
pub fn encode_pairs<I, K, V>(pairs: I, charset: Charset) -> Result<String>
where
	I: IntoIterator<Item = (K, V)>,
	K: Into<String>,
	V: Into<String>,
{
	let params: Params = pairs
		.into_iter()
		.map(|(k, v)| (k.into(), v.into()))
		.collect();
	encode_params(&params, charset)
}

/// Decode a `key=value&...` string into a parameter set.
///
/// Each segment is split on its first `=`; a segment without `=` maps its
/// key to the empty string, so an empty segment (as in `a=1&&b=2`) maps the
/// empty key to the empty string. An empty input gives an empty set. When a
/// key appears more than once the last value is used.
///
/// ```
/// use pct_charset::{decode_params, Charset};
///
/// let params = decode_params("q=a%3db&flag", Charset::Utf8).unwrap();
/// assert_eq!(params["q"], "a=b");
/// assert_eq!(params["flag"], "");
/// ```
pub fn decode_params(src: &str, charset: Charset) -> Result<Params> {
	let mut params = Params::new();
	if src.is_empty() {
		return Ok(params);
	}

	for (index, segment) in src.split('&').enumerate() {
		let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
		let field_error = |field: Field| {
			move |e: Error| Error::Decode {
				index,
				field,
				source: Box::new(e),
			}
		};

		let key = unescape(key, charset).map_err(field_error(Field::Key))?;
		let value = unescape(value, charset).map_err(field_error(Field::Value))?;
		params.insert(key, value);
	}

	Ok(params)
}
