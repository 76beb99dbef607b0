extern crate pct_charset;

use pct_charset::{Codec, Error};

fn main() -> pct_charset::Result<()> {
	// A [`Codec`] resolves the encoding label once.
	let codec = Codec::from_label("GB18030")?;

	// Hex digits are accepted in either case.
	println!("{}", codec.decode("%C4%E3%ba%c3")?);
	// => 你好

	// Malformed escapes are reported with their byte offset.
	match codec.decode("100%") {
		Err(Error::InvalidEscapeSequence(offset)) => println!("bad escape at {}", offset),
		other => println!("{:?}", other),
	}
	// => bad escape at 3

	Ok(())
}
