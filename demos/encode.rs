extern crate pct_charset;

use pct_charset::{escape_with, Charset, Encoder, Unreserved};

struct KeepSlashes;

impl Encoder for KeepSlashes {
	fn encode(&self, c: char) -> bool {
		c != '/' && Unreserved.encode(c)
	}
}

fn main() -> pct_charset::Result<()> {
	// The same text gives different escapes depending on the charset.
	println!("{}", pct_charset::encode("你好 world", "utf-8")?);
	// => %e4%bd%a0%e5%a5%bd%20world
	println!("{}", pct_charset::encode("你好 world", "gbk")?);
	// => %c4%e3%ba%c3%20world

	// You can choose which characters are escaped by implementing the
	// [`Encoder`] trait.
	println!("{}", escape_with("路径/文件 名", Charset::Chinese, KeepSlashes)?);
	// => %c2%b7%be%b6/%ce%c4%bc%fe%20%c3%fb

	Ok(())
}
