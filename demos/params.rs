extern crate pct_charset;

use pct_charset::{url_decode, url_encode, Params};

fn main() -> pct_charset::Result<()> {
	let mut params = Params::new();
	params.insert("name".to_string(), "张三".to_string());
	params.insert("city".to_string(), "北京".to_string());

	// Keys are written in sorted order.
	let encoded = url_encode(Some(&params), "gbk")?;
	println!("{}", encoded);
	// => city=%b1%b1%be%a9&name=%d5%c5%c8%fd

	for (key, value) in url_decode(&encoded, "gbk")? {
		println!("{} = {}", key, value);
	}

	Ok(())
}
