use ftypes::{FieldDisplay, ReprStyle};

use crate::cmd::util::{DisplayArg, LiteralArgs, LiteralParser, StyleArg, emit_json, hex_bytes};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	/// Field type name, e.g. `ipv6` or `FT_UINT16`.
	pub ftype: String,
	pub literal: String,
	#[command(flatten)]
	pub literal_args: LiteralArgs,
	#[arg(long, value_enum, default_value_t)]
	pub style: StyleArg,
	#[arg(long, value_enum, default_value_t)]
	pub display: DisplayArg,
	#[arg(long)]
	pub json: bool,
}

/// Parse one literal and print its canonical form and storage.
pub fn run(args: Args) -> Result<()> {
	let parser = LiteralParser::new(&args.ftype, &args.literal_args)?;
	let descriptor = parser.descriptor();
	let value = parser.parse(&args.literal)?;

	let style = ReprStyle::from(args.style);
	let display = FieldDisplay::from(args.display);
	let rendered = descriptor.render(&value, style, display)?;
	let repr_len = descriptor.repr_len(&value, style, display)?;
	let raw = descriptor.raw_bytes(&value)?;
	let prefix = value.as_ipv6().map(|addr| addr.prefix()).or_else(|| value.as_ipv4().map(|addr| addr.prefix()));

	if args.json {
		return emit_json(&ParseJson {
			ftype: descriptor.name(),
			input: &args.literal,
			rendered: &rendered,
			repr_len,
			prefix,
			len: value.len(),
			raw: hex_bytes(raw),
		});
	}

	println!("type: {} ({})", descriptor.name(), descriptor.pretty_name);
	println!("rendered: {rendered}");
	if let Some(prefix) = prefix {
		println!("prefix: {prefix}");
	}
	println!("len: {}", value.len());
	println!("raw: {}", hex_bytes(raw));
	Ok(())
}

#[derive(serde::Serialize)]
struct ParseJson<'a> {
	ftype: &'static str,
	input: &'a str,
	rendered: &'a str,
	repr_len: usize,
	prefix: Option<u32>,
	len: usize,
	raw: String,
}
