use ftypes::{registry, slice};

use crate::cmd::util::{LiteralArgs, LiteralParser, emit_json, hex_bytes};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	pub ftype: String,
	pub literal: String,
	pub offset: usize,
	pub length: usize,
	#[command(flatten)]
	pub literal_args: LiteralArgs,
	#[arg(long)]
	pub json: bool,
}

/// Print up to `length` bytes of storage starting at `offset`.
pub fn run(args: Args) -> Result<()> {
	let parser = LiteralParser::new(&args.ftype, &args.literal_args)?;
	let value = parser.parse(&args.literal)?;
	let bytes = slice(registry(), &value, args.offset, args.length)?;

	if args.json {
		return emit_json(&SliceJson {
			ftype: parser.descriptor().name(),
			offset: args.offset,
			requested: args.length,
			returned: bytes.len(),
			bytes: hex_bytes(bytes),
		});
	}

	println!("bytes: {}", hex_bytes(bytes));
	if bytes.len() < args.length {
		println!("clipped: {} of {} bytes", bytes.len(), args.length);
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct SliceJson {
	ftype: &'static str,
	offset: usize,
	requested: usize,
	returned: usize,
	bytes: String,
}
