use ftypes::{FtypeId, Operation, registry};

use crate::cmd::util::emit_json;
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	#[arg(long)]
	pub json: bool,
}

const OPTIONAL_OPS: [Operation; 2] = [Operation::BitwiseAnd, Operation::Contains];

/// Print every registered descriptor.
pub fn run(args: Args) -> Result<()> {
	let rows: Vec<TypeJson> = registry()
		.iter()
		.map(|descriptor| TypeJson {
			id: descriptor.id,
			name: descriptor.name(),
			pretty_name: descriptor.pretty_name,
			wire_size: descriptor.wire_size,
			ops: OPTIONAL_OPS.into_iter().filter(|op| descriptor.supports(*op)).map(Operation::as_str).collect(),
		})
		.collect();

	if args.json {
		return emit_json(&TypesJson { types: rows });
	}

	for row in rows {
		let size = if row.wire_size == 0 { "var".to_owned() } else { row.wire_size.to_string() };
		println!("{:<10} {:>3}  {}  [{}]", row.name, size, row.pretty_name, row.ops.join(", "));
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct TypeJson {
	id: FtypeId,
	name: &'static str,
	pretty_name: &'static str,
	wire_size: usize,
	ops: Vec<&'static str>,
}

#[derive(serde::Serialize)]
struct TypesJson {
	types: Vec<TypeJson>,
}
