use std::cmp::Ordering;

use ftypes::{FtypeError, Result as FtypeResult, bitwise_and, cmp_order, contains, registry};

use crate::cmd::util::{LiteralArgs, LiteralParser, emit_json};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	pub ftype: String,
	pub left: String,
	pub right: String,
	#[command(flatten)]
	pub literal_args: LiteralArgs,
	#[arg(long)]
	pub json: bool,
}

/// Compare two literals of one type.
pub fn run(args: Args) -> Result<()> {
	let parser = LiteralParser::new(&args.ftype, &args.literal_args)?;
	let left = parser.parse(&args.left)?;
	let right = parser.parse(&args.right)?;

	let reg = registry();
	let order = cmp_order(reg, &left, &right)?;
	let intersects = optional(bitwise_and(reg, &left, &right))?;
	let contained = optional(contains(reg, &left, &right))?;

	if args.json {
		return emit_json(&CmpJson {
			ftype: parser.descriptor().name(),
			order: order_label(order),
			equal: order.is_eq(),
			bitwise_and: intersects,
			contains: contained,
		});
	}

	println!("order: {}", order_label(order));
	println!("bitwise_and: {}", label(intersects));
	println!("contains: {}", label(contained));
	Ok(())
}

/// Unsupported operations become `None`; other errors propagate.
fn optional(result: FtypeResult<bool>) -> Result<Option<bool>> {
	match result {
		Ok(hit) => Ok(Some(hit)),
		Err(FtypeError::Unsupported { .. }) => Ok(None),
		Err(err) => Err(err.into()),
	}
}

fn order_label(order: Ordering) -> &'static str {
	match order {
		Ordering::Less => "less",
		Ordering::Equal => "equal",
		Ordering::Greater => "greater",
	}
}

fn label(value: Option<bool>) -> String {
	value.map_or_else(|| "unsupported".to_owned(), |hit| hit.to_string())
}

#[derive(serde::Serialize)]
struct CmpJson {
	ftype: &'static str,
	order: &'static str,
	equal: bool,
	bitwise_and: Option<bool>,
	contains: Option<bool>,
}
