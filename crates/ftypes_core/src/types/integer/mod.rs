use std::cmp::Ordering;

use crate::bytes::Cursor;
use crate::codec::{decimal_len, parse_uint_literal};
use crate::value::uint_max;
use crate::{FieldDisplay, FieldType, FieldValue, FtypeError, FtypeId, Operation, ParseOptions, RegistryBuilder, ReprStyle, Resolver, Result, TypeDescriptor};

/// Fixed-width unsigned integer carried in network byte order.
struct UintType {
	id: FtypeId,
	width: usize,
}

static UINT8: UintType = UintType { id: FtypeId::UInt8, width: 1 };
static UINT16: UintType = UintType { id: FtypeId::UInt16, width: 2 };
static UINT32: UintType = UintType { id: FtypeId::UInt32, width: 4 };
static UINT64: UintType = UintType { id: FtypeId::UInt64, width: 8 };

pub(crate) fn register(builder: &mut RegistryBuilder) {
	builder
		.register(TypeDescriptor::new("Unsigned integer (8 bits)", 1, &UINT8))
		.register(TypeDescriptor::new("Unsigned integer (16 bits)", 2, &UINT16))
		.register(TypeDescriptor::new("Unsigned integer (32 bits)", 4, &UINT32))
		.register(TypeDescriptor::new("Unsigned integer (64 bits)", 8, &UINT64));
}

impl UintType {
	fn max(&self) -> u64 {
		uint_max(self.width)
	}

	fn hex_len(&self) -> usize {
		2 + 2 * self.width
	}
}

fn uinteger(value: &FieldValue) -> u64 {
	value.as_uinteger().unwrap_or_default()
}

impl FieldType for UintType {
	fn ftype(&self) -> FtypeId {
		self.id
	}

	fn parse_text(&self, input: &str, _options: &ParseOptions, _resolver: &dyn Resolver) -> Result<FieldValue> {
		let value = parse_uint_literal(input, self.max())?;
		FieldValue::uinteger(self.id, value)
	}

	fn parse_bytes(&self, bytes: &[u8]) -> Result<FieldValue> {
		if bytes.len() != self.width {
			return Err(FtypeError::WireSizeMismatch {
				ftype: self.id,
				expected: self.width,
				got: bytes.len(),
			});
		}
		let raw = Cursor::new(bytes).read_uint_be(self.width)?;
		FieldValue::uinteger(self.id, u64::from_be_bytes(raw))
	}

	fn repr_len(&self, _value: &FieldValue, style: ReprStyle, display: FieldDisplay) -> usize {
		let dec = decimal_len(self.max());
		match (style, display) {
			(ReprStyle::Filter, FieldDisplay::Hex | FieldDisplay::HexDec) => self.hex_len(),
			(ReprStyle::Filter, _) => dec,
			(ReprStyle::Display, FieldDisplay::Hex) => self.hex_len(),
			(ReprStyle::Display, FieldDisplay::DecHex | FieldDisplay::HexDec) => dec + self.hex_len() + 3,
			(ReprStyle::Display, _) => dec,
		}
	}

	fn render(&self, value: &FieldValue, style: ReprStyle, display: FieldDisplay) -> String {
		let value = uinteger(value);
		let hex = || format!("0x{value:0width$x}", width = 2 * self.width);
		match (style, display) {
			(ReprStyle::Filter, FieldDisplay::Hex | FieldDisplay::HexDec) => hex(),
			(ReprStyle::Filter, _) => value.to_string(),
			(ReprStyle::Display, FieldDisplay::Hex) => hex(),
			(ReprStyle::Display, FieldDisplay::DecHex) => format!("{value} ({})", hex()),
			(ReprStyle::Display, FieldDisplay::HexDec) => format!("{} ({value})", hex()),
			(ReprStyle::Display, _) => value.to_string(),
		}
	}

	fn cmp_order(&self, a: &FieldValue, b: &FieldValue) -> Ordering {
		uinteger(a).cmp(&uinteger(b))
	}

	fn bitwise_and(&self, a: &FieldValue, b: &FieldValue) -> Result<bool> {
		Ok(uinteger(a) & uinteger(b) != 0)
	}

	fn supports(&self, op: Operation) -> bool {
		op != Operation::Contains
	}
}
