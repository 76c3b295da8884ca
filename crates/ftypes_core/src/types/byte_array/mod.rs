use std::cmp::Ordering;

use crate::bytes::read_fixed;
use crate::codec::{hex_bytes_len, parse_hex_bytes, write_hex_bytes};
use crate::{FieldDisplay, FieldType, FieldValue, FtypeError, FtypeId, Operation, ParseOptions, RegistryBuilder, ReprStyle, Resolver, Result, TypeDescriptor};

const ETHER_LEN: usize = 6;

/// Raw byte arrays: variable-length `Bytes` and six-byte `Ether`.
struct ByteArrayType {
	id: FtypeId,
	/// Separator used when the display hint does not pick one.
	default_separator: Option<char>,
}

static BYTES: ByteArrayType = ByteArrayType {
	id: FtypeId::Bytes,
	default_separator: None,
};
static ETHER: ByteArrayType = ByteArrayType {
	id: FtypeId::Ether,
	default_separator: Some(':'),
};

pub(crate) fn register(builder: &mut RegistryBuilder) {
	builder
		.register(TypeDescriptor::new("Byte sequence", 0, &BYTES))
		.register(TypeDescriptor::new("Ethernet or other MAC address", ETHER_LEN, &ETHER));
}

fn bytes_of(value: &FieldValue) -> &[u8] {
	value.as_byte_array().unwrap_or_default()
}

impl ByteArrayType {
	fn separator(&self, style: ReprStyle, display: FieldDisplay) -> Option<char> {
		match style {
			ReprStyle::Filter => Some(':'),
			ReprStyle::Display => display.separator().unwrap_or(self.default_separator),
		}
	}

	fn build(&self, bytes: Vec<u8>) -> FieldValue {
		match self.id {
			FtypeId::Ether => {
				let mut addr = [0_u8; ETHER_LEN];
				addr.copy_from_slice(&bytes);
				FieldValue::ether(addr)
			}
			_ => FieldValue::bytes(bytes),
		}
	}
}

impl FieldType for ByteArrayType {
	fn ftype(&self) -> FtypeId {
		self.id
	}

	fn parse_text(&self, input: &str, options: &ParseOptions, _resolver: &dyn Resolver) -> Result<FieldValue> {
		let bytes = parse_hex_bytes(input, options.max_bytes_len)?;
		if self.id == FtypeId::Ether && bytes.len() != ETHER_LEN {
			return Err(FtypeError::InvalidLiteral {
				input: input.to_owned(),
				kind: "Ethernet address",
			});
		}
		Ok(self.build(bytes))
	}

	fn parse_bytes(&self, bytes: &[u8]) -> Result<FieldValue> {
		match self.id {
			FtypeId::Ether => Ok(FieldValue::ether(read_fixed::<ETHER_LEN>(self.id, bytes)?)),
			_ => Ok(FieldValue::bytes(bytes)),
		}
	}

	fn repr_len(&self, value: &FieldValue, style: ReprStyle, display: FieldDisplay) -> usize {
		hex_bytes_len(bytes_of(value).len(), self.separator(style, display))
	}

	fn render(&self, value: &FieldValue, style: ReprStyle, display: FieldDisplay) -> String {
		let bytes = bytes_of(value);
		let separator = self.separator(style, display);
		let mut out = String::with_capacity(hex_bytes_len(bytes.len(), separator));
		write_hex_bytes(&mut out, bytes, separator);
		out
	}

	/// Shorter arrays sort first; equal lengths compare bytewise.
	fn cmp_order(&self, a: &FieldValue, b: &FieldValue) -> Ordering {
		let (a, b) = (bytes_of(a), bytes_of(b));
		a.len().cmp(&b.len()).then_with(|| a.cmp(b))
	}

	/// Arrays of different lengths never intersect.
	fn bitwise_and(&self, a: &FieldValue, b: &FieldValue) -> Result<bool> {
		let (a, b) = (bytes_of(a), bytes_of(b));
		Ok(a.len() == b.len() && a.iter().zip(b).any(|(x, y)| x & y != 0))
	}

	fn contains(&self, a: &FieldValue, b: &FieldValue) -> Result<bool> {
		Ok(contains_run(bytes_of(a), bytes_of(b)))
	}

	fn supports(&self, _op: Operation) -> bool {
		true
	}
}

/// Whether `needle` occurs contiguously in `haystack`; the empty run always does.
pub(crate) fn contains_run(haystack: &[u8], needle: &[u8]) -> bool {
	needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}
