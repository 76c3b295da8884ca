use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of field-value wire types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FtypeId {
	/// Unsigned 8-bit integer.
	UInt8,
	/// Unsigned 16-bit integer.
	UInt16,
	/// Unsigned 32-bit integer.
	UInt32,
	/// Unsigned 64-bit integer.
	UInt64,
	/// Variable-length raw byte array.
	Bytes,
	/// Six-byte Ethernet hardware address.
	Ether,
	/// UTF-8 character string.
	String,
	/// IPv4 address with netmask bit count.
	Ipv4,
	/// IPv6 address with routing prefix.
	Ipv6,
}

impl FtypeId {
	/// Number of identifiers.
	pub const COUNT: usize = 9;

	/// All identifiers in table order.
	pub const ALL: [FtypeId; Self::COUNT] = [
		Self::UInt8,
		Self::UInt16,
		Self::UInt32,
		Self::UInt64,
		Self::Bytes,
		Self::Ether,
		Self::String,
		Self::Ipv4,
		Self::Ipv6,
	];

	/// Dense table index.
	pub fn index(self) -> usize {
		self as usize
	}

	/// Stable symbolic name.
	pub fn name(self) -> &'static str {
		match self {
			Self::UInt8 => "FT_UINT8",
			Self::UInt16 => "FT_UINT16",
			Self::UInt32 => "FT_UINT32",
			Self::UInt64 => "FT_UINT64",
			Self::Bytes => "FT_BYTES",
			Self::Ether => "FT_ETHER",
			Self::String => "FT_STRING",
			Self::Ipv4 => "FT_IPv4",
			Self::Ipv6 => "FT_IPv6",
		}
	}

	/// Resolve a symbolic name, case-insensitively, with or without the `FT_` prefix.
	pub fn from_name(name: &str) -> Option<Self> {
		let short = name.get(..3).filter(|head| head.eq_ignore_ascii_case("ft_")).map_or(name, |_| &name[3..]);
		Self::ALL.into_iter().find(|id| id.name()[3..].eq_ignore_ascii_case(short))
	}

	/// Byte width for unsigned integer kinds.
	pub fn uint_width(self) -> Option<usize> {
		match self {
			Self::UInt8 => Some(1),
			Self::UInt16 => Some(2),
			Self::UInt32 => Some(4),
			Self::UInt64 => Some(8),
			_ => None,
		}
	}
}

impl fmt::Display for FtypeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// One entry of the per-type operation contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
	/// Parse a textual literal.
	ParseText,
	/// Build from wire bytes.
	ParseBytes,
	/// Render to text.
	Render,
	/// Expose raw storage.
	RawBytes,
	/// Total ordering.
	CmpOrder,
	/// Bitwise-AND intersection test.
	BitwiseAnd,
	/// Byte-subsequence membership.
	Contains,
	/// Byte-range extraction.
	Slice,
}

impl Operation {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::ParseText => "parse_text",
			Self::ParseBytes => "parse_bytes",
			Self::Render => "render",
			Self::RawBytes => "raw_bytes",
			Self::CmpOrder => "cmp_order",
			Self::BitwiseAnd => "bitwise_and",
			Self::Contains => "contains",
			Self::Slice => "slice",
		}
	}
}

impl fmt::Display for Operation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Output flavor for rendered values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReprStyle {
	/// Human-facing display text.
	#[default]
	Display,
	/// Text that reads back as a filter literal.
	Filter,
}

/// Per-field display hint: integer base or byte separator.
///
/// Types ignore hints that do not apply to them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldDisplay {
	/// Type-specific default.
	#[default]
	Default,
	/// Decimal integer.
	Dec,
	/// Zero-padded hexadecimal integer.
	Hex,
	/// Decimal followed by hexadecimal in parentheses.
	DecHex,
	/// Hexadecimal followed by decimal in parentheses.
	HexDec,
	/// Bytes separated by `:`.
	SepColon,
	/// Bytes separated by `-`.
	SepDash,
	/// Bytes separated by `.`.
	SepDot,
	/// Bytes separated by a space.
	SepSpace,
	/// Bytes without separator.
	SepNone,
}

impl FieldDisplay {
	/// Byte separator selected by this hint, `None` when the hint is not a separator.
	pub fn separator(self) -> Option<Option<char>> {
		match self {
			Self::SepColon => Some(Some(':')),
			Self::SepDash => Some(Some('-')),
			Self::SepDot => Some(Some('.')),
			Self::SepSpace => Some(Some(' ')),
			Self::SepNone => Some(None),
			_ => None,
		}
	}
}
