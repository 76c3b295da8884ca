use crate::{FtypeError, FtypeId, Ipv4Prefix, Ipv6Prefix, Result};

/// One typed protocol value: a type identifier plus its payload.
///
/// Values are immutable once built. Equality here is structural; filter
/// semantics (prefix-aware ordering and so on) live in the comparison engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldValue {
	ftype: FtypeId,
	data: ValueData,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum ValueData {
	/// Big-endian, right-aligned in eight bytes.
	Uinteger([u8; 8]),
	Bytes(Vec<u8>),
	String(Box<str>),
	Ipv4(Ipv4Prefix),
	Ipv6(Ipv6Prefix),
}

impl FieldValue {
	/// Build an unsigned integer value, rejecting values wider than the type.
	pub fn uinteger(ftype: FtypeId, value: u64) -> Result<Self> {
		let width = ftype.uint_width().ok_or(FtypeError::Unsupported {
			ftype,
			op: crate::Operation::ParseText,
		})?;
		let max = uint_max(width);
		if value > max {
			return Err(FtypeError::NumberOutOfRange {
				input: value.to_string(),
				max,
			});
		}
		Ok(Self {
			ftype,
			data: ValueData::Uinteger(value.to_be_bytes()),
		})
	}

	/// Build a raw byte-array value.
	pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
		Self {
			ftype: FtypeId::Bytes,
			data: ValueData::Bytes(bytes.into()),
		}
	}

	/// Build an Ethernet address value.
	pub fn ether(addr: [u8; 6]) -> Self {
		Self {
			ftype: FtypeId::Ether,
			data: ValueData::Bytes(addr.to_vec()),
		}
	}

	/// Build a string value.
	pub fn string(text: impl Into<Box<str>>) -> Self {
		Self {
			ftype: FtypeId::String,
			data: ValueData::String(text.into()),
		}
	}

	/// Build an IPv4 value.
	pub fn ipv4(addr: Ipv4Prefix) -> Self {
		Self {
			ftype: FtypeId::Ipv4,
			data: ValueData::Ipv4(addr),
		}
	}

	/// Build an IPv6 value.
	pub fn ipv6(addr: Ipv6Prefix) -> Self {
		Self {
			ftype: FtypeId::Ipv6,
			data: ValueData::Ipv6(addr),
		}
	}

	/// Owning type identifier.
	pub fn ftype(&self) -> FtypeId {
		self.ftype
	}

	/// Integer payload for unsigned integer kinds.
	pub fn as_uinteger(&self) -> Option<u64> {
		match &self.data {
			ValueData::Uinteger(raw) => Some(u64::from_be_bytes(*raw)),
			_ => None,
		}
	}

	/// Byte payload for `Bytes` and `Ether`.
	pub fn as_byte_array(&self) -> Option<&[u8]> {
		match &self.data {
			ValueData::Bytes(bytes) => Some(bytes),
			_ => None,
		}
	}

	/// Text payload for `String`.
	pub fn as_str(&self) -> Option<&str> {
		match &self.data {
			ValueData::String(text) => Some(text),
			_ => None,
		}
	}

	/// Address payload for `Ipv4`.
	pub fn as_ipv4(&self) -> Option<&Ipv4Prefix> {
		match &self.data {
			ValueData::Ipv4(addr) => Some(addr),
			_ => None,
		}
	}

	/// Address payload for `Ipv6`.
	pub fn as_ipv6(&self) -> Option<&Ipv6Prefix> {
		match &self.data {
			ValueData::Ipv6(addr) => Some(addr),
			_ => None,
		}
	}

	/// Underlying storage, without copying.
	pub fn storage(&self) -> &[u8] {
		match &self.data {
			ValueData::Uinteger(raw) => {
				let width = self.ftype.uint_width().unwrap_or(raw.len());
				&raw[raw.len() - width..]
			}
			ValueData::Bytes(bytes) => bytes,
			ValueData::String(text) => text.as_bytes(),
			ValueData::Ipv4(addr) => addr.addr(),
			ValueData::Ipv6(addr) => addr.addr(),
		}
	}

	/// Storage length in bytes.
	pub fn len(&self) -> usize {
		self.storage().len()
	}

	/// Whether the storage is empty.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Type-mismatch error against `expected`.
	pub(crate) fn mismatch(&self, expected: FtypeId) -> FtypeError {
		FtypeError::TypeMismatch {
			left: expected,
			right: self.ftype,
		}
	}
}

/// Largest value representable in `width` bytes.
pub(crate) fn uint_max(width: usize) -> u64 {
	if width >= 8 { u64::MAX } else { (1_u64 << (width * 8)) - 1 }
}
