use crate::{FtypeError, Result};

/// Simple bounded cursor over an immutable byte slice.
pub(crate) struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub(crate) fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return remaining unread bytes.
	pub(crate) fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub(crate) fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(FtypeError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read a fixed-size array.
	pub(crate) fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_exact(N)?;
		let mut out = [0_u8; N];
		out.copy_from_slice(raw);
		Ok(out)
	}

	/// Read a big-endian unsigned integer of `width` bytes (1..=8) into the low bytes of a `[u8; 8]`.
	pub(crate) fn read_uint_be(&mut self, width: usize) -> Result<[u8; 8]> {
		let raw = self.read_exact(width)?;
		let mut out = [0_u8; 8];
		out[8 - width..].copy_from_slice(raw);
		Ok(out)
	}
}

/// Read a whole fixed-size wire value, rejecting short and trailing input.
pub(crate) fn read_fixed<const N: usize>(ftype: crate::FtypeId, bytes: &[u8]) -> Result<[u8; N]> {
	if bytes.len() != N {
		return Err(FtypeError::WireSizeMismatch {
			ftype,
			expected: N,
			got: bytes.len(),
		});
	}
	Cursor::new(bytes).read_array::<N>()
}

/// Clip `offset..offset + length` to the bounds of `bytes`.
pub(crate) fn clip(bytes: &[u8], offset: usize, length: usize) -> &[u8] {
	let start = offset.min(bytes.len());
	let end = start.saturating_add(length).min(bytes.len());
	&bytes[start..end]
}
