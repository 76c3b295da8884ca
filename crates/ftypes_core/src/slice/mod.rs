//! Byte-range extraction over raw value storage.
//!
//! Ranges that run past the storage are clipped, never padded and never an
//! error. Callers that care whether a request was fully satisfied compare the
//! requested length against what came back.

use crate::{FieldValue, Result, TypeRegistry};

/// Up to `length` bytes of `value` starting at `offset`.
pub fn slice<'a>(registry: &TypeRegistry, value: &'a FieldValue, offset: usize, length: usize) -> Result<&'a [u8]> {
	registry.lookup(value.ftype()).slice(value, offset, length)
}

/// How a range node ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEnd {
	/// Take this many bytes from the start (`[i:n]`).
	Length(usize),
	/// Stop at this inclusive offset; negative counts from the end (`[i-j]`).
	Offset(isize),
	/// Run to the end of storage (`[i:]`).
	ToEnd,
}

/// One `start` + `end` selector inside a [`DRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DRangeNode {
	/// First byte; negative counts back from the end.
	pub start: isize,
	/// Where the range stops.
	pub end: RangeEnd,
}

impl DRangeNode {
	/// `[start:length]`.
	pub fn with_length(start: isize, length: usize) -> Self {
		Self {
			start,
			end: RangeEnd::Length(length),
		}
	}

	/// `[start-end]`, both inclusive.
	pub fn through(start: isize, end: isize) -> Self {
		Self {
			start,
			end: RangeEnd::Offset(end),
		}
	}

	/// `[start:]`.
	pub fn to_end(start: isize) -> Self {
		Self { start, end: RangeEnd::ToEnd }
	}

	/// Resolve to `(offset, length)` against storage of `len` bytes.
	///
	/// Negative positions that reach before the first byte clamp to zero. An
	/// end before the start yields an empty range.
	pub fn resolve(&self, len: usize) -> (usize, usize) {
		let start = absolute(self.start, len);
		let length = match self.end {
			RangeEnd::Length(length) => length,
			RangeEnd::Offset(end) => {
				let end = absolute(end, len);
				if end < start { 0 } else { end - start + 1 }
			}
			RangeEnd::ToEnd => len.saturating_sub(start),
		};
		(start, length)
	}
}

fn absolute(pos: isize, len: usize) -> usize {
	if pos >= 0 { pos.unsigned_abs() } else { len.saturating_sub(pos.unsigned_abs()) }
}

/// Ordered list of ranges whose selections are concatenated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DRange {
	/// Ranges in output order.
	pub nodes: Vec<DRangeNode>,
}

impl DRange {
	/// Range list from nodes.
	pub fn new(nodes: impl Into<Vec<DRangeNode>>) -> Self {
		Self { nodes: nodes.into() }
	}

	/// Append one range.
	pub fn push(&mut self, node: DRangeNode) -> &mut Self {
		self.nodes.push(node);
		self
	}
}

/// Concatenate every clipped range of `drange` over `value`.
pub fn slice_drange(registry: &TypeRegistry, value: &FieldValue, drange: &DRange) -> Result<Vec<u8>> {
	let descriptor = registry.lookup(value.ftype());
	let len = descriptor.raw_bytes(value)?.len();

	let mut out = Vec::new();
	for node in &drange.nodes {
		let (offset, length) = node.resolve(len);
		out.extend_from_slice(descriptor.slice(value, offset, length)?);
	}
	Ok(out)
}

#[cfg(test)]
mod tests;
