use std::cmp::Ordering;
use std::fmt;

use crate::bytes::clip;
use crate::{FieldDisplay, FieldValue, FtypeError, FtypeId, Operation, ParseOptions, ReprStyle, Resolver, Result};

/// Operation set implemented once per field type.
///
/// Implementations may assume every value argument already carries their own
/// type identifier; [`TypeDescriptor`] checks that before delegating.
/// Optional operations default to [`FtypeError::Unsupported`].
pub trait FieldType: Send + Sync {
	/// Identifier this implementation serves.
	fn ftype(&self) -> FtypeId;

	/// Parse a textual literal.
	fn parse_text(&self, input: &str, options: &ParseOptions, resolver: &dyn Resolver) -> Result<FieldValue>;

	/// Build a value from wire bytes.
	fn parse_bytes(&self, bytes: &[u8]) -> Result<FieldValue>;

	/// Upper bound on the length of [`FieldType::render`] output.
	fn repr_len(&self, value: &FieldValue, style: ReprStyle, display: FieldDisplay) -> usize;

	/// Render canonical text.
	fn render(&self, value: &FieldValue, style: ReprStyle, display: FieldDisplay) -> String;

	/// Underlying storage, without copying.
	fn raw_bytes<'a>(&self, value: &'a FieldValue) -> &'a [u8] {
		value.storage()
	}

	/// Total ordering.
	fn cmp_order(&self, a: &FieldValue, b: &FieldValue) -> Ordering;

	/// Bitwise-AND intersection test.
	fn bitwise_and(&self, _a: &FieldValue, _b: &FieldValue) -> Result<bool> {
		Err(self.unsupported(Operation::BitwiseAnd))
	}

	/// Whether `b` occurs as a contiguous byte run inside `a`.
	fn contains(&self, _a: &FieldValue, _b: &FieldValue) -> Result<bool> {
		Err(self.unsupported(Operation::Contains))
	}

	/// Up to `length` bytes of storage from `offset`, clipped, never padded.
	fn slice<'a>(&self, value: &'a FieldValue, offset: usize, length: usize) -> &'a [u8] {
		clip(self.raw_bytes(value), offset, length)
	}

	/// Whether an optional operation is implemented.
	fn supports(&self, op: Operation) -> bool {
		!matches!(op, Operation::BitwiseAnd | Operation::Contains)
	}

	/// Build the unsupported-operation error for this type.
	fn unsupported(&self, op: Operation) -> FtypeError {
		FtypeError::Unsupported { ftype: self.ftype(), op }
	}
}

/// Immutable per-type record: metadata plus the operation table.
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
	/// Identifier this descriptor is registered under.
	pub id: FtypeId,
	/// Human-readable name.
	pub pretty_name: &'static str,
	/// Fixed wire size in bytes, `0` when variable.
	pub wire_size: usize,
	ops: &'static dyn FieldType,
}

impl fmt::Debug for TypeDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TypeDescriptor")
			.field("id", &self.id)
			.field("pretty_name", &self.pretty_name)
			.field("wire_size", &self.wire_size)
			.finish_non_exhaustive()
	}
}

impl TypeDescriptor {
	/// Create a descriptor around a type implementation.
	pub fn new(pretty_name: &'static str, wire_size: usize, ops: &'static dyn FieldType) -> Self {
		Self {
			id: ops.ftype(),
			pretty_name,
			wire_size,
			ops,
		}
	}

	/// Symbolic type name.
	pub fn name(&self) -> &'static str {
		self.id.name()
	}

	/// Whether `op` is implemented for this type.
	pub fn supports(&self, op: Operation) -> bool {
		self.ops.supports(op)
	}

	/// Parse a textual literal, enforcing `options.max_literal_len` first.
	pub fn parse_text(&self, input: &str, options: &ParseOptions, resolver: &dyn Resolver) -> Result<FieldValue> {
		if input.len() > options.max_literal_len {
			return Err(FtypeError::LiteralTooLong {
				len: input.len(),
				max: options.max_literal_len,
			});
		}

		let parsed = self.ops.parse_text(input, options, resolver);
		if let Err(err) = &parsed {
			tracing::trace!(ftype = %self.id, %err, "literal rejected");
		}
		parsed
	}

	/// Build a value from wire bytes.
	pub fn parse_bytes(&self, bytes: &[u8]) -> Result<FieldValue> {
		self.ops.parse_bytes(bytes)
	}

	/// Maximum rendered length for `value`.
	pub fn repr_len(&self, value: &FieldValue, style: ReprStyle, display: FieldDisplay) -> Result<usize> {
		self.check(value)?;
		Ok(self.ops.repr_len(value, style, display))
	}

	/// Render `value` as text no longer than [`TypeDescriptor::repr_len`].
	pub fn render(&self, value: &FieldValue, style: ReprStyle, display: FieldDisplay) -> Result<String> {
		self.check(value)?;
		let out = self.ops.render(value, style, display);
		debug_assert!(out.len() <= self.ops.repr_len(value, style, display), "{} rendered past repr_len", self.id);
		Ok(out)
	}

	/// Raw storage of `value`.
	pub fn raw_bytes<'a>(&self, value: &'a FieldValue) -> Result<&'a [u8]> {
		self.check(value)?;
		Ok(self.ops.raw_bytes(value))
	}

	/// Total ordering of two values of this type.
	pub fn cmp_order(&self, a: &FieldValue, b: &FieldValue) -> Result<Ordering> {
		self.check(a)?;
		self.check(b)?;
		Ok(self.ops.cmp_order(a, b))
	}

	/// Bitwise-AND intersection test.
	pub fn bitwise_and(&self, a: &FieldValue, b: &FieldValue) -> Result<bool> {
		self.check(a)?;
		self.check(b)?;
		self.ops.bitwise_and(a, b)
	}

	/// Byte-subsequence membership test.
	pub fn contains(&self, a: &FieldValue, b: &FieldValue) -> Result<bool> {
		self.check(a)?;
		self.check(b)?;
		self.ops.contains(a, b)
	}

	/// Up to `length` bytes of raw storage starting at `offset`, clipped to the storage end.
	pub fn slice<'a>(&self, value: &'a FieldValue, offset: usize, length: usize) -> Result<&'a [u8]> {
		self.check(value)?;
		Ok(self.ops.slice(value, offset, length))
	}

	fn check(&self, value: &FieldValue) -> Result<()> {
		if value.ftype() != self.id {
			return Err(value.mismatch(self.id));
		}
		Ok(())
	}
}
