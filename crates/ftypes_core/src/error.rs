use thiserror::Error;

use crate::{FtypeId, Operation};

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, FtypeError>;

/// Errors produced while parsing, rendering, and comparing field values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FtypeError {
	/// Address literal neither parsed nor resolved.
	#[error("\"{input}\" is not a valid hostname or {family} address.")]
	InvalidAddress {
		/// Full user-provided literal.
		input: String,
		/// Address family label (`IPv4`, `IPv6`).
		family: &'static str,
	},
	/// Prefix or netmask bit count above the address width.
	#[error("{what} should be <= {max}, not {prefix}")]
	PrefixOutOfRange {
		/// Leading phrase naming the prefix kind.
		what: &'static str,
		/// Parsed prefix value.
		prefix: u64,
		/// Address bit width.
		max: u32,
	},
	/// Numeric literal syntax is invalid.
	#[error("\"{input}\" is not a valid number.")]
	InvalidNumber {
		/// Offending literal.
		input: String,
	},
	/// Numeric literal does not fit the field width.
	#[error("\"{input}\" too big for this field, maximum {max}.")]
	NumberOutOfRange {
		/// Offending literal.
		input: String,
		/// Largest accepted value.
		max: u64,
	},
	/// Literal text is not valid for the target type.
	#[error("\"{input}\" is not a valid {kind}.")]
	InvalidLiteral {
		/// Offending literal.
		input: String,
		/// Human-readable target kind.
		kind: &'static str,
	},
	/// Literal text exceeded the configured length limit.
	#[error("literal of {len} bytes exceeds limit {max}")]
	LiteralTooLong {
		/// Literal length in bytes.
		len: usize,
		/// Configured maximum.
		max: usize,
	},
	/// Wire bytes did not match the fixed wire size.
	#[error("{ftype} expects {expected} wire bytes, got {got}")]
	WireSizeMismatch {
		/// Target type.
		ftype: FtypeId,
		/// Required byte count.
		expected: usize,
		/// Supplied byte count.
		got: usize,
	},
	/// Wire bytes of a string field were not UTF-8.
	#[error("invalid UTF-8 in string field at byte {valid_up_to}")]
	InvalidUtf8 {
		/// Length of the valid prefix.
		valid_up_to: usize,
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// The type has no implementation for the requested operation.
	#[error("{ftype} does not support {op}")]
	Unsupported {
		/// Type that was asked.
		ftype: FtypeId,
		/// Requested operation.
		op: Operation,
	},
	/// Two operands of different types reached a binary operation.
	#[error("type mismatch: {left} vs {right}")]
	TypeMismatch {
		/// Left operand type.
		left: FtypeId,
		/// Right operand type.
		right: FtypeId,
	},
}

impl FtypeError {
	/// Whether this error describes bad user input rather than a caller defect.
	pub fn is_parse_error(&self) -> bool {
		!matches!(self, Self::Unsupported { .. } | Self::TypeMismatch { .. })
	}
}
