//! Registry-driven comparison and masking.
//!
//! Each function looks up the descriptor of its operands and delegates. Values
//! of different types are never coerced; they yield [`FtypeError::TypeMismatch`].

use std::cmp::Ordering;

use crate::{FieldValue, FtypeError, Result, TypeDescriptor, TypeRegistry};

fn same_type<'r>(registry: &'r TypeRegistry, a: &FieldValue, b: &FieldValue) -> Result<&'r TypeDescriptor> {
	if a.ftype() != b.ftype() {
		return Err(FtypeError::TypeMismatch {
			left: a.ftype(),
			right: b.ftype(),
		});
	}
	Ok(registry.lookup(a.ftype()))
}

/// Total order of two values of one type.
pub fn cmp_order(registry: &TypeRegistry, a: &FieldValue, b: &FieldValue) -> Result<Ordering> {
	same_type(registry, a, b)?.cmp_order(a, b)
}

/// `a == b` under the type's ordering.
pub fn eq(registry: &TypeRegistry, a: &FieldValue, b: &FieldValue) -> Result<bool> {
	Ok(cmp_order(registry, a, b)?.is_eq())
}

/// `a != b` under the type's ordering.
pub fn ne(registry: &TypeRegistry, a: &FieldValue, b: &FieldValue) -> Result<bool> {
	Ok(cmp_order(registry, a, b)?.is_ne())
}

/// `a > b`.
pub fn gt(registry: &TypeRegistry, a: &FieldValue, b: &FieldValue) -> Result<bool> {
	Ok(cmp_order(registry, a, b)?.is_gt())
}

/// `a >= b`.
pub fn ge(registry: &TypeRegistry, a: &FieldValue, b: &FieldValue) -> Result<bool> {
	Ok(cmp_order(registry, a, b)?.is_ge())
}

/// `a < b`.
pub fn lt(registry: &TypeRegistry, a: &FieldValue, b: &FieldValue) -> Result<bool> {
	Ok(cmp_order(registry, a, b)?.is_lt())
}

/// `a <= b`.
pub fn le(registry: &TypeRegistry, a: &FieldValue, b: &FieldValue) -> Result<bool> {
	Ok(cmp_order(registry, a, b)?.is_le())
}

/// Intersection test: whether any bit is set in both operands within scope.
pub fn bitwise_and(registry: &TypeRegistry, a: &FieldValue, b: &FieldValue) -> Result<bool> {
	same_type(registry, a, b)?.bitwise_and(a, b)
}

/// Whether `needle` occurs as a contiguous run inside `haystack`.
pub fn contains(registry: &TypeRegistry, haystack: &FieldValue, needle: &FieldValue) -> Result<bool> {
	same_type(registry, haystack, needle)?.contains(haystack, needle)
}
