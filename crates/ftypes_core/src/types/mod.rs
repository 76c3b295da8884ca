//! Built-in field type implementations.

mod byte_array;
mod integer;
mod ipv4;
mod ipv6;
pub(crate) mod prefix;
mod string;

use crate::RegistryBuilder;

/// Register every built-in type.
pub(crate) fn register_builtin(builder: &mut RegistryBuilder) {
	integer::register(builder);
	byte_array::register(builder);
	string::register(builder);
	ipv4::register(builder);
	ipv6::register(builder);
}
