//! `FT_IPv6`: a 16-byte address carrying a routing prefix length.
//!
//! Literals take the form `address[/prefix]` where the address is any RFC 4291
//! text form or, when enabled, a hostname handed to the [`Resolver`]. Values
//! compare and intersect only over the shorter of the two prefixes, so
//! `2001:db8::1/64` and `2001:db8::ffff/64` are equal.

use std::cmp::Ordering;

use crate::bytes::read_fixed;
use crate::codec::parse_ipv6_literal;
use crate::types::prefix::{Family, Ipv6Prefix, parse_addr_prefix};
use crate::{FieldDisplay, FieldType, FieldValue, FtypeId, Operation, ParseOptions, RegistryBuilder, ReprStyle, Resolver, Result, TypeDescriptor};

/// Upper bound of a rendered address, including the embedded-IPv4 form
/// `ffff:ffff:ffff:ffff:ffff:ffff:255.255.255.255`.
const REPR_LEN: usize = 45;

const FAMILY: Family = Family {
	label: "IPv6",
	prefix_phrase: "Prefix in a IPv6 address",
};

struct Ipv6Type;

static IPV6: Ipv6Type = Ipv6Type;

pub(crate) fn register(builder: &mut RegistryBuilder) {
	builder.register(TypeDescriptor::new("IPv6 address", 16, &IPV6));
}

fn prefix_of(value: &FieldValue) -> Ipv6Prefix {
	value.as_ipv6().copied().unwrap_or(Ipv6Prefix::host([0; 16]))
}

impl FieldType for Ipv6Type {
	fn ftype(&self) -> FtypeId {
		FtypeId::Ipv6
	}

	fn parse_text(&self, input: &str, options: &ParseOptions, resolver: &dyn Resolver) -> Result<FieldValue> {
		let addr = parse_addr_prefix(input, options, &FAMILY, parse_ipv6_literal, |name| {
			resolver.resolve_ipv6(name).map(|addr| addr.octets())
		})?;
		Ok(FieldValue::ipv6(addr))
	}

	/// Captured addresses have no prefix on the wire; they are host routes.
	fn parse_bytes(&self, bytes: &[u8]) -> Result<FieldValue> {
		let addr = read_fixed::<16>(FtypeId::Ipv6, bytes)?;
		Ok(FieldValue::ipv6(Ipv6Prefix::host(addr)))
	}

	fn repr_len(&self, _value: &FieldValue, _style: ReprStyle, _display: FieldDisplay) -> usize {
		REPR_LEN
	}

	/// Canonical RFC 5952 text; the prefix is not rendered.
	fn render(&self, value: &FieldValue, _style: ReprStyle, _display: FieldDisplay) -> String {
		prefix_of(value).ip().to_string()
	}

	fn cmp_order(&self, a: &FieldValue, b: &FieldValue) -> Ordering {
		prefix_of(a).cmp_prefix(&prefix_of(b))
	}

	fn bitwise_and(&self, a: &FieldValue, b: &FieldValue) -> Result<bool> {
		Ok(prefix_of(a).intersects(&prefix_of(b)))
	}

	fn supports(&self, op: Operation) -> bool {
		op != Operation::Contains
	}
}

#[cfg(test)]
mod tests;
