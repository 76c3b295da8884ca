use std::cmp::Ordering;

use crate::bytes::read_fixed;
use crate::codec::parse_ipv4_literal;
use crate::types::prefix::{Family, Ipv4Prefix, parse_addr_prefix};
use crate::{FieldDisplay, FieldType, FieldValue, FtypeId, Operation, ParseOptions, RegistryBuilder, ReprStyle, Resolver, Result, TypeDescriptor};

/// Longest dotted quad, `255.255.255.255`.
const REPR_LEN: usize = 15;

const FAMILY: Family = Family {
	label: "IPv4",
	prefix_phrase: "Netmask bits in a CIDR IPv4 address",
};

struct Ipv4Type;

static IPV4: Ipv4Type = Ipv4Type;

pub(crate) fn register(builder: &mut RegistryBuilder) {
	builder.register(TypeDescriptor::new("IPv4 address", 4, &IPV4));
}

fn prefix_of(value: &FieldValue) -> Ipv4Prefix {
	value.as_ipv4().copied().unwrap_or(Ipv4Prefix::host([0; 4]))
}

impl FieldType for Ipv4Type {
	fn ftype(&self) -> FtypeId {
		FtypeId::Ipv4
	}

	fn parse_text(&self, input: &str, options: &ParseOptions, resolver: &dyn Resolver) -> Result<FieldValue> {
		let addr = parse_addr_prefix(input, options, &FAMILY, parse_ipv4_literal, |name| {
			resolver.resolve_ipv4(name).map(|addr| addr.octets())
		})?;
		Ok(FieldValue::ipv4(addr))
	}

	fn parse_bytes(&self, bytes: &[u8]) -> Result<FieldValue> {
		let addr = read_fixed::<4>(FtypeId::Ipv4, bytes)?;
		Ok(FieldValue::ipv4(Ipv4Prefix::host(addr)))
	}

	fn repr_len(&self, _value: &FieldValue, _style: ReprStyle, _display: FieldDisplay) -> usize {
		REPR_LEN
	}

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
