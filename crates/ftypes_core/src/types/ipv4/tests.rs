use std::cmp::Ordering;
use std::net::{IpAddr, Ipv4Addr};

use crate::{FieldDisplay, FieldValue, FtypeError, FtypeId, HostsResolver, NoResolver, ParseOptions, ReprStyle, TypeDescriptor, registry};

fn desc() -> &'static TypeDescriptor {
	registry().lookup(FtypeId::Ipv4)
}

fn parse(text: &str) -> crate::Result<FieldValue> {
	desc().parse_text(text, &ParseOptions::default(), &NoResolver)
}

#[test]
fn cidr_literal_carries_netmask_bits() {
	let value = parse("192.168.0.0/16").expect("cidr");
	let addr = value.as_ipv4().expect("ipv4 payload");
	assert_eq!(addr.ip(), Ipv4Addr::new(192, 168, 0, 0));
	assert_eq!(addr.prefix(), 16);
	assert_eq!(parse("10.1.2.3").expect("host").as_ipv4().map(|addr| addr.prefix()), Some(32));
}

#[test]
fn bad_netmask_and_address_messages() {
	let err = parse("10.0.0.0/33").expect_err("netmask too wide");
	assert_eq!(err.to_string(), "Netmask bits in a CIDR IPv4 address should be <= 32, not 33");

	let err = parse("10.0.0.256").expect_err("bad octet");
	assert_eq!(err.to_string(), "\"10.0.0.256\" is not a valid hostname or IPv4 address.");
	assert!(matches!(parse("10.0.0.0/x"), Err(FtypeError::InvalidNumber { .. })));
}

#[test]
fn hostnames_resolve_through_table() {
	let mut hosts = HostsResolver::new();
	hosts.insert("gateway", IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)));

	let value = desc().parse_text("gateway/8", &ParseOptions::default(), &hosts).expect("resolved");
	assert_eq!(value.as_ipv4().map(|addr| (addr.ip(), addr.prefix())), Some((Ipv4Addr::new(10, 0, 0, 1), 8)));
	assert!(desc().parse_text("gateway", &ParseOptions::strict(), &hosts).is_err());
}

#[test]
fn wire_and_render() {
	let value = desc().parse_bytes(&[192, 0, 2, 1]).expect("wire");
	assert_eq!(desc().render(&value, ReprStyle::Display, FieldDisplay::Default).expect("render"), "192.0.2.1");
	assert_eq!(desc().repr_len(&value, ReprStyle::Filter, FieldDisplay::Default).expect("len"), 15);
	assert!(matches!(desc().parse_bytes(&[1, 2, 3]), Err(FtypeError::WireSizeMismatch { expected: 4, got: 3, .. })));
}

#[test]
fn subnet_ordering() {
	let net = parse("10.0.0.0/8").expect("net");
	assert_eq!(desc().cmp_order(&net, &parse("10.200.1.1").expect("host")).expect("cmp"), Ordering::Equal);
	assert_eq!(desc().cmp_order(&net, &parse("11.0.0.0").expect("host")).expect("cmp"), Ordering::Less);
}
