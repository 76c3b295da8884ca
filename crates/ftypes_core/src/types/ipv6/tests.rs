use std::cmp::Ordering;
use std::net::Ipv6Addr;

use ftypes_testkit::read_fixture;

use crate::{FieldDisplay, FieldValue, FtypeError, FtypeId, HostsResolver, NoResolver, Operation, ParseOptions, ReprStyle, TypeDescriptor, registry};

fn desc() -> &'static TypeDescriptor {
	registry().lookup(FtypeId::Ipv6)
}

fn parse(text: &str) -> crate::Result<FieldValue> {
	desc().parse_text(text, &ParseOptions::default(), &NoResolver)
}

fn render(value: &FieldValue) -> String {
	desc().render(value, ReprStyle::Display, FieldDisplay::Default).expect("render")
}

#[test]
fn host_literal_defaults_to_full_prefix() {
	let value = parse("2001:db8::1").expect("literal");
	assert_eq!(value.as_ipv6().map(|addr| addr.prefix()), Some(128));
	assert_eq!(render(&value), "2001:db8::1");
}

#[test]
fn render_is_canonical_and_drops_prefix() {
	assert_eq!(render(&parse("2001:0DB8:0000:0000:0000:0000:0000:0001/64").expect("literal")), "2001:db8::1");
	assert_eq!(render(&parse("::").expect("literal")), "::");
	assert_eq!(render(&parse("::ffff:192.0.2.1").expect("literal")), "::ffff:192.0.2.1");

	let widest = parse("1111:2222:3333:4444:5555:6666:7777:8888").expect("literal");
	assert!(render(&widest).len() <= desc().repr_len(&widest, ReprStyle::Display, FieldDisplay::Default).expect("len"));
	assert_eq!(desc().repr_len(&widest, ReprStyle::Filter, FieldDisplay::Default).expect("len"), 45);
}

#[test]
fn same_network_compares_equal() {
	let a = parse("2001:db8::/32").expect("a");
	let b = parse("2001:db8:ffff::/32").expect("b");
	assert_eq!(desc().cmp_order(&a, &b).expect("cmp"), Ordering::Equal);

	let c = parse("2001:db8::1/64").expect("c");
	let d = parse("2001:db8::ffff/64").expect("d");
	assert_eq!(desc().cmp_order(&c, &d).expect("cmp"), Ordering::Equal);

	let e = parse("2001:db9::").expect("e");
	assert_eq!(desc().cmp_order(&a, &e).expect("cmp"), Ordering::Less);
	assert_eq!(desc().cmp_order(&e, &a).expect("cmp"), Ordering::Greater);
}

#[test]
fn prefix_above_width_is_rejected() {
	let err = parse("::1/129").expect_err("prefix too wide");
	let message = err.to_string();
	assert!(message.contains("129"), "{message}");
	assert!(message.contains("128"), "{message}");
	assert_eq!(message, "Prefix in a IPv6 address should be <= 128, not 129");
	assert!(err.is_parse_error());
}

#[test]
fn prefix_must_be_decimal() {
	for text in ["::1/", "::1/0x10", "::1/-1", "::1/ 64", "::1/64/8"] {
		assert!(matches!(parse(text), Err(FtypeError::InvalidNumber { .. })), "{text}");
	}
	assert_eq!(parse("::1/0").expect("zero prefix").as_ipv6().map(|addr| addr.prefix()), Some(0));
}

#[test]
fn unknown_name_reports_full_input() {
	let err = parse("no-such-host/64").expect_err("unresolved");
	assert_eq!(err.to_string(), "\"no-such-host/64\" is not a valid hostname or IPv6 address.");
	assert!(matches!(parse("2001:db8::1::2"), Err(FtypeError::InvalidAddress { family: "IPv6", .. })));
}

#[test]
fn hostnames_resolve_from_hosts_table() {
	let hosts = HostsResolver::parse(&read_fixture("hosts"));

	let value = desc().parse_text("ns1.example/48", &ParseOptions::default(), &hosts).expect("resolved");
	let addr = value.as_ipv6().expect("ipv6 payload");
	assert_eq!(addr.ip(), "2001:db8::53".parse::<Ipv6Addr>().expect("literal"));
	assert_eq!(addr.prefix(), 48);

	let err = desc()
		.parse_text("ns1.example", &ParseOptions::strict(), &hosts)
		.expect_err("resolution disabled");
	assert!(matches!(err, FtypeError::InvalidAddress { .. }));

	// IPv4-only names do not satisfy an IPv6 field.
	assert!(desc().parse_text("router.example", &ParseOptions::default(), &hosts).is_err());
}

#[test]
fn wire_bytes_are_host_routes() {
	let mut wire = [0_u8; 16];
	wire[15] = 1;
	let value = desc().parse_bytes(&wire).expect("wire");
	assert_eq!(value.as_ipv6().map(|addr| addr.prefix()), Some(128));
	assert_eq!(render(&value), "::1");
	assert_eq!(desc().raw_bytes(&value).expect("raw"), &wire);

	let err = desc().parse_bytes(&wire[..15]).expect_err("short");
	assert_eq!(
		err,
		FtypeError::WireSizeMismatch {
			ftype: FtypeId::Ipv6,
			expected: 16,
			got: 15
		}
	);
}

#[test]
fn intersection_within_shorter_prefix() {
	let net = parse("2001:db8::/32").expect("net");
	assert!(desc().bitwise_and(&net, &parse("2001:db8::1").expect("host")).expect("and"));
	assert!(!desc().bitwise_and(&parse("::/0").expect("any"), &net).expect("and"));
	assert!(!desc().bitwise_and(&parse("ff00::/8").expect("mcast"), &parse("00ff::").expect("host")).expect("and"));
}

#[test]
fn slice_clips_to_sixteen_bytes() {
	let value = parse("2001:db8::1").expect("literal");
	assert_eq!(desc().slice(&value, 14, 4).expect("slice"), &[0x00, 0x01]);
	assert_eq!(desc().slice(&value, 0, 2).expect("slice"), &[0x20, 0x01]);
	assert!(desc().slice(&value, 20, 1).expect("slice").is_empty());
}

#[test]
fn contains_is_unsupported() {
	let value = parse("::1").expect("literal");
	assert!(!desc().supports(Operation::Contains));
	assert!(matches!(desc().contains(&value, &value), Err(FtypeError::Unsupported { .. })));
}
