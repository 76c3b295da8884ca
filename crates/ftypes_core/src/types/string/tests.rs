use std::cmp::Ordering;

use crate::{FieldDisplay, FieldValue, FtypeError, FtypeId, NoResolver, Operation, ParseOptions, ReprStyle, TypeDescriptor, registry};

fn desc() -> &'static TypeDescriptor {
	registry().lookup(FtypeId::String)
}

#[test]
fn text_is_kept_verbatim() {
	let value = desc().parse_text("a \"b\"", &ParseOptions::default(), &NoResolver).expect("string");
	assert_eq!(value.as_str(), Some("a \"b\""));
	assert_eq!(desc().raw_bytes(&value).expect("raw"), b"a \"b\"");
}

#[test]
fn wire_string_stops_at_nul() {
	let value = desc().parse_bytes(b"host\0garbage").expect("wire");
	assert_eq!(value.as_str(), Some("host"));

	let err = desc().parse_bytes(&[b'o', b'k', 0xff]).expect_err("bad utf-8");
	assert_eq!(err, FtypeError::InvalidUtf8 { valid_up_to: 2 });
}

#[test]
fn filter_style_quotes_and_escapes() {
	let value = FieldValue::string("tab\there \"q\"\u{1}");
	let display = desc().render(&value, ReprStyle::Display, FieldDisplay::Default).expect("render");
	assert_eq!(display, "tab\there \"q\"\u{1}");

	let filter = desc().render(&value, ReprStyle::Filter, FieldDisplay::Default).expect("render");
	assert_eq!(filter, r#""tab\there \"q\"\x01""#);
	assert_eq!(filter.len(), desc().repr_len(&value, ReprStyle::Filter, FieldDisplay::Default).expect("len"));
}

#[test]
fn ordering_is_bytewise() {
	let a = FieldValue::string("abc");
	let b = FieldValue::string("abd");
	assert_eq!(desc().cmp_order(&a, &b).expect("cmp"), Ordering::Less);
	assert_eq!(desc().cmp_order(&FieldValue::string("b"), &a).expect("cmp"), Ordering::Greater);
}

#[test]
fn contains_but_no_intersection() {
	let a = FieldValue::string("example.org");
	assert!(desc().contains(&a, &FieldValue::string("ple.o")).expect("contains"));
	assert_eq!(
		desc().bitwise_and(&a, &a).expect_err("unsupported"),
		FtypeError::Unsupported {
			ftype: FtypeId::String,
			op: Operation::BitwiseAnd
		}
	);
}
