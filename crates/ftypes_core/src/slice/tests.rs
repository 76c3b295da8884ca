use crate::{DRange, DRangeNode, FieldValue, FtypeId, NoResolver, ParseOptions, RangeEnd, registry, slice, slice_drange};

fn parse(id: FtypeId, text: &str) -> FieldValue {
	registry()
		.lookup(id)
		.parse_text(text, &ParseOptions::default(), &NoResolver)
		.expect("literal parses")
}

#[test]
fn slice_clips_past_the_end() {
	let addr = parse(FtypeId::Ipv6, "2001:db8::1");
	let tail = slice(registry(), &addr, 14, 4).expect("slice");
	assert_eq!(tail, &[0x00, 0x01]);

	assert!(slice(registry(), &addr, 16, 4).expect("slice").is_empty());
	assert!(slice(registry(), &addr, usize::MAX, usize::MAX).expect("slice").is_empty());
}

#[test]
fn slice_prefix_matches_raw_bytes() {
	let value = parse(FtypeId::UInt32, "0x0a0b0c0d");
	let raw = registry().lookup(FtypeId::UInt32).raw_bytes(&value).expect("raw");
	assert_eq!(raw, &[0x0a, 0x0b, 0x0c, 0x0d]);
	for n in 0..=raw.len() {
		assert_eq!(slice(registry(), &value, 0, n).expect("slice"), &raw[..n]);
	}
	assert_eq!(slice(registry(), &value, 1, 100).expect("slice"), &raw[1..]);
}

#[test]
fn range_nodes_resolve_against_length() {
	assert_eq!(DRangeNode::with_length(2, 3).resolve(10), (2, 3));
	assert_eq!(DRangeNode::through(2, 4).resolve(10), (2, 3));
	assert_eq!(DRangeNode::through(4, 2).resolve(10), (4, 0));
	assert_eq!(DRangeNode::to_end(7).resolve(10), (7, 3));
	assert_eq!(DRangeNode::to_end(-3).resolve(10), (7, 3));
	assert_eq!(DRangeNode::through(-4, -1).resolve(10), (6, 4));
	assert_eq!(DRangeNode::to_end(-30).resolve(10), (0, 10));
	assert_eq!(DRangeNode::to_end(12).resolve(10), (12, 0));
	assert_eq!(
		DRangeNode::with_length(-1, 1),
		DRangeNode {
			start: -1,
			end: RangeEnd::Length(1)
		}
	);
}

#[test]
fn drange_concatenates_clipped_ranges() {
	let value = parse(FtypeId::Bytes, "00:11:22:33:44:55:66:77");
	let mut drange = DRange::default();
	drange
		.push(DRangeNode::with_length(0, 2))
		.push(DRangeNode::to_end(-2))
		.push(DRangeNode::with_length(6, 10))
		.push(DRangeNode::through(3, 3));

	let out = slice_drange(registry(), &value, &drange).expect("drange");
	assert_eq!(out, vec![0x00, 0x11, 0x66, 0x77, 0x66, 0x77, 0x33]);
}

#[test]
fn drange_over_string_storage() {
	let value = parse(FtypeId::String, "filter");
	let drange = DRange::new([DRangeNode::with_length(-3, 2)]);
	assert_eq!(slice_drange(registry(), &value, &drange).expect("drange"), b"te".to_vec());
	assert!(slice_drange(registry(), &value, &DRange::default()).expect("drange").is_empty());
}
