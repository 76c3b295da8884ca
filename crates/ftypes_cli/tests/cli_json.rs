#![allow(missing_docs)]

use std::process::Command;

use ftypes_testkit::fixture_path;
use serde_json::Value;

#[test]
fn types_json_lists_every_type() {
	let json = run_json(&["types", "--json"]);
	let types = json["types"].as_array().expect("types array");
	assert_eq!(types.len(), 9);
	let ipv6 = types.iter().find(|row| row["name"] == "FT_IPv6").expect("ipv6 row");
	assert_eq!(ipv6["wire_size"], 16);
	assert_eq!(ipv6["id"], "ipv6");
	assert_eq!(ipv6["ops"], serde_json::json!(["bitwise_and"]));
}

#[test]
fn parse_json_reports_prefix_and_storage() {
	let json = run_json(&["parse", "ipv6", "2001:db8::1/64", "--json"]);
	assert_eq!(json["ftype"], "FT_IPv6");
	assert_eq!(json["rendered"], "2001:db8::1");
	assert_eq!(json["prefix"], 64);
	assert_eq!(json["len"], 16);
	assert_eq!(json["repr_len"], 45);
}

#[test]
fn parse_resolves_names_from_hosts_file() {
	let hosts = fixture_path("hosts").display().to_string();
	let json = run_json(&["parse", "FT_IPv6", "router6.example", "--hosts", &hosts, "--json"]);
	assert_eq!(json["rendered"], "2001:db8:0:1::1");
	assert_eq!(json["prefix"], 128);
}

#[test]
fn parse_filter_style_quotes_strings() {
	let json = run_json(&["parse", "string", "say \"hi\"", "--style", "filter", "--json"]);
	assert_eq!(json["rendered"], "\"say \\\"hi\\\"\"");
}

#[test]
fn cmp_json_uses_shared_prefix() {
	let json = run_json(&["cmp", "ipv6", "2001:db8::/32", "2001:db8:ffff::/32", "--json"]);
	assert_eq!(json["order"], "equal");
	assert_eq!(json["equal"], true);
	assert_eq!(json["bitwise_and"], true);
	assert!(json["contains"].is_null(), "contains is unsupported for addresses");
}

#[test]
fn slice_json_reports_clipping() {
	let json = run_json(&["slice", "ipv6", "2001:db8::1", "14", "4", "--json"]);
	assert_eq!(json["requested"], 4);
	assert_eq!(json["returned"], 2);
	assert_eq!(json["bytes"], "00 01");
}

#[test]
fn bad_prefix_exits_with_message() {
	let output = Command::new(env!("CARGO_BIN_EXE_ftypes")).args(["parse", "ipv6", "::1/129"]).output().expect("command executes");
	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("error: Prefix in a IPv6 address should be <= 128, not 129"), "{stderr}");
}

#[test]
fn unknown_type_is_reported() {
	let output = Command::new(env!("CARGO_BIN_EXE_ftypes")).args(["parse", "float", "1.0"]).output().expect("command executes");
	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).contains("unknown field type \"float\""));
}

fn run_json(args: &[&str]) -> Value {
	let output = Command::new(env!("CARGO_BIN_EXE_ftypes")).args(args).output().expect("command executes");

	assert!(output.status.success(), "command should succeed: {}", String::from_utf8_lossy(&output.stderr));
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}
