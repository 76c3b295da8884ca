//! Text <-> binary conversions shared by the field types.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::{FtypeError, Result};

/// Parse an unsigned integer literal bounded by `max`.
///
/// Accepts decimal, `0x` hexadecimal, leading-`0` octal, and single-quoted
/// character constants such as `'a'`, `'\n'`, or `'\x41'`.
pub(crate) fn parse_uint_literal(input: &str, max: u64) -> Result<u64> {
	let value = if input.starts_with('\'') {
		u64::from(parse_char_constant(input).ok_or_else(|| invalid_number(input))?)
	} else {
		let (digits, radix) = if let Some(rest) = input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
			(rest, 16)
		} else if input.len() > 1 && input.starts_with('0') {
			(&input[1..], 8)
		} else {
			(input, 10)
		};
		parse_digits(input, digits, radix)?
	};

	if value > max {
		return Err(FtypeError::NumberOutOfRange {
			input: input.to_owned(),
			max,
		});
	}
	Ok(value)
}

/// Parse a strictly decimal prefix length bounded by `max`.
pub(crate) fn parse_prefix_len(input: &str, max: u32, what: &'static str) -> Result<u32> {
	let value = parse_digits(input, input, 10)?;
	if value > u64::from(max) {
		return Err(FtypeError::PrefixOutOfRange { what, prefix: value, max });
	}
	Ok(value as u32)
}

fn parse_digits(input: &str, digits: &str, radix: u32) -> Result<u64> {
	if digits.is_empty() {
		return Err(invalid_number(input));
	}

	let mut value = 0_u64;
	for ch in digits.chars() {
		let digit = ch.to_digit(radix).ok_or_else(|| invalid_number(input))?;
		value = value
			.checked_mul(u64::from(radix))
			.and_then(|acc| acc.checked_add(u64::from(digit)))
			.ok_or_else(|| FtypeError::NumberOutOfRange {
				input: input.to_owned(),
				max: u64::MAX,
			})?;
	}
	Ok(value)
}

fn invalid_number(input: &str) -> FtypeError {
	FtypeError::InvalidNumber { input: input.to_owned() }
}

/// Decode a quoted character constant into its byte value.
fn parse_char_constant(input: &str) -> Option<u8> {
	let body = input.strip_prefix('\'')?.strip_suffix('\'')?;
	let bytes = body.as_bytes();
	match bytes {
		[byte] if *byte != b'\\' && *byte != b'\'' => Some(*byte),
		[b'\\', rest @ ..] => parse_escape(rest),
		_ => None,
	}
}

fn parse_escape(rest: &[u8]) -> Option<u8> {
	match rest {
		[b'a'] => Some(0x07),
		[b'b'] => Some(0x08),
		[b'f'] => Some(0x0c),
		[b'n'] => Some(b'\n'),
		[b'r'] => Some(b'\r'),
		[b't'] => Some(b'\t'),
		[b'v'] => Some(0x0b),
		[b'\\'] => Some(b'\\'),
		[b'\''] => Some(b'\''),
		[b'x', hex @ ..] if (1..=2).contains(&hex.len()) => {
			let text = std::str::from_utf8(hex).ok()?;
			u8::from_str_radix(text, 16).ok()
		}
		octal if (1..=3).contains(&octal.len()) && octal.iter().all(|byte| (b'0'..=b'7').contains(byte)) => {
			let text = std::str::from_utf8(octal).ok()?;
			u8::from_str_radix(text, 8).ok()
		}
		_ => None,
	}
}

/// Parse a hex byte string.
///
/// Octets are separated consistently by `:`, `-`, or `.` (one or two digits
/// each), or written as unseparated digit pairs.
pub(crate) fn parse_hex_bytes(input: &str, max_len: usize) -> Result<Vec<u8>> {
	let invalid = || FtypeError::InvalidLiteral {
		input: input.to_owned(),
		kind: "byte string",
	};

	if input.is_empty() {
		return Err(invalid());
	}

	let separator = input.chars().find(|ch| matches!(ch, ':' | '-' | '.'));
	let mut out = Vec::new();

	match separator {
		Some(sep) => {
			for group in input.split(sep) {
				if group.is_empty() || group.len() > 2 {
					return Err(invalid());
				}
				if !group.bytes().all(|byte| byte.is_ascii_hexdigit()) {
					return Err(invalid());
				}
				let byte = u8::from_str_radix(group, 16).map_err(|_| invalid())?;
				out.push(byte);
				if out.len() > max_len {
					return Err(FtypeError::LiteralTooLong { len: out.len(), max: max_len });
				}
			}
		}
		None => {
			let digits = input.as_bytes();
			if digits.len() % 2 != 0 {
				return Err(invalid());
			}
			if digits.len() / 2 > max_len {
				return Err(FtypeError::LiteralTooLong {
					len: digits.len() / 2,
					max: max_len,
				});
			}
			for pair in digits.chunks_exact(2) {
				let hi = hex_value(pair[0]).ok_or_else(invalid)?;
				let lo = hex_value(pair[1]).ok_or_else(invalid)?;
				out.push((hi << 4) | lo);
			}
		}
	}

	Ok(out)
}

fn hex_value(byte: u8) -> Option<u8> {
	char::from(byte).to_digit(16).map(|digit| digit as u8)
}

/// Append lowercase hex octets joined by `separator`.
pub(crate) fn write_hex_bytes(out: &mut String, bytes: &[u8], separator: Option<char>) {
	const HEX: &[u8; 16] = b"0123456789abcdef";
	for (idx, byte) in bytes.iter().enumerate() {
		if let Some(sep) = separator.filter(|_| idx > 0) {
			out.push(sep);
		}
		out.push(char::from(HEX[usize::from(byte >> 4)]));
		out.push(char::from(HEX[usize::from(byte & 0x0f)]));
	}
}

/// Rendered length of `len` hex octets with an optional separator.
pub(crate) fn hex_bytes_len(len: usize, separator: Option<char>) -> usize {
	match (len, separator) {
		(0, _) => 0,
		(n, None) => 2 * n,
		(n, Some(_)) => 3 * n - 1,
	}
}

/// Append `input` as a double-quoted filter string literal.
pub(crate) fn write_quoted(out: &mut String, input: &str) {
	out.push('"');
	for ch in input.chars() {
		match ch {
			'"' => out.push_str("\\\""),
			'\\' => out.push_str("\\\\"),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\t' => out.push_str("\\t"),
			c if c.is_ascii_control() => {
				out.push_str("\\x");
				write_hex_bytes(out, &[c as u8], None);
			}
			c => out.push(c),
		}
	}
	out.push('"');
}

/// Exact length of [`write_quoted`] output.
pub(crate) fn quoted_len(input: &str) -> usize {
	2 + input
		.chars()
		.map(|ch| match ch {
			'"' | '\\' | '\n' | '\r' | '\t' => 2,
			c if c.is_ascii_control() => 4,
			c => c.len_utf8(),
		})
		.sum::<usize>()
}

/// Number of decimal digits in `value`.
pub(crate) fn decimal_len(value: u64) -> usize {
	value.checked_ilog10().map_or(1, |digits| digits as usize + 1)
}

/// Parse a dotted-quad IPv4 literal.
pub(crate) fn parse_ipv4_literal(input: &str) -> Option<[u8; 4]> {
	input.parse::<Ipv4Addr>().ok().map(|addr| addr.octets())
}

/// Parse a textual IPv6 literal.
pub(crate) fn parse_ipv6_literal(input: &str) -> Option<[u8; 16]> {
	input.parse::<Ipv6Addr>().ok().map(|addr| addr.octets())
}
