use std::cmp::Ordering;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::codec::parse_prefix_len;
use crate::{FtypeError, ParseOptions, Result};

const BITMASKS: [u8; 9] = [0x00, 0x80, 0xc0, 0xe0, 0xf0, 0xf8, 0xfc, 0xfe, 0xff];

/// Fixed-width address with a count of significant leading bits.
///
/// The prefix never exceeds `N * 8`; constructors reject anything larger, so
/// comparisons never need to re-check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddrPrefix<const N: usize> {
	addr: [u8; N],
	prefix: u32,
}

/// IPv4 address with netmask bit count.
pub type Ipv4Prefix = AddrPrefix<4>;
/// IPv6 address with routing prefix.
pub type Ipv6Prefix = AddrPrefix<16>;

impl<const N: usize> AddrPrefix<N> {
	/// Address width in bits.
	pub const MAX_PREFIX: u32 = (N * 8) as u32;

	/// Build from address bytes and prefix, `None` when the prefix is too wide.
	pub fn new(addr: [u8; N], prefix: u32) -> Option<Self> {
		(prefix <= Self::MAX_PREFIX).then_some(Self { addr, prefix })
	}

	/// Build a host route (full-width prefix).
	pub fn host(addr: [u8; N]) -> Self {
		Self {
			addr,
			prefix: Self::MAX_PREFIX,
		}
	}

	/// Address bytes in network order.
	pub fn addr(&self) -> &[u8; N] {
		&self.addr
	}

	/// Significant leading bits.
	pub fn prefix(&self) -> u32 {
		self.prefix
	}

	/// Order by the first `min(prefix_a, prefix_b)` bits, most significant first.
	///
	/// Bits beyond the shared prefix never influence the result.
	pub fn cmp_prefix(&self, other: &Self) -> Ordering {
		let (full, mask) = self.scope(other);
		match self.addr[..full].cmp(&other.addr[..full]) {
			Ordering::Equal if mask != 0 => (self.addr[full] & mask).cmp(&(other.addr[full] & mask)),
			ord => ord,
		}
	}

	/// Whether any bit is set in both addresses within the shared prefix.
	///
	/// This is an overlap heuristic, not subnet containment.
	pub fn intersects(&self, other: &Self) -> bool {
		let (full, mask) = self.scope(other);
		if self.addr[..full].iter().zip(&other.addr[..full]).any(|(a, b)| a & b != 0) {
			return true;
		}
		mask != 0 && (self.addr[full] & other.addr[full] & mask) != 0
	}

	/// Whole bytes in scope and the mask for a trailing partial byte.
	fn scope(&self, other: &Self) -> (usize, u8) {
		let bits = self.prefix.min(other.prefix) as usize;
		(bits / 8, BITMASKS[bits % 8])
	}
}

impl From<Ipv4Addr> for Ipv4Prefix {
	fn from(addr: Ipv4Addr) -> Self {
		Self::host(addr.octets())
	}
}

impl From<Ipv6Addr> for Ipv6Prefix {
	fn from(addr: Ipv6Addr) -> Self {
		Self::host(addr.octets())
	}
}

impl Ipv4Prefix {
	/// Address as a standard library value.
	pub fn ip(&self) -> Ipv4Addr {
		Ipv4Addr::from(self.addr)
	}
}

impl Ipv6Prefix {
	/// Address as a standard library value.
	pub fn ip(&self) -> Ipv6Addr {
		Ipv6Addr::from(self.addr)
	}
}

/// Naming used in address parse errors.
pub(crate) struct Family {
	/// Short family label.
	pub(crate) label: &'static str,
	/// Leading phrase of the prefix range error.
	pub(crate) prefix_phrase: &'static str,
}

/// Parse `address[/prefix]`.
///
/// The address side is tried as a literal first, then through `resolve` when
/// hostname resolution is enabled. A missing prefix means a host route.
pub(crate) fn parse_addr_prefix<const N: usize>(
	input: &str,
	options: &ParseOptions,
	family: &Family,
	literal: impl FnOnce(&str) -> Option<[u8; N]>,
	resolve: impl FnOnce(&str) -> Option<[u8; N]>,
) -> Result<AddrPrefix<N>> {
	let (addr_text, prefix_text) = split_prefix(input);

	let addr = literal(addr_text)
		.or_else(|| if options.resolve_hostnames { resolve(addr_text) } else { None })
		.ok_or_else(|| FtypeError::InvalidAddress {
			input: input.to_owned(),
			family: family.label,
		})?;

	let prefix = match prefix_text {
		Some(text) => parse_prefix_len(text, AddrPrefix::<N>::MAX_PREFIX, family.prefix_phrase)?,
		None => AddrPrefix::<N>::MAX_PREFIX,
	};

	AddrPrefix::new(addr, prefix).ok_or(FtypeError::PrefixOutOfRange {
		what: family.prefix_phrase,
		prefix: u64::from(prefix),
		max: AddrPrefix::<N>::MAX_PREFIX,
	})
}

/// Split a literal on its first `/` into address and optional prefix text.
fn split_prefix(input: &str) -> (&str, Option<&str>) {
	match input.split_once('/') {
		Some((addr, prefix)) => (addr, Some(prefix)),
		None => (input, None),
	}
}
