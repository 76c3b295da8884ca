use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Hostname lookup used by address types when a literal does not parse.
///
/// Implementations must not block; callers expect lookups against
/// already-loaded tables.
pub trait Resolver {
	/// Look up an IPv4 address by name.
	fn resolve_ipv4(&self, name: &str) -> Option<Ipv4Addr>;

	/// Look up an IPv6 address by name.
	fn resolve_ipv6(&self, name: &str) -> Option<Ipv6Addr>;
}

/// Resolver that knows no names.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResolver;

impl Resolver for NoResolver {
	fn resolve_ipv4(&self, _name: &str) -> Option<Ipv4Addr> {
		None
	}

	fn resolve_ipv6(&self, _name: &str) -> Option<Ipv6Addr> {
		None
	}
}

/// In-memory name table in hosts-file form.
#[derive(Debug, Clone, Default)]
pub struct HostsResolver {
	v4: HashMap<Box<str>, Ipv4Addr>,
	v6: HashMap<Box<str>, Ipv6Addr>,
}

impl HostsResolver {
	/// Create an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a table from hosts-file text: `address name [aliases...]` per
	/// line, `#` starts a comment. Malformed lines are skipped; the first
	/// entry for a name wins.
	pub fn parse(text: &str) -> Self {
		let mut out = Self::new();
		for (lineno, line) in text.lines().enumerate() {
			let line = line.split('#').next().unwrap_or_default();
			let mut fields = line.split_whitespace();
			let Some(addr) = fields.next() else {
				continue;
			};
			let Ok(addr) = addr.parse::<IpAddr>() else {
				tracing::trace!(line = lineno + 1, "hosts entry skipped: bad address");
				continue;
			};

			let mut named = false;
			for name in fields {
				out.insert(name, addr);
				named = true;
			}
			if !named {
				tracing::trace!(line = lineno + 1, "hosts entry skipped: no names");
			}
		}
		tracing::debug!(v4 = out.v4.len(), v6 = out.v6.len(), "hosts table loaded");
		out
	}

	/// Add one name, keeping any existing mapping.
	pub fn insert(&mut self, name: &str, addr: IpAddr) {
		let key = name.to_ascii_lowercase().into_boxed_str();
		match addr {
			IpAddr::V4(addr) => {
				self.v4.entry(key).or_insert(addr);
			}
			IpAddr::V6(addr) => {
				self.v6.entry(key).or_insert(addr);
			}
		}
	}

	/// Number of names across both families.
	pub fn len(&self) -> usize {
		self.v4.len() + self.v6.len()
	}

	/// Whether the table has no names.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Resolver for HostsResolver {
	fn resolve_ipv4(&self, name: &str) -> Option<Ipv4Addr> {
		self.v4.get(name.to_ascii_lowercase().as_str()).copied()
	}

	fn resolve_ipv6(&self, name: &str) -> Option<Ipv6Addr> {
		self.v6.get(name.to_ascii_lowercase().as_str()).copied()
	}
}
