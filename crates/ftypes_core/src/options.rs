/// Limits and switches applied while parsing untrusted literals.
#[derive(Debug, Clone)]
pub struct ParseOptions {
	/// Maximum accepted literal length in bytes.
	pub max_literal_len: usize,
	/// Maximum decoded length of byte-string literals.
	pub max_bytes_len: usize,
	/// Consult the resolver when an address literal does not parse.
	pub resolve_hostnames: bool,
}

impl Default for ParseOptions {
	fn default() -> Self {
		Self {
			max_literal_len: 64 * 1024,
			max_bytes_len: 65_535,
			resolve_hostnames: true,
		}
	}
}

impl ParseOptions {
	/// Preset tuned for interactive display-filter literals.
	pub fn for_display_filter() -> Self {
		Self {
			max_literal_len: 4096,
			max_bytes_len: 2048,
			resolve_hostnames: true,
		}
	}

	/// Preset that accepts address literals only, never hostnames.
	pub fn strict() -> Self {
		Self {
			resolve_hostnames: false,
			..Self::for_display_filter()
		}
	}
}
