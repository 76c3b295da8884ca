use std::path::{Path, PathBuf};

use ftypes::{FieldDisplay, FieldValue, FtypeId, HostsResolver, ParseOptions, ReprStyle, TypeDescriptor, registry};

use crate::error::{CliError, Result};

/// Render style selector.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum StyleArg {
	#[default]
	Display,
	Filter,
}

impl From<StyleArg> for ReprStyle {
	fn from(style: StyleArg) -> Self {
		match style {
			StyleArg::Display => Self::Display,
			StyleArg::Filter => Self::Filter,
		}
	}
}

/// Display hint selector.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum DisplayArg {
	#[default]
	#[value(name = "default")]
	Auto,
	Dec,
	Hex,
	DecHex,
	HexDec,
	Colon,
	Dash,
	Dot,
	Space,
	#[value(name = "none")]
	Bare,
}

impl From<DisplayArg> for FieldDisplay {
	fn from(display: DisplayArg) -> Self {
		match display {
			DisplayArg::Auto => Self::Default,
			DisplayArg::Dec => Self::Dec,
			DisplayArg::Hex => Self::Hex,
			DisplayArg::DecHex => Self::DecHex,
			DisplayArg::HexDec => Self::HexDec,
			DisplayArg::Colon => Self::SepColon,
			DisplayArg::Dash => Self::SepDash,
			DisplayArg::Dot => Self::SepDot,
			DisplayArg::Space => Self::SepSpace,
			DisplayArg::Bare => Self::SepNone,
		}
	}
}

/// Literal parsing switches shared by commands that read values.
#[derive(clap::Args)]
pub struct LiteralArgs {
	/// Hosts-format file used to resolve names in address literals.
	#[arg(long)]
	pub hosts: Option<PathBuf>,
	/// Accept address literals only.
	#[arg(long)]
	pub strict: bool,
}

/// Parses literals for one field type with the configured resolver.
pub(crate) struct LiteralParser {
	descriptor: &'static TypeDescriptor,
	options: ParseOptions,
	hosts: HostsResolver,
}

impl LiteralParser {
	pub(crate) fn new(ftype: &str, args: &LiteralArgs) -> Result<Self> {
		let options = if args.strict { ParseOptions::strict() } else { ParseOptions::for_display_filter() };
		let hosts = match &args.hosts {
			Some(path) => load_hosts(path)?,
			None => HostsResolver::new(),
		};
		Ok(Self {
			descriptor: lookup_type(ftype)?,
			options,
			hosts,
		})
	}

	pub(crate) fn descriptor(&self) -> &'static TypeDescriptor {
		self.descriptor
	}

	pub(crate) fn parse(&self, literal: &str) -> Result<FieldValue> {
		Ok(self.descriptor.parse_text(literal, &self.options, &self.hosts)?)
	}
}

/// Resolve a type argument such as `ipv6` or `FT_UINT32`.
pub(crate) fn lookup_type(name: &str) -> Result<&'static TypeDescriptor> {
	let id = FtypeId::from_name(name).ok_or_else(|| CliError::UnknownType { name: name.to_owned() })?;
	Ok(registry().lookup(id))
}

fn load_hosts(path: &Path) -> Result<HostsResolver> {
	let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	Ok(HostsResolver::parse(&text))
}

/// Lowercase hex octets joined by spaces.
pub(crate) fn hex_bytes(bytes: &[u8]) -> String {
	bytes.iter().map(|byte| format!("{byte:02x}")).collect::<Vec<_>>().join(" ")
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload)?;
	println!("{text}");
	Ok(())
}
