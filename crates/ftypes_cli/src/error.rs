use std::path::PathBuf;

use thiserror::Error;

/// Result alias for command handlers.
pub type Result<T> = std::result::Result<T, CliError>;

/// Failures surfaced to the command line.
#[derive(Debug, Error)]
pub enum CliError {
	/// Engine rejected the input.
	#[error(transparent)]
	Ftype(#[from] ftypes::FtypeError),
	/// A file named on the command line could not be read.
	#[error("cannot read {}: {source}", path.display())]
	Io {
		/// File that failed.
		path: PathBuf,
		/// Underlying error.
		source: std::io::Error,
	},
	/// Output could not be serialized.
	#[error(transparent)]
	Json(#[from] serde_json::Error),
	/// Type name matched no registered type.
	#[error("unknown field type {name:?}; run `ftypes types` for the list")]
	UnknownType {
		/// Name as given.
		name: String,
	},
}
