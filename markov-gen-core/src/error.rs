use std::path::PathBuf;

use thiserror::Error;

/// Result alias used by the fallible parts of the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while acquiring a corpus.
///
/// Training and generation never fail: degenerate inputs produce empty
/// models or unchanged seeds instead.
#[derive(Error, Debug)]
pub enum Error {
	/// The corpus file could not be opened or is not valid UTF-8.
	#[error("Unable to read corpus {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}
