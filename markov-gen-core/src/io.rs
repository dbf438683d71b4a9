use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Reads a whole text file into a `String`.
///
/// - Reads the entire file into memory
/// - Keeps line terminators, every character of the file is part of the corpus
pub(crate) fn read_corpus<P: AsRef<Path>>(filename: P) -> Result<String> {
	let path = filename.as_ref();
	let to_error = |source: std::io::Error| Error::Io { path: path.to_path_buf(), source };

	let mut contents = String::new();
	File::open(path)
		.map_err(to_error)?
		.read_to_string(&mut contents)
		.map_err(to_error)?;

	log::debug!("Read corpus {} ({} bytes)", path.display(), contents.len());
	Ok(contents)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn reads_file_with_line_terminators() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "ab\ncd\r\n").unwrap();

		let contents = read_corpus(file.path()).unwrap();
		assert_eq!(contents, "ab\ncd\r\n");
	}

	#[test]
	fn missing_file_reports_path() {
		let dir = tempfile::tempdir().unwrap();
		let missing = dir.path().join("nope.txt");

		let err = read_corpus(&missing).unwrap_err();
		let Error::Io { path, .. } = &err;
		assert_eq!(path, &missing);
		assert!(err.to_string().contains("nope.txt"));
	}
}
