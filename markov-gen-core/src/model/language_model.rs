use std::fmt;
use std::path::Path;

use crate::error::Result;
use crate::io::read_corpus;

use super::char_frequency::CharFrequency;
use super::generator;
use super::sampler::RandomSource;
use super::trainer;
use super::window::Window;
use super::window_table::WindowTable;

/// Trained character-level Markov model.
///
/// Holds the fixed window length and the table mapping every window seen
/// during training to its successor distribution.
///
/// # Responsibilities
/// - Build itself from a corpus (in memory or on disk) in a single pass
/// - Answer read-only lookups of a window's successor distribution
/// - Generate text from a seed using a caller-supplied random source
///
/// # Invariants
/// - The table is finalized: every entry carries its probabilities
/// - No mutation is possible once built; retraining means building a new model
#[derive(Clone, Debug)]
pub struct LanguageModel {
	window_length: usize,
	table: WindowTable,
}

impl LanguageModel {
	/// Trains a model on the characters of `corpus`.
	///
	/// See [`trainer::train`] for the degenerate cases.
	pub fn train(corpus: &str, window_length: usize) -> Self {
		trainer::train(corpus.chars(), window_length)
	}

	/// Trains a model on the whole content of a UTF-8 text file.
	///
	/// # Errors
	/// Returns [`crate::Error::Io`] if the file cannot be read.
	pub fn train_file<P: AsRef<Path>>(path: P, window_length: usize) -> Result<Self> {
		let corpus = read_corpus(path)?;
		Ok(Self::train(&corpus, window_length))
	}

	pub(crate) fn from_table(window_length: usize, table: WindowTable) -> Self {
		Self { window_length, table }
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Returns the successor distribution of `window`, if it was seen.
	pub fn entries(&self, window: &str) -> Option<&[CharFrequency]> {
		self.table.get(window)
	}

	/// Iterates over every window and its distribution, in first-seen order.
	pub fn windows(&self) -> impl Iterator<Item = (&Window, &[CharFrequency])> {
		self.table.iter()
	}

	/// Number of distinct windows.
	pub fn len(&self) -> usize {
		self.table.len()
	}

	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}

	/// Extends `seed` up to `target_length` characters.
	///
	/// Convenience wrapper over [`generator::generate`] for a seed that is
	/// always present.
	pub fn generate<R>(&self, seed: &str, target_length: usize, source: &mut R) -> String
	where
		R: RandomSource + ?Sized,
	{
		generator::generate(self, Some(seed), target_length, source).unwrap_or_else(|| seed.to_owned())
	}
}

impl fmt::Display for LanguageModel {
	/// One line per window: `window : (c count p cp) (c count p cp)`
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (window, entries) in self.table.iter() {
			write!(f, "{} :", window)?;
			for entry in entries {
				write!(f, " {}", entry)?;
			}
			writeln!(f)?;
		}
		Ok(())
	}
}
