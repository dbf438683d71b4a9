use std::fmt;

/// Statistics of one successor character within a window's distribution.
///
/// A `CharFrequency` is created the first time `character` is seen after a
/// given window, and its `count` grows with every later occurrence.
/// `probability` and `cumulative_probability` stay at `0.0` until the owning
/// window's list is finalized (see `window_table::calculate_probabilities`).
///
/// # Invariants
/// - `count >= 1` for every entry stored in a trained model
/// - After finalization, `probability` lies in `(0, 1]`
#[derive(Clone, Debug, PartialEq)]
pub struct CharFrequency {
	/// The observed successor character.
	character: char,
	/// How many times `character` followed the owning window.
	count: usize,
	/// `count / total count of the window`.
	probability: f64,
	/// Running sum of `probability` in insertion order.
	cumulative_probability: f64,
}

impl CharFrequency {
	/// Creates an entry for `character` with a count of 1.
	pub fn new(character: char) -> Self {
		Self {
			character,
			count: 1,
			probability: 0.0,
			cumulative_probability: 0.0,
		}
	}

	pub fn character(&self) -> char {
		self.character
	}

	pub fn count(&self) -> usize {
		self.count
	}

	pub fn probability(&self) -> f64 {
		self.probability
	}

	pub fn cumulative_probability(&self) -> f64 {
		self.cumulative_probability
	}

	/// Records one more occurrence.
	pub(crate) fn increment(&mut self) {
		self.count += 1;
	}

	/// Stores the derived probabilities computed by finalization.
	pub(crate) fn set_probabilities(&mut self, probability: f64, cumulative_probability: f64) {
		self.probability = probability;
		self.cumulative_probability = cumulative_probability;
	}
}

impl fmt::Display for CharFrequency {
	/// Formats as `(c count p cp)`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"({} {} {} {})",
			self.character, self.count, self.probability, self.cumulative_probability
		)
	}
}
