use indexmap::IndexMap;

use super::char_frequency::CharFrequency;
use super::window::Window;

/// Mapping from each distinct window to its successor distribution.
///
/// Both levels preserve first-seen order:
/// - windows are kept in the order they were first recorded
/// - within a window, characters are kept in the order they first followed it
///
/// The inner order is what cumulative probabilities are computed over, so
/// it must never be re-sorted.
///
/// # Invariants
/// - Every stored window has at least one entry
/// - A character appears at most once in a window's list
#[derive(Clone, Debug, Default)]
pub struct WindowTable {
	windows: IndexMap<Window, Vec<CharFrequency>>,
}

impl WindowTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records that `next_char` followed `window`.
	///
	/// - If the window is unknown, it is created together with its first entry.
	/// - If the character is already listed, its count is increased.
	/// - Otherwise, a new entry is appended at the end of the list.
	pub fn record(&mut self, window: &str, next_char: char) {
		match self.windows.get_mut(window) {
			Some(entries) => match entries.iter_mut().find(|e| e.character() == next_char) {
				Some(entry) => entry.increment(),
				None => entries.push(CharFrequency::new(next_char)),
			},
			None => {
				self.windows.insert(Window::from(window), vec![CharFrequency::new(next_char)]);
			}
		}
	}

	/// Computes probabilities for every window's list.
	pub fn finalize(&mut self) {
		for entries in self.windows.values_mut() {
			calculate_probabilities(entries);
		}
	}

	/// Returns the successor list of `window`, if it was seen during training.
	pub fn get(&self, window: &str) -> Option<&[CharFrequency]> {
		self.windows.get(window).map(Vec::as_slice)
	}

	/// Number of distinct windows.
	pub fn len(&self) -> usize {
		self.windows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.windows.is_empty()
	}

	/// Iterates over `(window, entries)` in first-seen window order.
	pub fn iter(&self) -> impl Iterator<Item = (&Window, &[CharFrequency])> {
		self.windows.iter().map(|(window, entries)| (window, entries.as_slice()))
	}
}

/// Sets `probability` and `cumulative_probability` of every entry.
///
/// - `probability = count / total`, where `total` sums all counts of the list
/// - `cumulative_probability` is the running sum of probabilities in list order
///
/// This is a pure function of the counts: calling it again on the same list
/// produces identical values. An empty list is left untouched.
pub fn calculate_probabilities(entries: &mut [CharFrequency]) {
	let total: usize = entries.iter().map(CharFrequency::count).sum();
	if total == 0 {
		return;
	}

	let mut cumulative = 0.0;
	for entry in entries.iter_mut() {
		let probability = entry.count() as f64 / total as f64;
		cumulative += probability;
		entry.set_probabilities(probability, cumulative);
	}
}
