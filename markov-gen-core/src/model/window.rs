use std::borrow::Borrow;
use std::collections::VecDeque;
use std::fmt;

/// A fixed-length run of characters used as a lookup key.
///
/// Windows are immutable snapshots taken from a [`SlidingWindow`].
/// `Window` borrows as `str`, so tables keyed by `Window` can be queried
/// with a plain `&str`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Window(String);

impl Window {
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Number of characters (not bytes) in the window.
	pub fn char_len(&self) -> usize {
		self.0.chars().count()
	}
}

impl From<&str> for Window {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}

impl Borrow<str> for Window {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Window {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Fixed-capacity ring buffer of characters tracking the trailing window
/// of a text.
///
/// Pushing into a full buffer drops the oldest character, which slides the
/// window forward by one position without rebuilding any substring.
///
/// # Invariants
/// - `chars.len() <= capacity`
#[derive(Clone, Debug)]
pub struct SlidingWindow {
	capacity: usize,
	chars: VecDeque<char>,
}

impl SlidingWindow {
	/// Creates an empty window holding at most `capacity` characters.
	pub fn new(capacity: usize) -> Self {
		Self { capacity, chars: VecDeque::with_capacity(capacity) }
	}

	/// Creates a window over the last `capacity` characters of `text`.
	pub fn trailing(text: &str, capacity: usize) -> Self {
		let mut window = Self::new(capacity);
		for c in text.chars() {
			window.push(c);
		}
		window
	}

	/// Returns `true` once the buffer holds exactly `capacity` characters.
	pub fn is_full(&self) -> bool {
		self.chars.len() == self.capacity
	}

	/// Appends `c`, dropping the oldest character if the buffer is full.
	///
	/// A zero-capacity window stays empty.
	pub fn push(&mut self, c: char) {
		if self.capacity == 0 {
			return;
		}
		if self.is_full() {
			self.chars.pop_front();
		}
		self.chars.push_back(c);
	}

	/// Writes the current contents into `buffer`, replacing what it held.
	///
	/// Lets callers reuse one allocation for repeated lookups.
	pub fn write_key(&self, buffer: &mut String) {
		buffer.clear();
		buffer.extend(self.chars.iter());
	}

	/// Takes an owned snapshot of the current contents.
	pub fn snapshot(&self) -> Window {
		Window(self.chars.iter().collect())
	}
}
