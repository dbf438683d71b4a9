use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::char_frequency::CharFrequency;

/// Source of uniform draws in `[0, 1)` used for weighted sampling.
///
/// Every [`rand::Rng`] is a `RandomSource`. Tests can inject a
/// [`FixedDraws`] to script the exact sequence of draws.
pub trait RandomSource {
	/// Returns the next draw, uniformly distributed in `[0, 1)`.
	fn next_draw(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
	fn next_draw(&mut self) -> f64 {
		self.random::<f64>()
	}
}

/// Deterministic source repeating a fixed list of draws.
///
/// Draws are returned in order and the list wraps around when exhausted.
/// An empty list always yields `0.0`.
#[derive(Clone, Debug)]
pub struct FixedDraws {
	draws: Vec<f64>,
	position: usize,
}

impl FixedDraws {
	pub fn new(draws: Vec<f64>) -> Self {
		Self { draws, position: 0 }
	}

	/// A source that always returns the same value.
	pub fn constant(draw: f64) -> Self {
		Self::new(vec![draw])
	}
}

impl RandomSource for FixedDraws {
	fn next_draw(&mut self) -> f64 {
		if self.draws.is_empty() {
			return 0.0;
		}
		let draw = self.draws[self.position];
		self.position = (self.position + 1) % self.draws.len();
		draw
	}
}

/// Returns a generator seeded with `seed`.
///
/// Generating from the same model with the same seed reproduces the same text.
pub fn seeded_rng(seed: u64) -> StdRng {
	StdRng::seed_from_u64(seed)
}

/// Returns a generator seeded from the operating system.
pub fn entropy_rng() -> StdRng {
	StdRng::from_os_rng()
}

/// Picks a character from `entries` using a cumulative-probability threshold.
///
/// Scans entries in stored order and returns the first one whose cumulative
/// probability is strictly greater than `draw`. If rounding leaves every
/// cumulative probability at or below `draw`, the last entry is returned.
///
/// Returns `None` only for an empty list, which a trained model never holds.
pub fn sample(entries: &[CharFrequency], draw: f64) -> Option<char> {
	entries
		.iter()
		.find(|entry| entry.cumulative_probability() > draw)
		.or_else(|| entries.last())
		.map(CharFrequency::character)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::window_table::calculate_probabilities;

	/// Entries `a`, `b`, `c` with counts 1, 2, 1 (cp = 0.25, 0.75, 1.0).
	fn entries() -> Vec<CharFrequency> {
		let mut entries = vec![CharFrequency::new('a'), CharFrequency::new('b'), CharFrequency::new('c')];
		entries[1].increment();
		calculate_probabilities(&mut entries);
		entries
	}

	#[test]
	fn zero_draw_picks_first_entry() {
		assert_eq!(sample(&entries(), 0.0), Some('a'));
	}

	#[test]
	fn threshold_is_strict() {
		let entries = entries();
		assert_eq!(sample(&entries, 0.2499), Some('a'));
		assert_eq!(sample(&entries, 0.25), Some('b'));
		assert_eq!(sample(&entries, 0.7), Some('b'));
	}

	#[test]
	fn draw_past_second_to_last_picks_last() {
		assert_eq!(sample(&entries(), 0.75), Some('c'));
		assert_eq!(sample(&entries(), 0.999_999), Some('c'));
	}

	#[test]
	fn rounding_falls_back_to_last_entry() {
		let mut entries = entries();
		entries[2].set_probabilities(0.25, 0.999_999_9);
		assert_eq!(sample(&entries, 0.999_999_95), Some('c'));
	}

	#[test]
	fn empty_entries_yield_nothing() {
		assert_eq!(sample(&[], 0.5), None);
	}

	#[test]
	fn fixed_draws_cycle() {
		let mut source = FixedDraws::new(vec![0.1, 0.9]);
		let draws: Vec<f64> = (0..4).map(|_| source.next_draw()).collect();
		assert_eq!(draws, vec![0.1, 0.9, 0.1, 0.9]);
		assert_eq!(FixedDraws::new(Vec::new()).next_draw(), 0.0);
	}

	#[test]
	fn seeded_rng_is_reproducible() {
		let mut first = seeded_rng(20);
		let mut second = seeded_rng(20);
		for _ in 0..16 {
			let draw = first.next_draw();
			assert!((0.0..1.0).contains(&draw));
			assert_eq!(draw, second.next_draw());
		}
	}
}
