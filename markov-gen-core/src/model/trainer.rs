use super::language_model::LanguageModel;
use super::window::SlidingWindow;
use super::window_table::WindowTable;

/// Builds a model from a stream of corpus characters.
///
/// Fills a window with the first `window_length` characters, then for every
/// following character `c`:
/// - records that `c` followed the current window
/// - slides the window forward so that it ends with `c`
///
/// A corpus of `len` characters therefore yields exactly
/// `len - window_length` observations. Every window's list is finalized
/// into probabilities once the pass is over.
///
/// # Notes
/// - `window_length == 0` disables training and returns an empty model.
/// - A corpus shorter than `window_length` also returns an empty model.
pub fn train<I>(corpus: I, window_length: usize) -> LanguageModel
where
	I: IntoIterator<Item = char>,
{
	let mut table = WindowTable::new();
	if window_length == 0 {
		log::debug!("Window length is 0, training skipped");
		return LanguageModel::from_table(window_length, table);
	}

	let mut chars = corpus.into_iter();
	let mut window = SlidingWindow::new(window_length);
	while !window.is_full() {
		match chars.next() {
			Some(c) => window.push(c),
			None => {
				log::debug!("Corpus shorter than window length {}, model left empty", window_length);
				return LanguageModel::from_table(window_length, table);
			}
		}
	}

	let mut key = String::new();
	let mut observations = 0usize;
	for c in chars {
		window.write_key(&mut key);
		table.record(&key, c);
		window.push(c);
		observations += 1;
	}

	table.finalize();
	log::debug!(
		"Trained window length {}: {} observations, {} distinct windows",
		window_length,
		observations,
		table.len()
	);

	LanguageModel::from_table(window_length, table)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::char_frequency::CharFrequency;

	fn counts(model: &LanguageModel, window: &str) -> Vec<(char, usize)> {
		model
			.entries(window)
			.unwrap_or_default()
			.iter()
			.map(|e| (e.character(), e.count()))
			.collect()
	}

	#[test]
	fn abcabcabc_window_three() {
		let model = train("abcabcabc".chars(), 3);

		assert_eq!(model.len(), 3);
		assert_eq!(counts(&model, "abc"), vec![('a', 2)]);
		assert_eq!(counts(&model, "bca"), vec![('b', 2)]);
		assert_eq!(counts(&model, "cab"), vec![('c', 2)]);
	}

	#[test]
	fn observation_count_is_len_minus_window() {
		let corpus = "the theory of the thing";
		for window_length in 1..5 {
			let model = train(corpus.chars(), window_length);
			let observed: usize = model
				.windows()
				.map(|(_, entries)| entries.iter().map(CharFrequency::count).sum::<usize>())
				.sum();
			assert_eq!(observed, corpus.chars().count() - window_length);
		}
	}

	#[test]
	fn last_char_is_never_a_window_start() {
		let model = train("abcd".chars(), 2);
		assert_eq!(counts(&model, "ab"), vec![('c', 1)]);
		assert_eq!(counts(&model, "bc"), vec![('d', 1)]);
		assert!(model.entries("cd").is_none());
	}

	#[test]
	fn zero_window_length_is_empty() {
		let model = train("abcabc".chars(), 0);
		assert!(model.is_empty());
		assert_eq!(model.window_length(), 0);
	}

	#[test]
	fn short_corpus_is_empty() {
		assert!(train("ab".chars(), 3).is_empty());
		assert!(train("abc".chars(), 3).is_empty());
	}

	#[test]
	fn multibyte_characters_are_single_symbols() {
		let model = train("été été".chars(), 2);
		assert_eq!(counts(&model, "ét"), vec![('é', 2)]);
	}
}
