use super::language_model::LanguageModel;
use super::sampler::{sample, RandomSource};
use super::window::SlidingWindow;

/// Where the generation loop currently stands.
///
/// `Done` and `Stalled` are both terminal and both hand back the text
/// accumulated so far; callers only see the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GenerationState {
	/// Below the target length, last lookup succeeded.
	Accumulating,
	/// Target length reached.
	Done,
	/// The trailing window is unknown to the model.
	Stalled,
}

/// Extends `seed` with characters sampled from `model`.
///
/// # Parameters
/// - `seed`: initial text, `None` when absent.
/// - `target_length`: desired total length, in characters, seed included.
/// - `source`: supplier of uniform draws for the sampler.
///
/// # Returns
/// The seed unchanged (no draws consumed) when:
/// - the seed is absent
/// - `target_length` does not exceed the seed length
/// - the seed is shorter than the model's window length
///
/// Otherwise the seed followed by sampled characters. The result is shorter
/// than `target_length` when the trailing window runs into a window the
/// model never saw.
///
/// # Notes
/// - Lengths count characters, not bytes.
/// - The model is only read; the same model can serve many generations.
pub fn generate<R>(
	model: &LanguageModel,
	seed: Option<&str>,
	target_length: usize,
	source: &mut R,
) -> Option<String>
where
	R: RandomSource + ?Sized,
{
	let seed = seed?;
	let seed_length = seed.chars().count();
	let window_length = model.window_length();
	if target_length <= seed_length || seed_length < window_length {
		log::debug!(
			"Seed of {} chars returned unchanged (target {}, window {})",
			seed_length,
			target_length,
			window_length
		);
		return Some(seed.to_owned());
	}

	let mut generated = String::from(seed);
	let mut length = seed_length;
	let mut window = SlidingWindow::trailing(seed, window_length);
	let mut key = String::new();

	let mut state = GenerationState::Accumulating;
	while state == GenerationState::Accumulating {
		window.write_key(&mut key);
		let next_char = model.entries(&key).and_then(|entries| sample(entries, source.next_draw()));

		state = match next_char {
			Some(c) => {
				generated.push(c);
				window.push(c);
				length += 1;
				if length >= target_length { GenerationState::Done } else { GenerationState::Accumulating }
			}
			None => GenerationState::Stalled,
		};
	}

	log::debug!("Generation ended {:?} after {} of {} chars", state, length, target_length);
	if state == GenerationState::Stalled {
		log::trace!("Unknown window {:?}", key);
	}

	Some(generated)
}
