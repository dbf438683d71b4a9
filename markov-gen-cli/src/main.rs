use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::LevelFilter;

use markov_gen_core::LanguageModel;
use markov_gen_core::model::sampler::{entropy_rng, seeded_rng};

/// Seed used by `fixed` mode unless `--seed` overrides it.
const DEFAULT_SEED: u64 = 20;

/// How the random source is seeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
	/// Different text on every run
	Random,
	/// Same text on every run for the same arguments
	Fixed,
}

#[derive(Parser, Debug)]
#[command(
	name = "markov-gen",
	about = "Train a character-level Markov model on a text file and extend a seed",
	allow_negative_numbers = true
)]
struct Cli {
	/// Number of characters in a window (0 or less disables training)
	window_length: i64,

	/// Text generation starts from
	initial_text: String,

	/// Total length of the generated text, initial text included
	text_length: usize,

	/// Random source seeding
	#[arg(value_enum)]
	mode: Mode,

	/// Corpus file
	file: PathBuf,

	/// Seed used in `fixed` mode
	#[arg(long, default_value_t = DEFAULT_SEED)]
	seed: u64,

	/// Print the trained model before the generated text
	#[arg(long)]
	dump: bool,

	/// Increase log verbosity (repeatable)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,

	/// Only log errors
	#[arg(short, long)]
	quiet: bool,
}

fn init_logging(verbose: u8, quiet: bool) {
	let level = if quiet {
		LevelFilter::Error
	} else {
		match verbose {
			0 => LevelFilter::Warn,
			1 => LevelFilter::Info,
			2 => LevelFilter::Debug,
			_ => LevelFilter::Trace,
		}
	};

	let mut builder = env_logger::Builder::new();
	builder.filter_level(level);
	// RUST_LOG, when set, wins over the flags
	builder.parse_env(Env::default());
	let _ = builder.try_init();
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	init_logging(cli.verbose, cli.quiet);

	let window_length = usize::try_from(cli.window_length).unwrap_or(0);
	let model = LanguageModel::train_file(&cli.file, window_length)
		.with_context(|| format!("unable to train on {}", cli.file.display()))?;
	log::info!(
		"Trained on {} with window length {}: {} windows",
		cli.file.display(),
		window_length,
		model.len()
	);

	if cli.dump {
		print!("{}", model);
	}

	let mut rng = match cli.mode {
		Mode::Random => entropy_rng(),
		Mode::Fixed => seeded_rng(cli.seed),
	};
	let text = model.generate(&cli.initial_text, cli.text_length, &mut rng);
	if text.chars().count() < cli.text_length {
		log::info!("Generation stopped at {} of {} chars", text.chars().count(), cli.text_length);
	}

	println!("{}", text);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_positional_arguments() {
		let cli = Cli::try_parse_from(["markov-gen", "3", "the", "100", "fixed", "corpus.txt"]).unwrap();
		assert_eq!(cli.window_length, 3);
		assert_eq!(cli.initial_text, "the");
		assert_eq!(cli.text_length, 100);
		assert_eq!(cli.mode, Mode::Fixed);
		assert_eq!(cli.file, PathBuf::from("corpus.txt"));
		assert_eq!(cli.seed, DEFAULT_SEED);
		assert!(!cli.dump);
	}

	#[test]
	fn accepts_negative_window_length() {
		let cli = Cli::try_parse_from(["markov-gen", "-1", "x", "10", "random", "c.txt"]).unwrap();
		assert_eq!(cli.window_length, -1);
		assert_eq!(usize::try_from(cli.window_length).unwrap_or(0), 0);
	}

	#[test]
	fn rejects_unknown_mode() {
		assert!(Cli::try_parse_from(["markov-gen", "3", "the", "100", "sometimes", "c.txt"]).is_err());
	}

	#[test]
	fn options_override_defaults() {
		let cli = Cli::try_parse_from([
			"markov-gen", "2", "ab", "40", "fixed", "c.txt", "--seed", "7", "--dump", "-vv",
		])
		.unwrap();
		assert_eq!(cli.seed, 7);
		assert!(cli.dump);
		assert_eq!(cli.verbose, 2);
	}
}
