//! Fixed-order, character-level Markov text generation library.
//!
//! This crate provides:
//! - Training of a window → successor-distribution table from a corpus
//! - Conversion of successor counts into cumulative probabilities
//! - Weighted sampling and seed-driven text generation
//! - Corpus loading from disk
//!
//! Randomness is always supplied by the caller through
//! [`model::sampler::RandomSource`], so a seeded source makes a whole
//! train-then-generate run reproducible.

/// Character-level Markov model, training and generation logic.
pub mod model;

/// Error type returned at the corpus acquisition boundary.
pub mod error;

/// I/O utilities (corpus loading).
///
/// Not exposed
pub(crate) mod io;

pub use error::{Error, Result};
pub use model::language_model::LanguageModel;
