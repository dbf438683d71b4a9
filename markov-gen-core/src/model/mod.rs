//! Character-level Markov model.
//!
//! This module groups:
//! - Per-character successor statistics (`CharFrequency`)
//! - Window keys and the sliding ring buffer (`Window`, `SlidingWindow`)
//! - The window → distribution table (`WindowTable`)
//! - Single-pass training (`trainer`)
//! - Weighted sampling and random sources (`sampler`)
//! - Seed-driven generation (`generator`)
//! - The trained model itself (`LanguageModel`)

/// Successor character statistics within one window.
pub mod char_frequency;

/// Window keys and the fixed-capacity sliding buffer used to produce them.
pub mod window;

/// Order-preserving mapping from windows to successor distributions.
///
/// Also hosts probability finalization.
pub mod window_table;

/// Corpus ingestion into a finalized model.
pub mod trainer;

/// Cumulative-probability sampling and random draw sources.
pub mod sampler;

/// Seed extension loop.
pub mod generator;

/// The trained model: window length plus table.
pub mod language_model;
