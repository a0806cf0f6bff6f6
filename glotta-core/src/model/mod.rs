//! Top-level module for the n-gram model system.
//!
//! Provides, leaves first:
//! - N-gram values and their back-off chains (`Ngram`, `NgramOrder`)
//! - Script filters applied during extraction (`Alphabet`, `Language`)
//! - Line and word splitting (`tokenizer`)
//! - Frequency tables (`FrequencyTable`)
//! - Per-order model builders (`TrainingDataLanguageModel`, `TestDataLanguageModel`)
//! - Multi-order, multi-language training (`LanguageModels`, `Trainer`, `TrainingInput`)

/// Character script filters.
pub mod alphabet;

/// Mapping from n-gram to count or probability.
pub mod frequency;

/// Supported languages and their scripts.
pub mod language;

/// N-gram values, orders and back-off chains.
pub mod ngram;

/// Back-off chains of the n-grams found in a text to classify.
pub mod test_model;

/// Line and word splitting.
pub mod tokenizer;

/// Multi-order training for one language, and parallel training
/// across languages with on-disk persistence.
pub mod trainer;

/// Training configuration (max order, threads, alphabet overrides).
pub mod training_input;

/// Frequency statistics of one order for one language.
pub mod training_model;

pub use alphabet::Alphabet;
pub use frequency::{AbsoluteFrequencies, FrequencyTable, RelativeFrequencies};
pub use language::Language;
pub use ngram::{MAX_ORDER, Ngram, NgramOrder};
pub use test_model::{TestDataLanguageModel, TestDataModels};
pub use trainer::{LanguageModels, Trainer};
pub use training_input::TrainingInput;
pub use training_model::TrainingDataLanguageModel;
