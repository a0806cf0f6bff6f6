use std::collections::HashMap;

use super::alphabet::Alphabet;
use super::language::Language;
use super::ngram::{MAX_ORDER, NgramOrder};

/// Parameters for training language models.
///
/// # Responsibilities
/// - Track the highest n-gram order to build (`max_order`)
/// - Track how many worker threads train languages in parallel
/// - Hold per-language alphabet overrides, falling back to the language's own script
///
/// # Invariants
/// - `max_order` is within `1..=MAX_ORDER`
/// - `threads` is always >= 1
#[derive(Clone, Debug)]
pub struct TrainingInput {
	/// Highest n-gram order built for each language (orders 1..=max_order).
	max_order: NgramOrder,

	/// Number of worker threads used across languages.
	threads: usize,

	/// Alphabets replacing `Language::alphabet` for specific languages.
	alphabets: HashMap<Language, Alphabet>,
}

impl Default for TrainingInput {
	/// Builds every order up to `MAX_ORDER`, one thread per logical CPU.
	fn default() -> Self {
		Self {
			// Should not panic, MAX_ORDER is a valid order
			max_order: NgramOrder::try_from(MAX_ORDER).unwrap(),
			threads: num_cpus::get().max(1),
			alphabets: HashMap::new(),
		}
	}
}

impl TrainingInput {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn max_order(&self) -> NgramOrder {
		self.max_order
	}

	pub fn threads(&self) -> usize {
		self.threads
	}

	/// Sets the highest order to build.
	///
	/// # Errors
	/// Returns an error if the value is outside `1..=MAX_ORDER`.
	pub fn set_max_order(&mut self, max_order: usize) -> Result<(), String> {
		self.max_order = NgramOrder::try_from(max_order)?;
		Ok(())
	}

	/// Sets the number of worker threads.
	///
	/// # Errors
	/// Returns an error if `threads` is 0.
	pub fn set_threads(&mut self, threads: usize) -> Result<(), String> {
		if threads == 0 {
			return Err("Threads must be >= 1".to_owned());
		}
		self.threads = threads;
		Ok(())
	}

	/// Overrides the alphabet used for one language.
	pub fn set_alphabet(&mut self, language: Language, alphabet: Alphabet) {
		self.alphabets.insert(language, alphabet);
	}

	/// Returns the alphabet used when training `language`.
	pub fn alphabet_for(&self, language: Language) -> Alphabet {
		self.alphabets.get(&language).cloned().unwrap_or_else(|| language.alphabet())
	}
}
