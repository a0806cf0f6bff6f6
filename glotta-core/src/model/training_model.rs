use log::debug;
use serde::{Deserialize, Serialize};

use super::alphabet::Alphabet;
use super::frequency::{AbsoluteFrequencies, RelativeFrequencies};
use super::language::Language;
use super::ngram::{Ngram, NgramOrder};

/// Frequency statistics of one n-gram order, learned from one language's corpus.
///
/// The relative frequency of an n-gram is the empirical probability of its
/// last character given the preceding ones:
/// - order 1: `absolute(g) / sum of all unigram counts`
/// - order k > 1: `absolute(g) / lower_absolute(prefix(g))`
///
/// # Invariants
/// - Every count in `absolute_frequencies` is >= 1
/// - `absolute_frequencies` and `relative_frequencies` share the same key set
/// - Every key has exactly `order` characters
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TrainingDataLanguageModel {
	language: Language,
	order: NgramOrder,
	absolute_frequencies: AbsoluteFrequencies,
	relative_frequencies: RelativeFrequencies,
}

impl TrainingDataLanguageModel {
	/// Builds the model of one order from lowercased corpus lines.
	///
	/// - N-grams are sliding windows of `order` characters taken inside the
	///   maximal runs of characters admitted by `alphabet`, so no window
	///   straddles a rejected character.
	/// - `lower_absolute_frequencies` must be the absolute table of order
	///   `order - 1` built from the same lines and alphabet (empty for order 1).
	///
	/// An n-gram whose prefix is missing from the lower table is dropped from
	/// both output tables and reported at debug level.
	///
	/// # Errors
	/// Returns an error if `order > 1` and the lower table is empty.
	pub fn new<S: AsRef<str>>(
		lines: &[S],
		language: Language,
		order: NgramOrder,
		alphabet: &Alphabet,
		lower_absolute_frequencies: &AbsoluteFrequencies,
	) -> Result<Self, String> {
		if order.lower().is_some() && lower_absolute_frequencies.is_empty() {
			return Err(format!(
				"{} model of order {} requires the absolute frequencies of order {}",
				language,
				order,
				order.get() - 1
			));
		}

		let counted = Self::count_ngrams(lines, order, alphabet);
		let mut absolute_frequencies = AbsoluteFrequencies::new();
		let mut relative_frequencies = RelativeFrequencies::new();

		let unigram_total = counted.total();
		for (ngram, &count) in &counted {
			let denominator = match ngram.prefix() {
				None => unigram_total,
				Some(prefix) => match lower_absolute_frequencies.get(&prefix) {
					Some(lower_count) => u64::from(lower_count),
					None => {
						debug!("{}: dropping {:?}, prefix {:?} missing from order {} table", language, ngram.value(), prefix.value(), order.get() - 1);
						continue;
					}
				},
			};
			absolute_frequencies.insert(ngram.clone(), count);
			relative_frequencies.insert(ngram.clone(), count as f64 / denominator as f64);
		}

		Ok(Self { language, order, absolute_frequencies, relative_frequencies })
	}

	/// Counts every admitted window of `order` characters over all lines.
	fn count_ngrams<S: AsRef<str>>(lines: &[S], order: NgramOrder, alphabet: &Alphabet) -> AbsoluteFrequencies {
		let n = order.get();
		let mut counts = AbsoluteFrequencies::new();

		for line in lines {
			for run in alphabet.runs(line.as_ref()) {
				let chars: Vec<char> = run.chars().collect();
				if chars.len() < n {
					// Run too short, no n-gram of this order
					continue;
				}
				for window in chars.windows(n) {
					counts.increment(Ngram::from_chars(window));
				}
			}
		}

		counts
	}

	pub fn language(&self) -> Language {
		self.language
	}

	pub fn order(&self) -> NgramOrder {
		self.order
	}

	pub fn absolute_frequencies(&self) -> &AbsoluteFrequencies {
		&self.absolute_frequencies
	}

	pub fn relative_frequencies(&self) -> &RelativeFrequencies {
		&self.relative_frequencies
	}
}
