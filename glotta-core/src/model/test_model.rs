use std::collections::BTreeSet;

use super::alphabet::Alphabet;
use super::ngram::{Ngram, NgramOrder};
use super::tokenizer::split_text_into_words;

/// The n-grams of one order found in a text to classify.
///
/// Each entry is a back-off chain `[g_k, g_k-1, ..., g_1]` where every
/// element is the previous one without its last character. Only presence
/// is recorded, no counts.
///
/// # Invariants
/// - Every chain holds exactly `order` n-grams, the last one a unigram
/// - No two chains share the same first element
/// - Chains are sorted by their first element
#[derive(Clone, Debug, PartialEq)]
pub struct TestDataLanguageModel {
	order: NgramOrder,
	ngrams: Vec<Vec<Ngram>>,
}

impl TestDataLanguageModel {
	/// Builds the model of one order from the words of a text, keeping
	/// windows made of letters only.
	pub fn new<S: AsRef<str>>(words: &[S], order: NgramOrder) -> Self {
		Self::with_alphabet(words, order, &Alphabet::letters())
	}

	/// Builds the model of one order, keeping only windows whose characters
	/// all belong to `alphabet`.
	///
	/// Words shorter than `order` contribute nothing.
	pub fn with_alphabet<S: AsRef<str>>(words: &[S], order: NgramOrder, alphabet: &Alphabet) -> Self {
		let n = order.get();
		let mut distinct = BTreeSet::new();

		for word in words {
			let chars: Vec<char> = word.as_ref().chars().collect();
			if chars.len() < n {
				continue;
			}
			for window in chars.windows(n) {
				let ngram = Ngram::from_chars(window);
				if alphabet.admits_all(ngram.value()) {
					distinct.insert(ngram);
				}
			}
		}

		let ngrams = distinct.into_iter().map(|ngram| ngram.backoff_chain()).collect();
		Self { order, ngrams }
	}

	pub fn order(&self) -> NgramOrder {
		self.order
	}

	/// Back-off chains, sorted by their highest-order n-gram.
	pub fn ngrams(&self) -> &[Vec<Ngram>] {
		&self.ngrams
	}

	pub fn len(&self) -> usize {
		self.ngrams.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ngrams.is_empty()
	}
}

/// Test models of every order from unigrams up to a maximum, for one text.
#[derive(Clone, Debug)]
pub struct TestDataModels {
	models: Vec<TestDataLanguageModel>,
}

impl TestDataModels {
	/// Splits `text` into words and builds one model per order up to `max_order`.
	pub fn from_text(text: &str, max_order: NgramOrder) -> Self {
		let words = split_text_into_words(text);
		let models = NgramOrder::up_to(max_order)
			.map(|order| TestDataLanguageModel::new(words.as_slice(), order))
			.collect();
		Self { models }
	}

	/// Returns the model of the given order, if it was built.
	pub fn get(&self, order: NgramOrder) -> Option<&TestDataLanguageModel> {
		self.models.get(order.get() - 1)
	}

	pub fn iter(&self) -> impl Iterator<Item = &TestDataLanguageModel> {
		self.models.iter()
	}
}
