use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

use super::ngram::Ngram;

/// Tolerance used when comparing relative frequencies.
pub const EPSILON: f64 = 1e-9;

/// Occurrence counts, as produced by a training model.
pub type AbsoluteFrequencies = FrequencyTable<u32>;

/// Conditional probabilities in `(0, 1]`, as produced by a training model.
pub type RelativeFrequencies = FrequencyTable<f64>;

/// Mapping from n-gram to a frequency value.
///
/// Iteration is lexicographic by n-gram string so that identical inputs
/// always produce identical tables.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FrequencyTable<V> {
	frequencies: BTreeMap<Ngram, V>,
}

impl<V> Default for FrequencyTable<V> {
	fn default() -> Self {
		Self { frequencies: BTreeMap::new() }
	}
}

impl<V: Copy> FrequencyTable<V> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, ngram: &Ngram) -> Option<V> {
		self.frequencies.get(ngram).copied()
	}

	/// Looks an n-gram up by its string.
	///
	/// Returns `None` for strings that are not valid n-grams.
	pub fn get_str(&self, ngram: &str) -> Option<V> {
		let ngram = Ngram::new(ngram).ok()?;
		self.get(&ngram)
	}

	pub fn contains(&self, ngram: &Ngram) -> bool {
		self.frequencies.contains_key(ngram)
	}

	pub fn len(&self) -> usize {
		self.frequencies.len()
	}

	pub fn is_empty(&self) -> bool {
		self.frequencies.is_empty()
	}

	pub fn keys(&self) -> impl Iterator<Item = &Ngram> {
		self.frequencies.keys()
	}

	pub fn values(&self) -> impl Iterator<Item = V> + '_ {
		self.frequencies.values().copied()
	}

	pub fn iter(&self) -> btree_map::Iter<'_, Ngram, V> {
		self.frequencies.iter()
	}

	pub(crate) fn insert(&mut self, ngram: Ngram, value: V) {
		self.frequencies.insert(ngram, value);
	}
}

impl AbsoluteFrequencies {
	/// Sum of every count in the table.
	pub fn total(&self) -> u64 {
		self.frequencies.values().map(|&count| u64::from(count)).sum()
	}

	/// Records one more occurrence of `ngram`.
	pub(crate) fn increment(&mut self, ngram: Ngram) {
		*self.frequencies.entry(ngram).or_insert(0) += 1;
	}
}

impl RelativeFrequencies {
	/// Compares two probability tables key by key with `EPSILON` tolerance.
	pub fn approx_eq(&self, other: &Self) -> bool {
		self.len() == other.len()
			&& self.iter().zip(other.iter()).all(|((a, x), (b, y))| a == b && (x - y).abs() <= EPSILON)
	}
}

impl<V> FromIterator<(Ngram, V)> for FrequencyTable<V> {
	fn from_iter<I: IntoIterator<Item = (Ngram, V)>>(iter: I) -> Self {
		Self { frequencies: iter.into_iter().collect() }
	}
}

impl<'a, V> IntoIterator for &'a FrequencyTable<V> {
	type Item = (&'a Ngram, &'a V);
	type IntoIter = btree_map::Iter<'a, Ngram, V>;

	fn into_iter(self) -> Self::IntoIter {
		self.frequencies.iter()
	}
}
