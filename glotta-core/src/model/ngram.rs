use std::fmt;

use serde::{Deserialize, Serialize};

/// Highest n-gram order handled by the models.
pub const MAX_ORDER: usize = 5;

/// Order of an n-gram (number of characters), always within `1..=MAX_ORDER`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NgramOrder(usize);

impl NgramOrder {
	/// Unigrams, the lowest order.
	pub const UNI: NgramOrder = NgramOrder(1);

	/// Returns the raw order value.
	pub fn get(self) -> usize {
		self.0
	}

	/// Returns the order directly below this one, `None` for unigrams.
	pub fn lower(self) -> Option<NgramOrder> {
		if self.0 > 1 { Some(NgramOrder(self.0 - 1)) } else { None }
	}

	/// Iterates over every supported order, from unigrams up to `max`.
	pub fn up_to(max: NgramOrder) -> impl Iterator<Item = NgramOrder> {
		(1..=max.0).map(NgramOrder)
	}
}

impl TryFrom<usize> for NgramOrder {
	type Error = String;

	fn try_from(order: usize) -> Result<Self, Self::Error> {
		if !(1..=MAX_ORDER).contains(&order) {
			return Err(format!("n-gram order must be between 1 and {}, got {}", MAX_ORDER, order));
		}
		Ok(NgramOrder(order))
	}
}

impl fmt::Display for NgramOrder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A character n-gram of length 1 to 5.
///
/// An n-gram is a plain value: it is identified by its string only, so two
/// n-grams are equal, hash and sort exactly like their strings.
///
/// # Invariants
/// - `value` holds between 1 and `MAX_ORDER` characters
/// - The prefix relation is derived from `value`, never stored
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Ngram {
	value: String,
}

impl Ngram {
	/// Creates an n-gram from its string.
	///
	/// # Errors
	/// Returns an error if the string is empty or longer than `MAX_ORDER` characters.
	pub fn new(value: &str) -> Result<Self, String> {
		Self::try_from(value.to_owned())
	}

	/// Builds an n-gram from characters already known to be a valid window.
	pub(crate) fn from_chars(chars: &[char]) -> Self {
		debug_assert!((1..=MAX_ORDER).contains(&chars.len()));
		Self { value: chars.iter().collect() }
	}

	pub fn value(&self) -> &str {
		&self.value
	}

	/// Returns the order of this n-gram (its character count).
	pub fn order(&self) -> NgramOrder {
		NgramOrder(self.value.chars().count())
	}

	/// Returns the same n-gram with its last character removed.
	///
	/// Unigrams have no prefix.
	pub fn prefix(&self) -> Option<Ngram> {
		let mut chars = self.value.chars();
		chars.next_back()?;
		let prefix = chars.as_str();
		if prefix.is_empty() {
			return None;
		}
		Some(Self { value: prefix.to_owned() })
	}

	/// Returns the back-off chain of this n-gram.
	///
	/// The chain starts with the n-gram itself, then drops the trailing
	/// character until a unigram is reached:
	/// `"testi"` → `["testi", "test", "tes", "te", "t"]`
	pub fn backoff_chain(&self) -> Vec<Ngram> {
		let mut chain = Vec::with_capacity(self.order().get());
		let mut current = Some(self.clone());
		while let Some(ngram) = current {
			current = ngram.prefix();
			chain.push(ngram);
		}
		chain
	}
}

impl TryFrom<String> for Ngram {
	type Error = String;

	/// Same length check as `Ngram::new`, also applied when deserializing.
	fn try_from(value: String) -> Result<Self, Self::Error> {
		let len = value.chars().count();
		if len == 0 || len > MAX_ORDER {
			return Err(format!("n-gram length must be between 1 and {}, got {:?}", MAX_ORDER, value));
		}
		Ok(Self { value })
	}
}

impl From<Ngram> for String {
	fn from(ngram: Ngram) -> Self {
		ngram.value
	}
}

impl fmt::Display for Ngram {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn values(chain: &[Ngram]) -> Vec<&str> {
		chain.iter().map(Ngram::value).collect()
	}

	#[test]
	fn test_new_rejects_invalid_lengths() {
		assert!(Ngram::new("").is_err());
		assert!(Ngram::new("abcdef").is_err());
		assert!(Ngram::new("abcde").is_ok());
		// Characters, not bytes
		assert!(Ngram::new("äöüßé").is_ok());
	}

	#[test]
	fn test_prefix() {
		let ngram = Ngram::new("tes").unwrap();
		assert_eq!(ngram.prefix(), Some(Ngram::new("te").unwrap()));
		assert_eq!(Ngram::new("t").unwrap().prefix(), None);
		assert_eq!(Ngram::new("äö").unwrap().prefix().unwrap().value(), "ä");
	}

	#[test]
	fn test_backoff_chain() {
		let chain = Ngram::new("testi").unwrap().backoff_chain();
		assert_eq!(values(&chain), vec!["testi", "test", "tes", "te", "t"]);

		let chain = Ngram::new("a").unwrap().backoff_chain();
		assert_eq!(values(&chain), vec!["a"]);
	}

	#[test]
	fn test_order() {
		assert_eq!(Ngram::new("abc").unwrap().order().get(), 3);
		assert!(NgramOrder::try_from(0).is_err());
		assert!(NgramOrder::try_from(6).is_err());
		assert_eq!(NgramOrder::try_from(3).unwrap().lower(), Some(NgramOrder::try_from(2).unwrap()));
		assert_eq!(NgramOrder::UNI.lower(), None);
	}

	#[test]
	fn test_ordering_is_lexicographic() {
		let mut ngrams = vec![Ngram::new("b").unwrap(), Ngram::new("ab").unwrap(), Ngram::new("a").unwrap()];
		ngrams.sort();
		assert_eq!(values(&ngrams), vec!["a", "ab", "b"]);
	}

	#[test]
	fn test_deserialize_checks_length() {
		let bytes = postcard::to_stdvec(&Ngram::new("tes").unwrap()).unwrap();
		assert_eq!(postcard::from_bytes::<Ngram>(&bytes).unwrap(), Ngram::new("tes").unwrap());

		let too_long = postcard::to_stdvec("abcdef").unwrap();
		assert!(postcard::from_bytes::<Ngram>(&too_long).is_err());
		let empty = postcard::to_stdvec("").unwrap();
		assert!(postcard::from_bytes::<Ngram>(&empty).is_err());
	}
}
