use std::fmt;

use serde::{Deserialize, Serialize};

use super::alphabet::Alphabet;

/// Languages that can be trained and detected.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
	Arabic,
	Bulgarian,
	Chinese,
	Dutch,
	English,
	French,
	German,
	Greek,
	Hebrew,
	Hindi,
	Italian,
	Marathi,
	Persian,
	Portuguese,
	Russian,
	Spanish,
	Ukrainian,
}

impl Language {
	pub const ALL: [Language; 17] = [
		Language::Arabic,
		Language::Bulgarian,
		Language::Chinese,
		Language::Dutch,
		Language::English,
		Language::French,
		Language::German,
		Language::Greek,
		Language::Hebrew,
		Language::Hindi,
		Language::Italian,
		Language::Marathi,
		Language::Persian,
		Language::Portuguese,
		Language::Russian,
		Language::Spanish,
		Language::Ukrainian,
	];

	/// ISO 639-1 code, also used as the corpus and model file name.
	pub fn iso_code(self) -> &'static str {
		match self {
			Language::Arabic => "ar",
			Language::Bulgarian => "bg",
			Language::Chinese => "zh",
			Language::Dutch => "nl",
			Language::English => "en",
			Language::French => "fr",
			Language::German => "de",
			Language::Greek => "el",
			Language::Hebrew => "he",
			Language::Hindi => "hi",
			Language::Italian => "it",
			Language::Marathi => "mr",
			Language::Persian => "fa",
			Language::Portuguese => "pt",
			Language::Russian => "ru",
			Language::Spanish => "es",
			Language::Ukrainian => "uk",
		}
	}

	/// Looks a language up by its ISO 639-1 code (case-insensitive).
	pub fn from_iso_code(code: &str) -> Option<Language> {
		let code = code.to_lowercase();
		Language::ALL.into_iter().find(|language| language.iso_code() == code)
	}

	/// Letters of the script this language is written in.
	pub fn alphabet(self) -> Alphabet {
		match self {
			Language::Arabic | Language::Persian => Alphabet::arabic(),
			Language::Bulgarian | Language::Russian | Language::Ukrainian => Alphabet::cyrillic(),
			Language::Chinese => Alphabet::han(),
			Language::Greek => Alphabet::greek(),
			Language::Hebrew => Alphabet::hebrew(),
			Language::Hindi | Language::Marathi => Alphabet::devanagari(),
			Language::Dutch
			| Language::English
			| Language::French
			| Language::German
			| Language::Italian
			| Language::Portuguese
			| Language::Spanish => Alphabet::latin(),
		}
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?}", self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_iso_code_round_trip() {
		for language in Language::ALL {
			assert_eq!(Language::from_iso_code(language.iso_code()), Some(language));
		}
		assert_eq!(Language::from_iso_code("EN"), Some(Language::English));
		assert_eq!(Language::from_iso_code("xx"), None);
	}

	#[test]
	fn test_alphabet_matches_script() {
		assert!(Language::English.alphabet().admits('e'));
		assert!(!Language::English.alphabet().admits('е')); // Cyrillic
		assert!(Language::Russian.alphabet().admits('ж'));
		assert!(Language::Greek.alphabet().admits('λ'));
		assert!(Language::Hindi.alphabet().admits('क'));
	}
}
