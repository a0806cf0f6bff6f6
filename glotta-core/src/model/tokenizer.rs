//! Line and word splitting feeding the models.

use regex::Regex;
use std::sync::LazyLock;

static LOGOGRAM: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[\p{Han}\p{Hiragana}\p{Katakana}]$").unwrap());

/// Splits a corpus into lowercased lines.
///
/// - Keeps line order
/// - Splits on `\n` / `\r\n`
/// - Does not strip anything else, filtering is left to the alphabet
pub fn lines_of_text(text: &str) -> Vec<String> {
	text.lines().map(str::to_lowercase).collect()
}

/// Splits a text into lowercased words, in reading order.
///
/// Every character that is not a letter ends the current word. Logograms
/// (Han, Hiragana, Katakana) are emitted as one-character words since
/// those scripts do not separate words with spaces.
pub fn split_text_into_words(text: &str) -> Vec<String> {
	let mut words = Vec::new();
	let mut word = String::new();

	for c in text.chars().flat_map(char::to_lowercase) {
		if is_logogram(c) {
			if !word.is_empty() {
				words.push(std::mem::take(&mut word));
			}
			words.push(c.to_string());
		} else if c.is_alphabetic() {
			word.push(c);
		} else if !word.is_empty() {
			words.push(std::mem::take(&mut word));
		}
	}
	if !word.is_empty() {
		words.push(word);
	}

	words
}

fn is_logogram(c: char) -> bool {
	let mut buffer = [0u8; 4];
	LOGOGRAM.is_match(c.encode_utf8(&mut buffer))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_lines_of_text() {
		let lines = lines_of_text("These Lines\r\n⚠ Do NOT, 23\nend");
		assert_eq!(lines, vec!["these lines", "⚠ do not, 23", "end"]);
		assert!(lines_of_text("").is_empty());
	}

	#[test]
	fn test_split_text_into_words() {
		let words = split_text_into_words("By the way, they consist of 23 words in total.");
		assert_eq!(words, vec!["by", "the", "way", "they", "consist", "of", "words", "in", "total"]);
	}

	#[test]
	fn test_split_drops_symbols() {
		assert_eq!(split_text_into_words("⚠ Do not"), vec!["do", "not"]);
		assert!(split_text_into_words("42 !? ...").is_empty());
	}

	#[test]
	fn test_split_logograms() {
		assert_eq!(split_text_into_words("我爱ab"), vec!["我", "爱", "ab"]);
		assert_eq!(split_text_into_words("xyzカタ"), vec!["xyz", "カ", "タ"]);
	}
}
