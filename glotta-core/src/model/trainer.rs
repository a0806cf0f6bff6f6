use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::io::{list_files, normalize_folder, read_corpus};
use super::alphabet::Alphabet;
use super::frequency::AbsoluteFrequencies;
use super::language::Language;
use super::ngram::NgramOrder;
use super::training_input::TrainingInput;
use super::training_model::TrainingDataLanguageModel;

/// Training models of every order, from unigrams up, for one language.
///
/// # Invariants
/// - `models[i]` has order `i + 1`
/// - Every model was built from the same corpus and alphabet
/// - `models.len() <= max_order`, shorter only when an order came out empty
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LanguageModels {
	language: Language,
	/// Highest order requested when training.
	max_order: NgramOrder,
	/// Character class of the alphabet the models were trained with.
	alphabet: String,
	models: Vec<TrainingDataLanguageModel>,
}

impl LanguageModels {
	/// Builds orders 1 to `max_order` from lowercased corpus lines.
	///
	/// Orders are built one after the other: order k is fed the absolute
	/// frequencies of order k-1.
	///
	/// # Errors
	/// Returns an error if an order cannot be built.
	pub fn train<S: AsRef<str>>(
		language: Language,
		lines: &[S],
		max_order: NgramOrder,
		alphabet: &Alphabet,
	) -> Result<Self, String> {
		let mut models: Vec<TrainingDataLanguageModel> = Vec::with_capacity(max_order.get());
		let empty = AbsoluteFrequencies::new();

		for order in NgramOrder::up_to(max_order) {
			let lower = models.last().map_or(&empty, |model| model.absolute_frequencies());
			if order.lower().is_some() && lower.is_empty() {
				// Nothing below, nothing above
				break;
			}
			let model = TrainingDataLanguageModel::new(lines, language, order, alphabet, lower)?;
			models.push(model);
		}

		Ok(Self { language, max_order, alphabet: alphabet.class().to_owned(), models })
	}

	pub fn language(&self) -> Language {
		self.language
	}

	pub fn max_order(&self) -> NgramOrder {
		self.max_order
	}

	/// Returns `true` if these models were trained with the settings
	/// `input` would use for their language.
	pub fn matches(&self, input: &TrainingInput) -> bool {
		self.max_order == input.max_order() && self.alphabet == input.alphabet_for(self.language).class()
	}

	/// Returns the model of the given order, if it was built.
	pub fn get(&self, order: NgramOrder) -> Option<&TrainingDataLanguageModel> {
		self.models.get(order.get() - 1)
	}

	pub fn iter(&self) -> impl Iterator<Item = &TrainingDataLanguageModel> {
		self.models.iter()
	}

	/// Serializes the models to `path` with `postcard`.
	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
		let bytes = postcard::to_stdvec(self)?;
		std::fs::write(path, bytes)?;
		Ok(())
	}

	/// Loads models previously written by `save`.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
		let bytes = std::fs::read(path)?;
		Ok(postcard::from_bytes(&bytes)?)
	}
}

/// Trains language models for many languages in parallel.
///
/// Languages are independent of each other, so they are spread across
/// worker threads; the orders of a single language stay sequential.
pub struct Trainer;

impl Trainer {
	/// Trains every corpus and returns the models sorted by language.
	///
	/// # Behavior
	/// - Splits the corpora into `input.threads()` chunks
	/// - Spawns one thread per chunk, each building its languages in turn
	/// - Collects the results through an MPSC channel
	///
	/// # Errors
	/// Returns the first training error, or an error if a worker died.
	pub fn train(
		corpora: Vec<(Language, Vec<String>)>,
		input: &TrainingInput,
	) -> Result<Vec<LanguageModels>, Box<dyn std::error::Error>> {
		if corpora.is_empty() {
			return Ok(Vec::new());
		}

		let expected = corpora.len();
		let chunk_size = expected.div_ceil(input.threads());
		let max_order = input.max_order();

		let (tx, rx) = mpsc::channel();
		let mut corpora = corpora.into_iter().peekable();
		while corpora.peek().is_some() {
			let tx = tx.clone();
			let chunk: Vec<(Language, Vec<String>, Alphabet)> = corpora
				.by_ref()
				.take(chunk_size)
				.map(|(language, lines)| {
					let alphabet = input.alphabet_for(language);
					(language, lines, alphabet)
				})
				.collect();

			thread::spawn(move || {
				for (language, lines, alphabet) in chunk {
					let models = LanguageModels::train(language, lines.as_slice(), max_order, &alphabet);
					if tx.send(models).is_err() {
						return;
					}
				}
			});
		}
		drop(tx);

		let mut trained = Vec::with_capacity(expected);
		for models in rx.iter() {
			let models = models?;
			info!("Trained {} ({} orders)", models.language(), models.models.len());
			trained.push(models);
		}
		if trained.len() != expected {
			return Err(format!("Only {} of {} languages were trained", trained.len(), expected).into());
		}

		trained.sort_by_key(LanguageModels::language);
		Ok(trained)
	}

	/// Trains every `<iso code>.txt` corpus found in a directory.
	///
	/// # Behavior
	/// - Files whose name is not a known ISO 639-1 code are skipped
	/// - Codes are case-insensitive; a second corpus for the same language is skipped
	/// - If `<iso code>.bin` exists and was trained with the same settings as
	///   `input`, it is loaded instead; otherwise the corpus is retrained
	/// - Freshly trained models are written to `<iso code>.bin` (lowercase code)
	///
	/// # Errors
	/// Returns an error if the path is not a directory, or on I/O,
	/// serialization or training failure.
	pub fn train_directory<P: AsRef<Path>>(
		dir: P,
		input: &TrainingInput,
	) -> Result<Vec<LanguageModels>, Box<dyn std::error::Error>> {
		let folder = normalize_folder(dir.as_ref());
		if !folder.is_dir() {
			return Err(format!("Expected a directory, got: {}", folder.display()).into());
		}

		let mut seen = HashSet::new();
		let mut loaded = Vec::new();
		let mut corpora = Vec::new();
		for file in list_files(&folder, "txt")? {
			let code = file.file_stem().map(|stem| stem.to_string_lossy().into_owned()).unwrap_or_default();
			let Some(language) = Language::from_iso_code(&code) else {
				warn!("Skipping {}: unknown language code {:?}", file.display(), code);
				continue;
			};
			if !seen.insert(language) {
				warn!("Skipping {}: {} already has a corpus", file.display(), language);
				continue;
			}

			let binary_path = Self::binary_path(&folder, language);
			if binary_path.exists() {
				let models = LanguageModels::load(&binary_path)?;
				if models.language() == language && models.matches(input) {
					info!("Loading {} from {}", language, binary_path.display());
					loaded.push(models);
					continue;
				}
				info!("Retraining {}: {} was built with other settings", language, binary_path.display());
			}
			corpora.push((language, read_corpus(&file)?));
		}

		let trained = Self::train(corpora, input)?;
		for models in &trained {
			models.save(Self::binary_path(&folder, models.language()))?;
		}

		loaded.extend(trained);
		loaded.sort_by_key(LanguageModels::language);
		Ok(loaded)
	}

	/// Cache file of a language inside `folder`: `<iso code>.bin`.
	fn binary_path(folder: &Path, language: Language) -> PathBuf {
		folder.join(language.iso_code()).with_extension("bin")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn order(n: usize) -> NgramOrder {
		NgramOrder::try_from(n).unwrap()
	}

	#[test]
	fn test_language_models_chain_orders() {
		let lines = ["these sentences are intended", "for testing purposes"];
		let models = LanguageModels::train(Language::English, &lines, order(3), &Alphabet::latin()).unwrap();

		assert_eq!(models.iter().count(), 3);
		let bigrams = models.get(order(2)).unwrap();
		let trigrams = models.get(order(3)).unwrap();
		assert_eq!(bigrams.order(), order(2));
		for (ngram, &count) in trigrams.absolute_frequencies() {
			let prefix = ngram.prefix().unwrap();
			let expected = count as f64 / bigrams.absolute_frequencies().get(&prefix).unwrap() as f64;
			assert!((trigrams.relative_frequencies().get(ngram).unwrap() - expected).abs() < 1e-9);
		}
		assert!(models.get(order(4)).is_none());
	}

	#[test]
	fn test_language_models_stop_on_empty_order() {
		let models = LanguageModels::train(Language::English, &["ab cd"], order(5), &Alphabet::latin()).unwrap();
		// No trigram in two-letter words
		assert_eq!(models.iter().count(), 3);
		assert!(models.get(order(3)).unwrap().absolute_frequencies().is_empty());
	}

	#[test]
	fn test_train_in_parallel_is_sorted() {
		let mut input = TrainingInput::new();
		input.set_max_order(2).unwrap();
		input.set_threads(2).unwrap();
		let corpora = vec![
			(Language::Russian, vec!["привет мир".to_owned()]),
			(Language::English, vec!["hello world".to_owned()]),
			(Language::German, vec!["hallo welt".to_owned()]),
		];

		let trained = Trainer::train(corpora, &input).unwrap();
		let languages: Vec<Language> = trained.iter().map(LanguageModels::language).collect();
		assert_eq!(languages, vec![Language::English, Language::German, Language::Russian]);
		assert_eq!(trained[2].get(order(1)).unwrap().absolute_frequencies().get_str("и"), Some(2));
	}

	#[test]
	fn test_train_directory_persists_models() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("en.txt"), "Hello World").unwrap();
		std::fs::write(dir.path().join("zz.txt"), "unknown").unwrap();

		let mut input = TrainingInput::new();
		input.set_max_order(2).unwrap();
		let trained = Trainer::train_directory(dir.path(), &input).unwrap();
		assert_eq!(trained.len(), 1);
		assert!(dir.path().join("en.bin").exists());

		let reloaded = Trainer::train_directory(dir.path(), &input).unwrap();
		let before = trained[0].get(order(2)).unwrap();
		let after = reloaded[0].get(order(2)).unwrap();
		assert_eq!(before.absolute_frequencies(), after.absolute_frequencies());
		assert_eq!(before.relative_frequencies(), after.relative_frequencies());
	}

	#[test]
	fn test_train_directory_rejects_files() {
		let dir = tempfile::tempdir().unwrap();
		let file = dir.path().join("en.txt");
		std::fs::write(&file, "hello").unwrap();
		assert!(Trainer::train_directory(&file, &TrainingInput::new()).is_err());
	}

	#[test]
	fn test_train_directory_uppercase_corpus_hits_cache() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("EN.txt"), "Hello World").unwrap();

		let mut input = TrainingInput::new();
		input.set_max_order(2).unwrap();
		let trained = Trainer::train_directory(dir.path(), &input).unwrap();
		assert_eq!(trained.len(), 1);
		assert!(dir.path().join("en.bin").exists());

		// A changed corpus is not read again while the cache is valid
		std::fs::write(dir.path().join("EN.txt"), "zzz").unwrap();
		let reloaded = Trainer::train_directory(dir.path(), &input).unwrap();
		let unigrams = reloaded[0].get(order(1)).unwrap();
		assert_eq!(unigrams.absolute_frequencies().get_str("l"), Some(3));
		assert_eq!(unigrams.absolute_frequencies().get_str("z"), None);
	}

	#[test]
	fn test_train_directory_one_corpus_per_language() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("EN.txt"), "Hello").unwrap();
		std::fs::write(dir.path().join("en.txt"), "World").unwrap();

		let mut input = TrainingInput::new();
		input.set_max_order(1).unwrap();
		let trained = Trainer::train_directory(dir.path(), &input).unwrap();
		assert_eq!(trained.len(), 1);
		assert_eq!(trained[0].language(), Language::English);
	}

	#[test]
	fn test_train_directory_retrains_on_other_settings() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("en.txt"), "Hello World").unwrap();

		let mut input = TrainingInput::new();
		input.set_max_order(2).unwrap();
		Trainer::train_directory(dir.path(), &input).unwrap();

		input.set_max_order(3).unwrap();
		let trained = Trainer::train_directory(dir.path(), &input).unwrap();
		assert_eq!(trained[0].max_order(), order(3));
		assert!(trained[0].get(order(3)).is_some());

		input.set_alphabet(Language::English, Alphabet::letters());
		let trained = Trainer::train_directory(dir.path(), &input).unwrap();
		assert!(trained[0].matches(&input));
		assert!(LanguageModels::load(dir.path().join("en.bin")).unwrap().matches(&input));
	}
}
