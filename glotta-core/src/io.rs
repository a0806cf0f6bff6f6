use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use crate::model::tokenizer::lines_of_text;

/// Reads a corpus file and returns its lines, lowercased.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub(crate) fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(lines_of_text(&contents))
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub(crate) fn normalize_folder(input: &Path) -> PathBuf {
	if input == Path::new(".") || input == Path::new("./") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	}
}

/// Lists all files with a given extension in a directory, sorted by name.
///
/// Returns full paths.
pub(crate) fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<PathBuf>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			files.push(path);
		}
	}
	files.sort();

	Ok(files)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_read_corpus_and_list_files() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("en.txt"), "Hello World\nSecond LINE").unwrap();
		fs::write(dir.path().join("notes.md"), "ignored").unwrap();

		let files = list_files(dir.path(), "txt").unwrap();
		assert_eq!(files, vec![dir.path().join("en.txt")]);
		assert_eq!(read_corpus(&files[0]).unwrap(), vec!["hello world", "second line"]);
	}
}
