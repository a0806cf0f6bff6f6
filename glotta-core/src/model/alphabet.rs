use regex::Regex;

/// Character filter restricting n-gram extraction to one script.
///
/// An `Alphabet` is built from a regex character class body such as
/// `\p{L}&&\p{Latin}` (letters of the Latin script). The models only ask
/// two questions of it: is a single character admitted, and where are the
/// maximal runs of admitted characters in a text.
#[derive(Clone, Debug)]
pub struct Alphabet {
	class: String,
	single: Regex,
	runs: Regex,
}

impl Alphabet {
	/// Compiles an alphabet from a character class body (without brackets).
	///
	/// # Errors
	/// Returns an error if the class is not valid regex syntax.
	pub fn new(class: &str) -> Result<Self, String> {
		let single = Regex::new(&format!("^[{}]$", class)).map_err(|e| e.to_string())?;
		let runs = Regex::new(&format!("[{}]+", class)).map_err(|e| e.to_string())?;
		Ok(Self { class: class.to_owned(), single, runs })
	}

	/// Any Unicode letter.
	pub fn letters() -> Self {
		Self::script("L")
	}

	pub fn latin() -> Self {
		Self::script("Latin")
	}

	pub fn cyrillic() -> Self {
		Self::script("Cyrillic")
	}

	pub fn greek() -> Self {
		Self::script("Greek")
	}

	pub fn arabic() -> Self {
		Self::script("Arabic")
	}

	pub fn hebrew() -> Self {
		Self::script("Hebrew")
	}

	pub fn devanagari() -> Self {
		Self::script("Devanagari")
	}

	pub fn han() -> Self {
		Self::script("Han")
	}

	/// Letters belonging to one Unicode script (or any letter for `"L"`).
	fn script(name: &str) -> Self {
		let class = if name == "L" { r"\p{L}".to_owned() } else { format!(r"\p{{L}}&&\p{{{}}}", name) };
		// Should not panic, built from fixed Unicode property names
		Self::new(&class).unwrap()
	}

	/// Returns the character class this alphabet was built from.
	pub fn class(&self) -> &str {
		&self.class
	}

	/// Returns `true` if `c` belongs to the alphabet.
	pub fn admits(&self, c: char) -> bool {
		let mut buffer = [0u8; 4];
		self.single.is_match(c.encode_utf8(&mut buffer))
	}

	/// Returns `true` if every character of `text` belongs to the alphabet.
	///
	/// An empty text is not admitted.
	pub fn admits_all(&self, text: &str) -> bool {
		!text.is_empty() && text.chars().all(|c| self.admits(c))
	}

	/// Iterates over the maximal runs of admitted characters in `text`.
	///
	/// `"by the way, 23 words"` → `"by"`, `"the"`, `"way"`, `"words"`
	pub fn runs<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> {
		self.runs.find_iter(text).map(|m| m.as_str())
	}
}
