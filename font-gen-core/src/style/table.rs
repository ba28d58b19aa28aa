use std::collections::HashMap;

use super::id::StyleId;

/// A fixed character substitution defining one "font".
///
/// Maps a single source character to its replacement. A replacement may
/// span several code points (base letter followed by a combining mark).
///
/// # Invariants
/// - Keys are Latin letters, Cyrillic letters or ASCII digits
/// - The table is never modified once the registry has built it
#[derive(Debug, Clone)]
pub struct StyleTable {
	id: StyleId,
	substitutions: HashMap<char, String>,
}

impl StyleTable {
	pub(crate) fn new(id: StyleId) -> Self {
		Self {
			id,
			substitutions: HashMap::new(),
		}
	}

	/// Records a substitution. Later insertions for the same key win.
	pub(crate) fn insert<S: Into<String>>(&mut self, from: char, to: S) {
		self.substitutions.insert(from, to.into());
	}

	pub fn id(&self) -> StyleId {
		self.id
	}

	pub fn name(&self) -> &'static str {
		self.id.name()
	}

	/// Returns the replacement for `c`, or `None` when the character
	/// passes through unchanged.
	pub fn get(&self, c: char) -> Option<&str> {
		self.substitutions.get(&c).map(String::as_str)
	}

	pub fn contains(&self, c: char) -> bool {
		self.substitutions.contains_key(&c)
	}

	/// Iterates over the source characters of this table.
	pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
		self.substitutions.keys().copied()
	}

	pub fn len(&self) -> usize {
		self.substitutions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.substitutions.is_empty()
	}
}
