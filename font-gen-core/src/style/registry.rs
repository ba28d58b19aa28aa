use std::sync::{Arc, OnceLock};

use super::alphabet::{self, OffsetAlphabet};
use super::cyrillic;
use super::id::StyleId;
use super::table::StyleTable;
use crate::error::StyleError;

const DIAERESIS: char = '\u{0308}';
const LOW_LINE: char = '\u{0332}';
const LONG_STROKE: char = '\u{0336}';

static SHARED: OnceLock<Arc<StyleRegistry>> = OnceLock::new();

/// Holds every style table, built once and never modified.
///
/// # Responsibilities
/// - Build all tables of `StyleId::ALL`
/// - Resolve tables by id (infallible) or by name (`StyleError` when unknown)
/// - Expose the canonical style order
///
/// # Invariants
/// - `tables[i].id() == StyleId::ALL[i]` for every `i`
#[derive(Debug, Clone)]
pub struct StyleRegistry {
	tables: Vec<StyleTable>,
}

impl StyleRegistry {
	/// Builds every style table.
	///
	/// Prefer `shared()` unless an independent instance is needed: the
	/// tables are pure data and identical from one build to the next.
	pub fn build() -> Self {
		let tables = StyleId::ALL.iter().map(|id| Self::build_table(*id)).collect();
		Self { tables }
	}

	/// Returns the process-wide registry, building it on first use.
	pub fn shared() -> Arc<StyleRegistry> {
		SHARED.get_or_init(|| Arc::new(StyleRegistry::build())).clone()
	}

	fn build_table(id: StyleId) -> StyleTable {
		match id {
			StyleId::Bold => Self::offset_table(id, &alphabet::BOLD),
			StyleId::BoldFraktur => Self::offset_table(id, &alphabet::BOLD_FRAKTUR),
			StyleId::BoldItalic => Self::offset_table(id, &alphabet::BOLD_ITALIC),
			StyleId::BoldScript => Self::offset_table(id, &alphabet::BOLD_SCRIPT),
			StyleId::Bubble => Self::offset_table(id, &alphabet::BUBBLE),
			StyleId::Circled => Self::offset_table(id, &alphabet::CIRCLED),
			StyleId::DoubleStruck => Self::offset_table(id, &alphabet::DOUBLE_STRUCK),
			StyleId::Fraktur => Self::offset_table(id, &alphabet::FRAKTUR),
			StyleId::Fullwidth => Self::offset_table(id, &alphabet::FULLWIDTH),
			StyleId::Italic => Self::offset_table(id, &alphabet::ITALIC),
			StyleId::Monospace => Self::offset_table(id, &alphabet::MONOSPACE),
			StyleId::Regional => Self::offset_table(id, &alphabet::REGIONAL),
			StyleId::Sans => Self::offset_table(id, &alphabet::SANS),
			StyleId::SansBold => Self::offset_table(id, &alphabet::SANS_BOLD),
			StyleId::SansBoldItalic => Self::offset_table(id, &alphabet::SANS_BOLD_ITALIC),
			StyleId::SansItalic => Self::offset_table(id, &alphabet::SANS_ITALIC),
			StyleId::Script => Self::offset_table(id, &alphabet::SCRIPT),
			StyleId::Squared => Self::offset_table(id, &alphabet::SQUARED),
			StyleId::SmallCaps => {
				let mut table = StyleTable::new(id);
				for (from, to) in alphabet::SMALL_CAPS {
					table.insert(from, to);
				}
				table
			}
			StyleId::Rock => Self::mark_table(id, DIAERESIS),
			StyleId::Underline => Self::mark_table(id, LOW_LINE),
			StyleId::Strike => Self::mark_table(id, LONG_STROKE),
			StyleId::Cyrillic1
			| StyleId::Cyrillic2
			| StyleId::Cyrillic3
			| StyleId::Cyrillic4
			| StyleId::Cyrillic5
			| StyleId::Cyrillic6
			| StyleId::Cyrillic7
			| StyleId::Cyrillic8 => cyrillic::build_table(id, id.cyrillic_index().unwrap_or_default()),
		}
	}

	/// Maps A–Z, a–z and 0–9 through an offset alphabet, skipping characters
	/// the alphabet does not define.
	fn offset_table(id: StyleId, alphabet: &OffsetAlphabet) -> StyleTable {
		let mut table = StyleTable::new(id);
		for c in ('A'..='Z').chain('a'..='z').chain('0'..='9') {
			if let Some(glyph) = alphabet.glyph(c) {
				table.insert(c, glyph);
			}
		}
		table
	}

	/// Appends one combining mark to every Latin letter.
	fn mark_table(id: StyleId, mark: char) -> StyleTable {
		let mut table = StyleTable::new(id);
		for c in ('A'..='Z').chain('a'..='z') {
			table.insert(c, format!("{c}{mark}"));
		}
		table
	}

	pub fn get(&self, id: StyleId) -> &StyleTable {
		&self.tables[id.index()]
	}

	/// Resolves a table by its name.
	///
	/// # Errors
	/// `StyleError::UnknownStyle` if no style has this name.
	pub fn table(&self, name: &str) -> Result<&StyleTable, StyleError> {
		let id: StyleId = name.parse()?;
		Ok(self.get(id))
	}

	/// Style names in canonical order.
	pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.tables.iter().map(StyleTable::name)
	}

	/// Tables in canonical order.
	pub fn iter(&self) -> impl Iterator<Item = &StyleTable> {
		self.tables.iter()
	}

	pub fn len(&self) -> usize {
		self.tables.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tables.is_empty()
	}
}

impl Default for StyleRegistry {
	fn default() -> Self {
		Self::build()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tables_follow_canonical_order() {
		let registry = StyleRegistry::build();
		assert_eq!(registry.len(), StyleId::ALL.len());
		for (table, id) in registry.iter().zip(StyleId::ALL) {
			assert_eq!(table.id(), id);
			assert!(!table.is_empty(), "{id} is empty");
		}
	}

	#[test]
	fn test_keys_are_latin_cyrillic_or_digits() {
		let registry = StyleRegistry::build();
		for table in registry.iter() {
			for key in table.keys() {
				assert!(
					key.is_ascii_alphanumeric() || cyrillic::is_cyrillic_letter(key),
					"{} has key {key:?}",
					table.name()
				);
			}
		}
	}

	#[test]
	fn test_lookup_by_name() {
		let registry = StyleRegistry::build();
		assert_eq!(registry.table("fraktur").map(StyleTable::id), Ok(StyleId::Fraktur));
		assert_eq!(
			registry.table("comic_sans").map(StyleTable::id),
			Err(StyleError::UnknownStyle("comic_sans".to_owned()))
		);
	}

	#[test]
	fn test_missing_character_is_none() {
		let registry = StyleRegistry::build();
		assert_eq!(registry.get(StyleId::Squared).get('!'), None);
		assert_eq!(registry.get(StyleId::SmallCaps).get('x'), None);
		assert_eq!(registry.get(StyleId::Bold).get('ж'), None);
	}

	#[test]
	fn test_decorations() {
		let registry = StyleRegistry::build();
		assert_eq!(registry.get(StyleId::Rock).get('o'), Some("o\u{0308}"));
		assert_eq!(registry.get(StyleId::Underline).get('Q'), Some("Q\u{0332}"));
		assert_eq!(registry.get(StyleId::Strike).get('1'), None);
	}

	#[test]
	fn test_shared_is_single_instance() {
		assert!(Arc::ptr_eq(&StyleRegistry::shared(), &StyleRegistry::shared()));
	}
}
