use super::alphabet::{
	OffsetAlphabet, BOLD_FRAKTUR, BOLD_ITALIC, BOLD_SCRIPT, DOUBLE_STRUCK, FRAKTUR, MONOSPACE, SANS_BOLD,
	SANS_ITALIC,
};
use super::id::StyleId;
use super::table::StyleTable;

const LOWER: [char; 33] = [
	'а', 'б', 'в', 'г', 'д', 'е', 'ё', 'ж', 'з', 'и', 'й', 'к', 'л', 'м', 'н', 'о', 'п', 'р', 'с', 'т', 'у', 'ф',
	'х', 'ц', 'ч', 'ш', 'щ', 'ъ', 'ы', 'ь', 'э', 'ю', 'я',
];

const UPPER: [char; 33] = [
	'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р', 'С', 'Т', 'У', 'Ф',
	'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

/// Combining marks rotated over letters and tables.
const MARKS: [char; 8] = [
	'\u{0300}', // grave
	'\u{0302}', // circumflex
	'\u{0303}', // tilde
	'\u{0304}', // macron
	'\u{0305}', // overline
	'\u{0308}', // diaeresis
	'\u{030B}', // double acute
	'\u{030C}', // caron
];

/// Cyrillic letters drawn like a Latin letter, styled through a math alphabet.
const HOMOGLYPHS: [(char, char); 6] = [('а', 'a'), ('е', 'e'), ('о', 'o'), ('р', 'p'), ('с', 'c'), ('х', 'x')];

/// Base letter + mark pairs that have a precomposed code point.
/// (lowercase base, mark, lowercase composed, uppercase composed)
const PRECOMPOSED: [(char, char, char, char); 11] = [
	('ж', '\u{0308}', 'ӝ', 'Ӝ'),
	('з', '\u{0308}', 'ӟ', 'Ӟ'),
	('и', '\u{0300}', 'ѝ', 'Ѝ'),
	('и', '\u{0304}', 'ӣ', 'Ӣ'),
	('и', '\u{0308}', 'ӥ', 'Ӥ'),
	('у', '\u{0304}', 'ӯ', 'Ӯ'),
	('у', '\u{0308}', 'ӱ', 'Ӱ'),
	('у', '\u{030B}', 'ӳ', 'Ӳ'),
	('ч', '\u{0308}', 'ӵ', 'Ӵ'),
	('ы', '\u{0308}', 'ӹ', 'Ӹ'),
	('э', '\u{0308}', 'ӭ', 'Ӭ'),
];

/// Math alphabet lending its glyphs to the homoglyphs, one per table.
static FAMILIES: [&OffsetAlphabet; 8] = [
	&BOLD_ITALIC,
	&BOLD_SCRIPT,
	&FRAKTUR,
	&DOUBLE_STRUCK,
	&BOLD_FRAKTUR,
	&SANS_BOLD,
	&SANS_ITALIC,
	&MONOSPACE,
];

/// Returns true for letters of the Cyrillic block (U+0400..U+04FF).
pub(crate) fn is_cyrillic_letter(c: char) -> bool {
	('\u{0400}'..='\u{04FF}').contains(&c) && c.is_alphabetic()
}

/// Builds the Cyrillic table number `index` (zero-based).
///
/// Every Russian letter is mapped in both cases:
/// - homoglyphs of Latin letters take the glyph of this table's math alphabet
/// - other letters get a combining mark that rotates with letter position
///   and table index, precomposed when Unicode has the pair
///
/// Because the mark depends on `index`, two tables never agree on a
/// non-homoglyph letter.
pub(crate) fn build_table(id: StyleId, index: usize) -> StyleTable {
	let mut table = StyleTable::new(id);
	let family = FAMILIES[index % FAMILIES.len()];

	for (position, (&lower, &upper)) in LOWER.iter().zip(UPPER.iter()).enumerate() {
		if let Some(&(_, latin)) = HOMOGLYPHS.iter().find(|(c, _)| *c == lower) {
			if let (Some(small), Some(capital)) = (family.glyph(latin), family.glyph(latin.to_ascii_uppercase())) {
				table.insert(lower, small);
				table.insert(upper, capital);
				continue;
			}
		}

		let mark = MARKS[(index + position) % MARKS.len()];
		match PRECOMPOSED.iter().find(|(base, m, _, _)| *base == lower && *m == mark) {
			Some(&(_, _, small, capital)) => {
				table.insert(lower, small);
				table.insert(upper, capital);
			}
			None => {
				table.insert(lower, format!("{lower}{mark}"));
				table.insert(upper, format!("{upper}{mark}"));
			}
		}
	}

	table
}
