use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::StyleError;
use crate::style::registry::StyleRegistry;
use crate::style::table::StyleTable;

/// Marks stacked above the base character by `apply_combining_noise`.
pub const COMBINING_ABOVE: [char; 6] = ['\u{0300}', '\u{0301}', '\u{0302}', '\u{0303}', '\u{0308}', '\u{030A}'];

/// Marks attached below the base character by `apply_combining_noise`.
pub const COMBINING_BELOW: [char; 3] = ['\u{0323}', '\u{0324}', '\u{0325}'];

/// The Combining Diacritical Marks block, used by `sprinkle_marks`.
pub const COMBINING_BLOCK: std::ops::RangeInclusive<u32> = 0x0300..=0x036F;

const ABOVE_PROBABILITY: f64 = 0.25;
const BELOW_PROBABILITY: f64 = 0.15;
const SPRINKLE_PROBABILITY: f64 = 0.5;

/// Applies a style, resolved by name, to `text`.
///
/// # Errors
/// `StyleError::UnknownStyle` if `style_name` is not registered.
pub fn apply_style(registry: &StyleRegistry, text: &str, style_name: &str) -> Result<String, StyleError> {
	let table = registry.table(style_name)?;
	Ok(apply_table(table, text))
}

/// Substitutes every character that has an entry in `table`.
///
/// Characters without an entry are copied verbatim, so the output keeps
/// the input's logical character positions.
pub fn apply_table(table: &StyleTable, text: &str) -> String {
	let mut out = String::with_capacity(text.len() * 4);
	for c in text.chars() {
		match table.get(c) {
			Some(replacement) => out.push_str(replacement),
			None => out.push(c),
		}
	}
	out
}

/// Randomly decorates `text` with combining marks.
///
/// For each non-whitespace character, two independent draws are made:
/// - with probability `0.25 * intensity`, a mark from `COMBINING_ABOVE`
/// - with probability `0.15 * intensity`, a mark from `COMBINING_BELOW`
///
/// Probabilities saturate at 1. The output differs between calls; never
/// cache it.
pub fn apply_combining_noise<R: Rng>(rng: &mut R, text: &str, intensity: u32) -> String {
	let above = (ABOVE_PROBABILITY * f64::from(intensity)).min(1.0);
	let below = (BELOW_PROBABILITY * f64::from(intensity)).min(1.0);

	let mut out = String::with_capacity(text.len() * 2);
	for c in text.chars() {
		out.push(c);
		if c.is_whitespace() {
			continue;
		}
		if rng.random_bool(above) {
			if let Some(mark) = COMBINING_ABOVE.choose(rng) {
				out.push(*mark);
			}
		}
		if rng.random_bool(below) {
			if let Some(mark) = COMBINING_BELOW.choose(rng) {
				out.push(*mark);
			}
		}
	}
	out
}

/// Leet-speak substitution: a→4, e→3, i→1, o→0, s→5, t→7 (both cases).
pub fn leet_speak(text: &str) -> String {
	text.chars()
		.map(|c| match c {
			'a' | 'A' => '4',
			'e' | 'E' => '3',
			'i' | 'I' => '1',
			'o' | 'O' => '0',
			's' | 'S' => '5',
			't' | 'T' => '7',
			_ => c,
		})
		.collect()
}

/// Appends, with probability one half per character, a mark drawn
/// uniformly from the whole Combining Diacritical Marks block.
///
/// Used to pad a collection up to its target size.
pub fn sprinkle_marks<R: Rng>(rng: &mut R, text: &str) -> String {
	let mut out = String::with_capacity(text.len() * 2);
	for c in text.chars() {
		out.push(c);
		if rng.random_bool(SPRINKLE_PROBABILITY) {
			if let Some(mark) = char::from_u32(rng.random_range(COMBINING_BLOCK)) {
				out.push(mark);
			}
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::style::id::StyleId;

	fn is_mark(c: char) -> bool {
		COMBINING_BLOCK.contains(&(c as u32))
	}

	#[test]
	fn test_apply_style_bold() {
		let registry = StyleRegistry::build();
		assert_eq!(apply_style(&registry, "Hi 42!", "bold").unwrap(), "𝐇𝐢 𝟒𝟐!");
	}

	#[test]
	fn test_apply_style_unknown_name() {
		let registry = StyleRegistry::build();
		assert_eq!(
			apply_style(&registry, "Hello", "not_a_style"),
			Err(StyleError::UnknownStyle("not_a_style".to_owned()))
		);
	}

	#[test]
	fn test_apply_table_passes_unmapped_characters_through() {
		let registry = StyleRegistry::build();
		let text = "Wow, ёж & 9 ½!";
		for table in registry.iter() {
			let unmapped: String = text.chars().filter(|c| !table.contains(*c)).collect();
			assert_eq!(apply_table(table, &unmapped), unmapped, "{}", table.name());
		}

		let bold = registry.get(StyleId::Bold);
		assert_eq!(apply_table(bold, text), "𝐖𝐨𝐰, ёж & 𝟗 ½!");
	}

	#[test]
	fn test_apply_table_is_deterministic() {
		let registry = StyleRegistry::build();
		let table = registry.get(StyleId::Cyrillic3);
		assert_eq!(apply_table(table, "Привет"), apply_table(table, "Привет"));
	}

	#[test]
	fn test_leet_speak() {
		assert_eq!(leet_speak("Hello"), "H3ll0");
		assert_eq!(leet_speak("SATIATE"), "5471473");
		assert_eq!(leet_speak("xyz Привет"), "xyz Привет");
	}

	#[test]
	fn test_noise_keeps_base_characters() {
		let mut rng = StdRng::seed_from_u64(7);
		let noisy = apply_combining_noise(&mut rng, "a b\tc", 3);
		let base: String = noisy.chars().filter(|c| !is_mark(*c)).collect();
		assert_eq!(base, "a b\tc");
	}

	#[test]
	fn test_noise_skips_whitespace() {
		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(apply_combining_noise(&mut rng, "  \n ", 3), "  \n ");
	}

	#[test]
	fn test_noise_saturated_intensity_marks_every_character() {
		// 0.25 * 4 = 1: every character gets at least one mark above
		let mut rng = StdRng::seed_from_u64(3);
		let noisy = apply_combining_noise(&mut rng, "abc", 4);
		let chars: Vec<char> = noisy.chars().collect();
		for (i, c) in chars.iter().enumerate() {
			if !is_mark(*c) {
				assert!(COMBINING_ABOVE.contains(&chars[i + 1]));
			}
		}
	}

	#[test]
	fn test_noise_is_not_idempotent() {
		let mut rng = StdRng::seed_from_u64(11);
		let text = "the quick brown fox jumps over the lazy dog";
		let first = apply_combining_noise(&mut rng, text, 2);
		let second = apply_combining_noise(&mut rng, text, 2);
		assert_ne!(first, second);
	}

	#[test]
	fn test_sprinkle_marks_uses_combining_block() {
		let mut rng = StdRng::seed_from_u64(5);
		let text = "padding";
		let out = sprinkle_marks(&mut rng, text);
		let base: String = out.chars().filter(|c| !is_mark(*c)).collect();
		assert_eq!(base, text);
		assert!(out.chars().count() <= text.chars().count() * 2);
	}
}
