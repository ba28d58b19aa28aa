use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;
use tracing::debug;

use super::collection::VariantCollection;
use super::transform::{apply_combining_noise, apply_table, leet_speak, sprinkle_marks};
use crate::banner::BannerBackend;
use crate::style::id::StyleId;
use crate::style::registry::StyleRegistry;

/// Number of variants produced for one user-facing request.
pub const DEFAULT_VARIANT_COUNT: usize = 50;

/// Banner fonts tried, in order, when a banner backend is configured.
pub const BANNER_FONTS: [&str; 14] = [
	"standard",
	"slant",
	"small",
	"big",
	"block",
	"bubble",
	"digital",
	"mini",
	"rounded",
	"banner3-D",
	"letters",
	"cybermedium",
	"cyberlarge",
	"doom",
];

/// Combining-noise intensities, one variant each.
const NOISE_INTENSITIES: [u32; 3] = [1, 2, 3];

/// Draws per padding slot before falling back to a numbered suffix.
const PADDING_ATTEMPTS: usize = 16;

/// Ordered set used while collecting variants.
///
/// Keeps first-seen order so that the table renderings land on page one.
struct Accumulator {
	items: Vec<String>,
	seen: HashSet<String>,
}

impl Accumulator {
	fn new() -> Self {
		Self {
			items: Vec::new(),
			seen: HashSet::new(),
		}
	}

	/// Inserts `variant` unless already present. Returns true if inserted.
	fn push(&mut self, variant: String) -> bool {
		if self.seen.contains(&variant) {
			return false;
		}
		self.seen.insert(variant.clone());
		self.items.push(variant);
		true
	}

	fn contains(&self, variant: &str) -> bool {
		self.seen.contains(variant)
	}

	fn len(&self) -> usize {
		self.items.len()
	}
}

/// Turns one input text into a size-exact `VariantCollection`.
///
/// # Responsibilities
/// - Order styles by script (Cyrillic styles first for Cyrillic text)
/// - Collect every distinct table rendering, combining-noise variants,
///   leet-speak, banner renderings and the raw text
/// - Pad with randomly marked copies, or truncate, to the target size
///
/// The generator is stateless apart from its dependencies: it is cheap to
/// clone and safe to share between threads.
#[derive(Clone)]
pub struct VariantGenerator {
	registry: Arc<StyleRegistry>,
	banner: Option<Arc<dyn BannerBackend>>,
}

impl VariantGenerator {
	/// Creates a generator without banner backend.
	pub fn new(registry: Arc<StyleRegistry>) -> Self {
		Self { registry, banner: None }
	}

	/// Attaches a banner backend.
	pub fn with_banner(mut self, banner: Arc<dyn BannerBackend>) -> Self {
		self.banner = Some(banner);
		self
	}

	pub fn registry(&self) -> &StyleRegistry {
		&self.registry
	}

	pub fn has_banner(&self) -> bool {
		self.banner.is_some()
	}

	/// Returns the order in which styles are applied to `text`.
	///
	/// If any character is a Cyrillic letter, the Cyrillic styles come first
	/// and the others follow; otherwise every style in canonical order.
	/// Both orders are stable across runs.
	pub fn style_order(text: &str) -> Vec<StyleId> {
		let has_cyrillic = text.chars().any(crate::style::is_cyrillic_letter);
		if !has_cyrillic {
			return StyleId::ALL.to_vec();
		}

		let (mut order, others): (Vec<StyleId>, Vec<StyleId>) =
			StyleId::ALL.iter().partition(|id| id.is_cyrillic());
		order.extend(others);
		order
	}

	/// Generates `target` variants of `text` using the thread-local RNG.
	///
	/// See `generate_with`.
	pub fn generate(&self, text: &str, target: usize) -> Option<VariantCollection> {
		self.generate_with(&mut rand::rng(), text, target)
	}

	/// Generates `target` variants of `text`.
	///
	/// # Returns
	/// - `None` if `text` is empty or `target` is 0: nothing to show.
	/// - Otherwise a collection of exactly `target` distinct strings that
	///   always contains `text` itself when `target` leaves room for it.
	///
	/// # Behavior
	/// 1. Table renderings in `style_order`, skipping no-op ones
	/// 2. Combining-noise variants at intensities 1, 2 and 3
	/// 3. Leet-speak
	/// 4. Banner renderings for each of `BANNER_FONTS`, if a backend is set
	/// 5. The raw text
	/// 6. Padding with `sprinkle_marks` up to `target`
	/// 7. Truncation to `target`
	///
	/// Duplicates are dropped as they are collected. When `target` is smaller
	/// than the natural count, the raw text is moved into the kept range.
	pub fn generate_with<R: Rng>(&self, rng: &mut R, text: &str, target: usize) -> Option<VariantCollection> {
		if text.is_empty() || target == 0 {
			return None;
		}

		let mut acc = Accumulator::new();

		for id in Self::style_order(text) {
			let styled = apply_table(self.registry.get(id), text);
			if styled != text {
				acc.push(styled);
			}
		}
		let styled_count = acc.len();

		for intensity in NOISE_INTENSITIES {
			acc.push(apply_combining_noise(rng, text, intensity));
		}
		acc.push(leet_speak(text));

		let mut banner_count = 0;
		if let Some(banner) = &self.banner {
			for font in BANNER_FONTS {
				if let Some(art) = banner.render_banner(text, font) {
					if !art.trim().is_empty() && acc.push(art) {
						banner_count += 1;
					}
				}
			}
		}

		acc.push(text.to_owned());
		let natural_count = acc.len();

		let mut suffix = 0usize;
		while acc.len() < target {
			let padded = Self::pad_variant(rng, text, &acc, &mut suffix);
			acc.push(padded);
		}

		let mut items = acc.items;
		if items.len() > target {
			if let Some(raw) = items.iter().position(|item| item == text) {
				if raw >= target {
					items.swap(raw, target - 1);
				}
			}
			items.truncate(target);
		}

		debug!(
			styled = styled_count,
			banners = banner_count,
			natural = natural_count,
			target,
			"Generated variants"
		);

		Some(VariantCollection::new(text, items))
	}

	/// Produces one padding variant not yet present in `acc`.
	///
	/// Draws `sprinkle_marks` up to `PADDING_ATTEMPTS` times. Short inputs can
	/// exhaust the distinct markings, so the fallback appends an increasing
	/// number instead, which always terminates.
	fn pad_variant<R: Rng>(rng: &mut R, text: &str, acc: &Accumulator, suffix: &mut usize) -> String {
		for _ in 0..PADDING_ATTEMPTS {
			let candidate = sprinkle_marks(rng, text);
			if !acc.contains(&candidate) {
				return candidate;
			}
		}

		loop {
			*suffix += 1;
			let candidate = format!("{text} {suffix}");
			if !acc.contains(&candidate) {
				return candidate;
			}
		}
	}
}

impl Default for VariantGenerator {
	fn default() -> Self {
		Self::new(StyleRegistry::shared())
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	struct FakeBanner;

	impl BannerBackend for FakeBanner {
		fn render_banner(&self, text: &str, font: &str) -> Option<String> {
			match font {
				"standard" => Some(format!("#{text}#\n#{text}#\n")),
				"slant" => Some(format!("/{text}/\n/{text}/\n")),
				"small" => Some("   \n  ".to_owned()),
				_ => None,
			}
		}
	}

	fn generator() -> VariantGenerator {
		VariantGenerator::new(StyleRegistry::shared())
	}

	fn assert_distinct(collection: &VariantCollection) {
		let unique: HashSet<&str> = collection.iter().collect();
		assert_eq!(unique.len(), collection.len());
	}

	#[test]
	fn test_hello_scenario() {
		let mut rng = StdRng::seed_from_u64(42);
		let collection = generator().generate_with(&mut rng, "Hello", 50).unwrap();

		assert_eq!(collection.len(), 50);
		assert!(collection.contains("Hello"));
		assert!(collection.contains("H3ll0"));
		assert!(collection.contains("𝐇𝐞𝐥𝐥𝐨"));
		assert_eq!(collection.source(), "Hello");
		assert_distinct(&collection);
	}

	#[test]
	fn test_first_page_is_table_renderings() {
		let mut rng = StdRng::seed_from_u64(1);
		let collection = generator().generate_with(&mut rng, "Hello", 50).unwrap();
		assert_eq!(collection.get(0), Some("𝐇𝐞𝐥𝐥𝐨"));
	}

	#[test]
	fn test_cyrillic_styles_first() {
		let order = VariantGenerator::style_order("Привет");
		assert_eq!(&order[..8], &StyleId::CYRILLIC);
		assert_eq!(order.len(), StyleId::ALL.len());
		assert!(order[8..].iter().all(|id| !id.is_cyrillic()));

		let registry = StyleRegistry::shared();
		let mut rng = StdRng::seed_from_u64(9);
		let collection = generator().generate_with(&mut rng, "Привет", 50).unwrap();
		let first_cyrillic = apply_table(registry.get(StyleId::Cyrillic1), "Привет");
		assert_eq!(collection.get(0), Some(first_cyrillic.as_str()));
	}

	#[test]
	fn test_latin_text_uses_canonical_order() {
		assert_eq!(VariantGenerator::style_order("Hello"), StyleId::ALL.to_vec());
	}

	#[test]
	fn test_single_char_twice() {
		let first = generator().generate("x", 50).unwrap();
		let second = generator().generate("x", 50).unwrap();
		for collection in [&first, &second] {
			assert_eq!(collection.len(), 50);
			assert!(collection.contains("x"));
			assert_distinct(collection);
		}
	}

	#[test]
	fn test_no_letters_still_reaches_target() {
		let mut rng = StdRng::seed_from_u64(3);
		for text in ["   ", "!?", "№ ½"] {
			let collection = generator().generate_with(&mut rng, text, 50).unwrap();
			assert_eq!(collection.len(), 50, "{text:?}");
			assert!(collection.contains(text));
			assert_distinct(&collection);
		}
	}

	#[test]
	fn test_empty_text_is_nothing_to_show() {
		assert_eq!(generator().generate("", 50), None);
		assert_eq!(generator().generate("abc", 0), None);
	}

	#[test]
	fn test_truncates_and_keeps_raw_text() {
		let mut rng = StdRng::seed_from_u64(4);
		let collection = generator().generate_with(&mut rng, "Hello", 5).unwrap();
		assert_eq!(collection.len(), 5);
		assert!(collection.contains("Hello"));
	}

	#[test]
	fn test_banner_renderings_included() {
		let generator = generator().with_banner(Arc::new(FakeBanner));
		assert!(generator.has_banner());
		let mut rng = StdRng::seed_from_u64(5);
		let collection = generator.generate_with(&mut rng, "Hey", 50).unwrap();

		assert_eq!(collection.len(), 50);
		assert!(collection.contains("#Hey#\n#Hey#\n"));
		assert!(collection.contains("/Hey/\n/Hey/\n"));
		assert!(!collection.contains("   \n  "));
	}

	#[test]
	fn test_padding_terminates_for_exhausted_marks() {
		// 112 marks + the bare character: far fewer than 500 distinct paddings
		let mut rng = StdRng::seed_from_u64(6);
		let collection = generator().generate_with(&mut rng, "-", 500).unwrap();
		assert_eq!(collection.len(), 500);
		assert_distinct(&collection);
		assert!(collection.iter().any(|item| item.starts_with("- ")));
	}
}
