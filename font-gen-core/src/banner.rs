use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use figlet_rs::FIGfont;
use tracing::{debug, warn};

use crate::io;

/// Name under which the font bundled with `figlet-rs` is registered.
pub const STANDARD_FONT: &str = "standard";

/// Renders text as a multi-line ASCII-art banner.
///
/// Implementations are best effort: `None` means "no rendering for this
/// font" (unknown font, unsupported characters, backend failure) and the
/// caller moves on to the next font. Failures are never retried.
pub trait BannerBackend: Send + Sync {
	fn render_banner(&self, text: &str, font: &str) -> Option<String>;
}

/// FIGlet banner backend.
///
/// Holds the built-in `standard` font plus every `.flf` font found in a
/// directory, keyed by file stem (`fonts/slant.flf` → `slant`).
pub struct FigletBanner {
	fonts: BTreeMap<String, FIGfont>,
}

impl FigletBanner {
	/// Creates a backend with only the built-in `standard` font.
	pub fn standard() -> Self {
		let mut fonts = BTreeMap::new();
		match FIGfont::standard() {
			Ok(font) => {
				fonts.insert(STANDARD_FONT.to_owned(), font);
			}
			Err(e) => warn!("Failed to load built-in FIGlet font: {e}"),
		}
		Self { fonts }
	}

	/// Creates a backend with the built-in font and all `.flf` files of `dir`.
	///
	/// # Behavior
	/// - A missing or unreadable directory leaves only the built-in font.
	/// - A font that fails to parse is skipped with a warning.
	/// - A file named `standard.flf` replaces the built-in font.
	pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
		let mut banner = Self::standard();
		let folder = io::normalize_folder(dir.as_ref());

		let files = match io::list_files(&folder, "flf") {
			Ok(files) => files,
			Err(e) => {
				debug!("No FIGlet fonts loaded from {}: {e}", folder.display());
				return banner;
			}
		};

		for path in files {
			let (Ok(name), Some(path_str)) = (io::get_filename(&path), path.to_str()) else {
				warn!("Skipping FIGlet font with unusable path: {}", path.display());
				continue;
			};
			match FIGfont::from_file(path_str) {
				Ok(font) => {
					banner.fonts.insert(name, font);
				}
				Err(e) => warn!("Failed to load FIGlet font {}: {e}", path.display()),
			}
		}

		debug!("Loaded {} FIGlet font(s)", banner.fonts.len());
		banner
	}

	/// Names of the loaded fonts, sorted.
	pub fn font_names(&self) -> Vec<&str> {
		self.fonts.keys().map(String::as_str).collect()
	}
}

impl BannerBackend for FigletBanner {
	fn render_banner(&self, text: &str, font: &str) -> Option<String> {
		let figure = self.fonts.get(font)?.convert(text)?;
		let rendered = figure.to_string();
		if rendered.trim().is_empty() {
			None
		} else {
			Some(rendered)
		}
	}
}

impl fmt::Debug for FigletBanner {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FigletBanner").field("fonts", &self.font_names()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_standard_font_renders_multiline() {
		let banner = FigletBanner::standard();
		let art = banner.render_banner("Hi", STANDARD_FONT).unwrap();
		assert!(art.lines().count() > 1);
	}

	#[test]
	fn test_unknown_font_is_none() {
		let banner = FigletBanner::standard();
		assert_eq!(banner.render_banner("Hi", "no-such-font"), None);
	}

	#[test]
	fn test_missing_dir_keeps_standard() {
		let banner = FigletBanner::from_dir("./no-fonts-here");
		assert_eq!(banner.font_names(), vec![STANDARD_FONT]);
	}
}
