use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;

/// Identifier of a registered style.
///
/// The set is closed: every table the registry builds has exactly one
/// variant here, and names resolve through `FromStr`.
///
/// # Invariants
/// - Variants are declared in alphabetical order of their names, so the
///   discriminant is also the position in `StyleId::ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleId {
	Bold,
	BoldFraktur,
	BoldItalic,
	BoldScript,
	Bubble,
	Circled,
	Cyrillic1,
	Cyrillic2,
	Cyrillic3,
	Cyrillic4,
	Cyrillic5,
	Cyrillic6,
	Cyrillic7,
	Cyrillic8,
	DoubleStruck,
	Fraktur,
	Fullwidth,
	Italic,
	Monospace,
	Regional,
	Rock,
	Sans,
	SansBold,
	SansBoldItalic,
	SansItalic,
	Script,
	SmallCaps,
	Squared,
	Strike,
	Underline,
}

impl StyleId {
	/// Every style in canonical order (alphabetical by name).
	pub const ALL: [StyleId; 30] = [
		StyleId::Bold,
		StyleId::BoldFraktur,
		StyleId::BoldItalic,
		StyleId::BoldScript,
		StyleId::Bubble,
		StyleId::Circled,
		StyleId::Cyrillic1,
		StyleId::Cyrillic2,
		StyleId::Cyrillic3,
		StyleId::Cyrillic4,
		StyleId::Cyrillic5,
		StyleId::Cyrillic6,
		StyleId::Cyrillic7,
		StyleId::Cyrillic8,
		StyleId::DoubleStruck,
		StyleId::Fraktur,
		StyleId::Fullwidth,
		StyleId::Italic,
		StyleId::Monospace,
		StyleId::Regional,
		StyleId::Rock,
		StyleId::Sans,
		StyleId::SansBold,
		StyleId::SansBoldItalic,
		StyleId::SansItalic,
		StyleId::Script,
		StyleId::SmallCaps,
		StyleId::Squared,
		StyleId::Strike,
		StyleId::Underline,
	];

	/// Cyrillic-specific styles, in table order.
	pub const CYRILLIC: [StyleId; 8] = [
		StyleId::Cyrillic1,
		StyleId::Cyrillic2,
		StyleId::Cyrillic3,
		StyleId::Cyrillic4,
		StyleId::Cyrillic5,
		StyleId::Cyrillic6,
		StyleId::Cyrillic7,
		StyleId::Cyrillic8,
	];

	/// Stable snake_case name used by callers to select the style.
	pub fn name(self) -> &'static str {
		match self {
			StyleId::Bold => "bold",
			StyleId::BoldFraktur => "bold_fraktur",
			StyleId::BoldItalic => "bold_italic",
			StyleId::BoldScript => "bold_script",
			StyleId::Bubble => "bubble",
			StyleId::Circled => "circled",
			StyleId::Cyrillic1 => "cyrillic_1",
			StyleId::Cyrillic2 => "cyrillic_2",
			StyleId::Cyrillic3 => "cyrillic_3",
			StyleId::Cyrillic4 => "cyrillic_4",
			StyleId::Cyrillic5 => "cyrillic_5",
			StyleId::Cyrillic6 => "cyrillic_6",
			StyleId::Cyrillic7 => "cyrillic_7",
			StyleId::Cyrillic8 => "cyrillic_8",
			StyleId::DoubleStruck => "double_struck",
			StyleId::Fraktur => "fraktur",
			StyleId::Fullwidth => "fullwidth",
			StyleId::Italic => "italic",
			StyleId::Monospace => "monospace",
			StyleId::Regional => "regional",
			StyleId::Rock => "rock",
			StyleId::Sans => "sans",
			StyleId::SansBold => "sans_bold",
			StyleId::SansBoldItalic => "sans_bold_italic",
			StyleId::SansItalic => "sans_italic",
			StyleId::Script => "script",
			StyleId::SmallCaps => "small_caps",
			StyleId::Squared => "squared",
			StyleId::Strike => "strike",
			StyleId::Underline => "underline",
		}
	}

	/// Position of the style in `StyleId::ALL`.
	pub fn index(self) -> usize {
		self as usize
	}

	/// Returns the zero-based Cyrillic table number, if this is a Cyrillic style.
	pub fn cyrillic_index(self) -> Option<usize> {
		StyleId::CYRILLIC.iter().position(|id| *id == self)
	}

	pub fn is_cyrillic(self) -> bool {
		self.cyrillic_index().is_some()
	}
}

impl fmt::Display for StyleId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for StyleId {
	type Err = StyleError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		StyleId::ALL
			.iter()
			.copied()
			.find(|id| id.name() == s)
			.ok_or_else(|| StyleError::UnknownStyle(s.to_owned()))
	}
}
