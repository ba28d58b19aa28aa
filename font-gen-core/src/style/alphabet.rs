/// Digit glyphs of an alphabet.
pub(crate) enum Digits {
	/// `0`..`9` occupy ten consecutive code points starting here.
	Contiguous(u32),
	/// Digit glyphs scattered over a block, indexed by digit value.
	Explicit(&'static [char; 10]),
}

/// A Latin alphabet laid out at a fixed offset inside some Unicode block.
///
/// Mathematical alphanumeric blocks leave reserved holes where the letter
/// already existed in Letterlike Symbols (italic `h` is U+210E, not
/// U+1D455). Those are listed in `holes` and take precedence over the
/// offset computation.
pub(crate) struct OffsetAlphabet {
	upper: u32,
	/// `None` when the block only defines capitals; lowercase input then
	/// maps onto the capitals.
	lower: Option<u32>,
	digits: Option<Digits>,
	holes: &'static [(char, char)],
}

impl OffsetAlphabet {
	const fn new(upper: u32, lower: Option<u32>, digits: Option<Digits>, holes: &'static [(char, char)]) -> Self {
		Self { upper, lower, digits, holes }
	}

	/// Returns the styled glyph for an ASCII letter or digit.
	pub(crate) fn glyph(&self, c: char) -> Option<char> {
		if let Some((_, replacement)) = self.holes.iter().find(|(from, _)| *from == c) {
			return Some(*replacement);
		}

		match c {
			'A'..='Z' => char::from_u32(self.upper + (c as u32 - 'A' as u32)),
			'a'..='z' => {
				let base = self.lower.unwrap_or(self.upper);
				char::from_u32(base + (c as u32 - 'a' as u32))
			}
			'0'..='9' => {
				let value = c as u32 - '0' as u32;
				match &self.digits {
					Some(Digits::Contiguous(base)) => char::from_u32(base + value),
					Some(Digits::Explicit(glyphs)) => Some(glyphs[value as usize]),
					None => None,
				}
			}
			_ => None,
		}
	}
}

pub(crate) static BOLD: OffsetAlphabet =
	OffsetAlphabet::new(0x1D400, Some(0x1D41A), Some(Digits::Contiguous(0x1D7CE)), &[]);

pub(crate) static ITALIC: OffsetAlphabet =
	OffsetAlphabet::new(0x1D434, Some(0x1D44E), None, &[('h', '\u{210E}')]);

pub(crate) static BOLD_ITALIC: OffsetAlphabet = OffsetAlphabet::new(0x1D468, Some(0x1D482), None, &[]);

pub(crate) static SCRIPT: OffsetAlphabet = OffsetAlphabet::new(
	0x1D49C,
	Some(0x1D4B6),
	None,
	&[
		('B', '\u{212C}'),
		('E', '\u{2130}'),
		('F', '\u{2131}'),
		('H', '\u{210B}'),
		('I', '\u{2110}'),
		('L', '\u{2112}'),
		('M', '\u{2133}'),
		('R', '\u{211B}'),
		('e', '\u{212F}'),
		('g', '\u{210A}'),
		('o', '\u{2134}'),
	],
);

pub(crate) static BOLD_SCRIPT: OffsetAlphabet = OffsetAlphabet::new(0x1D4D0, Some(0x1D4EA), None, &[]);

pub(crate) static FRAKTUR: OffsetAlphabet = OffsetAlphabet::new(
	0x1D504,
	Some(0x1D51E),
	None,
	&[
		('C', '\u{212D}'),
		('H', '\u{210C}'),
		('I', '\u{2111}'),
		('R', '\u{211C}'),
		('Z', '\u{2128}'),
	],
);

pub(crate) static DOUBLE_STRUCK: OffsetAlphabet = OffsetAlphabet::new(
	0x1D538,
	Some(0x1D552),
	Some(Digits::Contiguous(0x1D7D8)),
	&[
		('C', '\u{2102}'),
		('H', '\u{210D}'),
		('N', '\u{2115}'),
		('P', '\u{2119}'),
		('Q', '\u{211A}'),
		('R', '\u{211D}'),
		('Z', '\u{2124}'),
	],
);

pub(crate) static BOLD_FRAKTUR: OffsetAlphabet = OffsetAlphabet::new(0x1D56C, Some(0x1D586), None, &[]);

pub(crate) static SANS: OffsetAlphabet =
	OffsetAlphabet::new(0x1D5A0, Some(0x1D5BA), Some(Digits::Contiguous(0x1D7E2)), &[]);

pub(crate) static SANS_BOLD: OffsetAlphabet =
	OffsetAlphabet::new(0x1D5D4, Some(0x1D5EE), Some(Digits::Contiguous(0x1D7EC)), &[]);

pub(crate) static SANS_ITALIC: OffsetAlphabet = OffsetAlphabet::new(0x1D608, Some(0x1D622), None, &[]);

pub(crate) static SANS_BOLD_ITALIC: OffsetAlphabet = OffsetAlphabet::new(0x1D63C, Some(0x1D656), None, &[]);

pub(crate) static MONOSPACE: OffsetAlphabet =
	OffsetAlphabet::new(0x1D670, Some(0x1D68A), Some(Digits::Contiguous(0x1D7F6)), &[]);

pub(crate) static CIRCLED: OffsetAlphabet = OffsetAlphabet::new(
	0x24B6,
	Some(0x24D0),
	Some(Digits::Explicit(&['⓪', '①', '②', '③', '④', '⑤', '⑥', '⑦', '⑧', '⑨'])),
	&[],
);

/// Negative circled capitals with dingbat negative digits.
pub(crate) static BUBBLE: OffsetAlphabet = OffsetAlphabet::new(
	0x1F150,
	None,
	Some(Digits::Explicit(&['⓿', '❶', '❷', '❸', '❹', '❺', '❻', '❼', '❽', '❾'])),
	&[],
);

pub(crate) static SQUARED: OffsetAlphabet = OffsetAlphabet::new(0x1F130, None, None, &[]);

pub(crate) static REGIONAL: OffsetAlphabet = OffsetAlphabet::new(0x1F1E6, None, None, &[]);

pub(crate) static FULLWIDTH: OffsetAlphabet =
	OffsetAlphabet::new(0xFF21, Some(0xFF41), Some(Digits::Contiguous(0xFF10)), &[]);

/// Small capitals. There is no small capital X in Unicode, so `x` is absent.
pub(crate) const SMALL_CAPS: [(char, char); 25] = [
	('a', 'ᴀ'),
	('b', 'ʙ'),
	('c', 'ᴄ'),
	('d', 'ᴅ'),
	('e', 'ᴇ'),
	('f', 'ꜰ'),
	('g', 'ɢ'),
	('h', 'ʜ'),
	('i', 'ɪ'),
	('j', 'ᴊ'),
	('k', 'ᴋ'),
	('l', 'ʟ'),
	('m', 'ᴍ'),
	('n', 'ɴ'),
	('o', 'ᴏ'),
	('p', 'ᴘ'),
	('q', 'ǫ'),
	('r', 'ʀ'),
	('s', 'ꜱ'),
	('t', 'ᴛ'),
	('u', 'ᴜ'),
	('v', 'ᴠ'),
	('w', 'ᴡ'),
	('y', 'ʏ'),
	('z', 'ᴢ'),
];
