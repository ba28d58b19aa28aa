use serde::Serialize;

/// The variants generated for one source text.
///
/// The order is fixed at creation and never changes, so paging through
/// the collection twice yields the same pages.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct VariantCollection {
	source: String,
	items: Vec<String>,
}

impl VariantCollection {
	pub fn new<S: Into<String>>(source: S, items: Vec<String>) -> Self {
		Self {
			source: source.into(),
			items,
		}
	}

	/// The text the variants were derived from.
	pub fn source(&self) -> &str {
		&self.source
	}

	pub fn items(&self) -> &[String] {
		&self.items
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		self.items.get(index).map(String::as_str)
	}

	pub fn contains(&self, variant: &str) -> bool {
		self.items.iter().any(|item| item == variant)
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.items.iter().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn into_items(self) -> Vec<String> {
		self.items
	}
}
