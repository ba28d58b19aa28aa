use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownDirection;

/// One window of a session's collection.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Page {
	/// Variants shown on this page, in collection order.
	pub items: Vec<String>,
	/// Zero-based page number.
	pub number: usize,
	/// Total number of pages (at least 1).
	pub total: usize,
}

impl fmt::Display for Page {
	/// Human label, one-based: `Page 3/10`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Page {}/{}", self.number + 1, self.total)
	}
}

/// Navigation action on a session.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	Next,
	Prev,
}

impl Direction {
	pub fn as_str(self) -> &'static str {
		match self {
			Direction::Next => "next",
			Direction::Prev => "prev",
		}
	}

	/// Moves `cursor` one step over `total` pages, wrapping at both ends.
	///
	/// `total` must be at least 1.
	pub fn step(self, cursor: usize, total: usize) -> usize {
		match self {
			Direction::Next => (cursor + 1) % total,
			Direction::Prev => (cursor + total - 1) % total,
		}
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Direction {
	type Err = UnknownDirection;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"next" => Ok(Direction::Next),
			"prev" => Ok(Direction::Prev),
			other => Err(UnknownDirection(other.to_owned())),
		}
	}
}
