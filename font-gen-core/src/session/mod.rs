//! Viewer sessions over a generated variant collection.
//!
//! A session binds one `VariantCollection` to the viewer who requested it
//! and tracks which page that viewer is looking at. Navigation wraps
//! around in both directions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Page values and navigation directions.
pub mod page;

/// Session storage, ownership checks, expiry and sweeping.
pub mod manager;

/// Identity of the chat user owning a session.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ViewerId(pub i64);

impl fmt::Display for ViewerId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<i64> for ViewerId {
	fn from(id: i64) -> Self {
		ViewerId(id)
	}
}
