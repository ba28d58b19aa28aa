use thiserror::Error;
use uuid::Uuid;

use crate::session::ViewerId;

/// Failure to resolve a style by name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
	#[error("Unknown style: {0}")]
	UnknownStyle(String),
}

/// Failures of session lookups and navigation.
///
/// An expired session and one that never existed are reported the same
/// way: both mean "start over".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
	#[error("Session {0} not found or expired")]
	NotFound(Uuid),

	#[error("Session {session} does not belong to viewer {viewer}")]
	NotOwner { session: Uuid, viewer: ViewerId },
}

/// A navigation action that is neither `next` nor `prev`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown navigation direction: {0}")]
pub struct UnknownDirection(pub String);
