use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, Utc};
use tracing::debug;
use uuid::Uuid;

use super::ViewerId;
use super::page::{Direction, Page};
use crate::error::SessionError;
use crate::variant::collection::VariantCollection;

/// Variants shown per page when the caller has no preference.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Tunables of a `SessionManager`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
	/// Page size used by `create_default_session`.
	pub page_size: usize,
	/// Age after which a session is no longer served.
	pub retention: Duration,
	/// Minimum delay between two opportunistic sweeps.
	pub sweep_interval: Duration,
}

impl Default for SessionConfig {
	fn default() -> Self {
		Self {
			page_size: DEFAULT_PAGE_SIZE,
			retention: Duration::hours(24),
			sweep_interval: Duration::minutes(10),
		}
	}
}

/// A viewer's browsing state over one collection.
#[derive(Clone, Debug)]
struct Session {
	viewer: ViewerId,
	variants: VariantCollection,
	page_size: usize,
	cursor: usize,
	created_at: DateTime<Utc>,
}

impl Session {
	fn total_pages(&self) -> usize {
		self.variants.len().div_ceil(self.page_size).max(1)
	}

	fn is_expired(&self, now: DateTime<Utc>, retention: Duration) -> bool {
		now - self.created_at > retention
	}

	fn page(&self) -> Page {
		let items = self
			.variants
			.items()
			.iter()
			.skip(self.cursor * self.page_size)
			.take(self.page_size)
			.cloned()
			.collect();

		Page {
			items,
			number: self.cursor,
			total: self.total_pages(),
		}
	}
}

struct Store {
	sessions: HashMap<Uuid, Session>,
	last_sweep: DateTime<Utc>,
}

impl Store {
	/// Removes every session older than `retention`; returns how many.
	fn purge(&mut self, now: DateTime<Utc>, retention: Duration) -> usize {
		let before = self.sessions.len();
		self.sessions.retain(|_, session| !session.is_expired(now, retention));
		self.last_sweep = now;
		before - self.sessions.len()
	}
}

/// In-memory store of pagination sessions.
///
/// # Responsibilities
/// - Mint session identifiers and keep each viewer's collection
/// - Serve pages to the owning viewer only
/// - Move the page cursor circularly
/// - Forget sessions past the retention window
///
/// # Invariants
/// - A session is only readable or movable by the viewer who created it
/// - An expired session is never served, whether or not a sweep ran
/// - A failed call leaves the session untouched
///
/// All state sits behind one mutex; every operation is O(page size), so a
/// single lock is enough for the expected load.
pub struct SessionManager {
	config: SessionConfig,
	store: Mutex<Store>,
}

impl SessionManager {
	pub fn new(config: SessionConfig) -> Self {
		Self {
			config,
			store: Mutex::new(Store {
				sessions: HashMap::new(),
				last_sweep: Utc::now(),
			}),
		}
	}

	pub fn config(&self) -> &SessionConfig {
		&self.config
	}

	// A panic while holding the lock cannot leave a session half-updated:
	// every mutation is a single assignment or map operation.
	fn lock(&self) -> MutexGuard<'_, Store> {
		self.store.lock().unwrap_or_else(PoisonError::into_inner)
	}

	/// Stores `variants` for `viewer` and returns the new session id.
	///
	/// The cursor starts on page 0. A `page_size` of 0 is treated as 1.
	/// May sweep expired sessions if the last sweep is older than
	/// `sweep_interval`.
	pub fn create_session(&self, viewer: ViewerId, variants: VariantCollection, page_size: usize) -> Uuid {
		self.create_session_at(viewer, variants, page_size, Utc::now())
	}

	/// Same as `create_session` with the configured page size.
	pub fn create_default_session(&self, viewer: ViewerId, variants: VariantCollection) -> Uuid {
		self.create_session(viewer, variants, self.config.page_size)
	}

	/// Returns the current page of a session.
	///
	/// # Errors
	/// - `SessionError::NotFound` if the id is unknown or the session expired
	/// - `SessionError::NotOwner` if `viewer` did not create the session
	pub fn get_page(&self, id: Uuid, viewer: ViewerId) -> Result<Page, SessionError> {
		self.get_page_at(id, viewer, Utc::now())
	}

	/// Moves the session one page in `direction`, wrapping at both ends,
	/// and returns the new page.
	///
	/// # Errors
	/// Same as `get_page`; the cursor does not move on error.
	pub fn advance(&self, id: Uuid, viewer: ViewerId, direction: Direction) -> Result<Page, SessionError> {
		self.advance_at(id, viewer, direction, Utc::now())
	}

	/// Removes every expired session now; returns how many were removed.
	pub fn purge_expired(&self) -> usize {
		let removed = self.lock().purge(Utc::now(), self.config.retention);
		debug!(removed, "Purged expired sessions");
		removed
	}

	/// Number of stored sessions, expired ones not yet swept included.
	pub fn len(&self) -> usize {
		self.lock().sessions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub(crate) fn create_session_at(
		&self,
		viewer: ViewerId,
		variants: VariantCollection,
		page_size: usize,
		now: DateTime<Utc>,
	) -> Uuid {
		let id = Uuid::new_v4();
		let session = Session {
			viewer,
			variants,
			page_size: page_size.max(1),
			cursor: 0,
			created_at: now,
		};

		let mut store = self.lock();
		if now - store.last_sweep >= self.config.sweep_interval {
			let removed = store.purge(now, self.config.retention);
			debug!(removed, remaining = store.sessions.len(), "Swept expired sessions");
		}
		store.sessions.insert(id, session);

		debug!(session = %id, viewer = %viewer, "Session created");
		id
	}

	pub(crate) fn get_page_at(&self, id: Uuid, viewer: ViewerId, now: DateTime<Utc>) -> Result<Page, SessionError> {
		let mut store = self.lock();
		let session = Self::checked(&mut store, id, viewer, now, self.config.retention)?;
		Ok(session.page())
	}

	pub(crate) fn advance_at(
		&self,
		id: Uuid,
		viewer: ViewerId,
		direction: Direction,
		now: DateTime<Utc>,
	) -> Result<Page, SessionError> {
		let mut store = self.lock();
		let session = Self::checked(&mut store, id, viewer, now, self.config.retention)?;
		session.cursor = direction.step(session.cursor, session.total_pages());
		Ok(session.page())
	}

	/// Looks up a live session owned by `viewer`.
	///
	/// An expired session found here is dropped on the spot.
	fn checked<'a>(
		store: &'a mut Store,
		id: Uuid,
		viewer: ViewerId,
		now: DateTime<Utc>,
		retention: Duration,
	) -> Result<&'a mut Session, SessionError> {
		let expired = match store.sessions.get(&id) {
			None => return Err(SessionError::NotFound(id)),
			Some(session) => session.is_expired(now, retention),
		};
		if expired {
			store.sessions.remove(&id);
			return Err(SessionError::NotFound(id));
		}

		let session = store.sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
		if session.viewer != viewer {
			return Err(SessionError::NotOwner { session: id, viewer });
		}
		Ok(session)
	}
}

impl Default for SessionManager {
	fn default() -> Self {
		Self::new(SessionConfig::default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const OWNER: ViewerId = ViewerId(1001);
	const STRANGER: ViewerId = ViewerId(2002);

	fn collection(len: usize) -> VariantCollection {
		VariantCollection::new("src", (0..len).map(|i| format!("v{i}")).collect())
	}

	#[test]
	fn test_pages_are_exhaustive_and_disjoint() {
		let manager = SessionManager::default();
		let id = manager.create_session(OWNER, collection(50), 5);

		let first = manager.get_page(id, OWNER).unwrap();
		assert_eq!(first.number, 0);
		assert_eq!(first.total, 10);

		let mut seen = first.items.clone();
		for expected in 1..10 {
			let page = manager.advance(id, OWNER, Direction::Next).unwrap();
			assert_eq!(page.number, expected);
			assert_eq!(page.items.len(), 5);
			seen.extend(page.items);
		}
		assert_eq!(seen, collection(50).into_items());
	}

	#[test]
	fn test_navigation_wraps_both_ways() {
		let manager = SessionManager::default();
		let id = manager.create_session(OWNER, collection(50), 5);

		let last = manager.advance(id, OWNER, Direction::Prev).unwrap();
		assert_eq!(last.number, 9);
		assert_eq!(last.items, vec!["v45", "v46", "v47", "v48", "v49"]);

		let first = manager.advance(id, OWNER, Direction::Next).unwrap();
		assert_eq!(first.number, 0);
		assert_eq!(first.items[0], "v0");
	}

	#[test]
	fn test_partial_last_page() {
		let manager = SessionManager::default();
		let id = manager.create_session(OWNER, collection(12), 5);
		let last = manager.advance(id, OWNER, Direction::Prev).unwrap();
		assert_eq!(last.total, 3);
		assert_eq!(last.items, vec!["v10", "v11"]);
	}

	#[test]
	fn test_empty_collection_has_one_empty_page() {
		let manager = SessionManager::default();
		let id = manager.create_session(OWNER, collection(0), 5);
		let page = manager.advance(id, OWNER, Direction::Next).unwrap();
		assert_eq!((page.number, page.total), (0, 1));
		assert!(page.items.is_empty());
	}

	#[test]
	fn test_zero_page_size_is_one() {
		let manager = SessionManager::default();
		let id = manager.create_session(OWNER, collection(3), 0);
		assert_eq!(manager.get_page(id, OWNER).unwrap().total, 3);
	}

	#[test]
	fn test_other_viewer_rejected_and_cursor_unchanged() {
		let manager = SessionManager::default();
		let id = manager.create_session(OWNER, collection(50), 5);
		manager.advance(id, OWNER, Direction::Next).unwrap();

		assert_eq!(
			manager.advance(id, STRANGER, Direction::Next),
			Err(SessionError::NotOwner { session: id, viewer: STRANGER })
		);
		assert_eq!(
			manager.get_page(id, STRANGER),
			Err(SessionError::NotOwner { session: id, viewer: STRANGER })
		);
		assert_eq!(manager.get_page(id, OWNER).unwrap().number, 1);
	}

	#[test]
	fn test_unknown_session() {
		let manager = SessionManager::default();
		let id = Uuid::new_v4();
		assert_eq!(manager.get_page(id, OWNER), Err(SessionError::NotFound(id)));
		assert_eq!(manager.advance(id, OWNER, Direction::Prev), Err(SessionError::NotFound(id)));
	}

	#[test]
	fn test_expired_session_rejected_without_sweep() {
		let manager = SessionManager::default();
		let created = Utc::now();
		let id = manager.create_session_at(OWNER, collection(50), 5, created);

		let almost = created + Duration::hours(23);
		assert!(manager.get_page_at(id, OWNER, almost).is_ok());

		let later = created + Duration::hours(24) + Duration::seconds(1);
		assert_eq!(
			manager.advance_at(id, OWNER, Direction::Next, later),
			Err(SessionError::NotFound(id))
		);
		assert_eq!(manager.get_page_at(id, OWNER, later), Err(SessionError::NotFound(id)));
	}

	#[test]
	fn test_sweep_on_create_respects_interval() {
		let manager = SessionManager::default();
		let start = Utc::now();
		let old = manager.create_session_at(OWNER, collection(5), 5, start - Duration::hours(30));
		assert_eq!(manager.len(), 1);

		// Last sweep happened at construction: too recent to sweep again
		manager.create_session_at(OWNER, collection(5), 5, start);
		assert_eq!(manager.len(), 2);

		let fresh = manager.create_session_at(OWNER, collection(5), 5, start + Duration::minutes(11));
		assert_eq!(manager.len(), 2);
		assert_eq!(
			manager.get_page_at(old, OWNER, start + Duration::minutes(11)),
			Err(SessionError::NotFound(old))
		);
		assert!(manager.get_page_at(fresh, OWNER, start + Duration::minutes(11)).is_ok());
	}

	#[test]
	fn test_purge_expired() {
		let manager = SessionManager::default();
		manager.create_session_at(OWNER, collection(5), 5, Utc::now() - Duration::days(2));
		manager.create_session(STRANGER, collection(5), 5);
		assert_eq!(manager.purge_expired(), 1);
		assert_eq!(manager.len(), 1);
	}

	#[test]
	fn test_ids_are_unique() {
		let manager = SessionManager::default();
		let a = manager.create_default_session(OWNER, collection(5));
		let b = manager.create_default_session(OWNER, collection(5));
		assert_ne!(a, b);
	}

	#[test]
	fn test_concurrent_viewers() {
		let manager = std::sync::Arc::new(SessionManager::default());
		let handles: Vec<_> = (0..8)
			.map(|n| {
				let manager = manager.clone();
				std::thread::spawn(move || {
					let viewer = ViewerId(n);
					let id = manager.create_session(viewer, collection(50), 5);
					for _ in 0..25 {
						manager.advance(id, viewer, Direction::Next).unwrap();
					}
					manager.get_page(id, viewer).unwrap().number
				})
			})
			.collect();

		for handle in handles {
			assert_eq!(handle.join().unwrap(), 5);
		}
	}
}
