use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use font_gen_core::session::ViewerId;

/// Per-viewer cooldown between two generations.
///
/// Generation is the only expensive request, so only session creation goes
/// through here. Navigation is never limited.
pub struct Cooldown {
	period: Duration,
	last: Mutex<HashMap<ViewerId, Instant>>,
}

impl Cooldown {
	pub fn new(period: Duration) -> Self {
		Self {
			period,
			last: Mutex::new(HashMap::new()),
		}
	}

	/// Records an attempt by `viewer`.
	///
	/// # Returns
	/// - `Ok(())` if the viewer may proceed; the attempt is recorded.
	/// - `Err(remaining)` with the time left otherwise; nothing is recorded.
	pub fn try_acquire(&self, viewer: ViewerId) -> Result<(), Duration> {
		self.try_acquire_at(viewer, Instant::now())
	}

	fn try_acquire_at(&self, viewer: ViewerId, now: Instant) -> Result<(), Duration> {
		let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);

		if let Some(previous) = last.get(&viewer) {
			let elapsed = now.saturating_duration_since(*previous);
			if elapsed < self.period {
				return Err(self.period - elapsed);
			}
		}

		// Entries older than the period carry no information anymore
		let period = self.period;
		last.retain(|_, at| now.saturating_duration_since(*at) < period);
		last.insert(viewer, now);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_second_attempt_within_period_is_rejected() {
		let cooldown = Cooldown::new(Duration::from_millis(1000));
		let start = Instant::now();

		assert_eq!(cooldown.try_acquire_at(ViewerId(1), start), Ok(()));
		let remaining = cooldown
			.try_acquire_at(ViewerId(1), start + Duration::from_millis(400))
			.unwrap_err();
		assert_eq!(remaining, Duration::from_millis(600));

		assert_eq!(cooldown.try_acquire_at(ViewerId(1), start + Duration::from_millis(1000)), Ok(()));
	}

	#[test]
	fn test_viewers_are_independent() {
		let cooldown = Cooldown::new(Duration::from_secs(60));
		let now = Instant::now();
		assert_eq!(cooldown.try_acquire_at(ViewerId(1), now), Ok(()));
		assert_eq!(cooldown.try_acquire_at(ViewerId(2), now), Ok(()));
	}

	#[test]
	fn test_zero_period_never_limits() {
		let cooldown = Cooldown::new(Duration::ZERO);
		let now = Instant::now();
		assert_eq!(cooldown.try_acquire_at(ViewerId(1), now), Ok(()));
		assert_eq!(cooldown.try_acquire_at(ViewerId(1), now), Ok(()));
	}
}
