use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Server configuration loaded from environment variables.
///
/// Every variable is optional; a value that is present but unparsable is a
/// startup error.
#[derive(Debug, Clone)]
pub struct Config {
	pub host: String,
	pub port: u16,
	pub rust_log: String,
	pub fonts_dir: PathBuf,
	pub variant_count: usize,
	pub page_size: usize,
	pub session_ttl: Duration,
	pub sweep_interval: Duration,
	pub generation_cooldown: Duration,
	pub generation_timeout: Duration,
}

impl Config {
	pub fn from_env() -> Result<Self> {
		dotenvy::dotenv().ok(); // a missing .env is fine

		Ok(Config {
			host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned()),
			port: parse_env("PORT", 5000)?,
			rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned()),
			fonts_dir: std::env::var("FONTS_DIR")
				.map(PathBuf::from)
				.unwrap_or_else(|_| PathBuf::from("fonts")),
			variant_count: parse_env("VARIANT_COUNT", 50)?,
			page_size: parse_env("PAGE_SIZE", 5)?,
			session_ttl: Duration::from_secs(parse_env("SESSION_TTL_SECS", 86_400)?),
			sweep_interval: Duration::from_secs(parse_env("SWEEP_INTERVAL_SECS", 600)?),
			generation_cooldown: Duration::from_millis(parse_env("GENERATION_COOLDOWN_MS", 1_000)?),
			generation_timeout: Duration::from_millis(parse_env("GENERATION_TIMEOUT_MS", 5_000)?),
		})
	}

	/// Default log filter, used when `RUST_LOG` is unset or unparsable.
	pub fn log_filter(&self) -> String {
		let level = &self.rust_log;
		format!("{}={level},font_gen_core={level},actix_web={level}", env!("CARGO_CRATE_NAME"))
	}
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
	T: FromStr,
	T::Err: std::error::Error + Send + Sync + 'static,
{
	match std::env::var(key) {
		Ok(raw) => raw
			.trim()
			.parse::<T>()
			.with_context(|| format!("Environment variable '{key}' has an invalid value: {raw:?}")),
		Err(_) => Ok(default),
	}
}
