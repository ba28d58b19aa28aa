use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use font_gen_core::banner::BannerBackend;
use font_gen_core::session::manager::{SessionConfig, SessionManager};
use font_gen_core::style::registry::StyleRegistry;
use font_gen_core::variant::generator::VariantGenerator;

use crate::config::Config;
use crate::rate_limit::Cooldown;

/// Shared application state injected into handlers through `web::Data`.
///
/// Every field synchronizes itself, so the state needs no outer lock.
pub struct AppState {
	pub generator: VariantGenerator,
	pub sessions: SessionManager,
	pub cooldown: Cooldown,
	pub variant_count: usize,
	pub generation_timeout: Duration,
}

impl AppState {
	pub fn new(config: &Config, banner: Option<Arc<dyn BannerBackend>>) -> Result<Self> {
		let mut generator = VariantGenerator::new(StyleRegistry::shared());
		if let Some(banner) = banner {
			generator = generator.with_banner(banner);
		}

		let session_config = SessionConfig {
			page_size: config.page_size,
			retention: chrono::Duration::from_std(config.session_ttl).context("SESSION_TTL_SECS is out of range")?,
			sweep_interval: chrono::Duration::from_std(config.sweep_interval)
				.context("SWEEP_INTERVAL_SECS is out of range")?,
		};

		Ok(Self {
			generator,
			sessions: SessionManager::new(session_config),
			cooldown: Cooldown::new(config.generation_cooldown),
			variant_count: config.variant_count,
			generation_timeout: config.generation_timeout,
		})
	}
}
