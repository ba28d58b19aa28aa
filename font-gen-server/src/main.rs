mod config;
mod errors;
mod rate_limit;
mod routes;
mod state;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use anyhow::Result;
use font_gen_core::banner::{BannerBackend, FigletBanner};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::state::AppState;

/// Main entry point for the server.
///
/// Loads the configuration, the banner fonts and the shared state, then
/// starts an Actix-web HTTP server exposing the style and session endpoints.
///
/// # Notes
/// - Sessions live in memory only and are lost on restart.
/// - A missing fonts directory leaves only the built-in `standard` banner font.
#[actix_web::main]
async fn main() -> Result<()> {
	let config = Config::from_env()?;

	tracing_subscriber::registry()
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())))
		.with(tracing_subscriber::fmt::layer())
		.init();

	info!("Starting font-gen server v{}", env!("CARGO_PKG_VERSION"));

	let banner = FigletBanner::from_dir(&config.fonts_dir);
	info!("Banner fonts loaded: {}", banner.font_names().join(", "));
	let banner: Arc<dyn BannerBackend> = Arc::new(banner);

	let state = web::Data::new(AppState::new(&config, Some(banner))?);
	info!(
		variants = config.variant_count,
		page_size = config.page_size,
		ttl_secs = config.session_ttl.as_secs(),
		"Session store ready"
	);

	let addr = (config.host.clone(), config.port);
	info!("Listening on {}:{}", addr.0, addr.1);

	HttpServer::new(move || {
		App::new()
			.wrap(middleware::Logger::default())
			.wrap(Cors::permissive())
			.app_data(state.clone())
			.configure(routes::configure)
	})
		.bind(addr)?
		.run()
		.await?;

	Ok(())
}
