use actix_web::rt::time::timeout;
use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use font_gen_core::session::ViewerId;
use font_gen_core::session::page::{Direction, Page};
use font_gen_core::variant::transform::apply_style;

use crate::errors::ApiError;
use crate::state::AppState;

/// Query parameters for the `/v1/style` endpoint
#[derive(Deserialize)]
struct StyleParams {
	name: String,
	text: String,
}

/// Query parameters for the session endpoints
#[derive(Deserialize)]
struct ViewerParams {
	viewer: i64,
}

/// Query parameters for session creation
#[derive(Deserialize)]
struct CreateParams {
	viewer: i64,
	text: String,
}

#[derive(Serialize)]
struct StyledText {
	style: String,
	text: String,
}

#[derive(Serialize)]
struct SessionView {
	session_id: Uuid,
	label: String,
	page: Page,
}

impl SessionView {
	fn new(session_id: Uuid, page: Page) -> Self {
		Self {
			session_id,
			label: page.to_string(),
			page,
		}
	}
}

/// HTTP GET endpoint `/v1/styles`
///
/// Lists every registered style name in canonical order.
#[get("/v1/styles")]
async fn get_styles(data: web::Data<AppState>) -> HttpResponse {
	let names: Vec<&str> = data.generator.registry().names().collect();
	HttpResponse::Ok().json(names)
}

/// HTTP GET endpoint `/v1/style`
///
/// Applies a single named style to `text`.
#[get("/v1/style")]
async fn get_style(data: web::Data<AppState>, query: web::Query<StyleParams>) -> Result<HttpResponse, ApiError> {
	let text = apply_style(data.generator.registry(), &query.text, &query.name)?;
	Ok(HttpResponse::Ok().json(StyledText {
		style: query.name.clone(),
		text,
	}))
}

/// HTTP POST endpoint `/v1/sessions`
///
/// Generates the variant collection for `text` and opens a session on it for
/// `viewer`. Returns the session id and its first page.
///
/// # Behavior
/// - Empty text answers 422 without touching the cooldown
/// - A viewer starting generations too quickly gets 429
/// - Generation runs on the blocking pool and is abandoned after the
///   configured timeout (503)
#[post("/v1/sessions")]
async fn post_session(data: web::Data<AppState>, query: web::Query<CreateParams>) -> Result<HttpResponse, ApiError> {
	let CreateParams { viewer, text } = query.into_inner();
	let viewer = ViewerId(viewer);

	if text.is_empty() {
		return Err(ApiError::NothingToShow("text is empty".to_owned()));
	}

	data.cooldown.try_acquire(viewer).map_err(|remaining| ApiError::RateLimited {
		retry_after_ms: u64::try_from(remaining.as_millis()).unwrap_or(u64::MAX),
	})?;

	let generator = data.generator.clone();
	let count = data.variant_count;
	let job = web::block(move || generator.generate(&text, count));

	let collection = match timeout(data.generation_timeout, job).await {
		Err(_) => return Err(ApiError::Timeout),
		Ok(Err(e)) => return Err(ApiError::Internal(e.to_string())),
		Ok(Ok(None)) => return Err(ApiError::NothingToShow("no variants produced".to_owned())),
		Ok(Ok(Some(collection))) => collection,
	};

	let size = collection.len();
	let id = data.sessions.create_default_session(viewer, collection);
	let page = data.sessions.get_page(id, viewer)?;

	info!(session = %id, viewer = %viewer, variants = size, "Session opened");
	Ok(HttpResponse::Created().json(SessionView::new(id, page)))
}

/// HTTP GET endpoint `/v1/sessions/{id}`
///
/// Returns the current page of a session owned by `viewer`.
#[get("/v1/sessions/{id}")]
async fn get_session(
	data: web::Data<AppState>,
	path: web::Path<Uuid>,
	query: web::Query<ViewerParams>,
) -> Result<HttpResponse, ApiError> {
	let id = path.into_inner();
	let page = data.sessions.get_page(id, ViewerId(query.viewer))?;
	Ok(HttpResponse::Ok().json(SessionView::new(id, page)))
}

/// HTTP PUT endpoint `/v1/sessions/{id}/{direction}`
///
/// Moves a session one page `next` or `prev`, wrapping at both ends.
#[put("/v1/sessions/{id}/{direction}")]
async fn put_navigation(
	data: web::Data<AppState>,
	path: web::Path<(Uuid, String)>,
	query: web::Query<ViewerParams>,
) -> Result<HttpResponse, ApiError> {
	let (id, direction) = path.into_inner();
	let direction: Direction = direction.parse()?;

	let page = data.sessions.advance(id, ViewerId(query.viewer), direction)?;
	debug!(session = %id, %direction, page = page.number, "Navigated");
	Ok(HttpResponse::Ok().json(SessionView::new(id, page)))
}

/// Registers every endpoint.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(get_styles)
		.service(get_style)
		.service(post_session)
		.service(get_session)
		.service(put_navigation);
}
