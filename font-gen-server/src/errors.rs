use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use font_gen_core::error::{SessionError, StyleError, UnknownDirection};

/// Errors returned by the HTTP handlers.
///
/// Every variant renders as `{ "error": { "code", "message" } }`.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error(transparent)]
	Style(#[from] StyleError),

	#[error(transparent)]
	Session(#[from] SessionError),

	#[error(transparent)]
	Direction(#[from] UnknownDirection),

	#[error("Nothing to show: {0}")]
	NothingToShow(String),

	#[error("Too many requests, retry in {retry_after_ms} ms")]
	RateLimited { retry_after_ms: u64 },

	#[error("Generation did not complete in time")]
	Timeout,

	#[error("Internal server error: {0}")]
	Internal(String),
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
	code: &'a str,
	message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
	error: ErrorDetail<'a>,
}

impl ApiError {
	pub fn code(&self) -> &'static str {
		match self {
			ApiError::Style(StyleError::UnknownStyle(_)) => "UNKNOWN_STYLE",
			ApiError::Session(SessionError::NotFound(_)) => "SESSION_NOT_FOUND",
			ApiError::Session(SessionError::NotOwner { .. }) => "NOT_OWNER",
			ApiError::Direction(_) => "UNKNOWN_DIRECTION",
			ApiError::NothingToShow(_) => "NOTHING_TO_SHOW",
			ApiError::RateLimited { .. } => "RATE_LIMITED",
			ApiError::Timeout => "TIMEOUT",
			ApiError::Internal(_) => "INTERNAL_ERROR",
		}
	}
}

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::Style(_) | ApiError::Direction(_) => StatusCode::BAD_REQUEST,
			ApiError::Session(SessionError::NotFound(_)) => StatusCode::NOT_FOUND,
			ApiError::Session(SessionError::NotOwner { .. }) => StatusCode::FORBIDDEN,
			ApiError::NothingToShow(_) => StatusCode::UNPROCESSABLE_ENTITY,
			ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
			ApiError::Timeout => StatusCode::SERVICE_UNAVAILABLE,
			ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn error_response(&self) -> HttpResponse {
		let message = match self {
			ApiError::Internal(detail) => {
				tracing::error!("Internal error: {detail}");
				"An internal server error occurred".to_owned()
			}
			ApiError::Timeout => {
				tracing::warn!("Generation timed out");
				self.to_string()
			}
			other => other.to_string(),
		};

		HttpResponse::build(self.status_code()).json(ErrorBody {
			error: ErrorDetail {
				code: self.code(),
				message,
			},
		})
	}
}

#[cfg(test)]
mod tests {
	use actix_web::body::to_bytes;
	use font_gen_core::session::ViewerId;
	use uuid::Uuid;

	use super::*;

	async fn body_of(error: ApiError) -> (StatusCode, serde_json::Value) {
		let response = error.error_response();
		let status = response.status();
		let bytes = to_bytes(response.into_body()).await.unwrap();
		(status, serde_json::from_slice(&bytes).unwrap())
	}

	#[actix_web::test]
	async fn test_status_mapping() {
		let id = Uuid::new_v4();
		let cases = [
			(ApiError::from(StyleError::UnknownStyle("nope".into())), StatusCode::BAD_REQUEST),
			(ApiError::from(SessionError::NotFound(id)), StatusCode::NOT_FOUND),
			(
				ApiError::from(SessionError::NotOwner { session: id, viewer: ViewerId(7) }),
				StatusCode::FORBIDDEN,
			),
			(ApiError::from(UnknownDirection("up".into())), StatusCode::BAD_REQUEST),
			(ApiError::NothingToShow("empty".into()), StatusCode::UNPROCESSABLE_ENTITY),
			(ApiError::RateLimited { retry_after_ms: 10 }, StatusCode::TOO_MANY_REQUESTS),
			(ApiError::Timeout, StatusCode::SERVICE_UNAVAILABLE),
		];
		for (error, expected) in cases {
			assert_eq!(error.status_code(), expected, "{error}");
		}
	}

	#[actix_web::test]
	async fn test_json_body_shape() {
		let (status, body) = body_of(StyleError::UnknownStyle("nope".into()).into()).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body["error"]["code"], "UNKNOWN_STYLE");
		assert_eq!(body["error"]["message"], "Unknown style: nope");
	}

	#[actix_web::test]
	async fn test_internal_detail_is_hidden() {
		let (status, body) = body_of(ApiError::Internal("pool exploded".into())).await;
		assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(body["error"]["message"], "An internal server error occurred");
	}
}
