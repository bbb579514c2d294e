//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure surfaces as a `{"message": "..."}` JSON body; the empty-page
//! variant additionally echoes the requested window.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  BadRequest(String),

  #[error("{0}")]
  NotFound(String),

  /// A valid pagination window that matched no rows. Observable API
  /// behavior: this is a 404, not an empty 200.
  #[error("No contacts found.")]
  EmptyPage { page: u32, limit: u32 },

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<agenda_core::Error> for ApiError {
  fn from(e: agenda_core::Error) -> Self {
    ApiError::BadRequest(e.to_string())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::BadRequest(m) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "message": m }))).into_response()
      }
      ApiError::NotFound(m) => {
        (StatusCode::NOT_FOUND, Json(json!({ "message": m }))).into_response()
      }
      ApiError::EmptyPage { page, limit } => (
        StatusCode::NOT_FOUND,
        Json(json!({
          "message": "No contacts found.",
          "page":    page,
          "limit":   limit,
        })),
      )
        .into_response(),
      ApiError::Store(e) => {
        // The caller gets a generic body; the detail goes to the log.
        tracing::error!(error = %e, "store failure");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "message": "Internal server error." })),
        )
          .into_response()
      }
    }
  }
}
