//! Handlers for `/contacts` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/contacts` | Optional `?page=N&limit=N`; 404 if the window is empty |
//! | `POST`   | `/contacts` | Body: `{"name":"...","phone":"..."}`; 201 + record |
//! | `GET`    | `/contacts/{id}` | 404 if not found |
//! | `PATCH`  | `/contacts/{id}` | Partial body `{"name"?, "phone"?}`; 404 before body validation |
//! | `DELETE` | `/contacts/{id}` | 204 empty on success |

use std::{collections::BTreeMap, sync::Arc};

use agenda_core::{
  contact::Contact,
  store::{ContactStore, PageRequest},
};
use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{error::ApiError, validate};

/// No `AUTOINCREMENT` row can carry this id; non-numeric path segments
/// coerce here so the lookup falls through to the not-found path.
const ID_SENTINEL: i64 = -1;

fn parse_id(raw: &str) -> i64 {
  raw.parse().unwrap_or(ID_SENTINEL)
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /contacts/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let contact = store
    .find_by_id(parse_id(&id))
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound("Contact not found.".to_string()))?;
  Ok(Json(contact))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// One page of contacts plus the window that produced it.
#[derive(Debug, Serialize)]
pub struct ContactPage {
  pub page:     u32,
  pub limit:    u32,
  pub total:    u64,
  pub contacts: Vec<Contact>,
}

/// `GET /contacts[?page=N][&limit=N]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<BTreeMap<String, String>>,
) -> Result<Json<ContactPage>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let (page, limit) = validate::page_params(&params)?;

  let request = PageRequest {
    offset: u64::from(page - 1) * u64::from(limit),
    limit,
  };
  let (contacts, total) = store
    .find_and_count(request)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  if contacts.is_empty() {
    return Err(ApiError::EmptyPage { page, limit });
  }
  Ok(Json(ContactPage { page, limit, total, contacts }))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /contacts` — body: `{"name":"...","phone":"..."}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let draft = validate::new_contact(&body)?;
  let contact = store
    .insert(draft)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(contact)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PATCH /contacts/{id}` — partial body; existence is confirmed before the
/// body is validated.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  Json(body): Json<Map<String, Value>>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let mut contact = store
    .find_by_id(parse_id(&id))
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound("Contact not found.".to_string()))?;

  let patch = validate::contact_patch(&body)?;
  contact.apply(patch);

  let contact = store
    .save(contact)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(contact))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /contacts/{id}` — 204 with an empty body on success.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let contact = store
    .find_by_id(parse_id(&id))
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound("Contact not found.".to_string()))?;

  store
    .remove(contact.id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(StatusCode::NO_CONTENT)
}
