//! Request-shape validation: pagination-parameter coercion and body checks.
//!
//! Field *patterns* are enforced by `agenda-core`; this module enforces the
//! request envelope — which keys may appear, which are required, and how raw
//! query strings coerce to numbers — and normalises every failure to a
//! [`ApiError::BadRequest`] with a distinct message.

use std::collections::BTreeMap;

use agenda_core::{ContactPatch, Error as CoreError, NewContact};
use serde_json::{Map, Value};

use crate::error::ApiError;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

// ─── Pagination ──────────────────────────────────────────────────────────────

/// Coerce `page`/`limit` query parameters, applying defaults.
///
/// Only those two keys are permitted; both, when present, must parse as
/// positive integers.
pub fn page_params(query: &BTreeMap<String, String>) -> Result<(u32, u32), ApiError> {
  if query.keys().any(|k| k != "page" && k != "limit") {
    return Err(ApiError::BadRequest(
      "Only the page and limit query parameters are allowed.".to_string(),
    ));
  }

  let page = match query.get("page") {
    None => DEFAULT_PAGE,
    Some(raw) => positive(raw).ok_or_else(|| {
      ApiError::BadRequest("Page must be a positive integer.".to_string())
    })?,
  };

  let limit = match query.get("limit") {
    None => DEFAULT_LIMIT,
    Some(raw) => positive(raw).ok_or_else(|| {
      ApiError::BadRequest("Limit must be a positive integer.".to_string())
    })?,
  };

  Ok((page, limit))
}

fn positive(raw: &str) -> Option<u32> {
  raw.parse::<u32>().ok().filter(|n| *n >= 1)
}

// ─── Bodies ──────────────────────────────────────────────────────────────────

/// Validate a create body. Checks run in order: presence, extraneous
/// fields, name pattern, phone pattern — short-circuiting on the first
/// failure.
pub fn new_contact(body: &Map<String, Value>) -> Result<NewContact, ApiError> {
  let name = non_empty_str(body, "name");
  let phone = non_empty_str(body, "phone");
  let (Some(name), Some(phone)) = (name, phone) else {
    return Err(ApiError::BadRequest("Name and phone are required.".to_string()));
  };

  only_contact_fields(body)?;
  Ok(NewContact::new(name, phone)?)
}

/// Validate a patch body. Both fields are optional; each is checked against
/// its pattern only when supplied.
pub fn contact_patch(body: &Map<String, Value>) -> Result<ContactPatch, ApiError> {
  only_contact_fields(body)?;

  let name = supplied_str(body, "name", CoreError::InvalidName)?;
  let phone = supplied_str(body, "phone", CoreError::InvalidPhone)?;
  Ok(ContactPatch::new(name, phone)?)
}

fn only_contact_fields(body: &Map<String, Value>) -> Result<(), ApiError> {
  if body.keys().any(|k| k != "name" && k != "phone") {
    return Err(ApiError::BadRequest(
      "Only the name and phone fields are allowed.".to_string(),
    ));
  }
  Ok(())
}

/// A present, string, non-empty value — anything else counts as missing.
fn non_empty_str<'a>(body: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
  body.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// A supplied-but-non-string value fails that field's pattern check.
fn supplied_str(
  body: &Map<String, Value>,
  key: &str,
  pattern_err: CoreError,
) -> Result<Option<String>, ApiError> {
  match body.get(key) {
    None => Ok(None),
    Some(Value::String(s)) => Ok(Some(s.clone())),
    Some(_) => Err(pattern_err.into()),
  }
}
