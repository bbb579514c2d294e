//! Contact — the sole persisted entity, plus the validated input types used
//! to create and patch one.
//!
//! Field validation lives here so the invariant holds everywhere: any
//! `NewContact` or `ContactPatch` that exists has already passed the
//! patterns, and therefore so has any persisted record.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Patterns ────────────────────────────────────────────────────────────────

/// At least two whitespace-separated words, each of 3 or more letters.
static NAME_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\p{L}{3,}(\s+\p{L}{3,})+$").expect("static pattern"));

/// Brazilian mobile format: two digits, a literal `9`, eight digits.
static PHONE_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[0-9]{2}9[0-9]{8}$").expect("static pattern"));

pub fn validate_name(name: &str) -> Result<()> {
  if NAME_PATTERN.is_match(name) {
    Ok(())
  } else {
    Err(Error::InvalidName)
  }
}

pub fn validate_phone(phone: &str) -> Result<()> {
  if PHONE_PATTERN.is_match(phone) {
    Ok(())
  } else {
    Err(Error::InvalidPhone)
  }
}

// ─── Entity ──────────────────────────────────────────────────────────────────

/// A persisted contact. The store assigns `id` and both timestamps on
/// insert; `updated_at` is refreshed by the store on every successful save.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
  pub id:         i64,
  pub name:       String,
  pub phone:      String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Contact {
  /// Apply the supplied fields of `patch`, leaving the rest untouched.
  pub fn apply(&mut self, patch: ContactPatch) {
    if let Some(name) = patch.name {
      self.name = name;
    }
    if let Some(phone) = patch.phone {
      self.phone = phone;
    }
  }
}

// ─── Inputs ──────────────────────────────────────────────────────────────────

/// Validated input for creating a contact. Constructing one proves both
/// fields pass their patterns.
#[derive(Debug, Clone)]
pub struct NewContact {
  pub name:  String,
  pub phone: String,
}

impl NewContact {
  /// Validate `name` then `phone`, short-circuiting on the first failure.
  pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Result<Self> {
    let name = name.into();
    let phone = phone.into();
    validate_name(&name)?;
    validate_phone(&phone)?;
    Ok(Self { name, phone })
  }
}

/// Validated partial update. Absent fields are left unchanged by
/// [`Contact::apply`]; supplied fields have passed their patterns.
#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
  pub name:  Option<String>,
  pub phone: Option<String>,
}

impl ContactPatch {
  /// Validate whichever fields are supplied, name first.
  pub fn new(name: Option<String>, phone: Option<String>) -> Result<Self> {
    if let Some(name) = &name {
      validate_name(name)?;
    }
    if let Some(phone) = &phone {
      validate_phone(phone)?;
    }
    Ok(Self { name, phone })
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_two_word_names() {
    assert!(validate_name("Artur Daniel").is_ok());
    assert!(validate_name("Ana Beatriz Souza").is_ok());
    assert!(validate_name("José Luís").is_ok());
  }

  #[test]
  fn rejects_short_words_and_single_words() {
    // both words shorter than 3 letters
    assert_eq!(validate_name("Jo Al"), Err(Error::InvalidName));
    assert_eq!(validate_name("Jo Alves"), Err(Error::InvalidName));
    assert_eq!(validate_name("Arthur"), Err(Error::InvalidName));
    assert_eq!(validate_name(""), Err(Error::InvalidName));
  }

  #[test]
  fn rejects_non_letter_names() {
    assert_eq!(validate_name("Artur 12345"), Err(Error::InvalidName));
  }

  #[test]
  fn accepts_mobile_phone_format() {
    assert!(validate_phone("79900000000").is_ok());
    assert!(validate_phone("11912345678").is_ok());
  }

  #[test]
  fn rejects_malformed_phones() {
    // 10 digits, no `9` after the area code
    assert_eq!(validate_phone("1234567890"), Err(Error::InvalidPhone));
    // third digit must be a literal 9
    assert_eq!(validate_phone("79800000000"), Err(Error::InvalidPhone));
    // too long
    assert_eq!(validate_phone("799000000000"), Err(Error::InvalidPhone));
    assert_eq!(validate_phone("(79) 90000-0000"), Err(Error::InvalidPhone));
  }

  #[test]
  fn new_contact_checks_name_before_phone() {
    let err = NewContact::new("Jo Al", "bad").unwrap_err();
    assert_eq!(err, Error::InvalidName);
  }

  #[test]
  fn patch_skips_absent_fields() {
    let patch = ContactPatch::new(None, Some("79911111111".into())).unwrap();
    assert!(patch.name.is_none());

    let mut contact = Contact {
      id:         1,
      name:       "Artur Daniel".into(),
      phone:      "79900000000".into(),
      created_at: Utc::now(),
      updated_at: Utc::now(),
    };
    contact.apply(patch);
    assert_eq!(contact.name, "Artur Daniel");
    assert_eq!(contact.phone, "79911111111");
  }
}
