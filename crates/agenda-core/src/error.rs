//! Error types for `agenda-core`.
//!
//! The display strings double as the user-facing messages returned by the
//! API layer, so they are full sentences.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("Name must have at least two words of 3 or more letters.")]
  InvalidName,

  #[error("Phone must be in the format XX9XXXXXXXX.")]
  InvalidPhone,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
