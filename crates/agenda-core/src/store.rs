//! The `ContactStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `agenda-store-sqlite`).
//! Higher layers (`agenda-api`, `agenda-server`) depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use crate::contact::{Contact, NewContact};

// ─── Query type ──────────────────────────────────────────────────────────────

/// An offset/limit window over the contact table, for
/// [`ContactStore::find_and_count`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PageRequest {
  /// Rows to skip before the window starts.
  pub offset: u64,
  /// Maximum rows in the window.
  pub limit:  u32,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over an agenda contact store backend.
///
/// The store assigns surrogate keys and both timestamps on insert, and
/// refreshes `updated_at` on save. Deletes are hard; there is no tombstone.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Retrieve a contact by id. Returns `None` if no row matches.
  fn find_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Return one page of contacts, ordered by ascending id, plus the total
  /// row count.
  fn find_and_count(
    &self,
    page: PageRequest,
  ) -> impl Future<Output = Result<(Vec<Contact>, u64), Self::Error>> + Send + '_;

  /// Persist a new contact. The store assigns the id and sets both
  /// timestamps to the same instant.
  fn insert(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Write back a loaded contact's `name` and `phone`, refreshing
  /// `updated_at`. Returns the persisted record; errors if the row no
  /// longer exists.
  fn save(
    &self,
    contact: Contact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Hard-delete a contact. Returns `true` if a row was removed.
  fn remove(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
