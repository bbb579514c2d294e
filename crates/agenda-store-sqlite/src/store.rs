//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use agenda_core::{
  contact::{Contact, NewContact},
  store::{ContactStore, PageRequest},
};

use crate::{
  Error, Result,
  encode::{RawContact, encode_dt},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An agenda contact store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = Error;

  async fn find_by_id(&self, id: i64) -> Result<Option<Contact>> {
    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, name, phone, created_at, updated_at
               FROM contacts WHERE id = ?1",
              rusqlite::params![id],
              |row| {
                Ok(RawContact {
                  id:         row.get(0)?,
                  name:       row.get(1)?,
                  phone:      row.get(2)?,
                  created_at: row.get(3)?,
                  updated_at: row.get(4)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn find_and_count(&self, page: PageRequest) -> Result<(Vec<Contact>, u64)> {
    let limit  = i64::from(page.limit);
    let offset = i64::try_from(page.offset).unwrap_or(i64::MAX);

    let (raws, total): (Vec<RawContact>, i64) = self
      .conn
      .call(move |conn| {
        let total: i64 =
          conn.query_row("SELECT COUNT(*) FROM contacts", [], |r| r.get(0))?;

        let mut stmt = conn.prepare(
          "SELECT id, name, phone, created_at, updated_at
           FROM contacts ORDER BY id LIMIT ?1 OFFSET ?2",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![limit, offset], |row| {
            Ok(RawContact {
              id:         row.get(0)?,
              name:       row.get(1)?,
              phone:      row.get(2)?,
              created_at: row.get(3)?,
              updated_at: row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok((rows, total))
      })
      .await?;

    let contacts = raws
      .into_iter()
      .map(RawContact::into_contact)
      .collect::<Result<Vec<_>>>()?;

    Ok((contacts, total as u64))
  }

  async fn insert(&self, input: NewContact) -> Result<Contact> {
    // Both timestamps are the same instant on creation.
    let now    = Utc::now();
    let at_str = encode_dt(now);
    let name   = input.name.clone();
    let phone  = input.phone.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (name, phone, created_at, updated_at)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![name, phone, at_str, at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Contact {
      id,
      name:       input.name,
      phone:      input.phone,
      created_at: now,
      updated_at: now,
    })
  }

  async fn save(&self, mut contact: Contact) -> Result<Contact> {
    contact.updated_at = Utc::now();

    let id     = contact.id;
    let name   = contact.name.clone();
    let phone  = contact.phone.clone();
    let at_str = encode_dt(contact.updated_at);

    let rows = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE contacts SET name = ?1, phone = ?2, updated_at = ?3
           WHERE id = ?4",
          rusqlite::params![name, phone, at_str, id],
        )?)
      })
      .await?;

    if rows == 0 {
      return Err(Error::ContactNotFound(id));
    }
    Ok(contact)
  }

  async fn remove(&self, id: i64) -> Result<bool> {
    let rows = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM contacts WHERE id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await?;

    Ok(rows > 0)
  }
}
