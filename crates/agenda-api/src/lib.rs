//! JSON REST API for agenda.
//!
//! Exposes an axum [`Router`] backed by any [`agenda_core::store::ContactStore`].
//! CORS, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! axum::serve(listener, agenda_api::api_router(store.clone())).await?;
//! ```

pub mod contacts;
pub mod error;
pub mod validate;

use std::sync::Arc;

use agenda_core::store::ContactStore;
use axum::{Router, routing::get};

pub use error::ApiError;


/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/contacts", get(contacts::list::<S>).post(contacts::create::<S>))
    .route(
      "/contacts/{id}",
      get(contacts::get_one::<S>)
        .patch(contacts::update::<S>)
        .delete(contacts::delete_one::<S>),
    )
    .with_state(store)
}
