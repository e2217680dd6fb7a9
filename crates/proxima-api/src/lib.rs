//! JSON REST API for Proxima.
//!
//! Exposes an axum [`Router`] backed by any
//! [`proxima_core::registry::ActorRegistry`]. Auth, TLS, and transport
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", proxima_api::api_router(state))
//! ```

pub mod actors;
pub mod broadcast;
pub mod error;
pub mod events;
pub mod extract;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post, put},
};
use proxima_core::registry::ActorRegistry;
use proxima_gateway::{Dispatcher, broadcast::BroadcastConfig};

pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<R> {
  pub dispatcher: Arc<Dispatcher<R>>,
  pub broadcast:  Arc<BroadcastConfig>,
}

impl<R> Clone for AppState<R> {
  fn clone(&self) -> Self {
    Self {
      dispatcher: Arc::clone(&self.dispatcher),
      broadcast:  Arc::clone(&self.broadcast),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<R>(state: AppState<R>) -> Router<()>
where
  R: ActorRegistry + 'static,
{
  Router::new()
    // Actors
    .route("/actors", get(actors::list::<R>).post(actors::register::<R>))
    .route("/actors/{role}/{id}", get(actors::get_one::<R>))
    .route("/actors/{role}/{id}/contact", put(actors::set_contact::<R>))
    .route("/actors/{role}/{id}/location", put(actors::set_location::<R>))
    .route("/actors/{role}/{id}/nearby", get(actors::nearby::<R>))
    // Gateway events
    .route("/events", post(events::handler::<R>))
    // Announcements
    .route("/recipients", get(broadcast::recipients::<R>))
    .route("/broadcast", post(broadcast::plan::<R>))
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
