//! Handlers for announcement endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/recipients` | Every registered actor id |
//! | `POST` | `/broadcast` | `{"sender":"..","text":".."}`; admin only |
//!
//! `/broadcast` only validates and plans; the caller's transport performs the
//! fan-out.

use axum::{Json, extract::State};
use proxima_core::{actor::ActorId, registry::ActorRegistry};
use proxima_gateway::broadcast::{self, BroadcastPlan};
use serde::Deserialize;

use crate::{AppState, error::ApiError, extract::ApiJson};

/// `GET /recipients`
pub async fn recipients<R>(
  State(state): State<AppState<R>>,
) -> Json<Vec<ActorId>>
where
  R: ActorRegistry + 'static,
{
  Json(state.dispatcher.recipients())
}

#[derive(Debug, Deserialize)]
pub struct BroadcastBody {
  pub sender: ActorId,
  pub text:   String,
}

/// `POST /broadcast` — 403 unless `sender` is the configured admin.
pub async fn plan<R>(
  State(state): State<AppState<R>>,
  ApiJson(body): ApiJson<BroadcastBody>,
) -> Result<Json<BroadcastPlan>, ApiError>
where
  R: ActorRegistry + 'static,
{
  let plan = broadcast::prepare(
    state.dispatcher.registry(),
    &state.broadcast,
    &body.sender,
    &body.text,
  )?;
  tracing::info!(recipients = plan.recipients.len(), "announcement planned");
  Ok(Json(plan))
}
