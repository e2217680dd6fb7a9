//! Handlers for `/actors` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/actors` | Optional `?role=requester\|provider` |
//! | `POST` | `/actors` | `{"id":"..","role":".."}`; 201 new, 200 existing |
//! | `GET`  | `/actors/:role/:id` | 404 if not registered under `role` |
//! | `PUT`  | `/actors/:role/:id/contact` | Body: `{"contact":"..."}`; 204 |
//! | `PUT`  | `/actors/:role/:id/location` | Coordinate; returns matches |
//! | `GET`  | `/actors/:role/:id/nearby` | 422 if no location yet |

use axum::{
  Json,
  extract::{Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use proxima_core::{
  actor::{ActorId, ActorRecord, Coordinate, Role},
  matcher::MatchResult,
  registry::ActorRegistry,
};
use serde::Deserialize;

use crate::{
  AppState,
  error::ApiError,
  extract::{ApiJson, ApiPath},
};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub role: Option<Role>,
}

/// `GET /actors[?role=<role>]`
pub async fn list<R>(
  State(state): State<AppState<R>>,
  Query(params): Query<ListParams>,
) -> Json<Vec<ActorRecord>>
where
  R: ActorRegistry + 'static,
{
  let registry = state.dispatcher.registry();
  let records = match params.role {
    Some(role) => registry.enumerate(role),
    None => Role::ALL
      .into_iter()
      .flat_map(|role| registry.enumerate(role))
      .collect(),
  };
  Json(records)
}

// ─── Register ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RegisterBody {
  pub id:   ActorId,
  pub role: Role,
}

/// `POST /actors` — body: `{"id":"42","role":"requester"}`
///
/// Registration is idempotent: repeating it answers 200 with the stored
/// record. Two identical requests racing may both see 201.
pub async fn register<R>(
  State(state): State<AppState<R>>,
  ApiJson(body): ApiJson<RegisterBody>,
) -> Result<impl IntoResponse, ApiError>
where
  R: ActorRegistry + 'static,
{
  let existed = state
    .dispatcher
    .registry()
    .get(&body.id, body.role)
    .is_some();
  let record = state.dispatcher.register(&body.id, body.role)?;
  let status = if existed {
    StatusCode::OK
  } else {
    StatusCode::CREATED
  };
  Ok((status, Json(record)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /actors/:role/:id`
pub async fn get_one<R>(
  State(state): State<AppState<R>>,
  ApiPath((role, id)): ApiPath<(Role, ActorId)>,
) -> Result<Json<ActorRecord>, ApiError>
where
  R: ActorRegistry + 'static,
{
  let record = state
    .dispatcher
    .registry()
    .get(&id, role)
    .ok_or_else(|| ApiError::NotFound(format!("{role} {id} not found")))?;
  Ok(Json(record))
}

// ─── Contact ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ContactBody {
  pub contact: String,
}

/// `PUT /actors/:role/:id/contact` — body: `{"contact":"+998901234567"}`
pub async fn set_contact<R>(
  State(state): State<AppState<R>>,
  ApiPath((role, id)): ApiPath<(Role, ActorId)>,
  ApiJson(body): ApiJson<ContactBody>,
) -> Result<StatusCode, ApiError>
where
  R: ActorRegistry + 'static,
{
  state.dispatcher.set_contact(&id, role, body.contact)?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Location ─────────────────────────────────────────────────────────────────

/// `PUT /actors/:role/:id/location` — body: `{"latitude":..,"longitude":..}`
///
/// Stores the location, then answers with the counterparts now in range.
pub async fn set_location<R>(
  State(state): State<AppState<R>>,
  ApiPath((role, id)): ApiPath<(Role, ActorId)>,
  ApiJson(coordinate): ApiJson<Coordinate>,
) -> Result<Json<Vec<MatchResult>>, ApiError>
where
  R: ActorRegistry + 'static,
{
  let matches = state.dispatcher.update_location(&id, role, coordinate)?;
  Ok(Json(matches))
}

// ─── Nearby ───────────────────────────────────────────────────────────────────

/// `GET /actors/:role/:id/nearby`
pub async fn nearby<R>(
  State(state): State<AppState<R>>,
  ApiPath((role, id)): ApiPath<(Role, ActorId)>,
) -> Result<Json<Vec<MatchResult>>, ApiError>
where
  R: ActorRegistry + 'static,
{
  Ok(Json(state.dispatcher.nearby(&id, role)?))
}
