//! Handler for `POST /events` — the entry point for messaging gateways.
//!
//! Accepts a normalized [`InboundEvent`] and answers with the structured
//! outcome plus the reply text the gateway should relay to the actor. Failed
//! events answer with the mapped status and both an `error` and a `reply`.

use axum::{
  Json,
  extract::State,
  response::{IntoResponse, Response},
};
use proxima_core::registry::ActorRegistry;
use proxima_gateway::{
  Error as GatewayError, Outcome, event::InboundEvent, render,
};
use serde::Serialize;
use serde_json::json;

use crate::{AppState, error::ApiError, extract::ApiJson};

#[derive(Debug, Serialize)]
pub struct EventReply {
  #[serde(flatten)]
  pub outcome: Outcome,
  /// Markdown text for the actor.
  pub reply:   String,
}

/// A gateway error together with the text the actor should see.
#[derive(Debug)]
pub struct EventError(pub GatewayError);

impl IntoResponse for EventError {
  fn into_response(self) -> Response {
    let reply = render::error_message(&self.0);
    let error = ApiError::from(self.0);
    let body = Json(json!({ "error": error.message(), "reply": reply }));
    (error.status(), body).into_response()
  }
}

/// `POST /events` — body: [`InboundEvent`]
pub async fn handler<R>(
  State(state): State<AppState<R>>,
  ApiJson(event): ApiJson<InboundEvent>,
) -> Result<Json<EventReply>, EventError>
where
  R: ActorRegistry + 'static,
{
  let outcome = state.dispatcher.handle(event).map_err(EventError)?;
  let reply = render::outcome_message(&outcome);
  Ok(Json(EventReply { outcome, reply }))
}
