//! Applies inbound events to a registry.
//!
//! | Event | Registry call | Follow-up |
//! |-------|---------------|-----------|
//! | `RoleSelected` | `register` | — |
//! | `ContactShared` | `set_contact` | — |
//! | `LocationShared` | `set_location` | one `find_nearby` (counterparts) |

use std::sync::Arc;

use proxima_core::{
  Error as CoreError,
  actor::{ActorId, ActorRecord, Coordinate, Role},
  matcher::{MatchConfig, MatchResult, find_nearby},
  registry::ActorRegistry,
};
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result, broadcast,
  event::{EventKind, InboundEvent},
};

/// The result of handling one event, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
  Registered {
    record: ActorRecord,
  },
  ContactSaved,
  /// Counterparts within range after a location update, nearest first.
  /// An empty list means nobody is close, not that the query failed.
  Nearby {
    counterpart: Role,
    matches:     Vec<MatchResult>,
  },
}

/// Routes events into an [`ActorRegistry`] and runs proximity queries.
///
/// Cheap to share: wrap in an `Arc` and hand to every connection handler.
#[derive(Debug)]
pub struct Dispatcher<R> {
  registry: Arc<R>,
  config:   MatchConfig,
}

impl<R: ActorRegistry> Dispatcher<R> {
  pub fn new(registry: Arc<R>, config: MatchConfig) -> Self {
    Self { registry, config }
  }

  pub fn registry(&self) -> &R { &self.registry }

  pub fn config(&self) -> MatchConfig { self.config }

  /// Apply `event` and return what the actor should be told.
  pub fn handle(&self, event: InboundEvent) -> Result<Outcome> {
    let InboundEvent {
      actor_id,
      role,
      kind,
    } = event;

    match kind {
      EventKind::RoleSelected => Ok(Outcome::Registered {
        record: self.register(&actor_id, role)?,
      }),
      EventKind::ContactShared { contact } => {
        self.set_contact(&actor_id, role, contact)?;
        Ok(Outcome::ContactSaved)
      }
      EventKind::LocationShared { coordinate } => Ok(Outcome::Nearby {
        counterpart: role.counterpart(),
        matches:     self.update_location(&actor_id, role, coordinate)?,
      }),
    }
  }

  pub fn register(&self, id: &ActorId, role: Role) -> Result<ActorRecord> {
    Ok(self.registry.register(id, role)?)
  }

  /// Store `contact` with surrounding whitespace removed.
  pub fn set_contact(
    &self,
    id: &ActorId,
    role: Role,
    contact: String,
  ) -> Result<()> {
    let contact = contact.trim();
    if contact.is_empty() {
      return Err(Error::EmptyContact);
    }
    Ok(self.registry.set_contact(id, role, contact.to_owned())?)
  }

  /// Store a new location, then run the actor's proximity query once.
  pub fn update_location(
    &self,
    id: &ActorId,
    role: Role,
    coordinate: Coordinate,
  ) -> Result<Vec<MatchResult>> {
    self.registry.set_location(id, role, coordinate)?;
    let matches = self.nearby(id, role)?;
    tracing::info!(
      %id,
      %role,
      found = matches.len(),
      "location updated, proximity query done"
    );
    Ok(matches)
  }

  /// Re-run the proximity query for an actor without changing its state.
  pub fn nearby(&self, id: &ActorId, role: Role) -> Result<Vec<MatchResult>> {
    let record =
      self
        .registry
        .get(id, role)
        .ok_or_else(|| CoreError::NotRegistered {
          id: id.clone(),
          role,
        })?;
    let counterpart = role.counterpart();
    let snapshot = self.registry.enumerate(counterpart);
    Ok(find_nearby(
      &record,
      counterpart,
      self.config.radius_km,
      &snapshot,
    )?)
  }

  /// Every known actor id, requesters first.
  pub fn recipients(&self) -> Vec<ActorId> {
    broadcast::recipients(self.registry.as_ref())
  }
}
