//! Normalized inbound events.
//!
//! Whatever the transport (chat bot, HTTP, test harness), an incoming message
//! is reduced to one of these before it reaches the registry. Raw button text
//! never travels further than [`parse_role`].

use proxima_core::actor::{ActorId, Coordinate, Role};
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::{Error, Result};

/// One event from one actor.
///
/// On the wire the kind is flattened next to the actor fields, e.g.
/// `{"actor_id":"42","role":"requester","kind":"role_selected"}`.
/// `role` accepts the raw text of a role-selection button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundEvent {
  pub actor_id: ActorId,
  #[serde(deserialize_with = "role_from_text")]
  pub role:     Role,
  #[serde(flatten)]
  pub kind:     EventKind,
}

/// What happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventKind {
  /// The actor picked a role; creates their record.
  RoleSelected,
  /// The actor shared a phone number or similar contact string.
  ContactShared { contact: String },
  /// The actor shared their current position.
  LocationShared { coordinate: Coordinate },
}

impl InboundEvent {
  pub fn role_selected(actor_id: impl Into<ActorId>, role: Role) -> Self {
    Self {
      actor_id: actor_id.into(),
      role,
      kind: EventKind::RoleSelected,
    }
  }

  pub fn contact_shared(
    actor_id: impl Into<ActorId>,
    role: Role,
    contact: impl Into<String>,
  ) -> Self {
    Self {
      actor_id: actor_id.into(),
      role,
      kind: EventKind::ContactShared {
        contact: contact.into(),
      },
    }
  }

  pub fn location_shared(
    actor_id: impl Into<ActorId>,
    role: Role,
    coordinate: Coordinate,
  ) -> Self {
    Self {
      actor_id: actor_id.into(),
      role,
      kind: EventKind::LocationShared { coordinate },
    }
  }
}

/// Map free text from a role-selection button onto a [`Role`].
///
/// Leading/trailing whitespace and ASCII case are ignored.
pub fn parse_role(text: &str) -> Result<Role> {
  let trimmed = text.trim();
  trimmed
    .parse()
    .map_err(|_| Error::UnknownRole(trimmed.to_owned()))
}

fn role_from_text<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
  D: Deserializer<'de>,
{
  let text = String::deserialize(deserializer)?;
  parse_role(&text).map_err(de::Error::custom)
}
