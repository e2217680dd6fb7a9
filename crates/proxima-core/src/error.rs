//! Error types for `proxima-core`.

use thiserror::Error;

use crate::actor::{ActorId, Role};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
  #[error("actor {id} is not registered as a {role}")]
  NotRegistered { id: ActorId, role: Role },

  #[error("actor {id} is already registered as a {registered_as}")]
  RoleConflict { id: ActorId, registered_as: Role },

  #[error("location of actor {id} is unknown")]
  LocationUnknown { id: ActorId },

  #[error("invalid coordinate: ({latitude}, {longitude})")]
  InvalidCoordinate { latitude: f64, longitude: f64 },

  #[error("search radius must be a positive number of kilometres, got {0}")]
  InvalidRadius(f64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
