//! Error type for `proxima-gateway`.

use proxima_core::actor::ActorId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
  #[error(transparent)]
  Core(#[from] proxima_core::Error),

  #[error("unknown role: {0:?}")]
  UnknownRole(String),

  #[error("contact is empty")]
  EmptyContact,

  #[error("actor {0} may not send announcements")]
  NotAdmin(ActorId),

  #[error("announcement text is empty")]
  EmptyBroadcast,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
