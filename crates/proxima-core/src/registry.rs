//! The `ActorRegistry` trait.
//!
//! The trait is implemented by registry backends (e.g.
//! `proxima-registry-memory`). Higher layers (`proxima-gateway`,
//! `proxima-api`) depend on this abstraction, not on any concrete backend.

use crate::{
  Result,
  actor::{ActorId, ActorRecord, Coordinate, Role},
};

/// Authoritative store of actor records, partitioned by [`Role`].
///
/// An identifier lives in at most one partition. Every method is synchronous
/// and non-blocking; implementations must be safe to call from many threads
/// at once and must hand out copies, never references into shared state.
pub trait ActorRegistry: Send + Sync {
  // ── Writes ────────────────────────────────────────────────────────────

  /// Register `id` under `role`.
  ///
  /// Returns the existing record unchanged if `id` is already registered
  /// under `role`, and [`Error::RoleConflict`](crate::Error::RoleConflict) if
  /// it is registered under the other role.
  fn register(&self, id: &ActorId, role: Role) -> Result<ActorRecord>;

  /// Overwrite the contact string of a registered actor.
  ///
  /// Fails with [`Error::NotRegistered`](crate::Error::NotRegistered) if
  /// there is no record for `(id, role)`.
  fn set_contact(&self, id: &ActorId, role: Role, contact: String)
  -> Result<()>;

  /// Overwrite the location of a registered actor.
  ///
  /// Fails with [`Error::NotRegistered`](crate::Error::NotRegistered) if
  /// there is no record for `(id, role)`. Once this returns, the new location
  /// is visible to every subsequent [`enumerate`](Self::enumerate).
  fn set_location(
    &self,
    id: &ActorId,
    role: Role,
    location: Coordinate,
  ) -> Result<()>;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Look up a single record.
  fn get(&self, id: &ActorId, role: Role) -> Option<ActorRecord>;

  /// Snapshot of every record in the `role` partition.
  ///
  /// Records come back in registration order, but callers must not rely on
  /// that.
  fn enumerate(&self, role: Role) -> Vec<ActorRecord>;

  /// Number of actors in the `role` partition.
  fn len(&self, role: Role) -> usize { self.enumerate(role).len() }

  /// `true` when no actor of either role is registered.
  fn is_empty(&self) -> bool { Role::ALL.iter().all(|&r| self.len(r) == 0) }
}
