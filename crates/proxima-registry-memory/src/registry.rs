//! [`MemoryRegistry`] — the in-memory implementation of [`ActorRegistry`].

use std::sync::{
  Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard,
};

use proxima_core::{
  Error, Result,
  actor::{ActorId, ActorRecord, Coordinate, Role},
  registry::ActorRegistry,
};

use crate::partition::Partition;

// ─── Store ───────────────────────────────────────────────────────────────────

/// An actor registry held entirely in process memory.
///
/// Each role partition sits behind its own lock, so location updates for
/// requesters never wait on providers and vice versa. Cloning is cheap — all
/// clones share the same partitions.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
  inner: Arc<Partitions>,
}

#[derive(Debug, Default)]
struct Partitions {
  requesters: RwLock<Partition>,
  providers:  RwLock<Partition>,
}

impl MemoryRegistry {
  pub fn new() -> Self { Self::default() }

  fn lock(&self, role: Role) -> &RwLock<Partition> {
    match role {
      Role::Requester => &self.inner.requesters,
      Role::Provider => &self.inner.providers,
    }
  }

  // Every mutation is a single assignment or push, so a panic elsewhere can
  // never leave a half-written record behind a poisoned lock.
  fn read(&self, role: Role) -> RwLockReadGuard<'_, Partition> {
    self.lock(role).read().unwrap_or_else(PoisonError::into_inner)
  }

  fn write(&self, role: Role) -> RwLockWriteGuard<'_, Partition> {
    self.lock(role).write().unwrap_or_else(PoisonError::into_inner)
  }

  /// Apply `update` to the record for `(id, role)`.
  fn update(
    &self,
    id: &ActorId,
    role: Role,
    update: impl FnOnce(&mut ActorRecord),
  ) -> Result<()> {
    let mut partition = self.write(role);
    let record = partition.get_mut(id).ok_or_else(|| Error::NotRegistered {
      id: id.clone(),
      role,
    })?;
    update(record);
    Ok(())
  }
}

// ─── ActorRegistry impl ──────────────────────────────────────────────────────

impl ActorRegistry for MemoryRegistry {
  fn register(&self, id: &ActorId, role: Role) -> Result<ActorRecord> {
    // Both partitions are held for the conflict check and the insert. Locks
    // are always taken requester-first.
    let mut requesters = self.write(Role::Requester);
    let mut providers = self.write(Role::Provider);
    let (own, other) = match role {
      Role::Requester => (&mut *requesters, &*providers),
      Role::Provider => (&mut *providers, &*requesters),
    };

    if other.contains(id) {
      tracing::warn!(
        %id,
        requested = %role,
        "rejected registration under a second role"
      );
      return Err(Error::RoleConflict {
        id:            id.clone(),
        registered_as: role.counterpart(),
      });
    }

    if let Some(existing) = own.get(id) {
      return Ok(existing.clone());
    }

    let record = own.insert(ActorRecord::new(id.clone(), role)).clone();
    tracing::debug!(%id, %role, "registered actor");
    Ok(record)
  }

  fn set_contact(
    &self,
    id: &ActorId,
    role: Role,
    contact: String,
  ) -> Result<()> {
    self.update(id, role, |record| record.contact = Some(contact))?;
    tracing::debug!(%id, %role, "stored contact");
    Ok(())
  }

  fn set_location(
    &self,
    id: &ActorId,
    role: Role,
    location: Coordinate,
  ) -> Result<()> {
    self.update(id, role, |record| record.location = Some(location))?;
    tracing::debug!(%id, %role, %location, "stored location");
    Ok(())
  }

  fn get(&self, id: &ActorId, role: Role) -> Option<ActorRecord> {
    self.read(role).get(id).cloned()
  }

  fn enumerate(&self, role: Role) -> Vec<ActorRecord> {
    self.read(role).records().to_vec()
  }

  fn len(&self, role: Role) -> usize { self.read(role).len() }
}
