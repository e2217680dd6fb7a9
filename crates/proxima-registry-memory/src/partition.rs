//! One role's worth of actor records.

use std::collections::HashMap;

use proxima_core::actor::{ActorId, ActorRecord};

/// Records in registration order, with an id → position index.
///
/// Records are never removed, so positions stay valid for the life of the
/// partition.
#[derive(Debug, Default)]
pub(crate) struct Partition {
  index:   HashMap<ActorId, usize>,
  records: Vec<ActorRecord>,
}

impl Partition {
  pub(crate) fn contains(&self, id: &ActorId) -> bool {
    self.index.contains_key(id)
  }

  pub(crate) fn get(&self, id: &ActorId) -> Option<&ActorRecord> {
    self.index.get(id).map(|&i| &self.records[i])
  }

  pub(crate) fn get_mut(&mut self, id: &ActorId) -> Option<&mut ActorRecord> {
    self.index.get(id).map(|&i| &mut self.records[i])
  }

  /// Append `record`. The caller has already checked that its id is absent.
  pub(crate) fn insert(&mut self, record: ActorRecord) -> &ActorRecord {
    let position = self.records.len();
    self.index.insert(record.id.clone(), position);
    self.records.push(record);
    &self.records[position]
  }

  pub(crate) fn records(&self) -> &[ActorRecord] { &self.records }

  pub(crate) fn len(&self) -> usize { self.records.len() }
}
