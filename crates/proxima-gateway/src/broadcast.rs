//! Admin announcements to every registered actor.
//!
//! The registry only supplies recipient ids. Delivery goes through a
//! [`Notifier`] owned by the messaging transport; a failed delivery is logged
//! and counted, and the rest of the fan-out carries on.

use std::future::Future;

use proxima_core::{
  actor::{ActorId, Role},
  registry::ActorRegistry,
};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Configuration ───────────────────────────────────────────────────────────

/// Who may send announcements. With no admin configured, nobody can.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastConfig {
  pub admin_id: Option<ActorId>,
}

// ─── Planning ────────────────────────────────────────────────────────────────

/// A validated announcement and the ids it goes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastPlan {
  pub text:       String,
  pub recipients: Vec<ActorId>,
}

/// All actor ids across both partitions: requesters, then providers.
pub fn recipients<R: ActorRegistry + ?Sized>(registry: &R) -> Vec<ActorId> {
  Role::ALL
    .into_iter()
    .flat_map(|role| registry.enumerate(role))
    .map(|record| record.id)
    .collect()
}

/// Check that `sender` is the admin and `text` is non-blank, then snapshot
/// the recipient list.
pub fn prepare<R: ActorRegistry + ?Sized>(
  registry: &R,
  config: &BroadcastConfig,
  sender: &ActorId,
  text: &str,
) -> Result<BroadcastPlan> {
  if config.admin_id.as_ref() != Some(sender) {
    return Err(Error::NotAdmin(sender.clone()));
  }
  let text = text.trim();
  if text.is_empty() {
    return Err(Error::EmptyBroadcast);
  }
  Ok(BroadcastPlan {
    text:       text.to_owned(),
    recipients: recipients(registry),
  })
}

// ─── Delivery ────────────────────────────────────────────────────────────────

/// Outbound message sink provided by the messaging transport.
pub trait Notifier: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Send `text` to a single actor.
  fn send(
    &self,
    recipient: &ActorId,
    text: &str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// Tally of one fan-out run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastReport {
  pub sent:   usize,
  pub failed: usize,
}

/// Send `plan.text` to each recipient once, in order.
pub async fn deliver<N: Notifier>(
  plan: &BroadcastPlan,
  notifier: &N,
) -> BroadcastReport {
  let mut report = BroadcastReport::default();
  for recipient in &plan.recipients {
    match notifier.send(recipient, &plan.text).await {
      Ok(()) => report.sent += 1,
      Err(e) => {
        tracing::warn!(%recipient, error = %e, "announcement delivery failed");
        report.failed += 1;
      }
    }
  }
  tracing::info!(
    sent = report.sent,
    failed = report.failed,
    "announcement fan-out finished"
  );
  report
}

#[cfg(test)]
mod tests {
  use std::{collections::HashSet, sync::Mutex};

  use proxima_registry_memory::MemoryRegistry;

  use super::*;

  #[derive(Debug, thiserror::Error)]
  #[error("chat {0} blocked the bot")]
  struct Blocked(ActorId);

  /// Records deliveries; refuses ids listed in `blocked`.
  #[derive(Default)]
  struct RecordingNotifier {
    blocked:   HashSet<ActorId>,
    delivered: Mutex<Vec<(ActorId, String)>>,
  }

  impl Notifier for RecordingNotifier {
    type Error = Blocked;

    async fn send(
      &self,
      recipient: &ActorId,
      text: &str,
    ) -> Result<(), Blocked> {
      if self.blocked.contains(recipient) {
        return Err(Blocked(recipient.clone()));
      }
      self
        .delivered
        .lock()
        .unwrap()
        .push((recipient.clone(), text.to_owned()));
      Ok(())
    }
  }

  fn registry() -> MemoryRegistry {
    let r = MemoryRegistry::new();
    r.register(&ActorId::from("r1"), Role::Requester).unwrap();
    r.register(&ActorId::from("p1"), Role::Provider).unwrap();
    r.register(&ActorId::from("r2"), Role::Requester).unwrap();
    r
  }

  fn admin() -> BroadcastConfig {
    BroadcastConfig {
      admin_id: Some(ActorId::from("admin")),
    }
  }

  #[test]
  fn plan_lists_every_actor_once() {
    let plan =
      prepare(&registry(), &admin(), &ActorId::from("admin"), "  Hello  ")
        .unwrap();
    assert_eq!(plan.text, "Hello");
    assert_eq!(plan.recipients, [
      ActorId::from("r1"),
      ActorId::from("r2"),
      ActorId::from("p1"),
    ]);
  }

  #[test]
  fn only_the_admin_may_broadcast() {
    let err =
      prepare(&registry(), &admin(), &ActorId::from("r1"), "Hi").unwrap_err();
    assert_eq!(err, Error::NotAdmin(ActorId::from("r1")));

    let err = prepare(
      &registry(),
      &BroadcastConfig::default(),
      &ActorId::from("admin"),
      "Hi",
    )
    .unwrap_err();
    assert!(matches!(err, Error::NotAdmin(_)));
  }

  #[test]
  fn blank_text_is_rejected() {
    let err = prepare(&registry(), &admin(), &ActorId::from("admin"), " \n ")
      .unwrap_err();
    assert_eq!(err, Error::EmptyBroadcast);
  }

  #[tokio::test]
  async fn failed_deliveries_are_counted_not_fatal() {
    let plan =
      prepare(&registry(), &admin(), &ActorId::from("admin"), "Promo").unwrap();
    let notifier = RecordingNotifier {
      blocked: HashSet::from([ActorId::from("r2")]),
      ..Default::default()
    };

    let report = deliver(&plan, &notifier).await;
    assert_eq!(report, BroadcastReport { sent: 2, failed: 1 });

    let delivered = notifier.delivered.lock().unwrap();
    let ids: Vec<_> = delivered.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids, ["r1", "p1"]);
    assert!(delivered.iter().all(|(_, text)| text == "Promo"));
  }

  #[tokio::test]
  async fn empty_registry_sends_nothing() {
    let plan = prepare(
      &MemoryRegistry::new(),
      &admin(),
      &ActorId::from("admin"),
      "Anyone?",
    )
    .unwrap();
    let report = deliver(&plan, &RecordingNotifier::default()).await;
    assert_eq!(report, BroadcastReport::default());
  }
}
