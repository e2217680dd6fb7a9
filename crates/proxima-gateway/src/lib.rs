//! Glue between a messaging gateway and the Proxima core.
//!
//! The gateway hands over normalized [`event::InboundEvent`]s; the
//! [`dispatch::Dispatcher`] applies them to the registry and runs the
//! follow-up proximity query. [`render`] turns outcomes into reply text and
//! [`broadcast`] drives admin announcements through an outbound
//! [`broadcast::Notifier`].

pub mod broadcast;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod render;

pub use dispatch::{Dispatcher, Outcome};
pub use error::{Error, Result};
