//! Core types, the registry trait, and the proximity matcher for Proxima.
//!
//! This crate is deliberately free of HTTP, async, and storage dependencies.
//! Registry backends implement [`registry::ActorRegistry`]; the gateway and
//! API layers depend on that abstraction and on [`matcher::find_nearby`].

pub mod actor;
pub mod error;
pub mod geodesic;
pub mod matcher;
pub mod registry;

pub use error::{Error, Result};
