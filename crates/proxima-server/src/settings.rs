//! Runtime server configuration.
//!
//! Sources, later ones winning: built-in defaults, the TOML file, then
//! `PROXIMA_*` environment variables (e.g. `PROXIMA_RADIUS_KM=5`).

use std::path::Path;

use anyhow::Context as _;
use config::{
  Config, ConfigBuilder, Environment, File, builder::DefaultState,
};
use proxima_core::{actor::ActorId, matcher::DEFAULT_RADIUS_KM};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host:      String,
  pub port:      u16,
  /// Proximity search radius in kilometres.
  pub radius_km: f64,
  /// The only actor allowed to plan announcements; unset disables them.
  pub admin_id:  Option<ActorId>,
}

impl ServerConfig {
  /// Read `path` (if it exists) and the environment on top of the defaults.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    defaults()?
      .add_source(File::from(path).required(false))
      .add_source(Environment::with_prefix("PROXIMA"))
      .build()
      .context("failed to read configuration")?
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

fn defaults() -> anyhow::Result<ConfigBuilder<DefaultState>> {
  Ok(
    Config::builder()
      .set_default("host", "0.0.0.0")?
      .set_default("port", 8080)?
      .set_default("radius_km", DEFAULT_RADIUS_KM)?,
  )
}
