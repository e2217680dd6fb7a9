//! Proxima server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), builds an
//! in-memory actor registry, and serves the JSON API over HTTP. All state is
//! lost on exit.

mod settings;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use proxima_api::AppState;
use proxima_core::matcher::MatchConfig;
use proxima_gateway::{Dispatcher, broadcast::BroadcastConfig};
use proxima_registry_memory::MemoryRegistry;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::settings::ServerConfig;

#[derive(Parser)]
#[command(author, version, about = "Proxima proximity matching server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml", env = "PROXIMA_CONFIG")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let server_cfg = ServerConfig::load(&cli.config)?;

  let match_cfg = MatchConfig::new(server_cfg.radius_km)
    .context("invalid radius_km in configuration")?;
  if server_cfg.admin_id.is_none() {
    tracing::warn!("no admin_id configured; announcements are disabled");
  }

  let state = AppState {
    dispatcher: Arc::new(Dispatcher::new(
      Arc::new(MemoryRegistry::new()),
      match_cfg,
    )),
    broadcast:  Arc::new(BroadcastConfig {
      admin_id: server_cfg.admin_id.clone(),
    }),
  };

  let app = proxima_api::api_router(state).layer(TraceLayer::new_for_http());
  let address = server_cfg.address();

  tracing::info!(
    radius_km = match_cfg.radius_km,
    "Listening on http://{address}"
  );
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
