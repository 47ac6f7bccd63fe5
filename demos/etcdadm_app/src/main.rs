// demos/etcdadm_app/src/main.rs

// Declare modules for the application
mod commands;
mod config;
mod errors;
mod initsystem;
mod phases;

use crate::errors::Result as AppResult;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

fn main() {
  dotenvy::dotenv().ok(); // Load .env file if present, before flags read ETCDADM_* fallbacks

  // Initialize tracing subscriber for logging (RUST_LOG overrides the default level)
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  if let Err(e) = run() {
    tracing::error!(error = %e, "etcdadm failed.");
    std::process::exit(1);
  }
}

fn run() -> AppResult<()> {
  let tree = commands::build_command_tree();
  let matches = tree.to_command().get_matches();
  tree.dispatch(&matches)?;
  Ok(())
}
