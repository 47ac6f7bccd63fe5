// demos/etcdadm_app/src/initsystem/mod.rs

//! Init-system abstraction used by the service phases.

pub mod dry_run;
pub mod systemd;

use crate::config::{EtcdAdmConfig, InitSystemKind};
use crate::errors::Result;
use std::sync::Arc;

pub use dry_run::DryRun;
pub use systemd::Systemd;

/// Manages a system service.
pub trait InitSystem: Send + Sync + std::fmt::Debug {
  /// Reloads unit definitions after unit files changed.
  fn daemon_reload(&self) -> Result<()>;

  fn enable_and_start(&self, service: &str) -> Result<()>;

  /// Stops and disables the service.
  fn disable_and_stop(&self, service: &str) -> Result<()>;

  fn is_active(&self, service: &str) -> Result<bool>;
}

pub fn from_config(config: &EtcdAdmConfig) -> Result<Arc<dyn InitSystem>> {
  match config.init_system {
    InitSystemKind::Systemd => Ok(Arc::new(Systemd::detect()?)),
    InitSystemKind::DryRun => Ok(Arc::new(DryRun::default())),
  }
}
