// demos/etcdadm_app/src/initsystem/dry_run.rs

use crate::errors::Result;
use crate::initsystem::InitSystem;
use parking_lot::Mutex;
use std::collections::HashSet;
use tracing::info;

/// Logs and records what would have been done instead of touching the host.
///
/// A service counts as active once `enable_and_start` was called on this
/// instance, until `disable_and_stop` is called.
#[derive(Debug, Default)]
pub struct DryRun {
  actions: Mutex<Vec<String>>,
  active: Mutex<HashSet<String>>,
}

impl DryRun {
  /// Recorded actions, oldest first.
  pub fn actions(&self) -> Vec<String> {
    self.actions.lock().clone()
  }

  fn record(&self, action: String) {
    info!(action = %action, "[dry-run] init system");
    self.actions.lock().push(action);
  }
}

impl InitSystem for DryRun {
  fn daemon_reload(&self) -> Result<()> {
    self.record("daemon-reload".to_string());
    Ok(())
  }

  fn enable_and_start(&self, service: &str) -> Result<()> {
    self.record(format!("enable --now {}", service));
    self.active.lock().insert(service.to_string());
    Ok(())
  }

  fn disable_and_stop(&self, service: &str) -> Result<()> {
    self.record(format!("disable --now {}", service));
    self.active.lock().remove(service);
    Ok(())
  }

  fn is_active(&self, service: &str) -> Result<bool> {
    Ok(self.active.lock().contains(service))
  }
}
