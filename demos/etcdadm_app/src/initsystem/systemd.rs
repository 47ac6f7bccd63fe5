// demos/etcdadm_app/src/initsystem/systemd.rs

use crate::errors::{AppError, Result};
use crate::initsystem::InitSystem;
use std::path::PathBuf;
use std::process::{Command, Output};
use tracing::{event, Level};

#[derive(Debug, Clone)]
pub struct Systemd {
  systemctl: PathBuf,
}

impl Systemd {
  /// Locates `systemctl` on `PATH`.
  pub fn detect() -> Result<Self> {
    let systemctl = which::which("systemctl")
      .map_err(|e| AppError::InitSystem(format!("systemctl not found: {}", e)))?;
    Ok(Self { systemctl })
  }

  fn systemctl(&self, args: &[&str]) -> Result<Output> {
    event!(Level::DEBUG, args = ?args, "Running systemctl.");
    Command::new(&self.systemctl)
      .args(args)
      .output()
      .map_err(|e| AppError::InitSystem(format!("failed to run systemctl {}: {}", args.join(" "), e)))
  }

  fn systemctl_checked(&self, args: &[&str]) -> Result<()> {
    let output = self.systemctl(args)?;
    if !output.status.success() {
      return Err(AppError::InitSystem(format!(
        "systemctl {} failed ({}): {}",
        args.join(" "),
        output.status,
        String::from_utf8_lossy(&output.stderr).trim()
      )));
    }
    Ok(())
  }
}

impl InitSystem for Systemd {
  fn daemon_reload(&self) -> Result<()> {
    self.systemctl_checked(&["daemon-reload"])
  }

  fn enable_and_start(&self, service: &str) -> Result<()> {
    self.systemctl_checked(&["enable", "--now", service])
  }

  fn disable_and_stop(&self, service: &str) -> Result<()> {
    self.systemctl_checked(&["disable", "--now", service])
  }

  fn is_active(&self, service: &str) -> Result<bool> {
    // is-active exits non-zero for inactive units, which is not an error here.
    let output = self.systemctl(&["is-active", "--quiet", service])?;
    Ok(output.status.success())
  }
}
