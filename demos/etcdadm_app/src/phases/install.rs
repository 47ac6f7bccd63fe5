// demos/etcdadm_app/src/phases/install.rs

use crate::errors::{AppError, Result};
use crate::phases::Input;
use phaseflow::{SharedPhase, SinglePhase};
use std::fs;
use std::path::Path;
use tracing::{event, Level};

pub const BINARIES: [&str; 2] = ["etcd", "etcdctl"];

pub fn phase() -> SharedPhase<Input> {
  SinglePhase::new("install", |input: &Input| {
    let config = &input.config;
    event!(Level::INFO, version = %config.version, release_dir = %config.release_dir.display(), "Installing etcd.");
    install_binaries(&config.release_dir, &config.install_dir)?;
    Ok(())
  })
  .with_about("Install etcd binaries from the release directory")
  .shared()
}

/// Copies the release binaries into `install_dir`. Binaries already present
/// with the same size are left alone.
pub fn install_binaries(release_dir: &Path, install_dir: &Path) -> Result<()> {
  fs::create_dir_all(install_dir).map_err(AppError::io(install_dir))?;

  for binary in BINARIES {
    let source = release_dir.join(binary);
    let target = install_dir.join(binary);

    let source_len = fs::metadata(&source).map_err(AppError::io(&source))?.len();
    if let Ok(existing) = fs::metadata(&target) {
      if existing.len() == source_len {
        event!(Level::INFO, binary, path = %target.display(), "Already installed, skipping.");
        continue;
      }
    }

    fs::copy(&source, &target).map_err(AppError::io(&target))?;
    make_executable(&target)?;
    event!(Level::INFO, binary, path = %target.display(), "Installed.");
  }
  Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
  use std::os::unix::fs::PermissionsExt;
  fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(AppError::io(path))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
  Ok(())
}
