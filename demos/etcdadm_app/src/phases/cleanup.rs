// demos/etcdadm_app/src/phases/cleanup.rs

use crate::errors::AppError;
use crate::phases::Input;
use phaseflow::{SharedPhase, SinglePhase};
use std::fs;
use tracing::info;

pub fn phase(prerequisites: Vec<SharedPhase<Input>>) -> SharedPhase<Input> {
  SinglePhase::new("remove-files", |input: &Input| {
    let config = &input.config;
    for file in [&config.env_file, &config.unit_file] {
      if file.exists() {
        fs::remove_file(file).map_err(AppError::io(file))?;
        info!(file = %file.display(), "Removed.");
      }
    }
    if config.data_dir.exists() {
      fs::remove_dir_all(&config.data_dir).map_err(AppError::io(&config.data_dir))?;
      info!(dir = %config.data_dir.display(), "Removed data directory.");
    }
    // The unit file is gone.
    input.init_system.daemon_reload()?;
    Ok(())
  })
  .with_prerequisites(prerequisites)
  .with_about("Remove the etcd unit, environment file and data directory")
  .shared()
}
