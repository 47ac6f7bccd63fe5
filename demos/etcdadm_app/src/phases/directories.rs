// demos/etcdadm_app/src/phases/directories.rs

use crate::errors::AppError;
use crate::phases::Input;
use phaseflow::{SharedPhase, SinglePhase};
use std::fs;

pub fn phase() -> SharedPhase<Input> {
  SinglePhase::new("directories", |input: &Input| {
    for dir in [&input.config.data_dir, &input.config.certs_dir] {
      fs::create_dir_all(dir).map_err(AppError::io(dir))?;
      tracing::debug!(dir = %dir.display(), "Directory ready.");
    }
    Ok(())
  })
  .with_about("Create the etcd data and certificate directories")
  .shared()
}
