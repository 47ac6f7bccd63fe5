// demos/etcdadm_app/src/errors.rs

use phaseflow::PhaseflowError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("I/O Error on {}: {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Init System Error: {0}")]
  InitSystem(String),

  // Phase errors already read as "[<phase>] <message>", so keep them as-is.
  #[error(transparent)]
  Workflow(#[from] PhaseflowError),
}

impl AppError {
  /// For `map_err` on filesystem calls.
  pub fn io(path: &Path) -> impl FnOnce(std::io::Error) -> AppError {
    let path = path.to_path_buf();
    move |source| AppError::Io { path, source }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
