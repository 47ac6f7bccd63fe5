// phaseflow/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhaseflowError {
  /// The initializer could not build the phase input. Display and source are
  /// the initializer's own, so callers see its error unchanged.
  #[error(transparent)]
  Init(AnyhowError),

  /// A phase body failed. The message is prefixed with the phase name and the
  /// original error stays reachable through `source()`.
  #[error("[{phase}] {source:#}")]
  PhaseFailed {
    phase: String,
    #[source]
    source: AnyhowError,
  },

  /// A single-phase run named a phase the runner doesn't have.
  #[error("Phase not found: {name}")]
  UnknownPhase { name: String },

  /// The invoked command path is unknown or ends on a node without an action.
  #[error("No runnable action for command '{command}'")]
  NoAction { command: String },
}

impl PhaseflowError {
  /// Name of the phase that failed, if this error came from a phase body.
  pub fn failed_phase(&self) -> Option<&str> {
    match self {
      PhaseflowError::PhaseFailed { phase, .. } => Some(phase.as_str()),
      _ => None,
    }
  }
}

pub type PhaseflowResult<T, E = PhaseflowError> = std::result::Result<T, E>;
