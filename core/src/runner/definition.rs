// phaseflow/src/runner/definition.rs

//! Contains the `Runner<I, A>` struct definition and methods for registering
//! and looking up phases.

use crate::core::phase::SharedPhase;
use crate::core::plan::ExecutionPlan;
use crate::error::{PhaseflowError, PhaseflowResult};
use tracing::{event, Level};

/// Builds the phase input for one run from the invocation arguments `A`.
pub type Initializer<I, A> = Box<dyn Fn(&A) -> anyhow::Result<I> + Send + Sync>;

/// An ordered pipeline of phases plus the initializer that builds their input.
///
/// `I` is the phase input handed to every phase of a run. `A` is whatever the
/// outer command surface passes in when it asks for a run (`()` when nothing,
/// `clap::ArgMatches` for the clap surface).
///
/// The runner keeps no state between runs: each `run`/`run_phases` call builds
/// a fresh input through the initializer and drops it when the call returns.
pub struct Runner<I, A = ()> {
  /// Canonical pipeline order.
  pub(crate) phases: Vec<SharedPhase<I>>,
  pub(crate) init: Initializer<I, A>,
}

impl<I, A> Runner<I, A> {
  pub fn new<F>(init: F) -> Self
  where
    F: Fn(&A) -> anyhow::Result<I> + Send + Sync + 'static,
  {
    Self {
      phases: Vec::new(),
      init: Box::new(init),
    }
  }

  /// Appends phases to the canonical pipeline.
  ///
  /// Names are not checked for uniqueness here; see `duplicate_phase_names`.
  pub fn register_phases<P>(&mut self, phases: P)
  where
    P: IntoIterator<Item = SharedPhase<I>>,
  {
    for phase in phases {
      event!(Level::DEBUG, phase = phase.name(), "Registering phase.");
      self.phases.push(phase);
    }
  }

  pub fn phases(&self) -> &[SharedPhase<I>] {
    &self.phases
  }

  pub fn find_phase(&self, name: &str) -> Option<&SharedPhase<I>> {
    self.phases.iter().find(|p| p.name() == name)
  }

  /// Names registered more than once, in order of first occurrence.
  pub fn duplicate_phase_names(&self) -> Vec<String> {
    let mut duplicates: Vec<String> = Vec::new();
    for (idx, phase) in self.phases.iter().enumerate() {
      let name = phase.name();
      let seen_before = self.phases[..idx].iter().any(|p| p.name() == name);
      if seen_before && !duplicates.iter().any(|d| d == name) {
        duplicates.push(name.to_string());
      }
    }
    duplicates
  }

  /// The plan a single-phase invocation of `name` would execute.
  pub fn plan_for(&self, name: &str) -> PhaseflowResult<ExecutionPlan<I>> {
    self
      .find_phase(name)
      .map(ExecutionPlan::for_phase)
      .ok_or_else(|| PhaseflowError::UnknownPhase { name: name.to_string() })
  }
}

impl<I, A> std::fmt::Debug for Runner<I, A> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let phases: Vec<&str> = self.phases.iter().map(|p| p.name()).collect();
    f.debug_struct("Runner").field("phases", &phases).finish()
  }
}
