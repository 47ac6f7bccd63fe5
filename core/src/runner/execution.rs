// phaseflow/src/runner/execution.rs

//! Contains `Runner::run()`, `Runner::run_phases()` and `Runner::run_phase()`,
//! responsible for building the phase input and executing phases in order.

use crate::core::phase::SharedPhase;
use crate::error::{PhaseflowError, PhaseflowResult};
use crate::runner::definition::Runner;
use tracing::{event, instrument, span, Level};

impl<I, A> Runner<I, A> {
  /// Runs the whole canonical pipeline.
  pub fn run(&self, args: &A) -> PhaseflowResult<()> {
    self.run_phases(args, &self.phases)
  }

  /// Runs the phase named `name` after its prerequisites.
  ///
  /// An unknown name fails before the initializer is called.
  pub fn run_phase(&self, args: &A, name: &str) -> PhaseflowResult<()> {
    let plan = self.plan_for(name)?;
    self.run_phases(args, plan.phases())
  }

  /// Builds a fresh phase input and runs `phases` in order against it.
  ///
  /// - An initializer error is returned as `PhaseflowError::Init` and no phase runs.
  /// - The first failing phase stops the run. Its error comes back as
  ///   `PhaseflowError::PhaseFailed`, naming the phase and keeping the original
  ///   error as its source. Later phases are never attempted.
  #[instrument(
    name = "Runner::run_phases",
    skip_all,
    fields(
      phase_input_type = %std::any::type_name::<I>(),
      num_phases = phases.len(),
    ),
    err(Display)
  )]
  pub fn run_phases(&self, args: &A, phases: &[SharedPhase<I>]) -> PhaseflowResult<()> {
    event!(Level::DEBUG, "Building phase input.");
    let input = (self.init)(args).map_err(PhaseflowError::Init)?;

    for (phase_idx, phase) in phases.iter().enumerate() {
      let phase_span = span!(
        Level::INFO,
        "phase_execution",
        phase_name = phase.name(),
        phase_index = phase_idx
      );
      let _phase_span_guard = phase_span.enter();
      event!(Level::DEBUG, "Running phase.");

      if let Err(source) = phase.run(&input) {
        event!(Level::ERROR, error = %source, "Phase failed.");
        return Err(PhaseflowError::PhaseFailed {
          phase: phase.name().to_string(),
          source,
        });
      }
      event!(Level::DEBUG, "Phase finished successfully.");
    }

    event!(Level::DEBUG, "All phases completed successfully.");
    Ok(())
  }
}
