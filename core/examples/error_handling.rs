// phaseflow/examples/error_handling.rs

use phaseflow::{PhaseflowError, Runner, SinglePhase};
use tracing::{error, info};

// 1. Define a custom error type for phase bodies
#[derive(Debug, thiserror::Error)]
enum ExampleAppError {
  #[error("A custom application error occurred: {0}")]
  CustomError(String),
}

#[derive(Debug, Default)]
struct ErrorInput;

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Error Handling Example ---");

  // Scenario 1: A phase body returns a custom error
  info!("\nScenario 1: Phase returns a custom error");
  run_pipeline_with_phase_error();

  // Scenario 2: The initializer cannot build the input
  info!("\nScenario 2: Initializer error");
  run_pipeline_with_init_error();
}

fn run_pipeline_with_phase_error() {
  let mut runner = Runner::<ErrorInput>::new(|_: &()| Ok(ErrorInput));
  runner.register_phases([
    SinglePhase::new("phase_one", |_: &ErrorInput| {
      info!("Executing phase_one");
      Ok(())
    })
    .shared(),
    SinglePhase::new("phase_two_fails", |_: &ErrorInput| {
      info!("Executing phase_two_fails - this will error");
      Err(ExampleAppError::CustomError("Something went wrong in phase_two!".to_string()).into())
    })
    .shared(),
    SinglePhase::new("phase_three", |_: &ErrorInput| {
      error!("Executing phase_three (should not be reached)");
      Ok(())
    })
    .shared(),
  ]);

  match runner.run(&()) {
    Ok(()) => error!("Pipeline unexpectedly succeeded"),
    Err(e) => {
      // Prints: [phase_two_fails] A custom application error occurred: Something went wrong in phase_two!
      info!("Pipeline failed as expected: {}", e);
      if let PhaseflowError::PhaseFailed { phase, source } = &e {
        assert_eq!(phase, "phase_two_fails");
        assert!(source.downcast_ref::<ExampleAppError>().is_some());
      }
    }
  }
}

fn run_pipeline_with_init_error() {
  let mut runner = Runner::<ErrorInput>::new(|_: &()| Err(anyhow::anyhow!("init system not detected")));
  runner.register_phases([SinglePhase::new("never_runs", |_: &ErrorInput| Ok(())).shared()]);

  match runner.run(&()) {
    Err(PhaseflowError::Init(e)) => info!("Initializer failed as expected: {}", e),
    other => error!("Unexpected result: {:?}", other),
  }
}
