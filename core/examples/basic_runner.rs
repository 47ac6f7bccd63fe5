// phaseflow/examples/basic_runner.rs

use parking_lot::Mutex;
use phaseflow::{PhaseflowResult, Runner, SinglePhase};
use tracing::info;

// 1. Define the phase input: the collaborators every phase needs.
#[derive(Debug, Default)]
struct BasicInput {
  message_log: Mutex<Vec<String>>,
}

fn main() -> PhaseflowResult<()> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Runner Example ---");

  // 2. Create a runner with an initializer that builds a fresh input per run
  let mut runner = Runner::<BasicInput>::new(|_: &()| Ok(BasicInput::default()));

  // 3. Define phases. `gamma` needs `alpha` when it is run on its own.
  let alpha = SinglePhase::new("alpha", |input: &BasicInput| {
    info!("Alpha executed");
    input.message_log.lock().push("alpha".to_string());
    Ok(())
  })
  .shared();

  let beta = SinglePhase::new("beta", |input: &BasicInput| {
    info!("Beta executed");
    input.message_log.lock().push("beta".to_string());
    Ok(())
  })
  .shared();

  let gamma = SinglePhase::new("gamma", |input: &BasicInput| {
    let log = input.message_log.lock();
    info!("Gamma executed after: {:?}", *log);
    Ok(())
  })
  .with_prerequisites([alpha.clone()])
  .shared();

  runner.register_phases([alpha, beta, gamma]);

  // 4. Run the whole pipeline: alpha, beta, gamma
  info!("Running full pipeline...");
  runner.run(&())?;

  // 5. Run a single phase: alpha, gamma
  info!("Running 'gamma' alone: {}", runner.plan_for("gamma")?);
  runner.run_phase(&(), "gamma")?;

  info!("--- Basic Runner Example Finished ---");
  Ok(())
}
