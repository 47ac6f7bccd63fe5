// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use parking_lot::Mutex;
use phaseflow::{SharedPhase, SinglePhase};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

// --- Common Phase Input ---
/// Built fresh by the initializer for every run.
#[derive(Debug, Default)]
pub struct TestInput {
  /// Value of the init counter when this input was built (1 for the first run).
  pub run_id: usize,
  /// Per-run scratch state phases write through the shared input.
  pub scratch: Mutex<Vec<String>>,
}

// --- Common Error Type for Tests ---
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("Test phase failed: {0}")]
  Phase(String),

  #[error("Test initializer failed: {0}")]
  Init(String),
}

// --- Invocation Recorder ---
/// Records which phase bodies ran, in order, across runs.
#[derive(Clone, Debug, Default)]
pub struct Recorder(Arc<Mutex<Vec<String>>>);

impl Recorder {
  pub fn record(&self, name: &str) {
    self.0.lock().push(name.to_string());
  }

  pub fn calls(&self) -> Vec<String> {
    self.0.lock().clone()
  }

  pub fn count(&self, name: &str) -> usize {
    self.0.lock().iter().filter(|n| n.as_str() == name).count()
  }
}

// --- Common Initializers ---
/// Initializer that counts its calls and builds a fresh `TestInput` each time.
pub fn counting_init(counter: Arc<AtomicUsize>) -> impl Fn(&()) -> anyhow::Result<TestInput> + Send + Sync + 'static {
  move |_: &()| {
    let run_id = counter.fetch_add(1, Ordering::SeqCst) + 1;
    Ok(TestInput {
      run_id,
      ..Default::default()
    })
  }
}

pub fn default_init(_: &()) -> anyhow::Result<TestInput> {
  Ok(TestInput::default())
}

// --- Common Phase Creators ---
pub fn create_recording_phase(name: &'static str, recorder: &Recorder) -> SharedPhase<TestInput> {
  create_recording_phase_with_prerequisites(name, recorder, Vec::new())
}

pub fn create_recording_phase_with_prerequisites(
  name: &'static str,
  recorder: &Recorder,
  prerequisites: Vec<SharedPhase<TestInput>>,
) -> SharedPhase<TestInput> {
  let recorder = recorder.clone();
  SinglePhase::new(name, move |input: &TestInput| {
    recorder.record(name);
    input.scratch.lock().push(name.to_string());
    tracing::debug!(target: "test_phases", phase = name, run_id = input.run_id, "executed");
    Ok(())
  })
  .with_prerequisites(prerequisites)
  .shared()
}

pub fn create_failing_phase(name: &'static str, recorder: &Recorder, error_message: &'static str) -> SharedPhase<TestInput> {
  let recorder = recorder.clone();
  SinglePhase::new(name, move |_input: &TestInput| {
    recorder.record(name);
    tracing::warn!(target: "test_phases", phase = name, "failing with: '{}'", error_message);
    Err(TestError::Phase(error_message.to_string()).into())
  })
  .shared()
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
