// tests/error_handling_tests.rs
mod common;
use common::*;
use anyhow::Context;
use phaseflow::{PhaseflowError, Runner, SinglePhase};
use std::error::Error as _;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_first_failing_phase_stops_the_run() {
  setup_tracing();
  let recorder = Recorder::default();
  let mut runner = Runner::<TestInput>::new(default_init);
  runner.register_phases([
    create_recording_phase("good_phase", &recorder),
    create_failing_phase("bad_phase", &recorder, "I am a bad phase!"),
    create_recording_phase("never_run", &recorder),
  ]);

  let result = runner.run(&());

  assert_eq!(recorder.calls(), vec!["good_phase", "bad_phase"]);
  match result {
    Err(PhaseflowError::PhaseFailed { phase, source }) => {
      assert_eq!(phase, "bad_phase");
      assert_eq!(
        source.downcast_ref::<TestError>(),
        Some(&TestError::Phase("I am a bad phase!".to_string()))
      );
    }
    other => panic!("Expected PhaseflowError::PhaseFailed, got {:?}", other),
  }
}

#[test]
fn test_phase_error_message_is_prefixed_with_phase_name() {
  setup_tracing();
  let recorder = Recorder::default();
  let runner = Runner::<TestInput>::new(default_init);
  let phases = vec![create_failing_phase("configure", &recorder, "disk full")];

  let err = runner.run_phases(&(), &phases).unwrap_err();

  assert_eq!(err.to_string(), "[configure] Test phase failed: disk full");
  assert_eq!(err.failed_phase(), Some("configure"));
  // The original error is kept as the source.
  let source = err.source().expect("phase error should carry a source");
  assert_eq!(source.to_string(), "Test phase failed: disk full");
}

#[test]
fn test_phase_error_message_includes_context_chain() {
  setup_tracing();
  let runner = Runner::<TestInput>::new(default_init);
  let phases = vec![SinglePhase::new("install", |_input: &TestInput| {
    Err(TestError::Phase("no such file".to_string())).context("copying etcd binary")
  })
  .shared()];

  let err = runner.run_phases(&(), &phases).unwrap_err();

  assert_eq!(err.to_string(), "[install] copying etcd binary: Test phase failed: no such file");
}

#[test]
fn test_failure_at_each_position_runs_exactly_the_prefix() {
  setup_tracing();
  let names = ["p1", "p2", "p3", "p4"];

  for fail_at in 0..names.len() {
    let recorder = Recorder::default();
    let phases: Vec<_> = names
      .iter()
      .enumerate()
      .map(|(idx, name)| {
        if idx == fail_at {
          create_failing_phase(*name, &recorder, "boom")
        } else {
          create_recording_phase(*name, &recorder)
        }
      })
      .collect();

    let runner = Runner::<TestInput>::new(default_init);
    let err = runner.run_phases(&(), &phases).unwrap_err();

    assert_eq!(err.failed_phase(), Some(names[fail_at]));
    assert_eq!(recorder.calls(), names[..=fail_at].to_vec());
  }
}

#[test]
fn test_initializer_failure_runs_no_phase() {
  setup_tracing();
  let recorder = Recorder::default();
  let mut runner = Runner::<TestInput>::new(|_: &()| Err(TestError::Init("config file missing".to_string()).into()));
  runner.register_phases([create_recording_phase("install", &recorder)]);

  let result = runner.run(&());

  assert!(recorder.calls().is_empty());
  match result {
    Err(PhaseflowError::Init(source)) => {
      assert_eq!(
        source.downcast_ref::<TestError>(),
        Some(&TestError::Init("config file missing".to_string()))
      );
    }
    other => panic!("Expected PhaseflowError::Init, got {:?}", other),
  }
}

#[test]
fn test_initializer_error_message_is_unchanged() {
  setup_tracing();
  let runner = Runner::<TestInput>::new(|_: &()| Err(anyhow::anyhow!("init system not found")));

  let err = runner.run(&()).unwrap_err();

  assert_eq!(err.to_string(), "init system not found");
  assert_eq!(err.failed_phase(), None);
}

#[test]
fn test_unknown_phase_does_not_call_initializer() {
  setup_tracing();
  let init_calls = Arc::new(AtomicUsize::new(0));
  let runner = Runner::<TestInput>::new(counting_init(init_calls.clone()));

  let err = runner.run_phase(&(), "join").unwrap_err();

  assert_eq!(err.to_string(), "Phase not found: join");
  assert_eq!(init_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_runner_is_reusable_after_a_failed_run() {
  setup_tracing();
  let recorder = Recorder::default();
  let attempts = Arc::new(AtomicUsize::new(0));
  let attempts_in_phase = attempts.clone();
  let rec = recorder.clone();
  let flaky = SinglePhase::new("flaky", move |_input: &TestInput| {
    rec.record("flaky");
    if attempts_in_phase.fetch_add(1, Ordering::SeqCst) == 0 {
      anyhow::bail!("first attempt fails");
    }
    Ok(())
  })
  .shared();

  let mut runner = Runner::<TestInput>::new(default_init);
  runner.register_phases([flaky, create_recording_phase("after", &recorder)]);

  assert!(runner.run(&()).is_err());
  runner.run(&()).unwrap();

  assert_eq!(recorder.calls(), vec!["flaky", "flaky", "after"]);
}
