use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use phaseflow::{CommandNode, PhaseExt, Runner, SharedPhase, SinglePhase};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

// --- Common Benchmark Input ---
#[derive(Debug, Default)]
struct BenchInput {
  counter: AtomicU64,
}

// --- Helper: Simple Synchronous Phase ---
fn create_increment_phase(name: String, iterations: u64) -> SharedPhase<BenchInput> {
  SinglePhase::new(name, move |input: &BenchInput| {
    for _i in 0..iterations {
      // Simulate some CPU-bound work
      input.counter.fetch_add(1, Ordering::Relaxed);
    }
    Ok(())
  })
  .shared()
}

fn build_runner(num_phases: usize, iterations: u64) -> Runner<BenchInput> {
  let mut runner = Runner::<BenchInput>::new(|_: &()| Ok(BenchInput::default()));
  runner.register_phases((0..num_phases).map(|i| create_increment_phase(format!("phase_{}", i), iterations)));
  runner
}

// --- Benchmark Functions ---

fn bench_full_pipeline(c: &mut Criterion) {
  let mut group = c.benchmark_group("FullPipeline");

  for num_phases in [1, 5, 10, 50].iter() {
    for iterations in [1, 100].iter() {
      let runner = build_runner(*num_phases, *iterations);

      group.throughput(Throughput::Elements(*num_phases as u64 * *iterations));
      group.bench_with_input(
        BenchmarkId::new(format!("{}phases_{}iter", num_phases, iterations), *num_phases),
        &runner,
        |b, runner| b.iter(|| runner.run(&()).unwrap()),
      );
    }
  }
  group.finish();
}

fn bench_single_phase_with_prerequisites(c: &mut Criterion) {
  let mut group = c.benchmark_group("SinglePhaseDispatch");

  for num_prerequisites in [0, 5, 20].iter() {
    let prerequisites: Vec<SharedPhase<BenchInput>> = (0..*num_prerequisites)
      .map(|i| create_increment_phase(format!("prereq_{}", i), 1))
      .collect();
    let target = SinglePhase::new("target", |input: &BenchInput| {
      input.counter.fetch_add(1, Ordering::Relaxed);
      Ok(())
    })
    .with_prerequisites(prerequisites)
    .shared();

    let mut runner = Runner::<BenchInput>::new(|_: &()| Ok(BenchInput::default()));
    runner.register_phases([target]);
    let runner = Arc::new(runner);

    let mut init_cmd = CommandNode::<()>::new("init");
    runner.register_phases_as_subcommands(&mut init_cmd);

    group.bench_function(BenchmarkId::new("run_phase_by_name", num_prerequisites), |b| {
      b.iter(|| runner.run_phase(&(), "target").unwrap())
    });
    group.bench_function(BenchmarkId::new("invoke_command_entry", num_prerequisites), |b| {
      b.iter(|| init_cmd.invoke(&["phase", "target"], &()).unwrap())
    });
  }
  group.finish();
}

fn bench_execution_plan(c: &mut Criterion) {
  let prerequisites: Vec<SharedPhase<BenchInput>> =
    (0..20).map(|i| create_increment_phase(format!("prereq_{}", i), 1)).collect();
  let target = SinglePhase::new("target", |_: &BenchInput| Ok(()))
    .with_prerequisites(prerequisites)
    .shared();

  c.bench_function("execution_plan_20_prerequisites", |b| {
    b.iter(|| criterion::black_box(target.execution_plan()))
  });
}

criterion_group!(
  benches,
  bench_full_pipeline,
  bench_single_phase_with_prerequisites,
  bench_execution_plan
);
criterion_main!(benches);
