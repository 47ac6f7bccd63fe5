// phaseflow/examples/phase_subcommands.rs
//
// Try:
//   cargo run --example phase_subcommands -- deploy
//   cargo run --example phase_subcommands -- deploy phase publish --target staging
//   cargo run --example phase_subcommands -- deploy phase --help

use clap::{Arg, ArgMatches};
use phaseflow::{CommandNode, Runner, SinglePhase};
use std::sync::Arc;
use tracing::info;

#[derive(Debug)]
struct DeployInput {
  target: String,
}

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  let mut runner = Runner::<DeployInput, ArgMatches>::new(|matches: &ArgMatches| {
    let target = matches
      .get_one::<String>("target")
      .cloned()
      .ok_or_else(|| anyhow::anyhow!("--target is required"))?;
    Ok(DeployInput { target })
  });

  let build = SinglePhase::new("build", |input: &DeployInput| {
    info!(target = %input.target, "Building artifacts");
    Ok(())
  })
  .shared();
  let publish = SinglePhase::new("publish", |input: &DeployInput| {
    info!(target = %input.target, "Publishing artifacts");
    Ok(())
  })
  .with_prerequisites([build.clone()])
  .with_about("Publish built artifacts (runs build first)")
  .shared();
  runner.register_phases([build, publish]);
  let runner = Arc::new(runner);

  let mut deploy = CommandNode::new("deploy").with_about("Build and publish");
  runner.bind_pipeline(&mut deploy);
  runner.register_phases_as_subcommands(&mut deploy);

  let mut root = CommandNode::new("phase_subcommands").with_arg(
    Arg::new("target")
      .long("target")
      .default_value("local")
      .global(true),
  );
  root.add_child(deploy);

  let matches = root.to_command().get_matches();
  if let Err(e) = root.dispatch(&matches) {
    tracing::error!(error = %e, "Command failed");
    std::process::exit(1);
  }
}
