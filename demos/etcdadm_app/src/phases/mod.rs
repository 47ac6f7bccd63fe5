// demos/etcdadm_app/src/phases/mod.rs

//! Phase bodies for the `init`, `join` and `reset` commands, and the runners
//! that sequence them.

use crate::config::{ClusterState, EtcdAdmConfig};
use crate::initsystem::{self, InitSystem};
use clap::ArgMatches;
use phaseflow::{Runner, SharedPhase};
use std::sync::Arc;
use tracing::info;

pub mod cleanup;
pub mod configure;
pub mod directories;
pub mod install;
pub mod service;

pub const SERVICE_NAME: &str = "etcd";

/// Phase input: what every phase body gets to work with.
#[derive(Debug, Clone)]
pub struct Input {
  pub init_system: Arc<dyn InitSystem>,
  pub config: Arc<EtcdAdmConfig>,
}

/// Resolves configuration and the init system for one run.
pub fn build_input(matches: &ArgMatches, cluster_state: ClusterState) -> anyhow::Result<Input> {
  let config = EtcdAdmConfig::from_matches(matches, cluster_state)?;
  let init_system = initsystem::from_config(&config)?;
  info!(
    name = %config.name,
    cluster_state = config.cluster_state.as_str(),
    init_system = ?config.init_system,
    "Phase input ready."
  );
  Ok(Input {
    init_system,
    config: Arc::new(config),
  })
}

/// Phases shared by `init` and `join`, in pipeline order.
///
/// Prerequisites only matter for `<cmd> phase <name>` invocations.
pub fn bootstrap_phases() -> Vec<SharedPhase<Input>> {
  let install = install::phase();
  let directories = directories::phase();
  let configure = configure::phase(vec![install.clone()]);
  let start = service::start_phase(vec![install.clone(), directories.clone(), configure.clone()]);
  let health = service::health_phase();
  vec![install, directories, configure, start, health]
}

pub fn reset_phases() -> Vec<SharedPhase<Input>> {
  let stop = service::stop_phase();
  let remove_files = cleanup::phase(vec![stop.clone()]);
  vec![stop, remove_files]
}

pub fn init_runner() -> Runner<Input, ArgMatches> {
  let mut runner = Runner::new(|matches: &ArgMatches| build_input(matches, ClusterState::New));
  runner.register_phases(bootstrap_phases());
  runner
}

pub fn join_runner() -> Runner<Input, ArgMatches> {
  let mut runner = Runner::new(|matches: &ArgMatches| build_input(matches, ClusterState::Existing));
  runner.register_phases(bootstrap_phases());
  runner
}

pub fn reset_runner() -> Runner<Input, ArgMatches> {
  let mut runner = Runner::new(|matches: &ArgMatches| build_input(matches, ClusterState::New));
  runner.register_phases(reset_phases());
  runner
}
