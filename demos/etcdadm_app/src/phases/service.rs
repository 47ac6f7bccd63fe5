// demos/etcdadm_app/src/phases/service.rs

use crate::phases::{Input, SERVICE_NAME};
use phaseflow::{SharedPhase, SinglePhase};
use tracing::info;

pub fn start_phase(prerequisites: Vec<SharedPhase<Input>>) -> SharedPhase<Input> {
  SinglePhase::new("start", |input: &Input| {
    input.init_system.daemon_reload()?;
    input.init_system.enable_and_start(SERVICE_NAME)?;
    info!(service = SERVICE_NAME, "Service enabled and started.");
    Ok(())
  })
  .with_prerequisites(prerequisites)
  .with_about("Enable and start the etcd service")
  .shared()
}

pub fn health_phase() -> SharedPhase<Input> {
  SinglePhase::new("health", |input: &Input| {
    if !input.init_system.is_active(SERVICE_NAME)? {
      anyhow::bail!("{} service is not active", SERVICE_NAME);
    }
    info!(service = SERVICE_NAME, "Service is active.");
    Ok(())
  })
  .with_about("Check that the etcd service is active")
  .shared()
}

pub fn stop_phase() -> SharedPhase<Input> {
  SinglePhase::new("stop", |input: &Input| {
    input.init_system.disable_and_stop(SERVICE_NAME)?;
    info!(service = SERVICE_NAME, "Service stopped and disabled.");
    Ok(())
  })
  .with_about("Stop and disable the etcd service")
  .shared()
}
