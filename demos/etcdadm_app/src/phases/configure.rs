// demos/etcdadm_app/src/phases/configure.rs

use crate::config::EtcdAdmConfig;
use crate::errors::{AppError, Result};
use crate::phases::Input;
use phaseflow::{SharedPhase, SinglePhase};
use std::fs;
use std::path::Path;
use tracing::info;

pub fn phase(prerequisites: Vec<SharedPhase<Input>>) -> SharedPhase<Input> {
  SinglePhase::new("configure", |input: &Input| {
    let config = &input.config;
    write_file(&config.env_file, &render_environment(config))?;
    write_file(&config.unit_file, &render_unit(config))?;
    info!(env_file = %config.env_file.display(), unit_file = %config.unit_file.display(), "etcd configured.");
    Ok(())
  })
  .with_prerequisites(prerequisites)
  .with_about("Write the etcd environment file and systemd unit")
  .shared()
}

pub fn render_environment(config: &EtcdAdmConfig) -> String {
  let mut lines = vec![
    format!("ETCD_NAME={}", config.name),
    format!("ETCD_DATA_DIR={}", config.data_dir.display()),
    format!("ETCD_LISTEN_CLIENT_URLS={}", config.client_url()),
    format!("ETCD_ADVERTISE_CLIENT_URLS={}", config.client_url()),
    format!("ETCD_LISTEN_PEER_URLS={}", config.peer_url()),
    format!("ETCD_INITIAL_ADVERTISE_PEER_URLS={}", config.peer_url()),
    format!("ETCD_INITIAL_CLUSTER={}", config.initial_cluster()),
    format!("ETCD_INITIAL_CLUSTER_STATE={}", config.cluster_state.as_str()),
  ];
  if let Some(endpoint) = &config.endpoint {
    lines.push(format!("ETCDADM_JOIN_ENDPOINT={}", endpoint));
  }
  lines.join("\n") + "\n"
}

pub fn render_unit(config: &EtcdAdmConfig) -> String {
  format!(
    "[Unit]
Description=etcd
Documentation=https://github.com/etcd-io/etcd
After=network-online.target
Wants=network-online.target

[Service]
Type=notify
EnvironmentFile={env_file}
ExecStart={etcd}
Restart=on-failure
RestartSec=5s
LimitNOFILE=40000
TimeoutStartSec=0

[Install]
WantedBy=multi-user.target
",
    env_file = config.env_file.display(),
    etcd = config.install_dir.join("etcd").display(),
  )
}

/// Writes `contents` to `path`, creating parent directories.
fn write_file(path: &Path, contents: &str) -> Result<()> {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).map_err(AppError::io(parent))?;
  }
  fs::write(path, contents).map_err(AppError::io(path))
}
