// demos/etcdadm_app/src/config.rs

use crate::errors::{AppError, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches};
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_ETCD_VERSION: &str = "3.5.9";

/// Whether this member starts a new cluster or joins an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterState {
  New,
  Existing,
}

impl ClusterState {
  pub fn as_str(&self) -> &'static str {
    match self {
      ClusterState::New => "new",
      ClusterState::Existing => "existing",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitSystemKind {
  Systemd,
  /// Record init-system actions instead of calling systemctl.
  DryRun,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EtcdAdmConfig {
  pub name: String,
  pub version: String,
  /// Where the etcd release binaries are taken from.
  pub release_dir: PathBuf,
  pub install_dir: PathBuf,
  pub data_dir: PathBuf,
  pub certs_dir: PathBuf,
  pub env_file: PathBuf,
  pub unit_file: PathBuf,
  pub advertise_address: String,
  pub client_port: u16,
  pub peer_port: u16,
  pub cluster_state: ClusterState,
  /// Client URL of an existing member. Required when joining.
  pub endpoint: Option<String>,
  pub init_system: InitSystemKind,
}

/// Flags shared by every command. Each one can also come from an
/// `ETCDADM_*` environment variable (or a `.env` file).
pub fn global_args() -> Vec<Arg> {
  vec![
    Arg::new("name")
      .long("name")
      .env("ETCDADM_NAME")
      .default_value("default")
      .help("Member name")
      .global(true),
    Arg::new("etcd-version")
      .long("etcd-version")
      .env("ETCDADM_ETCD_VERSION")
      .default_value(DEFAULT_ETCD_VERSION)
      .help("etcd version to install")
      .global(true),
    Arg::new("release-dir")
      .long("release-dir")
      .env("ETCDADM_RELEASE_DIR")
      .value_parser(value_parser!(PathBuf))
      .help("Directory holding the etcd release binaries [default: /var/cache/etcdadm/etcd/v<version>]")
      .global(true),
    path_arg("install-dir", "ETCDADM_INSTALL_DIR", "/opt/bin", "Install directory for etcd binaries"),
    path_arg("data-dir", "ETCDADM_DATA_DIR", "/var/lib/etcd", "etcd data directory"),
    path_arg("certs-dir", "ETCDADM_CERTS_DIR", "/etc/etcd/pki", "Certificate directory"),
    path_arg("env-file", "ETCDADM_ENV_FILE", "/etc/etcd/etcd.env", "etcd environment file"),
    path_arg(
      "unit-file",
      "ETCDADM_UNIT_FILE",
      "/etc/systemd/system/etcd.service",
      "systemd unit file",
    ),
    Arg::new("advertise-address")
      .long("advertise-address")
      .env("ETCDADM_ADVERTISE_ADDRESS")
      .default_value("127.0.0.1")
      .help("Address advertised to clients and peers")
      .global(true),
    port_arg("client-port", "ETCDADM_CLIENT_PORT", "2379", "Client port"),
    port_arg("peer-port", "ETCDADM_PEER_PORT", "2380", "Peer port"),
    Arg::new("init-system")
      .long("init-system")
      .env("ETCDADM_INIT_SYSTEM")
      .value_parser(["systemd", "dry-run"])
      .default_value("systemd")
      .help("Init system used to manage the etcd service")
      .global(true),
  ]
}

/// Flags only the `join` command takes.
pub fn join_args() -> Vec<Arg> {
  vec![Arg::new("endpoint")
    .long("endpoint")
    .env("ETCDADM_ENDPOINT")
    .help("Client URL of an existing cluster member")
    .action(ArgAction::Set)
    .global(true)]
}

fn path_arg(id: &'static str, env: &'static str, default: &'static str, help: &'static str) -> Arg {
  Arg::new(id)
    .long(id)
    .env(env)
    .value_parser(value_parser!(PathBuf))
    .default_value(default)
    .help(help)
    .global(true)
}

fn port_arg(id: &'static str, env: &'static str, default: &'static str, help: &'static str) -> Arg {
  Arg::new(id)
    .long(id)
    .env(env)
    .value_parser(value_parser!(u16))
    .default_value(default)
    .help(help)
    .global(true)
}

impl EtcdAdmConfig {
  pub fn from_matches(matches: &ArgMatches, cluster_state: ClusterState) -> Result<Self> {
    let string = |id: &str| -> Result<String> {
      matches
        .get_one::<String>(id)
        .cloned()
        .ok_or_else(|| AppError::Config(format!("Missing value for --{}", id)))
    };
    let path = |id: &str| -> Result<PathBuf> {
      matches
        .get_one::<PathBuf>(id)
        .cloned()
        .ok_or_else(|| AppError::Config(format!("Missing value for --{}", id)))
    };
    let port = |id: &str| -> Result<u16> {
      matches
        .get_one::<u16>(id)
        .copied()
        .ok_or_else(|| AppError::Config(format!("Missing value for --{}", id)))
    };

    let version = string("etcd-version")?;
    let release_dir = matches
      .get_one::<PathBuf>("release-dir")
      .cloned()
      .unwrap_or_else(|| PathBuf::from(format!("/var/cache/etcdadm/etcd/v{}", version)));
    let init_system = match string("init-system")?.as_str() {
      "systemd" => InitSystemKind::Systemd,
      "dry-run" => InitSystemKind::DryRun,
      other => return Err(AppError::Config(format!("Unknown init system '{}'", other))),
    };
    // `endpoint` is only defined under `join`.
    let endpoint = matches.try_get_one::<String>("endpoint").ok().flatten().cloned();

    let config = Self {
      name: string("name")?,
      version,
      release_dir,
      install_dir: path("install-dir")?,
      data_dir: path("data-dir")?,
      certs_dir: path("certs-dir")?,
      env_file: path("env-file")?,
      unit_file: path("unit-file")?,
      advertise_address: string("advertise-address")?,
      client_port: port("client-port")?,
      peer_port: port("peer-port")?,
      cluster_state,
      endpoint,
      init_system,
    };
    config.validate()?;

    tracing::debug!(config = ?config, "Configuration resolved.");
    Ok(config)
  }

  pub fn validate(&self) -> Result<()> {
    if self.name.trim().is_empty() {
      return Err(AppError::Config("Member name must not be empty".to_string()));
    }
    if self.client_port == self.peer_port {
      return Err(AppError::Config(format!(
        "Client and peer ports must differ (both are {})",
        self.client_port
      )));
    }
    match (&self.cluster_state, &self.endpoint) {
      (ClusterState::Existing, None) => Err(AppError::Config(
        "Joining a cluster requires --endpoint".to_string(),
      )),
      (ClusterState::Existing, Some(endpoint)) if !is_url(endpoint) => Err(AppError::Config(format!(
        "Invalid endpoint '{}': expected http:// or https:// URL",
        endpoint
      ))),
      _ => Ok(()),
    }
  }

  pub fn client_url(&self) -> String {
    format!("http://{}:{}", self.advertise_address, self.client_port)
  }

  pub fn peer_url(&self) -> String {
    format!("http://{}:{}", self.advertise_address, self.peer_port)
  }

  pub fn initial_cluster(&self) -> String {
    format!("{}={}", self.name, self.peer_url())
  }
}

fn is_url(value: &str) -> bool {
  match Url::parse(value) {
    Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
    Err(_) => false,
  }
}
