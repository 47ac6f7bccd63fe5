// demos/etcdadm_app/src/commands.rs

//! Builds the `etcdadm` command tree:
//!
//! ```text
//! etcdadm init              [phase <name>]
//! etcdadm join --endpoint U [phase <name>]
//! etcdadm reset             [phase <name>]
//! ```

use crate::config;
use crate::phases;
use clap::ArgMatches;
use phaseflow::{CommandNode, Runner};
use std::sync::Arc;

pub fn build_command_tree() -> CommandNode<ArgMatches> {
  let mut root = CommandNode::new("etcdadm").with_about("Bootstrap and manage etcd cluster members");
  for arg in config::global_args() {
    root = root.with_arg(arg);
  }

  root.add_child(pipeline_command(
    CommandNode::new("init").with_about("Initialize a new etcd cluster"),
    phases::init_runner(),
  ));

  let mut join = CommandNode::new("join").with_about("Join an existing etcd cluster");
  for arg in config::join_args() {
    join = join.with_arg(arg);
  }
  root.add_child(pipeline_command(join, phases::join_runner()));

  root.add_child(pipeline_command(
    CommandNode::new("reset").with_about("Stop etcd and remove its configuration and data"),
    phases::reset_runner(),
  ));

  root
}

/// `cmd` runs the whole pipeline, `cmd phase <name>` a single phase.
fn pipeline_command(
  mut cmd: CommandNode<ArgMatches>,
  runner: Runner<phases::Input, ArgMatches>,
) -> CommandNode<ArgMatches> {
  let runner = Arc::new(runner);
  runner.bind_pipeline(&mut cmd);
  runner.register_phases_as_subcommands(&mut cmd);
  cmd
}
