// phaseflow/src/surface/expose.rs

//! Attaches phases and whole pipelines to a command tree.
//!
//! Exposure only captures an execution plan and a runner handle in the node's
//! action. Execution itself stays in `Runner::run_phases`.

use crate::core::phase::SharedPhase;
use crate::core::plan::ExecutionPlan;
use crate::runner::definition::Runner;
use crate::surface::node::CommandNode;
use std::sync::Arc;
use tracing::{event, Level};

pub trait PhaseExt<I> {
  /// `[prerequisites..., self]`.
  fn execution_plan(&self) -> ExecutionPlan<I>;

  /// Attaches a child to `parent` named after this phase. Invoking it makes
  /// `runner` run this phase's execution plan. The plan is computed here, once.
  fn expose<A: 'static>(&self, parent: &mut CommandNode<A>, runner: &Arc<Runner<I, A>>);
}

impl<I: 'static> PhaseExt<I> for SharedPhase<I> {
  fn execution_plan(&self) -> ExecutionPlan<I> {
    ExecutionPlan::for_phase(self)
  }

  fn expose<A: 'static>(&self, parent: &mut CommandNode<A>, runner: &Arc<Runner<I, A>>) {
    let plan = self.execution_plan();
    event!(Level::DEBUG, command = parent.name(), phase = self.name(), plan = %plan, "Exposing phase.");

    let runner = Arc::clone(runner);
    let mut node = CommandNode::new(self.name()).with_about(self.about());
    node.set_action(move |args: &A| runner.run_phases(args, plan.phases()));
    parent.add_child(node);
  }
}

impl<I: 'static, A: 'static> Runner<I, A> {
  /// Adds a `phase` child to `cmd` holding one entry per canonical phase.
  pub fn register_phases_as_subcommands(self: &Arc<Self>, cmd: &mut CommandNode<A>) {
    let mut phase_cmd = CommandNode::new("phase").with_about(format!(
      "Use this command to invoke single phase of the {} command",
      cmd.name()
    ));

    for phase in &self.phases {
      phase.expose(&mut phase_cmd, self);
    }

    cmd.add_child(phase_cmd);
  }

  /// Makes invoking `cmd` itself run the full pipeline.
  pub fn bind_pipeline(self: &Arc<Self>, cmd: &mut CommandNode<A>) {
    let runner = Arc::clone(self);
    cmd.set_action(move |args: &A| runner.run(args));
  }
}
