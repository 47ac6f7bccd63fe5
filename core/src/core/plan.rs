// phaseflow/src/core/plan.rs

//! An `ExecutionPlan<I>` is the ordered list of phases one invocation runs.

use crate::core::phase::SharedPhase;
use std::fmt;
use std::sync::Arc;

pub struct ExecutionPlan<I> {
  phases: Vec<SharedPhase<I>>,
}

impl<I> ExecutionPlan<I> {
  pub fn new(phases: Vec<SharedPhase<I>>) -> Self {
    Self { phases }
  }

  /// `[prerequisites..., phase]`.
  ///
  /// Only the phase's direct prerequisite list is used. A prerequisite's own
  /// prerequisites are not pulled in, and a phase listed twice runs twice.
  pub fn for_phase(phase: &SharedPhase<I>) -> Self {
    let prerequisites = phase.prerequisites();
    let mut phases = Vec::with_capacity(prerequisites.len() + 1);
    phases.extend(prerequisites.iter().cloned());
    phases.push(Arc::clone(phase));
    Self { phases }
  }

  pub fn phases(&self) -> &[SharedPhase<I>] {
    &self.phases
  }

  pub fn names(&self) -> Vec<&str> {
    self.phases.iter().map(|p| p.name()).collect()
  }

  pub fn len(&self) -> usize {
    self.phases.len()
  }

  pub fn is_empty(&self) -> bool {
    self.phases.is_empty()
  }
}

impl<I> Clone for ExecutionPlan<I> {
  fn clone(&self) -> Self {
    Self {
      phases: self.phases.clone(),
    }
  }
}

impl<I> fmt::Display for ExecutionPlan<I> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.names().join(" -> "))
  }
}

impl<I> fmt::Debug for ExecutionPlan<I> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ExecutionPlan").field("phases", &self.names()).finish()
  }
}
