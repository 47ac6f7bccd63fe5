// phaseflow/src/core/phase.rs

//! Defines the `Phase<I>` trait and `SinglePhase<I>`, the stored-callable phase
//! used by most commands.

use std::sync::Arc;

/// Type alias for a phase body.
///
/// A phase body takes a shared reference to the phase input `I` built by the
/// runner's initializer. It may mutate state reachable through the input (for
/// example an init-system handle), never the input structure itself.
pub type RunFn<I> = Box<dyn Fn(&I) -> anyhow::Result<()> + Send + Sync>;

/// Phases are shared between the canonical pipeline, prerequisite lists of
/// other phases, and command entries.
pub type SharedPhase<I> = Arc<dyn Phase<I>>;

/// A named unit of work run against the phase input `I`.
pub trait Phase<I>: Send + Sync {
  /// Identifying name, used for error attribution and command routing.
  fn name(&self) -> &str;

  /// Runs the phase body. Errors are returned as-is; the runner attaches the
  /// phase name.
  fn run(&self, input: &I) -> anyhow::Result<()>;

  /// Phases that must run first, in order, when this phase is invoked alone.
  fn prerequisites(&self) -> &[SharedPhase<I>] {
    &[]
  }

  /// Short help for the command entry exposing this phase.
  fn about(&self) -> String {
    format!("Run {} phase", self.name())
  }
}

/// A phase whose body is a stored closure.
pub struct SinglePhase<I> {
  name: String,
  about: Option<String>,
  run_fn: RunFn<I>,
  prerequisites: Vec<SharedPhase<I>>,
}

impl<I> SinglePhase<I> {
  pub fn new<N, F>(name: N, run_fn: F) -> Self
  where
    N: Into<String>,
    F: Fn(&I) -> anyhow::Result<()> + Send + Sync + 'static,
  {
    Self {
      name: name.into(),
      about: None,
      run_fn: Box::new(run_fn),
      prerequisites: Vec::new(),
    }
  }

  /// Appends prerequisites. They run in the given order and are not
  /// deduplicated against each other's own prerequisites.
  pub fn with_prerequisites<P>(mut self, prerequisites: P) -> Self
  where
    P: IntoIterator<Item = SharedPhase<I>>,
  {
    self.prerequisites.extend(prerequisites);
    self
  }

  pub fn with_about<S: Into<String>>(mut self, about: S) -> Self {
    self.about = Some(about.into());
    self
  }

  pub fn shared(self) -> SharedPhase<I>
  where
    I: 'static,
  {
    Arc::new(self)
  }
}

impl<I> Phase<I> for SinglePhase<I> {
  fn name(&self) -> &str {
    &self.name
  }

  fn run(&self, input: &I) -> anyhow::Result<()> {
    (self.run_fn)(input)
  }

  fn prerequisites(&self) -> &[SharedPhase<I>] {
    &self.prerequisites
  }

  fn about(&self) -> String {
    match &self.about {
      Some(about) => about.clone(),
      None => format!("Run {} phase", self.name),
    }
  }
}

// RunFn doesn't implement Debug, so print the name and prerequisite names.
impl<I> std::fmt::Debug for SinglePhase<I> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let prerequisites: Vec<&str> = self.prerequisites.iter().map(|p| p.name()).collect();
    f.debug_struct("SinglePhase")
      .field("name", &self.name)
      .field("prerequisites", &prerequisites)
      .finish()
  }
}
