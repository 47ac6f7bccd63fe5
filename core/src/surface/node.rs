// phaseflow/src/surface/node.rs

//! A small command tree that phases and runners attach entries to, and that
//! converts into a `clap::Command` for parsing.

use crate::error::{PhaseflowError, PhaseflowResult};
use clap::{Arg, ArgMatches, Command};
use tracing::{event, Level};

/// What runs when a command node is invoked.
pub type Action<A> = Box<dyn Fn(&A) -> PhaseflowResult<()> + Send + Sync>;

/// One node of the command tree.
///
/// A node may carry an action (invoked when the node is the leaf of an
/// invocation), child nodes, or both. `A` is the argument type handed to
/// actions; the clap surface uses `ArgMatches`.
pub struct CommandNode<A> {
  name: String,
  about: Option<String>,
  args: Vec<Arg>,
  action: Option<Action<A>>,
  children: Vec<CommandNode<A>>,
}

impl<A> CommandNode<A> {
  pub fn new<N: Into<String>>(name: N) -> Self {
    Self {
      name: name.into(),
      about: None,
      args: Vec::new(),
      action: None,
      children: Vec::new(),
    }
  }

  pub fn with_about<S: Into<String>>(mut self, about: S) -> Self {
    self.about = Some(about.into());
    self
  }

  /// Adds a clap argument to this node's command.
  pub fn with_arg(mut self, arg: Arg) -> Self {
    self.args.push(arg);
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn about(&self) -> Option<&str> {
    self.about.as_deref()
  }

  pub fn set_action<F>(&mut self, action: F)
  where
    F: Fn(&A) -> PhaseflowResult<()> + Send + Sync + 'static,
  {
    self.action = Some(Box::new(action));
  }

  pub fn has_action(&self) -> bool {
    self.action.is_some()
  }

  /// Attaches `child`. If a child with the same name exists it is kept and
  /// `child` is dropped, so lookups by name resolve to the first registration.
  pub fn add_child(&mut self, child: CommandNode<A>) {
    if self.child(&child.name).is_some() {
      event!(Level::WARN, command = %self.name, child = %child.name, "Command entry already exists, ignoring duplicate.");
      return;
    }
    self.children.push(child);
  }

  pub fn child(&self, name: &str) -> Option<&CommandNode<A>> {
    self.children.iter().find(|c| c.name == name)
  }

  pub fn child_mut(&mut self, name: &str) -> Option<&mut CommandNode<A>> {
    self.children.iter_mut().find(|c| c.name == name)
  }

  pub fn children(&self) -> &[CommandNode<A>] {
    &self.children
  }

  /// Follows `path` through child names and runs the action of the node it
  /// ends on.
  pub fn invoke(&self, path: &[&str], args: &A) -> PhaseflowResult<()> {
    match path.split_first() {
      Some((head, rest)) => match self.child(head) {
        Some(child) => child.invoke(rest, args),
        None => Err(PhaseflowError::NoAction {
          command: format!("{} {}", self.name, head),
        }),
      },
      None => self.run_action(args),
    }
  }

  fn run_action(&self, args: &A) -> PhaseflowResult<()> {
    match &self.action {
      Some(action) => {
        event!(Level::DEBUG, command = %self.name, "Invoking command action.");
        action(args)
      }
      None => Err(PhaseflowError::NoAction {
        command: self.name.clone(),
      }),
    }
  }

  /// Builds the clap command tree for this node and its children.
  ///
  /// Nodes without an action but with children require a subcommand.
  pub fn to_command(&self) -> Command {
    let mut command = Command::new(self.name.clone()).args(self.args.iter().cloned());
    if let Some(about) = &self.about {
      command = command.about(about.clone());
    }
    for child in &self.children {
      command = command.subcommand(child.to_command());
    }
    if self.action.is_none() && !self.children.is_empty() {
      command = command.subcommand_required(true).arg_required_else_help(true);
    }
    command
  }
}

impl CommandNode<ArgMatches> {
  /// Walks the matched subcommand chain and runs the leaf node's action with
  /// the leaf's matches.
  pub fn dispatch(&self, matches: &ArgMatches) -> PhaseflowResult<()> {
    if let Some((name, sub_matches)) = matches.subcommand() {
      let child = self.child(name).ok_or_else(|| PhaseflowError::NoAction {
        command: format!("{} {}", self.name, name),
      })?;
      return child.dispatch(sub_matches);
    }
    self.run_action(matches)
  }
}

impl<A> std::fmt::Debug for CommandNode<A> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CommandNode")
      .field("name", &self.name)
      .field("about", &self.about)
      .field("has_action", &self.action.is_some())
      .field("children", &self.children)
      .finish()
  }
}
