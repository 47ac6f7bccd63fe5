// src/lib.rs

//! Phaseflow: a fail-fast phase runner for multi-step administrative commands.
//!
//! A command such as "bootstrap a node" is split into named phases that run
//! in a fixed order. Phaseflow lets you:
//!  - Run the whole pipeline of phases against one freshly built input.
//!  - Run a single phase, with its declared prerequisites run first.
//!  - Stop at the first failing phase and report it as `[<phase>] <error>`.
//!  - Expose the pipeline and each phase as clap subcommands
//!    (`<cmd>` and `<cmd> phase <name>`).

pub mod core;
pub mod error;
pub mod runner;
pub mod surface;

// --- Re-exports for the Public API ---

pub use crate::core::phase::{Phase, RunFn, SharedPhase, SinglePhase};
pub use crate::core::plan::ExecutionPlan;

pub use crate::runner::{Initializer, Runner};

pub use crate::surface::{Action, CommandNode, PhaseExt};

pub use crate::error::{PhaseflowError, PhaseflowResult};

/*
    Core Workflow:
    1. Define the phase input `MyInput` holding the collaborators phases need.
    2. Create `Runner::<MyInput, A>::new(init)`, where `init: Fn(&A) -> anyhow::Result<MyInput>`.
    3. Build phases with `SinglePhase::new(name, body)`, declaring prerequisites
       with `.with_prerequisites([...])`, and register them with `register_phases`.
    4. Either call `runner.run(&args)` / `runner.run_phase(&args, "name")` directly, or
       wrap the runner in an `Arc`, call `bind_pipeline` and
       `register_phases_as_subcommands` on a `CommandNode<ArgMatches>`, turn it into a
       clap command with `to_command()`, and `dispatch` the parsed matches.
*/
