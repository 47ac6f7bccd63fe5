// phaseflow/src/surface/mod.rs

//! The command surface: a tree of invocable entries for full pipelines and
//! single phases, convertible into a clap command.

pub mod expose;
pub mod node;

pub use expose::PhaseExt;
pub use node::{Action, CommandNode};
