// phaseflow/src/runner/mod.rs

//! Defines the `Runner<I, A>` struct, its phase registration, and the
//! fail-fast execution of phase sequences.

pub mod definition;
pub mod execution;

// Re-export the main Runner struct
pub use definition::{Initializer, Runner};
