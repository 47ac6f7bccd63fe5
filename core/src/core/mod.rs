pub mod phase;
pub mod plan;

// Re-export key types for easier access from other modules (and lib.rs)
pub use phase::{Phase, RunFn, SharedPhase, SinglePhase};
pub use plan::ExecutionPlan;
