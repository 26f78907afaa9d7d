//! Move resolution: captures and host formation.

pub mod engine;

pub use engine::{MoveOutcome, apply, captures, host_block};
