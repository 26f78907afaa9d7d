//! The Curse faction's autonomous move policy.

pub mod policy;

pub use policy::{AdversaryTurn, StepOutcome};
