//! Legal move generation per faction.

pub mod generator;

pub use generator::{
    MoveCandidate, adversary_steps, is_still_valid, placements, steps, steps_for_piece,
};
