//! Core engine types: positions, teams, factions, configuration, RNG.
//!
//! Everything here is plain data with no knowledge of the board or the
//! turn structure built on top of it.

pub mod position;
pub mod team;
pub mod config;
pub mod rng;

pub use position::{Position, RectIter};
pub use team::{Team, Faction};
pub use config::{BoardSize, HOST_BLOCK_SIZE, SPACES_PER_BILLY_MOVE};
pub use rng::GameRng;
