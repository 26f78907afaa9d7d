//! # curseboard
//!
//! A deterministic, turn-based rules engine for a three-faction capture game
//! played on an N×N grid (N ∈ {6, 7, 8, 9}).
//!
//! Two human factions cooperate against an autonomous adversary:
//!
//! - **Julia** places new friendly pieces onto empty cells.
//! - **Billy** moves friendly pieces up to two orthogonal hops.
//! - **Curse** is an automated faction that defends its territory through
//!   "hosts" — self-sustaining structures that respawn a piece whenever one
//!   moves off their cell.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: all randomness flows through seeded ChaCha8 streams.
//!    The adversary reseeds per turn from `(board_seed, turn_index)`, so a
//!    whole game replays bit-exactly from its seed and move history.
//!
//! 2. **Resolution without mutation**: the outcome of a candidate move
//!    (captures, host formation) is computed against a virtual board first,
//!    then applied in one step. Presentation layers observe the mutations
//!    through registered callbacks; they never participate in them.
//!
//! 3. **Single-threaded, cancellable pacing**: the adversary's turn is a
//!    sequence of discrete steps. Each step re-checks that the turn is still
//!    live before touching the board, so external pacing (timers, animation
//!    delays) can interleave freely without races.
//!
//! ## Modules
//!
//! - `core`: positions, teams, factions, per-board-size configuration, RNG
//! - `board`: the two-layer grid, change notifications, binary save format
//! - `moves`: legal move generation per faction
//! - `resolve`: capture and host-formation resolution
//! - `turns`: turn order, move budgets, win evaluation
//! - `adversary`: the Curse faction's move-selection policy
//! - `game`: a facade wiring the control flow together

pub mod core;
pub mod board;
pub mod moves;
pub mod resolve;
pub mod turns;
pub mod adversary;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Position, Team, Faction, BoardSize, GameRng,
    HOST_BLOCK_SIZE, SPACES_PER_BILLY_MOVE,
};

pub use crate::board::{Board, GameEvent, Notifier, SaveError};

pub use crate::moves::MoveCandidate;

pub use crate::resolve::MoveOutcome;

pub use crate::turns::TurnController;

pub use crate::adversary::{AdversaryTurn, StepOutcome};

pub use crate::game::Game;
