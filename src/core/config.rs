//! Per-board-size configuration tables and global rule constants.

use serde::{Deserialize, Serialize};

/// Maximum number of orthogonal hops in one Billy move.
pub const SPACES_PER_BILLY_MOVE: u32 = 2;

/// Side length of the square block of identical pieces that forms a host.
pub const HOST_BLOCK_SIZE: i32 = 3;

/// The available board sizes.
///
/// All per-size tuning (initial host count, per-turn move budgets, the
/// adversary's move chance) hangs off this enum rather than living in
/// loose lookup tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardSize {
    Six,
    Seven,
    Eight,
    Nine,
}

impl BoardSize {
    /// Side length in cells.
    #[must_use]
    pub const fn side(self) -> i32 {
        match self {
            BoardSize::Six => 6,
            BoardSize::Seven => 7,
            BoardSize::Eight => 8,
            BoardSize::Nine => 9,
        }
    }

    /// Number of Curse host+piece pairs placed at game start.
    #[must_use]
    pub const fn host_count(self) -> u32 {
        match self {
            BoardSize::Six => 2,
            BoardSize::Seven => 3,
            BoardSize::Eight => 4,
            BoardSize::Nine => 5,
        }
    }

    /// Julia's placement budget per turn.
    #[must_use]
    pub const fn julia_moves_per_turn(self) -> u32 {
        match self {
            BoardSize::Six => 3,
            BoardSize::Seven => 4,
            BoardSize::Eight => 6,
            BoardSize::Nine => 9,
        }
    }

    /// Billy's step budget per turn.
    #[must_use]
    pub const fn billy_moves_per_turn(self) -> u32 {
        // Same table as Julia's today; kept separate because they are
        // independent knobs.
        self.julia_moves_per_turn()
    }

    /// Probability that a cursed piece with legal moves commits to moving.
    #[must_use]
    pub const fn curse_move_chance(self) -> f64 {
        match self {
            BoardSize::Six => 0.85,
            BoardSize::Seven => 0.75,
            BoardSize::Eight => 0.65,
            BoardSize::Nine => 0.55,
        }
    }
}

impl TryFrom<i32> for BoardSize {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, i32> {
        match value {
            6 => Ok(BoardSize::Six),
            7 => Ok(BoardSize::Seven),
            8 => Ok(BoardSize::Eight),
            9 => Ok(BoardSize::Nine),
            other => Err(other),
        }
    }
}
