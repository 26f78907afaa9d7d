//! Deterministic pseudo-random move selection for the Curse.
//!
//! The policy is a function of `(board_seed, turn_index)`: at the start of
//! a Curse turn the per-piece move lists are captured and an RNG is
//! reseeded from `board_seed * (turn_index + 1)` (wrapping 32-bit
//! multiply). The pass then walks the pieces in board scan order; each
//! piece with at least one legal move draws a uniform `[0,1)` value and
//! commits to moving only if it falls below the board-size move chance,
//! picking uniformly among its moves.
//!
//! ## Cancellable pacing
//!
//! Presentation layers pace the adversary with delays between moves, so
//! the pass is exposed as a sequence of discrete [`AdversaryTurn::step`]
//! calls rather than one loop. Every step first re-checks that this is
//! still the same live Curse turn; a turn change (including one the pass
//! itself triggers by exhausting the budget) cancels all remaining steps
//! before they touch the board. Headless callers use
//! [`AdversaryTurn::run`].

use crate::board::Board;
use crate::core::{Faction, GameRng};
use crate::moves::{self, MoveCandidate};
use crate::resolve::{self, MoveOutcome};
use crate::turns::TurnController;
use smallvec::SmallVec;
use std::collections::VecDeque;

/// Result of a single adversary step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The piece committed to a move, which was resolved and applied.
    Moved(MoveOutcome),
    /// The piece drew above the move chance and stayed put.
    Declined,
    /// The piece's precomputed move went stale earlier in the pass.
    Skipped,
    /// All pieces were processed with budget to spare; the turn was
    /// explicitly advanced.
    Finished,
    /// This is no longer the adversary's live turn; nothing was touched.
    Cancelled,
}

/// One Curse turn, driven step by step.
pub struct AdversaryTurn {
    turn_index: i32,
    chance: f64,
    rng: GameRng,
    pending: VecDeque<SmallVec<[MoveCandidate; 4]>>,
}

impl AdversaryTurn {
    /// Capture the move lists and reseed the RNG for the current turn.
    ///
    /// # Panics
    ///
    /// Panics if it is not the Curse's turn.
    #[must_use]
    pub fn begin(board: &Board, turns: &TurnController) -> Self {
        assert_eq!(
            turns.current_faction(),
            Faction::Curse,
            "adversary turn started outside the Curse's turn"
        );
        Self {
            turn_index: turns.turn_index(),
            chance: board.size().curse_move_chance(),
            rng: GameRng::for_adversary_turn(board.seed(), turns.turn_index()),
            pending: moves::adversary_steps(board).into_iter().collect(),
        }
    }

    /// Process the next cursed piece.
    ///
    /// Returns [`StepOutcome::Cancelled`] without touching the board if the
    /// turn this pass belongs to is no longer active.
    pub fn step(&mut self, board: &mut Board, turns: &mut TurnController) -> StepOutcome {
        if turns.current_faction() != Faction::Curse || turns.turn_index() != self.turn_index {
            return StepOutcome::Cancelled;
        }

        let Some(options) = self.pending.pop_front() else {
            // Every piece got its chance before the budget ran out.
            turns.advance_turn(board);
            return StepOutcome::Finished;
        };

        if self.rng.gen_chance() >= self.chance {
            tracing::trace!("cursed piece declined to move");
            return StepOutcome::Declined;
        }

        let candidate = options[self.rng.gen_index(options.len())];
        if !moves::is_still_valid(board, &candidate) {
            // An earlier move in this pass occupied the destination or
            // converted the piece.
            tracing::trace!(?candidate, "precomputed adversary move went stale");
            return StepOutcome::Skipped;
        }

        let outcome = resolve::apply(board, &candidate);
        turns.spend_move(board);
        StepOutcome::Moved(outcome)
    }

    /// Drive the whole pass without pacing, for headless play and tests.
    pub fn run(mut self, board: &mut Board, turns: &mut TurnController) {
        loop {
            match self.step(board, turns) {
                StepOutcome::Finished | StepOutcome::Cancelled => return,
                StepOutcome::Moved(_) | StepOutcome::Declined | StepOutcome::Skipped => {}
            }
        }
    }
}

impl std::fmt::Debug for AdversaryTurn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdversaryTurn")
            .field("turn_index", &self.turn_index)
            .field("chance", &self.chance)
            .field("pending", &self.pending.len())
            .finish()
    }
}
