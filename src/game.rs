//! Facade wiring board, move generation, resolution, and turns together.
//!
//! Control flow per move: the controller names the active faction, the
//! generator yields candidates, one candidate is selected (by the input
//! layer for the humans, by the adversary policy for the Curse), the
//! resolution engine applies it, a move is spent (possibly auto-advancing
//! the turn), and the win conditions are re-evaluated.

use crate::adversary::{AdversaryTurn, StepOutcome};
use crate::board::Board;
use crate::core::{BoardSize, Faction, Team};
use crate::moves::{self, MoveCandidate};
use crate::resolve::{self, MoveOutcome};
use crate::turns::{self, TurnController};

/// A complete game session.
#[derive(Debug)]
pub struct Game {
    pub board: Board,
    pub turns: TurnController,
    winner: Option<Team>,
}

impl Game {
    /// Start a new game with initial Curse hosts placed from `seed`.
    #[must_use]
    pub fn new(seed: i32, size: BoardSize) -> Self {
        let board = Board::new(seed, size);
        let turns = TurnController::new(&board);
        Self { board, turns, winner: None }
    }

    /// Restart with a fresh board and Julia's opening turn.
    pub fn reset(&mut self, seed: i32, size: BoardSize) {
        self.board.reset(seed, size);
        self.turns.reset(&self.board);
        self.winner = None;
    }

    /// Winning team, once a win condition has been met.
    #[must_use]
    pub fn winner(&self) -> Option<Team> {
        self.winner
    }

    /// Legal candidates for the active faction.
    ///
    /// The Curse's candidates are not offered for external selection; its
    /// moves come from [`Game::begin_adversary_turn`].
    #[must_use]
    pub fn legal_moves(&self) -> Vec<MoveCandidate> {
        match self.turns.current_faction() {
            Faction::Julia => moves::placements(&self.board),
            Faction::Billy => moves::steps(&self.board),
            Faction::Curse => Vec::new(),
        }
    }

    /// Apply a selected candidate for the active human faction.
    ///
    /// Resolves and applies the move, spends one budgeted move (which may
    /// advance the turn), and re-evaluates the win conditions.
    ///
    /// # Panics
    ///
    /// Panics if the game is over, the candidate does not belong to the
    /// active faction, or the candidate is not one the generator offers on
    /// the current board. Adversary steps are always rejected; the Curse
    /// acts only through [`Game::begin_adversary_turn`].
    pub fn submit(&mut self, candidate: &MoveCandidate) -> MoveOutcome {
        assert!(self.winner.is_none(), "game is already decided");
        match candidate {
            MoveCandidate::Placement { .. } => {
                assert_eq!(
                    self.turns.current_faction(),
                    Faction::Julia,
                    "candidate submitted out of turn"
                );
                assert!(
                    moves::is_still_valid(&self.board, candidate),
                    "candidate {candidate:?} is not legal on the current board"
                );
            }
            MoveCandidate::Step { from, .. } => {
                assert_eq!(
                    self.turns.current_faction(),
                    Faction::Billy,
                    "candidate submitted out of turn"
                );
                // Destination emptiness alone is not enough for a step;
                // it must be a destination the generator actually reaches.
                assert!(
                    moves::steps_for_piece(&self.board, *from).contains(candidate),
                    "candidate {candidate:?} is not legal on the current board"
                );
            }
            MoveCandidate::AdversaryStep { .. } => {
                panic!("the Curse's moves are driven by the adversary pass, not submitted");
            }
        }

        let outcome = resolve::apply(&mut self.board, candidate);
        self.turns.spend_move(&self.board);
        self.winner = turns::evaluate(&self.board);
        outcome
    }

    /// Begin the Curse's paced move sequence.
    ///
    /// # Panics
    ///
    /// Panics if it is not the Curse's turn.
    #[must_use]
    pub fn begin_adversary_turn(&self) -> AdversaryTurn {
        AdversaryTurn::begin(&self.board, &self.turns)
    }

    /// Advance one step of an adversary pass and re-evaluate the winner.
    pub fn adversary_step(&mut self, pass: &mut AdversaryTurn) -> StepOutcome {
        let outcome = pass.step(&mut self.board, &mut self.turns);
        if matches!(outcome, StepOutcome::Moved(_)) {
            self.winner = turns::evaluate(&self.board);
        }
        outcome
    }
}
