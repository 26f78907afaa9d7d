//! The turn state machine.
//!
//! A fixed cycle Julia → Billy → Curse → Julia…, with a per-turn move
//! budget: the table value for the human factions, the live cursed-piece
//! count for the Curse. Spending the last budgeted move advances the turn
//! immediately, and the advance chains synchronously while the incoming
//! faction's budget is zero (a Curse with no pieces, for example), bounded
//! by one full cycle.
//!
//! There is no terminal state here; win detection is evaluated externally
//! against the board after each applied move (see [`crate::turns::win`]).

use crate::board::{Board, GameEvent, Notifier};
use crate::core::Faction;

/// Turn order, budget, and turn-index bookkeeping.
#[derive(Debug)]
pub struct TurnController {
    current: Faction,
    moves_left: u32,
    turn_index: i32,
    notifier: Notifier,
}

impl TurnController {
    /// Start a game at Julia's turn with her full budget.
    #[must_use]
    pub fn new(board: &Board) -> Self {
        let mut controller = Self {
            current: Faction::Julia,
            moves_left: 0,
            turn_index: 0,
            notifier: Notifier::new(),
        };
        controller.moves_left = controller.budget_for(Faction::Julia, board);
        controller
    }

    /// Rewind to Julia's turn at index zero (game reset).
    pub fn reset(&mut self, board: &Board) {
        self.current = Faction::Julia;
        self.turn_index = 0;
        self.moves_left = self.budget_for(Faction::Julia, board);
        self.notify_turn();
        self.notify_moves_left();
    }

    /// Register a callback for turn-changed and moves-left-changed events.
    pub fn subscribe(&mut self, callback: impl FnMut(&GameEvent) + 'static) {
        self.notifier.subscribe(callback);
    }

    #[must_use]
    pub fn current_faction(&self) -> Faction {
        self.current
    }

    #[must_use]
    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    /// Monotonic count of turns taken since game start. Also the adversary's
    /// per-turn RNG salt, so it must advance exactly once per turn change.
    #[must_use]
    pub fn turn_index(&self) -> i32 {
        self.turn_index
    }

    fn budget_for(&self, faction: Faction, board: &Board) -> u32 {
        match faction {
            Faction::Julia => board.size().julia_moves_per_turn(),
            Faction::Billy => board.size().billy_moves_per_turn(),
            Faction::Curse => board.cursed_piece_count(),
        }
    }

    /// Consume one move from the active faction's budget.
    ///
    /// Reaching zero advances the turn immediately.
    ///
    /// # Panics
    ///
    /// Panics if the budget is already exhausted; callers must only submit
    /// moves while `moves_left > 0`.
    pub fn spend_move(&mut self, board: &Board) {
        assert!(self.moves_left > 0, "no moves left for {}", self.current);
        self.moves_left -= 1;
        self.notify_moves_left();
        if self.moves_left == 0 {
            self.advance_turn(board);
        }
    }

    /// Hand the turn to the next faction and recompute its budget.
    ///
    /// Chains past factions whose budget comes up zero, stopping after one
    /// full cycle if every faction is out of moves.
    pub fn advance_turn(&mut self, board: &Board) {
        for _ in 0..Faction::COUNT {
            self.turn_index += 1;
            self.current = self.current.next();
            self.moves_left = self.budget_for(self.current, board);
            tracing::debug!(
                faction = %self.current,
                turn_index = self.turn_index,
                budget = self.moves_left,
                "turn advanced"
            );
            self.notify_turn();
            self.notify_moves_left();
            if self.moves_left > 0 {
                return;
            }
        }
    }

    fn notify_turn(&mut self) {
        self.notifier.emit(&GameEvent::TurnChanged {
            faction: self.current,
            turn_index: self.turn_index,
        });
    }

    fn notify_moves_left(&mut self) {
        self.notifier.emit(&GameEvent::MovesLeftChanged { left: self.moves_left });
    }
}
