//! Win-condition evaluation.
//!
//! Run by the caller after each applied move. Evaluation is a total
//! function of the board; it never mutates anything.

use crate::board::Board;
use crate::core::Team;
use crate::moves;

/// The humans win when no cursed piece remains anywhere and every cursed
/// host is neutralized, meaning its cell holds a friendly piece.
#[must_use]
pub fn humans_won(board: &Board) -> bool {
    board.all_pieces().all(|(_, team)| team == Team::Friendly)
        && board
            .all_hosts()
            .filter(|&(_, team)| team == Team::Cursed)
            .all(|(pos, _)| board.piece_at(pos) == Some(Team::Friendly))
}

/// The Curse wins when every cell holds a piece and no friendly piece has
/// a legal step left (stalemate).
#[must_use]
pub fn curse_won(board: &Board) -> bool {
    board.cells().all(|pos| board.piece_at(pos).is_some())
        && board
            .all_pieces()
            .filter(|&(_, team)| team == Team::Friendly)
            .all(|(pos, _)| moves::steps_for_piece(board, pos).is_empty())
}

/// Evaluate both win conditions against the current board.
#[must_use]
pub fn evaluate(board: &Board) -> Option<Team> {
    if humans_won(board) {
        Some(Team::Friendly)
    } else if curse_won(board) {
        Some(Team::Cursed)
    } else {
        None
    }
}
