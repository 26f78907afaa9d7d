//! Candidate moves and their generation.
//!
//! Each faction has its own move shape:
//!
//! - **Julia** places a new friendly piece on any piece-free cell.
//! - **Billy** steps a friendly piece through up to
//!   [`SPACES_PER_BILLY_MOVE`] orthogonal hops over piece-free cells.
//! - **Curse** steps a cursed piece to one of its empty orthogonal
//!   neighbors. Curse moves stay grouped per piece because the adversary
//!   decides piece by piece.
//!
//! Generation is read-only over the board and total: it never fails, it
//! just yields fewer (possibly zero) candidates.

use crate::board::Board;
use crate::core::{Position, Team, SPACES_PER_BILLY_MOVE};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::VecDeque;

/// A not-yet-applied move for one faction.
///
/// Pieces are referenced by their current position; the board's layers are
/// the single source of element identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCandidate {
    /// Julia places a new friendly piece.
    Placement { pos: Position },
    /// Billy moves the friendly piece at `from` to `to`.
    Step { from: Position, to: Position },
    /// The Curse moves the cursed piece at `from` to `to`.
    AdversaryStep { from: Position, to: Position },
}

impl MoveCandidate {
    /// The team acting through this candidate.
    #[must_use]
    pub fn acting_team(&self) -> Team {
        match self {
            MoveCandidate::Placement { .. } | MoveCandidate::Step { .. } => Team::Friendly,
            MoveCandidate::AdversaryStep { .. } => Team::Cursed,
        }
    }

    /// The cell vacated by this candidate, if it moves an existing piece.
    #[must_use]
    pub fn previous_pos(&self) -> Option<Position> {
        match self {
            MoveCandidate::Placement { .. } => None,
            MoveCandidate::Step { from, .. } | MoveCandidate::AdversaryStep { from, .. } => {
                Some(*from)
            }
        }
    }

    /// The cell this candidate's piece will occupy.
    #[must_use]
    pub fn new_pos(&self) -> Position {
        match self {
            MoveCandidate::Placement { pos } => *pos,
            MoveCandidate::Step { to, .. } | MoveCandidate::AdversaryStep { to, .. } => *to,
        }
    }
}

/// Julia's legal placements: every piece-free cell, in scan order.
#[must_use]
pub fn placements(board: &Board) -> Vec<MoveCandidate> {
    board
        .cells()
        .filter(|&pos| board.piece_at(pos).is_none())
        .map(|pos| MoveCandidate::Placement { pos })
        .collect()
}

/// Billy's legal steps for every friendly piece on the board.
#[must_use]
pub fn steps(board: &Board) -> Vec<MoveCandidate> {
    let mut out = Vec::new();
    for (pos, team) in board.all_pieces() {
        if team == Team::Friendly {
            collect_steps(board, pos, &mut out);
        }
    }
    out
}

/// Billy's legal steps for the friendly piece at `from`.
///
/// Breadth-first search with a hop budget of [`SPACES_PER_BILLY_MOVE`],
/// expanding only through in-range, piece-free cells (hosts do not block
/// traversal), each cell visited at most once. Every distinct empty cell
/// reached within the budget is a destination; the origin never is, since
/// the moving piece itself occupies it.
///
/// # Panics
///
/// Panics if the piece at `from` is missing or cursed.
#[must_use]
pub fn steps_for_piece(board: &Board, from: Position) -> Vec<MoveCandidate> {
    let mut out = Vec::new();
    collect_steps(board, from, &mut out);
    out
}

fn collect_steps(board: &Board, from: Position, out: &mut Vec<MoveCandidate>) {
    assert_eq!(
        board.piece_at(from),
        Some(Team::Friendly),
        "no friendly piece at {from}"
    );

    let mut frontier: VecDeque<(Position, u32)> = VecDeque::new();
    let mut visited: FxHashSet<Position> = FxHashSet::default();
    frontier.push_back((from, SPACES_PER_BILLY_MOVE));
    visited.insert(from);

    while let Some((pos, hops_left)) = frontier.pop_front() {
        if board.piece_at(pos).is_none() {
            out.push(MoveCandidate::Step { from, to: pos });
        }
        if hops_left == 0 {
            continue;
        }
        for neighbor in pos.neighbors() {
            if board.is_in_range(neighbor)
                && board.piece_at(neighbor).is_none()
                && visited.insert(neighbor)
            {
                frontier.push_back((neighbor, hops_left - 1));
            }
        }
    }
}

/// The Curse's legal steps, grouped per cursed piece in board scan order.
///
/// Only pieces with at least one empty orthogonal neighbor contribute a
/// group. The grouping is load-bearing: the adversary draws a commit
/// chance per piece, then picks uniformly within that piece's group.
#[must_use]
pub fn adversary_steps(board: &Board) -> Vec<SmallVec<[MoveCandidate; 4]>> {
    let mut groups = Vec::new();
    for (pos, team) in board.all_pieces() {
        if team != Team::Cursed {
            continue;
        }
        let group: SmallVec<[MoveCandidate; 4]> = pos
            .neighbors()
            .filter(|&n| board.is_in_range(n) && board.piece_at(n).is_none())
            .map(|to| MoveCandidate::AdversaryStep { from: pos, to })
            .collect();
        if !group.is_empty() {
            groups.push(group);
        }
    }
    groups
}

/// Whether a previously generated candidate is still legal on the board.
///
/// Used by the adversary's pass: moves are generated once at the start of
/// its turn, and earlier moves in the same pass can occupy a later
/// destination or convert the moving piece.
#[must_use]
pub fn is_still_valid(board: &Board, candidate: &MoveCandidate) -> bool {
    let destination_free =
        board.is_in_range(candidate.new_pos()) && board.piece_at(candidate.new_pos()).is_none();
    match candidate {
        MoveCandidate::Placement { .. } => destination_free,
        MoveCandidate::Step { from, .. } => {
            destination_free && board.piece_at(*from) == Some(Team::Friendly)
        }
        MoveCandidate::AdversaryStep { from, .. } => {
            destination_free && board.piece_at(*from) == Some(Team::Cursed)
        }
    }
}
