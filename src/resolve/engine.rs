//! Computes the effects of a candidate move, then applies them.
//!
//! Resolution works in two phases:
//!
//! 1. **Compute**: the candidate is evaluated against a *virtual* board,
//!    a per-cell lookup that pretends the move already happened (and, for
//!    capture checks, that a detected host block is already gone) without
//!    mutating anything.
//! 2. **Apply**: the piece is actually placed or moved, captured pieces
//!    flip team, and a detected host block is consumed.
//!
//! The split keeps generation and "what would this move do" queries free
//! of side effects; only [`apply`] touches the board.

use crate::board::Board;
use crate::core::{Position, Team, HOST_BLOCK_SIZE};
use crate::moves::MoveCandidate;
use rustc_hash::FxHashSet;

/// The computed, not-yet-applied effect of a candidate move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Min corner of the 3x3 block of same-team pieces this move completes,
    /// if any. The block is destroyed and replaced by one host at its
    /// center when the outcome is applied.
    pub host_block_min: Option<Position>,

    /// Positions of enemy pieces that flip to the acting team.
    pub captures: FxHashSet<Position>,
}

impl MoveOutcome {
    /// Compute the outcome of `candidate` without mutating the board.
    #[must_use]
    pub fn compute(board: &Board, candidate: &MoveCandidate) -> Self {
        let previous = candidate.previous_pos();
        let new_pos = candidate.new_pos();
        let team = candidate.acting_team();

        let host_block_min = host_block(board, previous, new_pos, team);
        let captures = captures(board, previous, new_pos, team, host_block_min);
        Self { host_block_min, captures }
    }
}

/// Per-cell piece lookup over the board as it will be after a move.
struct VirtualBoard<'a> {
    board: &'a Board,
    previous: Option<Position>,
    new_pos: Position,
    team: Team,
    /// Min corner of a host block whose cells read as empty.
    ignore_block: Option<Position>,
}

impl VirtualBoard<'_> {
    /// Team of the piece at `pos` after the move, if any.
    ///
    /// Precedence: ignored host-block cells read empty; the vacated source
    /// cell reads as the host's team if a host sits there (the host spawns
    /// a replacement the instant the piece leaves), else empty; the
    /// destination reads as the acting team; out-of-range reads empty;
    /// anything else is the real board.
    fn piece_team(&self, pos: Position) -> Option<Team> {
        if let Some(block_min) = self.ignore_block {
            if in_host_block(pos, block_min) {
                return None;
            }
        }
        if self.previous == Some(pos) {
            return self.board.host_at(pos);
        }
        if pos == self.new_pos {
            return Some(self.team);
        }
        if !self.board.is_in_range(pos) {
            return None;
        }
        self.board.piece_at(pos)
    }
}

fn in_host_block(pos: Position, block_min: Position) -> bool {
    let offset = pos - block_min;
    offset.x >= 0 && offset.x < HOST_BLOCK_SIZE && offset.y >= 0 && offset.y < HOST_BLOCK_SIZE
}

/// Find the host block completed by moving/placing a piece of `team` at
/// `new_pos`, vacating `previous` if given.
///
/// Candidate min corners are the positions whose 3x3 window contains
/// `new_pos`, tested in scan order; the first window whose nine cells all
/// read as `team` wins. Returns `None` if no window matches.
#[must_use]
pub fn host_block(
    board: &Board,
    previous: Option<Position>,
    new_pos: Position,
    team: Team,
) -> Option<Position> {
    let lookup = VirtualBoard { board, previous, new_pos, team, ignore_block: None };

    let corners = Position::rect(new_pos - (HOST_BLOCK_SIZE - 1), new_pos + 1);
    for corner in corners {
        let window = Position::rect(corner, corner + HOST_BLOCK_SIZE);
        let mut all_match = true;
        for cell in window {
            if lookup.piece_team(cell) != Some(team) {
                all_match = false;
                break;
            }
        }
        if all_match {
            return Some(corner);
        }
    }
    None
}

/// Find all captures from moving/placing a piece of `team` at `new_pos`.
///
/// From the destination, each orthogonal direction is scanned as a ray: a
/// run of one or more enemy cells immediately followed by an acting-team
/// anchor is captured wholesale. Directions are independent, so one move
/// can capture along several rays at once. Cells inside `ignore_block`
/// are about to be destroyed for a host and count as neither capturable
/// nor anchors.
#[must_use]
pub fn captures(
    board: &Board,
    previous: Option<Position>,
    new_pos: Position,
    team: Team,
    ignore_block: Option<Position>,
) -> FxHashSet<Position> {
    let lookup = VirtualBoard { board, previous, new_pos, team, ignore_block };
    let enemy = team.enemy();

    let mut captured = FxHashSet::default();
    for dir in Position::ORTHOGONAL {
        let run_start = new_pos + dir;
        if lookup.piece_team(run_start) != Some(enemy) {
            continue;
        }

        let mut run_end = run_start;
        while lookup.piece_team(run_end + dir) == Some(enemy) {
            run_end = run_end + dir;
        }

        let anchor = run_end + dir;
        if lookup.piece_team(anchor) == Some(team) {
            let mut pos = run_start;
            while pos != anchor {
                captured.insert(pos);
                pos = pos + dir;
            }
        }
    }
    captured
}

/// Resolve `candidate` and apply its effects.
///
/// Order: compute the outcome against the current board, perform the
/// placement or move (which may make a host spawn a replacement piece at
/// the vacated cell), flip every captured piece, then consume the host
/// block: every piece inside it is removed and a single host of the
/// acting team replaces whatever host sat at the block's center.
pub fn apply(board: &mut Board, candidate: &MoveCandidate) -> MoveOutcome {
    let outcome = MoveOutcome::compute(board, candidate);

    match candidate {
        MoveCandidate::Placement { pos } => {
            board.add_element(false, *pos, Team::Friendly);
        }
        MoveCandidate::Step { from, to } | MoveCandidate::AdversaryStep { from, to } => {
            board.move_element(false, *from, *to);
        }
    }

    for &pos in &outcome.captures {
        board.flip_piece(pos);
    }

    if let Some(corner) = outcome.host_block_min {
        tracing::debug!(%corner, team = ?candidate.acting_team(), "host block formed");
        for pos in Position::rect(corner, corner + HOST_BLOCK_SIZE) {
            board.remove_element(false, pos);
        }
        let center = corner + (HOST_BLOCK_SIZE / 2);
        if board.host_at(center).is_some() {
            board.remove_element(true, center);
        }
        board.add_element(true, center, candidate.acting_team());
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardSize;

    fn empty_board() -> Board {
        Board::empty(0, BoardSize::Six)
    }

    #[test]
    fn test_capture_single_ray() {
        // F c c F. placing the left F at (0,0) flips both cursed pieces.
        let mut board = empty_board();
        board.add_element(false, Position::new(1, 0), Team::Cursed);
        board.add_element(false, Position::new(2, 0), Team::Cursed);
        board.add_element(false, Position::new(3, 0), Team::Friendly);

        let candidate = MoveCandidate::Placement { pos: Position::new(0, 0) };
        let outcome = apply(&mut board, &candidate);

        assert_eq!(
            outcome.captures,
            [Position::new(1, 0), Position::new(2, 0)].into_iter().collect()
        );
        assert_eq!(board.piece_at(Position::new(1, 0)), Some(Team::Friendly));
        assert_eq!(board.piece_at(Position::new(2, 0)), Some(Team::Friendly));
    }

    #[test]
    fn test_capture_requires_anchor() {
        // A run with no friendly piece past it does not flip.
        let mut board = empty_board();
        board.add_element(false, Position::new(1, 0), Team::Cursed);
        board.add_element(false, Position::new(2, 0), Team::Cursed);

        let outcome = apply(&mut board, &MoveCandidate::Placement { pos: Position::new(0, 0) });
        assert!(outcome.captures.is_empty());
        assert_eq!(board.piece_at(Position::new(1, 0)), Some(Team::Cursed));
    }

    #[test]
    fn test_capture_run_bounded_by_board_edge() {
        // The run walks off the edge: no anchor, no capture.
        let mut board = empty_board();
        board.add_element(false, Position::new(4, 0), Team::Cursed);
        board.add_element(false, Position::new(5, 0), Team::Cursed);

        let outcome = apply(&mut board, &MoveCandidate::Placement { pos: Position::new(3, 0) });
        assert!(outcome.captures.is_empty());
    }

    #[test]
    fn test_capture_multiple_rays() {
        // Two independent runs from one placement flip simultaneously.
        let mut board = empty_board();
        board.add_element(false, Position::new(3, 2), Team::Cursed);
        board.add_element(false, Position::new(4, 2), Team::Friendly);
        board.add_element(false, Position::new(2, 3), Team::Cursed);
        board.add_element(false, Position::new(2, 4), Team::Friendly);
        // A bystander outside both runs.
        board.add_element(false, Position::new(0, 0), Team::Cursed);

        let outcome = apply(&mut board, &MoveCandidate::Placement { pos: Position::new(2, 2) });
        assert_eq!(
            outcome.captures,
            [Position::new(3, 2), Position::new(2, 3)].into_iter().collect()
        );
        assert_eq!(board.piece_at(Position::new(0, 0)), Some(Team::Cursed));
    }

    #[test]
    fn test_capture_by_cursed_move() {
        // Captures work symmetrically for the cursed team.
        let mut board = empty_board();
        board.add_element(false, Position::new(1, 1), Team::Cursed);
        board.add_element(false, Position::new(2, 2), Team::Friendly);
        board.add_element(false, Position::new(3, 2), Team::Cursed);

        let candidate = MoveCandidate::AdversaryStep {
            from: Position::new(1, 1),
            to: Position::new(1, 2),
        };
        let outcome = apply(&mut board, &candidate);
        assert_eq!(outcome.captures, [Position::new(2, 2)].into_iter().collect());
        assert_eq!(board.piece_at(Position::new(2, 2)), Some(Team::Cursed));
    }

    #[test]
    fn test_vacated_host_cell_counts_for_captures() {
        // Billy steps a friendly piece off a cursed host. The replacement
        // piece the host spawns extends the enemy run behind the mover.
        let mut board = empty_board();
        let source = Position::new(1, 0);
        board.add_element(true, source, Team::Cursed);
        board.add_element(false, source, Team::Friendly);
        board.add_element(false, Position::new(2, 0), Team::Cursed);
        board.add_element(false, Position::new(3, 0), Team::Friendly);

        // Step (1,0) -> (0,0). The ray from the destination reads the
        // vacated cell as cursed (the spawn), then (2,0) cursed, then the
        // (3,0) anchor.
        let candidate = MoveCandidate::Step { from: source, to: Position::new(0, 0) };
        let outcome = apply(&mut board, &candidate);

        assert_eq!(
            outcome.captures,
            [source, Position::new(2, 0)].into_iter().collect()
        );
        assert_eq!(board.piece_at(source), Some(Team::Friendly));
        assert_eq!(board.piece_at(Position::new(2, 0)), Some(Team::Friendly));
    }

    #[test]
    fn test_host_block_formation() {
        // Eight friendly pieces around (1,1); placing the ninth forms a
        // host block with min corner (0,0).
        let mut board = empty_board();
        for pos in Position::rect(Position::ZERO, Position::new(3, 3)) {
            if pos != Position::new(1, 1) {
                board.add_element(false, pos, Team::Friendly);
            }
        }

        let outcome = apply(&mut board, &MoveCandidate::Placement { pos: Position::new(1, 1) });
        assert_eq!(outcome.host_block_min, Some(Position::ZERO));

        // All nine pieces are consumed; one friendly host sits at the center.
        for pos in Position::rect(Position::ZERO, Position::new(3, 3)) {
            assert_eq!(board.piece_at(pos), None);
        }
        assert_eq!(board.host_at(Position::new(1, 1)), Some(Team::Friendly));
        assert_eq!(board.all_hosts().count(), 1);
    }

    #[test]
    fn test_host_block_replaces_center_host() {
        let mut board = empty_board();
        board.add_element(true, Position::new(1, 1), Team::Cursed);
        for pos in Position::rect(Position::ZERO, Position::new(3, 3)) {
            if pos != Position::new(1, 1) {
                board.add_element(false, pos, Team::Friendly);
            }
        }

        apply(&mut board, &MoveCandidate::Placement { pos: Position::new(1, 1) });
        // Replaced, not duplicated.
        assert_eq!(board.host_at(Position::new(1, 1)), Some(Team::Friendly));
        assert_eq!(board.all_hosts().count(), 1);
    }

    #[test]
    fn test_host_block_first_corner_wins() {
        // A 3x4 slab of friendly pieces completes two overlapping windows;
        // the scan-order-first corner is chosen.
        let mut board = empty_board();
        for pos in Position::rect(Position::ZERO, Position::new(3, 4)) {
            if pos != Position::new(1, 1) {
                board.add_element(false, pos, Team::Friendly);
            }
        }

        let corner = host_block(&board, None, Position::new(1, 1), Team::Friendly);
        assert_eq!(corner, Some(Position::ZERO));
    }

    #[test]
    fn test_no_host_block_for_mixed_teams() {
        let mut board = empty_board();
        for pos in Position::rect(Position::ZERO, Position::new(3, 3)) {
            if pos != Position::new(1, 1) {
                board.add_element(false, pos, Team::Friendly);
            }
        }
        board.flip_piece(Position::new(2, 2));

        let corner = host_block(&board, None, Position::new(1, 1), Team::Friendly);
        assert_eq!(corner, None);
    }

    #[test]
    fn test_host_block_cells_do_not_capture() {
        // An enemy run anchored only through cells that the forming host
        // block consumes must not flip.
        let mut board = empty_board();
        for pos in Position::rect(Position::ZERO, Position::new(3, 3)) {
            if pos != Position::new(1, 1) {
                board.add_element(false, pos, Team::Friendly);
            }
        }
        // Enemy run to the right of the block, anchored by a block cell on
        // its near side only.
        board.add_element(false, Position::new(3, 1), Team::Cursed);

        let outcome =
            MoveOutcome::compute(&board, &MoveCandidate::Placement { pos: Position::new(1, 1) });
        assert_eq!(outcome.host_block_min, Some(Position::ZERO));
        assert!(outcome.captures.is_empty());
    }

    #[test]
    fn test_step_resolution_spawns_host_piece_before_flips() {
        // Moving the friendly piece off a cursed host leaves a fresh cursed
        // piece behind, and that piece can be among the captured run.
        let mut board = empty_board();
        let source = Position::new(2, 0);
        board.add_element(true, source, Team::Cursed);
        board.add_element(false, source, Team::Friendly);
        board.add_element(false, Position::new(0, 0), Team::Friendly);
        board.add_element(false, Position::new(3, 0), Team::Friendly);

        let candidate =
            MoveCandidate::Step { from: source, to: Position::new(1, 0) };
        let outcome = apply(&mut board, &candidate);

        // Ray from the destination rightward: the vacated (2,0) reads as
        // the cursed spawn, anchored by (3,0). The spawn flips immediately.
        assert_eq!(outcome.captures, [source].into_iter().collect());
        assert_eq!(board.piece_at(source), Some(Team::Friendly));
        assert_eq!(board.piece_at(Position::new(1, 0)), Some(Team::Friendly));
    }
}
