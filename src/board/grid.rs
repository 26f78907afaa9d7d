//! The game board: two coordinate-indexed element layers plus the seed.
//!
//! Pieces and hosts occupy independent layers, so a cell may hold one of
//! each at the same time. Elements are plain data (a team per occupied
//! cell); identity is the `(layer, position)` pair. Captures flip the team
//! in place, they never remove anything.
//!
//! All mutating operations fail fast on precondition violations (occupied
//! target cell, absent element, out-of-range position). Those are
//! programming errors in the caller, never conditions to recover from.

use crate::board::events::{GameEvent, Notifier};
use crate::core::{BoardSize, GameRng, Position, RectIter, Team};

/// One coordinate-indexed element layer: at most one team-owned element
/// per cell.
#[derive(Clone, Debug)]
pub(crate) struct Layer {
    size: i32,
    cells: Vec<Option<Team>>,
}

impl Layer {
    fn new(size: i32) -> Self {
        Self {
            size,
            cells: vec![None; (size * size) as usize],
        }
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            pos.x >= 0 && pos.y >= 0 && pos.x < self.size && pos.y < self.size,
            "position {pos} is outside the {0}x{0} board",
            self.size
        );
        (pos.y * self.size + pos.x) as usize
    }

    fn get(&self, pos: Position) -> Option<Team> {
        self.cells[self.index(pos)]
    }

    fn set(&mut self, pos: Position, value: Option<Team>) {
        let index = self.index(pos);
        self.cells[index] = value;
    }
}

/// The full board state: piece layer, host layer, seed, and size.
///
/// The board is exclusively owned and mutated by the currently-resolving
/// move; there is no interior concurrency. Presentation layers observe
/// changes through [`Board::subscribe`].
#[derive(Debug)]
pub struct Board {
    pub(crate) pieces: Layer,
    pub(crate) hosts: Layer,
    pub(crate) seed: i32,
    pub(crate) size: BoardSize,
    notifier: Notifier,
}

impl Board {
    /// Create a board and run initial setup: the per-size number of Curse
    /// host+piece pairs are placed at seeded-random positions.
    #[must_use]
    pub fn new(seed: i32, size: BoardSize) -> Self {
        let mut board = Self::empty(seed, size);
        board.place_initial_hosts();
        board
    }

    /// Create a board with no elements. Used by tests and by deserialization.
    #[must_use]
    pub fn empty(seed: i32, size: BoardSize) -> Self {
        Self {
            pieces: Layer::new(size.side()),
            hosts: Layer::new(size.side()),
            seed,
            size,
            notifier: Notifier::new(),
        }
    }

    /// Reset to a fresh game: remove everything, adopt the new seed and
    /// size, and redo initial setup.
    pub fn reset(&mut self, seed: i32, size: BoardSize) {
        self.clear();
        self.seed = seed;
        self.reallocate(size);
        self.place_initial_hosts();
    }

    /// Swap in empty layers of the given size.
    pub(crate) fn reallocate(&mut self, size: BoardSize) {
        self.size = size;
        self.pieces = Layer::new(size.side());
        self.hosts = Layer::new(size.side());
    }

    /// Initial setup: `host_count` Curse host+piece pairs at uniform-random
    /// positions, re-drawing any candidate closer than Manhattan distance 2
    /// to an already-placed host.
    ///
    /// The retry is unbounded. The shipped configuration tables keep host
    /// density far below anything that could fail to space out, so a draw
    /// loop always terminates in practice.
    fn place_initial_hosts(&mut self) {
        tracing::debug!(seed = self.seed, size = self.size.side(), "initial board setup");
        let mut rng = GameRng::from_board_seed(self.seed);
        let mut placed: Vec<Position> = Vec::with_capacity(self.size.host_count() as usize);
        for _ in 0..self.size.host_count() {
            let pos = loop {
                let candidate = rng.gen_position(self.size);
                if placed.iter().all(|&p| p.manhattan_distance(candidate) >= 2) {
                    break candidate;
                }
            };
            placed.push(pos);
            self.add_element(true, pos, Team::Cursed);
            self.add_element(false, pos, Team::Cursed);
        }
    }

    /// Register a callback for board change events.
    pub fn subscribe(&mut self, callback: impl FnMut(&GameEvent) + 'static) {
        self.notifier.subscribe(callback);
    }

    // === Queries ===

    #[must_use]
    pub fn seed(&self) -> i32 {
        self.seed
    }

    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Whether the position lies on the board.
    #[must_use]
    pub fn is_in_range(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.size.side() && pos.y < self.size.side()
    }

    /// Team of the piece at `pos`, if any.
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<Team> {
        self.pieces.get(pos)
    }

    /// Team of the host at `pos`, if any.
    #[must_use]
    pub fn host_at(&self, pos: Position) -> Option<Team> {
        self.hosts.get(pos)
    }

    /// Every board cell, in scan order.
    #[must_use]
    pub fn cells(&self) -> RectIter {
        Position::board_cells(self.size.side())
    }

    /// All pieces as `(position, team)`, in scan order.
    pub fn all_pieces(&self) -> impl Iterator<Item = (Position, Team)> + '_ {
        self.cells().filter_map(|pos| self.piece_at(pos).map(|team| (pos, team)))
    }

    /// All hosts as `(position, team)`, in scan order.
    pub fn all_hosts(&self) -> impl Iterator<Item = (Position, Team)> + '_ {
        self.cells().filter_map(|pos| self.host_at(pos).map(|team| (pos, team)))
    }

    /// Number of cursed pieces currently on the board. This is the Curse
    /// faction's per-turn move budget.
    #[must_use]
    pub fn cursed_piece_count(&self) -> u32 {
        self.all_pieces().filter(|&(_, team)| team == Team::Cursed).count() as u32
    }

    // === Mutations ===

    /// Add an element.
    ///
    /// # Panics
    ///
    /// Panics if the target cell already holds an element on that layer,
    /// or if `pos` is out of range.
    pub fn add_element(&mut self, is_host: bool, pos: Position, team: Team) {
        let layer = if is_host { &mut self.hosts } else { &mut self.pieces };
        assert!(
            layer.get(pos).is_none(),
            "cell {pos} already holds a {}",
            if is_host { "host" } else { "piece" }
        );
        layer.set(pos, Some(team));
        self.notifier.emit(&GameEvent::ElementAdded { is_host, team, pos });
    }

    /// Remove the element at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if there is no element on that layer at `pos`.
    pub fn remove_element(&mut self, is_host: bool, pos: Position) {
        let layer = if is_host { &mut self.hosts } else { &mut self.pieces };
        let team = layer.get(pos).unwrap_or_else(|| {
            panic!("no {} at {pos} to remove", if is_host { "host" } else { "piece" })
        });
        layer.set(pos, None);
        self.notifier.emit(&GameEvent::ElementRemoved { is_host, team, pos });
    }

    /// Relocate an element from `from` to `to`.
    ///
    /// Moving a *piece* off a cell that holds a *host* makes the host spawn
    /// a replacement piece of the host's team at the vacated cell.
    ///
    /// # Panics
    ///
    /// Panics if there is no element at `from` or the destination cell is
    /// occupied on that layer.
    pub fn move_element(&mut self, is_host: bool, from: Position, to: Position) {
        let layer = if is_host { &mut self.hosts } else { &mut self.pieces };
        let team = layer.get(from).unwrap_or_else(|| {
            panic!("no {} at {from} to move", if is_host { "host" } else { "piece" })
        });
        assert!(layer.get(to).is_none(), "destination cell {to} is occupied");
        layer.set(from, None);
        layer.set(to, Some(team));
        self.notifier.emit(&GameEvent::ElementMoved { is_host, team, from, to });

        if !is_host {
            if let Some(host_team) = self.host_at(from) {
                self.add_element(false, from, host_team);
            }
        }
    }

    /// Flip the team of the piece at `pos` (a capture).
    ///
    /// Subscribers see this as a removal followed by an addition of the
    /// converted piece.
    ///
    /// # Panics
    ///
    /// Panics if there is no piece at `pos`.
    pub fn flip_piece(&mut self, pos: Position) {
        let team = self
            .piece_at(pos)
            .unwrap_or_else(|| panic!("no piece at {pos} to capture"));
        self.pieces.set(pos, Some(team.enemy()));
        self.notifier.emit(&GameEvent::ElementRemoved { is_host: false, team, pos });
        self.notifier.emit(&GameEvent::ElementAdded {
            is_host: false,
            team: team.enemy(),
            pos,
        });
    }

    /// Remove every piece and host.
    pub fn clear(&mut self) {
        let cells: Vec<Position> = self.cells().collect();
        for pos in cells {
            if self.piece_at(pos).is_some() {
                self.remove_element(false, pos);
            }
            if self.host_at(pos).is_some() {
                self.remove_element(true, pos);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_initial_setup_is_deterministic() {
        let a = Board::new(42, BoardSize::Six);
        let b = Board::new(42, BoardSize::Six);
        let pieces_a: Vec<_> = a.all_pieces().collect();
        let pieces_b: Vec<_> = b.all_pieces().collect();
        assert_eq!(pieces_a, pieces_b);
    }

    #[test]
    fn test_initial_setup_host_count_and_spacing() {
        for (seed, size) in [(1, BoardSize::Six), (77, BoardSize::Nine)] {
            let board = Board::new(seed, size);
            let hosts: Vec<_> = board.all_hosts().collect();
            assert_eq!(hosts.len(), size.host_count() as usize);

            // Every host starts with a cursed piece on its cell.
            for &(pos, team) in &hosts {
                assert_eq!(team, Team::Cursed);
                assert_eq!(board.piece_at(pos), Some(Team::Cursed));
            }

            // Pairwise Manhattan spacing of at least 2.
            for (i, &(a, _)) in hosts.iter().enumerate() {
                for &(b, _) in &hosts[i + 1..] {
                    assert!(a.manhattan_distance(b) >= 2, "{a} and {b} too close");
                }
            }
        }
    }

    #[test]
    fn test_piece_and_host_share_cell() {
        let mut board = Board::empty(0, BoardSize::Six);
        let pos = Position::new(2, 3);
        board.add_element(true, pos, Team::Cursed);
        board.add_element(false, pos, Team::Friendly);
        assert_eq!(board.host_at(pos), Some(Team::Cursed));
        assert_eq!(board.piece_at(pos), Some(Team::Friendly));
    }

    #[test]
    #[should_panic(expected = "already holds")]
    fn test_add_to_occupied_cell_panics() {
        let mut board = Board::empty(0, BoardSize::Six);
        board.add_element(false, Position::new(0, 0), Team::Friendly);
        board.add_element(false, Position::new(0, 0), Team::Cursed);
    }

    #[test]
    #[should_panic(expected = "no piece")]
    fn test_remove_absent_piece_panics() {
        let mut board = Board::empty(0, BoardSize::Six);
        board.remove_element(false, Position::new(1, 1));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_out_of_range_panics() {
        let mut board = Board::empty(0, BoardSize::Six);
        board.add_element(false, Position::new(6, 0), Team::Friendly);
    }

    #[test]
    fn test_moving_piece_off_host_spawns_replacement() {
        let mut board = Board::empty(0, BoardSize::Six);
        let from = Position::new(1, 1);
        let to = Position::new(1, 2);
        board.add_element(true, from, Team::Cursed);
        board.add_element(false, from, Team::Cursed);

        board.move_element(false, from, to);

        assert_eq!(board.piece_at(to), Some(Team::Cursed));
        // The host immediately refilled its own cell.
        assert_eq!(board.piece_at(from), Some(Team::Cursed));
    }

    #[test]
    fn test_flip_piece_changes_team_in_place() {
        let mut board = Board::empty(0, BoardSize::Six);
        let pos = Position::new(3, 3);
        board.add_element(false, pos, Team::Cursed);
        board.flip_piece(pos);
        assert_eq!(board.piece_at(pos), Some(Team::Friendly));
    }

    #[test]
    fn test_events_fire_for_mutations() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut board = Board::empty(0, BoardSize::Six);
        let sink = Rc::clone(&log);
        board.subscribe(move |event| sink.borrow_mut().push(*event));

        let from = Position::new(0, 0);
        let to = Position::new(0, 1);
        board.add_element(false, from, Team::Friendly);
        board.move_element(false, from, to);
        board.remove_element(false, to);

        assert_eq!(
            *log.borrow(),
            vec![
                GameEvent::ElementAdded { is_host: false, team: Team::Friendly, pos: from },
                GameEvent::ElementMoved { is_host: false, team: Team::Friendly, from, to },
                GameEvent::ElementRemoved { is_host: false, team: Team::Friendly, pos: to },
            ]
        );
    }

    #[test]
    fn test_clear_empties_both_layers() {
        let mut board = Board::new(5, BoardSize::Seven);
        board.clear();
        assert_eq!(board.all_pieces().count(), 0);
        assert_eq!(board.all_hosts().count(), 0);
    }
}
