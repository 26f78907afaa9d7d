//! Integer grid positions and iteration helpers.
//!
//! ## Scan order
//!
//! `Position::rect` iterates x-fastest: `(0,0), (1,0), ..., (0,1), ...`.
//! Board scans, host-block corner searches, and the adversary's piece
//! ordering all rely on this order, so it must not change.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};

/// A cell coordinate on the grid.
///
/// Positions are plain integer pairs; validity against a particular board
/// size is checked by the board, not here. Arithmetic is provided for both
/// `Position` and scalar operands, matching how resolution code offsets
/// windows and walks rays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ZERO: Position = Position { x: 0, y: 0 };

    /// The four orthogonal neighbor offsets, in fixed order: left, right,
    /// down, up. Capture rays and adversary move lists depend on this order.
    pub const ORTHOGONAL: [Position; 4] = [
        Position { x: -1, y: 0 },
        Position { x: 1, y: 0 },
        Position { x: 0, y: -1 },
        Position { x: 0, y: 1 },
    ];

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbors of this position, in fixed order.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        Self::ORTHOGONAL.iter().map(move |&d| self + d)
    }

    /// Manhattan (taxicab) distance to another position.
    #[must_use]
    pub fn manhattan_distance(self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Iterate over the rectangle `[min, max)`, x-fastest.
    #[must_use]
    pub fn rect(min: Position, max: Position) -> RectIter {
        RectIter { min, max, next: min }
    }

    /// Iterate over every cell of a square board of the given side length.
    #[must_use]
    pub fn board_cells(size: i32) -> RectIter {
        Self::rect(Position::ZERO, Position::new(size, size))
    }
}

impl Add for Position {
    type Output = Position;
    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<i32> for Position {
    type Output = Position;
    fn add(self, rhs: i32) -> Position {
        Position::new(self.x + rhs, self.y + rhs)
    }
}

impl Sub for Position {
    type Output = Position;
    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<i32> for Position {
    type Output = Position;
    fn sub(self, rhs: i32) -> Position {
        Position::new(self.x - rhs, self.y - rhs)
    }
}

impl Neg for Position {
    type Output = Position;
    fn neg(self) -> Position {
        Position::new(-self.x, -self.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Row-by-row iterator over a half-open rectangle of positions.
#[derive(Clone, Copy, Debug)]
pub struct RectIter {
    min: Position,
    max: Position,
    next: Position,
}

impl Iterator for RectIter {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.min.x >= self.max.x || self.next.y >= self.max.y {
            return None;
        }
        let current = self.next;
        self.next.x += 1;
        if self.next.x >= self.max.x {
            self.next = Position::new(self.min.x, self.next.y + 1);
        }
        Some(current)
    }
}
