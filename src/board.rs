//! Board geometry: bounds, playable squares, and facing directions.
//!
//! Coordinates are `(x, y)` with `x` growing to the right and `y` growing
//! upwards, so [`Direction::Up`] increments `y`. Only the dark squares, where
//! `x + y` is odd, are playable. Pieces only move diagonally, which keeps
//! them on dark squares once placed there.

/// A square on the board as `(x, y)`.
pub type Square = (i32, i32);

/// The four facings a piece can have.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

/// Rotation table indexed by [`Direction::index`]: `(left, opposite, right)`.
const ROTATIONS: [(Direction, Direction, Direction); 4] = [
    (Direction::Left, Direction::Down, Direction::Right), // Up
    (Direction::Up, Direction::Left, Direction::Down),    // Right
    (Direction::Right, Direction::Up, Direction::Left),   // Down
    (Direction::Down, Direction::Right, Direction::Up),   // Left
];

impl Direction {
    /// All directions in clockwise order starting from [`Direction::Up`].
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Position in [`Direction::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    /// Unit displacement of one step in this direction.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
        }
    }

    /// Direction after a 90° counter-clockwise turn.
    #[inline]
    pub fn left(self) -> Direction {
        ROTATIONS[self.index()].0
    }

    /// Direction after a 180° turn.
    #[inline]
    pub fn opposite(self) -> Direction {
        ROTATIONS[self.index()].1
    }

    /// Direction after a 90° clockwise turn.
    #[inline]
    pub fn right(self) -> Direction {
        ROTATIONS[self.index()].2
    }
}

/// Immutable board bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
}

impl Board {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns true if `(x, y)` lies within the board bounds.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        0 <= x && x < self.width && 0 <= y && y < self.height
    }

    /// Returns true if `(x, y)` is within bounds and a dark square.
    #[inline]
    pub fn is_playable(&self, x: i32, y: i32) -> bool {
        self.contains(x, y) && (x + y) % 2 != 0
    }

    /// Number of dark squares on the board.
    pub fn playable_squares(&self) -> u64 {
        (self.width.max(0) as u64 * self.height.max(0) as u64) / 2
    }
}
