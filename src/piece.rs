//! Pieces and their primitive motions.
//!
//! A piece behaves like a small robot: it can step one square forward along
//! its facing and turn left by 90°. Every black maneuver is composed from
//! these two primitives. Pieces are never destroyed; a captured piece is only
//! deactivated and keeps its last position and coin count.

use crate::board::{Direction, Square};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

/// A game piece.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub x: i32,
    pub y: i32,
    pub facing: Direction,
    /// Coins left to spend. Always 0 for the white piece.
    pub coins: u32,
    /// Inactive pieces are out of play for the rest of the game.
    pub active: bool,
    pub side: Side,
}

impl Piece {
    /// Create the white piece. It never carries coins.
    pub fn white(x: i32, y: i32, facing: Direction) -> Self {
        Self {
            x,
            y,
            facing,
            coins: 0,
            active: true,
            side: Side::White,
        }
    }

    pub fn black(x: i32, y: i32, facing: Direction, coins: u32) -> Self {
        Self {
            x,
            y,
            facing,
            coins,
            active: true,
            side: Side::Black,
        }
    }

    #[inline]
    pub fn square(&self) -> Square {
        (self.x, self.y)
    }

    /// Returns true if the piece is active and sits on `(x, y)`.
    #[inline]
    pub fn occupies(&self, x: i32, y: i32) -> bool {
        self.active && self.x == x && self.y == y
    }

    #[inline]
    pub fn has_coins(&self) -> bool {
        self.coins > 0
    }

    /// Returns true if the piece may be selected to act this round.
    #[inline]
    pub fn can_act(&self) -> bool {
        self.active && self.has_coins()
    }

    /// Move one square forward along the current facing.
    pub fn step(&mut self) {
        let (dx, dy) = self.facing.delta();
        self.x += dx;
        self.y += dy;
    }

    /// Rotate 90° counter-clockwise in place.
    pub fn turn_left(&mut self) {
        self.facing = self.facing.left();
    }

    /// Spend one coin. Returns false (and changes nothing) if none are left.
    pub fn spend_coin(&mut self) -> bool {
        if self.coins == 0 {
            return false;
        }
        self.coins -= 1;
        true
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Teleport to `(x, y)` without changing facing.
    pub fn set_square(&mut self, (x, y): Square) {
        self.x = x;
        self.y = y;
    }
}
