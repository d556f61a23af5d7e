//! Black team policy: pick an eligible piece at random and retreat it.
//!
//! Each round exactly one black piece with coins left acts. It pays one coin
//! and then tries four diagonal maneuvers in a fixed order relative to its
//! facing, taking the first whose destination is on the board and free of the
//! white piece and of other active black pieces. If none is clear the piece
//! stays put, but the coin is still spent.

use fastrand::Rng;

use crate::board::{Board, Direction, Square};
use crate::piece::Piece;

/// Diagonal maneuvers relative to a piece's facing, in the order they are tried.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Maneuver {
    /// Step forward, turn right, step. Ends facing right.
    AheadRight,
    /// Step forward, turn left, step. Ends facing left.
    AheadLeft,
    /// Turn left, step, turn left, step. Ends facing backwards.
    BehindLeft,
    /// Turn around, step, turn left, step. Ends facing right.
    BehindRight,
}

impl Maneuver {
    pub const ORDER: [Maneuver; 4] = [
        Maneuver::AheadRight,
        Maneuver::AheadLeft,
        Maneuver::BehindLeft,
        Maneuver::BehindRight,
    ];

    /// Net diagonal displacement of this maneuver for a piece facing `facing`.
    pub fn offset(self, facing: Direction) -> (i32, i32) {
        let (along, side) = match self {
            Maneuver::AheadRight => (facing, facing.right()),
            Maneuver::AheadLeft => (facing, facing.left()),
            Maneuver::BehindLeft => (facing.opposite(), facing.left()),
            Maneuver::BehindRight => (facing.opposite(), facing.right()),
        };
        let (ax, ay) = along.delta();
        let (sx, sy) = side.delta();
        (ax + sx, ay + sy)
    }

    /// Carry out the maneuver using only the piece's primitive motions.
    pub fn perform(self, piece: &mut Piece) {
        match self {
            Maneuver::AheadRight => {
                piece.step();
                piece.turn_left();
                piece.turn_left();
                piece.turn_left();
                piece.step();
            }
            Maneuver::AheadLeft => {
                piece.step();
                piece.turn_left();
                piece.step();
            }
            Maneuver::BehindLeft => {
                piece.turn_left();
                piece.step();
                piece.turn_left();
                piece.step();
            }
            Maneuver::BehindRight => {
                piece.turn_left();
                piece.turn_left();
                piece.step();
                piece.turn_left();
                piece.step();
            }
        }
    }
}

/// What the black team did in one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlackAction {
    /// Index of the piece that acted.
    pub index: usize,
    pub from: Square,
    /// `None` if every destination was blocked.
    pub maneuver: Option<Maneuver>,
}

/// Pick a uniformly random black piece that is active and has coins.
///
/// Indices are drawn and rejected until an eligible piece comes up. Returns
/// `None` without drawing when no piece is eligible, since the draw loop
/// would otherwise never end.
pub fn select_black(rng: &mut Rng, blacks: &[Piece]) -> Option<usize> {
    if !blacks.iter().any(Piece::can_act) {
        return None;
    }
    loop {
        let i = rng.usize(..blacks.len());
        if blacks[i].can_act() {
            return Some(i);
        }
    }
}

/// First maneuver in [`Maneuver::ORDER`] whose destination is clear.
pub fn choose_maneuver(
    board: &Board,
    blacks: &[Piece],
    index: usize,
    white: Square,
) -> Option<Maneuver> {
    let piece = &blacks[index];
    Maneuver::ORDER.into_iter().find(|m| {
        let (dx, dy) = m.offset(piece.facing);
        let (nx, ny) = (piece.x + dx, piece.y + dy);
        board.contains(nx, ny)
            && (nx, ny) != white
            && !blacks
                .iter()
                .enumerate()
                .any(|(j, other)| j != index && other.occupies(nx, ny))
    })
}

/// Spend a coin of `blacks[index]` and retreat it if any diagonal is clear.
///
/// Returns `None` and leaves the piece untouched if it is inactive or has no
/// coins left.
pub fn move_black(
    board: &Board,
    blacks: &mut [Piece],
    index: usize,
    white: Square,
) -> Option<BlackAction> {
    if !blacks[index].can_act() {
        return None;
    }
    let from = blacks[index].square();
    blacks[index].spend_coin();
    let maneuver = choose_maneuver(board, blacks, index, white);
    if let Some(m) = maneuver {
        m.perform(&mut blacks[index]);
    }
    Some(BlackAction {
        index,
        from,
        maneuver,
    })
}

/// Run the black team's turn: select a piece and move it.
///
/// Returns `None` if no black piece could act.
pub fn black_turn(
    rng: &mut Rng,
    board: &Board,
    blacks: &mut [Piece],
    white: Square,
) -> Option<BlackAction> {
    let index = select_black(rng, blacks)?;
    move_black(board, blacks, index, white)
}
