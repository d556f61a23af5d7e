//! Random initial placement of the white piece and the black team.
//!
//! Squares are drawn uniformly from the whole board and rejected until they
//! are dark and unoccupied. There is no attempt limit; [`Config::validate`]
//! guarantees enough dark squares exist for every piece.
//!
//! [`Config::validate`]: crate::config::Config::validate

use fastrand::Rng;

use crate::board::{Board, Direction, Square};
use crate::piece::Piece;

/// Draw a uniformly random dark square not listed in `occupied`.
fn random_free_square(rng: &mut Rng, board: &Board, occupied: &[Square]) -> Square {
    loop {
        let x = rng.i32(0..board.width);
        let y = rng.i32(0..board.height);
        if board.is_playable(x, y) && !occupied.contains(&(x, y)) {
            return (x, y);
        }
    }
}

fn random_direction(rng: &mut Rng) -> Direction {
    Direction::ALL[rng.usize(..Direction::ALL.len())]
}

/// Place the white piece on a random dark square with a random facing.
pub fn place_white(rng: &mut Rng, board: &Board) -> Piece {
    let (x, y) = random_free_square(rng, board, &[]);
    Piece::white(x, y, random_direction(rng))
}

/// Place a black piece on a random free dark square.
///
/// The coin count is drawn uniformly from `min_coins..=max_coins`. The caller
/// registers the returned piece and adds its square to `occupied` for the
/// next placement.
pub fn place_black(
    rng: &mut Rng,
    board: &Board,
    occupied: &[Square],
    min_coins: u32,
    max_coins: u32,
) -> Piece {
    let (x, y) = random_free_square(rng, board, occupied);
    let facing = random_direction(rng);
    let coins = rng.u32(min_coins..=max_coins);
    Piece::black(x, y, facing, coins)
}
