//! White team policy: jump-capture the first reachable black piece.
//!
//! The white piece scans its four diagonal rays in [`CAPTURE_BEARINGS`]
//! order. Along a ray it looks for the first active black piece whose
//! landing square (one further along the ray) is on the board. If that
//! landing square holds another active black piece the ray is abandoned.
//! The first valid target is captured: white moves to the landing square and
//! the black piece is deactivated.

use crate::board::{Board, Square};
use crate::constants::{Bearing, CAPTURE_BEARINGS};
use crate::piece::Piece;

/// A capture found by [`find_capture`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Capture {
    /// Index of the captured black piece.
    pub target: usize,
    pub bearing: Bearing,
    /// Square the white piece lands on.
    pub landing: Square,
}

/// Index of the active black piece on `(x, y)`, if any.
fn black_at(blacks: &[Piece], x: i32, y: i32) -> Option<usize> {
    blacks.iter().position(|p| p.occupies(x, y))
}

/// Scan one ray from `from` for a capture target.
fn scan_ray(board: &Board, blacks: &[Piece], from: Square, (dx, dy): Bearing) -> Option<Capture> {
    let (mut x, mut y) = (from.0 + dx, from.1 + dy);
    while board.contains(x + dx, y + dy) {
        if let Some(target) = black_at(blacks, x, y) {
            let landing = (x + dx, y + dy);
            if black_at(blacks, landing.0, landing.1).is_some() {
                return None;
            }
            return Some(Capture {
                target,
                bearing: (dx, dy),
                landing,
            });
        }
        x += dx;
        y += dy;
    }
    None
}

/// Find the first capture available to the white piece.
pub fn find_capture(board: &Board, white: &Piece, blacks: &[Piece]) -> Option<Capture> {
    CAPTURE_BEARINGS
        .into_iter()
        .find_map(|bearing| scan_ray(board, blacks, white.square(), bearing))
}

/// Capture if possible. Returns the capture performed, or `None` if white passes.
pub fn capture_if_possible(board: &Board, white: &mut Piece, blacks: &mut [Piece]) -> Option<Capture> {
    let capture = find_capture(board, white, blacks)?;
    white.set_square(capture.landing);
    blacks[capture.target].deactivate();
    Some(capture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Direction;

    #[test]
    fn test_adjacent_capture() {
        let board = Board::new(8, 8);
        let mut white = Piece::white(3, 4, Direction::Up);
        let mut blacks = vec![Piece::black(2, 3, Direction::Up, 1)];
        let capture = capture_if_possible(&board, &mut white, &mut blacks).unwrap();
        assert_eq!(capture.bearing, (-1, -1));
        assert_eq!(capture.landing, (1, 2));
        assert_eq!(white.square(), (1, 2));
        assert!(!blacks[0].active);
    }

    #[test]
    fn test_distant_capture_along_ray() {
        let board = Board::new(8, 8);
        let mut white = Piece::white(0, 1, Direction::Up);
        let mut blacks = vec![Piece::black(3, 4, Direction::Up, 1)];
        let capture = capture_if_possible(&board, &mut white, &mut blacks).unwrap();
        assert_eq!(capture.landing, (4, 5));
        assert_eq!(white.square(), (4, 5));
    }

    #[test]
    fn test_blocked_landing_abandons_ray() {
        let board = Board::new(8, 8);
        let white = Piece::white(3, 4, Direction::Up);
        let blacks = vec![
            Piece::black(2, 3, Direction::Up, 1),
            Piece::black(1, 2, Direction::Up, 1),
        ];
        assert_eq!(find_capture(&board, &white, &blacks), None);
    }

    #[test]
    fn test_blocked_ray_falls_through_to_next_bearing() {
        let board = Board::new(8, 8);
        let white = Piece::white(3, 4, Direction::Up);
        let blacks = vec![
            Piece::black(4, 5, Direction::Up, 1),
            Piece::black(5, 6, Direction::Up, 1),
            Piece::black(2, 3, Direction::Up, 1),
        ];
        let capture = find_capture(&board, &white, &blacks).unwrap();
        assert_eq!(capture.target, 2);
        assert_eq!(capture.bearing, (-1, -1));
        assert_eq!(capture.landing, (1, 2));
    }

    #[test]
    fn test_inactive_pieces_are_ignored() {
        let board = Board::new(8, 8);
        let white = Piece::white(3, 4, Direction::Up);
        let mut blacks = vec![
            Piece::black(2, 3, Direction::Up, 1),
            Piece::black(1, 2, Direction::Up, 1),
        ];
        // Dead blocker no longer protects the piece in front of it
        blacks[1].deactivate();
        let capture = find_capture(&board, &white, &blacks).unwrap();
        assert_eq!(capture.target, 0);

        // A dead piece is never a target
        blacks[0].deactivate();
        assert_eq!(find_capture(&board, &white, &blacks), None);
    }

    #[test]
    fn test_landing_must_be_on_board() {
        let board = Board::new(8, 8);
        let white = Piece::white(1, 2, Direction::Up);
        let blacks = vec![Piece::black(0, 1, Direction::Up, 1)];
        assert_eq!(find_capture(&board, &white, &blacks), None);
    }

    #[test]
    fn test_bearing_priority() {
        let board = Board::new(8, 8);
        let white = Piece::white(3, 4, Direction::Up);
        let blacks = vec![
            Piece::black(2, 3, Direction::Up, 1), // (-1,-1)
            Piece::black(4, 3, Direction::Up, 1), // (1,-1)
            Piece::black(4, 5, Direction::Up, 1), // (1,1)
        ];
        let capture = find_capture(&board, &white, &blacks).unwrap();
        assert_eq!(capture.bearing, (1, 1));
        assert_eq!(capture.target, 2);

        let capture = find_capture(&board, &white, &blacks[..2]).unwrap();
        assert_eq!(capture.bearing, (1, -1));
        assert_eq!(capture.target, 1);
    }

    #[test]
    fn test_no_capture_leaves_white_in_place() {
        let board = Board::new(8, 8);
        let mut white = Piece::white(3, 4, Direction::Up);
        let mut blacks = vec![Piece::black(5, 0, Direction::Up, 1)];
        assert_eq!(capture_if_possible(&board, &mut white, &mut blacks), None);
        assert_eq!(white.square(), (3, 4));
        assert!(blacks[0].active);
    }
}
