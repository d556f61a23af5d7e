//! Game state and the win evaluator.

use std::fmt;

use crate::piece::Piece;

/// Overall game state. `BlackWin` and `WhiteWin` are terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GameState {
    Running,
    BlackWin,
    WhiteWin,
}

impl GameState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GameState::Running
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::Running => write!(f, "RUNNING"),
            GameState::BlackWin => write!(f, "BLACK_WIN"),
            GameState::WhiteWin => write!(f, "WHITE_WIN"),
        }
    }
}

/// Decide the game state from the black team alone.
///
/// White wins once every black piece is inactive. Black wins once no active
/// piece has coins left, as long as at least one piece is still active.
pub fn evaluate(blacks: &[Piece]) -> GameState {
    let mut white_can_win = true;
    let mut black_can_win = true;
    for piece in blacks {
        if piece.active {
            white_can_win = false;
            if piece.has_coins() {
                black_can_win = false;
            }
        }
        if !white_can_win && !black_can_win {
            return GameState::Running;
        }
    }
    if white_can_win {
        GameState::WhiteWin
    } else if black_can_win {
        GameState::BlackWin
    } else {
        GameState::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Direction;

    fn team(coins: [u32; 5]) -> Vec<Piece> {
        coins
            .iter()
            .enumerate()
            .map(|(i, &c)| Piece::black(2 * i as i32 + 1, 0, Direction::Up, c))
            .collect()
    }

    #[test]
    fn test_running_while_coins_remain() {
        assert_eq!(evaluate(&team([1, 0, 0, 0, 0])), GameState::Running);
    }

    #[test]
    fn test_white_wins_when_all_inactive() {
        let mut blacks = team([3, 2, 0, 1, 5]);
        for p in &mut blacks {
            p.deactivate();
        }
        assert_eq!(evaluate(&blacks), GameState::WhiteWin);
    }

    #[test]
    fn test_black_wins_when_active_pieces_spent() {
        let mut blacks = team([0, 4, 0, 2, 0]);
        blacks[1].deactivate();
        blacks[3].deactivate();
        assert_eq!(evaluate(&blacks), GameState::BlackWin);
    }

    #[test]
    fn test_single_spent_survivor_is_black_win() {
        let mut blacks = team([0, 1, 1, 1, 1]);
        for p in &mut blacks[1..] {
            p.deactivate();
        }
        assert_eq!(evaluate(&blacks), GameState::BlackWin);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let blacks = team([0, 0, 0, 0, 0]);
        let first = evaluate(&blacks);
        assert_eq!(first, GameState::BlackWin);
        assert_eq!(evaluate(&blacks), first);
    }

    #[test]
    fn test_display() {
        assert_eq!(GameState::Running.to_string(), "RUNNING");
        assert_eq!(GameState::BlackWin.to_string(), "BLACK_WIN");
        assert_eq!(GameState::WhiteWin.to_string(), "WHITE_WIN");
    }
}
