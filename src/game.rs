//! Turn engine.
//!
//! [`Game`] owns everything a game needs: board bounds, the pieces, the game
//! state, and the random source. Each round runs the black turn, then the
//! white turn, then the win check, and rounds are only played while the
//! state is [`GameState::Running`].
//!
//! The win check after every round is what keeps the black turn from ever
//! starting with no eligible piece: if no active piece has coins left the
//! state is already terminal. Should that ordering be broken (for example by
//! a game built with [`Game::with_pieces`] whose black team is already spent)
//! the black turn is skipped instead of spinning forever.

use std::io;

use fastrand::Rng;
use tracing::{debug, info, warn};

use crate::black_move::{BlackAction, black_turn};
use crate::board::Board;
use crate::capture::{Capture, capture_if_possible};
use crate::config::{Config, ConfigError};
use crate::constants::NUM_BLACK;
use crate::piece::Piece;
use crate::placement::{place_black, place_white};
use crate::render::Renderer;
use crate::win::{GameState, evaluate};

/// Everything that happened in one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    /// 1-based round number.
    pub round: u32,
    /// `None` if no black piece was eligible to act.
    pub black: Option<BlackAction>,
    /// `None` if white passed.
    pub capture: Option<Capture>,
    /// State after the win check.
    pub state: GameState,
}

/// A game in progress.
pub struct Game {
    board: Board,
    white: Piece,
    blacks: Vec<Piece>,
    state: GameState,
    round: u32,
    rng: Rng,
}

impl Game {
    /// Validate `config` and place all pieces at random.
    pub fn new(config: &Config, mut rng: Rng) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = config.board();

        let white = place_white(&mut rng, &board);
        let mut occupied = vec![white.square()];
        let mut blacks = Vec::with_capacity(NUM_BLACK);
        for _ in 0..NUM_BLACK {
            let piece = place_black(
                &mut rng,
                &board,
                &occupied,
                config.min_coins,
                config.max_coins,
            );
            occupied.push(piece.square());
            blacks.push(piece);
        }

        info!(
            columns = board.width,
            rows = board.height,
            white = ?white.square(),
            "game initialized"
        );
        Ok(Self::with_pieces(board, white, blacks, rng))
    }

    /// Build a running game from explicit pieces.
    ///
    /// The caller is responsible for placing pieces on distinct dark squares.
    pub fn with_pieces(board: Board, white: Piece, blacks: Vec<Piece>, rng: Rng) -> Self {
        Self {
            board,
            white,
            blacks,
            state: GameState::Running,
            round: 0,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn white(&self) -> &Piece {
        &self.white
    }

    pub fn blacks(&self) -> &[Piece] {
        &self.blacks
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Number of rounds played so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    /// Re-evaluate the win condition. Terminal states never change.
    pub fn update_state(&mut self) -> GameState {
        if self.is_running() {
            self.state = evaluate(&self.blacks);
        }
        self.state
    }

    /// Play one round. Returns `None` once the game is over.
    pub fn play_round(&mut self) -> Option<RoundReport> {
        if !self.is_running() {
            return None;
        }
        self.round += 1;
        let round = self.round;

        let black = black_turn(
            &mut self.rng,
            &self.board,
            &mut self.blacks,
            self.white.square(),
        );
        match &black {
            Some(action) => debug!(
                round,
                piece = action.index,
                from = ?action.from,
                to = ?self.blacks[action.index].square(),
                maneuver = ?action.maneuver,
                "black moved"
            ),
            None => warn!(round, "no black piece can act, skipping black turn"),
        }

        let capture = capture_if_possible(&self.board, &mut self.white, &mut self.blacks);
        if let Some(c) = &capture {
            debug!(round, target = c.target, landing = ?c.landing, "white captured");
        }

        let state = self.update_state();
        Some(RoundReport {
            round,
            black,
            capture,
            state,
        })
    }

    /// Play rounds until the game ends, rendering after each one.
    pub fn run<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> io::Result<GameState> {
        renderer.resize(self.board.width, self.board.height)?;
        renderer.set_visible(true)?;
        renderer.render(self)?;
        while self.play_round().is_some() {
            renderer.render(self)?;
        }
        info!(rounds = self.round, state = %self.state, "game over");
        Ok(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Direction;
    use crate::render::NullRenderer;

    fn spent_team() -> Vec<Piece> {
        (0..NUM_BLACK)
            .map(|i| Piece::black(i as i32, i as i32 + 1, Direction::Up, 0))
            .collect()
    }

    #[test]
    fn test_new_places_all_pieces() {
        let game = Game::new(&Config::default(), Rng::with_seed(5)).unwrap();
        assert_eq!(game.blacks().len(), NUM_BLACK);
        assert!(game.is_running());
        assert_eq!(game.round(), 0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = Config {
            min_coins: 3,
            max_coins: 1,
            ..Config::default()
        };
        assert!(Game::new(&config, Rng::with_seed(0)).is_err());
    }

    #[test]
    fn test_spent_team_skips_black_turn() {
        let board = Board::new(8, 8);
        let white = Piece::white(6, 7, Direction::Up);
        let mut game = Game::with_pieces(board, white, spent_team(), Rng::with_seed(1));
        let report = game.play_round().unwrap();
        assert_eq!(report.black, None);
        assert_eq!(report.state, GameState::BlackWin);
        assert_eq!(game.play_round(), None);
    }

    #[test]
    fn test_terminal_state_is_absorbing() {
        let board = Board::new(8, 8);
        let white = Piece::white(6, 7, Direction::Up);
        let mut game = Game::with_pieces(board, white, spent_team(), Rng::with_seed(1));
        assert_eq!(game.update_state(), GameState::BlackWin);
        // Reviving a piece does not reopen a finished game
        game.blacks[0].coins = 3;
        assert_eq!(game.update_state(), GameState::BlackWin);
        assert_eq!(game.play_round(), None);
    }

    #[test]
    fn test_run_reaches_terminal_state() {
        let mut game = Game::new(&Config::default(), Rng::with_seed(42)).unwrap();
        let state = game.run(&mut NullRenderer).unwrap();
        assert!(state.is_terminal());
        assert_eq!(game.state(), state);
        assert!(game.round() >= 1);
    }
}
