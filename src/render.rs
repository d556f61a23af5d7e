//! Presentation collaborator.
//!
//! The engine never draws anything itself. It sizes a canvas, makes it
//! visible, and asks a [`Renderer`] to observe the game after every change.
//! [`TextRenderer`] prints an ASCII board; [`NullRenderer`] does nothing.

use std::fmt;
use std::io::{self, Write};

use crate::game::Game;

/// A sink that observes game state.
pub trait Renderer {
    /// Size the canvas to `columns` x `rows` squares.
    fn resize(&mut self, columns: i32, rows: i32) -> io::Result<()>;

    fn set_visible(&mut self, visible: bool) -> io::Result<()>;

    /// Draw the current game state.
    fn render(&mut self, game: &Game) -> io::Result<()>;
}

/// Renderer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn resize(&mut self, _columns: i32, _rows: i32) -> io::Result<()> {
        Ok(())
    }

    fn set_visible(&mut self, _visible: bool) -> io::Result<()> {
        Ok(())
    }

    fn render(&mut self, _game: &Game) -> io::Result<()> {
        Ok(())
    }
}

/// Renderer that writes the board as text after every round.
pub struct TextRenderer<W: Write> {
    out: W,
    visible: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            visible: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn resize(&mut self, columns: i32, rows: i32) -> io::Result<()> {
        writeln!(self.out, "Board: {columns}x{rows}")
    }

    fn set_visible(&mut self, visible: bool) -> io::Result<()> {
        self.visible = visible;
        Ok(())
    }

    fn render(&mut self, game: &Game) -> io::Result<()> {
        if !self.visible {
            return Ok(());
        }
        writeln!(self.out, "Round {} ({})", game.round(), game.state())?;
        write!(self.out, "{game}")?;
        self.out.flush()
    }
}

/// Symbol for one square: `W` white, `B` active black, `x` captured black,
/// `.` empty dark square, blank for light squares.
fn square_symbol(game: &Game, x: i32, y: i32) -> char {
    if game.white().square() == (x, y) {
        return 'W';
    }
    if game.blacks().iter().any(|p| p.occupies(x, y)) {
        return 'B';
    }
    if game.blacks().iter().any(|p| p.square() == (x, y)) {
        return 'x';
    }
    if game.board().is_playable(x, y) {
        '.'
    } else {
        ' '
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.board();
        // Highest row first so that "up" is up
        for y in (0..board.height).rev() {
            for x in 0..board.width {
                write!(f, "{} ", square_symbol(self, x, y))?;
            }
            writeln!(f)?;
        }
        for (i, p) in self.blacks().iter().enumerate() {
            let status = if p.active { "active" } else { "captured" };
            writeln!(f, "B{i} ({}, {}) coins={} {status}", p.x, p.y, p.coins)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Direction};
    use crate::piece::Piece;

    fn small_game() -> Game {
        let board = Board::new(4, 3);
        let white = Piece::white(1, 0, Direction::Up);
        let mut blacks = vec![
            Piece::black(0, 1, Direction::Up, 2),
            Piece::black(2, 1, Direction::Up, 1),
            Piece::black(3, 0, Direction::Up, 0),
            Piece::black(1, 2, Direction::Up, 1),
            Piece::black(3, 2, Direction::Up, 1),
        ];
        blacks[2].deactivate();
        Game::with_pieces(board, white, blacks, fastrand::Rng::with_seed(0))
    }

    #[test]
    fn test_display_grid() {
        let text = small_game().to_string();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0], "  B   B ");
        assert_eq!(rows[1], "B   B   ");
        assert_eq!(rows[2], "  W   x ");
        assert!(rows[5].starts_with("B2 (3, 0) coins=0 captured"));
    }

    #[test]
    fn test_text_renderer_hidden_until_visible() {
        let game = small_game();
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.resize(4, 3).unwrap();
        renderer.render(&game).unwrap();
        renderer.set_visible(true).unwrap();
        renderer.render(&game).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(out.starts_with("Board: 4x3\n"));
        assert_eq!(out.matches("Round 0").count(), 1);
        assert!(out.contains("Round 0 (RUNNING)"));
    }
}
