//! Checkers-Sim: a simplified two-sided checkers simulation.
//!
//! One white piece hunts five black pieces on the dark squares of a
//! rectangular board. Every round a randomly chosen black piece pays a coin
//! and retreats diagonally, then the white piece jump-captures the first
//! black piece it can reach. White wins once every black piece is captured;
//! black wins once the surviving pieces have spent all their coins.
//!
//! ## Modules
//!
//! - [`constants`] - Team size, defaults, and capture bearings
//! - [`board`] - Board bounds, dark-square parity, and facing directions
//! - [`piece`] - Pieces and their primitive motions
//! - [`config`] - Configuration loading and validation
//! - [`placement`] - Random initial placement
//! - [`black_move`] - Black team selection and retreat policy
//! - [`capture`] - White team capture policy
//! - [`win`] - Game state and win evaluation
//! - [`game`] - Turn engine
//! - [`render`] - Presentation collaborator
//!
//! ## Example
//!
//! ```
//! use checkers_sim::config::Config;
//! use checkers_sim::game::Game;
//! use checkers_sim::render::NullRenderer;
//!
//! let mut game = Game::new(&Config::default(), fastrand::Rng::with_seed(7)).unwrap();
//! let state = game.run(&mut NullRenderer).unwrap();
//! println!("Final State: {state}");
//! ```

pub mod black_move;
pub mod board;
pub mod capture;
pub mod config;
pub mod constants;
pub mod game;
pub mod piece;
pub mod placement;
pub mod render;
pub mod win;
