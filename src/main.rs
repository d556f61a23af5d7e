//! Checkers-Sim: a simplified two-sided checkers simulation.
//!
//! ## Usage
//!
//! - `checkers-sim` - Play one game and print the final state
//! - `checkers-sim play --show` - Play one game, printing the board every round
//! - `checkers-sim simulate --games 1000` - Play many games and tally results

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fastrand::Rng;
use tracing_subscriber::EnvFilter;

use checkers_sim::config::Config;
use checkers_sim::game::Game;
use checkers_sim::render::{NullRenderer, TextRenderer};
use checkers_sim::win::GameState;

/// Checkers-Sim: one white hunter against five coin-carrying black pieces
#[derive(Parser)]
#[command(name = "checkers-sim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Number of board columns (overrides the config file)
    #[arg(long, global = true)]
    columns: Option<u32>,

    /// Number of board rows (overrides the config file)
    #[arg(long, global = true)]
    rows: Option<u32>,

    /// Minimum initial coins of a black piece
    #[arg(long, global = true)]
    min_coins: Option<u32>,

    /// Maximum initial coins of a black piece
    #[arg(long, global = true)]
    max_coins: Option<u32>,

    /// Random seed for a reproducible run
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game
    Play {
        /// Print the board after every round
        #[arg(long)]
        show: bool,
    },
    /// Play many games and report how often each side wins
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value_t = 100)]
        games: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(&cli)?;
    config.validate().context("invalid configuration")?;

    match cli.command {
        Some(Commands::Play { show }) => play(&config, cli.seed, show),
        Some(Commands::Simulate { games }) => simulate(&config, cli.seed, games),
        None => play(&config, cli.seed, false),
    }
}

/// Default log filter for a `-v` count; `RUST_LOG` takes precedence.
fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn init_logging(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Config file values, then command-line overrides.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(columns) = cli.columns {
        config.columns = columns;
    }
    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(min) = cli.min_coins {
        config.min_coins = min;
    }
    if let Some(max) = cli.max_coins {
        config.max_coins = max;
    }
    Ok(config)
}

fn make_rng(seed: Option<u64>) -> Rng {
    seed.map(Rng::with_seed).unwrap_or_else(Rng::new)
}

fn play(config: &Config, seed: Option<u64>, show: bool) -> Result<()> {
    let mut game = Game::new(config, make_rng(seed))?;
    let state = if show {
        game.run(&mut TextRenderer::new(io::stdout().lock()))
    } else {
        game.run(&mut NullRenderer)
    }
    .context("rendering failed")?;
    println!("Final State: {state}");
    Ok(())
}

fn simulate(config: &Config, seed: Option<u64>, games: u32) -> Result<()> {
    let (mut black, mut white, mut rounds) = (0u32, 0u32, 0u64);
    for i in 0..games {
        let rng = make_rng(seed.map(|s| s.wrapping_add(i as u64)));
        let mut game = Game::new(config, rng)?;
        match game.run(&mut NullRenderer)? {
            GameState::BlackWin => black += 1,
            GameState::WhiteWin => white += 1,
            GameState::Running => unreachable!("run returns only terminal states"),
        }
        rounds += game.round() as u64;
    }
    println!("Games: {games}");
    println!("BLACK_WIN: {black}");
    println!("WHITE_WIN: {white}");
    if games > 0 {
        println!("Average rounds: {:.1}", rounds as f64 / games as f64);
    }
    Ok(())
}
