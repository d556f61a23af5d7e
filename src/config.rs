//! Game configuration: board dimensions and the black coin range.
//!
//! Configuration is read from a TOML file and may be overridden from the
//! command line. The engine treats a validated [`Config`] as immutable for
//! the whole run.
//!
//! ```toml
//! columns = 8
//! rows = 8
//! min_coins = 1
//! max_coins = 5
//! ```
//!
//! The property names `NUMBER_OF_COLUMNS`, `NUMBER_OF_ROWS`,
//! `MIN_NUMBER_OF_COINS` and `MAX_NUMBER_OF_COINS` are accepted as aliases.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::board::Board;
use crate::constants::{
    DEFAULT_COLUMNS, DEFAULT_MAX_COINS, DEFAULT_MIN_COINS, DEFAULT_ROWS, MAX_DIMENSION,
    NUM_PIECES,
};

/// Errors raised while loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("board dimensions must be between 1 and {max}, got {columns}x{rows}", max = MAX_DIMENSION)]
    Dimensions { columns: u32, rows: u32 },

    #[error("min_coins ({min}) must not exceed max_coins ({max})")]
    CoinRange { min: u32, max: u32 },

    #[error("board has {available} playable squares but {required} pieces must be placed")]
    TooFewSquares { available: u64, required: usize },
}

/// Validated-on-demand game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    #[serde(alias = "NUMBER_OF_COLUMNS")]
    pub columns: u32,
    #[serde(alias = "NUMBER_OF_ROWS")]
    pub rows: u32,
    #[serde(alias = "MIN_NUMBER_OF_COINS")]
    pub min_coins: u32,
    #[serde(alias = "MAX_NUMBER_OF_COINS")]
    pub max_coins: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            min_coins: DEFAULT_MIN_COINS,
            max_coins: DEFAULT_MAX_COINS,
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check the preconditions the engine relies on.
    ///
    /// Placement uses unbounded rejection sampling, so a board without room
    /// for every piece on a dark square is rejected here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = 1..=MAX_DIMENSION;
        if !dims.contains(&self.columns) || !dims.contains(&self.rows) {
            return Err(ConfigError::Dimensions {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if self.min_coins > self.max_coins {
            return Err(ConfigError::CoinRange {
                min: self.min_coins,
                max: self.max_coins,
            });
        }
        let available = self.board().playable_squares();
        if available < NUM_PIECES as u64 {
            return Err(ConfigError::TooFewSquares {
                available,
                required: NUM_PIECES,
            });
        }
        Ok(())
    }

    /// Board bounds for this configuration.
    pub fn board(&self) -> Board {
        Board::new(self.columns as i32, self.rows as i32)
    }
}
