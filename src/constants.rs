//! Constants for team size, default configuration, and diagonal bearings.
//!
//! Board dimensions and coin ranges are runtime configuration (see
//! [`crate::config`]); the values here are only the defaults used when a
//! configuration file or flag leaves them unset.

// =============================================================================
// Teams
// =============================================================================

/// Number of black pieces on the board.
pub const NUM_BLACK: usize = 5;

/// Total number of pieces placed at game start (one white plus the black team).
pub const NUM_PIECES: usize = NUM_BLACK + 1;

// =============================================================================
// Default Configuration
// =============================================================================

/// Default number of board columns.
pub const DEFAULT_COLUMNS: u32 = 8;

/// Default number of board rows.
pub const DEFAULT_ROWS: u32 = 8;

/// Default minimum initial coin count of a black piece.
pub const DEFAULT_MIN_COINS: u32 = 1;

/// Default maximum initial coin count of a black piece.
pub const DEFAULT_MAX_COINS: u32 = 5;

// =============================================================================
// Diagonal Bearings
// =============================================================================

/// A unit diagonal displacement `(dx, dy)`.
pub type Bearing = (i32, i32);

/// Bearings scanned by the white piece, in priority order.
pub const CAPTURE_BEARINGS: [Bearing; 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Largest accepted board dimension (columns or rows).
pub const MAX_DIMENSION: u32 = 4096;
