//! Board geometry, search defaults, and evaluation weights.
//!
//! Everything here is a compile-time constant. Run-time overrides (depth,
//! evaluation choice, seeds) come from the command line in `main.rs`.

// =============================================================================
// Board Geometry
// =============================================================================

/// Side length of a sub-board and of the super-board.
pub const N: usize = 3;

/// Number of cells in one 3x3 grid.
pub const CELLS: usize = N * N;

/// Upper bound on legal moves from any position (every cell of every sub-board).
pub const MAX_MOVES: usize = CELLS * CELLS;

/// The eight three-in-a-row lines of a 3x3 grid, as (row, col) triples.
///
/// Order: three rows, three columns, then the main and anti diagonal.
pub const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

// =============================================================================
// Search Parameters
// =============================================================================

/// Default number of plies searched beyond the root.
pub const DEFAULT_DEPTH: i64 = 5;

/// Default cap on plies for a random playout (a full game never exceeds this).
pub const MAX_GAME_LEN: usize = MAX_MOVES;

// =============================================================================
// Mark-count Evaluation
// =============================================================================

/// Score for a sub-board won outright (the square of a full grid).
pub const MARK_COUNT_WON: f64 = (CELLS * CELLS) as f64;

// =============================================================================
// Strategic Evaluation
// =============================================================================

/// Per sub-board won (or lost).
pub const STRATEGIC_SUB_WIN: f64 = 100.0;

/// Per super-board line holding two sub-boards of one player and one open slot.
pub const STRATEGIC_TWO_IN_LINE: f64 = 200.0;

/// Won sub-board that breaks a line on which the opponent holds the other two.
pub const STRATEGIC_BLOCK: f64 = 150.0;

/// Per open sub-board line with two own marks and an empty cell.
pub const STRATEGIC_LOCAL_TWO: f64 = 5.0;

/// Per open sub-board line with two opponent marks and an empty cell.
pub const STRATEGIC_LOCAL_THREAT: f64 = 20.0;
