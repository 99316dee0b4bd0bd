//! Random playouts.
//!
//! A playout plays uniformly random legal moves from a position until the game
//! ends or a ply cap is reached. The caller owns the RNG, so a seeded
//! [`fastrand::Rng`] reproduces the same game every time. Tests use this to
//! reach arbitrary mid-game positions; the CLI uses it for quick benchmarks.

use crate::board::{Board, Move};
use crate::rules::UltimateTicTacToe;

/// Outcome of a random playout.
#[derive(Debug, Clone)]
pub struct Playout {
    /// The position where the playout stopped.
    pub board: Board,
    /// Moves played, in order.
    pub moves: Vec<Move>,
}

/// Pick a uniformly random legal move, or `None` on a terminal board.
pub fn random_move(board: &Board, rng: &mut fastrand::Rng) -> Option<Move> {
    if UltimateTicTacToe::is_terminal(board) {
        return None;
    }
    let moves = UltimateTicTacToe::actions(board);
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.usize(..moves.len())])
}

/// Play random moves from `board` for at most `max_plies` plies.
pub fn random_playout(board: &Board, rng: &mut fastrand::Rng, max_plies: usize) -> Playout {
    let mut board = board.clone();
    let mut moves = Vec::new();

    while moves.len() < max_plies {
        let Some(mv) = random_move(&board, rng) else {
            break;
        };
        if board.place(mv).is_err() {
            break;
        }
        moves.push(mv);
    }

    Playout { board, moves }
}
