//! Game rules as seen by a search algorithm.
//!
//! [`UltimateTicTacToe`] is a stateless adapter over [`Board`]: it exposes the
//! four operations a game-tree search needs (`actions`, `result`,
//! `is_terminal`, `utility`) and nothing else.

use crate::board::{Board, Move, MoveError, Player};

/// Stateless rules object.
pub struct UltimateTicTacToe;

impl UltimateTicTacToe {
    /// The starting position: empty board, X to move.
    pub fn initial_state() -> Board {
        Board::new()
    }

    /// The side to move.
    #[inline]
    pub fn to_move(state: &Board) -> Player {
        state.next_player()
    }

    /// Legal moves in the canonical iteration order.
    #[inline]
    pub fn actions(state: &Board) -> Vec<Move> {
        state.legal_moves()
    }

    /// A fresh board with `action` applied. `state` is never modified.
    pub fn result(state: &Board, action: Move) -> Result<Board, MoveError> {
        let mut next = state.clone();
        next.place(action)?;
        Ok(next)
    }

    /// The game is over once the super-board is won or every sub-board is decided.
    #[inline]
    pub fn is_terminal(state: &Board) -> bool {
        state.super_board_winner().is_some() || state.is_full()
    }

    /// +1 for a super-board win by `player`, -1 for a loss, 0 otherwise.
    pub fn utility(state: &Board, player: Player) -> i32 {
        match state.super_board_winner() {
            Some(winner) if winner == player => 1,
            Some(_) => -1,
            None => 0,
        }
    }
}
