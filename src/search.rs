//! Depth-limited minimax search with alpha-beta pruning.
//!
//! An [`Agent`] plays one side. It searches a fixed number of plies beyond the
//! root, alternating MAX and MIN by depth parity (the root is always MAX for
//! the agent's side), and scores cutoff and terminal nodes with its
//! [`Evaluate`] implementation from its own perspective.
//!
//! Children are visited in [`Board::legal_moves`] order and a child only
//! replaces the running best on a strict improvement, so ties go to the
//! earliest move. Pruning never changes the reported value or move; it only
//! lowers the node count.
//!
//! The node counter lives in a per-call context, so `search` takes `&self`
//! and one agent can serve several searches at once.

use tracing::{debug, instrument};

use crate::board::{Board, Move, Player};
use crate::eval::Evaluate;
use crate::rules::UltimateTicTacToe;

/// Rejected agent configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("depth limit must be non-negative, got {depth}")]
    NegativeDepth { depth: i64 },
}

/// Result of one top-level search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    /// Minimax value of the root from the agent's perspective.
    pub value: f64,
    /// Chosen move; `None` when the root is terminal, the depth limit is zero,
    /// or no move scores better than a certain loss.
    pub best_move: Option<Move>,
    /// Number of nodes visited, root included.
    pub nodes: u64,
}

/// A minimax player for one side.
#[derive(Debug, Clone)]
pub struct Agent<E> {
    player: Player,
    evaluator: E,
    depth_limit: u64,
}

impl<E: Evaluate> Agent<E> {
    /// Create an agent for `player` searching `depth_limit` plies.
    pub fn new(player: Player, evaluator: E, depth_limit: i64) -> Result<Self, ConfigError> {
        let depth_limit =
            u64::try_from(depth_limit).map_err(|_| ConfigError::NegativeDepth { depth: depth_limit })?;
        Ok(Self {
            player,
            evaluator,
            depth_limit,
        })
    }

    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    #[inline]
    pub fn depth_limit(&self) -> u64 {
        self.depth_limit
    }

    #[inline]
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Alpha-beta search from `board`.
    #[instrument(level = "trace", skip_all, fields(player = %self.player, depth = self.depth_limit))]
    pub fn search(&self, board: &Board) -> SearchOutcome {
        self.run(board, true)
    }

    /// The same traversal without pruning.
    ///
    /// Visits every node inside the depth limit; the value and move always
    /// match [`search`](Self::search).
    pub fn search_unpruned(&self, board: &Board) -> SearchOutcome {
        self.run(board, false)
    }

    fn run(&self, board: &Board, prune: bool) -> SearchOutcome {
        let mut ctx = SearchContext {
            agent: self,
            prune,
            nodes: 0,
        };
        let (value, best_move) = ctx.value(board, f64::NEG_INFINITY, f64::INFINITY, 0, true);
        debug!(
            player = %self.player,
            depth = self.depth_limit,
            prune,
            value,
            best_move = ?best_move,
            nodes = ctx.nodes,
            "search finished"
        );
        SearchOutcome {
            value,
            best_move,
            nodes: ctx.nodes,
        }
    }
}

/// Per-search state.
struct SearchContext<'a, E> {
    agent: &'a Agent<E>,
    prune: bool,
    nodes: u64,
}

impl<E: Evaluate> SearchContext<'_, E> {
    /// Minimax value of `board` and the move achieving it.
    fn value(
        &mut self,
        board: &Board,
        mut alpha: f64,
        mut beta: f64,
        depth: u64,
        maximizing: bool,
    ) -> (f64, Option<Move>) {
        self.nodes += 1;

        if UltimateTicTacToe::is_terminal(board) || depth >= self.agent.depth_limit {
            return (self.agent.evaluator.evaluate(board, self.agent.player), None);
        }

        let actions = UltimateTicTacToe::actions(board);
        debug_assert!(!actions.is_empty(), "non-terminal board without moves: {board}");

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_action = None;

        for &action in &actions {
            let Ok(child) = UltimateTicTacToe::result(board, action) else {
                unreachable!("legal move {action} rejected on {board}");
            };
            let (v, _) = self.value(&child, alpha, beta, depth + 1, !maximizing);

            if maximizing {
                if v > best {
                    best = v;
                    best_action = Some(action);
                    alpha = alpha.max(best);
                }
                if self.prune && best >= beta {
                    break;
                }
            } else {
                if v < best {
                    best = v;
                    best_action = Some(action);
                    beta = beta.min(best);
                }
                if self.prune && best <= alpha {
                    break;
                }
            }
        }

        (best, best_action)
    }
}
