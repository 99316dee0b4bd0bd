//! uttt-rust: an Ultimate Tic-Tac-Toe engine.
//!
//! The engine models legal game states and picks moves with depth-limited
//! minimax search and alpha-beta pruning over a pluggable static evaluation.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, search defaults, evaluation weights
//! - [`board`] - Board state: sub-boards, move legality, win/draw detection
//! - [`rules`] - Stateless game rules (`actions`, `result`, `is_terminal`, `utility`)
//! - [`eval`] - Evaluation trait and bundled heuristics
//! - [`search`] - Minimax agent with alpha-beta pruning and node counting
//! - [`playout`] - Seeded random playouts
//! - [`protocol`] - Line-oriented text protocol for front ends
//!
//! ## Example
//!
//! ```
//! use uttt_rust::board::Player;
//! use uttt_rust::eval::MarkCount;
//! use uttt_rust::rules::UltimateTicTacToe;
//! use uttt_rust::search::Agent;
//!
//! let board = UltimateTicTacToe::initial_state();
//! let agent = Agent::new(Player::X, MarkCount, 2).unwrap();
//!
//! let outcome = agent.search(&board);
//! let mv = outcome.best_move.unwrap();
//! let next = UltimateTicTacToe::result(&board, mv).unwrap();
//! println!("X plays {mv} after {} nodes", outcome.nodes);
//! assert_eq!(UltimateTicTacToe::to_move(&next), Player::O);
//! ```

pub mod board;
pub mod constants;
pub mod eval;
pub mod playout;
pub mod protocol;
pub mod rules;
pub mod search;
