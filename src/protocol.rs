//! Line-oriented text protocol.
//!
//! A small command protocol so that front ends and test scripts can drive
//! the engine over stdin/stdout. Each request is one line,
//! optionally prefixed with a numeric id. Each response is `=[id] text` on
//! success or `?[id] text` on failure, followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `clear_board` - reset to the empty board
//! - `depth <n>` - set the search depth for `genmove`
//! - `eval <name>` - choose the evaluation for `genmove` (see [`Heuristic`])
//! - `setboard <notation>` - load a position (see [`Board`]'s `FromStr`)
//! - `showboard` - render the position
//! - `status` - `open`, `X wins`, `O wins` or `full`
//! - `legal_moves` - one move per line
//! - `play <r c r c>` - play a move for the side to move
//! - `genmove` - search, play, and return the move for the side to move
//!
//! ## Example
//!
//! ```ignore
//! use uttt_rust::protocol::TextEngine;
//! let mut engine = TextEngine::new();
//! engine.run(std::io::stdin().lock(), std::io::stdout())?;
//! ```

use std::io::{self, BufRead, Write};

use tracing::{info, trace};

use crate::board::{Board, Move, SuperStatus};
use crate::constants::DEFAULT_DEPTH;
use crate::eval::Heuristic;
use crate::rules::UltimateTicTacToe;
use crate::search::Agent;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "depth",
    "eval",
    "genmove",
    "known_command",
    "legal_moves",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "setboard",
    "showboard",
    "status",
    "version",
];

/// Protocol engine state.
pub struct TextEngine {
    /// Current game position
    board: Board,
    /// Plies searched by `genmove`
    depth: i64,
    /// Evaluation used by `genmove`
    heuristic: Heuristic,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEngine {
    pub fn new() -> Self {
        Self::with_settings(DEFAULT_DEPTH, Heuristic::default())
    }

    pub fn with_settings(depth: i64, heuristic: Heuristic) -> Self {
        Self {
            board: Board::new(),
            depth,
            heuristic,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            trace!(%command, ?args, "protocol command");
            let (success, message) = self.execute(&command, args);

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Split an optional numeric id off the front of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let end = line
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(line.len());
        if end > 0 {
            if let Ok(id) = line[..end].parse::<u32>() {
                return (Some(id), line[end..].trim());
            }
        }
        (None, line)
    }

    /// Execute one command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => match args.first() {
                Some(cmd) => {
                    let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                    (true, known.to_string())
                }
                None => (false, "missing argument".to_string()),
            },

            "quit" => (true, String::new()),

            "clear_board" => {
                self.board = UltimateTicTacToe::initial_state();
                (true, String::new())
            }

            "depth" => match args.first().map(|a| a.parse::<i64>()) {
                Some(Ok(depth)) if depth >= 0 => {
                    self.depth = depth;
                    (true, String::new())
                }
                Some(Ok(depth)) => (false, format!("depth must be non-negative, got {depth}")),
                Some(Err(_)) => (false, "invalid depth".to_string()),
                None => (false, "missing argument".to_string()),
            },

            "eval" => match args.first().map(|a| a.parse::<Heuristic>()) {
                Some(Ok(heuristic)) => {
                    self.heuristic = heuristic;
                    (true, String::new())
                }
                Some(Err(e)) => (false, e.to_string()),
                None => (false, "missing argument".to_string()),
            },

            "setboard" => match args.join(" ").parse::<Board>() {
                Ok(board) => {
                    self.board = board;
                    (true, String::new())
                }
                Err(e) => (false, e.to_string()),
            },

            "showboard" => {
                let active = match self.board.active_target() {
                    Some((r, c)) => format!("{r} {c}"),
                    None => "any".to_string(),
                };
                (
                    true,
                    format!(
                        "\n{}active: {active}\nto move: {}",
                        self.board.pretty(),
                        self.board.next_player()
                    ),
                )
            }

            "status" => {
                let status = match self.board.super_status() {
                    SuperStatus::Open => "open".to_string(),
                    SuperStatus::Won(p) => format!("{p} wins"),
                    SuperStatus::Full => "full".to_string(),
                };
                (true, status)
            }

            "legal_moves" => {
                let moves: Vec<String> = UltimateTicTacToe::actions(&self.board)
                    .iter()
                    .map(Move::to_string)
                    .collect();
                (true, moves.join("\n"))
            }

            "play" => {
                let mv = match args.join(" ").parse::<Move>() {
                    Ok(mv) => mv,
                    Err(e) => return (false, e.to_string()),
                };
                if UltimateTicTacToe::is_terminal(&self.board) {
                    return (false, "game is over".to_string());
                }
                match self.board.place(mv) {
                    Ok(()) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "genmove" => self.genmove(),

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn genmove(&mut self) -> (bool, String) {
        if UltimateTicTacToe::is_terminal(&self.board) {
            return (true, "none".to_string());
        }

        let player = UltimateTicTacToe::to_move(&self.board);
        let agent = match Agent::new(player, self.heuristic, self.depth) {
            Ok(agent) => agent,
            Err(e) => return (false, e.to_string()),
        };
        let outcome = agent.search(&self.board);
        let mv = match outcome.best_move {
            Some(mv) => mv,
            None if agent.depth_limit() == 0 => {
                return (false, "depth limit is zero".to_string());
            }
            // Every move loses outright; play on with the first one.
            None => match UltimateTicTacToe::actions(&self.board).first() {
                Some(&mv) => mv,
                None => return (true, "none".to_string()),
            },
        };

        info!(
            %player,
            %mv,
            value = outcome.value,
            nodes = outcome.nodes,
            "genmove"
        );
        match self.board.place(mv) {
            Ok(()) => (true, mv.to_string()),
            Err(e) => (false, e.to_string()),
        }
    }
}
