//! uttt-rust: Ultimate Tic-Tac-Toe with minimax search.
//!
//! ## Usage
//!
//! - `uttt-rust` - Show a demo
//! - `uttt-rust protocol` - Start the text protocol on stdin/stdout
//! - `uttt-rust selfplay` - Let two agents play each other
//! - `uttt-rust demo` - Search a random mid-game position
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `info`).

use std::io;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use uttt_rust::board::{Board, Move, Player, SuperStatus};
use uttt_rust::constants::{DEFAULT_DEPTH, MAX_GAME_LEN};
use uttt_rust::eval::Heuristic;
use uttt_rust::playout::random_playout;
use uttt_rust::protocol::TextEngine;
use uttt_rust::rules::UltimateTicTacToe;
use uttt_rust::search::Agent;

/// uttt-rust: Ultimate Tic-Tac-Toe with minimax search
#[derive(Parser)]
#[command(name = "uttt-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the line-oriented text protocol for use with front ends
    Protocol {
        /// Plies searched by `genmove`
        #[arg(long, default_value_t = DEFAULT_DEPTH, allow_hyphen_values = true)]
        depth: i64,
        /// Evaluation used by `genmove`
        #[arg(long, default_value_t = Heuristic::MarkCount)]
        eval: Heuristic,
    },
    /// Let an X agent and an O agent play each other
    Selfplay {
        /// Plies searched by the X agent
        #[arg(long, default_value_t = DEFAULT_DEPTH, allow_hyphen_values = true)]
        x_depth: i64,
        /// Plies searched by the O agent
        #[arg(long, default_value_t = DEFAULT_DEPTH, allow_hyphen_values = true)]
        o_depth: i64,
        /// Evaluation used by both agents
        #[arg(long, default_value_t = Heuristic::MarkCount)]
        eval: Heuristic,
        /// Starting position in board notation (default: empty board)
        #[arg(long)]
        board: Option<String>,
        /// Stop after this many moves
        #[arg(long, default_value_t = MAX_GAME_LEN)]
        max_moves: usize,
    },
    /// Search a random mid-game position and report the result
    Demo {
        /// Seed for the random opening
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Random plies played before searching
        #[arg(long, default_value_t = 10)]
        plies: usize,
        /// Plies searched
        #[arg(long, default_value_t = DEFAULT_DEPTH, allow_hyphen_values = true)]
        depth: i64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Protocol { depth, eval }) => run_protocol(depth, eval),
        Some(Commands::Selfplay {
            x_depth,
            o_depth,
            eval,
            board,
            max_moves,
        }) => run_selfplay(x_depth, o_depth, eval, board.as_deref(), max_moves),
        Some(Commands::Demo { seed, plies, depth }) => run_demo(seed, plies, depth),
        None => run_demo(1, 10, DEFAULT_DEPTH),
    }
}

fn run_protocol(depth: i64, heuristic: Heuristic) -> Result<()> {
    if depth < 0 {
        bail!("depth must be non-negative, got {depth}");
    }
    info!(depth, %heuristic, "starting text protocol");
    let mut engine = TextEngine::with_settings(depth, heuristic);
    engine
        .run(io::stdin().lock(), io::stdout())
        .context("protocol I/O failed")
}

fn run_selfplay(
    x_depth: i64,
    o_depth: i64,
    heuristic: Heuristic,
    board: Option<&str>,
    max_moves: usize,
) -> Result<()> {
    let agent_x = Agent::new(Player::X, heuristic, x_depth).context("X agent")?;
    let agent_o = Agent::new(Player::O, heuristic, o_depth).context("O agent")?;

    let mut board = match board {
        Some(text) => text.parse::<Board>().context("invalid --board")?,
        None => UltimateTicTacToe::initial_state(),
    };

    println!("{}", board.pretty());
    for ply in 1..=max_moves {
        if UltimateTicTacToe::is_terminal(&board) {
            break;
        }
        let agent = match UltimateTicTacToe::to_move(&board) {
            Player::X => &agent_x,
            Player::O => &agent_o,
        };
        let start = Instant::now();
        let outcome = agent.search(&board);
        let mv = match outcome.best_move {
            Some(mv) => mv,
            None if agent.depth_limit() == 0 => {
                bail!("{} agent has depth limit 0 and proposes no move", agent.player());
            }
            // Every move loses outright; play on with the first one.
            None => UltimateTicTacToe::actions(&board)
                .first()
                .copied()
                .context("non-terminal board without legal moves")?,
        };
        println!(
            "{ply:3}. {} plays {mv}  value={} nodes={} time={:.2?}",
            agent.player(),
            outcome.value,
            outcome.nodes,
            start.elapsed()
        );
        board = UltimateTicTacToe::result(&board, mv)?;
    }

    println!("\n{}", board.pretty());
    match board.super_status() {
        SuperStatus::Won(p) => println!("{p} wins"),
        SuperStatus::Full => println!("All sub-boards decided, no winner"),
        SuperStatus::Open => println!("Stopped after {max_moves} moves"),
    }
    Ok(())
}

fn run_demo(seed: u64, plies: usize, depth: i64) -> Result<()> {
    println!("uttt-rust: Ultimate Tic-Tac-Toe minimax engine\n");

    println!("=== Random opening (seed {seed}, {plies} plies) ===");
    let mut rng = fastrand::Rng::with_seed(seed);
    let opening = random_playout(&Board::new(), &mut rng, plies);
    let moves: Vec<String> = opening.moves.iter().map(|m| format!("({m})")).collect();
    println!("{}", moves.join(" "));
    println!("{}", opening.board.pretty());
    println!("notation: {}\n", opening.board);

    if UltimateTicTacToe::is_terminal(&opening.board) {
        println!("Game already over: {:?}", opening.board.super_status());
        return Ok(());
    }

    println!("=== Search (depth {depth}) ===");
    let player = UltimateTicTacToe::to_move(&opening.board);
    let agent = Agent::new(player, Heuristic::MarkCount, depth)?;

    let start = Instant::now();
    let pruned = agent.search(&opening.board);
    let pruned_time = start.elapsed();
    let start = Instant::now();
    let full = agent.search_unpruned(&opening.board);
    let full_time = start.elapsed();

    println!(
        "alpha-beta: {player} plays {}  value={} nodes={} ({pruned_time:.2?})",
        describe(pruned.best_move),
        pruned.value,
        pruned.nodes
    );
    println!(
        "minimax:    {player} plays {}  value={} nodes={} ({full_time:.2?})",
        describe(full.best_move),
        full.value,
        full.nodes
    );
    Ok(())
}

fn describe(mv: Option<Move>) -> String {
    mv.map_or_else(|| "none".to_string(), |m| m.to_string())
}
