//! Static evaluation of board positions.
//!
//! The search engine treats evaluation as an opaque capability: anything that
//! implements [`Evaluate`] can be plugged into an [`Agent`](crate::search::Agent).
//! Plain functions and closures of type `Fn(&Board, Player) -> f64` qualify
//! through a blanket impl.
//!
//! Two heuristics are bundled:
//! - [`MarkCount`] - squared mark counts per open sub-board, a fixed bonus per
//!   won sub-board. Cheap and fully deterministic; used by the regression tests.
//! - [`Strategic`] - super-board aware scoring (won sub-boards, two-in-a-row
//!   on the super-board, blocked opponent lines, local threats). Saturates to
//!   ±∞ when the super-board is decided.

use std::str::FromStr;

use crate::board::{Board, Player, SubBoard};
use crate::constants::{
    LINES, MARK_COUNT_WON, N, STRATEGIC_BLOCK, STRATEGIC_LOCAL_THREAT, STRATEGIC_LOCAL_TWO,
    STRATEGIC_SUB_WIN, STRATEGIC_TWO_IN_LINE,
};

/// A static evaluation function.
///
/// Must be pure and total: defined for every reachable board, terminal ones
/// included. Higher is better for `player`.
pub trait Evaluate {
    fn evaluate(&self, board: &Board, player: Player) -> f64;
}

impl<F> Evaluate for F
where
    F: Fn(&Board, Player) -> f64,
{
    #[inline]
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        self(board, player)
    }
}

/// Squared mark-count heuristic.
///
/// For each open sub-board: `mine² - theirs²`. Each won sub-board counts
/// ±81, tied sub-boards count zero.
#[derive(Copy, Clone, Debug, Default)]
pub struct MarkCount;

impl Evaluate for MarkCount {
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        let opponent = player.opponent();
        board
            .sub_boards()
            .map(|(_, _, sub)| match *sub {
                SubBoard::Open(_) => {
                    let mine = sub.count(player) as f64;
                    let theirs = sub.count(opponent) as f64;
                    mine * mine - theirs * theirs
                }
                SubBoard::Won(p) if p == player => MARK_COUNT_WON,
                SubBoard::Won(_) => -MARK_COUNT_WON,
                SubBoard::Tied => 0.0,
            })
            .sum()
    }
}

/// Count `(mine, theirs, empty)` over one line of a 3x3 grid.
fn tally(
    line: &[(usize, usize); 3],
    get: impl Fn(usize, usize) -> Option<Player>,
    player: Player,
) -> (usize, usize, usize) {
    line.iter().fold((0, 0, 0), |(m, t, e), &(r, c)| match get(r, c) {
        Some(p) if p == player => (m + 1, t, e),
        Some(_) => (m, t + 1, e),
        None => (m, t, e + 1),
    })
}

/// Super-board aware heuristic.
#[derive(Copy, Clone, Debug, Default)]
pub struct Strategic;

impl Strategic {
    /// Whether the sub-board won at `(r, c)` breaks a line on which the
    /// opponent holds both other sub-boards.
    fn blocks(owners: &[[Option<Player>; N]; N], r: usize, c: usize, player: Player) -> bool {
        let opponent = player.opponent();
        LINES.iter().filter(|line| line.contains(&(r, c))).any(|line| {
            line.iter()
                .filter(|&&pos| pos != (r, c))
                .all(|&(lr, lc)| owners[lr][lc] == Some(opponent))
        })
    }
}

impl Evaluate for Strategic {
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        match board.super_board_winner() {
            Some(p) if p == player => return f64::INFINITY,
            Some(_) => return f64::NEG_INFINITY,
            None => {}
        }

        let mut owners = [[None; N]; N];
        for (r, c, sub) in board.sub_boards() {
            owners[r][c] = sub.winner();
        }

        let mut score = 0.0;
        for (r, c, sub) in board.sub_boards() {
            match sub.winner() {
                Some(p) if p == player => {
                    score += STRATEGIC_SUB_WIN;
                    if Self::blocks(&owners, r, c, player) {
                        score += STRATEGIC_BLOCK;
                    }
                }
                Some(_) => score -= STRATEGIC_SUB_WIN,
                None => {}
            }
        }

        for line in &LINES {
            let (mine, theirs, empty) = tally(line, |r, c| owners[r][c], player);
            if mine == 2 && empty == 1 {
                score += STRATEGIC_TWO_IN_LINE;
            }
            if theirs == 2 && empty == 1 {
                score -= STRATEGIC_TWO_IN_LINE;
            }
        }

        for (_, _, sub) in board.sub_boards() {
            let Some(grid) = sub.grid() else {
                continue;
            };
            for line in &LINES {
                let (mine, theirs, empty) = tally(line, |r, c| grid[r][c], player);
                if mine == 2 && empty == 1 {
                    score += STRATEGIC_LOCAL_TWO;
                }
                if theirs == 2 && empty == 1 {
                    score += STRATEGIC_LOCAL_THREAT;
                }
            }
        }

        score
    }
}

/// Run-time choice between the bundled heuristics.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, derive_more::Display)]
pub enum Heuristic {
    #[default]
    #[display("mark-count")]
    MarkCount,
    #[display("strategic")]
    Strategic,
}

impl Heuristic {
    /// Every bundled heuristic, in the order listed to users.
    pub const ALL: [Heuristic; 2] = [Heuristic::MarkCount, Heuristic::Strategic];

    /// Comma-separated names accepted by `FromStr`.
    pub fn names() -> String {
        Self::ALL.map(|h| h.to_string()).join(", ")
    }
}

/// Name that matches none of the bundled heuristics.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown evaluation '{name}' (expected one of: {})", Heuristic::names())]
pub struct UnknownHeuristic {
    name: String,
}

impl FromStr for Heuristic {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownHeuristic {
                name: s.to_string(),
            })
    }
}

impl Evaluate for Heuristic {
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        match self {
            Heuristic::MarkCount => MarkCount.evaluate(board, player),
            Heuristic::Strategic => Strategic.evaluate(board, player),
        }
    }
}
