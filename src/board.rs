//! Ultimate Tic-Tac-Toe board state.
//!
//! The board is a 3x3 grid of sub-boards. Each sub-board is either still open
//! (a 3x3 grid of cells) or decided, in which case only the outcome is kept:
//! once a sub-board is won or tied its cells are never written again.
//!
//! A move is addressed by four coordinates: the sub-board (super row/col) and
//! the cell inside it (sub row/col). The cell a player picks decides which
//! sub-board the opponent must play in next, unless that sub-board is already
//! decided, in which case any open sub-board is allowed.
//!
//! Boards have value semantics: [`Board`] is `Clone`, owns all of its storage,
//! and every successor produced by the rules layer is an independent copy.

use std::fmt;
use std::str::FromStr;

use crate::constants::{LINES, N};

/// One of the two sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other side.
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Player {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            _ => Err(BoardError::Player {
                token: s.to_string(),
            }),
        }
    }
}

/// A single cell: empty, or marked by a player.
pub type Cell = Option<Player>;

/// A 3x3 grid of cells, indexed `[row][col]`.
pub type Grid = [[Cell; N]; N];

/// A sub-board coordinate on the super-board: `(super_row, super_col)`.
pub type Target = (usize, usize);

/// Return the player holding any complete line of a 3x3 grid.
///
/// Lines are checked in [`LINES`] order, so the result is deterministic even
/// for hand-built grids holding lines of both players.
pub(crate) fn line_winner(get: impl Fn(usize, usize) -> Option<Player>) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let p = get(a.0, a.1)?;
        (get(b.0, b.1) == Some(p) && get(c.0, c.1) == Some(p)).then_some(p)
    })
}

/// Outcome of a sub-board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Open,
    Won(Player),
    Tied,
}

impl Status {
    /// True for `Won` and `Tied`.
    #[inline]
    pub fn is_decided(self) -> bool {
        !matches!(self, Status::Open)
    }
}

/// Outcome of the super-board.
///
/// `Full` means every sub-board is decided but nobody holds three sub-boards
/// in a row. It is terminal but is not reported as a tie of any sub-board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SuperStatus {
    Open,
    Won(Player),
    Full,
}

/// One of the nine inner boards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SubBoard {
    /// Still in play; holds the live cells.
    Open(Grid),
    /// Three in a row for this player.
    Won(Player),
    /// All nine cells filled without a line.
    Tied,
}

impl Default for SubBoard {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl SubBoard {
    /// An open sub-board with every cell empty.
    pub const EMPTY: SubBoard = SubBoard::Open([[None; N]; N]);

    /// Build a sub-board from raw cells, deciding it if the grid is complete.
    pub fn from_grid(grid: Grid) -> Self {
        if let Some(p) = line_winner(|r, c| grid[r][c]) {
            SubBoard::Won(p)
        } else if grid.iter().flatten().all(Option::is_some) {
            SubBoard::Tied
        } else {
            SubBoard::Open(grid)
        }
    }

    pub fn status(&self) -> Status {
        match *self {
            SubBoard::Open(_) => Status::Open,
            SubBoard::Won(p) => Status::Won(p),
            SubBoard::Tied => Status::Tied,
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self, SubBoard::Open(_))
    }

    /// The winner of this sub-board, if it was won. Tied sub-boards have none.
    #[inline]
    pub fn winner(&self) -> Option<Player> {
        match *self {
            SubBoard::Won(p) => Some(p),
            _ => None,
        }
    }

    /// The live cells, if the sub-board is still open.
    #[inline]
    pub fn grid(&self) -> Option<&Grid> {
        match self {
            SubBoard::Open(grid) => Some(grid),
            _ => None,
        }
    }

    /// Number of cells marked by `player`. Decided sub-boards report zero.
    pub fn count(&self, player: Player) -> usize {
        self.grid().map_or(0, |grid| {
            grid.iter()
                .flatten()
                .filter(|&&cell| cell == Some(player))
                .count()
        })
    }
}

/// A move: the target sub-board and the cell inside it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub super_row: usize,
    pub super_col: usize,
    pub sub_row: usize,
    pub sub_col: usize,
}

impl Move {
    pub const fn new(super_row: usize, super_col: usize, sub_row: usize, sub_col: usize) -> Self {
        Self {
            super_row,
            super_col,
            sub_row,
            sub_col,
        }
    }

    /// The sub-board this move is played in.
    #[inline]
    pub fn target(self) -> Target {
        (self.super_row, self.super_col)
    }

    /// The cell inside the sub-board, which is also the opponent's next target.
    #[inline]
    pub fn cell(self) -> Target {
        (self.sub_row, self.sub_col)
    }

    fn in_bounds(self) -> bool {
        self.super_row < N && self.super_col < N && self.sub_row < N && self.sub_col < N
    }
}

impl From<(usize, usize, usize, usize)> for Move {
    fn from((a, b, c, d): (usize, usize, usize, usize)) -> Self {
        Move::new(a, b, c, d)
    }
}

impl From<Move> for (usize, usize, usize, usize) {
    fn from(mv: Move) -> Self {
        (mv.super_row, mv.super_col, mv.sub_row, mv.sub_col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.super_row, self.super_col, self.sub_row, self.sub_col
        )
    }
}

impl FromStr for Move {
    type Err = BoardError;

    /// Parse four coordinates separated by whitespace and/or commas, e.g. `1 0 1 2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || BoardError::Move {
            text: s.to_string(),
        };
        let coords = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(|t| t.parse::<usize>().ok().filter(|&v| v < N))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(err)?;
        match coords[..] {
            [a, b, c, d] => Ok(Move::new(a, b, c, d)),
            _ => Err(err()),
        }
    }
}

/// Rejected placement. The board is left untouched when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    #[display("illegal move {mv}: coordinates out of range")]
    OutOfBounds { mv: Move },
    #[display("illegal move {mv}: cell is already taken")]
    CellOccupied { mv: Move },
    #[display("illegal move {mv}: must play in sub-board {row} {col}")]
    WrongSubBoard { mv: Move, row: usize, col: usize },
    #[display("illegal move {mv}: sub-board is already decided")]
    SubBoardDecided { mv: Move },
}

/// Failure to read a player, move, or board from text, or to assemble a
/// board from parts.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    #[display("invalid player '{token}'")]
    Player { token: String },
    #[display("invalid move '{text}'")]
    Move { text: String },
    #[display("invalid sub-board '{token}'")]
    SubBoard { token: String },
    #[display("invalid active target '{token}'")]
    Target { token: String },
    #[display("expected 11 board fields, found {found}")]
    FieldCount { found: usize },
    #[display("active target {row} {col} is not an open sub-board")]
    InactiveTarget { row: usize, col: usize },
}

/// The full game state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    sub_boards: [[SubBoard; N]; N],
    active: Option<Target>,
    next_player: Player,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board, X to move, any sub-board allowed.
    pub fn new() -> Self {
        Self {
            sub_boards: [[SubBoard::EMPTY; N]; N],
            active: None,
            next_player: Player::X,
        }
    }

    /// Assemble an arbitrary position.
    ///
    /// Open grids that are already complete are decided on the way in. The
    /// active target, if any, must name an open sub-board.
    pub fn from_parts(
        sub_boards: [[SubBoard; N]; N],
        active: Option<Target>,
        next_player: Player,
    ) -> Result<Self, BoardError> {
        let sub_boards = sub_boards.map(|row| {
            row.map(|sub| match sub {
                SubBoard::Open(grid) => SubBoard::from_grid(grid),
                decided => decided,
            })
        });
        if let Some((row, col)) = active {
            if row >= N || col >= N || !sub_boards[row][col].is_open() {
                return Err(BoardError::InactiveTarget { row, col });
            }
        }
        Ok(Self {
            sub_boards,
            active,
            next_player,
        })
    }

    #[inline]
    pub fn sub_board(&self, super_row: usize, super_col: usize) -> &SubBoard {
        &self.sub_boards[super_row][super_col]
    }

    /// The sub-board the next move must land in, or `None` if unconstrained.
    #[inline]
    pub fn active_target(&self) -> Option<Target> {
        self.active
    }

    #[inline]
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Whether the sub-board may receive the next move.
    fn is_target(&self, super_row: usize, super_col: usize) -> bool {
        match self.active {
            Some(target) => target == (super_row, super_col),
            None => self.sub_boards[super_row][super_col].is_open(),
        }
    }

    /// Play `mv` for the side to move.
    ///
    /// Updates the sub-board outcome, the next active target, and the turn.
    pub fn place(&mut self, mv: Move) -> Result<(), MoveError> {
        if !mv.in_bounds() {
            return Err(MoveError::OutOfBounds { mv });
        }
        if let Some((row, col)) = self.active {
            if (row, col) != mv.target() {
                return Err(MoveError::WrongSubBoard { mv, row, col });
            }
        }
        let SubBoard::Open(mut grid) = self.sub_boards[mv.super_row][mv.super_col] else {
            return Err(MoveError::SubBoardDecided { mv });
        };
        if grid[mv.sub_row][mv.sub_col].is_some() {
            return Err(MoveError::CellOccupied { mv });
        }

        let player = self.next_player;
        grid[mv.sub_row][mv.sub_col] = Some(player);
        self.sub_boards[mv.super_row][mv.super_col] = SubBoard::from_grid(grid);

        self.active = self.sub_boards[mv.sub_row][mv.sub_col]
            .is_open()
            .then_some(mv.cell());
        self.next_player = player.opponent();
        Ok(())
    }

    /// Whether `place(mv)` would succeed.
    pub fn is_legal(&self, mv: Move) -> bool {
        mv.in_bounds()
            && self.is_target(mv.super_row, mv.super_col)
            && self.sub_boards[mv.super_row][mv.super_col]
                .grid()
                .is_some_and(|grid| grid[mv.sub_row][mv.sub_col].is_none())
    }

    /// All legal moves in row-major order: super row, super col, sub row, sub col.
    ///
    /// The order is part of the contract; search tie-breaks depend on it.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for sr in 0..N {
            for sc in 0..N {
                if !self.is_target(sr, sc) {
                    continue;
                }
                let Some(grid) = self.sub_boards[sr][sc].grid() else {
                    continue;
                };
                for r in 0..N {
                    for c in 0..N {
                        if grid[r][c].is_none() {
                            moves.push(Move::new(sr, sc, r, c));
                        }
                    }
                }
            }
        }
        moves
    }

    #[inline]
    pub fn sub_board_status(&self, super_row: usize, super_col: usize) -> Status {
        self.sub_boards[super_row][super_col].status()
    }

    /// Three sub-boards in a row won by one player. Tied sub-boards count for nobody.
    pub fn super_board_winner(&self) -> Option<Player> {
        line_winner(|r, c| self.sub_boards[r][c].winner())
    }

    /// True once every sub-board is decided.
    pub fn is_full(&self) -> bool {
        self.sub_boards.iter().flatten().all(|sub| !sub.is_open())
    }

    pub fn super_status(&self) -> SuperStatus {
        if let Some(p) = self.super_board_winner() {
            SuperStatus::Won(p)
        } else if self.is_full() {
            SuperStatus::Full
        } else {
            SuperStatus::Open
        }
    }

    /// Iterate over `(super_row, super_col, sub_board)`.
    pub fn sub_boards(&self) -> impl Iterator<Item = (usize, usize, &SubBoard)> + '_ {
        self.sub_boards
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, sub)| (r, c, sub)))
    }

    /// A multi-line human-readable rendering of the board.
    pub fn pretty(&self) -> Pretty<'_> {
        Pretty(self)
    }
}

fn parse_sub_board(token: &str) -> Result<SubBoard, BoardError> {
    let err = || BoardError::SubBoard {
        token: token.to_string(),
    };
    match token {
        "X" | "x" => return Ok(SubBoard::Won(Player::X)),
        "O" | "o" => return Ok(SubBoard::Won(Player::O)),
        "T" | "t" => return Ok(SubBoard::Tied),
        _ => {}
    }

    let cells = token
        .chars()
        .filter(|&ch| ch != '/')
        .map(|ch| match ch {
            '.' => Ok(None),
            'X' | 'x' => Ok(Some(Player::X)),
            'O' | 'o' => Ok(Some(Player::O)),
            _ => Err(err()),
        })
        .collect::<Result<Vec<_>, _>>()?;
    if cells.len() != N * N {
        return Err(err());
    }

    let mut grid: Grid = [[None; N]; N];
    for (i, cell) in cells.into_iter().enumerate() {
        grid[i / N][i % N] = cell;
    }
    Ok(SubBoard::Open(grid))
}

fn parse_target(token: &str) -> Result<Option<Target>, BoardError> {
    if token == "-" {
        return Ok(None);
    }
    let err = || BoardError::Target {
        token: token.to_string(),
    };
    let (r, c) = token.split_once(',').ok_or_else(err)?;
    let r = r.trim().parse::<usize>().map_err(|_| err())?;
    let c = c.trim().parse::<usize>().map_err(|_| err())?;
    Ok(Some((r, c)))
}

/// Text notation:
///
/// ```text
/// <9 sub-boards> <active> <player>
/// ```
///
/// Sub-boards are listed in row-major order; each is `X`, `O`, `T` or nine
/// cells of `.XO` (slashes between rows are allowed). The active target is
/// `r,c` or `-`.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != N * N + 2 {
            return Err(BoardError::FieldCount {
                found: fields.len(),
            });
        }

        let mut sub_boards = [[SubBoard::EMPTY; N]; N];
        for (i, token) in fields[..N * N].iter().enumerate() {
            sub_boards[i / N][i % N] = parse_sub_board(token)?;
        }
        let active = parse_target(fields[N * N])?;
        let next_player = fields[N * N + 1].parse()?;

        Board::from_parts(sub_boards, active, next_player)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, _, sub) in self.sub_boards() {
            match sub {
                SubBoard::Open(grid) => {
                    for (r, row) in grid.iter().enumerate() {
                        if r > 0 {
                            write!(f, "/")?;
                        }
                        for cell in row {
                            write!(f, "{}", cell.map_or('.', Player::as_char))?;
                        }
                    }
                }
                SubBoard::Won(p) => write!(f, "{p}")?,
                SubBoard::Tied => write!(f, "T")?,
            }
            write!(f, " ")?;
        }
        match self.active {
            Some((r, c)) => write!(f, "{r},{c}")?,
            None => write!(f, "-")?,
        }
        write!(f, " {}", self.next_player)
    }
}

/// Grid rendering returned by [`Board::pretty`].
pub struct Pretty<'a>(&'a Board);

impl fmt::Display for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for sr in 0..N {
            for r in 0..N {
                for sc in 0..N {
                    if sc > 0 {
                        write!(f, " | ")?;
                    }
                    match board.sub_board(sr, sc) {
                        SubBoard::Open(grid) => {
                            for cell in &grid[r] {
                                write!(f, "{}", cell.map_or('.', Player::as_char))?;
                            }
                        }
                        SubBoard::Won(p) => write!(f, "{0}{0}{0}", p)?,
                        SubBoard::Tied => write!(f, "===")?,
                    }
                }
                writeln!(f)?;
            }
            if sr + 1 < N {
                writeln!(f, "{}", "-".repeat(N * N + 2 * N))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.next_player(), Player::X);
        assert_eq!(board.active_target(), None);
        assert_eq!(board.legal_moves().len(), 81);
        assert_eq!(board.super_status(), SuperStatus::Open);
    }

    #[test]
    fn test_place_sets_target_and_turn() {
        let mut board = Board::new();
        board.place(Move::new(0, 0, 1, 2)).unwrap();
        assert_eq!(board.next_player(), Player::O);
        assert_eq!(board.active_target(), Some((1, 2)));
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 9);
        assert!(moves.iter().all(|m| m.target() == (1, 2)));
    }

    #[test]
    fn test_illegal_moves_leave_board_unchanged() {
        let mut board = Board::new();
        board.place(Move::new(0, 0, 1, 1)).unwrap();
        let before = board.clone();

        assert_eq!(
            board.place(Move::new(0, 0, 0, 0)),
            Err(MoveError::WrongSubBoard {
                mv: Move::new(0, 0, 0, 0),
                row: 1,
                col: 1
            })
        );
        assert_eq!(
            board.place(Move::new(1, 1, 3, 0)),
            Err(MoveError::OutOfBounds {
                mv: Move::new(1, 1, 3, 0)
            })
        );
        assert_eq!(board, before);

        board.place(Move::new(1, 1, 1, 1)).unwrap();
        // Back in the centre sub-board, whose centre is now taken.
        assert_eq!(
            board.place(Move::new(1, 1, 1, 1)),
            Err(MoveError::CellOccupied {
                mv: Move::new(1, 1, 1, 1)
            })
        );
    }

    #[test]
    fn test_decided_sub_board_rejected_when_unconstrained() {
        let board: Board = "X ......... ......... ......... ......... ......... ......... ......... ......... - O"
            .parse()
            .unwrap();
        let mut b = board.clone();
        assert_eq!(
            b.place(Move::new(0, 0, 0, 0)),
            Err(MoveError::SubBoardDecided {
                mv: Move::new(0, 0, 0, 0)
            })
        );
        assert_eq!(b, board);
        assert_eq!(board.legal_moves().len(), 72);
    }

    #[test]
    fn test_sub_board_win_and_redirect() {
        let mut board = Board::new();
        // X builds the top row of sub-board (0,0) while O is bounced around.
        for mv in [
            (0, 0, 0, 0),
            (0, 0, 1, 1),
            (1, 1, 0, 0),
            (0, 0, 2, 2),
            (2, 2, 0, 1),
            (0, 1, 0, 0),
            (0, 0, 0, 2),
        ] {
            board.place(mv.into()).unwrap();
        }
        assert_eq!(board.sub_board_status(0, 0), Status::Open);
        board.place(Move::new(0, 2, 0, 0)).unwrap(); // O, sent to (0,0)
        assert_eq!(board.active_target(), Some((0, 0)));
        board.place(Move::new(0, 0, 0, 1)).unwrap(); // X completes the top row
        assert_eq!(board.sub_board_status(0, 0), Status::Won(Player::X));
        // The cell played points back at (0,1), which is still open.
        assert_eq!(board.active_target(), Some((0, 1)));
    }

    #[test]
    fn test_target_unconstrained_when_pointing_at_decided() {
        let mut board: Board = "......... X ......... ......... ......... ......... ......... ......... ......... 0,0 X"
            .parse()
            .unwrap();
        board.place(Move::new(0, 0, 0, 1)).unwrap();
        assert_eq!(board.active_target(), None);
        assert!(board.legal_moves().iter().all(|m| m.target() != (0, 1)));
    }

    #[test]
    fn test_tied_sub_board() {
        let sub = parse_sub_board("XOX/XOO/OXX").unwrap();
        assert_eq!(SubBoard::from_grid(*sub.grid().unwrap()), SubBoard::Tied);
    }

    #[test]
    fn test_super_board_winner_ignores_ties() {
        let board: Board = "X T X ......... ......... ......... ......... ......... ......... - O"
            .parse()
            .unwrap();
        assert_eq!(board.super_board_winner(), None);
        let board: Board = "X X X ......... ......... ......... ......... ......... ......... - O"
            .parse()
            .unwrap();
        assert_eq!(board.super_board_winner(), Some(Player::X));
        assert_eq!(board.super_status(), SuperStatus::Won(Player::X));
    }

    #[test]
    fn test_full_without_winner() {
        let board: Board = "X O X X O O O X T - X".parse().unwrap();
        assert_eq!(board.super_board_winner(), None);
        assert!(board.is_full());
        assert_eq!(board.super_status(), SuperStatus::Full);
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_inactive_target_rejected() {
        let err = "X ......... ......... ......... ......... ......... ......... ......... ......... 0,0 O"
            .parse::<Board>()
            .unwrap_err();
        assert_eq!(err, BoardError::InactiveTarget { row: 0, col: 0 });
    }

    #[test]
    fn test_from_parts_rejects_inactive_target() {
        let mut sub_boards = [[SubBoard::EMPTY; N]; N];
        sub_boards[2][1] = SubBoard::Tied;
        let err = Board::from_parts(sub_boards, Some((2, 1)), Player::X).unwrap_err();
        assert_eq!(err, BoardError::InactiveTarget { row: 2, col: 1 });
        let err = Board::from_parts(sub_boards, Some((3, 0)), Player::X).unwrap_err();
        assert_eq!(err, BoardError::InactiveTarget { row: 3, col: 0 });
        assert!(Board::from_parts(sub_boards, Some((2, 2)), Player::X).is_ok());
    }

    #[test]
    fn test_notation_round_trip() {
        let mut board = Board::new();
        board.place(Move::new(1, 1, 0, 2)).unwrap();
        board.place(Move::new(0, 2, 2, 2)).unwrap();
        let text = board.to_string();
        assert_eq!(text.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_move_parse() {
        assert_eq!("1 0 1 2".parse::<Move>().unwrap(), Move::new(1, 0, 1, 2));
        assert_eq!("1,0,1,2".parse::<Move>().unwrap(), Move::new(1, 0, 1, 2));
        assert!("1 0 1".parse::<Move>().is_err());
        assert!("1 0 1 3".parse::<Move>().is_err());
    }

    #[test]
    fn test_pretty() {
        let board: Board = "X T O../.X./... ......... ......... ......... ......... ......... ......... - X"
            .parse()
            .unwrap();
        let text = board.pretty().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "XXX | === | O..");
        assert_eq!(lines[1], "XXX | === | .X.");
        assert_eq!(lines[3], "-".repeat(15));
    }
}
