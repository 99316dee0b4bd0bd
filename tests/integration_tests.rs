//! Integration tests for uttt-rust
//!
//! Search regressions run from a fixed mid-game position with the squared
//! mark-count evaluation. The expected (value, move, nodes) triples pin down
//! move ordering, tie-breaks, and pruning; any deviation means one of them
//! changed.

use uttt_rust::board::{Board, Move, Player, Status, SubBoard, SuperStatus};
use uttt_rust::eval::{Evaluate, MarkCount};
use uttt_rust::rules::UltimateTicTacToe;
use uttt_rust::search::{Agent, SearchOutcome};

// =============================================================================
// Helper functions
// =============================================================================

/// The fixed regression position: sub-board (0,1) already won by O, the
/// next move forced into sub-board (1,0), X to play.
fn fixture() -> Board {
    "\
     .X./.../.XX O           O../.X./.X. \
     .OX/X../.OX OX./OO./X.. .X./O../... \
     .O./.X./..O .X./XO./XOO .X./O.X/.XO \
     1,0 X"
        .parse()
        .expect("fixture notation is valid")
}

fn run(depth: i64) -> (f64, Option<(usize, usize, usize, usize)>, u64) {
    let agent = Agent::new(Player::X, MarkCount, depth).unwrap();
    let SearchOutcome {
        value,
        best_move,
        nodes,
    } = agent.search(&fixture());
    (value, best_move.map(Into::into), nodes)
}

// =============================================================================
// Fixture sanity
// =============================================================================

#[test]
fn test_fixture_shape() {
    let board = fixture();
    assert_eq!(board.next_player(), Player::X);
    assert_eq!(board.active_target(), Some((1, 0)));
    assert_eq!(board.sub_board_status(0, 1), Status::Won(Player::O));
    assert_eq!(board.super_status(), SuperStatus::Open);

    let moves: Vec<(usize, usize, usize, usize)> =
        board.legal_moves().into_iter().map(Into::into).collect();
    assert_eq!(
        moves,
        vec![(1, 0, 0, 0), (1, 0, 1, 1), (1, 0, 1, 2), (1, 0, 2, 0)]
    );
}

#[test]
fn test_fixture_from_parts_matches_notation() {
    let x = Some(Player::X);
    let o = Some(Player::O);
    let e = None;
    let open = |grid| SubBoard::Open(grid);
    let board = Board::from_parts(
        [
            [
                open([[e, x, e], [e, e, e], [e, x, x]]),
                SubBoard::Won(Player::O),
                open([[o, e, e], [e, x, e], [e, x, e]]),
            ],
            [
                open([[e, o, x], [x, e, e], [e, o, x]]),
                open([[o, x, e], [o, o, e], [x, e, e]]),
                open([[e, x, e], [o, e, e], [e, e, e]]),
            ],
            [
                open([[e, o, e], [e, x, e], [e, e, o]]),
                open([[e, x, e], [x, o, e], [x, o, o]]),
                open([[e, x, e], [o, e, x], [e, x, o]]),
            ],
        ],
        Some((1, 0)),
        Player::X,
    )
    .unwrap();
    assert_eq!(board, fixture());
}

#[test]
fn test_fixture_evaluation() {
    // Open sub-boards contribute mine² - theirs², the O-won sub-board -81.
    assert_eq!(MarkCount.evaluate(&fixture(), Player::X), -67.0);
    assert_eq!(MarkCount.evaluate(&fixture(), Player::O), 67.0);
}

// =============================================================================
// Search regressions
// =============================================================================

#[test]
fn test_search_depth_1() {
    assert_eq!(run(1), (9.0, Some((1, 0, 1, 2)), 5));
}

#[test]
fn test_search_depth_2() {
    assert_eq!(run(2), (6.0, Some((1, 0, 1, 2)), 20));
}

#[test]
fn test_search_depth_3() {
    assert_eq!(run(3), (9.0, Some((1, 0, 1, 2)), 81));
}

#[test]
fn test_search_depth_0() {
    assert_eq!(run(0), (-67.0, None, 1));
}

#[test]
fn test_two_agents_alternating_play() {
    let agent_x = Agent::new(Player::X, MarkCount, 5).unwrap();
    let agent_o = Agent::new(Player::O, MarkCount, 5).unwrap();
    let mut board = fixture();

    let expected = vec![
        (11.0, (1, 0, 1, 2), 1264),
        (-8.0, (1, 2, 1, 1), 1733),
        (11.0, (1, 1, 0, 2), 2179),
        (-10.0, (0, 2, 0, 2), 2104),
    ];

    let mut actual: Vec<(f64, (usize, usize, usize, usize), u64)> = Vec::new();
    'game: for _ in 0..2 {
        for agent in [&agent_x, &agent_o] {
            let outcome = agent.search(&board);
            let mv = outcome.best_move.expect("non-terminal board yields a move");
            actual.push((outcome.value, mv.into(), outcome.nodes));
            board = UltimateTicTacToe::result(&board, mv).unwrap();
            if UltimateTicTacToe::is_terminal(&board) {
                break 'game;
            }
        }
    }

    assert_eq!(actual, expected);
}

#[test]
fn test_unpruned_agrees_on_fixture() {
    for depth in 1..=4 {
        let agent = Agent::new(Player::X, MarkCount, depth).unwrap();
        let pruned = agent.search(&fixture());
        let full = agent.search_unpruned(&fixture());
        assert_eq!(pruned.value, full.value, "depth {depth}");
        assert_eq!(pruned.best_move, full.best_move, "depth {depth}");
        assert!(pruned.nodes <= full.nodes, "depth {depth}");
    }
}

// =============================================================================
// Rules
// =============================================================================

#[test]
fn test_result_leaves_parent_untouched() {
    let board = fixture();
    let before = board.clone();
    for mv in UltimateTicTacToe::actions(&board) {
        let child = UltimateTicTacToe::result(&board, mv).unwrap();
        assert_ne!(child, board);
    }
    assert_eq!(board, before);
}

#[test]
fn test_illegal_result_is_an_error() {
    let board = fixture();
    // Outside the forced sub-board.
    assert!(UltimateTicTacToe::result(&board, Move::new(0, 0, 0, 0)).is_err());
    // Occupied cell inside it.
    assert!(UltimateTicTacToe::result(&board, Move::new(1, 0, 0, 1)).is_err());
}

#[test]
fn test_target_follows_played_cell() {
    // X plays the centre of (1,0): O is sent to the centre sub-board.
    let board = UltimateTicTacToe::result(&fixture(), Move::new(1, 0, 1, 1)).unwrap();
    assert_eq!(board.active_target(), Some((1, 1)));
    assert_eq!(board.next_player(), Player::O);

    let board = UltimateTicTacToe::result(&fixture(), Move::new(1, 0, 0, 0)).unwrap();
    assert_eq!(board.active_target(), Some((0, 0)));
}

#[test]
fn test_winning_move_decides_sub_board() {
    // (1,0,1,2) completes X's right column in sub-board (1,0).
    let board = UltimateTicTacToe::result(&fixture(), Move::new(1, 0, 1, 2)).unwrap();
    assert_eq!(board.sub_board_status(1, 0), Status::Won(Player::X));
    assert_eq!(board.active_target(), Some((1, 2)));
}
