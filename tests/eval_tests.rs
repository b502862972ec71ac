// Static evaluation tests
//
// Pins down the heuristic's fixed points: the terminal infinities, the
// one-move-trap shortcut, the border/center composite in the open game,
// and the mobility-only endgame form.

use knights_isolation::board::Board;
use knights_isolation::config::{Config, HeuristicConfig};
use knights_isolation::eval::score;
use knights_isolation::types::{Cell, Player};

fn weights() -> HeuristicConfig {
    Config::default_hardcoded().heuristic
}

#[test]
fn test_walled_in_mover_scores_negative_infinity() {
    let board = Board::new(3, 3, Cell::new(1, 1), Cell::new(0, 0), Player::One)
        .expect("3x3 board should construct");
    assert_eq!(score(&board, Player::One, &weights()), f64::NEG_INFINITY);
}

#[test]
fn test_walled_in_opponent_scores_positive_infinity() {
    let board = Board::new(3, 3, Cell::new(1, 1), Cell::new(0, 0), Player::One)
        .expect("3x3 board should construct");
    assert_eq!(score(&board, Player::Two, &weights()), f64::INFINITY);
}

#[test]
fn test_one_move_trap_scores_positive_infinity() {
    // The opponent's only escape square (1, 2) is also one of ours
    let board = Board::with_blocked(
        5,
        5,
        &[Cell::new(2, 1)],
        Cell::new(3, 3),
        Cell::new(0, 0),
        Player::One,
    )
    .expect("trap board should construct");

    assert_eq!(board.legal_moves(Player::Two).len(), 1);
    assert!(board.legal_moves(Player::One).contains(&Cell::new(1, 2)));
    assert_eq!(score(&board, Player::One, &weights()), f64::INFINITY);
}

#[test]
fn test_one_escape_we_cannot_reach_is_not_a_trap() {
    // Opponent at (0, 0) has only (1, 2) left, but from (4, 2) the mover
    // cannot reach it, so the shortcut must not fire
    let board = Board::with_blocked(
        5,
        5,
        &[Cell::new(2, 1)],
        Cell::new(4, 2),
        Cell::new(0, 0),
        Player::One,
    )
    .expect("board should construct");

    assert_eq!(board.legal_moves(Player::Two), vec![Cell::new(1, 2)]);
    assert!(!board.legal_moves(Player::One).contains(&Cell::new(1, 2)));
    assert!(
        score(&board, Player::One, &weights()).is_finite(),
        "An unreachable escape square is not a trap"
    );
}

#[test]
fn test_symmetric_under_role_swap() {
    let blocked = [Cell::new(2, 2), Cell::new(4, 1), Cell::new(1, 4)];
    let board_a = Board::with_blocked(
        6,
        6,
        &blocked,
        Cell::new(1, 2),
        Cell::new(4, 3),
        Player::One,
    )
    .expect("board should construct");
    let board_b = Board::with_blocked(
        6,
        6,
        &blocked,
        Cell::new(4, 3),
        Cell::new(1, 2),
        Player::Two,
    )
    .expect("board should construct");

    assert_eq!(
        score(&board_a, Player::One, &weights()),
        score(&board_b, Player::Two, &weights()),
        "Swapping both roles and positions must not change the score"
    );
}

#[test]
fn test_open_game_composite_score() {
    // 7x7, mover on the left border, opponent in the open interior
    let board = Board::new(7, 7, Cell::new(0, 3), Cell::new(3, 3), Player::One)
        .expect("7x7 board should construct");
    let weights = weights();
    assert!(board.blank_space_count() > weights.endgame_blank_threshold);

    let own_moves = board.legal_moves(Player::One).len() as f64;
    let opp_moves = board.legal_moves(Player::Two).len() as f64;

    // Rebuild the composite by hand: one border axis, distance to center,
    // open-opponent mobility difference, pseudo-distance term
    let mut expected = -weights.border_penalty;
    expected -= ((3.5f64 - 3.0).powi(2) + (3.5f64 - 0.0).powi(2)).sqrt();
    let distance = ((0 + 3) * (0 + 3) + (3 + 3) * (3 + 3)) as f64;
    expected += own_moves - weights.open_opponent_move_weight * opp_moves - distance / 7.0;

    let actual = score(&board, Player::One, &weights);
    assert!(
        (actual - expected).abs() < 1e-9,
        "Composite score {} differs from expected {}",
        actual,
        expected
    );
}

#[test]
fn test_opponent_on_border_earns_bonus_branch() {
    // Opponent pinned on the bottom border, mover in the interior
    let board = Board::new(7, 7, Cell::new(3, 3), Cell::new(5, 0), Player::One)
        .expect("7x7 board should construct");
    let weights = weights();

    let own_moves = board.legal_moves(Player::One).len() as f64;
    let opp_moves = board.legal_moves(Player::Two).len() as f64;

    let mut expected = 0.0;
    expected -= ((3.5f64 - 3.0).powi(2) + (3.5f64 - 3.0).powi(2)).sqrt();
    expected += weights.opponent_border_bonus;
    let distance = ((3 + 3) * (3 + 3) + (5 + 0) * (5 + 0)) as f64;
    expected += own_moves - weights.cornered_opponent_move_weight * opp_moves
        + weights.trap_bonus_scale / (distance / 7.0);

    let actual = score(&board, Player::One, &weights);
    assert!(
        (actual - expected).abs() < 1e-9,
        "Border-bonus score {} differs from expected {}",
        actual,
        expected
    );
}

#[test]
fn test_endgame_uses_mobility_only() {
    // 4x4 with six visited cells: 10 blanks, exactly at the threshold
    let board = Board::with_blocked(
        4,
        4,
        &[Cell::new(0, 2), Cell::new(1, 0), Cell::new(3, 1), Cell::new(2, 3)],
        Cell::new(0, 0),
        Cell::new(3, 3),
        Player::One,
    )
    .expect("endgame board should construct");
    let weights = weights();
    assert!(board.blank_space_count() <= weights.endgame_blank_threshold);

    let own_moves = board.legal_moves(Player::One).len() as f64;
    let opp_moves = board.legal_moves(Player::Two).len() as f64;

    let expected = weights.endgame_own_move_weight * own_moves - opp_moves;
    assert_eq!(score(&board, Player::One, &weights), expected);
}

#[test]
fn test_never_nan_on_reachable_states() {
    // Walk every state up to two plies from a fresh 5x5 game
    let start = Board::new(5, 5, Cell::new(0, 0), Cell::new(4, 4), Player::One)
        .expect("5x5 board should construct");
    let weights = weights();

    let mut frontier = vec![start];
    for _ in 0..2 {
        let mut next = Vec::new();
        for board in &frontier {
            for mv in board.legal_moves(board.to_move()) {
                next.push(board.apply_move(mv));
            }
        }
        frontier.extend(next);
    }

    for board in &frontier {
        for &player in [Player::One, Player::Two].iter() {
            let s = score(board, player, &weights);
            assert!(!s.is_nan(), "NaN evaluation for {:?}", board);
        }
    }
}
