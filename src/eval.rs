// Static position evaluation
//
// Called once per frontier node, so everything here is a handful of
// move-count and coordinate lookups. Higher is better for the given player.

use crate::board::Board;
use crate::config::HeuristicConfig;
use crate::types::Player;

/// Heuristic value of `board` from `player`'s point of view.
///
/// Terminal states map to the infinities. A non-terminal state where the
/// opponent has exactly one legal move that `player` can occupy first is
/// treated as a won position. Otherwise the score combines mobility,
/// border and center-distance terms, switching to a pure mobility count
/// once the board fills up.
pub fn score(board: &Board, player: Player, weights: &HeuristicConfig) -> f64 {
    if board.is_loser(player) {
        return f64::NEG_INFINITY;
    }
    if board.is_winner(player) {
        return f64::INFINITY;
    }

    let opponent = player.opponent();
    let own_moves = board.legal_moves(player);
    let opponent_moves = board.legal_moves(opponent);

    if opponent_moves.len() == 1 && own_moves.contains(&opponent_moves[0]) {
        return f64::INFINITY;
    }

    if board.blank_space_count() <= weights.endgame_blank_threshold {
        // Endgame: positional terms stop mattering, mobility decides
        return weights.endgame_own_move_weight * own_moves.len() as f64
            - opponent_moves.len() as f64;
    }

    let own = board.player_location(player);
    let opp = board.player_location(opponent);
    let last_col = board.width() - 1;
    let last_row = board.height() - 1;

    let mut points = 0.0;
    if own.y == 0 || own.y == last_row {
        points -= weights.border_penalty;
    }
    if own.x == 0 || own.x == last_col {
        points -= weights.border_penalty;
    }

    let center_x = board.width() as f64 / 2.0;
    let center_y = board.height() as f64 / 2.0;
    points -= ((center_y - own.y as f64).powi(2) + (center_x - own.x as f64).powi(2)).sqrt();

    // Not a distance between the players; the search is tuned to this exact
    // term, so it is kept as-is
    let distance = ((own.x + own.y).pow(2) + (opp.x + opp.y).pow(2)) as f64;
    let width = board.width() as f64;

    let opponent_on_border =
        opp.y == 0 || opp.y == last_row || opp.x == 0 || opp.x == last_col;

    if opponent_on_border {
        points += weights.opponent_border_bonus;
        points + own_moves.len() as f64
            - weights.cornered_opponent_move_weight * opponent_moves.len() as f64
            + weights.trap_bonus_scale / (distance / width)
    } else {
        points + own_moves.len() as f64
            - weights.open_opponent_move_weight * opponent_moves.len() as f64
            - distance / width
    }
}
