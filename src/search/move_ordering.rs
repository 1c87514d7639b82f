//! Move ordering heuristics applied before search.
//!
//! Promotions first, then captures by most-valuable-victim / least-valuable-
//! attacker (recaptures of the piece that just moved get a bonus), then
//! castling, then heavier pieces, then forward moves.

use std::cmp::Reverse;

use crate::game_state::chess_types::Position;
use crate::moves::move_descriptions::Move;

const RECAPTURE_BONUS: i32 = 5_000;

/// MVV-LVA score of a capture, `None` for quiet moves.
pub fn capture_score(position: &Position, mv: &Move) -> Option<i32> {
    let victim = mv.captured()?;
    let mut score = 10 * victim.value() - mv.piece.value();
    if position.last_move().is_some_and(|last| last.to == victim.square) {
        score += RECAPTURE_BONUS;
    }
    Some(score)
}

type OrderKey = (bool, Option<i32>, bool, i32, bool);

#[inline]
fn order_key(position: &Position, mv: &Move) -> OrderKey {
    (
        mv.is_promotion(),
        capture_score(position, mv),
        mv.is_castle(),
        mv.piece.value(),
        mv.is_forward(),
    )
}

/// Sort `moves` best-first; `preferred` (the hash or previous best move) leads.
pub fn order_moves(position: &Position, moves: &mut [Move], preferred: Option<Move>) {
    moves.sort_by_cached_key(|mv| (Reverse(Some(*mv) == preferred), Reverse(order_key(position, mv))));
}

/// Ordered copy of the side to move's legal moves.
pub fn ordered_legal_moves(position: &Position, preferred: Option<Move>) -> Vec<Move> {
    let mut moves = position.current_player().legal_moves().to_vec();
    order_moves(position, &mut moves, preferred);
    moves
}
