//! Single-step king moves. Castling depends on attack information and is
//! produced by the legality layer in
//! [`legal_move_generator`](crate::move_generation::legal_move_generator).

use crate::game_state::chess_types::{Piece, Position, Square};
use crate::moves::move_descriptions::Move;
use crate::moves::offsets::{step, KING_OFFSETS};
use crate::moves::sliding::push_step_target;

#[inline]
pub fn king_targets(square: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS.iter().filter_map(move |offset| step(square, *offset))
}

pub fn generate_king_moves(king: &Piece, position: &Position, out: &mut Vec<Move>) {
    for target in king_targets(king.square) {
        push_step_target(king, position, target, out);
    }
}

#[cfg(test)]
mod tests {
    use super::king_targets;

    #[test]
    fn corner_king_has_three_targets() {
        let mut from_h8: Vec<_> = king_targets(7).collect();
        from_h8.sort_unstable();
        assert_eq!(from_h8, vec![6, 14, 15]);
        assert_eq!(king_targets(0).count(), 3);
        assert_eq!(king_targets(36).count(), 8);
    }
}
