use crate::game_state::chess_types::{Piece, Position, Square};
use crate::moves::move_descriptions::Move;
use crate::moves::offsets::{knight_step, KNIGHT_OFFSETS};
use crate::moves::sliding::push_step_target;

/// Squares a knight on `square` jumps to, edge-guarded.
#[inline]
pub fn knight_targets(square: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(move |offset| knight_step(square, *offset))
}

pub fn generate_knight_moves(knight: &Piece, position: &Position, out: &mut Vec<Move>) {
    for target in knight_targets(knight.square) {
        push_step_target(knight, position, target, out);
    }
}

#[cfg(test)]
mod tests {
    use super::knight_targets;
    use crate::game_state::chess_types::Position;

    #[test]
    fn knight_on_d4_has_eight_targets() {
        let d4 = 35u8;
        assert_eq!(knight_targets(d4).count(), 8);
    }

    #[test]
    fn starting_knights_have_two_moves_each() {
        let position = Position::new_game();
        let g1 = position.piece_at(62).expect("knight on g1");
        let mut targets: Vec<_> = g1.pseudo_legal_moves(&position).iter().map(|mv| mv.to).collect();
        targets.sort_unstable();
        // f3 and h3.
        assert_eq!(targets, vec![45, 47]);
    }
}
