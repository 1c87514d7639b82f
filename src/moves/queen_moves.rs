use crate::game_state::chess_types::{Piece, Position};
use crate::moves::move_descriptions::Move;
use crate::moves::offsets::QUEEN_OFFSETS;
use crate::moves::sliding::generate_ray_moves;

#[inline]
pub fn generate_queen_moves(queen: &Piece, position: &Position, out: &mut Vec<Move>) {
    generate_ray_moves(queen, position, &QUEEN_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::Position;

    #[test]
    fn queen_on_d4_has_twenty_seven_targets() {
        let position = Position::from_fen("k7/8/8/8/3Q4/8/8/7K w - - 0 1").expect("FEN should parse");
        let queen = position.piece_at(35).expect("queen on d4");
        assert_eq!(queen.pseudo_legal_moves(&position).len(), 27);
    }
}
