use crate::game_state::chess_types::{Piece, Position};
use crate::moves::move_descriptions::Move;
use crate::moves::offsets::BISHOP_OFFSETS;
use crate::moves::sliding::generate_ray_moves;

#[inline]
pub fn generate_bishop_moves(bishop: &Piece, position: &Position, out: &mut Vec<Move>) {
    generate_ray_moves(bishop, position, &BISHOP_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::Position;

    #[test]
    fn bishop_on_edge_does_not_wrap() {
        // Bishop on h4 sees only the two diagonals heading toward the a-file.
        let position = Position::from_fen("4k3/8/8/8/7B/8/8/K7 w - - 0 1").expect("FEN should parse");
        let bishop = position.piece_at(39).expect("bishop on h4");
        let targets: Vec<_> = bishop.pseudo_legal_moves(&position).iter().map(|mv| mv.to).collect();
        assert_eq!(targets.len(), 7);
        assert!(targets.iter().all(|sq| sq % 8 != 0));
    }
}
