use crate::game_state::chess_types::{Piece, Position};
use crate::moves::move_descriptions::Move;
use crate::moves::offsets::ROOK_OFFSETS;
use crate::moves::sliding::generate_ray_moves;

#[inline]
pub fn generate_rook_moves(rook: &Piece, position: &Position, out: &mut Vec<Move>) {
    generate_ray_moves(rook, position, &ROOK_OFFSETS, out);
}
