//! Shared target classification for non-pawn pieces.

use crate::game_state::chess_types::{Piece, Position, Square};
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::moves::offsets::walk_ray;

/// Push a move of `piece` onto `target` unless an own piece stands there.
///
/// Returns `true` when the target was empty (a ray may continue past it).
#[inline]
pub fn push_step_target(piece: &Piece, position: &Position, target: Square, out: &mut Vec<Move>) -> bool {
    match position.piece_at(target) {
        None => {
            out.push(Move::new(*piece, target, MoveKind::Quiet));
            true
        }
        Some(occupant) if occupant.color != piece.color => {
            out.push(Move::new(*piece, target, MoveKind::Capture { captured: occupant }));
            false
        }
        Some(_) => false,
    }
}

/// Walk every ray in `offsets`, stopping at the first occupied square.
pub fn generate_ray_moves(piece: &Piece, position: &Position, offsets: &[i8], out: &mut Vec<Move>) {
    for &offset in offsets {
        walk_ray(piece.square, offset, |target| push_step_target(piece, position, target, out));
    }
}
