//! Attack detection and check queries.
//!
//! Attacks are found by scanning outward from the target square with the same
//! offset masks and wrap guards the move generators use, so the answer never
//! depends on generating a full move list. Pawn pushes never attack.

use crate::game_state::chess_types::{offset_square, Color, PieceKind, Position, Square};
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::offsets::{pawn_capture_offsets, step, walk_ray, BISHOP_OFFSETS, ROOK_OFFSETS};

#[inline]
pub fn king_square(position: &Position, color: Color) -> Square {
    position.king(color).square
}

#[inline]
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    is_square_attacked(position, king_square(position, color), color.opposite())
}

pub fn is_square_attacked(position: &Position, square: Square, attacker_color: Color) -> bool {
    let holds = |sq: Square, kinds: &[PieceKind]| {
        position
            .piece_at(sq)
            .is_some_and(|p| p.color == attacker_color && kinds.contains(&p.kind))
    };

    for offset in pawn_capture_offsets(attacker_color) {
        let Some(source) = offset_square(square, -offset) else {
            continue;
        };
        if step(source, offset) == Some(square) && holds(source, &[PieceKind::Pawn]) {
            return true;
        }
    }

    if knight_targets(square).any(|sq| holds(sq, &[PieceKind::Knight])) {
        return true;
    }

    if king_targets(square).any(|sq| holds(sq, &[PieceKind::King])) {
        return true;
    }

    ray_hits(position, square, &ROOK_OFFSETS, attacker_color, PieceKind::Rook)
        || ray_hits(position, square, &BISHOP_OFFSETS, attacker_color, PieceKind::Bishop)
}

/// Whether the first piece met along any ray is an enemy `slider` or queen.
fn ray_hits(
    position: &Position,
    square: Square,
    offsets: &[i8],
    attacker_color: Color,
    slider: PieceKind,
) -> bool {
    let mut found = false;
    for &offset in offsets {
        walk_ray(square, offset, |sq| match position.piece_at(sq) {
            None => true,
            Some(piece) => {
                found |= piece.color == attacker_color
                    && (piece.kind == slider || piece.kind == PieceKind::Queen);
                false
            }
        });
        if found {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pawn_attacks_diagonally_not_forward() {
        let position = Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        // e2 pawn hits d3 and f3, not e3.
        assert!(is_square_attacked(&position, 43, Color::White));
        assert!(is_square_attacked(&position, 45, Color::White));
        assert!(!is_square_attacked(&position, 44, Color::White));
    }

    #[test]
    fn h_file_pawn_does_not_attack_across_edge() {
        let position = Position::from_fen("4k3/8/8/8/8/8/7P/4K3 w - - 0 1").expect("FEN should parse");
        // h2 = 55; the -7 capture offset would wrap onto a2.
        assert!(is_square_attacked(&position, 46, Color::White));
        assert!(!is_square_attacked(&position, 48, Color::White));
    }

    #[test]
    fn sliders_are_blocked() {
        let position = Position::from_fen("4k3/8/8/8/R2p3q/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_square_attacked(&position, 35, Color::White));
        assert!(!is_square_attacked(&position, 36, Color::White));
        assert!(is_square_attacked(&position, 36, Color::Black));
        // h4 queen reaches e1 along the diagonal.
        assert!(is_king_in_check(&position, Color::White));
    }

    #[test]
    fn knights_and_kings_attack_adjacent_patterns() {
        let position = Position::from_fen("4k3/8/8/8/8/5n2/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&position, Color::White));
        assert!(is_square_attacked(&position, 12, Color::Black));
        assert!(!is_king_in_check(&position, Color::Black));
    }
}
