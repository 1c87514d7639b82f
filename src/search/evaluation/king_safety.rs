//! King safety: castling status, pawn shield and king tropism.

use crate::game_state::chess_types::{
    chebyshev_distance, file_of, offset_square, row_of, Color, PieceKind, Position, Square,
};

const CASTLED_BONUS: i32 = 200;
const KING_MOVED_UNCASTLED: i32 = -100;
const GOOD_SHIELD_BONUS: i32 = 300;
const BAD_SHIELD_PENALTY: i32 = -300;
const TROPISM_RANGE: i32 = 10;
const TROPISM_DIVISOR: i32 = 200;

/// Pawn shield shapes relative to the king, in forward-signed offsets.
const SHIELD_PATTERNS: [&[i8]; 7] = [
    &[9, 8, 7],
    &[9, 8, 15],
    &[9, 16, 7],
    &[17, 8, 7],
    &[1, 8, -1],
    &[8, 7],
    &[8, 9],
];

pub fn king_safety(position: &Position, color: Color) -> i32 {
    castle_value(position, color) + king_tropism(position, color)
}

pub fn castle_value(position: &Position, color: Color) -> i32 {
    if position.has_castled(color) {
        CASTLED_BONUS + pawn_shield(position, color)
    } else if !position.king(color).first_move {
        KING_MOVED_UNCASTLED
    } else {
        0
    }
}

/// Shield squares that fall across the board edge count as covered.
fn shield_square_ok(position: &Position, color: Color, king: Square, offset: i8) -> bool {
    let Some(target) = offset_square(king, offset) else {
        return false;
    };
    let king_file = file_of(king);
    let target_file = file_of(target);
    if (king_file == 0 && target_file == 7) || (king_file == 7 && target_file == 0) {
        return true;
    }
    position
        .piece_at(target)
        .is_some_and(|p| p.kind == PieceKind::Pawn && p.color == color)
}

pub fn pawn_shield(position: &Position, color: Color) -> i32 {
    let king = position.king(color).square;
    let back_rows = match color {
        Color::White => 6..=7,
        Color::Black => 0..=1,
    };
    if !back_rows.contains(&row_of(king)) {
        return BAD_SHIELD_PENALTY;
    }

    let dir = color.direction();
    let sheltered = SHIELD_PATTERNS.iter().any(|pattern| {
        pattern
            .iter()
            .all(|&offset| shield_square_ok(position, color, king, offset * dir))
    });
    if sheltered {
        GOOD_SHIELD_BONUS
    } else {
        BAD_SHIELD_PENALTY
    }
}

/// Penalty for the enemy piece that can reach closest to the king; among
/// equally close pieces the most valuable one counts.
pub fn king_tropism(position: &Position, color: Color) -> i32 {
    let king = position.king(color).square;
    let closest = position
        .player(color.opposite())
        .legal_moves()
        .iter()
        .filter(|mv| mv.piece.kind != PieceKind::King)
        .map(|mv| (chebyshev_distance(king, mv.to), mv.piece.value()))
        .min_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

    match closest {
        Some((distance, value)) => -(value * (TROPISM_RANGE - i32::from(distance)) / TROPISM_DIVISOR),
        None => 0,
    }
}
