//! Material balance with a simplification bias.
//!
//! The side that is ahead gains more from its lead as material comes off the
//! board, and more when it still has pawns to promote. The adjustment is capped
//! so it never outweighs a clean extra piece.

use crate::game_state::chess_types::{Color, PieceKind, Position};

const BASE_CAP: i64 = 24_000;
const TOTAL_CAP: i64 = 31_000;
/// Total non-king material of the starting position.
const FULL_BOARD_MATERIAL: i64 = 80_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterialCount {
    pub sum: i64,
    pub pawns: i64,
}

pub fn count_material(position: &Position, color: Color) -> MaterialCount {
    position
        .pieces(color)
        .iter()
        .filter(|p| p.kind != PieceKind::King)
        .fold(MaterialCount::default(), |acc, p| MaterialCount {
            sum: acc.sum + i64::from(p.value()),
            pawns: acc.pawns + i64::from(p.kind == PieceKind::Pawn),
        })
}

/// White-minus-black material advantage in millipawns.
pub fn total_advantage(position: &Position) -> i32 {
    let white = count_material(position, Color::White);
    let black = count_material(position, Color::Black);

    let diff = (white.sum - black.sum).abs();
    let leader_pawns = if white.sum > black.sum { white.pawns } else { black.pawns };
    let remaining = FULL_BOARD_MATERIAL - (white.sum + black.sum);
    let scaled = diff.min(BASE_CAP) + diff * leader_pawns * remaining / (64_000 * (leader_pawns + 1));
    let advantage = scaled.min(TOTAL_CAP) as i32;

    if white.sum >= black.sum {
        advantage
    } else {
        -advantage
    }
}
