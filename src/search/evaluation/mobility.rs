//! Mobility: legal moves, weighted by piece and direction.

use crate::game_state::chess_types::{Color, GameStage, PieceKind, Position};
use crate::moves::move_descriptions::Move;

const ROOK_FORWARD: i32 = 20;
const ROOK_SIDEWAYS: i32 = 12;
const ROOK_BACKWARD: i32 = 7;
const BISHOP_FORWARD: i32 = 14;
const BISHOP_BACKWARD: i32 = 9;
const KNIGHT_FORWARD: i32 = 12;
const KNIGHT_BACKWARD: i32 = 5;
const OTHER_MOVE: i32 = 1;

/// Stage multiplier in thousandths.
const fn stage_weight(stage: GameStage) -> i32 {
    match stage {
        GameStage::Opening => 1_000,
        GameStage::Midgame => 800,
        GameStage::Ending => 400,
    }
}

/// Signed advance of `mv` in squares, positive toward the enemy.
#[inline]
fn advance(mv: &Move) -> i32 {
    (i32::from(mv.to) - i32::from(mv.from())) * i32::from(mv.color().direction())
}

fn move_value(mv: &Move) -> i32 {
    let delta = advance(mv);
    match mv.piece.kind {
        PieceKind::Rook if delta.abs() < 8 => ROOK_SIDEWAYS,
        PieceKind::Rook if delta >= 8 => ROOK_FORWARD,
        PieceKind::Rook => ROOK_BACKWARD,
        PieceKind::Bishop if delta >= 7 => BISHOP_FORWARD,
        PieceKind::Bishop => BISHOP_BACKWARD,
        PieceKind::Knight if delta >= 6 => KNIGHT_FORWARD,
        PieceKind::Knight => KNIGHT_BACKWARD,
        _ => OTHER_MOVE,
    }
}

pub fn mobility(position: &Position, color: Color, stage: GameStage) -> i32 {
    let raw: i32 = position
        .player(color)
        .legal_moves()
        .iter()
        .map(move_value)
        .sum();
    raw * stage_weight(stage) / 1_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_mobility_is_symmetric() {
        let position = Position::new_game();
        let white = mobility(&position, Color::White, GameStage::Opening);
        let black = mobility(&position, Color::Black, GameStage::Opening);
        // 16 pawn moves at 1 plus four forward knight jumps at 12.
        assert_eq!(white, 16 + 4 * 12);
        assert_eq!(white, black);
    }

    #[test]
    fn ending_weight_shrinks_mobility() {
        let position = Position::new_game();
        let opening = mobility(&position, Color::White, GameStage::Opening);
        let ending = mobility(&position, Color::White, GameStage::Ending);
        assert_eq!(ending, opening * 400 / 1_000);
    }
}
