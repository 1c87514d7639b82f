//! Center control: legal moves into the four central squares and pawns
//! occupying them.

use crate::game_state::chess_rules::CENTER_SQUARES;
use crate::game_state::chess_types::{Color, PieceKind, Position, Square};

const ENEMY_HALF_ATTACK: i32 = 60;
const OWN_HALF_ATTACK: i32 = 25;
const PAWN_ON_CENTER: i32 = 80;

/// Central squares on the opponent's half, then on one's own half.
const fn center_halves(color: Color) -> ([Square; 2], [Square; 2]) {
    match color {
        Color::White => ([27, 28], [35, 36]),
        Color::Black => ([35, 36], [27, 28]),
    }
}

pub fn center_control(position: &Position, color: Color) -> i32 {
    let moves = position.player(color).legal_moves();
    let (enemy_half, own_half) = center_halves(color);
    let hits = |squares: [Square; 2]| -> i32 {
        moves.iter().filter(|mv| squares.contains(&mv.to)).count() as i32
    };

    let pawns_on_center = CENTER_SQUARES
        .iter()
        .filter(|&&sq| {
            position
                .piece_at(sq)
                .is_some_and(|p| p.color == color && p.kind == PieceKind::Pawn)
        })
        .count() as i32;

    hits(enemy_half) * ENEMY_HALF_ATTACK
        + hits(own_half) * OWN_HALF_ATTACK
        + pawns_on_center * PAWN_ON_CENTER
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::apply_move;

    #[test]
    fn starting_center_counts_double_pushes() {
        let position = Position::new_game();
        // d2-d4 and e2-e4 reach the own half of the center.
        assert_eq!(center_control(&position, Color::White), 2 * OWN_HALF_ATTACK);
        assert_eq!(center_control(&position, Color::Black), 2 * OWN_HALF_ATTACK);
    }

    #[test]
    fn central_pawn_scores_occupation() {
        let after = apply_move(&Position::new_game(), 52, 36).destination;
        let white = center_control(&after, Color::White);
        // e4 pawn occupies the center, d2-d4 still reaches it, and the e4 pawn
        // can push to e5 in the enemy half.
        assert_eq!(white, PAWN_ON_CENTER + OWN_HALF_ATTACK + ENEMY_HALF_ATTACK);
    }
}
