//! Piece placement from the piece-square tables, plus an opening penalty for
//! an early queen sortie.

use crate::game_state::chess_types::{row_of, Color, GameStage, PieceKind, Position};

/// Table sum is scaled by 4/5.
const TABLE_SCALE_NUM: i32 = 4;
const TABLE_SCALE_DEN: i32 = 5;
const EARLY_QUEEN_DEVELOPMENT: i32 = -500;

pub fn piece_location(position: &Position, color: Color, stage: GameStage) -> i32 {
    let table_sum: i32 = position
        .pieces(color)
        .iter()
        .map(|p| p.location_bonus(stage))
        .sum();
    table_sum * TABLE_SCALE_NUM / TABLE_SCALE_DEN + early_queen_development(position, color, stage)
}

fn early_queen_development(position: &Position, color: Color, stage: GameStage) -> i32 {
    if stage != GameStage::Opening {
        return 0;
    }
    let Some(queen) = position.pieces(color).iter().find(|p| p.kind == PieceKind::Queen) else {
        return 0;
    };
    let home_rows = match color {
        Color::White => 6..=7,
        Color::Black => 0..=1,
    };
    if home_rows.contains(&row_of(queen.square)) {
        0
    } else {
        EARLY_QUEEN_DEVELOPMENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn early_queen_sortie_is_penalised_in_opening() {
        let home = Position::new_game();
        let out = Position::from_fen("rnbqkbnr/pppp1ppp/8/4p2Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2")
            .expect("FEN should parse");
        assert_eq!(early_queen_development(&home, Color::White, GameStage::Opening), 0);
        assert_eq!(early_queen_development(&out, Color::White, GameStage::Opening), EARLY_QUEEN_DEVELOPMENT);
        assert_eq!(early_queen_development(&out, Color::White, GameStage::Midgame), 0);
    }

    #[test]
    fn starting_placement_is_symmetric() {
        let position = Position::new_game();
        assert_eq!(
            piece_location(&position, Color::White, GameStage::Opening),
            piece_location(&position, Color::Black, GameStage::Opening)
        );
    }
}
