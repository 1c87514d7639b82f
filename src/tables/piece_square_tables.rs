//! Piece-square placement tables in millipawns.
//!
//! Tables are written from White's point of view in board index order (first
//! row is rank 8). Black reads the vertically mirrored square, so every term
//! built on these tables is color-symmetric.

use crate::game_state::chess_types::{Color, GameStage, PieceKind, Square};

#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
       0,    0,    0,    0,    0,    0,    0,    0,
     750,  750,  750,  750,  750,  750,  750,  750,
     250,  250,  290,  290,  290,  290,  250,  250,
      50,   50,  100,  550,  550,  100,   50,   50,
       0,    0,    0,  200,  200,    0,    0,    0,
      50,  -50, -100,    0,    0, -100,  -50,   50,
      50,  100,  100, -200, -200,  100,  100,   50,
       0,    0,    0,    0,    0,    0,    0,    0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -500, -400, -300, -300, -300, -300, -400, -500,
    -400, -200,    0,    0,    0,    0, -200, -400,
    -300,    0,  100,  150,  150,  100,    0, -300,
    -300,   50,  150,  200,  200,  150,   50, -300,
    -300,    0,  150,  200,  200,  150,    0, -300,
    -300,   50,  100,  150,  150,  100,   50, -300,
    -400, -200,    0,   50,   50,    0, -200, -400,
    -500, -400, -300, -300, -300, -300, -400, -500,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -200, -100, -100, -100, -100, -100, -100, -200,
    -100,    0,    0,    0,    0,    0,    0, -100,
    -100,    0,   50,  100,  100,   50,    0, -100,
    -100,   50,   50,  100,  100,   50,   50, -100,
    -100,    0,  100,  100,  100,  100,    0, -100,
    -100,  100,  100,  100,  100,  100,  100, -100,
    -100,   50,    0,    0,    0,    0,   50, -100,
    -200, -100, -100, -100, -100, -100, -100, -200,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
       0,    0,    0,    0,    0,    0,    0,    0,
      50,  200,  200,  200,  200,  200,  200,   50,
     -50,    0,    0,    0,    0,    0,    0,  -50,
     -50,    0,    0,    0,    0,    0,    0,  -50,
     -50,    0,    0,    0,    0,    0,    0,  -50,
     -50,    0,    0,    0,    0,    0,    0,  -50,
     -50,    0,    0,    0,    0,    0,    0,  -50,
       0,    0,    0,   50,   50,    0,    0,    0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -200, -100, -100,  -50,  -50, -100, -100, -200,
    -100,    0,    0,    0,    0,    0,    0, -100,
    -100,    0,   50,   50,   50,   50,    0, -100,
     -50,    0,   50,   50,   50,   50,    0,  -50,
       0,    0,   50,   50,   50,   50,    0,  -50,
    -100,   50,   50,   50,   50,   50,    0, -100,
    -100,    0,   50,    0,    0,    0,    0, -100,
    -200, -100, -100,  -50,  -50, -100, -100, -200,
];

/// King placement while pieces remain: stay behind the pawn shield.
#[rustfmt::skip]
const KING_SHELTER_TABLE: [i32; 64] = [
    -300, -400, -400, -500, -500, -400, -400, -300,
    -300, -400, -400, -500, -500, -400, -400, -300,
    -300, -400, -400, -500, -500, -400, -400, -300,
    -300, -400, -400, -500, -500, -400, -400, -300,
    -200, -300, -300, -400, -400, -300, -300, -200,
    -100, -200, -200, -200, -200, -200, -200, -100,
     200,  200,    0,    0,    0,    0,  200,  200,
     200,  300,  100,    0,    0,  100,  300,  200,
];

/// King placement in the ending: centralize.
#[rustfmt::skip]
const KING_ENDING_TABLE: [i32; 64] = [
    -500, -400, -300, -200, -200, -300, -400, -500,
    -300, -200, -100,    0,    0, -100, -200, -300,
    -300, -100,  200,  300,  300,  200, -100, -300,
    -300, -100,  300,  400,  400,  300, -100, -300,
    -300, -100,  300,  400,  400,  300, -100, -300,
    -300, -100,  200,  300,  300,  200, -100, -300,
    -300, -300,    0,    0,    0,    0, -300, -300,
    -500, -300, -300, -300, -300, -300, -300, -500,
];

#[inline]
const fn table_for(kind: PieceKind, stage: GameStage) -> &'static [i32; 64] {
    match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => match stage {
            GameStage::Opening | GameStage::Midgame => &KING_SHELTER_TABLE,
            GameStage::Ending => &KING_ENDING_TABLE,
        },
    }
}

/// Square as seen from White's side of the board.
#[inline]
pub const fn relative_square(color: Color, square: Square) -> Square {
    match color {
        Color::White => square,
        Color::Black => square ^ 56,
    }
}

#[inline]
pub fn location_bonus(kind: PieceKind, color: Color, square: Square, stage: GameStage) -> i32 {
    table_for(kind, stage)[usize::from(relative_square(color, square))]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrored_squares_score_alike() {
        for kind in PieceKind::ALL {
            for square in 0..64u8 {
                assert_eq!(
                    location_bonus(kind, Color::White, square, GameStage::Midgame),
                    location_bonus(kind, Color::Black, square ^ 56, GameStage::Midgame),
                );
            }
        }
    }

    #[test]
    fn central_pawns_prefer_advancing() {
        // e2 is discouraged, e4 rewarded.
        assert!(location_bonus(PieceKind::Pawn, Color::White, 52, GameStage::Opening) < 0);
        assert!(location_bonus(PieceKind::Pawn, Color::White, 36, GameStage::Opening) > 0);
        // Black e7 mirrors White e2.
        assert_eq!(
            location_bonus(PieceKind::Pawn, Color::Black, 12, GameStage::Opening),
            location_bonus(PieceKind::Pawn, Color::White, 52, GameStage::Opening),
        );
    }

    #[test]
    fn king_table_switches_in_ending() {
        let e4 = 36;
        assert!(location_bonus(PieceKind::King, Color::White, e4, GameStage::Midgame) < 0);
        assert!(location_bonus(PieceKind::King, Color::White, e4, GameStage::Ending) > 0);
    }
}
