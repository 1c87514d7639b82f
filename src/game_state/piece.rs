//! Piece value objects.
//!
//! A `Piece` is a plain `Copy` record. Moving it produces a new record with an
//! updated square and a cleared first-move flag; nothing is shared between
//! positions.

use crate::game_state::chess_types::{Color, GameStage, PieceKind, Position, Square};
use crate::moves::move_descriptions::Move;
use crate::moves::{bishop_moves, king_moves, knight_moves, pawn_moves, queen_moves, rook_moves};
use crate::tables::piece_square_tables::location_bonus;

pub const PAWN_VALUE: i32 = 1_000;
pub const KNIGHT_VALUE: i32 = 3_200;
pub const BISHOP_VALUE: i32 = 3_300;
pub const ROOK_VALUE: i32 = 5_000;
pub const QUEEN_VALUE: i32 = 9_000;
/// Sentinel value; a king is never traded, so it is excluded from material sums.
pub const KING_VALUE: i32 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    /// True until the piece has moved (castling and double-push eligibility).
    pub first_move: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            kind,
            color,
            square,
            first_move: true,
        }
    }

    #[inline]
    pub const fn with_first_move(mut self, first_move: bool) -> Self {
        self.first_move = first_move;
        self
    }

    /// The record this piece becomes after moving to `to`.
    #[inline]
    pub const fn moved_to(self, to: Square) -> Self {
        Self {
            square: to,
            first_move: false,
            ..self
        }
    }

    #[inline]
    pub const fn value(&self) -> i32 {
        kind_value(self.kind)
    }

    /// Piece-square bonus in millipawns for this piece where it stands.
    #[inline]
    pub fn location_bonus(&self, stage: GameStage) -> i32 {
        location_bonus(self.kind, self.color, self.square, stage)
    }

    /// Pseudo-legal moves: board edges and own-piece blocking are respected,
    /// king safety is not.
    pub fn pseudo_legal_moves(&self, position: &Position) -> Vec<Move> {
        let mut out = Vec::with_capacity(16);
        self.push_pseudo_legal_moves(position, &mut out);
        out
    }

    pub fn push_pseudo_legal_moves(&self, position: &Position, out: &mut Vec<Move>) {
        match self.kind {
            PieceKind::Pawn => pawn_moves::generate_pawn_moves(self, position, out),
            PieceKind::Knight => knight_moves::generate_knight_moves(self, position, out),
            PieceKind::Bishop => bishop_moves::generate_bishop_moves(self, position, out),
            PieceKind::Rook => rook_moves::generate_rook_moves(self, position, out),
            PieceKind::Queen => queen_moves::generate_queen_moves(self, position, out),
            PieceKind::King => king_moves::generate_king_moves(self, position, out),
        }
    }

    pub const fn fen_char(&self) -> char {
        let lower = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => lower.to_ascii_uppercase(),
            Color::Black => lower,
        }
    }
}

#[inline]
pub const fn kind_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}
