//! Move descriptions.
//!
//! A `Move` records the moving piece as it stood before the move, the
//! destination square and a [`MoveKind`] carrying whatever the variant needs to
//! be executed (captured piece, castling rook). The null move is modelled as
//! `Option<Move>::None` wherever "no move" is meaningful.

use std::fmt;

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Non-pawn move to an empty square.
    Quiet,
    /// Non-pawn move capturing the piece on the destination.
    Capture { captured: Piece },
    /// Single pawn push onto the third-to-seventh relative rank.
    PawnQuiet,
    /// First pawn move over two squares; enables en passant for one reply.
    PawnDoublePush,
    PawnCapture { captured: Piece },
    /// Diagonal pawn move behind a pawn that just double-pushed.
    EnPassantCapture { captured: Piece },
    /// Pawn reaching the last rank; always promotes to a queen.
    PawnPromotion { captured: Option<Piece> },
    CastleKingSide { rook: Piece, rook_to: Square },
    CastleQueenSide { rook: Piece, rook_to: Square },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// The moving piece, positioned on its origin square.
    pub piece: Piece,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    pub const fn new(piece: Piece, to: Square, kind: MoveKind) -> Self {
        Self { piece, to, kind }
    }

    #[inline]
    pub const fn from(&self) -> Square {
        self.piece.square
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.piece.color
    }

    #[inline]
    pub const fn captured(&self) -> Option<Piece> {
        match self.kind {
            MoveKind::Capture { captured }
            | MoveKind::PawnCapture { captured }
            | MoveKind::EnPassantCapture { captured } => Some(captured),
            MoveKind::PawnPromotion { captured } => captured,
            _ => None,
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured().is_some()
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        matches!(self.kind, MoveKind::PawnPromotion { .. })
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        matches!(
            self.kind,
            MoveKind::CastleKingSide { .. } | MoveKind::CastleQueenSide { .. }
        )
    }

    #[inline]
    pub const fn is_pawn_move(&self) -> bool {
        matches!(self.piece.kind, PieceKind::Pawn)
    }

    /// Captures and pawn moves reset the no-progress counter.
    #[inline]
    pub const fn is_irreversible(&self) -> bool {
        self.is_capture() || self.is_pawn_move()
    }

    /// Whether the move heads toward the opponent's side of the board.
    #[inline]
    pub const fn is_forward(&self) -> bool {
        match self.piece.color {
            Color::White => self.to < self.piece.square,
            Color::Black => self.to > self.piece.square,
        }
    }

    /// Piece kind standing on the destination after the move.
    #[inline]
    pub const fn landing_kind(&self) -> PieceKind {
        if self.is_promotion() {
            PieceKind::Queen
        } else {
            self.piece.kind
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_long_algebraic(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promotion_capture_reports_captured_piece() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White, 9).with_first_move(false);
        let rook = Piece::new(PieceKind::Rook, Color::Black, 0);
        let mv = Move::new(pawn, 0, MoveKind::PawnPromotion { captured: Some(rook) });
        assert!(mv.is_promotion());
        assert!(mv.is_capture());
        assert_eq!(mv.captured(), Some(rook));
        assert_eq!(mv.landing_kind(), PieceKind::Queen);
        assert!(mv.is_forward());
        assert_eq!(mv.to_string(), "b7a8q");
    }

    #[test]
    fn castle_is_reversible_king_move() {
        let king = Piece::new(PieceKind::King, Color::Black, 4);
        let rook = Piece::new(PieceKind::Rook, Color::Black, 7);
        let mv = Move::new(king, 6, MoveKind::CastleKingSide { rook, rook_to: 5 });
        assert!(mv.is_castle());
        assert!(!mv.is_irreversible());
        assert!(!mv.is_forward());
        assert_eq!(mv.to_string(), "e8g8");
    }
}
