//! Per-color legality layer.
//!
//! A `Player` gathers the raw candidate moves of one color, adds castling, and
//! keeps only the moves after which that color's king is not attacked. It is
//! derived once per `Position` (see [`Position::player`]) and never stored
//! elsewhere.

use crate::game_state::chess_rules::{BLACK_KING_START, WHITE_KING_START};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position, Square};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::move_descriptions::{Move, MoveKind};

#[derive(Debug, Clone)]
pub struct Player {
    color: Color,
    king: Piece,
    legal_moves: Vec<Move>,
    in_check: bool,
    has_castled: bool,
}

impl Player {
    pub fn new(position: &Position, color: Color) -> Self {
        let king = position.king(color);
        let in_check = is_square_attacked(position, king.square, color.opposite());

        let mut candidates = position.pseudo_legal_moves(color);
        // A king capture is never a real move; the position before it was already lost.
        candidates.retain(|mv| mv.captured().map(|p| p.kind) != Some(PieceKind::King));
        if !in_check {
            candidates.extend(castling_moves(position, king));
        }

        let legal_moves = candidates
            .into_iter()
            .filter(|mv| leaves_king_safe(position, mv))
            .collect();

        Self {
            color,
            king,
            legal_moves,
            in_check,
            has_castled: position.has_castled(color),
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn king(&self) -> Piece {
        self.king
    }

    #[inline]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.in_check
    }

    #[inline]
    pub fn has_castled(&self) -> bool {
        self.has_castled
    }

    #[inline]
    pub fn has_legal_moves(&self) -> bool {
        !self.legal_moves.is_empty()
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.in_check && self.legal_moves.is_empty()
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        !self.in_check && self.legal_moves.is_empty()
    }

    pub fn find_legal_move(&self, from: Square, to: Square) -> Option<Move> {
        self.legal_moves
            .iter()
            .find(|mv| mv.from() == from && mv.to == to)
            .copied()
    }
}

fn leaves_king_safe(position: &Position, mv: &Move) -> bool {
    let next = mv.execute(position);
    let color = mv.color();
    !is_square_attacked(&next, next.king(color).square, color.opposite())
}

/// Castling moves available to `king`, assuming it is not in check.
pub fn castling_moves(position: &Position, king: Piece) -> Vec<Move> {
    castles(position, king, true)
}

/// Castles allowed by rights and empty paths, ignoring attacked squares.
pub fn unguarded_castling_moves(position: &Position, king: Piece) -> Vec<Move> {
    castles(position, king, false)
}

fn castles(position: &Position, king: Piece, require_safe_path: bool) -> Vec<Move> {
    let color = king.color;
    let start = match color {
        Color::White => WHITE_KING_START,
        Color::Black => BLACK_KING_START,
    };
    if !king.first_move || king.square != start {
        return Vec::new();
    }

    let enemy = color.opposite();
    let safe = |square: Square| !require_safe_path || !is_square_attacked(position, square, enemy);
    let mut out = Vec::with_capacity(2);

    // King side: rook on h-file corner, f and g empty and safe.
    if let Some(rook) = castling_rook(position, color, start + 3) {
        let (f, g) = (start + 1, start + 2);
        if position.is_empty(f)
            && position.is_empty(g)
            && safe(f)
            && safe(g)
        {
            out.push(Move::new(king, g, MoveKind::CastleKingSide { rook, rook_to: f }));
        }
    }

    // Queen side: b, c and d empty, c and d safe.
    if let Some(rook) = castling_rook(position, color, start - 4) {
        let (d, c, b) = (start - 1, start - 2, start - 3);
        if position.is_empty(d)
            && position.is_empty(c)
            && position.is_empty(b)
            && safe(d)
            && safe(c)
        {
            out.push(Move::new(king, c, MoveKind::CastleQueenSide { rook, rook_to: d }));
        }
    }

    out
}

fn castling_rook(position: &Position, color: Color, square: Square) -> Option<Piece> {
    position
        .piece_at(square)
        .filter(|p| p.kind == PieceKind::Rook && p.color == color && p.first_move)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_twenty_legal_moves() {
        let position = Position::new_game();
        let white = position.player(Color::White);
        assert_eq!(white.legal_moves().len(), 20);
        assert!(!white.is_in_check());
        assert_eq!(position.player(Color::Black).legal_moves().len(), 20);
    }

    #[test]
    fn castling_both_sides_when_clear() {
        let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let castles: Vec<_> = position
            .current_player()
            .legal_moves()
            .iter()
            .filter(|mv| mv.is_castle())
            .map(|mv| mv.to)
            .collect();
        assert_eq!(castles, vec![62, 58]);
    }

    #[test]
    fn no_castling_through_attacked_square() {
        // Black rook on f8 covers f1.
        let position = Position::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        let castles: Vec<_> = position
            .current_player()
            .legal_moves()
            .iter()
            .filter(|mv| mv.is_castle())
            .map(|mv| mv.to)
            .collect();
        assert_eq!(castles, vec![58]);
    }

    #[test]
    fn unguarded_castles_ignore_attacks_only() {
        let covered = Position::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        let king = covered.king(Color::White);
        let targets: Vec<_> = unguarded_castling_moves(&covered, king).iter().map(|mv| mv.to).collect();
        assert_eq!(targets, vec![62, 58]);

        let blocked = Position::from_fen("4k3/8/8/8/8/8/8/RN2K1NR w KQ - 0 1").expect("FEN should parse");
        assert!(unguarded_castling_moves(&blocked, blocked.king(Color::White)).is_empty());
    }

    #[test]
    fn no_castling_out_of_check_or_without_rights() {
        let in_check = Position::from_fen("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        assert!(in_check.current_player().is_in_check());
        assert!(!in_check.current_player().legal_moves().iter().any(|mv| mv.is_castle()));

        let no_rights = Position::from_fen("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").expect("FEN should parse");
        assert!(!no_rights.current_player().legal_moves().iter().any(|mv| mv.is_castle()));
    }

    #[test]
    fn queen_side_needs_b_file_empty() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1").expect("FEN should parse");
        assert!(!position.current_player().legal_moves().iter().any(|mv| mv.is_castle()));
    }

    #[test]
    fn pinned_piece_has_no_legal_moves() {
        let position = Position::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        let white = position.current_player();
        assert!(white.legal_moves().iter().all(|mv| mv.piece.kind == PieceKind::King));
    }
}
