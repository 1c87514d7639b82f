//! Immutable board snapshot.
//!
//! `Position` is the central model of the engine. It owns the square map, the
//! per-color active piece lists, turn and draw-rule counters, a link to the
//! move that produced it, and a bounded ring of recent placements used for
//! repetition checks. No method mutates an existing `Position`; moves build new
//! ones through [`Move::execute`](crate::moves::move_descriptions::Move::execute).

use std::fmt;
use std::sync::OnceLock;

use crate::errors::ChessError;
use crate::game_state::chess_rules::{
    NO_PROGRESS_PLY_LIMIT, REPETITION_LIMIT, STARTING_POSITION_FEN,
};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::position_history::PositionHistory;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_generator::Player;
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::search::zobrist::{compute_placement_key, compute_zobrist_key};
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_position;

#[derive(Debug, Clone)]
pub struct Position {
    squares: [Option<Piece>; 64],
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    side_to_move: Color,
    moves_without_capture: u16,
    last_move: Option<Move>,
    castled: [bool; 2],
    history: PositionHistory,
    fingerprint: u64,
    placement_key: u64,
    players: [OnceLock<Player>; 2],
}

impl Position {
    /// The standard starting position.
    pub fn new_game() -> Self {
        let mut builder = PositionBuilder::new();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in back_rank.into_iter().enumerate() {
            let file = file as Square;
            builder = builder
                .piece(Piece::new(kind, Color::Black, file))
                .piece(Piece::new(PieceKind::Pawn, Color::Black, 8 + file))
                .piece(Piece::new(PieceKind::Pawn, Color::White, 48 + file))
                .piece(Piece::new(kind, Color::White, 56 + file));
        }
        builder.build()
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn starting_fen() -> &'static str {
        STARTING_POSITION_FEN
    }

    /// Internal constructor shared by the builder and move execution.
    ///
    /// Panics when the placement does not hold exactly one king per color.
    pub(crate) fn assemble(
        squares: [Option<Piece>; 64],
        side_to_move: Color,
        moves_without_capture: u16,
        last_move: Option<Move>,
        castled: [bool; 2],
        history: PositionHistory,
    ) -> Self {
        let mut white_pieces = Vec::with_capacity(16);
        let mut black_pieces = Vec::with_capacity(16);
        for (index, slot) in squares.iter().enumerate() {
            if let Some(piece) = slot {
                debug_assert_eq!(usize::from(piece.square), index, "piece square out of sync");
                match piece.color {
                    Color::White => white_pieces.push(*piece),
                    Color::Black => black_pieces.push(*piece),
                }
            }
        }

        for pieces in [&white_pieces, &black_pieces] {
            let kings = pieces.iter().filter(|p| p.kind == PieceKind::King).count();
            assert_eq!(kings, 1, "every position must hold exactly one king per color");
        }

        let mut position = Self {
            squares,
            white_pieces,
            black_pieces,
            side_to_move,
            moves_without_capture,
            last_move,
            castled,
            history,
            fingerprint: 0,
            placement_key: 0,
            players: [OnceLock::new(), OnceLock::new()],
        };
        position.fingerprint = compute_zobrist_key(&position);
        position.placement_key = compute_placement_key(&position);
        position
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[usize::from(square)]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[usize::from(square)].is_none()
    }

    #[inline]
    pub fn squares(&self) -> &[Option<Piece>; 64] {
        &self.squares
    }

    /// Active pieces of `color`, ordered by square.
    #[inline]
    pub fn pieces(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white_pieces,
            Color::Black => &self.black_pieces,
        }
    }

    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.white_pieces.iter().chain(self.black_pieces.iter())
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Plies since the last capture or pawn move.
    #[inline]
    pub fn moves_without_capture(&self) -> u16 {
        self.moves_without_capture
    }

    /// The move that produced this position, `None` for a set-up position.
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    #[inline]
    pub fn has_castled(&self, color: Color) -> bool {
        self.castled[color.index()]
    }

    #[inline]
    pub(crate) fn castled_flags(&self) -> [bool; 2] {
        self.castled
    }

    #[inline]
    pub fn history(&self) -> &PositionHistory {
        &self.history
    }

    /// Zobrist fingerprint (pieces, castling flags, side to move, en passant).
    #[inline]
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Fingerprint of the piece placement and side to move only.
    #[inline]
    pub fn placement_key(&self) -> u64 {
        self.placement_key
    }

    pub fn king(&self, color: Color) -> Piece {
        // `assemble` guarantees the king exists.
        let king = self
            .pieces(color)
            .iter()
            .find(|piece| piece.kind == PieceKind::King)
            .copied();
        match king {
            Some(king) => king,
            None => unreachable!("position without a {color:?} king"),
        }
    }

    /// Square a pawn may capture onto en passant, if the last move allows it.
    pub fn en_passant_target(&self) -> Option<Square> {
        match self.last_move {
            Some(Move {
                kind: MoveKind::PawnDoublePush,
                piece,
                to,
            }) => Some((piece.square + to) / 2),
            _ => None,
        }
    }

    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        is_square_attacked(self, square, by)
    }

    /// Legality view for `color`, computed once per position.
    pub fn player(&self, color: Color) -> &Player {
        self.players[color.index()].get_or_init(|| Player::new(self, color))
    }

    #[inline]
    pub fn current_player(&self) -> &Player {
        self.player(self.side_to_move)
    }

    /// Raw candidate moves of every `color` piece, king safety unchecked.
    pub fn pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut out = Vec::with_capacity(48);
        for piece in self.pieces(color) {
            piece.push_pseudo_legal_moves(self, &mut out);
        }
        out
    }

    /// Sum of all non-king piece values on the board.
    pub fn non_king_material(&self) -> i32 {
        self.all_pieces()
            .filter(|piece| piece.kind != PieceKind::King)
            .map(|piece| piece.value())
            .sum()
    }

    pub fn is_no_progress_draw(&self) -> bool {
        self.moves_without_capture >= NO_PROGRESS_PLY_LIMIT
    }

    pub fn is_repetition_draw(&self) -> bool {
        self.history.occurrences(self.placement_key) + 1 >= REPETITION_LIMIT
    }

    /// Neither side can force mate: no pawns, rooks or queens, and at most one
    /// minor piece per side.
    pub fn has_insufficient_material(&self) -> bool {
        [Color::White, Color::Black].into_iter().all(|color| {
            let mut minors = 0;
            for piece in self.pieces(color) {
                match piece.kind {
                    PieceKind::King => {}
                    PieceKind::Knight | PieceKind::Bishop => minors += 1,
                    PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
                }
            }
            minors <= 1
        })
    }

    /// Draw by rule, independent of whether the side to move has moves.
    pub fn is_rule_draw(&self) -> bool {
        self.is_no_progress_draw() || self.has_insufficient_material() || self.is_repetition_draw()
    }
}

/// Same piece mapping (kind and color per square) and same side to move.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        let occupant = |slot: &Option<Piece>| slot.map(|p| (p.kind, p.color));
        self.side_to_move == other.side_to_move
            && self
                .squares
                .iter()
                .zip(other.squares.iter())
                .all(|(a, b)| occupant(a) == occupant(b))
    }
}

impl Eq for Position {}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_position(self))
    }
}

/// Incremental construction of set-up positions (tests, FEN parsing).
#[derive(Debug, Clone)]
pub struct PositionBuilder {
    squares: [Option<Piece>; 64],
    side_to_move: Color,
    moves_without_capture: u16,
    last_move: Option<Move>,
    castled: [bool; 2],
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self {
            squares: [None; 64],
            side_to_move: Color::White,
            moves_without_capture: 0,
            last_move: None,
            castled: [false; 2],
        }
    }
}

impl PositionBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn piece(mut self, piece: Piece) -> Self {
        self.set_piece(piece);
        self
    }

    pub fn set_piece(&mut self, piece: Piece) {
        assert!(piece.square < 64, "square index out of range: {}", piece.square);
        self.squares[usize::from(piece.square)] = Some(piece);
    }

    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    pub fn moves_without_capture(mut self, plies: u16) -> Self {
        self.moves_without_capture = plies;
        self
    }

    pub fn last_move(mut self, mv: Option<Move>) -> Self {
        self.last_move = mv;
        self
    }

    pub fn castled(mut self, color: Color, castled: bool) -> Self {
        self.castled[color.index()] = castled;
        self
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares.get(usize::from(square)).copied().flatten()
    }

    pub fn king_count(&self, color: Color) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|p| p.color == color && p.kind == PieceKind::King)
            .count()
    }

    /// Build, reporting a missing or duplicated king as an error.
    pub fn try_build(self) -> Result<Position, ChessError> {
        for color in [Color::White, Color::Black] {
            let kings = self.king_count(color);
            if kings != 1 {
                return Err(ChessError::KingCount { color, count: kings });
            }
        }
        Ok(self.build())
    }

    /// Build, panicking when the king invariant is violated.
    pub fn build(self) -> Position {
        Position::assemble(
            self.squares,
            self.side_to_move,
            self.moves_without_capture,
            self.last_move,
            self.castled,
            PositionHistory::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_matches_starting_fen() {
        let built = Position::new_game();
        let parsed = Position::from_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(built, parsed);
        assert_eq!(built.fingerprint(), parsed.fingerprint());
        assert_eq!(built.pieces(Color::White).len(), 16);
        assert_eq!(built.pieces(Color::Black).len(), 16);
        assert_eq!(built.king(Color::White).square, 60);
        assert_eq!(built.king(Color::Black).square, 4);
    }

    #[test]
    fn empty_square_lookup_is_none() {
        let game = Position::new_game();
        assert_eq!(game.piece_at(36), None);
        assert!(game.is_empty(36));
    }

    #[test]
    #[should_panic(expected = "exactly one king")]
    fn building_without_king_is_fatal() {
        let _ = PositionBuilder::new()
            .piece(Piece::new(PieceKind::King, Color::White, 60))
            .build();
    }

    #[test]
    fn try_build_reports_missing_king() {
        let err = PositionBuilder::new()
            .piece(Piece::new(PieceKind::King, Color::White, 60))
            .try_build()
            .expect_err("black king is missing");
        assert!(matches!(err, ChessError::KingCount { color: Color::Black, count: 0 }));
    }

    #[test]
    fn lone_kings_and_single_minor_are_insufficient() {
        let kings = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(kings.has_insufficient_material());
        let knight = Position::from_fen("4k3/8/8/8/8/8/8/4KN2 w - - 0 1").expect("FEN should parse");
        assert!(knight.has_insufficient_material());
        let two_minors =
            Position::from_fen("4k3/8/8/8/8/8/8/3BKN2 w - - 0 1").expect("FEN should parse");
        assert!(!two_minors.has_insufficient_material());
        let pawn = Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(!pawn.has_insufficient_material());
    }

    #[test]
    fn no_progress_counter_draws_at_limit() {
        let fresh = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 99 80").expect("FEN should parse");
        assert!(!fresh.is_no_progress_draw());
        let stale = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 100 80").expect("FEN should parse");
        assert!(stale.is_no_progress_draw());
        assert!(stale.is_rule_draw());
    }
}
