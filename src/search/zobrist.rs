//! Zobrist hashing support for fast position identity and repetition tracking.
//!
//! The keys are drawn from a fixed-seed `StdRng`, so fingerprints are
//! deterministic across runs, which is useful for testing and debugging.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::chess_rules::{BLACK_KING_START, WHITE_KING_START};
use crate::game_state::chess_types::{file_of, Color, PieceKind, Position, Square};

const ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Castling-relevant "has not moved" flags, one key each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingFlag {
    WhiteKing,
    WhiteKingSideRook,
    WhiteQueenSideRook,
    BlackKing,
    BlackKingSideRook,
    BlackQueenSideRook,
}

impl CastlingFlag {
    pub const ALL: [CastlingFlag; 6] = [
        CastlingFlag::WhiteKing,
        CastlingFlag::WhiteKingSideRook,
        CastlingFlag::WhiteQueenSideRook,
        CastlingFlag::BlackKing,
        CastlingFlag::BlackKingSideRook,
        CastlingFlag::BlackQueenSideRook,
    ];

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }

    /// Piece and square whose unmoved presence sets this flag.
    const fn anchor(self) -> (PieceKind, Color, Square) {
        match self {
            CastlingFlag::WhiteKing => (PieceKind::King, Color::White, WHITE_KING_START),
            CastlingFlag::WhiteKingSideRook => (PieceKind::Rook, Color::White, 63),
            CastlingFlag::WhiteQueenSideRook => (PieceKind::Rook, Color::White, 56),
            CastlingFlag::BlackKing => (PieceKind::King, Color::Black, BLACK_KING_START),
            CastlingFlag::BlackKingSideRook => (PieceKind::Rook, Color::Black, 7),
            CastlingFlag::BlackQueenSideRook => (PieceKind::Rook, Color::Black, 0),
        }
    }

    pub fn is_set(self, position: &Position) -> bool {
        let (kind, color, square) = self.anchor();
        position
            .piece_at(square)
            .is_some_and(|p| p.kind == kind && p.color == color && p.first_move)
    }
}

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[[u64; 64]; 6]; 2],
    white_to_move: u64,
    castling: [u64; 6],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

    let mut piece_square = [[[0u64; 64]; 6]; 2];
    for color in &mut piece_square {
        for piece in color {
            for sq in piece {
                *sq = rng.random::<u64>();
            }
        }
    }

    let white_to_move = rng.random::<u64>();

    let mut castling = [0u64; 6];
    for key in &mut castling {
        *key = rng.random::<u64>();
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = rng.random::<u64>();
    }

    ZobristTables {
        piece_square,
        white_to_move,
        castling,
        en_passant_file,
    }
}

/// Return the Zobrist key for a `(color, piece, square)` occupancy term.
#[inline]
pub fn piece_square_key(color: Color, piece: PieceKind, square: Square) -> u64 {
    tables().piece_square[color.index()][piece.index()][usize::from(square)]
}

#[inline]
pub fn castling_key(flag: CastlingFlag) -> u64 {
    tables().castling[flag.index()]
}

#[inline]
pub fn en_passant_file_key(file: u8) -> u64 {
    tables().en_passant_file[usize::from(file)]
}

/// Side-to-move key (xor in when White is to move).
#[inline]
pub fn white_to_move_key() -> u64 {
    tables().white_to_move
}

/// Key over piece placement and side to move only; equal for repeated
/// placements regardless of castling history.
pub fn compute_placement_key(position: &Position) -> u64 {
    let mut key = position
        .all_pieces()
        .fold(0u64, |acc, p| acc ^ piece_square_key(p.color, p.kind, p.square));
    if position.side_to_move() == Color::White {
        key ^= white_to_move_key();
    }
    key
}

/// Full fingerprint: placement, side to move, castling flags and en passant file.
pub fn compute_zobrist_key(position: &Position) -> u64 {
    let mut key = compute_placement_key(position);

    for flag in CastlingFlag::ALL {
        if flag.is_set(position) {
            key ^= castling_key(flag);
        }
    }

    if let Some(ep_square) = position.en_passant_target() {
        key ^= en_passant_file_key(file_of(ep_square));
    }

    key
}
