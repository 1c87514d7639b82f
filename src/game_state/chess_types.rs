//! Primitive chess vocabulary shared by every subsystem.
//!
//! Squares are indexed `0..=63` starting at a8 and running rank by rank down
//! to h1, so White advances toward lower indices.

pub use crate::game_state::piece::Piece;
pub use crate::game_state::position::Position;

/// Board square index (`0..=63`, a8 = 0, h1 = 63).
pub type Square = u8;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Signed rank step of a forward pawn move (`-1` for White, `+1` for Black).
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Back rank row (0 = rank 8) on which this color's pieces start.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row on which this color's pawns start.
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which this color's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

/// Piece kind (color is carried separately on [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    #[inline]
    pub const fn is_minor(self) -> bool {
        matches!(self, PieceKind::Knight | PieceKind::Bishop)
    }
}

/// Coarse game phase derived from the non-king material left on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStage {
    Opening,
    Midgame,
    Ending,
}

/// Result of a game as seen from a single Position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    InProgress,
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameOutcome {
    #[inline]
    pub const fn is_finished(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn row_of(square: Square) -> u8 {
    square / 8
}

/// Offset `square` by `delta`, returning `None` when the result leaves `0..=63`.
///
/// This only guards the index range; file wrap-around is the caller's concern.
#[inline]
pub fn offset_square(square: Square, delta: i8) -> Option<Square> {
    let target = i16::from(square) + i16::from(delta);
    if (0..64).contains(&target) {
        Some(target as Square)
    } else {
        None
    }
}

/// Chebyshev (king-step) distance between two squares.
#[inline]
pub fn chebyshev_distance(a: Square, b: Square) -> u8 {
    let file_gap = file_of(a).abs_diff(file_of(b));
    let row_gap = row_of(a).abs_diff(row_of(b));
    file_gap.max(row_gap)
}
