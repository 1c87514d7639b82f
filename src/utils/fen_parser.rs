//! FEN-to-Position parser.
//!
//! FEN carries castling rights and an en-passant square, while a `Position`
//! carries first-move flags and the producing move. Rights map onto the
//! first-move flags of the king and the matching corner rook; an en-passant
//! square becomes a synthesized double-push `last_move`.

use crate::errors::ChessError;
use crate::game_state::chess_types::{row_of, Color, Piece, PieceKind, Position, Square};
use crate::game_state::chess_rules::{BLACK_KING_START, WHITE_KING_START};
use crate::game_state::position::PositionBuilder;
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::utils::algebraic::algebraic_to_square;

#[derive(Debug, Clone, Copy, Default)]
struct CastlingRights {
    white_kingside: bool,
    white_queenside: bool,
    black_kingside: bool,
    black_queenside: bool,
}

impl CastlingRights {
    fn any(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside || self.white_queenside,
            Color::Black => self.black_kingside || self.black_queenside,
        }
    }

    /// Whether a rook of `color` standing on `square` keeps a castling right.
    fn rook_unmoved(&self, color: Color, square: Square) -> bool {
        match (color, square) {
            (Color::White, 63) => self.white_kingside,
            (Color::White, 56) => self.white_queenside,
            (Color::Black, 7) => self.black_kingside,
            (Color::Black, 0) => self.black_queenside,
            _ => false,
        }
    }
}

/// Parse the six FEN fields; the two clock fields may be omitted.
pub fn parse_fen(fen: &str) -> Result<Position, ChessError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let side_to_move = parse_side_to_move(side_part)?;
    let rights = parse_castling_rights(castling_part)?;
    let moves_without_capture = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("invalid halfmove clock '{halfmove_part}'")))?;
    fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("invalid fullmove number '{fullmove_part}'")))?;

    let mut builder = PositionBuilder::new()
        .side_to_move(side_to_move)
        .moves_without_capture(moves_without_capture);
    for piece in parse_board(board_part, &rights)? {
        builder.set_piece(piece);
    }

    let last_move = parse_en_passant(en_passant_part, side_to_move, &builder)?;
    builder.last_move(last_move).try_build()
}

fn invalid(reason: &str) -> ChessError {
    ChessError::InvalidFen(reason.to_owned())
}

fn parse_board(board_part: &str, rights: &CastlingRights) -> Result<Vec<Piece>, ChessError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut pieces = Vec::with_capacity(32);
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as usize;
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;

            if file >= 8 {
                return Err(invalid("board rank has too many files"));
            }

            let square = (row * 8 + file) as Square;
            let first_move = is_unmoved(kind, color, square, rights);
            pieces.push(Piece::new(kind, color, square).with_first_move(first_move));
            file += 1;
        }

        if file != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(pieces)
}

fn is_unmoved(kind: PieceKind, color: Color, square: Square, rights: &CastlingRights) -> bool {
    match kind {
        PieceKind::Pawn => row_of(square) == color.pawn_row(),
        PieceKind::King => {
            let start = match color {
                Color::White => WHITE_KING_START,
                Color::Black => BLACK_KING_START,
            };
            square == start && rights.any(color)
        }
        PieceKind::Rook => rights.rook_unmoved(color, square),
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => {
            row_of(square) == color.home_row()
        }
    }
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("invalid side to move '{side_part}'"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessError> {
    let mut rights = CastlingRights::default();
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_kingside = true,
            'Q' => rights.white_queenside = true,
            'k' => rights.black_kingside = true,
            'q' => rights.black_queenside = true,
            _ => return Err(invalid(&format!("invalid castling character '{ch}'"))),
        }
    }

    Ok(rights)
}

/// The double push that made `en_passant_part` capturable, if any.
fn parse_en_passant(
    en_passant_part: &str,
    side_to_move: Color,
    builder: &PositionBuilder,
) -> Result<Option<Move>, ChessError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let target = algebraic_to_square(en_passant_part)?;
    let mover = side_to_move.opposite();
    let step = 8 * mover.direction();
    let landing = target as i8 + step;
    let origin = target as i8 - step;

    let pushed = (0..64)
        .contains(&landing)
        .then(|| builder.piece_at(landing as Square))
        .flatten()
        .filter(|p| p.kind == PieceKind::Pawn && p.color == mover);
    if pushed.is_none() || !(0..64).contains(&origin) || builder.piece_at(origin as Square).is_some() {
        return Err(invalid(&format!(
            "en-passant square {en_passant_part} does not follow a double push"
        )));
    }

    let pawn = Piece::new(PieceKind::Pawn, mover, origin as Square);
    Ok(Some(Move::new(pawn, landing as Square, MoveKind::PawnDoublePush)))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}
