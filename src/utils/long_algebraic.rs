//! Long algebraic move text ("e2e4", "e7e8q").
//!
//! Promotions always produce a queen, so the only accepted promotion suffix is
//! `q`; it may be omitted on input.

use crate::errors::ChessError;
use crate::game_state::chess_types::Position;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: &Move) -> String {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(mv.from()));
    out.push_str(&square_to_algebraic(mv.to));
    if mv.is_promotion() {
        out.push('q');
    }
    out
}

/// Resolve `text` against the legal moves of the side to move.
pub fn long_algebraic_to_move(text: &str, position: &Position) -> Result<Move, ChessError> {
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(ChessError::InvalidMoveText(text.to_owned()));
    }

    let invalid = |_: ChessError| ChessError::InvalidMoveText(text.to_owned());
    let from = algebraic_to_square(&text[0..2]).map_err(invalid)?;
    let to = algebraic_to_square(&text[2..4]).map_err(invalid)?;

    let suffix = text[4..].to_ascii_lowercase();
    if !suffix.is_empty() && suffix != "q" {
        return Err(ChessError::InvalidMoveText(text.to_owned()));
    }

    let mv = position
        .current_player()
        .find_legal_move(from, to)
        .ok_or_else(|| ChessError::NoMatchingMove(text.to_owned()))?;

    if !suffix.is_empty() && !mv.is_promotion() {
        return Err(ChessError::InvalidMoveText(text.to_owned()));
    }
    Ok(mv)
}
