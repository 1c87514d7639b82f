//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single recoverable error type of the crate. Parsing
//! failures and malformed set-up positions come back as `Err`; broken internal
//! invariants (a position losing its king during move execution) are bugs and
//! panic instead.

use thiserror::Error;

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A set-up position does not hold exactly one king for `color`.
    #[error("expected exactly one {color:?} king, found {count}")]
    KingCount { color: Color, count: usize },

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid square name '{0}'")]
    InvalidSquare(String),

    #[error("invalid move text '{0}'")]
    InvalidMoveText(String),

    /// The move text parsed but names no legal move in the current position.
    #[error("no legal move matches '{0}'")]
    NoMatchingMove(String),

    #[error("game is already over")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = ChessError::KingCount {
            color: Color::White,
            count: 2,
        };
        assert_eq!(err.to_string(), "expected exactly one White king, found 2");
        assert_eq!(
            ChessError::InvalidSquare("z9".to_owned()).to_string(),
            "invalid square name 'z9'"
        );
    }
}
