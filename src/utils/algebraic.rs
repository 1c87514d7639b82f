//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! square index, where `0 == a8` and `63 == h1`.

use crate::errors::ChessError;
use crate::game_state::chess_types::{file_of, row_of, Square};

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessError> {
    let &[file, rank] = square.as_bytes() else {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    };

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file_index = file - b'a';
    let row_index = b'8' - rank;
    Ok(row_index * 8 + file_index)
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
///
/// Panics on an index outside the board.
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    assert!(square < 64, "square index out of range: {square}");
    let file_char = char::from(b'a' + file_of(square));
    let rank_char = char::from(b'8' - row_of(square));
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::errors::ChessError;

    #[test]
    fn corner_and_center_squares() {
        assert_eq!(algebraic_to_square("a8").expect("a8 should parse"), 0);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), 7);
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 56);
        assert_eq!(algebraic_to_square("h1").expect("h1 should parse"), 63);
        assert_eq!(algebraic_to_square("e4").expect("e4 should parse"), 36);
        assert_eq!(square_to_algebraic(28), "e5");
        assert_eq!(square_to_algebraic(60), "e1");
    }

    #[test]
    fn every_square_names_itself() {
        for square in 0..64u8 {
            let name = square_to_algebraic(square);
            assert_eq!(algebraic_to_square(&name), Ok(square));
        }
    }

    #[test]
    fn rejects_malformed_names() {
        for bad in ["", "e", "e9", "i1", "E4", "e44"] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(ChessError::InvalidSquare(bad.to_owned()))
            );
        }
    }
}
