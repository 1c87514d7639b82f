//! Rook coordination: two rooks seeing each other along a rank or file.

use crate::game_state::chess_types::{file_of, row_of, Color, PieceKind, Position, Square};

const CONNECTED_ON_RANK: i32 = 70;
const CONNECTED_ON_FILE: i32 = 120;

fn path_is_clear(position: &Position, a: Square, b: Square, step: u8) -> bool {
    let (low, high) = if a < b { (a, b) } else { (b, a) };
    (low + step..high)
        .step_by(usize::from(step))
        .all(|sq| position.is_empty(sq))
}

pub fn rook_structure(position: &Position, color: Color) -> i32 {
    let rooks: Vec<Square> = position
        .pieces(color)
        .iter()
        .filter(|p| p.kind == PieceKind::Rook)
        .map(|p| p.square)
        .collect();

    let &[first, second] = rooks.as_slice() else {
        return 0;
    };

    if row_of(first) == row_of(second) && path_is_clear(position, first, second, 1) {
        CONNECTED_ON_RANK
    } else if file_of(first) == file_of(second) && path_is_clear(position, first, second, 8) {
        CONNECTED_ON_FILE
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_rooks_are_not_connected() {
        assert_eq!(rook_structure(&Position::new_game(), Color::White), 0);
    }

    #[test]
    fn open_back_rank_connects_rooks() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").expect("FEN should parse");
        assert_eq!(rook_structure(&position, Color::White), 0);
        let connected = Position::from_fen("4k3/8/8/8/8/8/8/R4RK1 w - - 0 1").expect("FEN should parse");
        assert_eq!(rook_structure(&connected, Color::White), CONNECTED_ON_RANK);
    }

    #[test]
    fn doubled_rooks_on_file() {
        let position = Position::from_fen("3rk3/3r4/8/8/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        assert_eq!(rook_structure(&position, Color::Black), CONNECTED_ON_FILE);
        let blocked = Position::from_fen("3rk3/3n4/3r4/8/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        assert_eq!(rook_structure(&blocked, Color::Black), 0);
    }
}
