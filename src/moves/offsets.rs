//! Offset masks per piece type and the file wrap-around guards.
//!
//! Squares are a flat `0..=63` index, so an offset such as `+1` applied on the
//! h-file lands on the a-file of the next rank. Each guard below lists, per
//! origin column, the offsets that would cross the board edge that way.
//! Off-board results (index outside `0..=63`) are rejected separately by
//! [`offset_square`].

use crate::game_state::chess_types::{file_of, offset_square, Color, Square};

pub const ROOK_OFFSETS: [i8; 4] = [-8, -1, 1, 8];
pub const BISHOP_OFFSETS: [i8; 4] = [-9, -7, 7, 9];
pub const QUEEN_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];
pub const KING_OFFSETS: [i8; 8] = QUEEN_OFFSETS;
pub const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

/// Offsets of a one-file step that wrap when leaving the a-file.
const FIRST_COLUMN_EXCLUSIONS: [i8; 3] = [-9, -1, 7];
/// Offsets of a one-file step that wrap when leaving the h-file.
const EIGHTH_COLUMN_EXCLUSIONS: [i8; 3] = [-7, 1, 9];

const KNIGHT_FIRST_COLUMN: [i8; 4] = [-17, -10, 6, 15];
const KNIGHT_SECOND_COLUMN: [i8; 2] = [-10, 6];
const KNIGHT_SEVENTH_COLUMN: [i8; 2] = [-6, 10];
const KNIGHT_EIGHTH_COLUMN: [i8; 4] = [-15, -6, 10, 17];

/// True when a king-step or slider-step `offset` from `square` would wrap
/// around the board edge.
#[inline]
pub fn is_step_wrap(square: Square, offset: i8) -> bool {
    match file_of(square) {
        0 => FIRST_COLUMN_EXCLUSIONS.contains(&offset),
        7 => EIGHTH_COLUMN_EXCLUSIONS.contains(&offset),
        _ => false,
    }
}

#[inline]
pub fn is_knight_wrap(square: Square, offset: i8) -> bool {
    match file_of(square) {
        0 => KNIGHT_FIRST_COLUMN.contains(&offset),
        1 => KNIGHT_SECOND_COLUMN.contains(&offset),
        6 => KNIGHT_SEVENTH_COLUMN.contains(&offset),
        7 => KNIGHT_EIGHTH_COLUMN.contains(&offset),
        _ => false,
    }
}

/// One guarded step for kings and sliders.
#[inline]
pub fn step(square: Square, offset: i8) -> Option<Square> {
    if is_step_wrap(square, offset) {
        None
    } else {
        offset_square(square, offset)
    }
}

#[inline]
pub fn knight_step(square: Square, offset: i8) -> Option<Square> {
    if is_knight_wrap(square, offset) {
        None
    } else {
        offset_square(square, offset)
    }
}

/// Single-push offset for a pawn of `color`.
#[inline]
pub const fn pawn_push_offset(color: Color) -> i8 {
    8 * color.direction()
}

/// The two diagonal capture offsets for a pawn of `color`.
#[inline]
pub const fn pawn_capture_offsets(color: Color) -> [i8; 2] {
    let dir = color.direction();
    [7 * dir, 9 * dir]
}

/// Walk a ray from `origin`, calling `visit` for every reached square until it
/// returns `false` or the edge is hit.
pub fn walk_ray(origin: Square, offset: i8, mut visit: impl FnMut(Square) -> bool) {
    let mut current = origin;
    while let Some(next) = step(current, offset) {
        if !visit(next) {
            break;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_file_rook_does_not_wrap_left() {
        // a4 = 32; stepping -1 would reach h5.
        assert_eq!(step(32, -1), None);
        assert_eq!(step(32, 1), Some(33));
        assert_eq!(step(39, 1), None);
    }

    #[test]
    fn diagonal_guards_follow_direction() {
        // a4 toward b5 (-7) is fine, toward h5/h3 is not.
        assert_eq!(step(32, -7), Some(25));
        assert_eq!(step(32, -9), None);
        assert_eq!(step(32, 7), None);
        assert_eq!(step(39, 9), None);
        assert_eq!(step(39, 7), Some(46));
    }

    #[test]
    fn knight_from_corner_has_two_targets() {
        let from_a8: Vec<_> = KNIGHT_OFFSETS.iter().filter_map(|o| knight_step(0, *o)).collect();
        assert_eq!(from_a8, vec![10, 17]);
        let from_h1: Vec<_> = KNIGHT_OFFSETS.iter().filter_map(|o| knight_step(63, *o)).collect();
        assert_eq!(from_h1, vec![46, 53]);
        let from_b1: Vec<_> = KNIGHT_OFFSETS.iter().filter_map(|o| knight_step(57, *o)).collect();
        assert_eq!(from_b1, vec![40, 42, 51]);
    }

    #[test]
    fn white_pawn_captures_point_up_the_board() {
        assert_eq!(pawn_push_offset(Color::White), -8);
        assert_eq!(pawn_capture_offsets(Color::White), [-7, -9]);
        assert_eq!(pawn_capture_offsets(Color::Black), [7, 9]);
    }

    #[test]
    fn ray_stops_at_board_edge() {
        let mut visited = Vec::new();
        walk_ray(59, -9, |sq| {
            visited.push(sq);
            true
        });
        // d1 toward a4.
        assert_eq!(visited, vec![50, 41, 32]);
    }
}
