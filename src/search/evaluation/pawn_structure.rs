//! Pawn structure penalties: doubled, isolated, backward pawns and islands.

use crate::game_state::chess_types::{file_of, row_of, Color, Piece, PieceKind, Position};

const DOUBLED_PAWN: i32 = -350;
const PAWN_ISLAND: i32 = -100;
const BACKWARD_PAWN: i32 = -150;
const ISOLATED_PAWN: i32 = BACKWARD_PAWN - 30;
const BACKWARD_ON_OPEN_FILE: i32 = -80;

/// Number of `color` pawns on each file.
pub fn pawn_files(position: &Position, color: Color) -> [i32; 8] {
    let mut files = [0; 8];
    for pawn in pawns(position, color) {
        files[usize::from(file_of(pawn.square))] += 1;
    }
    files
}

fn pawns(position: &Position, color: Color) -> impl Iterator<Item = &Piece> {
    position
        .pieces(color)
        .iter()
        .filter(|p| p.kind == PieceKind::Pawn)
}

/// How far a pawn has advanced from its own back rank (0..=7).
#[inline]
fn advancement(pawn: &Piece) -> u8 {
    match pawn.color {
        Color::White => 7 - row_of(pawn.square),
        Color::Black => row_of(pawn.square),
    }
}

pub fn doubled_pawns(files: &[i32; 8]) -> i32 {
    files.iter().filter(|&&n| n > 1).map(|n| n - 1).sum()
}

pub fn isolated_pawns(files: &[i32; 8]) -> i32 {
    (0..8)
        .filter(|&f| {
            let left = f > 0 && files[f - 1] > 0;
            let right = f < 7 && files[f + 1] > 0;
            !left && !right
        })
        .map(|f| files[f])
        .sum()
}

pub fn pawn_islands(files: &[i32; 8]) -> i32 {
    let mut islands = 0;
    let mut in_island = false;
    for &count in files {
        if count > 0 && !in_island {
            islands += 1;
        }
        in_island = count > 0;
    }
    islands
}

/// A pawn is backward when no friendly pawn on an adjacent file stands level
/// with it or behind it.
fn is_backward(position: &Position, pawn: &Piece) -> bool {
    let file = file_of(pawn.square);
    let own = advancement(pawn);
    !pawns(position, pawn.color).any(|other| {
        file_of(other.square).abs_diff(file) == 1 && advancement(other) <= own
    })
}

/// No enemy pawn stands ahead of `pawn` on its file.
fn is_on_open_file(position: &Position, pawn: &Piece) -> bool {
    let file = file_of(pawn.square);
    let own = advancement(pawn);
    !pawns(position, pawn.color.opposite()).any(|enemy| {
        file_of(enemy.square) == file && 7 - advancement(enemy) > own
    })
}

pub fn pawn_structure(position: &Position, color: Color) -> i32 {
    let files = pawn_files(position, color);

    let mut backward = 0;
    let mut open_backward = 0;
    for pawn in pawns(position, color) {
        if is_backward(position, pawn) {
            backward += 1;
            if is_on_open_file(position, pawn) {
                open_backward += 1;
            }
        }
    }

    doubled_pawns(&files) * DOUBLED_PAWN
        + isolated_pawns(&files) * ISOLATED_PAWN
        + pawn_islands(&files) * PAWN_ISLAND
        + backward * BACKWARD_PAWN
        + open_backward * BACKWARD_ON_OPEN_FILE
}
