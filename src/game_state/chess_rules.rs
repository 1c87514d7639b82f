//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting position FEN and the draw-rule limits.

use crate::game_state::chess_types::Square;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Plies without a capture or pawn move after which the game is drawn.
pub const NO_PROGRESS_PLY_LIMIT: u16 = 100;

/// Occurrences of the same placement (same side to move) that draw the game.
pub const REPETITION_LIMIT: usize = 3;

/// Capacity of the per-position ring of recent placements.
pub const HISTORY_CAPACITY: usize = NO_PROGRESS_PLY_LIMIT as usize;

pub const WHITE_KING_START: Square = 60;
pub const BLACK_KING_START: Square = 4;

/// The four central squares d5, e5, d4, e4.
pub const CENTER_SQUARES: [Square; 4] = [27, 28, 35, 36];
