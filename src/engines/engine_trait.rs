//! Engine abstraction layer used by the game session.
//!
//! Defines common search limits and output payloads so different engine
//! strategies can sit behind a single trait interface.

use crate::game_state::chess_types::Position;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Wall-clock budget for the whole search.
    pub movetime_ms: Option<u64>,
    /// Deepest iteration to start.
    pub depth: Option<u8>,
}

impl SearchLimits {
    pub fn movetime(movetime_ms: u64) -> Self {
        Self {
            movetime_ms: Some(movetime_ms),
            depth: None,
        }
    }

    pub fn depth(depth: u8) -> Self {
        Self {
            movetime_ms: None,
            depth: Some(depth),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub score: i32,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Forget everything learned from the previous game.
    fn new_game(&mut self) {}

    fn choose_move(&mut self, position: &Position, limits: &SearchLimits) -> EngineOutput;
}
