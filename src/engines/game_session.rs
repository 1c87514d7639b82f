//! In-process game session: the surface a GUI or harness talks to.
//!
//! A `ChessGame` owns the current Position and one engine (and with it the
//! game's transposition table). Searches run synchronously on the caller's
//! thread; `&mut self` keeps a second search from starting while one runs.

use crate::engines::engine_iterative::IterativeEngine;
use crate::engines::engine_trait::{Engine, SearchLimits};
use crate::errors::ChessError;
use crate::game_state::chess_types::{Color, GameOutcome, Position, Square};
use crate::move_generation::legal_move_apply::{apply_checked, apply_move};
use crate::move_generation::move_transition::MoveTransition;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::{BoardScorer, PositionEvaluator};
use crate::utils::algebraic::square_to_algebraic;
use crate::utils::long_algebraic::long_algebraic_to_move;

/// Outcome of the game as it stands in `position`.
pub fn game_outcome(position: &Position) -> GameOutcome {
    let player = position.current_player();
    if player.is_checkmate() {
        return match player.color() {
            Color::White => GameOutcome::BlackWins,
            Color::Black => GameOutcome::WhiteWins,
        };
    }
    if player.is_stalemate() || position.is_rule_draw() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

/// One-off search with a fresh engine; `None` only when no legal move exists.
pub fn compute_move(position: &Position, time_budget_ms: u64) -> Option<Move> {
    IterativeEngine::new()
        .search(position, &SearchLimits::movetime(time_budget_ms))
        .best_move
}

pub struct ChessGame<S: BoardScorer = PositionEvaluator> {
    position: Position,
    engine: IterativeEngine<S>,
    moves: Vec<Move>,
}

impl ChessGame {
    pub fn new() -> Self {
        Self::with_engine(Position::new_game(), IterativeEngine::new())
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        Ok(Self::with_engine(Position::from_fen(fen)?, IterativeEngine::new()))
    }
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BoardScorer> ChessGame<S> {
    pub fn with_engine(position: Position, mut engine: IterativeEngine<S>) -> Self {
        engine.new_game();
        Self {
            position,
            engine,
            moves: Vec::new(),
        }
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Moves played through this session, oldest first.
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn engine(&self) -> &IterativeEngine<S> {
        &self.engine
    }

    pub fn outcome(&self) -> GameOutcome {
        game_outcome(&self.position)
    }

    /// Play `from -> to` for the side to move; rejected moves leave the game as is.
    pub fn apply_move(&mut self, from: Square, to: Square) -> MoveTransition {
        let transition = apply_move(&self.position, from, to);
        self.record(&transition);
        transition
    }

    /// Play a move given as long algebraic text such as "e2e4".
    pub fn apply_move_text(&mut self, text: &str) -> Result<MoveTransition, ChessError> {
        let mv = long_algebraic_to_move(text, &self.position)?;
        let transition = apply_checked(&self.position, &mv);
        self.record(&transition);
        Ok(transition)
    }

    pub fn compute_move(&mut self, time_budget_ms: u64) -> Option<Move> {
        let output = self
            .engine
            .choose_move(&self.position, &SearchLimits::movetime(time_budget_ms));
        for line in &output.info_lines {
            log::debug!("{line}");
        }
        output.best_move
    }

    /// Search and play the engine's move through the same path as a human move.
    pub fn play_computer_move(&mut self, time_budget_ms: u64) -> Result<MoveTransition, ChessError> {
        if self.outcome().is_finished() {
            return Err(ChessError::GameOver);
        }
        let mv = self.compute_move(time_budget_ms).ok_or(ChessError::GameOver)?;
        Ok(self.apply_move(mv.from(), mv.to))
    }

    fn record(&mut self, transition: &MoveTransition) {
        let Some(mv) = transition.attempted.filter(|_| transition.status.is_done()) else {
            log::debug!(
                "rejected {}{}: {:?}",
                square_to_algebraic(transition.from),
                square_to_algebraic(transition.to),
                transition.status
            );
            return;
        };
        if mv.is_irreversible() {
            self.engine.clear_table();
        }
        log::debug!("played {mv}");
        self.moves.push(mv);
        self.position = transition.destination.clone();
    }
}
