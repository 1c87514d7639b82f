//! Iterative deepening engine with a per-game transposition table.

use std::time::Duration;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchLimits};
use crate::game_state::chess_types::Position;
use crate::search::board_scoring::{BoardScorer, PositionEvaluator};
use crate::search::iterative_deepening::{iterative_deepening_search, SearchConfig, SearchResult};
use crate::search::transposition_table::TranspositionTable;

pub struct IterativeEngine<S: BoardScorer = PositionEvaluator> {
    config: SearchConfig,
    scorer: S,
    transposition_table: TranspositionTable,
}

impl IterativeEngine {
    pub fn new() -> Self {
        Self::with_scorer(PositionEvaluator, SearchConfig::default())
    }
}

impl Default for IterativeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BoardScorer> IterativeEngine<S> {
    pub fn with_scorer(scorer: S, config: SearchConfig) -> Self {
        Self {
            config,
            scorer,
            transposition_table: TranspositionTable::default(),
        }
    }

    /// Use a table of `size_mb` megabytes instead of the default.
    pub fn with_table_size_mb(mut self, size_mb: usize) -> Self {
        self.transposition_table = TranspositionTable::new_with_mb(size_mb);
        self
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    #[inline]
    pub fn transposition_table(&self) -> &TranspositionTable {
        &self.transposition_table
    }

    /// Drop every cached entry; called after irreversible moves.
    pub fn clear_table(&mut self) {
        self.transposition_table.clear();
    }

    fn resolve(&self, limits: &SearchLimits) -> SearchConfig {
        let mut config = self.config;
        if let Some(movetime_ms) = limits.movetime_ms {
            config.time_budget = Duration::from_millis(movetime_ms);
        }
        if let Some(depth) = limits.depth {
            config.max_depth = depth;
        }
        config
    }

    /// Full search result for `position`.
    pub fn search(&mut self, position: &Position, limits: &SearchLimits) -> SearchResult {
        // The previous ply was a capture or pawn move: cached bounds may
        // describe rights that no longer exist.
        if position.moves_without_capture() == 0 {
            self.transposition_table.clear();
        }
        let config = self.resolve(limits);
        iterative_deepening_search(position, &self.scorer, &mut self.transposition_table, config)
    }
}

impl<S: BoardScorer> Engine for IterativeEngine<S> {
    fn name(&self) -> &str {
        "Ironclad Iterative"
    }

    fn new_game(&mut self) {
        self.transposition_table.clear();
    }

    fn choose_move(&mut self, position: &Position, limits: &SearchLimits) -> EngineOutput {
        let result = self.search(position, limits);

        let mut out = EngineOutput {
            best_move: result.best_move,
            score: result.best_score,
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info depth {} score {} nodes {} time {}",
            result.reached_depth, result.best_score, result.nodes, result.elapsed_ms
        ));
        out.info_lines.push(format!(
            "info string tt probes {} hits {} stores {} skipped_mate {}",
            result.tt_stats.probes,
            result.tt_stats.hits,
            result.tt_stats.stores,
            result.tt_stats.skipped_mate
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::IterativeEngine;
    use crate::engines::engine_trait::{Engine, SearchLimits};
    use crate::game_state::chess_types::Position;
    use crate::search::board_scoring::MaterialScorer;
    use crate::search::iterative_deepening::SearchConfig;

    fn material_engine() -> IterativeEngine<MaterialScorer> {
        IterativeEngine::with_scorer(MaterialScorer, SearchConfig::default()).with_table_size_mb(1)
    }

    #[test]
    fn depth_limit_is_honored() {
        let mut engine = material_engine();
        let game = Position::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1").expect("FEN should parse");
        let limits = SearchLimits {
            movetime_ms: Some(60_000),
            depth: Some(2),
        };
        let result = engine.search(&game, &limits);
        assert_eq!(result.reached_depth, 2);
        assert_eq!(result.best_move.map(|mv| mv.to_string()), Some("d2d5".to_owned()));
    }

    #[test]
    fn choose_move_reports_info_lines() {
        let mut engine = material_engine();
        let game = Position::new_game();
        let out = engine.choose_move(&game, &SearchLimits::depth(1));
        assert!(out.best_move.is_some());
        assert_eq!(out.info_lines.len(), 2);
        assert!(out.info_lines[0].starts_with("info depth 1"));
    }

    #[test]
    fn table_is_reset_for_fresh_games_and_after_irreversible_moves() {
        let mut engine = material_engine();
        let quiet = Position::from_fen("4k3/8/8/8/8/8/3R4/4K3 w - - 3 10").expect("FEN should parse");
        engine.search(&quiet, &SearchLimits::depth(2));
        assert!(engine.transposition_table().occupied() > 0);

        engine.new_game();
        assert_eq!(engine.transposition_table().occupied(), 0);

        engine.search(&quiet, &SearchLimits::depth(2));
        let after_pawn_move =
            Position::from_fen("4k3/8/8/8/8/8/3R4/4K3 w - - 0 10").expect("FEN should parse");
        let result = engine.search(&after_pawn_move, &SearchLimits::depth(1));
        assert_eq!(result.tt_stats.hits, 0);
    }
}
