//! Iterative deepening search with negamax alpha-beta pruning.
//!
//! Depths 1, 2, 3, ... are searched until the time budget runs out; only the
//! last depth that finished is trusted. Leaves are resolved by a capture-only
//! quiescence search, and the per-game transposition table is consulted and
//! filled at every interior node.

use std::time::{Duration, Instant};

use crate::game_state::chess_types::Position;
use crate::move_generation::legal_move_generator::Player;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::{is_near_mate, BoardScorer, MATE_SCORE};
use crate::search::move_ordering::{order_moves, ordered_legal_moves};
use crate::search::transposition_table::{Bound, TTEntry, TTStats, TranspositionTable};

/// Wider than any reachable score, mates included.
const INFINITY: i32 = MATE_SCORE + 1_000;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub time_budget: Duration,
    pub max_depth: u8,
    /// Bypass switch for the transposition table.
    pub use_transposition_table: bool,
    /// Extra capture plies searched past the horizon.
    pub quiescence_depth_limit: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_budget: Duration::from_millis(1_000),
            max_depth: 64,
            use_transposition_table: true,
            quiescence_depth_limit: 6,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub reached_depth: u8,
    pub nodes: u64,
    pub elapsed_ms: u64,
    pub tt_stats: TTStats,
}

struct SearchContext<'a, S: BoardScorer + ?Sized> {
    scorer: &'a S,
    tt: &'a mut TranspositionTable,
    config: SearchConfig,
    deadline: Instant,
    nodes: u64,
}

impl<S: BoardScorer + ?Sized> SearchContext<'_, S> {
    #[inline]
    fn out_of_time(&self) -> bool {
        Instant::now() >= self.deadline
    }
}

/// Search `position` within `config.time_budget`.
///
/// Returns a move whenever the side to move has one, even if no depth
/// completed in time.
pub fn iterative_deepening_search<S: BoardScorer + ?Sized>(
    position: &Position,
    scorer: &S,
    tt: &mut TranspositionTable,
    config: SearchConfig,
) -> SearchResult {
    let started = Instant::now();
    let mut root_moves = ordered_legal_moves(position, None);
    let mut result = SearchResult {
        best_move: root_moves.first().copied(),
        ..SearchResult::default()
    };

    if root_moves.is_empty() {
        result.best_score = terminal_score(position.current_player(), 0);
        return finish(result, started, tt);
    }

    if let Some(mate) = root_moves
        .iter()
        .find(|mv| mv.execute(position).current_player().is_checkmate())
    {
        result.best_move = Some(*mate);
        result.best_score = MATE_SCORE - 1;
        result.reached_depth = 1;
        result.nodes = root_moves.len() as u64;
        log::debug!("immediate mate {mate}");
        return finish(result, started, tt);
    }

    if config.max_depth == 0 {
        result.best_score = scorer.score(position);
        result.nodes = 1;
        return finish(result, started, tt);
    }

    let mut ctx = SearchContext {
        scorer,
        tt,
        config,
        deadline: started + config.time_budget,
        nodes: 0,
    };

    for depth in 1..=config.max_depth {
        if ctx.out_of_time() {
            break;
        }
        if config.use_transposition_table {
            ctx.tt.new_generation();
        }
        order_moves(position, &mut root_moves, result.best_move);

        let Some((best_move, best_score)) = negamax_root(&mut ctx, position, &root_moves, depth)
        else {
            log::trace!("depth {depth} aborted after {} nodes", ctx.nodes);
            break;
        };

        result.best_move = Some(best_move);
        result.best_score = best_score;
        result.reached_depth = depth;
        result.nodes = ctx.nodes;
        log::debug!(
            "depth {depth} score {best_score} best {best_move} nodes {} elapsed {}ms",
            ctx.nodes,
            started.elapsed().as_millis()
        );

        if is_near_mate(best_score) {
            break;
        }
    }

    result.nodes = ctx.nodes;
    finish(result, started, ctx.tt)
}

fn finish(mut result: SearchResult, started: Instant, tt: &TranspositionTable) -> SearchResult {
    result.elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    result.tt_stats = tt.stats();
    log::info!(
        "search done: depth {} score {} best {} nodes {} in {}ms",
        result.reached_depth,
        result.best_score,
        result
            .best_move
            .map_or_else(|| "none".to_owned(), |mv| mv.to_string()),
        result.nodes,
        result.elapsed_ms
    );
    result
}

fn negamax_root<S: BoardScorer + ?Sized>(
    ctx: &mut SearchContext<'_, S>,
    position: &Position,
    moves: &[Move],
    depth: u8,
) -> Option<(Move, i32)> {
    let mut alpha = -INFINITY;
    let beta = INFINITY;
    let mut best: Option<(Move, i32)> = None;

    for mv in moves {
        let child = mv.execute(position);
        let score = -negamax(ctx, &child, depth - 1, -beta, -alpha, 1)?;
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((*mv, score));
        }
        alpha = alpha.max(score);
    }

    if let Some((mv, score)) = best {
        if ctx.config.use_transposition_table {
            ctx.tt.store(TTEntry {
                key: position.fingerprint(),
                depth,
                score,
                bound: Bound::Exact,
                best_move: Some(mv),
            });
        }
    }
    best
}

/// Score of `position` for its side to move; `None` when the deadline passed.
fn negamax<S: BoardScorer + ?Sized>(
    ctx: &mut SearchContext<'_, S>,
    position: &Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    ply: u8,
) -> Option<i32> {
    if ctx.out_of_time() {
        return None;
    }
    ctx.nodes += 1;

    if position.is_rule_draw() {
        return Some(0);
    }
    let player = position.current_player();
    if !player.has_legal_moves() {
        return Some(terminal_score(player, ply));
    }

    let alpha_orig = alpha;
    let key = position.fingerprint();
    let mut hash_move = None;
    if ctx.config.use_transposition_table {
        if let Some(entry) = ctx.tt.probe(key) {
            hash_move = entry.best_move;
            if entry.depth >= depth {
                match entry.bound {
                    Bound::Exact => return Some(entry.score),
                    Bound::Lower => alpha = alpha.max(entry.score),
                    Bound::Upper => beta = beta.min(entry.score),
                }
                if alpha >= beta {
                    return Some(entry.score);
                }
            }
        }
    }

    if depth == 0 {
        return quiescence(ctx, position, alpha, beta, ply, 0);
    }

    let mut moves = player.legal_moves().to_vec();
    order_moves(position, &mut moves, hash_move);

    let mut best = -INFINITY;
    let mut best_move = None;
    for mv in moves {
        let child = mv.execute(position);
        let score = -negamax(ctx, &child, depth - 1, -beta, -alpha, ply.saturating_add(1))?;
        if score > best {
            best = score;
            best_move = Some(mv);
        }
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }

    if ctx.config.use_transposition_table {
        let bound = if best <= alpha_orig {
            Bound::Upper
        } else if best >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        ctx.tt.store(TTEntry {
            key,
            depth,
            score: best,
            bound,
            best_move,
        });
    }

    Some(best)
}

/// Captures and promotions only, with the static score as a floor.
fn quiescence<S: BoardScorer + ?Sized>(
    ctx: &mut SearchContext<'_, S>,
    position: &Position,
    mut alpha: i32,
    beta: i32,
    ply: u8,
    qdepth: u8,
) -> Option<i32> {
    if ctx.out_of_time() {
        return None;
    }
    ctx.nodes += 1;

    let player = position.current_player();
    if !player.has_legal_moves() {
        return Some(terminal_score(player, ply));
    }

    let stand_pat = ctx.scorer.score(position);
    if stand_pat >= beta || qdepth >= ctx.config.quiescence_depth_limit {
        return Some(stand_pat);
    }
    alpha = alpha.max(stand_pat);

    let mut tactical: Vec<Move> = player
        .legal_moves()
        .iter()
        .filter(|mv| mv.is_capture() || mv.is_promotion())
        .copied()
        .collect();
    order_moves(position, &mut tactical, None);

    let mut best = stand_pat;
    for mv in tactical {
        let child = mv.execute(position);
        let score = -quiescence(
            ctx,
            &child,
            -beta,
            -alpha,
            ply.saturating_add(1),
            qdepth + 1,
        )?;
        best = best.max(score);
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }

    Some(best)
}

/// Checkmate (closer is worse for the mated side) or stalemate.
fn terminal_score(player: &Player, ply: u8) -> i32 {
    if player.is_in_check() {
        -MATE_SCORE + i32::from(ply)
    } else {
        0
    }
}
