//! Perft node counting for move-generator verification.

use std::thread;

use crate::game_state::chess_types::Position;
use crate::moves::move_descriptions::{Move, MoveKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn record_leaf(&mut self, mv: &Move, after: &Position) {
        self.nodes += 1;
        if mv.is_capture() {
            self.captures += 1;
        }
        if matches!(mv.kind, MoveKind::EnPassantCapture { .. }) {
            self.en_passant += 1;
        }
        if mv.is_castle() {
            self.castles += 1;
        }
        if mv.is_promotion() {
            self.promotions += 1;
        }
        let defender = after.current_player();
        if defender.is_in_check() {
            self.checks += 1;
            if !defender.has_legal_moves() {
                self.checkmates += 1;
            }
        }
    }
}

/// Count leaf nodes only; cheaper than [`perft`] since leaves are not inspected.
pub fn perft_nodes(position: &Position, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }
    let moves = position.current_player().legal_moves();
    if depth == 1 {
        return moves.len();
    }
    moves
        .iter()
        .map(|mv| perft_nodes(&mv.execute(position), depth - 1))
        .sum()
}

pub fn perft(position: &Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in position.current_player().legal_moves() {
        perft_recurse(position, mv, depth, 1, &mut total);
    }
    total
}

/// Split the root moves over scoped worker threads.
pub fn perft_multi_threaded(position: &Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return perft(position, depth);
    }

    let root_moves = position.current_player().legal_moves();
    let mut total = PerftCounts::default();
    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|mv| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    perft_recurse(position, mv, depth, 1, &mut local);
                    local
                })
            })
            .collect();
        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
    });
    total
}

/// Leaf count per root move, in long algebraic notation.
pub fn perft_divide(position: &Position, depth: u8) -> Vec<(String, usize)> {
    position
        .current_player()
        .legal_moves()
        .iter()
        .map(|mv| {
            let child = mv.execute(position);
            (mv.to_string(), perft_nodes(&child, depth.saturating_sub(1)))
        })
        .collect()
}

fn perft_recurse(
    parent: &Position,
    mv: &Move,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    let after = mv.execute(parent);
    if current_depth == search_depth {
        counts.record_leaf(mv, &after);
        return;
    }

    for child in after.current_player().legal_moves() {
        perft_recurse(&after, child, search_depth, current_depth + 1, counts);
    }
}
