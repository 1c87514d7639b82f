//! Move execution and the validated `apply_move` entry point.
//!
//! Every move variant funnels into one rebuild routine: copy the origin square
//! map, clear the squares the variant vacates, then occupy the destination
//! (and the rook square when castling). The origin `Position` is never touched.

use crate::game_state::chess_types::{Piece, PieceKind, Position, Square};
use crate::game_state::position_history::PositionHistory;
use crate::move_generation::legal_move_generator::unguarded_castling_moves;
use crate::move_generation::move_transition::{MoveStatus, MoveTransition};
use crate::moves::move_descriptions::{Move, MoveKind};

impl Move {
    /// Derive the position this move produces from `origin`.
    pub fn execute(&self, origin: &Position) -> Position {
        let mut squares = *origin.squares();
        let mover = self.piece.color;

        squares[usize::from(self.piece.square)] = None;
        if let Some(captured) = self.captured() {
            squares[usize::from(captured.square)] = None;
        }

        let landing = if self.is_promotion() {
            Piece::new(PieceKind::Queen, mover, self.to).with_first_move(false)
        } else {
            self.piece.moved_to(self.to)
        };
        squares[usize::from(self.to)] = Some(landing);

        let mut castled = origin.castled_flags();
        if let Some((rook, rook_to)) = self.castling_rook() {
            squares[usize::from(rook.square)] = None;
            squares[usize::from(rook_to)] = Some(rook.moved_to(rook_to));
            castled[mover.index()] = true;
        }

        let (moves_without_capture, history) = if self.is_irreversible() {
            (0, PositionHistory::new())
        } else {
            (
                origin.moves_without_capture().saturating_add(1),
                origin.history().with_pushed(origin.placement_key()),
            )
        };

        Position::assemble(
            squares,
            mover.opposite(),
            moves_without_capture,
            Some(*self),
            castled,
            history,
        )
    }

    #[inline]
    fn castling_rook(&self) -> Option<(Piece, Square)> {
        match self.kind {
            MoveKind::CastleKingSide { rook, rook_to } | MoveKind::CastleQueenSide { rook, rook_to } => {
                Some((rook, rook_to))
            }
            _ => None,
        }
    }
}

/// Attempt the move `from -> to` for the side to move.
///
/// A legal match is executed (`Done`). A pseudo-legal match that would leave the
/// mover's king attacked is `RejectedLeavesKingInCheck`, as is a castle out of
/// check or across an attacked square; anything else is `RejectedIllegal`.
/// Rejections carry the origin as destination.
pub fn apply_move(position: &Position, from: Square, to: Square) -> MoveTransition {
    let player = position.current_player();
    if let Some(mv) = player.find_legal_move(from, to) {
        return MoveTransition::done(position, mv);
    }

    let color = position.side_to_move();
    let mut candidates = position.pseudo_legal_moves(color);
    candidates.extend(unguarded_castling_moves(position, position.king(color)));
    let attempted = candidates
        .into_iter()
        .filter(|mv| !captures_king(mv))
        .find(|mv| mv.from() == from && mv.to == to);

    let status = match attempted {
        Some(_) => MoveStatus::RejectedLeavesKingInCheck,
        None => MoveStatus::RejectedIllegal,
    };
    MoveTransition::rejected(position, attempted, from, to, status)
}

#[inline]
fn captures_king(mv: &Move) -> bool {
    mv.captured().is_some_and(|piece| piece.kind == PieceKind::King)
}

/// Execute `mv` if it is legal for the side to move.
pub fn apply_checked(position: &Position, mv: &Move) -> MoveTransition {
    if position.current_player().legal_moves().contains(mv) {
        MoveTransition::done(position, *mv)
    } else {
        apply_move(position, mv.from(), mv.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("square name should parse")
    }

    fn play(position: &Position, from: &str, to: &str) -> Position {
        let transition = apply_move(position, sq(from), sq(to));
        assert_eq!(transition.status, MoveStatus::Done, "{from}{to} should be legal");
        transition.destination
    }

    #[test]
    fn execute_leaves_origin_untouched() {
        let start = Position::new_game();
        let after = play(&start, "e2", "e4");
        assert!(start.piece_at(sq("e2")).is_some());
        assert!(start.piece_at(sq("e4")).is_none());
        assert!(after.piece_at(sq("e2")).is_none());
        let pawn = after.piece_at(sq("e4")).expect("pawn moved to e4");
        assert!(!pawn.first_move);
        assert_eq!(after.side_to_move(), Color::Black);
        assert_eq!(after.en_passant_target(), Some(sq("e3")));
    }

    #[test]
    fn piece_count_drops_by_one_on_capture() {
        let position = Position::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 5 10").expect("FEN should parse");
        let before = position.all_pieces().count();
        let after = play(&position, "e4", "d5");
        assert_eq!(after.all_pieces().count(), before - 1);
        assert_eq!(after.moves_without_capture(), 0);
        assert!(after.history().is_empty());
    }

    #[test]
    fn quiet_move_increments_counter_and_records_history() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 7 10").expect("FEN should parse");
        let after = play(&position, "a1", "a5");
        assert_eq!(after.moves_without_capture(), 8);
        assert_eq!(after.history().len(), 1);
        assert_eq!(after.history().occurrences(position.placement_key()), 1);
    }

    #[test]
    fn castling_relocates_rook() {
        let position =
            Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let king_side = play(&position, "e1", "g1");
        assert_eq!(king_side.piece_at(sq("f1")).map(|p| p.kind), Some(PieceKind::Rook));
        assert!(king_side.piece_at(sq("h1")).is_none());
        assert!(king_side.has_castled(Color::White));

        let queen_side = play(&king_side, "e8", "c8");
        assert_eq!(queen_side.piece_at(sq("d8")).map(|p| p.kind), Some(PieceKind::Rook));
        assert!(queen_side.piece_at(sq("a8")).is_none());
        assert!(queen_side.has_castled(Color::Black));
    }

    #[test]
    fn promotion_substitutes_queen() {
        let position = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let after = play(&position, "a7", "a8");
        let queen = after.piece_at(sq("a8")).expect("promoted piece");
        assert_eq!(queen.kind, PieceKind::Queen);
        assert_eq!(queen.color, Color::White);
    }

    #[test]
    fn en_passant_removes_passed_pawn() {
        let start = Position::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        let pushed = play(&start, "d7", "d5");
        let taken = play(&pushed, "e5", "d6");
        assert!(taken.piece_at(sq("d5")).is_none());
        assert_eq!(taken.pieces(Color::Black).len(), 1);
    }

    #[test]
    fn en_passant_expires_after_one_ply() {
        let start = Position::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        let pushed = play(&start, "d7", "d5");
        let waited = play(&pushed, "e1", "f1");
        let back = play(&waited, "e8", "f8");
        let attempt = apply_move(&back, sq("e5"), sq("d6"));
        assert_eq!(attempt.status, MoveStatus::RejectedIllegal);
    }

    #[test]
    fn pinned_piece_move_is_rejected_for_king_safety() {
        // The e2 knight is pinned by the e8 rook.
        let position = Position::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        let attempt = apply_move(&position, sq("e2"), sq("c3"));
        assert_eq!(attempt.status, MoveStatus::RejectedLeavesKingInCheck);
        assert_eq!(attempt.destination, position);
        let nonsense = apply_move(&position, sq("e2"), sq("e5"));
        assert_eq!(nonsense.status, MoveStatus::RejectedIllegal);
        assert!(nonsense.attempted.is_none());
    }

    #[test]
    fn castle_across_attacked_square_is_rejected_for_king_safety() {
        // The f8 rook covers f1; the queen side stays open.
        let covered = Position::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        let attempt = apply_move(&covered, sq("e1"), sq("g1"));
        assert_eq!(attempt.status, MoveStatus::RejectedLeavesKingInCheck);
        assert!(attempt.attempted.is_some_and(|mv| mv.is_castle()));
        assert_eq!(attempt.destination, covered);
        play(&covered, "e1", "c1");

        let in_check = Position::from_fen("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        assert_eq!(
            apply_move(&in_check, sq("e1"), sq("g1")).status,
            MoveStatus::RejectedLeavesKingInCheck
        );

        let no_rights = Position::from_fen("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").expect("FEN should parse");
        assert_eq!(apply_move(&no_rights, sq("e1"), sq("g1")).status, MoveStatus::RejectedIllegal);
    }

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    fn assert_children_consistent(parent: &Position) {
        let before = parent.all_pieces().count();
        for mv in parent.current_player().legal_moves() {
            let child = mv.execute(parent);
            let expected = before - usize::from(mv.captured().is_some());
            assert_eq!(child.all_pieces().count(), expected, "piece count after {mv}");

            let occupied = child.squares().iter().flatten().count();
            assert_eq!(occupied, expected, "square map disagrees with piece lists after {mv}");
            for piece in child.all_pieces() {
                assert_eq!(child.piece_at(piece.square), Some(*piece), "ghost piece after {mv}");
            }

            let origin = child.piece_at(mv.from());
            match mv.kind {
                MoveKind::CastleKingSide { rook_to, .. } | MoveKind::CastleQueenSide { rook_to, .. }
                    if rook_to == mv.from() =>
                {
                    assert_eq!(origin.map(|p| p.kind), Some(PieceKind::Rook));
                }
                _ => assert!(origin.is_none(), "origin square still occupied after {mv}"),
            }

            for reply in child.current_player().legal_moves() {
                assert_eq!(
                    child.piece_at(reply.from()),
                    Some(reply.piece),
                    "reply {reply} after {mv} starts from a square without its piece"
                );
            }
        }
    }

    #[test]
    fn every_child_of_kiwipete_keeps_the_board_consistent() {
        assert_children_consistent(&Position::from_fen(KIWIPETE).expect("FEN should parse"));
    }

    #[test]
    fn every_child_of_endgame_position_keeps_the_board_consistent() {
        assert_children_consistent(&Position::from_fen(POSITION_3).expect("FEN should parse"));
    }
}
