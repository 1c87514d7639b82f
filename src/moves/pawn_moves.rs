//! Pawn pushes, double pushes, diagonal captures, en passant and promotion.

use crate::game_state::chess_types::{row_of, Piece, PieceKind, Position};
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::moves::offsets::{pawn_capture_offsets, pawn_push_offset, step};

pub fn generate_pawn_moves(pawn: &Piece, position: &Position, out: &mut Vec<Move>) {
    let color = pawn.color;
    let promotion_row = color.promotion_row();
    let push = pawn_push_offset(color);

    if let Some(single) = step(pawn.square, push) {
        if position.is_empty(single) {
            if row_of(single) == promotion_row {
                out.push(Move::new(*pawn, single, MoveKind::PawnPromotion { captured: None }));
            } else {
                out.push(Move::new(*pawn, single, MoveKind::PawnQuiet));
                if pawn.first_move {
                    if let Some(double) = step(single, push) {
                        if position.is_empty(double) {
                            out.push(Move::new(*pawn, double, MoveKind::PawnDoublePush));
                        }
                    }
                }
            }
        }
    }

    let en_passant = position.en_passant_target();
    for offset in pawn_capture_offsets(color) {
        let Some(target) = step(pawn.square, offset) else {
            continue;
        };
        match position.piece_at(target) {
            Some(victim) if victim.color != color => {
                let kind = if row_of(target) == promotion_row {
                    MoveKind::PawnPromotion { captured: Some(victim) }
                } else {
                    MoveKind::PawnCapture { captured: victim }
                };
                out.push(Move::new(*pawn, target, kind));
            }
            None if en_passant == Some(target) => {
                if let Some(victim) = en_passant_victim(position, pawn) {
                    out.push(Move::new(*pawn, target, MoveKind::EnPassantCapture { captured: victim }));
                }
            }
            _ => {}
        }
    }
}

/// The enemy pawn that just double-pushed past `pawn`, if it stands beside it.
fn en_passant_victim(position: &Position, pawn: &Piece) -> Option<Piece> {
    let last = position.last_move()?;
    let victim = position.piece_at(last.to)?;
    let beside = row_of(victim.square) == row_of(pawn.square);
    (victim.kind == PieceKind::Pawn && victim.color != pawn.color && beside).then_some(victim)
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::Position;
    use crate::moves::move_descriptions::MoveKind;

    #[test]
    fn starting_pawn_has_single_and_double_push() {
        let position = Position::new_game();
        let e2 = position.piece_at(52).expect("pawn on e2");
        let moves = e2.pseudo_legal_moves(&position);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|mv| mv.to == 44 && mv.kind == MoveKind::PawnQuiet));
        assert!(moves.iter().any(|mv| mv.to == 36 && mv.kind == MoveKind::PawnDoublePush));
    }

    #[test]
    fn blocked_pawn_cannot_double_push() {
        let position =
            Position::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").expect("FEN should parse");
        let e2 = position.piece_at(52).expect("pawn on e2");
        assert!(e2.pseudo_legal_moves(&position).is_empty());
    }

    #[test]
    fn a_file_pawn_captures_only_inward() {
        // Black knights on b3 and h4 (where a2 would wrap to).
        let position =
            Position::from_fen("4k3/8/8/8/7n/1n6/P7/4K3 w - - 0 1").expect("FEN should parse");
        let a2 = position.piece_at(48).expect("pawn on a2");
        let captures: Vec<_> = a2
            .pseudo_legal_moves(&position)
            .into_iter()
            .filter(|mv| mv.is_capture())
            .map(|mv| mv.to)
            .collect();
        assert_eq!(captures, vec![41]);
    }

    #[test]
    fn pawn_reaching_last_rank_promotes() {
        let position =
            Position::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let a7 = position.piece_at(8).expect("pawn on a7");
        let moves = a7.pseudo_legal_moves(&position);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|mv| mv.is_promotion()));
        assert!(moves.iter().any(|mv| mv.to == 1 && mv.is_capture()));
    }

    #[test]
    fn en_passant_follows_double_push() {
        let position = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").expect("FEN should parse");
        let e5 = position.piece_at(28).expect("pawn on e5");
        let ep = e5
            .pseudo_legal_moves(&position)
            .into_iter()
            .find(|mv| matches!(mv.kind, MoveKind::EnPassantCapture { .. }))
            .expect("en passant should be available");
        assert_eq!(ep.to, 19);
        assert_eq!(ep.captured().map(|p| p.square), Some(27));
    }
}
