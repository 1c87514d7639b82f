//! Outcome record of an attempted move.

use crate::game_state::chess_types::{Position, Square};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    Done,
    RejectedIllegal,
    RejectedLeavesKingInCheck,
}

impl MoveStatus {
    #[inline]
    pub const fn is_done(self) -> bool {
        matches!(self, MoveStatus::Done)
    }
}

#[derive(Debug, Clone)]
pub struct MoveTransition {
    pub origin: Position,
    /// The resulting position, or a copy of `origin` when rejected.
    pub destination: Position,
    pub attempted: Option<Move>,
    pub from: Square,
    pub to: Square,
    pub status: MoveStatus,
}

impl MoveTransition {
    pub(crate) fn done(origin: &Position, mv: Move) -> Self {
        Self {
            origin: origin.clone(),
            destination: mv.execute(origin),
            attempted: Some(mv),
            from: mv.from(),
            to: mv.to,
            status: MoveStatus::Done,
        }
    }

    pub(crate) fn rejected(
        origin: &Position,
        attempted: Option<Move>,
        from: Square,
        to: Square,
        status: MoveStatus,
    ) -> Self {
        Self {
            origin: origin.clone(),
            destination: origin.clone(),
            attempted,
            from,
            to,
            status,
        }
    }
}
