//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search remains modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.
//! `PositionEvaluator` is the full multi-term evaluation; `MaterialScorer` is a
//! cheap baseline used in tests and benches.

use std::fmt;

use crate::game_state::chess_types::{Color, GameStage, PieceKind, Position};
use crate::search::evaluation::{
    center_control::center_control, king_safety::king_safety, material::total_advantage,
    mobility::mobility, pawn_structure::pawn_structure, piece_location::piece_location,
    rook_structure::rook_structure,
};

/// Checkmate sentinel in millipawns.
pub const MATE_SCORE: i32 = 10_000_000;

/// Scores at least this large in magnitude depend on distance to mate.
pub const NEAR_MATE_THRESHOLD: i32 = MATE_SCORE / 2;

/// Non-king material above which the game is still in the opening.
pub const OPENING_MATERIAL: i32 = 60_000;
/// Non-king material above which the game is in the midgame.
pub const MIDGAME_MATERIAL: i32 = 28_000;

const FAVORABLE_CAPTURE_BONUS: i32 = 10;

#[inline]
pub const fn is_near_mate(score: i32) -> bool {
    score >= NEAR_MATE_THRESHOLD || score <= -NEAR_MATE_THRESHOLD
}

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, position: &Position) -> i32;
}

pub fn game_stage(position: &Position) -> GameStage {
    let material = position.non_king_material();
    if material > OPENING_MATERIAL {
        GameStage::Opening
    } else if material > MIDGAME_MATERIAL {
        GameStage::Midgame
    } else {
        GameStage::Ending
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    fn material_white_minus_black(position: &Position) -> i32 {
        position
            .all_pieces()
            .filter(|p| p.kind != PieceKind::King)
            .map(|p| match p.color {
                Color::White => p.value(),
                Color::Black => -p.value(),
            })
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, position: &Position) -> i32 {
        let white_minus_black = Self::material_white_minus_black(position);
        match position.side_to_move() {
            Color::White => white_minus_black,
            Color::Black => -white_minus_black,
        }
    }
}

/// Per-color evaluation terms, in millipawns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalTerms {
    pub mobility: i32,
    pub pawn_structure: i32,
    pub mate: i32,
    pub favorable_captures: i32,
    pub rook_structure: i32,
    pub center_control: i32,
    pub king_safety: i32,
    pub piece_location: i32,
}

impl EvalTerms {
    pub fn total(&self) -> i32 {
        self.mobility
            + self.pawn_structure
            + self.mate
            + self.favorable_captures
            + self.rook_structure
            + self.center_control
            + self.king_safety
            + self.piece_location
    }
}

impl fmt::Display for EvalTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mobility {} pawns {} mate {} captures {} rooks {} center {} king {} location {} => {}",
            self.mobility,
            self.pawn_structure,
            self.mate,
            self.favorable_captures,
            self.rook_structure,
            self.center_control,
            self.king_safety,
            self.piece_location,
            self.total()
        )
    }
}

/// The full evaluation: weighted positional terms per color plus the shared
/// material advantage, reported from the side to move.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionEvaluator;

impl PositionEvaluator {
    pub fn terms(&self, position: &Position, color: Color, stage: GameStage) -> EvalTerms {
        EvalTerms {
            mobility: mobility(position, color, stage),
            pawn_structure: pawn_structure(position, color),
            mate: mate_bonus(position, color),
            favorable_captures: favorable_captures(position, color),
            rook_structure: rook_structure(position, color),
            center_control: center_control(position, color),
            king_safety: king_safety(position, color),
            piece_location: piece_location(position, color, stage),
        }
    }

    /// White-minus-black evaluation.
    pub fn white_minus_black(&self, position: &Position) -> i32 {
        let stage = game_stage(position);
        let white = self.terms(position, Color::White, stage).total();
        let black = self.terms(position, Color::Black, stage).total();
        white - black + total_advantage(position)
    }

    /// Multi-line breakdown for debug logging.
    pub fn describe(&self, position: &Position) -> String {
        let stage = game_stage(position);
        format!(
            "stage {stage:?}\nmaterial {}\nwhite: {}\nblack: {}\nscore (side to move) {}",
            total_advantage(position),
            self.terms(position, Color::White, stage),
            self.terms(position, Color::Black, stage),
            self.score(position)
        )
    }
}

impl BoardScorer for PositionEvaluator {
    fn score(&self, position: &Position) -> i32 {
        let white_minus_black = self.white_minus_black(position);
        match position.side_to_move() {
            Color::White => white_minus_black,
            Color::Black => -white_minus_black,
        }
    }
}

/// Sentinel when `color` has checkmated its opponent.
fn mate_bonus(position: &Position, color: Color) -> i32 {
    if position.player(color.opposite()).is_checkmate() {
        MATE_SCORE
    } else {
        0
    }
}

/// Captures where the attacker is worth no more than its victim.
fn favorable_captures(position: &Position, color: Color) -> i32 {
    let count = position
        .player(color)
        .legal_moves()
        .iter()
        .filter(|mv| mv.captured().is_some_and(|victim| mv.piece.value() <= victim.value()))
        .count() as i32;
    count * FAVORABLE_CAPTURE_BONUS
}
