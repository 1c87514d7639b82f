//! Crate root module declarations for the Ironclad chess engine.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! search, engines and utility helpers) so collaborators such as a GUI or a
//! test harness can import stable module paths. The three operations a
//! front end needs are re-exported here: [`apply_move`], [`compute_move`] and
//! [`game_outcome`].

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod piece;
    pub mod position;
    pub mod position_history;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod offsets;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_transition;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod evaluation {
        pub mod center_control;
        pub mod king_safety;
        pub mod material;
        pub mod mobility;
        pub mod pawn_structure;
        pub mod piece_location;
        pub mod rook_structure;
    }
    pub mod iterative_deepening;
    pub mod move_ordering;
    pub mod transposition_table;
    pub mod zobrist;
}

pub mod tables {
    pub mod piece_square_tables;
}

pub mod engines {
    pub mod engine_iterative;
    pub mod engine_trait;
    pub mod game_session;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}

pub use engines::game_session::{compute_move, game_outcome, ChessGame};
pub use errors::ChessError;
pub use game_state::chess_types::{Color, GameOutcome, Piece, PieceKind, Position, Square};
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::move_transition::{MoveStatus, MoveTransition};
pub use moves::move_descriptions::{Move, MoveKind};
