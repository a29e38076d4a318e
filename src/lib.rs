//! Crate root module declarations for the Plum rules engine.
//!
//! Exposes the board model, per-piece move generation, the legality filter
//! and transition function, and the notation/FEN/log utilities so binaries,
//! tests, and embedding applications can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod raw_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_filter;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod move_log;
    pub mod notation;
    pub mod random_playout;
    pub mod render_game_state;
}
