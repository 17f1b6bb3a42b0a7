//! Chess board representation and rules engine.
//!
//! A `Position` is a plain owned value; every rules function takes it as an
//! explicit argument. Supports full chess rules including castling, en
//! passant, promotion with a deferred piece choice, and the fifty-move and
//! threefold-repetition draws.
//!
//! # Example
//! ```
//! use chess_arbiter::board::{apply_move, legal_moves, new_game, GameStatus, Square};
//!
//! let position = new_game();
//! let e2: Square = "e2".parse().unwrap();
//! let moves = legal_moves(&position, e2);
//! assert_eq!(moves.len(), 2);
//!
//! let next = apply_move(&position, moves[1]).unwrap();
//! assert_eq!(next.status(), GameStatus::Ongoing);
//! ```

mod apply;
mod attack_tables;
mod attacks;
mod builder;
mod error;
mod history;
mod legal;
mod make_unmake;
mod movegen;
mod perft;
pub mod prelude;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use error::{IllegalMoveError, MoveParseError, PositionError, SquareError};
pub use history::{PositionHistory, PositionSnapshot};
pub use state::{new_game, Board, PendingPromotion, Position};
pub use status::{evaluate, DrawReason, GameStatus, FIFTY_MOVE_PLY_LIMIT, REPETITION_LIMIT};
pub use types::{CastleSide, CastlingRights, Color, Move, Piece, PieceType, Square, PROMOTION_PIECES};

// Public API - rules operations
pub use apply::{apply_move, resolve_promotion};
pub use attacks::{is_attacked, is_in_check};
pub use legal::{all_legal_moves, legal_moves};
pub use movegen::pseudo_legal_moves;
pub use perft::perft;
