//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_arbiter::board::prelude::*;
//!
//! let position = new_game();
//! assert_eq!(evaluate(&position, position.history()), GameStatus::Ongoing);
//! ```

pub use super::{
    apply_move, evaluate, legal_moves, new_game, resolve_promotion, Color, GameStatus,
    IllegalMoveError, Move, Piece, PieceType, Position, PositionBuilder, PositionHistory, Square,
};
