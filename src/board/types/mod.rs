//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `PieceType`, `Color` and `Piece` - piece kinds, colors and colored pieces
//! - `Square` - checked (row, col) board coordinate
//! - `Move` - origin, destination and optional promotion choice
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::Move;
pub use piece::{Color, Piece, PieceType, PROMOTION_PIECES};
pub use square::Square;
