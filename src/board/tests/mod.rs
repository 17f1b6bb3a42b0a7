//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts for move generation correctness
//! - `draw.rs` - Draw detection (50-move, repetition, stalemate)
//! - `edge_cases.rs` - Special positions and moves
//! - `scripted.rs` - Whole games played through the public entry points
//! - `proptest.rs` - Property-based tests

mod draw;
mod perft;
mod proptest;

use crate::board::{Color, Move, Piece, Position, PositionBuilder, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

pub(super) fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

/// Play coordinate-notation moves, panicking on the first illegal one
pub(super) fn play(position: &Position, moves: &[&str]) -> Position {
    let mut position = position.clone();
    for m in moves {
        if let Err(err) = position.make_move(mv(m)) {
            panic!("{m} rejected: {err}\n{position}");
        }
    }
    position
}

/// Builder from an 8-row diagram, rank 8 first, `.` for empty squares.
pub(super) fn diagram(rows: [&str; 8], side_to_move: Color) -> PositionBuilder {
    let mut builder = PositionBuilder::new().side_to_move(side_to_move);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), 8, "diagram row {i} must have 8 squares");
        for (col, c) in row.chars().enumerate() {
            if let Some(piece) = Piece::from_char(c) {
                let square = Square::new(7 - i, col).unwrap();
                builder = builder.piece(square, piece.kind, piece.color);
            }
        }
    }
    builder
}
