//! Error types for rules-engine operations.

use std::fmt;

use super::types::{Color, Move, PieceType, Square};

/// Error type for out-of-range coordinates and bad square notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Square index out of bounds (must be 0-63)
    IndexOutOfBounds { index: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::IndexOutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for coordinate move notation (`e2e4`, `e7e8q`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// The one error the rules engine raises for a rejected move.
///
/// Always recoverable: the position it was raised against is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalMoveError {
    /// Origin square holds no piece
    EmptySquare { square: Square },
    /// Origin piece does not belong to the side to move
    WrongTurn { square: Square, side_to_move: Color },
    /// Destination is not among the legal moves of the origin piece
    Unreachable { mv: Move },
    /// A pawn is waiting for its promotion piece; nothing else may move
    PromotionPending { square: Square },
    /// A promotion piece was supplied but no pawn is waiting for one
    NoPromotionPending,
    /// Pawns promote to knight, bishop, rook or queen only
    InvalidPromotionPiece { piece: PieceType },
    /// A promotion piece was attached to a move that does not promote
    UnexpectedPromotion { mv: Move },
}

impl fmt::Display for IllegalMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveError::EmptySquare { square } => {
                write!(f, "No piece on {square}")
            }
            IllegalMoveError::WrongTurn {
                square,
                side_to_move,
            } => {
                write!(f, "Piece on {square} cannot move: {side_to_move} to move")
            }
            IllegalMoveError::Unreachable { mv } => {
                write!(f, "Illegal move '{mv}'")
            }
            IllegalMoveError::PromotionPending { square } => {
                write!(f, "Promotion on {square} must be resolved first")
            }
            IllegalMoveError::NoPromotionPending => {
                write!(f, "No promotion is pending")
            }
            IllegalMoveError::InvalidPromotionPiece { piece } => {
                write!(f, "Cannot promote to {piece}")
            }
            IllegalMoveError::UnexpectedPromotion { mv } => {
                write!(f, "Move '{mv}' does not promote")
            }
        }
    }
}

impl std::error::Error for IllegalMoveError {}

/// Error type for positions assembled by hand or restored from storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// More than one king of a color
    TooManyKings { color: Color, count: usize },
    /// Pawn standing on the first or last rank
    PawnOnBackRank { square: Square },
    /// En passant target not on row 2/5 or not empty
    InvalidEnPassant { square: Square },
    /// The side that just moved is left in check
    OpponentInCheck { color: Color },
    /// Pending promotion square does not hold a pawn of the promoting color
    PromotionWithoutPawn { square: Square },
    /// Pending promotion square is not on the promoting color's last rank
    PromotionOffRank { square: Square },
    /// Pending promotion belongs to the side not on move
    PromotionOutOfTurn { color: Color },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::TooManyKings { color, count } => {
                write!(f, "{color} has {count} kings, at most one allowed")
            }
            PositionError::PawnOnBackRank { square } => {
                write!(f, "Pawn on back rank square {square}")
            }
            PositionError::InvalidEnPassant { square } => {
                write!(f, "Invalid en passant target {square}")
            }
            PositionError::OpponentInCheck { color } => {
                write!(f, "{color} is in check but not on move")
            }
            PositionError::PromotionWithoutPawn { square } => {
                write!(f, "No promoting pawn on {square}")
            }
            PositionError::PromotionOffRank { square } => {
                write!(f, "Promotion square {square} is not on the last rank")
            }
            PositionError::PromotionOutOfTurn { color } => {
                write!(f, "Promotion pending for {color}, who is not on move")
            }
        }
    }
}

impl std::error::Error for PositionError {}
