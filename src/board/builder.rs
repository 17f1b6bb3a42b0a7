//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece, for tests, puzzles and
//! restoring a game from stored placement.
//!
//! # Example
//! ```
//! use chess_arbiter::board::{Color, PieceType, PositionBuilder, Square};
//!
//! let sq = |s: &str| s.parse::<Square>().unwrap();
//! let position = PositionBuilder::new()
//!     .piece(sq("e1"), PieceType::King, Color::White)
//!     .piece(sq("e8"), PieceType::King, Color::Black)
//!     .piece(sq("a2"), PieceType::Pawn, Color::White)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(position.board().pieces().count(), 3);
//! ```

use super::error::PositionError;
use super::history::PositionHistory;
use super::{
    is_in_check, Board, CastleSide, CastlingRights, Color, Piece, PieceType, Position, Square,
};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    board: Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty board builder, White to move, no castling rights.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        PositionBuilder {
            board: Board::starting(),
            castling_rights: CastlingRights::all(),
            ..Self::new()
        }
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, kind: PieceType, color: Color) -> Self {
        self.board.set_piece(square, Piece::new(kind, color));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.remove_piece(square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set both castling rights of one color.
    #[must_use]
    pub fn castling(mut self, color: Color, kingside: bool, queenside: bool) -> Self {
        for (side, allowed) in [
            (CastleSide::KingSide, kingside),
            (CastleSide::QueenSide, queenside),
        ] {
            if allowed {
                self.castling_rights.set(color, side);
            } else {
                self.castling_rights.remove(color, side);
            }
        }
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, square: Square) -> Self {
        self.en_passant_target = Some(square);
        self
    }

    /// Set the halfmove clock.
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Set the fullmove number.
    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build the position, checking the placement invariants.
    pub fn build(self) -> Result<Position, PositionError> {
        let position = Position {
            board: self.board,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number.max(1),
            pending_promotion: None,
            history: PositionHistory::new(),
        };
        position.validate()?;
        Ok(position)
    }
}

impl Position {
    /// Check placement invariants: at most one king per color, no pawns on
    /// the first or last rank, and an en passant target (if any) on an empty
    /// square of row 2 or row 5.
    ///
    /// The side not on move must not be in check. A pending promotion must
    /// name a pawn of the side to move standing on its last rank; while one
    /// is pending the opponent may be in check, since the turn has not
    /// passed yet.
    ///
    /// Hosts should call this on any position restored from storage.
    pub fn validate(&self) -> Result<(), PositionError> {
        for color in Color::BOTH {
            let count = self
                .board
                .pieces_of(color)
                .filter(|(_, p)| p.kind == PieceType::King)
                .count();
            if count > 1 {
                return Err(PositionError::TooManyKings { color, count });
            }
        }

        let back_rank_pawn = self.board.pieces().find(|&(sq, p)| {
            p.kind == PieceType::Pawn
                && (sq.row() == 0 || sq.row() == 7)
                && self.pending_promotion.as_ref().map(|pp| pp.square) != Some(sq)
        });
        if let Some((square, _)) = back_rank_pawn {
            return Err(PositionError::PawnOnBackRank { square });
        }

        if let Some(square) = self.en_passant_target {
            if !matches!(square.row(), 2 | 5) || !self.board.is_empty(square) {
                return Err(PositionError::InvalidEnPassant { square });
            }
        }

        match &self.pending_promotion {
            Some(pending) => {
                let square = pending.square;
                let pawn = Piece::new(PieceType::Pawn, pending.color);
                if self.board.piece_at(square) != Some(pawn) {
                    return Err(PositionError::PromotionWithoutPawn { square });
                }
                if square.row() != pending.color.pawn_promotion_rank() {
                    return Err(PositionError::PromotionOffRank { square });
                }
                if pending.color != self.side_to_move {
                    return Err(PositionError::PromotionOutOfTurn {
                        color: pending.color,
                    });
                }
            }
            None => {
                let waiting = self.side_to_move.opponent();
                if is_in_check(&self.board, waiting) {
                    return Err(PositionError::OpponentInCheck { color: waiting });
                }
            }
        }
        Ok(())
    }
}
