//! Move applier: commits a legal move and all of its bookkeeping.
//!
//! Every operation validates completely before touching the position, so a
//! rejected move leaves the position exactly as it was.

use log::debug;

use super::error::IllegalMoveError;
use super::history::PositionSnapshot;
use super::legal::legal_destinations;
use super::state::PendingPromotion;
use super::{CastleSide, Color, Move, Piece, PieceType, Position, Square};

/// Apply `mv` to a copy of `position`.
///
/// A pawn landing on the far rank without a promotion choice leaves the
/// returned position waiting in [`Position::pending_promotion`].
pub fn apply_move(position: &Position, mv: Move) -> Result<Position, IllegalMoveError> {
    let mut next = position.clone();
    next.make_move(mv)?;
    Ok(next)
}

/// Finish a pending promotion on a copy of `position`.
pub fn resolve_promotion(
    position: &Position,
    piece: PieceType,
) -> Result<Position, IllegalMoveError> {
    let mut next = position.clone();
    next.promote(piece)?;
    Ok(next)
}

impl Position {
    /// Check `mv` against the legal moves of its origin square.
    pub fn validate_move(&self, mv: Move) -> Result<(), IllegalMoveError> {
        if let Some(pending) = &self.pending_promotion {
            return Err(IllegalMoveError::PromotionPending {
                square: pending.square,
            });
        }
        let piece = self
            .board
            .piece_at(mv.from)
            .ok_or(IllegalMoveError::EmptySquare { square: mv.from })?;
        if piece.color != self.side_to_move {
            return Err(IllegalMoveError::WrongTurn {
                square: mv.from,
                side_to_move: self.side_to_move,
            });
        }
        if !legal_destinations(self, mv.from).contains(&mv.to) {
            return Err(IllegalMoveError::Unreachable { mv });
        }
        if let Some(choice) = mv.promotion {
            if !is_promoting(piece, mv.to) {
                return Err(IllegalMoveError::UnexpectedPromotion { mv });
            }
            if !choice.is_promotion_choice() {
                return Err(IllegalMoveError::InvalidPromotionPiece { piece: choice });
            }
        }
        Ok(())
    }

    /// Apply `mv` in place. On error nothing changes.
    pub fn make_move(&mut self, mv: Move) -> Result<(), IllegalMoveError> {
        self.validate_move(mv)?;

        let color = self.side_to_move;
        let pre_move = self.snapshot();
        let Some(info) = self.board.make_placement(mv.from, mv.to) else {
            return Err(IllegalMoveError::EmptySquare { square: mv.from });
        };
        let moved = info.moved;

        self.update_castling_rights(moved, mv.from, info.captured());

        self.en_passant_target = None;
        if moved.kind == PieceType::Pawn && mv.from.row().abs_diff(mv.to.row()) == 2 {
            let mid_row = (mv.from.row() + mv.to.row()) / 2;
            self.en_passant_target = Some(Square::at(mid_row, mv.from.col()));
        }

        if moved.kind == PieceType::Pawn || info.captured().is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        if is_promoting(moved, mv.to) {
            self.pending_promotion = Some(PendingPromotion {
                square: mv.to,
                color,
                pre_move,
            });
            match mv.promotion {
                Some(choice) => self.promote(choice)?,
                None => debug!("{color} pawn on {} awaiting promotion choice", mv.to),
            }
            return Ok(());
        }

        self.finish_move(pre_move);
        Ok(())
    }

    /// Replace the waiting pawn with `piece` and hand the move to the opponent.
    pub fn promote(&mut self, piece: PieceType) -> Result<(), IllegalMoveError> {
        let Some(pending) = &self.pending_promotion else {
            return Err(IllegalMoveError::NoPromotionPending);
        };
        if !piece.is_promotion_choice() {
            return Err(IllegalMoveError::InvalidPromotionPiece { piece });
        }
        self.board.set_piece(pending.square, Piece::new(piece, pending.color));

        if let Some(pending) = self.pending_promotion.take() {
            self.finish_move(pending.pre_move);
        }
        Ok(())
    }

    fn finish_move(&mut self, pre_move: PositionSnapshot) {
        self.history.push(pre_move);
        if self.side_to_move == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Rights are cleared, never restored: a king move drops both, a rook
    /// leaving or being captured on its home square drops that wing.
    fn update_castling_rights(
        &mut self,
        moved: Piece,
        from: Square,
        captured: Option<(Square, Piece)>,
    ) {
        match moved.kind {
            PieceType::King => self.castling_rights.remove_all(moved.color),
            PieceType::Rook => self.clear_rook_right(moved.color, from),
            _ => {}
        }
        if let Some((sq, piece)) = captured {
            if piece.kind == PieceType::Rook {
                self.clear_rook_right(piece.color, sq);
            }
        }
    }

    fn clear_rook_right(&mut self, color: Color, sq: Square) {
        if sq.row() != color.back_rank() {
            return;
        }
        if let Some(side) = CastleSide::from_rook_col(sq.col()) {
            self.castling_rights.remove(color, side);
        }
    }
}

fn is_promoting(piece: Piece, to: Square) -> bool {
    piece.kind == PieceType::Pawn && to.row() == piece.color.pawn_promotion_rank()
}
