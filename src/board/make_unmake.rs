//! Placement-only make/unmake on a `Board`.
//!
//! Used by the legality filter to try a move, ask whether the mover's king is
//! attacked, and put everything back. Only piece placement changes here;
//! rights, clocks and history belong to `Position` and are handled by the
//! move applier.

use super::{Board, CastleSide, Piece, PieceType, Square};

/// Everything needed to undo one `make_placement`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct UnmakeInfo {
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) moved: Piece,
    /// Captured piece and the square it stood on (beside `to` for en passant).
    pub(crate) captured: Option<(Square, Piece)>,
    /// Rook relocation for castling: (home square, landing square).
    pub(crate) rook_move: Option<(Square, Square)>,
}

impl UnmakeInfo {
    #[inline]
    #[must_use]
    pub(crate) fn captured(&self) -> Option<(Square, Piece)> {
        self.captured
    }
}

impl Board {
    /// Move the piece on `from` to `to`, recognising castling (king moves two
    /// columns) and en passant (pawn moves diagonally onto an empty square).
    ///
    /// Returns `None` if `from` is empty. The caller is responsible for `to`
    /// being a pseudo-legal destination.
    pub(crate) fn make_placement(&mut self, from: Square, to: Square) -> Option<UnmakeInfo> {
        let moved = self.remove_piece(from)?;
        let mut captured = self.remove_piece(to).map(|p| (to, p));
        let mut rook_move = None;

        match moved.kind {
            PieceType::Pawn if from.col() != to.col() && captured.is_none() => {
                let victim = Square::at(from.row(), to.col());
                captured = self.remove_piece(victim).map(|p| (victim, p));
            }
            PieceType::King if from.col().abs_diff(to.col()) == 2 => {
                if let Some(side) = CastleSide::from_king_target_col(to.col()) {
                    let rook_from = Square::at(from.row(), side.rook_home_col());
                    let rook_to = Square::at(from.row(), side.rook_target_col());
                    if let Some(rook) = self.remove_piece(rook_from) {
                        self.set_piece(rook_to, rook);
                        rook_move = Some((rook_from, rook_to));
                    }
                }
            }
            _ => {}
        }

        self.set_piece(to, moved);
        Some(UnmakeInfo {
            from,
            to,
            moved,
            captured,
            rook_move,
        })
    }

    /// Exact inverse of `make_placement`, including a promotion that replaced
    /// the moved piece on `to` in the meantime.
    pub(crate) fn unmake_placement(&mut self, info: UnmakeInfo) {
        self.remove_piece(info.to);
        self.set_piece(info.from, info.moved);

        if let Some((rook_from, rook_to)) = info.rook_move {
            if let Some(rook) = self.remove_piece(rook_to) {
                self.set_piece(rook_from, rook);
            }
        }
        if let Some((sq, piece)) = info.captured {
            self.set_piece(sq, piece);
        }
    }
}
