//! Pseudo-legal move generation, one piece at a time.
//!
//! "Pseudo-legal" means the piece's movement rules are respected but the
//! mover's own king may still be left in check; the legality filter removes
//! those. King steps and castling are the exception: they already refuse
//! attacked destinations.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{DIAGONAL_DIRECTIONS, STRAIGHT_DIRECTIONS};
use super::{PieceType, Position, Square};

/// Destinations reachable by the piece on `from` under its movement rules.
///
/// Returns an empty list when `from` is empty or holds a piece of the side not
/// to move.
#[must_use]
pub fn pseudo_legal_moves(position: &Position, from: Square) -> Vec<Square> {
    let mut targets = Vec::new();
    let Some(piece) = position.board.piece_at(from) else {
        return targets;
    };
    if piece.color != position.side_to_move {
        return targets;
    }

    match piece.kind {
        PieceType::Pawn => position.generate_pawn_targets(from, piece.color, &mut targets),
        PieceType::Knight => position.generate_knight_targets(from, piece.color, &mut targets),
        PieceType::Bishop => {
            position.generate_sliding_targets(from, piece.color, &DIAGONAL_DIRECTIONS, &mut targets);
        }
        PieceType::Rook => {
            position.generate_sliding_targets(from, piece.color, &STRAIGHT_DIRECTIONS, &mut targets);
        }
        PieceType::Queen => {
            position.generate_sliding_targets(from, piece.color, &DIAGONAL_DIRECTIONS, &mut targets);
            position.generate_sliding_targets(from, piece.color, &STRAIGHT_DIRECTIONS, &mut targets);
        }
        PieceType::King => position.generate_king_targets(from, piece.color, &mut targets),
    }
    targets
}
