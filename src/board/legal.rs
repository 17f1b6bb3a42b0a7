//! Legality filter: pseudo-legal moves minus those that leave the mover's
//! own king attacked.

use super::{is_in_check, pseudo_legal_moves, Board, Color, Move, Position, Square};

/// Legal moves of the piece on `from`, one per destination.
///
/// Promotion moves are returned without a promotion piece; the choice is made
/// when the move is applied. Empty while a promotion is pending.
#[must_use]
pub fn legal_moves(position: &Position, from: Square) -> Vec<Move> {
    legal_destinations(position, from)
        .into_iter()
        .map(|to| Move::new(from, to))
        .collect()
}

/// Every legal move of the side to move
#[must_use]
pub fn all_legal_moves(position: &Position) -> Vec<Move> {
    position
        .board
        .pieces_of(position.side_to_move)
        .flat_map(|(from, _)| legal_moves(position, from))
        .collect()
}

pub(crate) fn legal_destinations(position: &Position, from: Square) -> Vec<Square> {
    if position.pending_promotion.is_some() {
        return Vec::new();
    }
    let color = position.side_to_move;
    let mut scratch = position.board;
    pseudo_legal_moves(position, from)
        .into_iter()
        .filter(|&to| leaves_king_safe(&mut scratch, from, to, color))
        .collect()
}

/// True if the side to move has at least one legal move
pub(crate) fn has_legal_move(position: &Position) -> bool {
    position
        .board
        .pieces_of(position.side_to_move)
        .any(|(from, _)| !legal_destinations(position, from).is_empty())
}

/// Try the move on the scratch board, look at the king, take it back.
fn leaves_king_safe(scratch: &mut Board, from: Square, to: Square, color: Color) -> bool {
    let Some(info) = scratch.make_placement(from, to) else {
        return false;
    };
    let safe = !is_in_check(scratch, color);
    scratch.unmake_placement(info);
    safe
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceType, PositionBuilder};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_position_has_twenty_moves() {
        let pos = Position::new();
        let moves = all_legal_moves(&pos);
        assert_eq!(moves.len(), 20);

        let pawn_moves = moves
            .iter()
            .filter(|m| pos.piece_at(m.from).map(|p| p.kind) == Some(PieceType::Pawn))
            .count();
        assert_eq!(pawn_moves, 16);
    }

    #[test]
    fn test_pinned_piece_cannot_leave_line() {
        let pos = PositionBuilder::new()
            .piece(sq("e1"), PieceType::King, Color::White)
            .piece(sq("e2"), PieceType::Knight, Color::White)
            .piece(sq("e8"), PieceType::Rook, Color::Black)
            .piece(sq("a8"), PieceType::King, Color::Black)
            .build()
            .unwrap();
        assert!(legal_moves(&pos, sq("e2")).is_empty());
    }

    #[test]
    fn test_must_answer_check() {
        let pos = PositionBuilder::new()
            .piece(sq("e1"), PieceType::King, Color::White)
            .piece(sq("a2"), PieceType::Rook, Color::White)
            .piece(sq("e8"), PieceType::Rook, Color::Black)
            .piece(sq("h8"), PieceType::King, Color::Black)
            .build()
            .unwrap();
        // Only the interposition on e2 saves the king with the rook.
        let rook_moves = legal_moves(&pos, sq("a2"));
        assert_eq!(rook_moves, vec![Move::new(sq("a2"), sq("e2"))]);
    }

    #[test]
    fn test_en_passant_exposing_king_on_rank_is_illegal() {
        let pos = PositionBuilder::new()
            .piece(sq("a5"), PieceType::King, Color::White)
            .piece(sq("b5"), PieceType::Pawn, Color::White)
            .piece(sq("c5"), PieceType::Pawn, Color::Black)
            .piece(sq("h5"), PieceType::Rook, Color::Black)
            .piece(sq("h8"), PieceType::King, Color::Black)
            .en_passant(sq("c6"))
            .build()
            .unwrap();
        let moves = legal_moves(&pos, sq("b5"));
        assert!(!moves.contains(&Move::new(sq("b5"), sq("c6"))));
        assert!(moves.contains(&Move::new(sq("b5"), sq("b6"))));
    }

    #[test]
    fn test_scratch_board_is_untouched() {
        let pos = Position::new();
        let before = pos.clone();
        let _ = all_legal_moves(&pos);
        assert_eq!(pos, before);
    }
}
