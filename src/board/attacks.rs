//! "Is this square under attack" queries.
//!
//! Attacks are computed in reverse: starting from the target square, look for
//! an attacker of the right kind at each place one could stand. King
//! adjacency comes straight from the reach table, never from king move
//! generation, so attack detection and king move generation do not recurse
//! into each other.

use super::attack_tables::{
    squares_in, DIAGONAL_DIRECTIONS, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS,
    STRAIGHT_DIRECTIONS,
};
use super::{Board, Color, Piece, PieceType, Square};

/// True if any `by` piece on `board` reaches `square`.
///
/// Pawns attack their two forward diagonals whether or not the target is
/// occupied.
#[must_use]
pub fn is_attacked(board: &Board, square: Square, by: Color) -> bool {
    let target = square.index();

    let pawn = Piece::new(PieceType::Pawn, by);
    // A `by` pawn attacks `square` from exactly the squares an opposing pawn
    // on `square` would attack.
    if squares_in(PAWN_ATTACKS[by.opponent().index()][target])
        .any(|sq| board.piece_at(sq) == Some(pawn))
    {
        return true;
    }

    let knight = Piece::new(PieceType::Knight, by);
    if squares_in(KNIGHT_ATTACKS[target]).any(|sq| board.piece_at(sq) == Some(knight)) {
        return true;
    }

    let king = Piece::new(PieceType::King, by);
    if squares_in(KING_ATTACKS[target]).any(|sq| board.piece_at(sq) == Some(king)) {
        return true;
    }

    let straight = STRAIGHT_DIRECTIONS
        .iter()
        .filter_map(|&dir| first_piece_along(board, square, dir))
        .any(|p| p.color == by && p.kind.slides_straight());
    if straight {
        return true;
    }

    DIAGONAL_DIRECTIONS
        .iter()
        .filter_map(|&dir| first_piece_along(board, square, dir))
        .any(|p| p.color == by && p.kind.slides_diagonally())
}

/// True if `color` has a king and it is attacked by the other side.
///
/// A board without a king of `color` is never in check.
#[must_use]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .find_king(color)
        .is_some_and(|king| is_attacked(board, king, color.opponent()))
}

fn first_piece_along(board: &Board, from: Square, (dr, dc): (isize, isize)) -> Option<Piece> {
    let mut current = from;
    while let Some(next) = current.offset(dr, dc) {
        if let Some(piece) = board.piece_at(next) {
            return Some(piece);
        }
        current = next;
    }
    None
}
