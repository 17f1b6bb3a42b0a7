use super::super::attack_tables::{squares_in, KING_ATTACKS};
use super::super::{is_attacked, CastleSide, Color, Piece, PieceType, Position, Square};

impl Position {
    pub(crate) fn generate_king_targets(&self, from: Square, color: Color, out: &mut Vec<Square>) {
        let enemy = color.opponent();

        // Lift the king off the board so squares "behind" it along an
        // attacking line count as attacked.
        let mut lifted = self.board;
        lifted.remove_piece(from);

        out.extend(
            squares_in(KING_ATTACKS[from.index()])
                .filter(|&to| self.board.color_on(to) != Some(color))
                .filter(|&to| !is_attacked(&lifted, to, enemy)),
        );

        for side in CastleSide::BOTH {
            if self.can_castle(from, color, side) {
                out.push(Square::at(color.back_rank(), side.king_target_col()));
            }
        }
    }

    /// Castling requires: both rights flags still set for that wing, the
    /// king and rook on their home squares, every square strictly between
    /// them empty, and the king neither in check nor passing through or
    /// landing on an attacked square.
    fn can_castle(&self, from: Square, color: Color, side: CastleSide) -> bool {
        let rank = color.back_rank();
        if from != Square::at(rank, 4) || !self.castling_rights.has(color, side) {
            return false;
        }

        let rook_home = Square::at(rank, side.rook_home_col());
        if self.board.piece_at(rook_home) != Some(Piece::new(PieceType::Rook, color)) {
            return false;
        }

        let (lo, hi) = if side.rook_home_col() < 4 {
            (side.rook_home_col() + 1, 4)
        } else {
            (5, side.rook_home_col())
        };
        if (lo..hi).any(|col| !self.board.is_empty(Square::at(rank, col))) {
            return false;
        }

        let enemy = color.opponent();
        let target_col = side.king_target_col();
        let (first, last) = if target_col > 4 {
            (4, target_col)
        } else {
            (target_col, 4)
        };
        (first..=last).all(|col| !is_attacked(&self.board, Square::at(rank, col), enemy))
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{pseudo_legal_moves, Color, PieceType, PositionBuilder, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn names(mut targets: Vec<Square>) -> Vec<String> {
        targets.sort_by_key(|s| s.index());
        targets.iter().map(ToString::to_string).collect()
    }

    fn castling_setup() -> PositionBuilder {
        PositionBuilder::new()
            .piece(sq("e1"), PieceType::King, Color::White)
            .piece(sq("a1"), PieceType::Rook, Color::White)
            .piece(sq("h1"), PieceType::Rook, Color::White)
            .piece(sq("e8"), PieceType::King, Color::Black)
            .castling(Color::White, true, true)
    }

    #[test]
    fn test_both_castles_available() {
        let pos = castling_setup().build().unwrap();
        let targets = names(pseudo_legal_moves(&pos, sq("e1")));
        assert!(targets.contains(&"g1".to_string()));
        assert!(targets.contains(&"c1".to_string()));
    }

    #[test]
    fn test_no_castle_through_attacked_square() {
        let pos = castling_setup()
            .piece(sq("f8"), PieceType::Rook, Color::Black)
            .build()
            .unwrap();
        let targets = names(pseudo_legal_moves(&pos, sq("e1")));
        assert!(!targets.contains(&"g1".to_string()));
        assert!(!targets.contains(&"f1".to_string()));
        assert!(targets.contains(&"c1".to_string()));
    }

    #[test]
    fn test_queenside_b_file_may_be_attacked() {
        let pos = castling_setup()
            .piece(sq("b8"), PieceType::Rook, Color::Black)
            .build()
            .unwrap();
        assert!(names(pseudo_legal_moves(&pos, sq("e1"))).contains(&"c1".to_string()));
    }

    #[test]
    fn test_no_castle_out_of_check() {
        let pos = castling_setup()
            .piece(sq("e5"), PieceType::Rook, Color::Black)
            .build()
            .unwrap();
        let targets = names(pseudo_legal_moves(&pos, sq("e1")));
        assert!(!targets.contains(&"g1".to_string()));
        assert!(!targets.contains(&"c1".to_string()));
    }

    #[test]
    fn test_no_castle_without_right_or_with_blocker() {
        let pos = castling_setup()
            .castling(Color::White, false, true)
            .piece(sq("b1"), PieceType::Knight, Color::White)
            .build()
            .unwrap();
        let targets = names(pseudo_legal_moves(&pos, sq("e1")));
        assert!(!targets.contains(&"g1".to_string()));
        assert!(!targets.contains(&"c1".to_string()));
    }

    #[test]
    fn test_king_does_not_step_into_attack() {
        let pos = PositionBuilder::new()
            .piece(sq("e1"), PieceType::King, Color::White)
            .piece(sq("a2"), PieceType::Rook, Color::Black)
            .build()
            .unwrap();
        assert_eq!(names(pseudo_legal_moves(&pos, sq("e1"))), vec!["d1", "f1"]);
    }

    #[test]
    fn test_king_cannot_retreat_along_checking_line() {
        let pos = PositionBuilder::new()
            .piece(sq("e4"), PieceType::King, Color::White)
            .piece(sq("a4"), PieceType::Rook, Color::Black)
            .build()
            .unwrap();
        assert!(!pseudo_legal_moves(&pos, sq("e4")).contains(&sq("f4")));
    }
}
