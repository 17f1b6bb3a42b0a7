use super::super::{Color, PieceType, Position, Square};

impl Position {
    pub(crate) fn generate_pawn_targets(&self, from: Square, color: Color, out: &mut Vec<Square>) {
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.board.is_empty(one) {
                out.push(one);
                if from.row() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.board.is_empty(two) {
                            out.push(two);
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target) = from.offset(dir, dc) else {
                continue;
            };
            match self.board.color_on(target) {
                Some(c) if c != color => out.push(target),
                Some(_) => {}
                None if self.en_passant_target == Some(target) => {
                    // The double-stepped pawn must still stand beside `from`.
                    if self.en_passant_victim(target, color).is_some() {
                        out.push(target);
                    }
                }
                None => {}
            }
        }
    }

    /// Square of the enemy pawn an en-passant capture onto `target` removes:
    /// beside the capturing pawn, not behind the destination.
    pub(crate) fn en_passant_victim(&self, target: Square, capturer: Color) -> Option<Square> {
        let victim = target.offset(-capturer.pawn_direction(), 0)?;
        let piece = self.board.piece_at(victim)?;
        (piece.kind == PieceType::Pawn && piece.color != capturer).then_some(victim)
    }
}
