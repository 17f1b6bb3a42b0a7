use super::super::attack_tables::{squares_in, KNIGHT_ATTACKS};
use super::super::{Color, Position, Square};

impl Position {
    pub(crate) fn generate_knight_targets(&self, from: Square, color: Color, out: &mut Vec<Square>) {
        out.extend(
            squares_in(KNIGHT_ATTACKS[from.index()])
                .filter(|&to| self.board.color_on(to) != Some(color)),
        );
    }
}
