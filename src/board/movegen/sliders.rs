use super::super::{Color, Position, Square};

impl Position {
    /// Ray-cast along each direction: stop before an own piece, stop after
    /// (and include) an enemy piece.
    pub(crate) fn generate_sliding_targets(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        out: &mut Vec<Square>,
    ) {
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(next) = current.offset(dr, dc) {
                match self.board.color_on(next) {
                    None => out.push(next),
                    Some(c) if c == color => break,
                    Some(_) => {
                        out.push(next);
                        break;
                    }
                }
                current = next;
            }
        }
    }
}
