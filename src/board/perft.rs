use super::{all_legal_moves, Move, PieceType, Position, PROMOTION_PIECES};

/// Count leaf nodes of the legal move tree to `depth` plies.
///
/// Each promoting destination counts once per promotion piece, which makes
/// the totals comparable with published perft tables.
#[must_use]
pub fn perft(position: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    for mv in all_legal_moves(position) {
        for candidate in expand_promotions(position, mv) {
            let mut next = position.clone();
            if next.make_move(candidate).is_ok() {
                nodes += perft(&next, depth - 1);
            }
        }
    }
    nodes
}

fn expand_promotions(position: &Position, mv: Move) -> Vec<Move> {
    let promotes = position.piece_at(mv.from).is_some_and(|p| {
        p.kind == PieceType::Pawn && mv.to.row() == p.color.pawn_promotion_rank()
    });
    if promotes {
        PROMOTION_PIECES
            .iter()
            .map(|&piece| Move::with_promotion(mv.from, mv.to, piece))
            .collect()
    } else {
        vec![mv]
    }
}
