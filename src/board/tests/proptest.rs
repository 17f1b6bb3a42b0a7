//! Property-based tests using proptest.

use crate::board::{
    all_legal_moves, apply_move, is_in_check, legal_moves, Move, PieceType, Position, Square,
    PROMOTION_PIECES,
};
use proptest::prelude::*;
use rand::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn square_strategy() -> impl Strategy<Value = Square> {
    (0..64usize).prop_map(|idx| Square::from_index(idx).unwrap())
}

/// Pick a random legal move, choosing a random piece for promotions.
fn random_move(position: &Position, rng: &mut StdRng) -> Option<Move> {
    let moves = all_legal_moves(position);
    let mv = *moves.choose(rng)?;
    let piece = position.piece_at(mv.from)?;
    if piece.kind == PieceType::Pawn && mv.to.row() == piece.color.pawn_promotion_rank() {
        let choice = *PROMOTION_PIECES.choose(rng)?;
        return Some(Move::with_promotion(mv.from, mv.to, choice));
    }
    Some(mv)
}

fn random_walk(seed: u64, plies: usize) -> Position {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut position = Position::new();
    for _ in 0..plies {
        let Some(mv) = random_move(&position, &mut rng) else {
            break;
        };
        position = apply_move(&position, mv).unwrap();
    }
    position
}

proptest! {
    /// Property: no legal move leaves the mover's own king attacked
    #[test]
    fn prop_legal_moves_keep_king_safe(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let position = random_walk(seed, num_moves);
        let mover = position.side_to_move();
        for mv in all_legal_moves(&position) {
            let next = apply_move(&position, mv).unwrap();
            prop_assert!(!is_in_check(next.board(), mover), "{} exposes the king", mv);
        }
    }

    /// Property: apply_move accepts a move exactly when legal_moves lists it
    #[test]
    fn prop_apply_matches_legal_moves(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
        from in square_strategy(),
        to in square_strategy(),
    ) {
        let position = random_walk(seed, num_moves);
        let mv = Move::new(from, to);
        let listed = legal_moves(&position, from).contains(&mv);
        prop_assert_eq!(apply_move(&position, mv).is_ok(), listed);
    }

    /// Property: every applied move extends the history by one snapshot
    #[test]
    fn prop_history_tracks_plies(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut position = Position::new();
        let mut plies = 0;
        for _ in 0..num_moves {
            let Some(mv) = random_move(&position, &mut rng) else {
                break;
            };
            let before = position.snapshot();
            position = apply_move(&position, mv).unwrap();
            plies += 1;
            prop_assert_eq!(position.history().len(), plies);
            prop_assert_eq!(position.history().iter().last(), Some(&before));
        }
    }

    /// Property: make_placement followed by unmake_placement restores the board
    #[test]
    fn prop_make_unmake_restores_board(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let position = random_walk(seed, num_moves);
        let original = *position.board();
        for mv in all_legal_moves(&position) {
            let mut board = original;
            let info = board.make_placement(mv.from, mv.to).unwrap();
            board.unmake_placement(info);
            prop_assert_eq!(board, original);
        }
    }
}
