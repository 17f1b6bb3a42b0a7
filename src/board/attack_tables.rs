use once_cell::sync::Lazy;

use super::{Color, Square};

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const DIAGONAL_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const STRAIGHT_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

fn reach_mask(sq: usize, deltas: &[(isize, isize)]) -> u64 {
    let from = Square::at(sq / 8, sq % 8);
    deltas
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .fold(0u64, |mask, to| mask | (1u64 << to.index()))
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[u64; 64]> =
    Lazy::new(|| std::array::from_fn(|sq| reach_mask(sq, &KNIGHT_DELTAS)));

pub(crate) static KING_ATTACKS: Lazy<[u64; 64]> =
    Lazy::new(|| std::array::from_fn(|sq| reach_mask(sq, &KING_DELTAS)));

/// `PAWN_ATTACKS[color][sq]`: the two forward diagonals of a `color` pawn on `sq`.
pub(crate) static PAWN_ATTACKS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    let mut attacks = [[0u64; 64]; 2];
    for color in Color::BOTH {
        let dir = color.pawn_direction();
        for (sq, mask) in attacks[color.index()].iter_mut().enumerate() {
            *mask = reach_mask(sq, &[(dir, -1), (dir, 1)]);
        }
    }
    attacks
});

/// Iterate over the squares whose bits are set in `mask`
pub(crate) fn squares_in(mut mask: u64) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let idx = mask.trailing_zeros() as usize;
        mask &= mask - 1;
        Some(Square::at(idx / 8, idx % 8))
    })
}
