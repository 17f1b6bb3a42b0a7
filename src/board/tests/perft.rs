//! Perft (leaf count) tests for move generation correctness.

use super::diagram;
use crate::board::{perft, Color, Position};

struct TestPosition {
    name: &'static str,
    position: fn() -> Position,
    depths: &'static [(u32, u64)],
}

fn initial() -> Position {
    Position::new()
}

fn kiwipete() -> Position {
    diagram(
        [
            "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p", "PPPBBPPP",
            "R...K..R",
        ],
        Color::White,
    )
    .castling(Color::White, true, true)
    .castling(Color::Black, true, true)
    .build()
    .unwrap()
}

fn endgame() -> Position {
    diagram(
        [
            "........", "..p.....", "...p....", "KP.....r", ".R...p.k", "........", "....P.P.",
            "........",
        ],
        Color::White,
    )
    .build()
    .unwrap()
}

fn promotions() -> Position {
    diagram(
        [
            "n.n.....", "PPPk....", "........", "........", "........", "........", "....Kppp",
            ".....N.N",
        ],
        Color::Black,
    )
    .build()
    .unwrap()
}

fn castling() -> Position {
    diagram(
        [
            "r...k..r", "........", "........", "........", "........", "........", "........",
            "R...K..R",
        ],
        Color::White,
    )
    .castling(Color::White, true, true)
    .castling(Color::Black, true, true)
    .build()
    .unwrap()
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        position: initial,
        depths: &[(1, 20), (2, 400), (3, 8902)],
    },
    TestPosition {
        name: "Kiwipete",
        position: kiwipete,
        depths: &[(1, 48), (2, 2039)],
    },
    TestPosition {
        name: "Rook Endgame",
        position: endgame,
        depths: &[(1, 14), (2, 191), (3, 2812)],
    },
    TestPosition {
        name: "Promotion",
        position: promotions,
        depths: &[(1, 24), (2, 496)],
    },
    TestPosition {
        name: "Castling",
        position: castling,
        depths: &[(1, 26), (2, 568)],
    },
];

#[test]
fn test_perft_positions() {
    for test in TEST_POSITIONS {
        let position = (test.position)();
        for &(depth, expected) in test.depths {
            let nodes = perft(&position, depth);
            assert_eq!(
                nodes, expected,
                "{} depth {depth}: expected {expected}, got {nodes}",
                test.name
            );
        }
    }
}

#[test]
#[ignore]
fn test_perft_deep() {
    assert_eq!(perft(&initial(), 4), 197_281);
    assert_eq!(perft(&kiwipete(), 3), 97_862);
    assert_eq!(perft(&endgame(), 4), 43_238);
}
