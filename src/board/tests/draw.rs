//! Draw detection tests (50-move rule, repetition, stalemate).

use super::{diagram, play, sq};
use crate::board::{Color, DrawReason, GameStatus, PieceType, Position, PositionBuilder};

const KNIGHT_SHUFFLE: [&str; 4] = ["g1f3", "g8f6", "f3g1", "f6g8"];

fn shuffle(cycles: usize) -> Vec<&'static str> {
    KNIGHT_SHUFFLE.iter().copied().cycle().take(cycles * 4).collect()
}

#[test]
fn test_fifty_move_rule_after_hundred_quiet_plies() {
    let pos = play(&Position::new(), &shuffle(25));
    assert_eq!(pos.halfmove_clock(), 100);
    assert_eq!(
        pos.status(),
        GameStatus::Draw {
            reason: DrawReason::FiftyMove
        }
    );
}

#[test]
fn test_fifty_move_rule_boundary() {
    let start = PositionBuilder::new()
        .piece(sq("e1"), PieceType::King, Color::White)
        .piece(sq("a1"), PieceType::Rook, Color::White)
        .piece(sq("e8"), PieceType::King, Color::Black)
        .halfmove_clock(98)
        .build()
        .unwrap();

    let pos = play(&start, &["a1a2"]);
    assert_eq!(pos.halfmove_clock(), 99);
    assert_eq!(pos.status(), GameStatus::Ongoing);

    let pos = play(&pos, &["e8d8"]);
    assert_eq!(pos.halfmove_clock(), 100);
    assert_eq!(
        pos.status(),
        GameStatus::Draw {
            reason: DrawReason::FiftyMove
        }
    );
}

#[test]
fn test_pawn_move_and_capture_reset_clock() {
    let pos = play(&Position::new(), &["g1f3", "g8f6", "f3g1"]);
    assert_eq!(pos.halfmove_clock(), 3);

    let pos = play(&pos, &["e7e5"]);
    assert_eq!(pos.halfmove_clock(), 0);

    let pos = play(&pos, &["b1c3", "f6e4", "c3e4"]);
    assert_eq!(pos.halfmove_clock(), 0);
}

#[test]
fn test_threefold_repetition() {
    let once = play(&Position::new(), &shuffle(1));
    assert_eq!(once.status(), GameStatus::Ongoing);

    let twice = play(&Position::new(), &shuffle(2));
    assert_eq!(
        twice.status(),
        GameStatus::Draw {
            reason: DrawReason::ThreefoldRepetition
        }
    );
}

#[test]
fn test_repetition_need_not_be_consecutive() {
    let pos = play(
        &Position::new(),
        &["g1f3", "g8f6", "f3g1", "f6g8", "b1c3", "b8c6", "c3b1", "c6b8"],
    );
    assert_eq!(
        pos.status(),
        GameStatus::Draw {
            reason: DrawReason::ThreefoldRepetition
        }
    );
}

#[test]
fn test_castling_rights_distinguish_positions() {
    let start = diagram(
        [
            "r...k..r", "........", "........", "........", "........", "........", "........",
            "R...K..R",
        ],
        Color::White,
    )
    .castling(Color::White, true, true)
    .castling(Color::Black, true, true)
    .build()
    .unwrap();
    let cycle = ["e1f1", "e8f8", "f1e1", "f8e8"];
    let moves: Vec<&str> = cycle.iter().copied().cycle().take(10).collect();

    // Walking the kings out forfeits castling, so the start never recurs.
    let pos = play(&start, &moves[..9]);
    assert_eq!(pos.status(), GameStatus::Ongoing);

    let pos = play(&start, &moves);
    assert_eq!(
        pos.status(),
        GameStatus::Draw {
            reason: DrawReason::ThreefoldRepetition
        }
    );
}

#[test]
fn test_stalemate_lone_king() {
    let pos = diagram(
        [
            "k.......", "..Q.....", "........", "........", "........", "........", "........",
            "....K...",
        ],
        Color::Black,
    )
    .build()
    .unwrap();
    assert!(!pos.in_check());
    assert_eq!(pos.status(), GameStatus::Stalemate);
}
