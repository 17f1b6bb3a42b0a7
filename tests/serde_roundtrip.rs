#![cfg(feature = "serde")]

use chess_arbiter::board::{
    apply_move, new_game, resolve_promotion, Color, PieceType, Position, PositionBuilder, Square,
};
use chess_arbiter::room::{Game, GameView, PlayerId};

fn play(moves: &[&str]) -> Position {
    moves.iter().fold(new_game(), |pos, m| {
        apply_move(&pos, m.parse().unwrap()).unwrap()
    })
}

fn roundtrip(position: &Position) -> Position {
    let json = serde_json::to_string(position).unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn restored_position_replays_identically() {
    let position = play(&["e2e4", "c7c5", "e4e5", "d7d5"]);
    let restored = roundtrip(&position);
    assert_eq!(restored, position);

    let mv = "e5d6".parse().unwrap();
    assert_eq!(
        apply_move(&restored, mv).unwrap(),
        apply_move(&position, mv).unwrap()
    );
}

#[test]
fn restored_history_still_counts_repetitions() {
    let position = play(&["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1"]);
    let restored = roundtrip(&position);
    let mv = "f6g8".parse().unwrap();
    let status = apply_move(&restored, mv).unwrap().status();
    assert_eq!(status, apply_move(&position, mv).unwrap().status());
    assert!(status.is_terminal());
}

#[test]
fn pending_promotion_survives_roundtrip() {
    let sq = |s: &str| s.parse::<Square>().unwrap();
    let position = PositionBuilder::new()
        .piece(sq("e1"), PieceType::King, Color::White)
        .piece(sq("e8"), PieceType::King, Color::Black)
        .piece(sq("b7"), PieceType::Pawn, Color::White)
        .build()
        .unwrap();
    let pending = apply_move(&position, "b7b8".parse().unwrap()).unwrap();
    assert!(pending.pending_promotion().is_some());

    let restored = roundtrip(&pending);
    assert_eq!(restored.pending_promotion(), pending.pending_promotion());
    assert_eq!(
        resolve_promotion(&restored, PieceType::Rook).unwrap(),
        resolve_promotion(&pending, PieceType::Rook).unwrap()
    );
}

#[test]
fn square_deserialization_is_checked() {
    assert_eq!(
        serde_json::from_str::<Square>("[3,4]").unwrap(),
        "e4".parse::<Square>().unwrap()
    );
    assert!(serde_json::from_str::<Square>("[8,0]").is_err());
}

#[test]
fn game_view_roundtrip() {
    let mut game = Game::new();
    game.seat(PlayerId(5), Color::White).unwrap();
    game.submit_move(PlayerId(5), "d2d4".parse().unwrap()).unwrap();

    let view = game.view();
    let json = serde_json::to_string(&view).unwrap();
    let back: GameView = serde_json::from_str(&json).unwrap();
    assert_eq!(back, view);
    assert_eq!(back.white, Some(PlayerId(5)));
}
