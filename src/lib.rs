pub mod board;
pub mod room;

pub use board::{
    apply_move, evaluate, legal_moves, new_game, resolve_promotion, Color, GameStatus,
    IllegalMoveError, Move, Piece, PieceType, Position, PositionHistory, Square,
};
pub use room::{Game, GameError, GameOutcome, GameView, PlayerId, RoomId, RoomRegistry};
