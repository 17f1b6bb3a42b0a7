//! Error types for the room layer.

use std::fmt;

use super::{GameOutcome, PlayerId, RoomId};
use crate::board::{Color, IllegalMoveError};

/// Why a room rejected a request. Nothing in the room changes when one is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The player holds no seat in this room
    NotSeated { player: PlayerId },
    /// The player's color is not the side to move. Moves submitted out of
    /// turn are reported as `Illegal` instead.
    NotYourTurn { player: PlayerId, side_to_move: Color },
    /// The game has already finished
    GameOver { outcome: GameOutcome },
    /// No draw offer is outstanding
    NoDrawOffer,
    /// A player tried to accept their own draw offer
    OwnDrawOffer,
    /// The seat belongs to another player
    SeatTaken { color: Color },
    /// No room with this id is open
    RoomNotFound { room: RoomId },
    /// The rules engine rejected the move
    Illegal(IllegalMoveError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotSeated { player } => write!(f, "Player {player} is not seated"),
            GameError::NotYourTurn {
                player,
                side_to_move,
            } => write!(f, "Player {player} cannot move, {side_to_move} is to move"),
            GameError::GameOver { outcome } => write!(f, "Game is over: {outcome}"),
            GameError::NoDrawOffer => write!(f, "No draw offer to accept"),
            GameError::OwnDrawOffer => write!(f, "Cannot accept your own draw offer"),
            GameError::SeatTaken { color } => write!(f, "{color} seat is already taken"),
            GameError::RoomNotFound { room } => write!(f, "Room {room} does not exist"),
            GameError::Illegal(err) => write!(f, "Illegal move: {err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Illegal(err) => Some(err),
            _ => None,
        }
    }
}

impl From<IllegalMoveError> for GameError {
    fn from(err: IllegalMoveError) -> Self {
        GameError::Illegal(err)
    }
}
