//! Authoritative host layer.
//!
//! A [`Game`] wraps one [`Position`](crate::board::Position) with seats and
//! the end conditions that are not board rules. [`RoomRegistry`] keeps many
//! games apart, one lock per room.

mod error;
mod game;
mod registry;

pub use error::GameError;
pub use game::{Game, GameOutcome, GameView, PlayerId};
pub use registry::{RoomId, RoomRegistry, SharedGame};
