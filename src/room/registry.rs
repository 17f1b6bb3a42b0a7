//! Open rooms keyed by id, each behind its own lock.
//!
//! The map lock is held only long enough to find a room; the game itself is
//! locked per room, so moves in different rooms never wait on each other.
//! A thread holding a room lock may take the map lock, never the reverse.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::info;
use parking_lot::{Mutex, RwLock};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Game, GameError, GameOutcome, GameView, PlayerId};
use crate::board::{Color, Move, PieceType};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RoomId(pub u64);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared handle to one room's game
pub type SharedGame = Arc<Mutex<Game>>;

#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: RwLock<HashMap<RoomId, SharedGame>>,
    next_id: AtomicU64,
}

impl RoomRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a room holding a fresh game.
    pub fn create_room(&self) -> RoomId {
        self.insert(Game::new())
    }

    /// Open a room around an existing game, e.g. one restored from storage.
    pub fn insert(&self, game: Game) -> RoomId {
        let id = RoomId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        self.rooms.write().insert(id, Arc::new(Mutex::new(game)));
        info!("room {id} opened");
        id
    }

    /// Close a room, returning its game as it stood.
    pub fn close_room(&self, room: RoomId) -> Result<Game, GameError> {
        let shared = self
            .rooms
            .write()
            .remove(&room)
            .ok_or(GameError::RoomNotFound { room })?;
        info!("room {room} closed");
        let game = shared.lock().clone();
        Ok(game)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.read().is_empty()
    }

    /// Ids of every open room, in ascending order
    #[must_use]
    pub fn room_ids(&self) -> Vec<RoomId> {
        let mut ids: Vec<RoomId> = self.rooms.read().keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Handle to a room's game for callers that manage the lock themselves.
    pub fn room(&self, room: RoomId) -> Result<SharedGame, GameError> {
        self.rooms
            .read()
            .get(&room)
            .cloned()
            .ok_or(GameError::RoomNotFound { room })
    }

    /// Run `f` with exclusive access to one room's game.
    pub fn with_game<R>(
        &self,
        room: RoomId,
        f: impl FnOnce(&mut Game) -> R,
    ) -> Result<R, GameError> {
        let shared = self.room(room)?;
        let mut game = shared.lock();
        // The room may have been closed while we waited for its lock.
        if !self.is_open(room, &shared) {
            return Err(GameError::RoomNotFound { room });
        }
        Ok(f(&mut game))
    }

    fn is_open(&self, room: RoomId, shared: &SharedGame) -> bool {
        self.rooms
            .read()
            .get(&room)
            .is_some_and(|current| Arc::ptr_eq(current, shared))
    }

    pub fn seat_player(
        &self,
        room: RoomId,
        player: PlayerId,
        color: Color,
    ) -> Result<(), GameError> {
        self.with_game(room, |game| game.seat(player, color))?
    }

    /// Remove a player from a room, closing the room once both seats are
    /// empty. Returns the outcome if the game has finished.
    pub fn leave_room(
        &self,
        room: RoomId,
        player: PlayerId,
    ) -> Result<Option<GameOutcome>, GameError> {
        self.with_game(room, |game| {
            let outcome = game.leave(player)?;
            if Color::BOTH.iter().all(|&c| game.player_at(c).is_none()) {
                // Still under the game lock: anyone queued on it finds the
                // room gone.
                self.rooms.write().remove(&room);
                info!("room {room} closed");
            }
            Ok::<_, GameError>(outcome)
        })?
    }

    /// Current state of a room for broadcasting
    pub fn view(&self, room: RoomId) -> Result<GameView, GameError> {
        self.with_game(room, |game| game.view())
    }

    /// Validate and commit a move, returning the state to broadcast.
    pub fn submit_move(
        &self,
        room: RoomId,
        player: PlayerId,
        mv: Move,
    ) -> Result<GameView, GameError> {
        self.with_game(room, |game| {
            game.submit_move(player, mv)?;
            Ok(game.view())
        })?
    }

    pub fn submit_promotion(
        &self,
        room: RoomId,
        player: PlayerId,
        piece: PieceType,
    ) -> Result<GameView, GameError> {
        self.with_game(room, |game| {
            game.submit_promotion(player, piece)?;
            Ok(game.view())
        })?
    }
}
