//! One game room: a position, two seats and the social end conditions
//! (resignation, draw agreement, abandonment).
//!
//! The room never trusts a client's idea of the position or the result. Only
//! moves pass in; status is recomputed with [`evaluate`] after every one.

use std::fmt;

use log::{info, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::GameError;
use crate::board::{
    apply_move, evaluate, new_game, resolve_promotion, Color, DrawReason, GameStatus,
    IllegalMoveError, Move, PieceType, Position, PositionError,
};

/// Opaque identity of a connected player, assigned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
    Resignation { winner: Color },
    DrawAgreed,
    /// A seated player left before the game finished
    Abandonment { winner: Color },
}

impl GameOutcome {
    /// Outcome implied by a terminal status, `None` while play continues
    #[must_use]
    pub const fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Checkmate { winner } => Some(GameOutcome::Checkmate { winner }),
            GameStatus::Stalemate => Some(GameOutcome::Stalemate),
            GameStatus::Draw { reason } => Some(GameOutcome::Draw(reason)),
            GameStatus::Ongoing | GameStatus::Check => None,
        }
    }

    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::Checkmate { winner }
            | GameOutcome::Resignation { winner }
            | GameOutcome::Abandonment { winner } => Some(winner),
            GameOutcome::Stalemate | GameOutcome::Draw(_) | GameOutcome::DrawAgreed => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => write!(f, "{winner} wins by checkmate"),
            GameOutcome::Stalemate => write!(f, "draw by stalemate"),
            GameOutcome::Draw(reason) => write!(f, "draw by {reason}"),
            GameOutcome::Resignation { winner } => write!(f, "{winner} wins by resignation"),
            GameOutcome::DrawAgreed => write!(f, "draw by agreement"),
            GameOutcome::Abandonment { winner } => write!(f, "{winner} wins by abandonment"),
        }
    }
}

/// Snapshot of a room sent to every participant after a change.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameView {
    pub position: Position,
    pub status: GameStatus,
    pub outcome: Option<GameOutcome>,
    /// Color whose draw offer is waiting for an answer
    pub draw_offer: Option<Color>,
    pub white: Option<PlayerId>,
    pub black: Option<PlayerId>,
}

/// Authoritative state of one room.
#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    status: GameStatus,
    seats: [Option<PlayerId>; 2],
    draw_offer: Option<Color>,
    outcome: Option<GameOutcome>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Fresh game from the initial position with both seats empty.
    #[must_use]
    pub fn new() -> Self {
        Game {
            position: new_game(),
            status: GameStatus::Ongoing,
            seats: [None, None],
            draw_offer: None,
            outcome: None,
        }
    }

    /// Restore a persisted position, e.g. after the host restarts.
    ///
    /// The position is validated and its status recomputed; a stored position
    /// that is already decided yields a finished game.
    pub fn from_position(position: Position) -> Result<Self, PositionError> {
        position.validate()?;
        let status = evaluate(&position, position.history());
        Ok(Game {
            outcome: GameOutcome::from_status(status),
            status,
            position,
            seats: [None, None],
            draw_offer: None,
        })
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn draw_offer(&self) -> Option<Color> {
        self.draw_offer
    }

    /// Color seated for `player`, if any
    #[must_use]
    pub fn color_of(&self, player: PlayerId) -> Option<Color> {
        Color::BOTH
            .into_iter()
            .find(|color| self.seats[color.index()] == Some(player))
    }

    #[must_use]
    pub fn player_at(&self, color: Color) -> Option<PlayerId> {
        self.seats[color.index()]
    }

    /// Seat `player` as `color`. A player already seated on the other side
    /// switches sides.
    pub fn seat(&mut self, player: PlayerId, color: Color) -> Result<(), GameError> {
        match self.seats[color.index()] {
            Some(holder) if holder == player => return Ok(()),
            Some(_) => return Err(GameError::SeatTaken { color }),
            None => {}
        }
        if let Some(previous) = self.color_of(player) {
            self.seats[previous.index()] = None;
        }
        self.seats[color.index()] = Some(player);
        info!("player {player} seated as {color}");
        Ok(())
    }

    /// Vacate `player`'s seat. Leaving a started game that is still being
    /// played forfeits it.
    pub fn leave(&mut self, player: PlayerId) -> Result<Option<GameOutcome>, GameError> {
        let color = self.seated(player)?;
        self.seats[color.index()] = None;
        if self.draw_offer == Some(color) {
            self.draw_offer = None;
        }

        if self.outcome.is_none() && !self.position.history().is_empty() {
            self.finish(GameOutcome::Abandonment {
                winner: color.opponent(),
            });
        }
        info!("player {player} left the {color} seat");
        Ok(self.outcome)
    }

    /// Validate and commit a move for `player`.
    ///
    /// A move without a promotion piece that reaches the last rank leaves the
    /// game waiting for [`Game::submit_promotion`].
    ///
    /// A move from the side not on move is rejected as an illegal move, which
    /// is what the loser of two racing submissions receives.
    pub fn submit_move(&mut self, player: PlayerId, mv: Move) -> Result<GameStatus, GameError> {
        let color = self.check_turn(player).map_err(|err| match err {
            GameError::NotYourTurn { side_to_move, .. } => {
                GameError::Illegal(IllegalMoveError::WrongTurn {
                    square: mv.from,
                    side_to_move,
                })
            }
            other => other,
        })?;
        let next = apply_move(&self.position, mv).map_err(|err| {
            warn!("rejected {mv} from player {player}: {err}");
            GameError::Illegal(err)
        })?;
        info!("player {player} ({color}) played {mv}");
        Ok(self.commit(next, color))
    }

    /// Complete a pending promotion for `player`.
    pub fn submit_promotion(
        &mut self,
        player: PlayerId,
        piece: PieceType,
    ) -> Result<GameStatus, GameError> {
        let color = self.check_turn(player)?;
        let next = resolve_promotion(&self.position, piece).map_err(|err| {
            warn!("rejected promotion to {piece} from player {player}: {err}");
            GameError::Illegal(err)
        })?;
        info!("player {player} ({color}) promoted to {piece}");
        Ok(self.commit(next, color))
    }

    /// Concede the game; the opponent wins.
    pub fn resign(&mut self, player: PlayerId) -> Result<GameOutcome, GameError> {
        self.ensure_running()?;
        let color = self.seated(player)?;
        let outcome = GameOutcome::Resignation {
            winner: color.opponent(),
        };
        self.finish(outcome);
        Ok(outcome)
    }

    /// Offer a draw, replacing any earlier offer.
    pub fn offer_draw(&mut self, player: PlayerId) -> Result<(), GameError> {
        self.ensure_running()?;
        let color = self.seated(player)?;
        self.draw_offer = Some(color);
        info!("player {player} ({color}) offered a draw");
        Ok(())
    }

    /// Accept the opponent's outstanding draw offer.
    pub fn accept_draw(&mut self, player: PlayerId) -> Result<GameOutcome, GameError> {
        self.ensure_running()?;
        let color = self.seated(player)?;
        match self.draw_offer {
            None => Err(GameError::NoDrawOffer),
            Some(offered_by) if offered_by == color => Err(GameError::OwnDrawOffer),
            Some(_) => {
                self.finish(GameOutcome::DrawAgreed);
                Ok(GameOutcome::DrawAgreed)
            }
        }
    }

    /// Start over from the initial position. Seats are kept.
    pub fn reset(&mut self) {
        self.position = new_game();
        self.status = GameStatus::Ongoing;
        self.draw_offer = None;
        self.outcome = None;
        info!("game reset");
    }

    #[must_use]
    pub fn view(&self) -> GameView {
        GameView {
            position: self.position.clone(),
            status: self.status,
            outcome: self.outcome,
            draw_offer: self.draw_offer,
            white: self.player_at(Color::White),
            black: self.player_at(Color::Black),
        }
    }

    fn commit(&mut self, next: Position, mover: Color) -> GameStatus {
        self.position = next;
        self.status = evaluate(&self.position, self.position.history());
        if self.draw_offer == Some(mover.opponent()) {
            self.draw_offer = None;
        }
        if let Some(outcome) = GameOutcome::from_status(self.status) {
            self.finish(outcome);
        }
        self.status
    }

    fn finish(&mut self, outcome: GameOutcome) {
        self.outcome = Some(outcome);
        self.draw_offer = None;
        info!("game over: {outcome}");
    }

    fn ensure_running(&self) -> Result<(), GameError> {
        match self.outcome {
            Some(outcome) => Err(GameError::GameOver { outcome }),
            None => Ok(()),
        }
    }

    fn seated(&self, player: PlayerId) -> Result<Color, GameError> {
        self.color_of(player).ok_or(GameError::NotSeated { player })
    }

    fn check_turn(&self, player: PlayerId) -> Result<Color, GameError> {
        self.ensure_running()?;
        let color = self.seated(player)?;
        let side_to_move = self.position.side_to_move();
        if color != side_to_move {
            warn!("player {player} ({color}) moved out of turn");
            return Err(GameError::NotYourTurn {
                player,
                side_to_move,
            });
        }
        Ok(color)
    }
}
