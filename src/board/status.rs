//! Game-end evaluation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::history::PositionHistory;
use super::legal::has_legal_move;
use super::{is_attacked, Color, Position};

/// Plies without a pawn move or capture after which the game is drawn
pub const FIFTY_MOVE_PLY_LIMIT: u32 = 100;

/// Occurrences of one position that draw the game
pub const REPETITION_LIMIT: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DrawReason {
    FiftyMove,
    ThreefoldRepetition,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawReason::FiftyMove => write!(f, "fifty-move rule"),
            DrawReason::ThreefoldRepetition => write!(f, "threefold repetition"),
        }
    }
}

/// Result of evaluating a position after a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate { winner: Color },
    Stalemate,
    Draw { reason: DrawReason },
}

impl GameStatus {
    /// True once no further moves may be played
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. } | GameStatus::Stalemate | GameStatus::Draw { .. }
        )
    }

    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::Draw { reason } => write!(f, "draw by {reason}"),
        }
    }
}

/// Classify `position` given the positions that preceded it.
///
/// Order matters: having no legal move is terminal before any clock or
/// repetition draw is considered. A position waiting for a promotion choice
/// is `Ongoing` since its move is not complete.
#[must_use]
pub fn evaluate(position: &Position, history: &PositionHistory) -> GameStatus {
    if position.pending_promotion.is_some() {
        return GameStatus::Ongoing;
    }

    let side = position.side_to_move;
    let in_check = position
        .board
        .find_king(side)
        .is_some_and(|king| is_attacked(&position.board, king, side.opponent()));

    if !has_legal_move(position) {
        return if in_check {
            GameStatus::Checkmate {
                winner: side.opponent(),
            }
        } else {
            GameStatus::Stalemate
        };
    }

    if position.halfmove_clock >= FIFTY_MOVE_PLY_LIMIT {
        return GameStatus::Draw {
            reason: DrawReason::FiftyMove,
        };
    }

    if history.max_repetitions(&position.snapshot()) >= REPETITION_LIMIT {
        return GameStatus::Draw {
            reason: DrawReason::ThreefoldRepetition,
        };
    }

    if in_check {
        GameStatus::Check
    } else {
        GameStatus::Ongoing
    }
}

impl Position {
    /// Evaluate against this position's own history
    #[must_use]
    pub fn status(&self) -> GameStatus {
        evaluate(self, &self.history)
    }
}
