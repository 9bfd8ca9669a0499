use std::fmt;

use crate::GameId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    OutOfBounds,
    MissingCoordinate,
    CellOccupied,
    GameOver,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            MoveRejection::OutOfBounds => "position out of bounds",
            MoveRejection::MissingCoordinate => "row and col are required",
            MoveRejection::CellOccupied => "cell is already marked",
            MoveRejection::GameOver => "game is already over",
        };
        write!(f, "{}", reason)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidMove(MoveRejection),
    SessionNotFound(GameId),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidMove(reason) => write!(f, "Invalid move: {}", reason),
            GameError::SessionNotFound(id) => write!(f, "Game not found: {}", id),
        }
    }
}

impl std::error::Error for GameError {}
