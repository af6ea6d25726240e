//! Error types for the game engine.
//!
//! Every gameplay failure is an expected outcome of player input. The
//! `Display` text of each variant is exactly what the player sees.

use cavern_core::WorldError;
use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Outcomes that stop a command from taking effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A command arrived before the session was started.
    #[error("Game not started.")]
    NotStarted,

    /// The player has no current room.
    #[error("No room here!")]
    NoRoom,

    /// The player has no current room to move from.
    #[error("You're lost!")]
    Lost,

    /// The requested item is not in the current room.
    #[error("Item not here.")]
    ItemNotFound(String),

    /// No exit leads that way.
    #[error("Can't go that way.")]
    NoExit,

    /// The current room has no riddle.
    #[error("No riddle here.")]
    NoRiddle,

    /// The riddle in the current room has already been solved.
    #[error("Riddle already solved!")]
    AlreadySolved,

    /// The answer didn't match.
    #[error("Wrong answer.")]
    WrongAnswer,

    /// The verb is not recognized.
    #[error("Invalid command.")]
    UnknownCommand(String),

    /// The world could not be built.
    #[error("world error: {0}")]
    World(#[from] WorldError),
}
