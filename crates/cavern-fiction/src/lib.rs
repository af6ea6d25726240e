//! Game engine for Cavern.
//!
//! Turns lines of player input into actions on a [`cavern_core::RoomGraph`]:
//! a fixed-verb command parser, player state with inventory, score, and
//! solved riddles, and a [`Session`] that ties them together. The engine does
//! no I/O; front ends feed it lines and print what it returns.

/// Command parsing.
pub mod command;
/// Session configuration.
pub mod config;
/// Error types for the game engine.
pub mod error;
/// Player state management.
pub mod player;
/// Game session management.
pub mod session;

pub use command::{Command, parse_command};
pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use player::{Player, RIDDLE_POINTS};
pub use session::{Game, GameState, HELP_TEXT, Session};
