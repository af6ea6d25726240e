//! Core types for Cavern: rooms, directions, riddles, and the room graph.
//!
//! This crate defines the static world the player explores. It knows nothing
//! about players or commands; the interpreter in `cavern-fiction` reads and
//! mutates a [`RoomGraph`] produced by [`builder::build`].

/// The fixed world layout used by every new game.
pub mod builder;
/// Compass directions used to label exits.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// The room graph that owns every room and its exits.
pub mod graph;
/// Rooms, room identifiers, and riddles.
pub mod room;

/// Re-export the world builder entry point.
pub use builder::build;
/// Re-export the direction type.
pub use direction::Direction;
/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export the room graph.
pub use graph::RoomGraph;
/// Re-export room types.
pub use room::{Riddle, Room, RoomId};
