pub mod export;
pub mod map;
pub mod play;

use cavern_core::{RoomGraph, RoomId};

/// Build the fixed world, turning a wiring failure into a printable message.
fn build_world() -> Result<(RoomGraph, RoomId), String> {
    cavern_core::build().map_err(|e| format!("failed to build world: {e}"))
}

/// Name of a room, or a placeholder for a dangling ID.
fn room_name(graph: &RoomGraph, id: RoomId) -> &str {
    graph.room(id).map_or("?", |r| r.name.as_str())
}
