use crate::direction::Direction;
use crate::error::WorldResult;
use crate::graph::RoomGraph;
use crate::room::{Riddle, Room, RoomId};

/// Names of the rooms produced by [`build`].
pub mod names {
    /// The starting room.
    pub const CAVERN: &str = "Cavern";
    /// Home of the keyboard riddle.
    pub const RIDDLE_ROOM: &str = "Riddle Room";
    /// Home of the arithmetic riddle.
    pub const CHALLENGE_ROOM: &str = "Challenge Room";
    /// Where the gold coin lies.
    pub const TREASURE_ROOM: &str = "Treasure Room";
    /// Home of the echo riddle.
    pub const LIBRARY: &str = "Library";
    /// The dead end past the library.
    pub const GATEWAY: &str = "Gateway";
}

/// Build the fixed world and return it together with the starting room.
///
/// Always produces the same six rooms, exits, items, and riddles. The map:
///
/// ```text
///                                  Library ── Gateway
///                                     │
/// Riddle Room ── Challenge Room ── Treasure Room
///      │
///   Cavern (start)
/// ```
pub fn build() -> WorldResult<(RoomGraph, RoomId)> {
    let mut graph = RoomGraph::new();

    let cavern =
        graph.add_room(Room::new(names::CAVERN, "A dimly lit cavern.").with_item("key"))?;

    let mut riddle_room =
        Room::new(names::RIDDLE_ROOM, "Symbols cover the walls.").with_item("scroll");
    riddle_room.set_riddle(Riddle::new(
        "What has keys but can't open locks?",
        "keyboard",
    ))?;
    let riddle_room = graph.add_room(riddle_room)?;

    let mut challenge = Room::new(names::CHALLENGE_ROOM, "Glowing numbers flicker.");
    challenge.set_riddle(Riddle::new("What is 7 * 6?", "42"))?;
    let challenge = graph.add_room(challenge)?;

    let treasure = graph.add_room(
        Room::new(names::TREASURE_ROOM, "Filled with shiny treasures.").with_item("gold coin"),
    )?;

    let mut library =
        Room::new(names::LIBRARY, "Dusty books and ancient scrolls.").with_item("ancient book");
    library.set_riddle(Riddle::new(
        "I speak without a mouth and hear without ears. What am I?",
        "echo",
    ))?;
    let library = graph.add_room(library)?;

    let gateway = graph.add_room(Room::new(names::GATEWAY, "A massive door stands ahead."))?;

    // Wiring order determines the order exits are listed in.
    graph.connect_both(cavern, Direction::North, riddle_room)?;
    graph.connect_both(riddle_room, Direction::East, challenge)?;
    graph.connect_both(challenge, Direction::East, treasure)?;
    graph.connect_both(treasure, Direction::North, library)?;
    graph.connect_both(library, Direction::East, gateway)?;

    Ok((graph, cavern))
}
