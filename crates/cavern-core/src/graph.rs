use std::collections::HashMap;

use crate::direction::Direction;
use crate::error::{WorldError, WorldResult};
use crate::room::{Room, RoomId};

/// The room graph. Owns every room; rooms refer to each other by [`RoomId`].
///
/// Rooms can be added but never removed, so an ID handed out by this graph
/// stays valid for the graph's lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomGraph {
    rooms: Vec<Room>,

    // Index
    by_name_lower: HashMap<String, RoomId>,
}

impl RoomGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Rooms
    // -----------------------------------------------------------------------

    /// Add a room to the graph. Returns the room's ID.
    pub fn add_room(&mut self, room: Room) -> WorldResult<RoomId> {
        let name_lower = room.name.to_lowercase();
        if self.by_name_lower.contains_key(&name_lower) {
            return Err(WorldError::DuplicateName(room.name));
        }

        let id = RoomId(self.rooms.len());
        self.by_name_lower.insert(name_lower, id);
        self.rooms.push(room);
        Ok(id)
    }

    /// Get a reference to a room by ID.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    /// Get a mutable reference to a room by ID.
    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.0)
    }

    /// Find a room ID by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<RoomId> {
        self.by_name_lower.get(&name.to_lowercase()).copied()
    }

    /// Iterate over all rooms with their IDs, in creation order.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the graph has no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    // -----------------------------------------------------------------------
    // Exits
    // -----------------------------------------------------------------------

    /// Wire a one-way exit from `from` to `to`.
    pub fn connect(&mut self, from: RoomId, direction: Direction, to: RoomId) -> WorldResult<()> {
        if self.room(to).is_none() {
            return Err(WorldError::RoomNotFound(to));
        }
        self.room_mut(from)
            .ok_or(WorldError::RoomNotFound(from))?
            .set_exit(direction, to);
        Ok(())
    }

    /// Wire `a` to `b` in `direction`, and `b` back to `a` in the opposite one.
    pub fn connect_both(&mut self, a: RoomId, direction: Direction, b: RoomId) -> WorldResult<()> {
        self.connect(a, direction, b)?;
        self.connect(b, direction.opposite(), a)
    }

    /// Follow the exit in `direction` from `room`.
    ///
    /// Returns `None` if the room doesn't exist or has no such exit.
    pub fn exit(&self, room: RoomId, direction: Direction) -> Option<RoomId> {
        self.room(room).and_then(|r| r.exit(direction))
    }

    /// Describe a room. See [`Room::describe`].
    pub fn describe(&self, room: RoomId) -> Option<String> {
        self.room(room).map(Room::describe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rooms() -> (RoomGraph, RoomId, RoomId) {
        let mut graph = RoomGraph::new();
        let hall = graph.add_room(Room::new("Hall", "Long.")).unwrap();
        let yard = graph.add_room(Room::new("Yard", "Open.")).unwrap();
        (graph, hall, yard)
    }

    #[test]
    fn ids_follow_creation_order() {
        let (graph, hall, yard) = two_rooms();
        assert_eq!(hall, RoomId(0));
        assert_eq!(yard, RoomId(1));
        assert_eq!(graph.len(), 2);
        let names: Vec<_> = graph.rooms().map(|(_, r)| r.name.as_str()).collect();
        assert_eq!(names, ["Hall", "Yard"]);
    }

    #[test]
    fn duplicate_names_rejected() {
        let (mut graph, _, _) = two_rooms();
        let err = graph.add_room(Room::new("hall", "Again.")).unwrap_err();
        assert_eq!(err, WorldError::DuplicateName("hall".to_string()));
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn find_by_name_case_insensitive() {
        let (graph, hall, _) = two_rooms();
        assert_eq!(graph.find_by_name("HALL"), Some(hall));
        assert_eq!(graph.find_by_name("Cellar"), None);
    }

    #[test]
    fn one_way_connection() {
        let (mut graph, hall, yard) = two_rooms();
        graph.connect(hall, Direction::East, yard).unwrap();
        assert_eq!(graph.exit(hall, Direction::East), Some(yard));
        assert_eq!(graph.exit(yard, Direction::West), None);
    }

    #[test]
    fn two_way_connection() {
        let (mut graph, hall, yard) = two_rooms();
        graph.connect_both(hall, Direction::North, yard).unwrap();
        assert_eq!(graph.exit(hall, Direction::North), Some(yard));
        assert_eq!(graph.exit(yard, Direction::South), Some(hall));
    }

    #[test]
    fn connect_unknown_room() {
        let (mut graph, hall, _) = two_rooms();
        let ghost = RoomId(9);
        assert_eq!(
            graph.connect(hall, Direction::East, ghost),
            Err(WorldError::RoomNotFound(ghost))
        );
        assert_eq!(
            graph.connect(ghost, Direction::East, hall),
            Err(WorldError::RoomNotFound(ghost))
        );
        assert!(graph.room(hall).unwrap().exits().is_empty());
    }

    #[test]
    fn exit_from_unknown_room_is_none() {
        let (graph, _, _) = two_rooms();
        assert_eq!(graph.exit(RoomId(42), Direction::North), None);
        assert_eq!(graph.describe(RoomId(42)), None);
    }

    #[test]
    fn describe_lists_exits() {
        let (mut graph, hall, yard) = two_rooms();
        graph.connect_both(hall, Direction::East, yard).unwrap();
        let text = graph.describe(yard).unwrap();
        assert!(text.starts_with("You're in Yard.\nOpen.\n"));
        assert!(text.contains("Exits: west"));
    }
}
