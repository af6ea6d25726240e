use std::fmt;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::error::{WorldError, WorldResult};

/// Identifier of a room within a single [`RoomGraph`](crate::RoomGraph).
///
/// IDs are handed out by the graph in creation order, so building the same
/// world twice yields the same IDs. Only the graph can mint them:
///
/// ```compile_fail
/// let id = cavern_core::RoomId(0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub(crate) usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A question with a single accepted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Riddle {
    question: String,
    answer: String,
}

impl Riddle {
    /// Create a riddle from its question and expected answer.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// The question text. Also serves as the riddle's identity.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The expected answer.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Check a candidate answer. Case-insensitive, otherwise exact.
    pub fn matches(&self, candidate: &str) -> bool {
        candidate.to_lowercase() == self.answer.to_lowercase()
    }
}

/// An exit from one room to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    /// Direction label of the exit.
    pub direction: Direction,
    /// The room the exit leads to.
    pub target: RoomId,
}

/// A location in the world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Display name; unique within a graph.
    pub name: String,
    /// Flavour text shown when the room is described.
    pub description: String,
    items: Vec<String>,
    exits: Vec<Exit>,
    riddle: Option<Riddle>,
}

impl Room {
    /// Create an empty room with no items, exits, or riddle.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            items: Vec::new(),
            exits: Vec::new(),
            riddle: None,
        }
    }

    /// Builder-style variant of [`Room::add_item`].
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.add_item(item);
        self
    }

    /// Items lying in the room, in the order they were placed.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Place an item in the room.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Whether an item with this name (case-insensitive) is in the room.
    pub fn has_item(&self, item: &str) -> bool {
        self.item_position(item).is_some()
    }

    /// Remove one copy of an item, returning the name as stored.
    pub fn take_item(&mut self, item: &str) -> Option<String> {
        self.item_position(item).map(|pos| self.items.remove(pos))
    }

    fn item_position(&self, item: &str) -> Option<usize> {
        let wanted = item.to_lowercase();
        self.items.iter().position(|i| i.to_lowercase() == wanted)
    }

    /// Exits in the order they were wired.
    pub fn exits(&self) -> &[Exit] {
        &self.exits
    }

    /// The room reached by going in `direction`, if any.
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits
            .iter()
            .find(|e| e.direction == direction)
            .map(|e| e.target)
    }

    /// Wire an exit. Re-wiring a direction replaces its target in place.
    pub(crate) fn set_exit(&mut self, direction: Direction, target: RoomId) {
        match self.exits.iter_mut().find(|e| e.direction == direction) {
            Some(exit) => exit.target = target,
            None => self.exits.push(Exit { direction, target }),
        }
    }

    /// The riddle posed in this room, if any.
    pub fn riddle(&self) -> Option<&Riddle> {
        self.riddle.as_ref()
    }

    /// Attach a riddle. A room carries at most one, and it cannot be replaced.
    pub fn set_riddle(&mut self, riddle: Riddle) -> WorldResult<()> {
        if self.riddle.is_some() {
            return Err(WorldError::RiddleAlreadySet(self.name.clone()));
        }
        self.riddle = Some(riddle);
        Ok(())
    }

    /// Full description including items, exits, and the riddle question.
    pub fn describe(&self) -> String {
        self.describe_with(true)
    }

    /// Description with control over whether the riddle line is included.
    pub fn describe_with(&self, show_riddle: bool) -> String {
        let mut output = format!("You're in {}.\n{}\n", self.name, self.description);

        if !self.items.is_empty() {
            output.push_str(&format!("Items: {}\n", self.items.join(", ")));
        }

        let exits: Vec<_> = self.exits.iter().map(|e| e.direction.name()).collect();
        output.push_str(&format!("Exits: {}\n", exits.join(", ")));

        if let Some(riddle) = self.riddle.as_ref().filter(|_| show_riddle) {
            output.push_str(&format!("Riddle: {}", riddle.question));
        }

        output
    }
}
