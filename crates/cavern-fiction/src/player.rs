//! Player state and the actions that mutate it.

use std::collections::HashSet;

use cavern_core::{Direction, RoomGraph, RoomId};
use tracing::debug;

use crate::error::{GameError, GameResult};

/// Points awarded for each solved riddle.
pub const RIDDLE_POINTS: u32 = 10;

/// The player's state in a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    inventory: Vec<String>,
    location: Option<RoomId>,
    points: u32,
    solved: HashSet<String>,
}

impl Player {
    /// Create a player with empty pockets, no points, and no room yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inventory: Vec::new(),
            location: None,
            points: 0,
            solved: HashSet::new(),
        }
    }

    /// Create a player standing in `room`.
    pub fn at(name: impl Into<String>, room: RoomId) -> Self {
        let mut player = Self::new(name);
        player.location = Some(room);
        player
    }

    /// The player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Items held, in pickup order.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// Check if the player holds an item (case-insensitive).
    pub fn has_item(&self, item: &str) -> bool {
        let item = item.to_lowercase();
        self.inventory.iter().any(|i| i.to_lowercase() == item)
    }

    /// The room the player is in.
    pub fn location(&self) -> Option<RoomId> {
        self.location
    }

    /// Accumulated points.
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Check if the riddle with this question has been solved.
    pub fn has_solved(&self, question: &str) -> bool {
        self.solved.contains(question)
    }

    /// Number of riddles solved.
    pub fn solved_count(&self) -> usize {
        self.solved.len()
    }

    /// Move an item from the current room into the inventory.
    pub fn pick_up(&mut self, graph: &mut RoomGraph, item: &str) -> GameResult<String> {
        let room = self
            .location
            .and_then(|id| graph.room_mut(id))
            .ok_or(GameError::NoRoom)?;

        let taken = room
            .take_item(item)
            .ok_or_else(|| GameError::ItemNotFound(item.to_string()))?;

        debug!(item = %taken, room = %room.name, "item picked up");
        let message = format!("Picked up {taken}!");
        self.inventory.push(taken);
        Ok(message)
    }

    /// Walk through the exit in `direction`.
    pub fn move_to(&mut self, graph: &RoomGraph, direction: Direction) -> GameResult<String> {
        let current = self.location.ok_or(GameError::Lost)?;

        let (next, room) = graph
            .exit(current, direction)
            .and_then(|id| graph.room(id).map(|room| (id, room)))
            .ok_or(GameError::NoExit)?;

        self.location = Some(next);
        debug!(%direction, room = %room.name, "player moved");
        Ok(format!("Entered {}.\n{}", room.name, room.describe()))
    }

    /// Add points. Saturates rather than wrapping.
    pub fn award_points(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
    }

    /// Try to answer the riddle in the current room.
    ///
    /// A riddle pays out once; later attempts report it as already solved,
    /// even with the right answer.
    pub fn solve(&mut self, graph: &RoomGraph, answer: &str) -> GameResult<String> {
        let room = self
            .location
            .and_then(|id| graph.room(id))
            .ok_or(GameError::NoRoom)?;
        let riddle = room.riddle().ok_or(GameError::NoRiddle)?;

        if self.has_solved(riddle.question()) {
            return Err(GameError::AlreadySolved);
        }
        if !riddle.matches(answer) {
            return Err(GameError::WrongAnswer);
        }

        self.solved.insert(riddle.question().to_string());
        self.award_points(RIDDLE_POINTS);
        debug!(room = %room.name, points = self.points, "riddle solved");
        Ok(format!("Correct! Points: {}", self.points))
    }

    /// Inventory listing, or a note that it is empty.
    pub fn inventory_text(&self) -> String {
        if self.inventory.is_empty() {
            "Inventory is empty.".to_string()
        } else {
            format!("Inventory: {}", self.inventory.join(", "))
        }
    }
}
