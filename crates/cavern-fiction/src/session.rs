//! Game session management: the command interpreter.

use cavern_core::{RoomGraph, RoomId};
use tracing::{debug, trace};

use crate::command::{Command, parse_command};
use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::player::Player;

/// Help text listing every command.
pub const HELP_TEXT: &str = "Commands: 'go <direction>', 'look', 'take <item>', 'inventory', 'solve <answer>', 'quit'";

/// A game in progress: the world and the one player exploring it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// The room graph, including items still lying around.
    pub graph: RoomGraph,
    /// The player.
    pub player: Player,
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GameState {
    /// No world has been built yet.
    #[default]
    NotStarted,
    /// A game is in progress.
    Running(Game),
}

/// An interactive game session.
///
/// Each session owns its own world and player, so any number of them can
/// exist side by side.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: GameConfig,
    state: GameState,
}

impl Session {
    /// Create a session that hasn't started yet.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            state: GameState::NotStarted,
        }
    }

    /// Build a fresh world, place the player in the start room, and greet them.
    ///
    /// Starting an already running session throws the old game away.
    pub fn start(&mut self) -> GameResult<String> {
        let (graph, start) = cavern_core::build()?;
        let player = Player::at(self.config.player_name.clone(), start);
        debug!(player = %player.name(), rooms = graph.len(), "session started");

        self.state = GameState::Running(Game { graph, player });
        let description = self.describe_current()?;
        Ok(format!("Welcome, {}!\n{description}", self.config.player_name))
    }

    /// The lifecycle state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether a game is in progress.
    pub fn is_running(&self) -> bool {
        matches!(self.state, GameState::Running(_))
    }

    /// The running game, if any.
    pub fn game(&self) -> Option<&Game> {
        match &self.state {
            GameState::Running(game) => Some(game),
            GameState::NotStarted => None,
        }
    }

    /// The player, if a game is running.
    pub fn player(&self) -> Option<&Player> {
        self.game().map(|g| &g.player)
    }

    /// The room graph, if a game is running.
    pub fn graph(&self) -> Option<&RoomGraph> {
        self.game().map(|g| &g.graph)
    }

    /// Points scored so far; zero before the game starts.
    pub fn points(&self) -> u32 {
        self.player().map_or(0, Player::points)
    }

    /// Closing line for when the player quits.
    pub fn farewell(&self) -> String {
        format!("Goodbye! Final Points: {}", self.points())
    }

    /// Process a line of input and return the response text.
    ///
    /// Never fails: rejected commands produce their explanation as text.
    pub fn process(&mut self, input: &str) -> String {
        let command = parse_command(input);
        match self.execute(command) {
            Ok(output) => output,
            Err(e) => e.to_string(),
        }
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> GameResult<String> {
        trace!(verb = command.verb().unwrap_or("?"), ?command, "executing command");
        let hide_solved = self.config.hide_solved_riddles;
        let farewell = self.farewell();
        let GameState::Running(game) = &mut self.state else {
            return Err(GameError::NotStarted);
        };
        let Game { graph, player } = game;

        match command {
            Command::Go { direction } => {
                let direction = direction.ok_or(GameError::NoExit)?;
                let entered = player.move_to(graph, direction)?;
                if !hide_solved {
                    return Ok(entered);
                }
                // Re-render with the solved riddle left out.
                let room = describe(graph, player, hide_solved)?;
                let name = player
                    .location()
                    .and_then(|id| graph.room(id))
                    .map(|r| r.name.as_str())
                    .unwrap_or_default();
                Ok(format!("Entered {name}.\n{room}"))
            }
            Command::Look => describe(graph, player, hide_solved),
            Command::Take { item } => player.pick_up(graph, &item),
            Command::Inventory => Ok(player.inventory_text()),
            Command::Solve { answer } => player.solve(graph, &answer),
            Command::Help => Ok(HELP_TEXT.to_string()),
            Command::Quit => Ok(farewell),
            Command::Unknown { input } => Err(GameError::UnknownCommand(input)),
        }
    }

    /// Describe the player's current room.
    pub fn describe_current(&self) -> GameResult<String> {
        let game = self.game().ok_or(GameError::NotStarted)?;
        describe(&game.graph, &game.player, self.config.hide_solved_riddles)
    }

    /// The player's current room ID.
    pub fn current_room(&self) -> Option<RoomId> {
        self.player().and_then(Player::location)
    }
}

fn describe(graph: &RoomGraph, player: &Player, hide_solved: bool) -> GameResult<String> {
    let room = player
        .location()
        .and_then(|id| graph.room(id))
        .ok_or(GameError::NoRoom)?;
    let solved = room
        .riddle()
        .is_some_and(|r| player.has_solved(r.question()));
    Ok(room.describe_with(!(hide_solved && solved)))
}
