//! Configuration for a game session.

/// Name used for the player when none is configured.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Name the player is greeted with.
    pub player_name: String,
    /// Leave the riddle line out of a room's description once it is solved.
    pub hide_solved_riddles: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            hide_solved_riddles: false,
        }
    }
}

impl GameConfig {
    /// Set the player name. Blank names fall back to the default.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        let name = name.trim();
        self.player_name = if name.is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            name.to_string()
        };
        self
    }

    /// Set whether solved riddles are hidden from room descriptions.
    pub fn with_hide_solved_riddles(mut self, hide: bool) -> Self {
        self.hide_solved_riddles = hide;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.player_name, "Player");
        assert!(!cfg.hide_solved_riddles);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_player_name("Ada")
            .with_hide_solved_riddles(true);
        assert_eq!(cfg.player_name, "Ada");
        assert!(cfg.hide_solved_riddles);
    }

    #[test]
    fn blank_name_falls_back() {
        let cfg = GameConfig::default().with_player_name("   ");
        assert_eq!(cfg.player_name, DEFAULT_PLAYER_NAME);
        let cfg = GameConfig::default().with_player_name("  Ada ");
        assert_eq!(cfg.player_name, "Ada");
    }
}
