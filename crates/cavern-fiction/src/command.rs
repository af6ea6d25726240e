//! Command parsing for player input.

use cavern_core::Direction;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move through an exit.
    Go {
        /// The direction to move; `None` if the argument wasn't a direction.
        direction: Option<Direction>,
    },
    /// Describe the current room.
    Look,
    /// Pick up an item.
    Take {
        /// The item name.
        item: String,
    },
    /// List inventory.
    Inventory,
    /// Answer the riddle in the current room.
    Solve {
        /// The candidate answer.
        answer: String,
    },
    /// Show help.
    Help,
    /// End the session.
    Quit,
    /// Unrecognized verb.
    Unknown {
        /// The normalized input.
        input: String,
    },
}

impl Command {
    /// The verb this command is spelled with, or `None` for unknown input.
    pub fn verb(&self) -> Option<&'static str> {
        match self {
            Self::Go { .. } => Some("go"),
            Self::Look => Some("look"),
            Self::Take { .. } => Some("take"),
            Self::Inventory => Some("inventory"),
            Self::Solve { .. } => Some("solve"),
            Self::Help => Some("help"),
            Self::Quit => Some("quit"),
            Self::Unknown { .. } => None,
        }
    }
}

/// Parse a player input string into a command.
///
/// The line is lower-cased and trimmed; everything before the first space is
/// the verb and everything after it, spacing included, is the argument.
/// Arguments aren't tokenized further, so `take gold coin` names the item
/// `gold coin`. `quit` takes no argument.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim().to_lowercase();
    let (verb, rest) = input.split_once(' ').unwrap_or((input.as_str(), ""));
    let rest = rest.to_string();

    match verb {
        "go" => Command::Go {
            direction: Direction::parse(&rest),
        },
        "look" => Command::Look,
        "take" => Command::Take { item: rest },
        "inventory" => Command::Inventory,
        "solve" => Command::Solve { answer: rest },
        "help" => Command::Help,
        "quit" if rest.is_empty() => Command::Quit,
        _ => Command::Unknown {
            input: input.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_go_direction() {
        assert_eq!(
            parse_command("go north"),
            Command::Go {
                direction: Some(Direction::North)
            }
        );
        assert_eq!(
            parse_command("  GO West "),
            Command::Go {
                direction: Some(Direction::West)
            }
        );
    }

    #[test]
    fn argument_keeps_inner_spacing() {
        assert_eq!(parse_command("go  west"), Command::Go { direction: None });
        assert_eq!(
            parse_command("take gold   coin"),
            Command::Take {
                item: "gold   coin".to_string()
            }
        );
    }

    #[test]
    fn parse_go_without_valid_direction() {
        assert_eq!(parse_command("go"), Command::Go { direction: None });
        assert_eq!(parse_command("go n"), Command::Go { direction: None });
        assert_eq!(parse_command("go up"), Command::Go { direction: None });
        assert_eq!(
            parse_command("go north east"),
            Command::Go { direction: None }
        );
    }

    #[test]
    fn bare_direction_is_not_a_verb() {
        assert_eq!(
            parse_command("north"),
            Command::Unknown {
                input: "north".to_string()
            }
        );
    }

    #[test]
    fn parse_look() {
        assert_eq!(parse_command("look"), Command::Look);
        assert_eq!(parse_command("LOOK"), Command::Look);
    }

    #[test]
    fn parse_take_keeps_multi_word_names() {
        assert_eq!(
            parse_command("take gold coin"),
            Command::Take {
                item: "gold coin".to_string()
            }
        );
        assert_eq!(
            parse_command("Take Ancient Book"),
            Command::Take {
                item: "ancient book".to_string()
            }
        );
        assert_eq!(
            parse_command("take"),
            Command::Take {
                item: String::new()
            }
        );
    }

    #[test]
    fn parse_solve() {
        assert_eq!(
            parse_command("solve KEYBOARD"),
            Command::Solve {
                answer: "keyboard".to_string()
            }
        );
        assert_eq!(
            parse_command("solve a key board"),
            Command::Solve {
                answer: "a key board".to_string()
            }
        );
    }

    #[test]
    fn parse_single_word_commands() {
        assert_eq!(parse_command("inventory"), Command::Inventory);
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("Quit"), Command::Quit);
    }

    #[test]
    fn quit_takes_no_argument() {
        assert_eq!(parse_command(" quit \n"), Command::Quit);
        assert_eq!(
            parse_command("quit now"),
            Command::Unknown {
                input: "quit now".to_string()
            }
        );
        assert_eq!(parse_command("quit the game").verb(), None);
    }

    #[test]
    fn no_synonyms() {
        for input in ["i", "inv", "get key", "l", "q", "exit"] {
            assert!(
                matches!(parse_command(input), Command::Unknown { .. }),
                "{input} should be unknown"
            );
        }
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            parse_command("Dance wildly"),
            Command::Unknown {
                input: "dance wildly".to_string()
            }
        );
        assert_eq!(
            parse_command("   "),
            Command::Unknown {
                input: String::new()
            }
        );
    }

    #[test]
    fn verbs() {
        assert_eq!(parse_command("go south").verb(), Some("go"));
        assert_eq!(parse_command("solve 42").verb(), Some("solve"));
        assert_eq!(parse_command("dance").verb(), None);
    }
}
