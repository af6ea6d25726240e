//! CLI frontend for the Cavern riddle adventure.

mod commands;
mod logging;

use std::process;

use cavern_fiction::GameConfig;
use cavern_fiction::config::DEFAULT_PLAYER_NAME;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cavern",
    about = "Cavern — explore six rooms, collect items, and solve riddles",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive game (the default)
    Play {
        /// Name to greet the player with
        #[arg(short, long, default_value = DEFAULT_PLAYER_NAME)]
        name: String,

        /// Stop showing a riddle in the room description once it is solved
        #[arg(long)]
        hide_solved: bool,

        /// Disable coloured output
        #[arg(long)]
        no_color: bool,
    },

    /// Print a table of every room, its exits, items, and riddle
    Map,

    /// Print the world in a machine- or human-readable format
    Export {
        /// Output format: json, markdown
        #[arg(short, long, default_value = "json")]
        format: String,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Play {
        name: DEFAULT_PLAYER_NAME.to_string(),
        hide_solved: false,
        no_color: false,
    });

    let result = match command {
        Commands::Play {
            name,
            hide_solved,
            no_color,
        } => {
            if no_color {
                colored::control::set_override(false);
            }
            let config = GameConfig::default()
                .with_player_name(name)
                .with_hide_solved_riddles(hide_solved);
            commands::play::run(config)
        }
        Commands::Map => commands::map::run(),
        Commands::Export { format } => commands::export::run(&format),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
