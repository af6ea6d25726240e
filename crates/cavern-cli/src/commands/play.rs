//! The interactive game loop.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use tracing::info;

use cavern_fiction::{Command, GameConfig, Session, parse_command};

/// Play a game on stdin/stdout.
pub fn run(config: GameConfig) -> Result<(), String> {
    let mut session = Session::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(&mut session, stdin.lock(), stdout.lock()).map_err(|e| e.to_string())?;
    info!(points = session.points(), "game over");
    Ok(())
}

/// Drive a session from a line source to a line sink until `quit` or EOF.
pub fn run_loop<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    let welcome = session.start().map_err(io::Error::other)?;
    writeln!(output, "{welcome}")?;
    writeln!(output, "Type 'help' for commands.")?;

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // EOF
            writeln!(output)?;
            writeln!(output, "{}", session.farewell().bold())?;
            break;
        }

        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Command::Quit => {
                writeln!(output, "{}", session.farewell().bold())?;
                break;
            }
            command => match session.execute(command) {
                Ok(response) => writeln!(output, "{response}")?,
                Err(e) => writeln!(output, "{}", e.to_string().yellow())?,
            },
        }
    }

    Ok(())
}
