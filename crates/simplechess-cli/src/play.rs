//! Line-oriented interactive play on a terminal.
//!
//! Each input line is one command:
//!
//! - `ROW COL ROW COL` plays a move, e.g. `6 4 4 4`
//! - `moves ROW COL` lists the legal moves of the piece on a square
//! - `moves` lists every legal move
//! - `board` prints the board again
//! - `restart` returns to the starting position
//! - `help` lists the commands
//! - `quit` exits
//!
//! Coordinates may also be separated by commas.

use simplechess_core::{Move, Square};
use simplechess_engine::{Game, GameStatus, MoveList};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Move),
    Moves(Option<Square>),
    Board,
    Restart,
    Help,
    Quit,
}

/// Errors from parsing an input line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),
    #[error("'{0}' is not a coordinate between 0 and 7")]
    InvalidCoordinate(String),
    #[error("expected {expected} coordinates, got {got}")]
    WrongArity { expected: usize, got: usize },
    #[error("origin and destination are the same square")]
    NullMove,
}

const HELP: &str = "\
Commands:
  ROW COL ROW COL   play a move, e.g. 6 4 4 4
  moves             list every legal move
  moves ROW COL     list legal moves of the piece on a square
  board             print the board
  restart           start over
  help              show this list
  quit              leave";

fn parse_coord(token: &str) -> Result<u8, CommandError> {
    token
        .parse::<u8>()
        .ok()
        .filter(|&v| v < 8)
        .ok_or_else(|| CommandError::InvalidCoordinate(token.to_string()))
}

fn parse_square(row: &str, col: &str) -> Result<Square, CommandError> {
    let (row, col) = (parse_coord(row)?, parse_coord(col)?);
    Square::new(row, col).ok_or_else(|| CommandError::InvalidCoordinate(format!("{row},{col}")))
}

/// Parses one input line.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let tokens: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    let Some((&first, rest)) = tokens.split_first() else {
        return Err(CommandError::Empty);
    };

    match first.to_ascii_lowercase().as_str() {
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "restart" => Ok(Command::Restart),
        "board" | "show" => Ok(Command::Board),
        "help" | "?" => Ok(Command::Help),
        "moves" => match rest {
            [] => Ok(Command::Moves(None)),
            [row, col] => Ok(Command::Moves(Some(parse_square(row, col)?))),
            _ => Err(CommandError::WrongArity {
                expected: 2,
                got: rest.len(),
            }),
        },
        _ if first.starts_with(|c: char| c.is_ascii_digit()) => match tokens.as_slice() {
            [r1, c1, r2, c2] => {
                let from = parse_square(r1, c1)?;
                let to = parse_square(r2, c2)?;
                Move::new(from, to).map(Command::Play).ok_or(CommandError::NullMove)
            }
            _ => Err(CommandError::WrongArity {
                expected: 4,
                got: tokens.len(),
            }),
        },
        _ => Err(CommandError::Unknown(first.to_string())),
    }
}

fn write_moves<W: Write>(out: &mut W, moves: &MoveList) -> io::Result<()> {
    if moves.is_empty() {
        return writeln!(out, "No legal moves.");
    }
    let list: Vec<String> = moves.iter().map(ToString::to_string).collect();
    writeln!(out, "{} legal moves: {}", moves.len(), list.join(" "))
}

fn write_position<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    write!(out, "{}", game.board())?;
    writeln!(out, "{} to move", game.side_to_move())
}

fn write_status<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    match game.status() {
        GameStatus::Normal => Ok(()),
        GameStatus::Check => writeln!(out, "Check!"),
        status @ (GameStatus::Checkmate | GameStatus::Stalemate) => {
            match game.result() {
                Some(result) => writeln!(out, "{}. {}.", status, result)?,
                None => writeln!(out, "{}.", status)?,
            }
            writeln!(out, "Type 'restart' to play again or 'quit' to leave.")
        }
    }
}

/// Runs the interactive loop until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(game: &mut Game, input: R, out: &mut W) -> io::Result<()> {
    write_position(out, game)?;
    write_status(out, game)?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                writeln!(out, "Error: {}", err)?;
                continue;
            }
        };
        tracing::debug!(?command, "command");

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Board => {
                write_position(out, game)?;
                write_status(out, game)?;
            }
            Command::Restart => {
                game.restart();
                write_position(out, game)?;
                write_status(out, game)?;
            }
            Command::Moves(None) => write_moves(out, &game.legal_moves())?,
            Command::Moves(Some(sq)) => write_moves(out, &game.legal_moves_from(sq))?,
            Command::Play(m) => match game.play(m) {
                Ok(_) => {
                    write_position(out, game)?;
                    write_status(out, game)?;
                }
                Err(err) => writeln!(out, "Rejected: {}", err)?,
            },
        }
        out.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(r1: u8, c1: u8, r2: u8, c2: u8) -> Move {
        Move::from_coords(r1, c1, r2, c2).unwrap()
    }

    fn run_script(game: &mut Game, script: &str) -> String {
        let mut out = Vec::new();
        run(game, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_move() {
        assert_eq!(parse_command("6 4 4 4"), Ok(Command::Play(mv(6, 4, 4, 4))));
        assert_eq!(parse_command("  6,4  4,4 "), Ok(Command::Play(mv(6, 4, 4, 4))));
    }

    #[test]
    fn parse_keywords() {
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command("Restart"), Ok(Command::Restart));
        assert_eq!(parse_command("board"), Ok(Command::Board));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("moves"), Ok(Command::Moves(None)));
        assert_eq!(
            parse_command("moves 7 1"),
            Ok(Command::Moves(Square::new(7, 1)))
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse_command("   "), Err(CommandError::Empty));
        assert_eq!(
            parse_command("castle"),
            Err(CommandError::Unknown("castle".to_string()))
        );
        assert_eq!(
            parse_command("6 4 8 4"),
            Err(CommandError::InvalidCoordinate("8".to_string()))
        );
        assert_eq!(
            parse_command("6 4 -1 4"),
            Err(CommandError::InvalidCoordinate("-1".to_string()))
        );
        assert_eq!(
            parse_command("6 4 4"),
            Err(CommandError::WrongArity {
                expected: 4,
                got: 3
            })
        );
        assert_eq!(
            parse_command("moves 7"),
            Err(CommandError::WrongArity {
                expected: 2,
                got: 1
            })
        );
        assert_eq!(parse_command("6 4 6 4"), Err(CommandError::NullMove));
    }

    #[test]
    fn plays_moves_and_reports_mate() {
        let mut game = Game::new();
        let output = run_script(&mut game, "6 5 5 5\n1 4 3 4\n6 6 4 6\n0 3 4 7\n");
        assert!(output.contains("Checkmate. Black wins."));
        assert!(game.is_over());
        assert_eq!(game.ply_count(), 4);
    }

    #[test]
    fn reports_check() {
        let mut game = Game::from_position("4k3/8/8/8/8/8/8/R3K3 w").unwrap();
        let output = run_script(&mut game, "7 0 0 0\n");
        assert!(output.contains("Check!"));
    }

    #[test]
    fn illegal_moves_do_not_end_the_session() {
        let mut game = Game::new();
        let output = run_script(&mut game, "6 4 3 4\nbogus\n6 4 4 4\n");
        assert!(output.contains("Rejected: illegal move: (6,4)-(3,4)"));
        assert!(output.contains("Error: unknown command 'bogus'"));
        assert_eq!(game.ply_count(), 1);
    }

    #[test]
    fn help_lists_every_command() {
        let mut game = Game::new();
        let output = run_script(&mut game, "help\n");
        for line in [
            "ROW COL ROW COL",
            "moves  ",
            "moves ROW COL",
            "board",
            "restart",
            "help",
            "quit",
        ] {
            assert!(output.contains(line), "missing {line:?}");
        }
        // Every keyword in the listing is accepted by the parser.
        for word in ["moves", "board", "restart", "help", "quit"] {
            assert!(parse_command(word).is_ok(), "{word}");
        }
    }

    #[test]
    fn quit_stops_reading() {
        let mut game = Game::new();
        run_script(&mut game, "quit\n6 4 4 4\n");
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn lists_moves_from_square() {
        let mut game = Game::new();
        let output = run_script(&mut game, "moves 7 1\nmoves 4 4\n");
        assert!(output.contains("2 legal moves: (7,1)-(5,0) (7,1)-(5,2)"));
        assert!(output.contains("No legal moves."));
    }

    #[test]
    fn restart_resets_the_game() {
        let mut game = Game::new();
        run_script(&mut game, "6 4 4 4\nrestart\n");
        assert_eq!(game.ply_count(), 0);
        assert_eq!(game.to_position_string(), simplechess_core::STARTPOS);
    }
}
