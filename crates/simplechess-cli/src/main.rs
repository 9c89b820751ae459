//! simplechess - terminal front end for the simplified chess rules engine.
//!
//! Prints boards, legal moves, position status and perft counts, and runs an
//! interactive game on stdin. Squares are `(row, col)` pairs with row 0 at the
//! top of the board, the side Black starts on.

mod config;
mod play;
mod report;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use config::Config;
use report::{DivideEntry, MovesReport, PerftReport, StatusReport};
use simplechess_core::{format_position, parse_position, Board, Color, Square};
use simplechess_engine::{
    game_status, generate_legal_moves, legal_moves_from, perft, perft_divide, Game,
    SimplifiedRules,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Simplified chess rules engine.
#[derive(Parser)]
#[command(name = "simplechess", version)]
#[command(about = "Simplified chess rules engine")]
struct Cli {
    /// Path to the configuration file (default: simplechess.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct PositionArg {
    /// Position string, e.g. "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"
    #[arg(short, long)]
    position: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the board, the side to move and the status
    Show {
        #[command(flatten)]
        position: PositionArg,
    },
    /// List legal moves
    Moves {
        #[command(flatten)]
        position: PositionArg,
        /// Only list moves starting on this square
        #[arg(long, num_args = 2, value_names = ["ROW", "COL"])]
        from: Option<Vec<u8>>,
        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },
    /// Print the status of the position: Normal, Check, Checkmate or Stalemate
    Status {
        #[command(flatten)]
        position: PositionArg,
        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },
    /// Count move-tree leaves to the given depth
    Perft {
        #[command(flatten)]
        position: PositionArg,
        /// Search depth in plies
        #[arg(short, long)]
        depth: u32,
        /// Show the count below each root move
        #[arg(long)]
        divide: bool,
        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },
    /// Play a game on the terminal
    Play {
        #[command(flatten)]
        position: PositionArg,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .with_context(|| format!("invalid log_filter '{}'", config.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Show { position } => {
            let (board, side) = resolve_position(&position, &config)?;
            print!("{}", board);
            println!("Side to move: {}", side);
            println!("Status: {}", game_status(&board, side));
        }
        Commands::Moves {
            position,
            from,
            json,
        } => {
            let (board, side) = resolve_position(&position, &config)?;
            let from = from.map(|coords| square_arg(&coords)).transpose()?;
            let moves = match from {
                Some(sq) => legal_moves_from(&board, side, sq),
                None => generate_legal_moves(&board, side),
            };
            if json || config.json {
                let report = MovesReport::new(&board, side, from, &moves);
                println!("{}", report::to_json(&report)?);
            } else {
                for m in &moves {
                    println!("{}", m);
                }
                println!("{} legal moves", moves.len());
            }
        }
        Commands::Status { position, json } => {
            let (board, side) = resolve_position(&position, &config)?;
            let status = game_status(&board, side);
            if json || config.json {
                let legal = generate_legal_moves(&board, side).len();
                let report = StatusReport::new(&board, side, status, legal);
                println!("{}", report::to_json(&report)?);
            } else {
                match status.result(side) {
                    Some(result) => println!("{} ({})", status, result),
                    None => println!("{}", status),
                }
            }
        }
        Commands::Perft {
            position,
            depth,
            divide,
            json,
        } => {
            let (board, side) = resolve_position(&position, &config)?;
            run_perft(&board, side, depth, divide, json || config.json)?;
        }
        Commands::Play { position } => {
            let (board, side) = resolve_position(&position, &config)?;
            let mut game = Game::from_board(SimplifiedRules, board, side);
            tracing::info!(position = %format_position(&board, side), "starting game");
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            play::run(&mut game, stdin.lock(), &mut stdout)?;
        }
    }

    Ok(())
}

/// Loads the configuration. An explicitly named file must exist.
fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            Config::load_from(path).with_context(|| format!("loading {}", path.display()))
        }
        None => Config::load().context("loading simplechess.toml"),
    }
}

fn resolve_position(arg: &PositionArg, config: &Config) -> anyhow::Result<(Board, Color)> {
    let text = arg.position.as_deref().unwrap_or(&config.start_position);
    parse_position(text).with_context(|| format!("invalid position '{}'", text))
}

fn square_arg(coords: &[u8]) -> anyhow::Result<Square> {
    match *coords {
        [row, col] => Square::new(row, col)
            .with_context(|| format!("square ({},{}) is off the board", row, col)),
        _ => bail!("expected ROW COL, got {} values", coords.len()),
    }
}

fn run_perft(
    board: &Board,
    side: Color,
    depth: u32,
    divide: bool,
    json: bool,
) -> anyhow::Result<()> {
    tracing::info!(depth, divide, "running perft");
    let position = format_position(board, side);

    if divide {
        let entries = perft_divide(board, side, depth);
        let nodes = if depth == 0 {
            1
        } else {
            entries.iter().map(|&(_, n)| n).sum()
        };
        if json {
            let report = PerftReport {
                position,
                depth,
                nodes,
                divide: Some(
                    entries
                        .into_iter()
                        .map(|(m, nodes)| DivideEntry {
                            mov: m.into(),
                            nodes,
                        })
                        .collect(),
                ),
            };
            println!("{}", report::to_json(&report)?);
        } else {
            for (m, n) in &entries {
                println!("{}: {}", m, n);
            }
            println!();
            println!("Nodes: {}", nodes);
        }
    } else {
        let nodes = perft(board, side, depth);
        if json {
            let report = PerftReport {
                position,
                depth,
                nodes,
                divide: None,
            };
            println!("{}", report::to_json(&report)?);
        } else {
            println!("Nodes: {}", nodes);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_moves_from_square() {
        let cli =
            Cli::try_parse_from(["simplechess", "moves", "--from", "7", "1", "--json"]).unwrap();
        match cli.command {
            Commands::Moves { from, json, .. } => {
                assert_eq!(from, Some(vec![7, 1]));
                assert!(json);
            }
            _ => panic!("Expected moves command"),
        }
    }

    #[test]
    fn parses_global_config_after_subcommand() {
        let cli = Cli::try_parse_from([
            "simplechess",
            "perft",
            "--depth",
            "3",
            "--config",
            "other.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("other.toml")));
        assert!(matches!(cli.command, Commands::Perft { depth: 3, .. }));
    }

    #[test]
    fn resolve_position_prefers_argument() {
        let config = Config::default();
        let arg = PositionArg {
            position: Some("4k3/8/8/8/8/8/8/4K3 b".to_string()),
        };
        let (_, side) = resolve_position(&arg, &config).unwrap();
        assert_eq!(side, Color::Black);

        let (board, side) = resolve_position(&PositionArg { position: None }, &config).unwrap();
        assert_eq!(side, Color::White);
        assert_eq!(board, Board::startpos());
    }

    #[test]
    fn resolve_position_reports_parse_errors() {
        let arg = PositionArg {
            position: Some("8/8 w".to_string()),
        };
        let err = resolve_position(&arg, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("invalid position"));
    }

    #[test]
    fn square_arg_checks_bounds() {
        assert_eq!(square_arg(&[7, 1]).unwrap(), Square::new(7, 1).unwrap());
        assert!(square_arg(&[8, 0]).is_err());
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(dir.path().join("missing.toml").as_path())).is_err());
    }
}
