use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use connect_four::config::AppConfig;
use connect_four::game::Board;

/// Replay a list of column moves and print the resulting grid.
#[derive(Parser)]
#[command(name = "connect-four", about = "Replay Connect Four moves")]
struct Cli {
    /// Column indices to play in order; read from stdin when omitted
    #[arg(allow_negative_numbers = true)]
    moves: Vec<isize>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Log filter, e.g. "info" or "debug"; overrides RUST_LOG when given.
    /// Without it RUST_LOG applies, defaulting to "warn"
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref());

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let moves = if cli.moves.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("reading moves from stdin")?;
        parse_moves(&input)?
    } else {
        cli.moves
    };

    let stdout = io::stdout();
    replay(&config, &moves, &mut stdout.lock())?;
    Ok(())
}

fn init_logging(filter: Option<&str>) {
    let mut builder = match filter {
        Some(filter) => {
            let mut builder = env_logger::Builder::new();
            builder.parse_filters(filter);
            builder
        }
        None => env_logger::Builder::from_env(Env::default().default_filter_or("warn")),
    };
    builder.init();
}

/// Play `moves` on a fresh board, writing the grids and outcome line that
/// `config.display` asks for. Illegal moves end the game but are not errors.
fn replay<W: Write>(config: &AppConfig, moves: &[isize], out: &mut W) -> Result<Board> {
    if moves.len() > config.replay.max_moves {
        bail!(
            "{} moves given, limit is {} (replay.max_moves)",
            moves.len(),
            config.replay.max_moves
        );
    }
    info!("replaying {} moves", moves.len());

    let mut board = Board::new();
    for (turn, &column) in moves.iter().enumerate() {
        board.place_token(column);
        if config.display.show_every_move {
            writeln!(out, "move {}: column {}\n{}\n", turn + 1, column, board)?;
        }
    }

    writeln!(out, "{board}")?;
    if config.display.announce_outcome {
        writeln!(out, "{}", outcome_line(&board))?;
    }

    Ok(board)
}

/// One-line summary of how the game ended, or whose turn it is
fn outcome_line(board: &Board) -> String {
    match board.outcome() {
        Some(outcome) => outcome.to_string(),
        None => format!("in progress, {} to move", board.current_player().symbol()),
    }
}

/// Parse column indices separated by whitespace or commas.
fn parse_moves(input: &str) -> Result<Vec<isize>> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<isize>()
                .with_context(|| format!("invalid column '{token}'"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect_four::config::{DisplayConfig, ReplayConfig};
    use connect_four::error::MoveError;
    use connect_four::game::{GameOutcome, Player};

    fn config(show_every_move: bool, announce_outcome: bool, max_moves: usize) -> AppConfig {
        AppConfig {
            display: DisplayConfig {
                show_every_move,
                announce_outcome,
            },
            replay: ReplayConfig { max_moves },
        }
    }

    fn replay_to_string(config: &AppConfig, moves: &[isize]) -> (Board, String) {
        let mut out = Vec::new();
        let board = replay(config, moves, &mut out).unwrap();
        (board, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_replay_rejects_too_many_moves() {
        let mut out = Vec::new();
        let err = replay(&config(false, true, 3), &[0, 1, 2, 3], &mut out).unwrap_err();
        assert_eq!(err.to_string(), "4 moves given, limit is 3 (replay.max_moves)");
        assert!(out.is_empty());
    }

    #[test]
    fn test_replay_accepts_exactly_max_moves() {
        let (board, _) = replay_to_string(&config(false, true, 3), &[0, 1, 2]);
        assert!(!board.is_game_ended());
        assert_eq!(board.column_height(2), 1);
    }

    #[test]
    fn test_replay_illegal_move_is_not_an_error() {
        let (board, text) = replay_to_string(&AppConfig::default(), &[9, 3]);
        assert_eq!(
            board.outcome(),
            Some(GameOutcome::Forfeit {
                player: Player::O,
                reason: MoveError::InvalidColumn(9),
            })
        );
        assert_eq!(board.column_height(3), 0);
        assert!(text.ends_with("\nO forfeits: column 9 is outside the board\n"));
    }

    #[test]
    fn test_replay_prints_final_grid_and_outcome() {
        let (board, text) = replay_to_string(&AppConfig::default(), &[3, 2, 3, 2, 3, 2, 3]);
        assert_eq!(text, format!("{}\nO wins\n", board.render()));
    }

    #[test]
    fn test_replay_without_outcome_line() {
        let (board, text) = replay_to_string(&config(false, false, 10), &[3]);
        assert_eq!(text, format!("{}\n", board.render()));
    }

    #[test]
    fn test_replay_shows_every_move() {
        let (_, text) = replay_to_string(&config(true, true, 10), &[3, 4]);
        assert!(text.starts_with("move 1: column 3\n"));
        assert!(text.contains("\n\nmove 2: column 4\n"));
        assert!(text.ends_with("\nin progress, O to move\n"));
        assert_eq!(text.matches("move ").count(), 2);
    }

    #[test]
    fn test_outcome_line_in_progress() {
        let mut board = Board::new();
        assert_eq!(outcome_line(&board), "in progress, O to move");
        board.place_token(0);
        assert_eq!(outcome_line(&board), "in progress, X to move");
    }

    #[test]
    fn test_parse_moves_mixed_separators() {
        assert_eq!(parse_moves("3, 2,3\n2 -1").unwrap(), vec![3, 2, 3, 2, -1]);
    }

    #[test]
    fn test_parse_moves_empty_input() {
        assert!(parse_moves("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_moves_rejects_garbage() {
        let err = parse_moves("3 four 5").unwrap_err();
        assert_eq!(err.to_string(), "invalid column 'four'");
    }

    #[test]
    fn test_cli_accepts_negative_columns() {
        let cli = Cli::try_parse_from(["connect-four", "3", "-1", "--log", "debug"]).unwrap();
        assert_eq!(cli.moves, vec![3, -1]);
        assert_eq!(cli.log.as_deref(), Some("debug"));
        assert_eq!(cli.config, PathBuf::from("connect-four.toml"));
    }

    #[test]
    fn test_cli_log_filter_is_optional() {
        let cli = Cli::try_parse_from(["connect-four", "0"]).unwrap();
        assert_eq!(cli.log, None);
    }
}
