use std::fmt;

use log::{debug, info};

use super::column::Column;
use super::lines::{self, CONNECT};
use super::{GameOutcome, Player};
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    O,
    X,
}

impl Cell {
    /// Symbol used when rendering; a single space for an empty cell
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::O => Player::O.symbol(),
            Cell::X => Player::X.symbol(),
        }
    }

    /// The player owning this cell's token, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::O => Some(Player::O),
            Cell::X => Some(Player::X),
        }
    }
}

/// The game state machine: grid, turn order and terminal state.
///
/// Any attempt to play outside the grid or into a full column ends the game
/// instead of being ignored. Once ended, the board never changes again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: [Column; COLS],
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            columns: [Column::new(); COLS],
            current_player: Player::FIRST,
            outcome: None,
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the bottom, row 5 is the top
    ///
    /// Panics if `col >= COLS` or `row >= ROWS`.
    pub fn get(&self, col: usize, row: usize) -> Cell {
        self.columns[col].get(row)
    }

    /// Player whose token the next valid placement drops
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Number of tokens in a column; 0 for a column outside the grid
    pub fn column_height(&self, col: usize) -> usize {
        self.columns.get(col).map_or(0, Column::len)
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.columns.get(col).map_or(true, Column::is_full)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.columns.iter().all(Column::is_full)
    }

    /// Whether a win or an illegal move has ended the game
    pub fn is_game_ended(&self) -> bool {
        self.outcome.is_some()
    }

    /// Why the game ended, or `None` while it is still in progress
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Drop the current player's token into `column`.
    ///
    /// Does nothing once the game has ended. An out-of-range or full column
    /// ends the game as a forfeit without touching the grid. Otherwise the
    /// token lands on top of the column, the turn passes, and a
    /// four-in-a-row anywhere on the board ends the game.
    pub fn place_token(&mut self, column: isize) {
        if self.is_game_ended() {
            debug!("ignoring move in column {column}: game already ended");
            return;
        }

        let col = match self.validate(column) {
            Ok(col) => col,
            Err(reason) => {
                debug!("{} played an illegal move: {reason}", self.current_player.symbol());
                self.end(GameOutcome::Forfeit {
                    player: self.current_player,
                    reason,
                });
                return;
            }
        };

        let mover = self.current_player;
        let Some(row) = self.columns[col].push(mover.to_cell()) else {
            unreachable!("validated column {col} should have room");
        };
        debug!("{} dropped into column {col}, row {row}", mover.symbol());
        self.current_player = mover.other();

        if let Some(winner) = self.winner() {
            self.end(GameOutcome::Winner(winner));
        }
    }

    /// Whether any line on the board holds four identical tokens in a row
    pub fn has_connect_four(&self) -> bool {
        self.winner().is_some()
    }

    /// Owner of the first four-in-a-row found by a scan of the whole board
    pub fn winner(&self) -> Option<Player> {
        lines::all_lines(self)
            .iter()
            .find_map(|line| lines::find_run(line, CONNECT))
            .and_then(Cell::player)
    }

    /// Text grid, top row first: one `|c|c|...|` line per row
    pub fn render(&self) -> String {
        (0..ROWS)
            .rev()
            .map(|row| {
                let mut line = String::with_capacity(2 * COLS + 1);
                line.push('|');
                for col in 0..COLS {
                    line.push(self.get(col, row).symbol());
                    line.push('|');
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn validate(&self, column: isize) -> Result<usize, MoveError> {
        let col = usize::try_from(column)
            .ok()
            .filter(|&col| col < COLS)
            .ok_or(MoveError::InvalidColumn(column))?;

        if self.columns[col].is_full() {
            return Err(MoveError::ColumnFull(col));
        }
        Ok(col)
    }

    fn end(&mut self, outcome: GameOutcome) {
        info!("game over: {outcome}");
        self.outcome = Some(outcome);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
