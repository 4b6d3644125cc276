//! Core Connect Four game logic: the board state machine, its fixed-capacity
//! columns, line extraction for win detection, and the player tokens.

mod board;
mod column;
mod lines;
mod outcome;
mod player;

pub use board::{Board, Cell, COLS, ROWS};
pub use outcome::GameOutcome;
pub use player::Player;
