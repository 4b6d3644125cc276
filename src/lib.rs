//! # Connect Four
//!
//! Rules engine for a Connect Four style game on a 7x6 grid. Tokens drop to
//! the lowest open row of a column; four in a row in any direction wins, and
//! an illegal move ends the game on the spot.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board state machine, lines, player tokens
//! - [`config`] — TOML configuration for the replay binary
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
