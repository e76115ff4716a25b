//! # Connect Four
//!
//! Connect Four rules engine with a computer opponent built on minimax search
//! with alpha-beta pruning and a sliding-window position heuristic.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win lines, state machine
//! - [`ai`] — Heuristic, minimax search, move selector and agents
//! - [`session`] — Match driver with turn handling and scoreboard
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//!
//! ## Example
//!
//! ```
//! use connect_four::{apply_move, initial_board, select_move, winner, Difficulty, Player};
//!
//! let board = initial_board();
//! let (board, row) = apply_move(&board, 3, Player::Red).unwrap();
//! assert_eq!(row, 5);
//! assert!(winner(&board, Player::Red).is_none());
//!
//! let reply = select_move(&board, Player::Yellow, Difficulty::Easy).unwrap();
//! assert!(board.valid_columns().contains(&reply));
//! ```

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod session;

pub use ai::{select_move, Difficulty, MoveSelector};
pub use error::{MoveError, SelectError};
pub use game::{apply_move, initial_board, is_draw, winner, Board, Player, WinningLine};
