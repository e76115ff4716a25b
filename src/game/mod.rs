//! Core Connect Four game logic: board representation, player types, win
//! lines and the game state machine with immutable transitions.

mod board;
mod line;
mod player;
mod state;

pub use board::{Board, Cell, LegalColumns, CENTER_COL, COLS, ROWS};
pub use line::{Direction, Position, WinningLine, WINNING_LENGTH};
pub use player::Player;
pub use state::{GameOutcome, GameState};

use crate::error::MoveError;

/// An empty standard 6x7 board.
pub fn initial_board() -> Board {
    Board::new()
}

/// Drop `player`'s token into `column` of a copy of `board`.
/// Returns the new board and the row the token landed in.
pub fn apply_move(board: &Board, column: usize, player: Player) -> Result<(Board, usize), MoveError> {
    board.drop(column, player)
}

/// The first four-in-a-row held by `player`, if any.
pub fn winner(board: &Board, player: Player) -> Option<WinningLine> {
    board.check_win(player)
}

/// Full board with no line for either player.
pub fn is_draw(board: &Board) -> bool {
    board.check_draw()
}
