use super::line::{Position, WinningLine};
use super::{Board, LegalColumns, Player};
use crate::error::MoveError;

/// Result of a position, always derived from the board contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Winner(Player),
    Draw,
}

impl GameOutcome {
    /// Classify a board. Wins are checked before the draw rule because a full
    /// board can still hold a line.
    pub fn of(board: &Board) -> GameOutcome {
        if board.check_win(Player::Red).is_some() {
            GameOutcome::Winner(Player::Red)
        } else if board.check_win(Player::Yellow).is_some() {
            GameOutcome::Winner(Player::Yellow)
        } else if board.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    last_move: Option<Position>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Red, // Red starts
            last_move: None,
        }
    }

    /// Get current player. Once the game is over this is the player who
    /// made the final move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell filled by the most recent move.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn outcome(&self) -> GameOutcome {
        GameOutcome::of(&self.board)
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// The four cells that decided the game, if it was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.outcome() {
            GameOutcome::Winner(player) => self.board.check_win(player),
            _ => None,
        }
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> LegalColumns {
        if self.is_terminal() {
            return LegalColumns::new();
        }
        self.board.valid_columns()
    }

    /// Apply a move and return new state (immutable)
    pub fn make_move(&self, column: usize) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let (board, row) = self.board.drop(column, self.current_player)?;
        let next = GameState {
            board,
            current_player: self.current_player,
            last_move: Some(Position::new(row, column)),
        };

        if next.is_terminal() {
            Ok(next)
        } else {
            Ok(GameState {
                current_player: self.current_player.other(),
                ..next
            })
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
