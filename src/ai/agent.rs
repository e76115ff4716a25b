use crate::error::SelectError;
use crate::game::GameState;

use super::selector::{Difficulty, MoveSelector};

/// Universal interface for automated players.
pub trait Agent {
    /// Select a column for the side to move in `state`.
    fn select_action(&mut self, state: &GameState) -> Result<usize, SelectError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Agent backed by the tactical shortcut and minimax search.
pub struct MinimaxAgent {
    selector: MoveSelector,
    difficulty: Difficulty,
}

impl MinimaxAgent {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_selector(MoveSelector::new(), difficulty)
    }

    pub fn with_selector(selector: MoveSelector, difficulty: Difficulty) -> Self {
        MinimaxAgent {
            selector,
            difficulty,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, SelectError> {
        if state.is_terminal() {
            return Err(SelectError::NoValidMoves);
        }
        self.selector
            .select_move(state.board(), state.current_player(), self.difficulty)
    }

    fn name(&self) -> &str {
        match self.difficulty {
            Difficulty::Easy => "Minimax (easy)",
            Difficulty::Hard => "Minimax (hard)",
        }
    }
}
