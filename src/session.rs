//! Match driver: turn handling between a human and the computer (or two
//! humans), plus a running scoreboard across games.

use std::str::FromStr;

use tracing::{debug, info};

use crate::ai::{Difficulty, MoveSelector};
use crate::config::AppConfig;
use crate::error::SessionError;
use crate::game::{GameOutcome, GameState, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Two humans share the board
    Pvp,
    /// Human against the computer
    Pve,
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pvp" => Ok(GameMode::Pvp),
            "pve" => Ok(GameMode::Pve),
            other => Err(format!("unknown mode '{other}' (expected 'pve' or 'pvp')")),
        }
    }
}

/// Finished games per result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub red: u32,
    pub yellow: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Winner(Player::Red) => self.red += 1,
            GameOutcome::Winner(Player::Yellow) => self.yellow += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => {}
        }
    }

    pub fn games(&self) -> u32 {
        self.red + self.yellow + self.draws
    }
}

pub struct Session {
    state: GameState,
    mode: GameMode,
    difficulty: Difficulty,
    ai_player: Player,
    scores: Scoreboard,
    selector: MoveSelector,
}

impl Session {
    pub fn new(mode: GameMode, difficulty: Difficulty, ai_player: Player, selector: MoveSelector) -> Self {
        Session {
            state: GameState::initial(),
            mode,
            difficulty,
            ai_player,
            scores: Scoreboard::default(),
            selector,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.game.mode,
            config.game.difficulty,
            config.game.ai_player,
            MoveSelector::from_config(&config.ai),
        )
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn ai_player(&self) -> Player {
        self.ai_player
    }

    /// True when the computer should move next.
    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::Pve
            && !self.state.is_terminal()
            && self.state.current_player() == self.ai_player
    }

    /// Play a human move. Refused while the computer is to move.
    pub fn play(&mut self, column: usize) -> Result<GameOutcome, SessionError> {
        if self.is_ai_turn() {
            return Err(SessionError::NotYourTurn);
        }
        self.apply(column)
    }

    /// Let the computer choose and play its move. Returns the column played.
    pub fn play_ai(&mut self) -> Result<(usize, GameOutcome), SessionError> {
        if !self.is_ai_turn() {
            return Err(SessionError::NotAiTurn);
        }
        let column = self.selector.select_move(
            self.state.board(),
            self.ai_player,
            self.difficulty,
        )?;
        let outcome = self.apply(column)?;
        Ok((column, outcome))
    }

    fn apply(&mut self, column: usize) -> Result<GameOutcome, SessionError> {
        let player = self.state.current_player();
        self.state = self.state.make_move(column)?;
        debug!(player = player.name(), column, "move played");

        let outcome = self.state.outcome();
        if outcome.is_terminal() {
            self.scores.record(outcome);
            info!(
                ?outcome,
                red = self.scores.red,
                yellow = self.scores.yellow,
                draws = self.scores.draws,
                "game over"
            );
        }
        Ok(outcome)
    }

    /// Start a new game, keeping the scoreboard.
    pub fn reset_game(&mut self) {
        self.state = GameState::initial();
    }

    pub fn reset_scores(&mut self) {
        self.scores = Scoreboard::default();
    }
}
