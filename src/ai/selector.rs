//! Move selection for the computer player.
//!
//! Both difficulties share the same tactical shortcut, tried in this order:
//!
//! 1. **Immediate win**: the first column that completes a line for us
//! 2. **Block**: the first column where the opponent would complete a line
//!
//! After that, [`Difficulty::Easy`] takes the center column or a random one,
//! and [`Difficulty::Hard`] runs a minimax search from every candidate.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::config::AiConfig;
use crate::error::SelectError;
use crate::game::{Board, Player, CENTER_COL};

use super::minimax::{center_first, Searcher};

/// Strength of the computer player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Hard,
}

impl Difficulty {
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{other}' (expected 'easy' or 'hard')")),
        }
    }
}

/// Which rule produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionReason {
    ImmediateWin,
    Block,
    Center,
    Random,
    Search,
}

/// A chosen column along with how it was found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub column: usize,
    pub reason: SelectionReason,
    /// Search score of the chosen column (hard mode only)
    pub score: Option<f64>,
    /// Search nodes visited for this decision
    pub nodes: u64,
}

impl Selection {
    fn tactical(column: usize, reason: SelectionReason) -> Self {
        Selection {
            column,
            reason,
            score: None,
            nodes: 0,
        }
    }
}

/// Picks columns for the computer player.
pub struct MoveSelector {
    searcher: Searcher,
    hard_depth: usize,
    rng: StdRng,
}

impl MoveSelector {
    /// Plies searched by the hard difficulty, counting the candidate move itself.
    pub const DEFAULT_HARD_DEPTH: usize = 6;

    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Selector whose easy-mode randomness is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        MoveSelector {
            searcher: Searcher::new(),
            hard_depth: Self::DEFAULT_HARD_DEPTH,
            rng,
        }
    }

    pub fn from_config(config: &AiConfig) -> Self {
        let selector = match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        };
        MoveSelector {
            searcher: Searcher::new().with_move_ordering(config.move_ordering),
            ..selector
        }
        .with_hard_depth(config.hard_depth)
    }

    pub fn with_hard_depth(mut self, depth: usize) -> Self {
        self.hard_depth = depth.max(1);
        self
    }

    pub fn hard_depth(&self) -> usize {
        self.hard_depth
    }

    /// Column to play for `player`.
    pub fn select_move(
        &mut self,
        board: &Board,
        player: Player,
        difficulty: Difficulty,
    ) -> Result<usize, SelectError> {
        self.select(board, player, difficulty).map(|s| s.column)
    }

    /// Like [`select_move`](Self::select_move), also reporting which rule decided.
    pub fn select(
        &mut self,
        board: &Board,
        player: Player,
        difficulty: Difficulty,
    ) -> Result<Selection, SelectError> {
        let valid = board.valid_columns();
        if valid.is_empty() {
            return Err(SelectError::NoValidMoves);
        }

        let selection = if let Some(col) = immediate_win(board, player) {
            Selection::tactical(col, SelectionReason::ImmediateWin)
        } else if let Some(col) = immediate_win(board, player.other()) {
            Selection::tactical(col, SelectionReason::Block)
        } else {
            match difficulty {
                Difficulty::Easy => self.easy_move(&valid),
                Difficulty::Hard => self.hard_move(board, player, &valid),
            }
        };

        debug!(
            player = player.name(),
            %difficulty,
            column = selection.column,
            reason = ?selection.reason,
            nodes = selection.nodes,
            "selected move"
        );
        Ok(selection)
    }

    fn easy_move(&mut self, valid: &[usize]) -> Selection {
        if valid.contains(&CENTER_COL) {
            return Selection::tactical(CENTER_COL, SelectionReason::Center);
        }
        let idx = self.rng.random_range(0..valid.len());
        Selection::tactical(valid[idx], SelectionReason::Random)
    }

    fn hard_move(&mut self, board: &Board, player: Player, valid: &[usize]) -> Selection {
        self.searcher.reset_stats();
        let ordered = center_first(valid);
        let mut best_col = ordered[0];
        let mut best_score = f64::NEG_INFINITY;

        for col in ordered {
            let Ok((child, _)) = board.drop(col, player) else {
                continue;
            };
            // The candidate itself is the maximizing ply; the opponent replies next.
            let score = self.searcher.minimax(
                &child,
                self.hard_depth - 1,
                f64::NEG_INFINITY,
                f64::INFINITY,
                false,
                player,
            );
            trace!(column = col, score, "candidate searched");
            if score > best_score {
                best_score = score;
                best_col = col;
            }
        }

        Selection {
            column: best_col,
            reason: SelectionReason::Search,
            score: Some(best_score),
            nodes: self.searcher.stats().nodes,
        }
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// First column (ascending) where `player` completes a line at once.
pub fn immediate_win(board: &Board, player: Player) -> Option<usize> {
    board.valid_columns().into_iter().find(|&col| {
        board
            .drop(col, player)
            .is_ok_and(|(next, _)| next.check_win(player).is_some())
    })
}

/// Column to play for `player` with a freshly seeded selector.
pub fn select_move(board: &Board, player: Player, difficulty: Difficulty) -> Result<usize, SelectError> {
    MoveSelector::new().select_move(board, player, difficulty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &str) -> Board {
        rows.parse().unwrap()
    }

    #[test]
    fn difficulty_parses_and_displays() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("medium".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }

    #[test]
    fn full_board_has_no_move() {
        let full = board(
            "
            RRYYRRY
            YYRRYYR
            RRYYRRY
            YYRRYYR
            RRYYRRY
            YYRRYYR
        ",
        );
        let mut selector = MoveSelector::with_seed(1);
        for difficulty in [Difficulty::Easy, Difficulty::Hard] {
            assert_eq!(
                selector.select_move(&full, Player::Red, difficulty),
                Err(SelectError::NoValidMoves)
            );
        }
    }

    #[test]
    fn immediate_win_prefers_lowest_column() {
        // Red completes a line in column 0 (vertical) or column 4 (horizontal)
        let b = board(
            "
            .......
            .......
            R......
            R......
            R......
            YRRR...
        ",
        );
        assert_eq!(immediate_win(&b, Player::Red), Some(0));
        assert_eq!(immediate_win(&b, Player::Yellow), None);
    }

    #[test]
    fn easy_takes_center_when_quiet() {
        let mut selector = MoveSelector::with_seed(7);
        let selection = selector
            .select(&Board::new(), Player::Red, Difficulty::Easy)
            .unwrap();
        assert_eq!(selection.column, CENTER_COL);
        assert_eq!(selection.reason, SelectionReason::Center);
    }

    #[test]
    fn easy_random_fallback_is_legal_and_seeded() {
        let mut b = Board::new();
        for _ in 0..3 {
            b.drop_piece(CENTER_COL, Player::Red).unwrap();
            b.drop_piece(CENTER_COL, Player::Yellow).unwrap();
        }
        let valid = b.valid_columns();
        assert!(!valid.contains(&CENTER_COL));

        let picks = |seed| {
            let mut selector = MoveSelector::with_seed(seed);
            (0..20)
                .map(|_| selector.select(&b, Player::Red, Difficulty::Easy).unwrap())
                .collect::<Vec<_>>()
        };
        let first = picks(42);
        assert!(first.iter().all(|s| valid.contains(&s.column)));
        assert!(first.iter().all(|s| s.reason == SelectionReason::Random));
        assert_eq!(first, picks(42));
    }

    #[test]
    fn hard_reports_search_details() {
        let mut selector = MoveSelector::with_seed(0).with_hard_depth(3);
        let selection = selector
            .select(&Board::new(), Player::Red, Difficulty::Hard)
            .unwrap();
        assert_eq!(selection.reason, SelectionReason::Search);
        assert!(selection.score.is_some());
        assert!(selection.nodes > 0);
    }

    #[test]
    fn hard_opening_is_center() {
        let mut selector = MoveSelector::with_seed(0).with_hard_depth(4);
        assert_eq!(
            selector.select_move(&Board::new(), Player::Red, Difficulty::Hard),
            Ok(CENTER_COL)
        );
    }

    #[test]
    fn hard_depth_is_clamped_to_one() {
        let selector = MoveSelector::with_seed(0).with_hard_depth(0);
        assert_eq!(selector.hard_depth(), 1);
    }

    #[test]
    fn from_config_applies_settings() {
        let config = AiConfig {
            hard_depth: 3,
            move_ordering: false,
            seed: Some(9),
        };
        let selector = MoveSelector::from_config(&config);
        assert_eq!(selector.hard_depth(), 3);
    }
}
