//! Depth-bounded minimax with alpha-beta pruning.
//!
//! Every node owns its own copy of the board, so the caller's board is never
//! touched and sibling branches never observe each other's moves. Scores are
//! always from the point of view of a fixed perspective player; maximizing
//! nodes are the ones where that player is to move.

use crate::game::{Board, LegalColumns, Player, CENTER_COL};

use super::heuristic::{ConnectFourHeuristic, Heuristic, SCORE_WIN};

/// Base score of a decided game. Scaled by remaining depth + 1 so quicker
/// wins and slower losses rank higher.
pub const WIN_SCORE: f64 = SCORE_WIN;

/// Node counters collected during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, leaves included
    pub nodes: u64,
    /// Times the remaining siblings of a node were skipped
    pub cutoffs: u64,
}

/// Minimax searcher with alpha-beta pruning.
pub struct Searcher {
    heuristic: Box<dyn Heuristic>,
    move_ordering: bool,
    stats: SearchStats,
}

impl Searcher {
    pub fn new() -> Self {
        Searcher::with_heuristic(Box::new(ConnectFourHeuristic))
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic>) -> Self {
        Searcher {
            heuristic,
            move_ordering: true,
            stats: SearchStats::default(),
        }
    }

    /// Try center columns first inside the tree. Changes the cost of a
    /// search, never its value.
    pub fn with_move_ordering(mut self, enabled: bool) -> Self {
        self.move_ordering = enabled;
        self
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Score `board` for `perspective`, looking `depth` plies ahead.
    ///
    /// `maximizing` is true when `perspective` is the side to move. Pass
    /// `f64::NEG_INFINITY` / `f64::INFINITY` as the initial window.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
        perspective: Player,
    ) -> f64 {
        self.stats.nodes += 1;

        if let Some(score) = terminal_score(board, depth, perspective) {
            return score;
        }
        if depth == 0 {
            return self.heuristic.evaluate(board, perspective);
        }

        let to_move = if maximizing {
            perspective
        } else {
            perspective.other()
        };
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for col in self.candidates(board) {
            let Ok((child, _)) = board.drop(col, to_move) else {
                continue;
            };
            let score = self.minimax(&child, depth - 1, alpha, beta, !maximizing, perspective);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }

    fn candidates(&self, board: &Board) -> LegalColumns {
        let columns = board.valid_columns();
        if self.move_ordering {
            center_first(&columns)
        } else {
            columns
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Score of a decided position, or `None` while the game is still open.
fn terminal_score(board: &Board, depth: usize, perspective: Player) -> Option<f64> {
    let scale = (depth + 1) as f64;
    if board.check_win(perspective).is_some() {
        Some(WIN_SCORE * scale)
    } else if board.check_win(perspective.other()).is_some() {
        Some(-WIN_SCORE * scale)
    } else if board.is_full() {
        Some(0.0)
    } else {
        None
    }
}

/// Reorder columns by distance from the center column. Equal distances keep
/// their incoming (ascending) order.
pub fn center_first(columns: &[usize]) -> LegalColumns {
    let mut ordered = columns.to_vec();
    ordered.sort_by_key(|&col| col.abs_diff(CENTER_COL));
    ordered
}

/// One-off search with the default heuristic.
pub fn minimax(
    board: &Board,
    depth: usize,
    alpha: f64,
    beta: f64,
    maximizing: bool,
    perspective: Player,
) -> f64 {
    Searcher::new().minimax(board, depth, alpha, beta, maximizing, perspective)
}
