//! Computer player: position heuristic, minimax search and the difficulty
//! policy that turns them into a move.

mod agent;
pub mod heuristic;
pub mod minimax;
mod random;
mod selector;

pub use agent::{Agent, MinimaxAgent};
pub use heuristic::{evaluate, ConnectFourHeuristic, Heuristic};
pub use minimax::{center_first, minimax, SearchStats, Searcher, WIN_SCORE};
pub use random::RandomAgent;
pub use selector::{
    immediate_win, select_move, Difficulty, MoveSelector, Selection, SelectionReason,
};
