use crate::game::{Board, Cell, Direction, Player, CENTER_COL, COLS, ROWS, WINNING_LENGTH};

/// Score of a completed line. Also the base of terminal scores in the search.
pub const SCORE_WIN: f64 = 100_000.0;
pub const SCORE_THREE: f64 = 100.0;
pub const SCORE_TWO: f64 = 10.0;
pub const SCORE_CENTER: f64 = 3.0;
/// Opponent threes weigh more than our own: they are a loss next move.
pub const BLOCK_WEIGHT: f64 = 1.5;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> f64;
}

/// Default heuristic: center column bonus plus a sum over every 4-cell window.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectFourHeuristic;

impl ConnectFourHeuristic {
    fn score_window(own: usize, opp: usize, empty: usize) -> f64 {
        match (own, opp, empty) {
            (4, _, _) => SCORE_WIN,
            (_, 4, _) => -SCORE_WIN,
            (3, 0, 1) => SCORE_THREE,
            (0, 3, 1) => -SCORE_THREE * BLOCK_WEIGHT,
            (2, 0, 2) => SCORE_TWO,
            (0, 2, 2) => -SCORE_TWO,
            _ => 0.0,
        }
    }
}

impl Heuristic for ConnectFourHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();

        // Center column bonus
        let center = (0..ROWS)
            .filter(|&row| board.get(row, CENTER_COL) == own_cell)
            .count();
        let mut score = center as f64 * SCORE_CENTER;

        for direction in Direction::ALL {
            let (dr, dc) = direction.delta();
            for row in 0..ROWS {
                for col in 0..COLS {
                    let Some(cells) = window(row, col, dr, dc) else {
                        continue;
                    };
                    let (mut own, mut opp, mut empty) = (0, 0, 0);
                    for (r, c) in cells {
                        match board.get(r, c) {
                            Cell::Empty => empty += 1,
                            cell if cell == own_cell => own += 1,
                            cell if cell == opp_cell => opp += 1,
                            _ => {}
                        }
                    }
                    score += Self::score_window(own, opp, empty);
                }
            }
        }

        score
    }
}

/// Cells of the window starting at (row, col), or `None` if it leaves the board.
fn window(row: usize, col: usize, dr: isize, dc: isize) -> Option<[(usize, usize); WINNING_LENGTH]> {
    let mut cells = [(row, col); WINNING_LENGTH];
    for (i, slot) in cells.iter_mut().enumerate() {
        let r = row.checked_add_signed(dr * i as isize)?;
        let c = col.checked_add_signed(dc * i as isize)?;
        if r >= ROWS || c >= COLS {
            return None;
        }
        *slot = (r, c);
    }
    Some(cells)
}

/// Evaluate `board` for `perspective` with the default heuristic.
pub fn evaluate(board: &Board, perspective: Player) -> f64 {
    ConnectFourHeuristic.evaluate(board, perspective)
}
