use std::fmt;
use std::str::FromStr;

use super::line::{Direction, Position, WinningLine, WINNING_LENGTH};
use super::Player;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CENTER_COL: usize = COLS / 2;

/// Open columns in ascending order. Never longer than `COLS`.
pub type LegalColumns = Vec<usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Lowest empty row of a column, or `None` if the column is full or out of range.
    pub fn available_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Columns whose top cell is empty, ascending.
    pub fn valid_columns(&self) -> LegalColumns {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a piece in a column in place, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        let row = self.available_row(col).ok_or(MoveError::ColumnFull(col))?;
        self.cells[row][col] = player.to_cell();
        Ok(row)
    }

    /// Drop a piece into a copy of this board, leaving `self` untouched.
    /// Returns the new board and the row where the piece landed.
    pub fn drop(&self, col: usize, player: Player) -> Result<(Board, usize), MoveError> {
        let mut next = *self;
        let row = next.drop_piece(col, player)?;
        Ok((next, row))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    pub fn is_empty(&self) -> bool {
        self.cells[ROWS - 1].iter().all(|&c| c == Cell::Empty)
    }

    /// Number of cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Find a four-in-a-row for `player`.
    ///
    /// Every cell is tried as a line start in row-major order, and for each
    /// cell the directions are tried in [`Direction::ALL`] order. The first
    /// line found is returned, so boards holding several lines always report
    /// the same one.
    pub fn check_win(&self, player: Player) -> Option<WinningLine> {
        let cell = player.to_cell();
        for row in 0..ROWS {
            for col in 0..COLS {
                if self.cells[row][col] != cell {
                    continue;
                }
                for direction in Direction::ALL {
                    if let Some(line) = self.line_from(row, col, direction, cell) {
                        return Some(line);
                    }
                }
            }
        }
        None
    }

    /// True when the board is full and neither player has four in a row.
    pub fn check_draw(&self) -> bool {
        self.is_full()
            && self.check_win(Player::Red).is_none()
            && self.check_win(Player::Yellow).is_none()
    }

    fn line_from(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
        cell: Cell,
    ) -> Option<WinningLine> {
        let (dr, dc) = direction.delta();
        let mut cells = [Position::new(row, col); WINNING_LENGTH];
        for (i, slot) in cells.iter_mut().enumerate() {
            let r = row.checked_add_signed(dr * i as isize)?;
            let c = col.checked_add_signed(dc * i as isize)?;
            if r >= ROWS || c >= COLS || self.cells[r][c] != cell {
                return None;
            }
            *slot = Position::new(r, c);
        }
        Some(WinningLine { direction, cells })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let header: Vec<String> = (1..=COLS).map(|c| c.to_string()).collect();
        write!(f, "{}", header.join(" "))
    }
}

/// Parses `ROWS` lines of `COLS` symbols (`.`, `R`, `Y`), top row first.
/// Whitespace inside a line is ignored. Boards with floating tokens are rejected.
impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if rows.len() != ROWS {
            return Err(format!("expected {ROWS} rows, found {}", rows.len()));
        }

        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != COLS {
                return Err(format!(
                    "row {row}: expected {COLS} cells, found {}",
                    symbols.len()
                ));
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                board.cells[row][col] = match symbol {
                    '.' => Cell::Empty,
                    'R' | 'r' => Cell::Red,
                    'Y' | 'y' => Cell::Yellow,
                    other => return Err(format!("row {row}: unknown cell '{other}'")),
                };
            }
        }

        for col in 0..COLS {
            for row in 0..ROWS - 1 {
                if board.cells[row][col] != Cell::Empty && board.cells[row + 1][col] == Cell::Empty
                {
                    return Err(format!("column {col}: token floating above an empty cell"));
                }
            }
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert!(board.is_empty());
        assert_eq!(board.valid_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        // Drop first piece in column 3
        let row = board.drop_piece(3, Player::Red).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Red);

        // Drop second piece in same column
        let row = board.drop_piece(3, Player::Yellow).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::Yellow);
    }

    #[test]
    fn test_drop_leaves_input_untouched() {
        let board = Board::new();
        let (next, row) = board.drop(2, Player::Red).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board, Board::new());
        assert_eq!(next.get(5, 2), Cell::Red);
        assert_eq!(next.count(Cell::Red), 1);
        assert_eq!(next.count(Cell::Empty), ROWS * COLS - 1);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        // Fill column 0
        for _ in 0..ROWS {
            board.drop_piece(0, Player::Red).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.available_row(0), None);
        assert_eq!(
            board.drop_piece(0, Player::Yellow),
            Err(MoveError::ColumnFull(0))
        );
        assert!(!board.valid_columns().contains(&0));
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(
            board.drop_piece(7, Player::Red),
            Err(MoveError::InvalidColumn(7))
        );
        assert_eq!(board.drop(99, Player::Red), Err(MoveError::InvalidColumn(99)));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Player::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.valid_columns().is_empty());
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        // Create horizontal line at bottom row
        for col in 0..4 {
            board.drop_piece(col, Player::Red).unwrap();
        }
        let line = board.check_win(Player::Red).unwrap();
        assert_eq!(line.direction, Direction::Horizontal);
        assert_eq!(line.start(), Position::new(5, 0));
        assert!(board.check_win(Player::Yellow).is_none());
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        // Create vertical line in column 3
        for _ in 0..4 {
            board.drop_piece(3, Player::Yellow).unwrap();
        }
        let line = board.check_win(Player::Yellow).unwrap();
        assert_eq!(line.direction, Direction::Vertical);
        assert_eq!(
            line.cells,
            [
                Position::new(2, 3),
                Position::new(3, 3),
                Position::new(4, 3),
                Position::new(5, 3)
            ]
        );
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // Create diagonal / pattern
        board.drop_piece(0, Player::Red).unwrap();

        board.drop_piece(1, Player::Yellow).unwrap();
        board.drop_piece(1, Player::Red).unwrap();

        board.drop_piece(2, Player::Yellow).unwrap();
        board.drop_piece(2, Player::Yellow).unwrap();
        board.drop_piece(2, Player::Red).unwrap();

        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Red).unwrap();

        let line = board.check_win(Player::Red).unwrap();
        assert_eq!(line.direction, Direction::DiagonalUp);
        // Lines running up-right are reported from their bottom-left end
        assert_eq!(
            line.cells,
            [
                Position::new(5, 0),
                Position::new(4, 1),
                Position::new(3, 2),
                Position::new(2, 3)
            ]
        );
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        // Create diagonal \ pattern
        board.drop_piece(6, Player::Red).unwrap();

        board.drop_piece(5, Player::Yellow).unwrap();
        board.drop_piece(5, Player::Red).unwrap();

        board.drop_piece(4, Player::Yellow).unwrap();
        board.drop_piece(4, Player::Yellow).unwrap();
        board.drop_piece(4, Player::Red).unwrap();

        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Red).unwrap();

        let line = board.check_win(Player::Red).unwrap();
        assert_eq!(line.direction, Direction::DiagonalDown);
        assert_eq!(line.start(), Position::new(2, 3));
        assert!(line.contains(Position::new(5, 6)));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Player::Red).unwrap();
        }
        assert!(board.check_win(Player::Red).is_none());
    }

    #[test]
    fn test_first_line_reported_when_several_exist() {
        // Five in a row on the bottom: the line starting at column 0 wins the scan
        let board: Board = "
            .......
            .......
            .......
            .......
            YYYY...
            RRRRR..
        "
        .parse()
        .unwrap();
        let line = board.check_win(Player::Red).unwrap();
        assert_eq!(line.start(), Position::new(5, 0));
        let line = board.check_win(Player::Yellow).unwrap();
        assert_eq!(line.start(), Position::new(4, 0));
    }

    #[test]
    fn test_draw_requires_full_board_without_line() {
        let board: Board = "
            RRYYRRY
            YYRRYYR
            RRYYRRY
            YYRRYYR
            RRYYRRY
            YYRRYYR
        "
        .parse()
        .unwrap();
        assert!(board.is_full());
        assert!(board.check_win(Player::Red).is_none());
        assert!(board.check_win(Player::Yellow).is_none());
        assert!(board.check_draw());

        let mut partial = Board::new();
        partial.drop_piece(0, Player::Red).unwrap();
        assert!(!partial.check_draw());
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let board: Board = "
            RRYYRRY
            YYRRYYR
            RRYYRRY
            YYRRYYR
            RRYYRRY
            RRRRYYR
        "
        .parse()
        .unwrap();
        assert!(board.is_full());
        assert!(board.check_win(Player::Red).is_some());
        assert!(!board.check_draw());
    }

    #[test]
    fn test_parse_rejects_floating_tokens() {
        let err = "
            .......
            .......
            .......
            .......
            ...R...
            .......
        "
        .parse::<Board>()
        .unwrap_err();
        assert!(err.contains("floating"), "{err}");
    }

    #[test]
    fn test_display_roundtrip() {
        let mut board = Board::new();
        board.drop_piece(3, Player::Red).unwrap();
        board.drop_piece(3, Player::Yellow).unwrap();
        let text = board.to_string();
        assert!(text.ends_with("1 2 3 4 5 6 7"));
        let body: String = text.lines().take(ROWS).collect::<Vec<_>>().join("\n");
        assert_eq!(body.parse::<Board>().unwrap(), board);
    }
}
