/// Number of aligned tokens needed to win.
pub const WINNING_LENGTH: usize = 4;

/// A cell coordinate. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

/// The four line directions, in the order win detection scans them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right (-)
    Horizontal,
    /// Top to bottom (|)
    Vertical,
    /// Top-left to bottom-right (\)
    DiagonalDown,
    /// Bottom-left to top-right (/)
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// Row and column step taken from one cell of a line to the next.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
        }
    }
}

/// Four contiguous cells held by the same player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub direction: Direction,
    pub cells: [Position; WINNING_LENGTH],
}

impl WinningLine {
    /// First cell of the line (the scan start).
    pub fn start(&self) -> Position {
        self.cells[0]
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}
