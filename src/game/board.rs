use std::fmt;

pub const SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Character used when drawing the board
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// A zero-indexed (row, column) position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Convert 1-indexed user coordinates, rejecting anything outside 1..=3
    pub fn from_one_based(row: i64, col: i64) -> Option<Self> {
        let range = 1..=SIZE as i64;
        if range.contains(&row) && range.contains(&col) {
            Some(Move::new((row - 1) as usize, (col - 1) as usize))
        } else {
            None
        }
    }
}

/// Shown 1-indexed, the way the player typed it.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    OutOfBounds,
    CellOccupied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row][mv.col]
    }

    pub fn is_empty_at(&self, mv: Move) -> bool {
        self.get(mv) == Cell::Empty
    }

    /// Write a mark into an empty cell. Marked cells never change again.
    pub fn place(&mut self, mv: Move, cell: Cell) -> Result<(), PlaceError> {
        if mv.row >= SIZE || mv.col >= SIZE {
            return Err(PlaceError::OutOfBounds);
        }
        if !self.is_empty_at(mv) {
            return Err(PlaceError::CellOccupied);
        }
        self.cells[mv.row][mv.col] = cell;
        Ok(())
    }

    /// All empty positions in row-major order
    pub fn empty_cells(&self) -> Vec<Move> {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| Move::new(row, col)))
            .filter(|&mv| self.is_empty_at(mv))
            .collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&c| c != Cell::Empty)
    }

    /// True if `cell` fills any row, column or diagonal.
    pub fn has_won(&self, cell: Cell) -> bool {
        if cell == Cell::Empty {
            return false;
        }
        let c = &self.cells;
        let rows = (0..SIZE).any(|r| (0..SIZE).all(|i| c[r][i] == cell));
        let cols = (0..SIZE).any(|col| (0..SIZE).all(|i| c[i][col] == cell));
        let diag_down = (0..SIZE).all(|i| c[i][i] == cell);
        let diag_up = (0..SIZE).all(|i| c[i][SIZE - 1 - i] == cell);
        rows || cols || diag_down || diag_up
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
            writeln!(f, "{}", line.join(" | "))?;
            writeln!(f, "{}", "-".repeat(9))?;
        }
        Ok(())
    }
}
