//! Game board: grid storage and the column-drop rule.

use core::fmt;

use crate::error::GameError;
use crate::player::Player;

/// Default number of columns.
pub const DEFAULT_WIDTH: usize = 7;
/// Default number of rows.
pub const DEFAULT_HEIGHT: usize = 6;
/// Largest number of slots a board may have.
pub const MAX_CELLS: usize = 1 << 20;

/// Content of a single slot of the board.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The occupant, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Occupied(player) => Some(player),
        }
    }
}

/// Coordinate of a slot. Row 0 is the top of the board.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Gameboard.
///
/// Cells are stored row-major. Technical indices correspond to the logical
/// indices: `(row=0, col=0)` is the top left slot, pieces settle at the
/// largest free row index of a column.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Gameboard {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Default for Gameboard {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![Cell::Empty; DEFAULT_WIDTH * DEFAULT_HEIGHT],
        }
    }
}

impl Gameboard {
    /// Creates an empty board.
    ///
    /// Fails with [`GameError::InvalidDimensions`] if a dimension is zero or
    /// the board would exceed [`MAX_CELLS`] slots.
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        let len = Self::cell_count(width, height)?;

        Ok(Self {
            width,
            height,
            cells: vec![Cell::Empty; len],
        })
    }

    /// Number of slots of a `width` x `height` board, if it is a valid size.
    pub(crate) fn cell_count(width: usize, height: usize) -> Result<usize, GameError> {
        width
            .checked_mul(height)
            .filter(|&len| len > 0 && len <= MAX_CELLS)
            .ok_or(GameError::InvalidDimensions { width, height })
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the occupant of `(row, column)`, or `None` if the coordinate is
    /// outside of the board.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        self.index(row, column).map(|idx| self.cells[idx])
    }

    #[must_use]
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.get(position.row, position.column)
    }

    /// Iterates the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    fn index(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.height && column < self.width).then_some(row * self.width + column)
    }

    fn check_column(&self, column: usize) -> Result<(), GameError> {
        if column >= self.width {
            return Err(GameError::ColumnOutOfRange {
                column,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Returns the row a piece dropped into `column` would land in.
    ///
    /// Returns `Ok(None)` if there are no more free slots.
    pub fn find_landing_row(&self, column: usize) -> Result<Option<usize>, GameError> {
        self.check_column(column)?;
        Ok((0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + column].is_empty()))
    }

    /// Emits the column indices where moves are legal.
    pub fn available_columns_iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.width).filter(|&column| self.cells[column].is_empty())
    }

    /// Returns the number of free slots in the given column, `0` for columns
    /// outside of the board.
    #[must_use]
    pub fn free_slots_in_column(&self, column: usize) -> usize {
        match self.find_landing_row(column) {
            Ok(Some(row)) => row + 1,
            _ => 0,
        }
    }

    #[must_use]
    pub fn free_slots_in_total(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Returns whether every slot is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Drops a piece of `player` into `column` and returns where it landed.
    ///
    /// The board is left untouched on error.
    pub fn insert(&mut self, column: usize, player: Player) -> Result<Position, GameError> {
        let row = self
            .find_landing_row(column)?
            .ok_or(GameError::ColumnFull { column })?;

        self.cells[row * self.width + column] = Cell::Occupied(player);
        Ok(Position::new(row, column))
    }

    /// Builds a board from a picture, one string per row from top to bottom.
    /// `X` is player 1, `O` is player 2, anything else is empty. Gravity is
    /// not enforced.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows[0].len();
        let cells = rows
            .iter()
            .flat_map(|row| {
                assert_eq!(row.len(), width);
                row.chars().map(|c| match c {
                    'X' => Cell::Occupied(Player::Player1),
                    'O' => Cell::Occupied(Player::Player2),
                    _ => Cell::Empty,
                })
            })
            .collect();

        Self {
            width,
            height,
            cells,
        }
    }
}
