//! Per-player field: the own-fleet map and the shot-history radar.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::BoardError;
use crate::config::BoardSize;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Water,
    Hit,
    Ship,
}

impl Cell {
    /// Symbol used when drawing the cell.
    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => '~',
            Cell::Water => 'O',
            Cell::Hit => 'X',
            Cell::Ship => 'S',
        }
    }
}

/// A `length × width` grid of [`Cell`]s.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell empty.
    pub fn new(size: BoardSize) -> Self {
        Grid {
            size,
            cells: vec![Cell::Empty; size.area()],
        }
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Cell at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, BoardError> {
        Ok(self.cells[self.size.index(x, y)?])
    }

    /// Returns `true` if (x, y) has not been written yet.
    pub fn is_empty(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        Ok(self.get(x, y)? == Cell::Empty)
    }

    pub fn set_water(&mut self, x: usize, y: usize) -> Result<(), BoardError> {
        self.set(x, y, Cell::Water)
    }

    pub fn set_hit(&mut self, x: usize, y: usize) -> Result<(), BoardError> {
        self.set(x, y, Cell::Hit)
    }

    pub fn set_ship(&mut self, x: usize, y: usize) -> Result<(), BoardError> {
        self.set(x, y, Cell::Ship)
    }

    fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), BoardError> {
        let idx = self.size.index(x, y)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Number of cells currently holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Cells of row `y`, ordered by `x`.
    pub fn row(&self, y: usize) -> Result<impl Iterator<Item = Cell> + '_, BoardError> {
        if y >= self.size.width() {
            return Err(BoardError::IndexOutOfBounds { x: 0, y });
        }
        Ok((0..self.size.length()).map(move |x| self.cells[x * self.size.width() + y]))
    }

    /// Returns `true` if the grid holds exactly one cell per coordinate of `size`.
    pub(crate) fn is_consistent(&self, size: BoardSize) -> bool {
        self.size == size && self.cells.len() == size.area()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}x{}>:", self.size.length(), self.size.width())?;
        for y in 0..self.size.width() {
            for cell in self.row(y).map_err(|_| fmt::Error)? {
                write!(f, "{} ", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A player's field: `map` shows the own fleet and incoming damage,
/// `radar` records shots fired at the opponent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    size: BoardSize,
    map: Grid,
    radar: Grid,
}

impl Board {
    /// Create a board with both grids empty.
    pub fn new(size: BoardSize) -> Self {
        Board {
            size,
            map: Grid::new(size),
            radar: Grid::new(size),
        }
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Bounds check.
    pub fn is_on_board(&self, x: usize, y: usize) -> bool {
        self.size.contains(x, y)
    }

    pub fn map(&self) -> &Grid {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut Grid {
        &mut self.map
    }

    pub fn radar(&self) -> &Grid {
        &self.radar
    }

    pub fn radar_mut(&mut self) -> &mut Grid {
        &mut self.radar
    }
}
